/// Git process invocation
///
/// This module handles:
/// - Spawning the git executable with an explicit argv (never through a shell)
/// - The three stream policies: captured, discarded, inherited
/// - Converting process failures into `GitError`
use crate::error::GitError;
use crate::types::{CapturedOutput, FacadeConfig};
use log::debug;
use std::process::{Command, Stdio};

/// Seam between the facade and the git executable
///
/// The live implementation is `CommandInvoker`; tests substitute a stub.
pub trait GitInvoker {
    /// Run git with stdout and stderr piped back to the caller
    fn capture(&self, args: &[&str]) -> Result<CapturedOutput, GitError>;

    /// Run git with both streams sent to the null device, reporting only exit success
    fn probe(&self, args: &[&str]) -> Result<bool, GitError>;

    /// Run git with both streams inherited from this process
    fn passthrough(&self, args: &[&str]) -> Result<(), GitError>;
}

impl<T: GitInvoker + ?Sized> GitInvoker for &T {
    fn capture(&self, args: &[&str]) -> Result<CapturedOutput, GitError> {
        (**self).capture(args)
    }

    fn probe(&self, args: &[&str]) -> Result<bool, GitError> {
        (**self).probe(args)
    }

    fn passthrough(&self, args: &[&str]) -> Result<(), GitError> {
        (**self).passthrough(args)
    }
}

/// Invokes a real git executable according to a `FacadeConfig`
#[derive(Debug, Clone)]
pub struct CommandInvoker {
    config: FacadeConfig,
}

impl CommandInvoker {
    pub fn new(config: FacadeConfig) -> Self {
        CommandInvoker { config }
    }

    pub fn config(&self) -> &FacadeConfig {
        &self.config
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(&self.config.git_program);
        cmd.args(args);

        if let Some(ref dir) = self.config.work_dir {
            cmd.current_dir(dir);
        }

        for (key, value) in &self.config.envs {
            cmd.env(key, value);
        }

        debug!("running git: {:?}", cmd);
        cmd
    }

    fn spawn_error(&self, source: std::io::Error) -> GitError {
        GitError::Spawn { program: self.config.git_program.clone(), source }
    }
}

impl Default for CommandInvoker {
    fn default() -> Self {
        CommandInvoker::new(FacadeConfig::default())
    }
}

impl GitInvoker for CommandInvoker {
    fn capture(&self, args: &[&str]) -> Result<CapturedOutput, GitError> {
        let output = self
            .command(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| self.spawn_error(e))?;

        let stdout = String::from_utf8(output.stdout).map_err(|_| GitError::InvalidUtf8 { args: args.join(" ") })?;
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        debug!("git {} -> {:?}", args.join(" "), output.status);

        Ok(CapturedOutput { code: output.status.code(), success: output.status.success(), stdout, stderr })
    }

    fn probe(&self, args: &[&str]) -> Result<bool, GitError> {
        // The null handles are owned by the Command and closed when it drops,
        // including when spawning fails.
        let status = self
            .command(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| self.spawn_error(e))?;

        debug!("git {} -> {:?}", args.join(" "), status);
        Ok(status.success())
    }

    fn passthrough(&self, args: &[&str]) -> Result<(), GitError> {
        let status = self
            .command(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| self.spawn_error(e))?;

        if status.success() {
            Ok(())
        } else {
            // Diagnostics already went straight to the terminal
            Err(GitError::Exit { args: args.join(" "), code: status.code(), stderr: String::new() })
        }
    }
}

/// Check whether the configured git executable can be started at all
pub fn is_git_available(config: &FacadeConfig) -> bool {
    CommandInvoker::new(config.clone()).probe(&["--version"]).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn missing_git() -> CommandInvoker {
        CommandInvoker::new(FacadeConfig {
            git_program: PathBuf::from("/nonexistent/bin/git-does-not-exist"),
            ..FacadeConfig::default()
        })
    }

    #[test]
    fn test_capture_reports_spawn_failure() {
        let err = missing_git().capture(&["log"]).unwrap_err();
        assert!(matches!(err, GitError::Spawn { .. }), "unexpected error: {:?}", err);
    }

    #[test]
    fn test_probe_reports_spawn_failure() {
        assert!(matches!(missing_git().probe(&["rev-parse", "--git-dir"]), Err(GitError::Spawn { .. })));
    }

    #[test]
    fn test_passthrough_reports_spawn_failure() {
        assert!(matches!(missing_git().passthrough(&["status"]), Err(GitError::Spawn { .. })));
    }

    #[test]
    fn test_missing_git_is_not_available() {
        assert!(!is_git_available(missing_git().config()));
    }

    #[test]
    fn test_passthrough_reports_exit_status() {
        if !is_git_available(&FacadeConfig::default()) {
            return;
        }

        let dir = tempfile::TempDir::new().expect("create temp dir");
        let ceiling = dir.path().parent().unwrap_or(dir.path()).display().to_string();
        let invoker =
            CommandInvoker::new(FacadeConfig::in_dir(dir.path()).with_env("GIT_CEILING_DIRECTORIES", ceiling));

        match invoker.passthrough(&["rev-parse", "--show-toplevel"]) {
            Err(GitError::Exit { args, code, stderr }) => {
                assert_eq!(args, "rev-parse --show-toplevel");
                assert_ne!(code, Some(0));
                // Inherited stream, nothing captured
                assert!(stderr.is_empty());
            }
            other => panic!("expected exit failure, got {:?}", other),
        }
    }

    #[test]
    fn test_capture_version() {
        if !is_git_available(&FacadeConfig::default()) {
            return;
        }

        let output = CommandInvoker::default().capture(&["--version"]).expect("git --version should run");
        assert!(output.success);
        assert!(output.stdout.starts_with("git version"), "stdout was {:?}", output.stdout);
    }
}
