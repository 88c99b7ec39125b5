/// Core data types for repository queries
///
/// This module contains:
/// - HistoryOrder: explicit ordering for commit history
/// - CapturedOutput: decoded result of a captured git invocation
/// - FacadeConfig: how and where git gets invoked
use std::path::PathBuf;

/// Environment variable consulted for the git executable when `--git` is absent
pub const GIT_PROGRAM_ENV: &str = "REPO_META_GIT";

/// Default git executable, resolved through `PATH`
pub const DEFAULT_GIT_PROGRAM: &str = "git";

/// Ordering of a commit history listing
///
/// git emits history newest-first; `OldestFirst` reverses that in-process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum HistoryOrder {
    #[default]
    NewestFirst,
    OldestFirst,
}

impl HistoryOrder {
    /// Reorder a newest-first list of hashes into this order
    pub fn apply(self, mut newest_first: Vec<String>) -> Vec<String> {
        if self == HistoryOrder::OldestFirst {
            newest_first.reverse();
        }
        newest_first
    }
}

/// Output of a git invocation whose streams were captured
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedOutput {
    /// Exit code, `None` if the process was killed by a signal
    pub code: Option<i32>,
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl CapturedOutput {
    /// Successful output with the given stdout
    pub fn ok(stdout: impl Into<String>) -> Self {
        CapturedOutput { code: Some(0), success: true, stdout: stdout.into(), stderr: String::new() }
    }

    /// Failed output with the given exit code and stderr
    pub fn failed(code: i32, stderr: impl Into<String>) -> Self {
        CapturedOutput { code: Some(code), success: false, stdout: String::new(), stderr: stderr.into() }
    }
}

/// Immutable configuration for the live git invoker
///
/// Everything that would otherwise be ambient process state (which git,
/// which directory, which environment) is spelled out here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacadeConfig {
    pub git_program: PathBuf,
    /// Directory git runs in; `None` means the current process directory
    pub work_dir: Option<PathBuf>,
    /// Extra environment variables set on every invocation
    pub envs: Vec<(String, String)>,
}

impl Default for FacadeConfig {
    fn default() -> Self {
        FacadeConfig { git_program: PathBuf::from(DEFAULT_GIT_PROGRAM), work_dir: None, envs: Vec::new() }
    }
}

impl FacadeConfig {
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        FacadeConfig { work_dir: Some(dir.into()), ..FacadeConfig::default() }
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.envs.push((key.into(), value.into()));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hashes(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_default_order_is_newest_first() {
        assert_eq!(HistoryOrder::default(), HistoryOrder::NewestFirst);
    }

    #[test]
    fn test_apply_keeps_native_order() {
        let list = hashes(&["c3", "c2", "c1"]);
        assert_eq!(HistoryOrder::NewestFirst.apply(list.clone()), list);
    }

    #[test]
    fn test_apply_reverses_for_oldest_first() {
        let list = hashes(&["c3", "c2", "c1"]);
        assert_eq!(HistoryOrder::OldestFirst.apply(list), hashes(&["c1", "c2", "c3"]));
    }

    #[test]
    fn test_config_builders() {
        let config = FacadeConfig::in_dir("/tmp/repo").with_env("GIT_PAGER", "cat");
        assert_eq!(config.git_program, PathBuf::from("git"));
        assert_eq!(config.work_dir, Some(PathBuf::from("/tmp/repo")));
        assert_eq!(config.envs, vec![("GIT_PAGER".to_string(), "cat".to_string())]);
    }
}
