//! Typed failures for git invocations.
//!
//! The best-effort facade methods collapse every variant into an empty,
//! absent or `false` result. The `try_*` methods hand them to the caller.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GitError {
    /// The executable could not be started (missing binary, permissions, bad cwd).
    #[error("failed to execute {}: {source}", .program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: io::Error,
    },

    /// git ran but exited unsuccessfully.
    #[error("git {args} exited with {}: {}", describe_code(.code), .stderr.trim())]
    Exit { args: String, code: Option<i32>, stderr: String },

    #[error("git {args} produced output that is not valid UTF-8")]
    InvalidUtf8 { args: String },

    /// History was readable but contained no commit hash.
    #[error("repository history contains no commits")]
    EmptyHistory,

    #[error("top-level path {} has no final component", .path.display())]
    NoTopLevel { path: PathBuf },
}

fn describe_code(code: &Option<i32>) -> String {
    match *code {
        Some(code) => format!("status {}", code),
        None => "no status (terminated by signal)".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_message_includes_trimmed_stderr() {
        let err = GitError::Exit {
            args: "log --pretty=format:%H".to_string(),
            code: Some(128),
            stderr: "fatal: not a git repository\n".to_string(),
        };
        assert_eq!(err.to_string(), "git log --pretty=format:%H exited with status 128: fatal: not a git repository");
    }

    #[test]
    fn test_exit_message_without_code() {
        let err = GitError::Exit { args: "status".to_string(), code: None, stderr: String::new() };
        assert!(err.to_string().contains("terminated by signal"));
    }

    #[test]
    fn test_spawn_error_keeps_source() {
        use std::error::Error as _;

        let err = GitError::Spawn {
            program: PathBuf::from("/no/such/git"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().starts_with("failed to execute /no/such/git"));
        assert!(err.source().is_some());
    }
}
