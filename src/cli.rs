use crate::types::HistoryOrder;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "repo-meta")]
#[command(about = "Query commit hashes, name and presence of the git repository you are in")]
#[command(version)]
pub struct CliArgs {
    /// git executable to invoke (default: $REPO_META_GIT, then `git` from PATH)
    #[arg(long = "git", global = true, value_name = "PATH")]
    pub git_program: Option<PathBuf>,

    /// Run git in this directory instead of the current one
    #[arg(long = "repo", short = 'C', global = true, value_name = "DIR")]
    pub repo_dir: Option<PathBuf>,

    /// Print query results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Report git failures as errors instead of empty results
    #[arg(long, global = true)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// List every commit hash reachable from HEAD, one per line
    History {
        #[arg(long, value_enum, default_value_t = HistoryOrder::NewestFirst)]
        order: HistoryOrder,
    },

    /// Print the hash of the oldest (root) commit
    Oldest,

    /// Print the name of the top-level directory of the working tree
    Name,

    /// Print whether the directory is inside a git repository
    Exists,

    /// Run `git <SUBCOMMAND> <ARGUMENT>` with its output shown directly
    Run {
        #[arg(allow_hyphen_values = true)]
        subcommand: String,
        /// Passed to git verbatim, flags like `-1` or `--stat` included
        #[arg(allow_hyphen_values = true)]
        argument: String,
    },
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        CliArgs::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(args).expect("arguments should parse")
    }

    #[test]
    fn test_history_defaults_to_newest_first() {
        let args = parse(&["repo-meta", "history"]);
        assert_eq!(args.command, CliCommand::History { order: HistoryOrder::NewestFirst });
        assert!(!args.json);
        assert!(!args.strict);
    }

    #[test]
    fn test_history_oldest_first() {
        let args = parse(&["repo-meta", "history", "--order", "oldest-first"]);
        assert_eq!(args.command, CliCommand::History { order: HistoryOrder::OldestFirst });
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = parse(&["repo-meta", "name", "-C", "/tmp/project", "--json", "--git", "/usr/bin/git"]);
        assert_eq!(args.command, CliCommand::Name);
        assert_eq!(args.repo_dir, Some(PathBuf::from("/tmp/project")));
        assert_eq!(args.git_program, Some(PathBuf::from("/usr/bin/git")));
        assert!(args.json);
    }

    #[test]
    fn test_run_takes_subcommand_and_argument() {
        let args = parse(&["repo-meta", "run", "log", "-1"]);
        assert_eq!(args.command, CliCommand::Run { subcommand: "log".to_string(), argument: "-1".to_string() });
    }

    #[test]
    fn test_run_accepts_flag_arguments() {
        for flag in ["--oneline", "--stat", "-n"] {
            let args = parse(&["repo-meta", "run", "log", flag]);
            assert_eq!(args.command, CliCommand::Run { subcommand: "log".to_string(), argument: flag.to_string() });
        }
    }

    #[test]
    fn test_global_flags_before_run() {
        let args = parse(&["repo-meta", "--strict", "run", "show", "--stat"]);
        assert!(args.strict);
        assert_eq!(args.command, CliCommand::Run { subcommand: "show".to_string(), argument: "--stat".to_string() });
    }

    #[test]
    fn test_run_requires_argument() {
        assert!(CliArgs::try_parse_from(["repo-meta", "run", "log"]).is_err());
    }
}
