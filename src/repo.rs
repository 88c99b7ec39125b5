//! Repository metadata queries over the git executable.
//!
//! Every query comes in two forms. `try_*` methods return a typed
//! `Result`; the plain methods are best-effort and degrade to an empty,
//! absent or `false` value, logging the swallowed failure at debug level.

use crate::error::GitError;
use crate::git::{CommandInvoker, GitInvoker};
use crate::types::{FacadeConfig, HistoryOrder};
use log::debug;
use std::path::{Path, PathBuf};

const HISTORY_ARGS: [&str; 2] = ["log", "--pretty=format:%H"];
const TOPLEVEL_ARGS: [&str; 2] = ["rev-parse", "--show-toplevel"];
const GIT_DIR_ARGS: [&str; 2] = ["rev-parse", "--git-dir"];

#[derive(Debug, Clone)]
pub struct RepoFacade<I: GitInvoker = CommandInvoker> {
    invoker: I,
}

impl RepoFacade<CommandInvoker> {
    /// Facade over the real git executable described by `config`
    pub fn from_config(config: FacadeConfig) -> Self {
        RepoFacade::new(CommandInvoker::new(config))
    }
}

impl<I: GitInvoker> RepoFacade<I> {
    pub fn new(invoker: I) -> Self {
        RepoFacade { invoker }
    }

    pub fn invoker(&self) -> &I {
        &self.invoker
    }

    /// Commit hashes in git's native newest-first order.
    ///
    /// Both history listing and the oldest-hash lookup read through here.
    fn raw_hashes(&self) -> Result<Vec<String>, GitError> {
        let output = self.invoker.capture(&HISTORY_ARGS)?;
        if !output.success {
            return Err(GitError::Exit { args: HISTORY_ARGS.join(" "), code: output.code, stderr: output.stderr });
        }

        Ok(output.stdout.lines().map(str::trim).filter(|line| !line.is_empty()).map(str::to_string).collect())
    }

    pub fn try_commit_history(&self, order: HistoryOrder) -> Result<Vec<String>, GitError> {
        self.raw_hashes().map(|hashes| order.apply(hashes))
    }

    /// All commit hashes reachable from HEAD, empty on any failure
    pub fn commit_history(&self, order: HistoryOrder) -> Vec<String> {
        self.try_commit_history(order).unwrap_or_else(|e| {
            debug!("commit history unavailable: {}", e);
            Vec::new()
        })
    }

    pub fn try_oldest_commit(&self) -> Result<String, GitError> {
        self.raw_hashes()?.pop().ok_or(GitError::EmptyHistory)
    }

    /// The root commit of the current history
    ///
    /// A repository without commits makes `git log` fail, so this is `None`
    /// both for an empty history and for any invocation failure.
    pub fn oldest_commit(&self) -> Option<String> {
        self.try_oldest_commit().map_err(|e| debug!("oldest commit unavailable: {}", e)).ok()
    }

    pub fn try_repository_name(&self) -> Result<String, GitError> {
        let output = self.invoker.capture(&TOPLEVEL_ARGS)?;
        if !output.success {
            return Err(GitError::Exit { args: TOPLEVEL_ARGS.join(" "), code: output.code, stderr: output.stderr });
        }

        let toplevel = output.stdout.trim();
        Path::new(toplevel)
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .ok_or_else(|| GitError::NoTopLevel { path: PathBuf::from(toplevel) })
    }

    /// Name of the directory at the top of the working tree
    pub fn repository_name(&self) -> Option<String> {
        self.try_repository_name().map_err(|e| debug!("repository name unavailable: {}", e)).ok()
    }

    pub fn try_repository_exists(&self) -> Result<bool, GitError> {
        self.invoker.probe(&GIT_DIR_ARGS)
    }

    /// Whether git recognizes a repository here; the probe's own output is discarded
    pub fn repository_exists(&self) -> bool {
        self.try_repository_exists().unwrap_or_else(|e| {
            debug!("repository probe failed: {}", e);
            false
        })
    }

    pub fn try_run(&self, subcommand: &str, argument: &str) -> Result<(), GitError> {
        self.invoker.passthrough(&[subcommand, argument])
    }

    /// Run `git <subcommand> <argument>` with output going straight to the terminal
    ///
    /// Fire-and-forget: whatever happens, nothing is returned.
    pub fn run(&self, subcommand: &str, argument: &str) {
        if let Err(e) = self.try_run(subcommand, argument) {
            debug!("git {} {} failed: {}", subcommand, argument, e);
        }
    }
}

#[cfg(test)]
#[path = "repo_test.rs"]
mod repo_test;
