/// Configuration resolution module
///
/// This module handles:
/// - Building a FacadeConfig from CLI arguments
/// - Choosing the git executable (flag, then environment, then PATH)
/// - Validating the working directory
use crate::cli::CliArgs;
use crate::types::{DEFAULT_GIT_PROGRAM, FacadeConfig, GIT_PROGRAM_ENV};
use log::debug;
use std::env;
use std::path::PathBuf;

/// Build a validated, immutable FacadeConfig from CLI arguments
pub fn build_facade_config(args: &CliArgs) -> Result<FacadeConfig, String> {
    let git_program = resolve_git_program(args.git_program.as_ref(), env::var_os(GIT_PROGRAM_ENV).map(PathBuf::from));
    debug!("Using git executable {:?}", git_program);

    let work_dir = match args.repo_dir {
        Some(ref dir) => {
            if !dir.exists() {
                return Err(format!("Directory does not exist: {}", dir.display()));
            }
            if !dir.is_dir() {
                return Err(format!("Not a directory: {}", dir.display()));
            }
            debug!("Running git in {:?}", dir);
            Some(dir.clone())
        }
        None => None,
    };

    Ok(FacadeConfig { git_program, work_dir, envs: Vec::new() })
}

/// Pick the git executable: explicit flag wins over the environment, which wins over the default
fn resolve_git_program(flag: Option<&PathBuf>, from_env: Option<PathBuf>) -> PathBuf {
    flag.cloned()
        .or_else(|| from_env.filter(|p| !p.as_os_str().is_empty()))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_GIT_PROGRAM))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
