// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Repository metadata queries answered by shelling out to `git`.
//!
//! ```no_run
//! use repo_meta::{FacadeConfig, HistoryOrder, RepoFacade};
//!
//! let repo = RepoFacade::from_config(FacadeConfig::in_dir("."));
//! if repo.repository_exists() {
//!     println!("{:?}", repo.repository_name());
//!     println!("{:?}", repo.commit_history(HistoryOrder::OldestFirst));
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod git;
pub mod output;
pub mod repo;
pub mod types;
pub mod ui;

pub use error::GitError;
pub use git::{CommandInvoker, GitInvoker};
pub use repo::RepoFacade;
pub use types::{CapturedOutput, FacadeConfig, HistoryOrder};
