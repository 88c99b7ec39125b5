// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use repo_meta::cli::{CliArgs, CliCommand};
use repo_meta::output::QueryOutput;
use repo_meta::{GitError, GitInvoker, HistoryOrder, RepoFacade, config, ui};
use std::io::Write;

/// Exit code for "query ran but found nothing" (absent value, no repository)
const EXIT_NOT_FOUND: i32 = 1;
/// Exit code for configuration errors and strict-mode git failures, including `run`
const EXIT_ERROR: i32 = 2;

fn main() {
    env_logger::init();

    let args = CliArgs::parse_args();

    let config = match config::build_facade_config(&args) {
        Ok(c) => c,
        Err(e) => {
            ui::print_error(&format!("Configuration error: {}", e));
            std::process::exit(EXIT_ERROR);
        }
    };

    let facade = RepoFacade::from_config(config);
    let strict = args.strict;

    let result = match args.command {
        // Passthrough has no result to render
        CliCommand::Run { ref subcommand, ref argument } => {
            run_passthrough(&facade, subcommand, argument, strict);
            return;
        }
        CliCommand::History { order } => facade_history(&facade, order, strict),
        CliCommand::Oldest => facade_oldest(&facade, strict),
        CliCommand::Name => facade_name(&facade, strict),
        CliCommand::Exists => facade_exists(&facade, strict),
    };

    let result = match result {
        Ok(r) => r,
        Err(e) => {
            ui::print_error(&e.to_string());
            std::process::exit(EXIT_ERROR);
        }
    };

    let rendered = if args.json {
        match result.render_json() {
            Ok(s) => s,
            Err(e) => {
                ui::print_error(&format!("Failed to serialize result: {}", e));
                std::process::exit(EXIT_ERROR);
            }
        }
    } else {
        result.render_plain()
    };

    let mut stdout = std::io::stdout().lock();
    // A closed pipe (e.g. `| head`) is not worth a panic
    let _ = stdout.write_all(rendered.as_bytes()).and_then(|_| stdout.flush());

    if !result.is_found() {
        std::process::exit(EXIT_NOT_FOUND);
    }
}

/// Run `git <subcommand> <argument>`; in strict mode a failure exits with `EXIT_ERROR`
fn run_passthrough<I: GitInvoker>(facade: &RepoFacade<I>, subcommand: &str, argument: &str, strict: bool) {
    if !strict {
        facade.run(subcommand, argument);
    } else if let Err(e) = facade.try_run(subcommand, argument) {
        ui::print_error(&e.to_string());
        std::process::exit(EXIT_ERROR);
    }
}

fn facade_history<I: GitInvoker>(
    facade: &RepoFacade<I>,
    order: HistoryOrder,
    strict: bool,
) -> Result<QueryOutput, GitError> {
    let hashes = if strict { facade.try_commit_history(order)? } else { facade.commit_history(order) };
    Ok(QueryOutput::History { order, hashes })
}

fn facade_oldest<I: GitInvoker>(facade: &RepoFacade<I>, strict: bool) -> Result<QueryOutput, GitError> {
    let hash = if strict { Some(facade.try_oldest_commit()?) } else { facade.oldest_commit() };
    Ok(QueryOutput::Oldest { hash })
}

fn facade_name<I: GitInvoker>(facade: &RepoFacade<I>, strict: bool) -> Result<QueryOutput, GitError> {
    let name = if strict { Some(facade.try_repository_name()?) } else { facade.repository_name() };
    Ok(QueryOutput::Name { name })
}

fn facade_exists<I: GitInvoker>(facade: &RepoFacade<I>, strict: bool) -> Result<QueryOutput, GitError> {
    let exists = if strict { facade.try_repository_exists()? } else { facade.repository_exists() };
    Ok(QueryOutput::Exists { exists })
}
