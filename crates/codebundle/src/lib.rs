pub mod app;
pub mod cli;
pub mod domain;
pub mod infra;

use std::io;

use anyhow::Result;
use clap::CommandFactory;

use crate::cli::{Cli, Command};
use crate::domain::errors::BundleError;
use crate::infra::prompt::TerminalPrompter;

pub fn init(verbosity: u8) {
    infra::logging::init(verbosity);
}

/// Execute a parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Bundle(args) => {
            let config = app::resolve::resolve(&args)?;
            let summary = app::bundle::run(&config)?;
            println!(
                "Bundle created: {} ({} files)",
                summary.output_path.display(),
                summary.file_count
            );
        }
        Command::CreateRsp(args) => {
            let root = app::resolve::resolve_root(&args.root)?;
            let mut prompter = TerminalPrompter::new();
            let path = app::rsp::create(&root, &mut prompter)?;
            println!("Response file written: {}", path.display());
        }
        Command::Completions { shell } => {
            let mut command = Cli::command();
            let name = command.get_name().to_owned();
            clap_complete::generate(shell, &mut command, name, &mut io::stdout());
        }
    }
    Ok(())
}

/// User-facing rendering of a failed run.
pub fn describe_error(err: &anyhow::Error) -> String {
    match err.downcast_ref::<BundleError>() {
        Some(domain) => domain.to_string(),
        None => format!("Error: {err:#}"),
    }
}
