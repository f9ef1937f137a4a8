use std::process::ExitCode;

use clap::Parser;
use codebundle::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    codebundle::init(cli.verbose);

    match codebundle::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            println!("{}", codebundle::describe_error(&err));
            ExitCode::FAILURE
        }
    }
}
