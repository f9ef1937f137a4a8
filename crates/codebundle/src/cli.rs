//! Command-line surface.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;

#[derive(Debug, Parser)]
#[command(name = "codebundle", author, version, about = "Bundle source files into a single document", long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Concatenate matching source files into one output file
    Bundle(BundleArgs),
    /// Interactively build a bundle.rsp response file
    CreateRsp(CreateRspArgs),
    /// Print a shell completion script
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Clone, Default, Args)]
pub struct BundleArgs {
    /// Languages to include (cs, js, ts, python/py, java, or all)
    #[arg(short = 'l', long = "language", value_name = "LANG", num_args = 1.., required = true)]
    pub languages: Vec<String>,
    /// File the bundle is written to
    #[arg(short, long, value_name = "PATH", required = true)]
    pub output: Option<PathBuf>,
    /// Precede each file with a comment naming its relative path
    #[arg(short, long)]
    pub note: bool,
    /// Sort order: name (default) or type
    #[arg(short, long, value_name = "MODE")]
    pub sort: Option<String>,
    /// Drop empty and whitespace-only lines
    #[arg(short, long)]
    pub remove_empty_lines: bool,
    /// Author written as a header comment
    #[arg(short, long, value_name = "NAME")]
    pub author: Option<String>,
    /// Directory to collect files from
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,
}

#[derive(Debug, Clone, Args)]
pub struct CreateRspArgs {
    /// Directory the response file is written to
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,
}
