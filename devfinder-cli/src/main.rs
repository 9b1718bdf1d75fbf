use std::process::ExitCode;

use clap::{Parser, Subcommand};
use devfinder_lib::logging;
use tracing::Level;

mod config;
mod lookup;
mod render;

#[derive(Parser, Debug)]
#[command(name = "devfinder")]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Log requests and responses to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Look up a profile by handle
    Lookup(lookup::Args),
    /// Show the configuration file in use
    Config,
}

fn main() -> ExitCode {
    human_panic::setup_panic!();

    let cli = Cli::parse();

    logging::init(if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    });

    let code = match &cli.command {
        Command::Lookup(args) => lookup::handle(args),
        Command::Config => config::handle(),
    };

    code.into()
}
