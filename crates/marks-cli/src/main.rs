mod app;
mod cli;
mod clipper;
mod commands;
mod config;
mod logging;
mod opener;
mod printer;
mod prompter;

use clap::Parser;

/// Entry point for the `marks` bookmark manager.
///
/// Parses command-line arguments and dispatches to the main application logic.
fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    logging::init(cli.verbose);
    app::run(cli)
}
