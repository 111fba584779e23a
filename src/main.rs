mod app;
mod catalog;
mod cli;
mod logging;
mod paths;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    logging::init();
    app::run(cli)
}
