mod controller;
mod format;
mod playback;
mod state;
mod tui;


use anyhow::{Context, Result};
use tracing::info;

use crate::catalog::resolve_catalog;
use crate::cli::{Cli, Command};

use self::controller::Controller;
use self::format::truncate;
use self::state::State;

pub fn run(cli: Cli) -> Result<()> {
    let mut controller = open_controller(&cli)?;

    match cli.command {
        Some(Command::List) => run_list(&controller),
        Some(Command::Tui) | None => tui::run_tui(&mut controller, cli.rate)?,
    }

    Ok(())
}

fn open_controller(cli: &Cli) -> Result<Controller> {
    let (videos, source) = resolve_catalog(cli.catalog.as_deref())?;
    let state = State::new(&videos)
        .with_context(|| format!("invalid catalog: {}", source.describe()))?;
    info!(
        source = %source.describe(),
        videos = state.videos().len(),
        "walkthrough ready"
    );
    Ok(Controller::new(state))
}

fn run_list(controller: &Controller) {
    println!("{:<4} {:<48} {:>5} {:>10}", "#", "TITLE", "SEEN", "LENGTH");
    for row in controller.rows() {
        println!(
            "{:<4} {:<48} {:>5} {:>10}",
            row.order,
            truncate(&row.title, 48),
            row.progress,
            row.duration
        );
    }
    println!("\nTotal: {}", controller.total_time_text());
}
