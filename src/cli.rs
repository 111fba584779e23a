use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "walkthrough",
    version,
    about = "Play a video walkthrough and track how much of each video was watched"
)]
pub struct Cli {
    /// JSON catalog of videos (overrides WALKTHROUGH_CATALOG).
    #[arg(long, global = true, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Playback rate of the simulated player.
    #[arg(long, global = true, default_value_t = 1.0, value_parser = parse_rate)]
    pub rate: f64,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    Tui,
    List,
}

fn parse_rate(raw: &str) -> Result<f64, String> {
    let rate: f64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("'{raw}' is not a number"))?;
    if !rate.is_finite() || rate <= 0.0 {
        return Err(format!("rate must be greater than zero, got {raw}"));
    }
    Ok(rate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rate_rejects_zero_and_garbage() {
        assert_eq!(parse_rate("2"), Ok(2.0));
        assert!(parse_rate("0").is_err());
        assert!(parse_rate("-1.5").is_err());
        assert!(parse_rate("fast").is_err());
    }

    #[test]
    fn cli_defaults_to_no_subcommand() {
        let cli = Cli::try_parse_from(["walkthrough"]).expect("bare invocation should parse");
        assert!(cli.command.is_none());
        assert_eq!(cli.rate, 1.0);
        assert!(cli.catalog.is_none());
    }

    #[test]
    fn cli_accepts_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["walkthrough", "list", "--catalog", "v.json"])
            .expect("list with catalog should parse");
        assert!(matches!(cli.command, Some(Command::List)));
        assert_eq!(cli.catalog, Some(PathBuf::from("v.json")));
    }
}
