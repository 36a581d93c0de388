use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{Confirm, CustomType, Select, Text};
use tracing::info;
use weather_core::{Config, TimeDisplay, load_report, render_report, source_from_arg};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Read and print weather reports")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Set the default report and display preferences.
    Configure,

    /// Print a weather report.
    Show {
        /// JSON document to read; `-` reads stdin. Defaults to the configured report.
        path: Option<PathBuf>,

        /// Show times in this machine's time zone instead of the report's.
        #[arg(long)]
        local_time: bool,

        /// Show at most this many hourly entries.
        #[arg(long, value_name = "N")]
        hours: Option<usize>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { path, local_time, hours } => {
                let config = Config::load()?;
                let source = source_from_arg(path.as_deref(), &config)?;

                let report = load_report(source.as_ref())
                    .await
                    .with_context(|| format!("Could not load report from {}", source.describe()))?;

                let mut options = config.present_options();
                if local_time {
                    options.time_display = TimeDisplay::Local;
                }
                if hours.is_some() {
                    options.hourly_limit = hours;
                }

                print!("{}", render_report(&report, &options));
                Ok(())
            }
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let current = config
        .default_report
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_default();
    let path = Text::new("Default weather document (empty for none):")
        .with_initial_value(&current)
        .prompt()?;
    config.default_report = match path.trim() {
        "" => None,
        path => Some(PathBuf::from(path)),
    };

    let start = TimeDisplay::all()
        .iter()
        .position(|d| *d == config.time_display)
        .unwrap_or(0);
    config.time_display = Select::new("Show times in:", TimeDisplay::all().to_vec())
        .with_starting_cursor(start)
        .prompt()?;

    config.hourly_limit = if Confirm::new("Limit the number of hourly entries?")
        .with_default(config.hourly_limit.is_some())
        .prompt()?
    {
        Some(
            CustomType::<usize>::new("Hourly entries to show:")
                .with_default(config.hourly_limit.unwrap_or(12))
                .prompt()?,
        )
    } else {
        None
    };

    let saved = config.save()?;
    info!(path = %saved.display(), "configuration saved");
    println!("Configuration saved to {}", saved.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_show_flags() {
        let args = ["weather", "show", "weather.json", "--local-time", "--hours", "6"];
        let cli = Cli::try_parse_from(args).expect("valid args");

        match cli.command {
            Command::Show { path, local_time, hours } => {
                assert_eq!(path, Some(PathBuf::from("weather.json")));
                assert!(local_time);
                assert_eq!(hours, Some(6));
            }
            other => panic!("expected show, got {other:?}"),
        }
    }

    #[test]
    fn show_path_is_optional() {
        let cli = Cli::try_parse_from(["weather", "show"]).expect("valid args");

        assert!(matches!(
            cli.command,
            Command::Show { path: None, local_time: false, hours: None }
        ));
    }
}
