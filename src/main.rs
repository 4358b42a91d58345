//! plconv - Convert playlists between extended M3U and PLS

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod config;
mod playlist;
mod utils;

use cli::{Cli, Commands};
use config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; stdout is reserved for the converted playlist
    let filter = if cli.verbose {
        "plconv=debug"
    } else {
        "plconv=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Some(Commands::Completion { shell }) => {
            cli::commands::completion(shell);
        }
        None => {
            let config = Config::load()?;
            cli::commands::convert(cli.convert, config)?;
        }
    }

    Ok(())
}
