use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use trendharvest::app::AppContext;
use trendharvest::cli::{commands, Cli, Commands};
use trendharvest::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(db) = cli.db {
        config.store.db_path = Some(db);
    }
    if let Some(dir) = cli.download_dir {
        config.download.dir = Some(dir);
    }

    let command = cli.command.unwrap_or(Commands::Run {
        max_tracks: None,
        headed: false,
    });

    if let Commands::Run { max_tracks, headed } = &command {
        if let Some(max) = *max_tracks {
            config.site.max_tracks = max;
        }
        if *headed {
            config.browser.headless = false;
        }
    }

    let ctx = AppContext::new(config).context("Failed to open track storage")?;

    match command {
        Commands::Run { .. } => {
            commands::run(&ctx).await?;
        }
        Commands::List => {
            commands::list_tracks(&ctx)?;
        }
    }

    Ok(())
}
