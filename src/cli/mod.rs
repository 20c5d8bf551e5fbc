pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "trendharvest")]
#[command(about = "Collect trending tracks, their audio and style tags", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/trendharvest/config.toml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// SQLite database file
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Directory audio files are saved into
    #[arg(long, global = true)]
    pub download_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scrape the trending listing once and save new tracks (default)
    Run {
        /// Maximum listing rows to process
        #[arg(short, long)]
        max_tracks: Option<usize>,

        /// Show the browser window
        #[arg(long)]
        headed: bool,
    },
    /// List stored tracks, newest first
    List,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_is_optional() {
        let cli = Cli::try_parse_from(["trendharvest"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_run_flags() {
        let cli = Cli::try_parse_from(["trendharvest", "run", "--max-tracks", "5", "--headed"])
            .unwrap();
        match cli.command {
            Some(Commands::Run { max_tracks, headed }) => {
                assert_eq!(max_tracks, Some(5));
                assert!(headed);
            }
            _ => panic!("expected run"),
        }
    }

    #[test]
    fn test_global_paths_after_subcommand() {
        let cli = Cli::try_parse_from(["trendharvest", "list", "--db", "/tmp/t.db"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::List)));
        assert_eq!(cli.db, Some(PathBuf::from("/tmp/t.db")));
    }
}
