//! CLI entry and dispatch.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use raidcard_core::config::{self, Config};
use raidcard_core::logging;

mod commands;

use commands::share::Pick;

#[derive(Parser)]
#[command(name = "raidcard")]
#[command(version)]
#[command(about = "Raid party cards: pick characters, compare averages, share the party")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Board selection shared by the board commands.
#[derive(clap::Args, Debug, Clone)]
struct BoardArgs {
    /// Path to the match board JSON
    #[arg(value_name = "BOARD")]
    board: PathBuf,

    /// Raid id of the match to use (default: first match on the board)
    #[arg(long, value_name = "ID")]
    raid: Option<String>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Browse the board interactively
    Show {
        /// Path to the match board JSON
        #[arg(value_name = "BOARD")]
        board: PathBuf,
    },
    /// Print the share text for a set of picks
    Share {
        #[command(flatten)]
        board: BoardArgs,

        /// Pick a candidate for a slot: SLOT=NAME[@SERVER] (repeatable)
        #[arg(long = "pick", value_name = "SLOT=NAME[@SERVER]", required = true)]
        picks: Vec<Pick>,
    },
    /// Print each slot's collapsed rows and the fallback averages
    Inspect {
        #[command(flatten)]
        board: BoardArgs,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // One tokio runtime for everything; the TUI spawns clipboard and timer
    // tasks onto its workers while the main thread polls the terminal.
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;
    let _enter = rt.enter();

    dispatch(cli)
}

fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Show { board } => {
            let config = load_config()?;
            // The TUI owns the terminal; logs go to a file.
            let _guard = logging::init_file(&config::paths::logs_dir(), &config.log_level)?;
            commands::show::run(&board, &config)
        }
        Commands::Share { board, picks } => {
            let config = load_config()?;
            logging::init_stderr(&config.log_level);
            commands::share::run(&board.board, board.raid.as_deref(), &picks)
        }
        Commands::Inspect { board } => {
            let config = load_config()?;
            logging::init_stderr(&config.log_level);
            commands::inspect::run(&board.board, board.raid.as_deref(), &config)
        }
        // Config commands must work even when the config file is broken.
        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
        },
    }
}

fn load_config() -> Result<Config> {
    Config::load().context("load config")
}
