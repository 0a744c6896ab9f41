//! Terminal chess - two players at one keyboard, or one against a random
//! computer player.

mod bot;
mod config;
mod play;
mod render;
mod session;

use anyhow::Context;
use bot::RandomSelector;
use clap::Parser;
use config::{ChessConfig, ComputerSide};
use session::Session;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Play chess in the terminal.
#[derive(Parser)]
#[command(name = "chess")]
#[command(about = "Play chess in the terminal")]
struct Cli {
    /// Configuration file (defaults to ./chess.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Side played by the computer
    #[arg(long, value_enum)]
    computer: Option<ComputerSide>,

    /// Seed for the computer's moves
    #[arg(long)]
    seed: Option<u64>,

    /// Draw pieces as Unicode glyphs
    #[arg(long)]
    unicode: bool,

    /// Start position in placement notation, e.g. "4k3/8/8/8/8/8/8/4K3 w"
    #[arg(long)]
    start: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ChessConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => ChessConfig::load_default().context("Failed to load chess.toml")?,
    };
    if let Some(computer) = cli.computer {
        config.game.computer = computer;
    }
    if cli.seed.is_some() {
        config.game.seed = cli.seed;
    }
    if cli.unicode {
        config.display.unicode = true;
    }
    if let Some(start) = cli.start {
        config.game.start = start;
    }
    tracing::info!(?config, "starting");

    let game = config.game.start_game()?;
    let mut session = Session::new(game);
    let mut selector = RandomSelector::new(config.game.seed);

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout().lock();
    play::run(
        &mut session,
        &mut selector,
        config.game.computer,
        &config.display,
        stdin.lock(),
        &mut stdout,
    )?;

    if session.status() == session::Status::Checkmate {
        tracing::info!(winner = %session.game().current_player().next(), "game over");
    }
    Ok(())
}
