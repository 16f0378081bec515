//! chess_play CLI
//!
//! Play against the random opponent, or let it play itself.

use anyhow::Result;
use chess_core::Color;
use chess_play::{run_self_play, run_session, PlayConfig, SessionEnd};
use clap::Parser;
use random_engine::RandomEngine;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// TOML settings file; flags below override it.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Side you play (white or black).
    #[arg(long)]
    color: Option<Color>,
    /// Pause before the opponent replies, in milliseconds.
    #[arg(long)]
    delay_ms: Option<u64>,
    /// Seed the opponent for a repeatable game.
    #[arg(long)]
    seed: Option<u64>,
    /// Draw pieces as letters instead of Unicode glyphs.
    #[arg(long)]
    ascii: bool,
    /// Do not ring the terminal bell on moves.
    #[arg(long)]
    no_bell: bool,
    /// Random opponent plays both sides.
    #[arg(long)]
    self_play: bool,
    /// Ply limit for self-play.
    #[arg(long)]
    max_plies: Option<u32>,
}

impl Args {
    fn apply(&self, config: &mut PlayConfig) {
        if let Some(color) = self.color {
            config.human = color;
        }
        if let Some(ms) = self.delay_ms {
            config.opponent_delay_ms = ms;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.ascii {
            config.unicode = false;
        }
        if self.no_bell {
            config.bell = false;
        }
        if let Some(n) = self.max_plies {
            config.max_plies = n;
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let mut config = match &args.config {
        Some(path) => PlayConfig::load(path)?,
        None => PlayConfig::default(),
    };
    args.apply(&mut config);
    config.validate()?;

    let mut stdout = io::stdout().lock();
    if args.self_play {
        run_self_play(&config, &mut stdout)?;
        return Ok(());
    }

    let mut opponent = config
        .seed
        .map_or_else(RandomEngine::new, RandomEngine::with_seed);
    let end = run_session(&config, &mut opponent, io::stdin().lock(), &mut stdout)?;
    if end == SessionEnd::Quit {
        writeln!(stdout, "Bye.")?;
    }
    Ok(())
}
