//! Random opponent against itself, for demos and smoke tests

use anyhow::{Context, Result};
use chess_core::{Color, Game, GameStatus, MoveSelector};
use random_engine::RandomEngine;
use std::io::Write;
use tracing::info;

use crate::config::PlayConfig;
use crate::render::render;
use crate::session::{board_style, game_over_line, MoveCue};

/// Result of a self-play game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelfPlayResult {
    /// None when the ply limit was reached first
    pub winner: Option<Color>,
    pub plies: u32,
}

fn engine(seed: Option<u64>) -> RandomEngine {
    seed.map_or_else(RandomEngine::new, RandomEngine::with_seed)
}

/// Play random moves for both sides until one runs out of moves or
/// `max_plies` is reached. No delay between moves.
pub fn run_self_play(config: &PlayConfig, out: &mut impl Write) -> Result<SelfPlayResult> {
    let mut white = engine(config.seed);
    let mut black = engine(config.seed.map(|s| s.wrapping_add(1)));
    let mut game = Game::new();
    let mut cue = MoveCue::default();
    let style = board_style(config);

    let mut plies = 0;
    while plies < config.max_plies {
        let mover = game.turn;
        let selector: &mut dyn MoveSelector = match mover {
            Color::White => &mut white,
            Color::Black => &mut black,
        };
        let played = game
            .play_selected(selector, &mut cue)
            .with_context(|| format!("{mover} engine picked a move it cannot play"))?;
        match played {
            Some(mv) => {
                plies += 1;
                writeln!(out, "{plies:>3}. {mover} {mv}")?;
            }
            None => break,
        }
    }

    write!(out, "{}", render(&game.board, style, &[]))?;
    let winner = match game.status() {
        GameStatus::NoMoves { loser } => {
            writeln!(out, "{}", game_over_line(loser.other()))?;
            Some(loser.other())
        }
        GameStatus::Ongoing => {
            writeln!(out, "Stopped after {plies} plies")?;
            None
        }
    };
    info!(plies, ?winner, "self-play finished");
    Ok(SelfPlayResult { winner, plies })
}
