//! Human vs. automated opponent at the terminal

use anyhow::{bail, Context, Result};
use chess_core::{generate_moves, Color, Game, GameStatus, Move, MoveListener, MoveSelector};
use std::io::{BufRead, Write};
use std::thread;
use tracing::{debug, error, info};

use crate::command::{Command, HELP};
use crate::config::PlayConfig;
use crate::render::{render, Style};

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The side to move had no moves left
    GameOver { winner: Color },
    /// `quit` or end of input
    Quit,
}

/// Remembers that a move was applied so the caller can sound the cue
/// after the fact.
#[derive(Debug, Default)]
pub struct MoveCue {
    pending: bool,
}

impl MoveCue {
    /// True if a move was applied since the last call.
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }
}

impl MoveListener for MoveCue {
    fn on_move_applied(&mut self, mv: Move) {
        debug!(%mv, "move applied");
        self.pending = true;
    }
}

pub fn game_over_line(winner: Color) -> String {
    format!("Game over: {winner} wins! ({} has no moves)", winner.other())
}

pub fn board_style(config: &PlayConfig) -> Style {
    if config.unicode {
        Style::Unicode
    } else {
        Style::Ascii
    }
}

/// Play one game from the starting position. Lines are read from `input`
/// whenever it is the human's turn; the opponent replies after the
/// configured delay.
pub fn run_session(
    config: &PlayConfig,
    opponent: &mut dyn MoveSelector,
    input: impl BufRead,
    out: impl Write,
) -> Result<SessionEnd> {
    run_session_from(config, Game::new(), opponent, input, out)
}

/// Like [`run_session`], continuing from `game`.
///
/// The game ends only when the side to move has no moves. An opponent that
/// returns no move, or a move it cannot play, while moves remain is an error.
pub fn run_session_from(
    config: &PlayConfig,
    mut game: Game,
    opponent: &mut dyn MoveSelector,
    mut input: impl BufRead,
    mut out: impl Write,
) -> Result<SessionEnd> {
    let mut cue = MoveCue::default();
    let style = board_style(config);
    opponent.new_game();

    info!(human = %config.human, opponent = opponent.name(), "session started");
    write!(out, "{}", render(&game.board, style, &[]))?;

    loop {
        if let GameStatus::NoMoves { loser } = game.status() {
            let winner = loser.other();
            writeln!(out, "{}", game_over_line(winner))?;
            info!(%winner, "game over");
            return Ok(SessionEnd::GameOver { winner });
        }

        if game.turn != config.human {
            if config.opponent_delay_ms > 0 {
                thread::sleep(config.opponent_delay());
            }
            let mover = game.turn;
            match game.play_selected(opponent, &mut cue) {
                Ok(Some(mv)) => {
                    sound(&mut out, &mut cue, config.bell)?;
                    writeln!(out, "{mover} plays {mv}")?;
                    write!(out, "{}", render(&game.board, style, &[]))?;
                }
                Ok(None) => {
                    bail!("{} found no move for {mover} although moves remain", opponent.name());
                }
                Err(e) => {
                    error!(opponent = opponent.name(), %mover, error = %e, "opponent move rejected");
                    return Err(e)
                        .with_context(|| format!("{} picked a move {mover} cannot play", opponent.name()));
                }
            }
            continue;
        }

        write!(out, "{} to move> ", game.turn)?;
        out.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(SessionEnd::Quit);
        }

        let cmd = match Command::parse(&line) {
            Ok(Some(cmd)) => cmd,
            Ok(None) => continue,
            Err(e) => {
                writeln!(out, "{e}. Type 'help' for commands.")?;
                continue;
            }
        };

        match cmd {
            Command::Play(mv) => {
                if game.play(mv.from, mv.to, &mut cue) {
                    sound(&mut out, &mut cue, config.bell)?;
                    write!(out, "{}", render(&game.board, style, &[]))?;
                } else {
                    writeln!(out, "Illegal move: {mv}")?;
                }
            }
            Command::Moves(sq) => {
                let dests = generate_moves(&game.board, sq);
                write!(out, "{}", render(&game.board, style, &dests))?;
                let names: Vec<String> = dests.iter().map(ToString::to_string).collect();
                if names.is_empty() {
                    writeln!(out, "No moves from {sq}")?;
                } else {
                    writeln!(out, "{sq}: {}", names.join(" "))?;
                }
            }
            Command::Board => write!(out, "{}", render(&game.board, style, &[]))?,
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => return Ok(SessionEnd::Quit),
        }
    }
}

fn sound(out: &mut impl Write, cue: &mut MoveCue, bell: bool) -> Result<()> {
    if cue.take() && bell {
        write!(out, "\x07")?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
