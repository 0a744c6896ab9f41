//! The interactive game loop.

use crate::config::{ComputerSide, DisplayConfig};
use crate::render::render;
use crate::session::{Session, Status};
use chess_core::Move;
use chess_engine::MoveSelector;
use std::io::{self, BufRead, Write};
use tracing::{debug, warn};

/// Plays until checkmate, end of input, or `quit`.
///
/// Human moves are read one per line from `input`, either as squares
/// (`e2e4`) or as four numbers `fromRow fromCol toRow toCol`. Moves for the
/// side named by `computer` come from `selector`.
pub fn run<S, R, W>(
    session: &mut Session,
    selector: &mut S,
    computer: ComputerSide,
    display: &DisplayConfig,
    mut input: R,
    out: &mut W,
) -> io::Result<()>
where
    S: MoveSelector,
    R: BufRead,
    W: Write,
{
    let mut show_board = true;
    loop {
        let player = session.game().current_player();

        if show_board {
            writeln!(out)?;
            write!(out, "{}", render(session.game().board(), display))?;
            match session.status() {
                Status::Checkmate => {
                    writeln!(out, "Checkmate. {} wins.", player.next())?;
                    return Ok(());
                }
                Status::Check => writeln!(out, "{player} is in check.")?,
                Status::Normal => {}
            }
        }
        show_board = true;

        if computer.plays(player) {
            let Some(mv) = selector.select(session.game()) else {
                writeln!(out, "{player} has no moves.")?;
                return Ok(());
            };
            match session.play(mv) {
                Ok(_) => writeln!(out, "{player} plays {mv}")?,
                Err(err) => {
                    warn!(%err, "computer move refused");
                    writeln!(out, "{player} has no moves.")?;
                    return Ok(());
                }
            }
            continue;
        }

        write!(out, "{player} to move: ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(());
        }
        let line = line.trim();
        debug!(%player, line, "input");
        match line {
            "" => {
                show_board = false;
                continue;
            }
            "quit" | "exit" => return Ok(()),
            _ => {}
        }

        let mv: Move = match line.parse() {
            Ok(mv) => mv,
            Err(err) => {
                writeln!(out, "{err}")?;
                show_board = false;
                continue;
            }
        };
        if let Err(err) = session.play(mv) {
            writeln!(out, "{err}")?;
            show_board = false;
        }
    }
}
