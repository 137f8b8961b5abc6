//! Line-oriented console loops over any reader and writer.

use crate::render;
use crate::session::{GameSession, SessionCommand, Tone, parse_coordinate};
use derive_more::{Display, Error};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use strictly_omok::Player;
use tracing::{info, instrument, warn};

/// Reads y/n answers until one arrives; EOF counts as "no".
fn confirm<I, W>(lines: &mut I, output: &mut W, question: &str) -> io::Result<bool>
where
    I: Iterator<Item = io::Result<String>>,
    W: Write,
{
    write!(output, "{} [y/N] ", question)?;
    output.flush()?;
    match lines.next() {
        Some(line) => Ok(matches!(line?.trim().to_lowercase().as_str(), "y" | "yes")),
        None => Ok(false),
    }
}

fn print_board<W: Write>(session: &GameSession, output: &mut W) -> io::Result<()> {
    write!(output, "{}", render::render_board(&session.game().snapshot()))
}

/// Runs the interactive game until `quit` or end of input.
///
/// Quitting mid-game and resetting a started game both ask first.
#[instrument(skip_all)]
pub fn run_interactive<R, W>(session: &mut GameSession, input: R, output: &mut W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    let config = session.config();
    writeln!(
        output,
        "Strictly Omok: {} (●) vs {} (○). Five in a row wins.",
        config.player_name(Player::Black),
        config.player_name(Player::White)
    )?;
    writeln!(output, "Type 'help' for commands.")?;
    print_board(session, output)?;
    writeln!(output, "{}", session.status_line())?;

    let mut lines = input.lines();
    loop {
        write!(output, "> ")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            info!("Input closed");
            break;
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<SessionCommand>() {
            Ok(command) => command,
            Err(e) => {
                writeln!(output, "✗ {}", e)?;
                continue;
            }
        };

        match command {
            SessionCommand::Quit => {
                if session.game().has_progress()
                    && !confirm(&mut lines, output, "A game is in progress. Quit anyway?")?
                {
                    continue;
                }
                writeln!(output, "Goodbye!")?;
                break;
            }
            SessionCommand::Reset => {
                if !session.game().history().is_empty()
                    && !confirm(&mut lines, output, "Reset the board?")?
                {
                    writeln!(output, "Reset cancelled.")?;
                    continue;
                }
            }
            _ => {}
        }

        let reply = session.execute(command);
        if reply.board_changed {
            print_board(session, output)?;
        }
        writeln!(output, "{}", reply)?;
    }
    Ok(())
}

/// A scripted move that could not be parsed or was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Move {} ({:?}): {}", number, input, reason)]
pub struct ReplayError {
    /// 1-based position of the move in the script.
    pub number: usize,
    /// The move as given.
    pub input: String,
    /// Why it was refused.
    pub reason: String,
}

/// Applies `moves` in order, printing the final board and status.
///
/// Stops at the first bad move. With `export`, writes the game afterwards
/// and returns the file path.
#[instrument(skip(session, output), fields(moves = moves.len()))]
pub fn run_replay<W: Write>(
    session: &mut GameSession,
    moves: &[String],
    export: bool,
    output: &mut W,
) -> anyhow::Result<Option<PathBuf>> {
    for (i, input) in moves.iter().enumerate() {
        let (row, col) = parse_coordinate(input).ok_or_else(|| ReplayError {
            number: i + 1,
            input: input.clone(),
            reason: "not a coordinate".to_string(),
        })?;
        let reply = session.place(row, col);
        if reply.tone == Tone::Error {
            warn!(move_number = i + 1, "Replay stopped");
            return Err(ReplayError {
                number: i + 1,
                input: input.clone(),
                reason: reply.message,
            }
            .into());
        }
    }

    print_board(session, output)?;
    writeln!(output, "{}", session.status_line())?;

    if !export {
        return Ok(None);
    }
    let path = session.export(chrono::Utc::now())?;
    writeln!(output, "Game exported to {}", path.display())?;
    Ok(Some(path))
}
