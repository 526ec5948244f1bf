//! The terminal game loop.
//!
//! Generic over input and output so the whole loop can be driven from a
//! script in tests.

use std::io::{BufRead, Write};

use tracing::info;

use super::render::{render_board, render_legend, render_status};
use super::CliError;
use crate::core::{DiceSource, PlayerId};
use crate::engine::GameSession;

/// How the loop presents the game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlayOptions {
    /// Roll without waiting for Enter; stop at the first win.
    pub auto_roll: bool,
    /// Skip drawing the board.
    pub quiet: bool,
}

/// How the loop ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayOutcome {
    /// A player won and the table chose not to play again.
    Won(PlayerId),
    /// The user quit (or input ended) before anyone won.
    Quit,
}

enum Command {
    Roll,
    Restart,
    Quit,
}

/// Run games until someone wins and nobody asks for a rematch, or the user
/// quits.
pub fn run<D, R, W>(
    session: &mut GameSession<D>,
    options: PlayOptions,
    mut input: R,
    mut output: W,
) -> Result<PlayOutcome, CliError>
where
    D: DiceSource,
    R: BufRead,
    W: Write,
{
    if !options.quiet {
        write!(output, "{}", render_legend(session))?;
    }

    loop {
        if !options.quiet {
            write!(output, "{}", render_board(session))?;
        }
        write!(output, "{}", render_status(session))?;

        if !options.auto_roll {
            match prompt(&mut input, &mut output, "Press Enter to roll (q to quit): ")? {
                Command::Quit => return Ok(PlayOutcome::Quit),
                Command::Roll | Command::Restart => {}
            }
        }

        let result = session.roll_dice()?;
        writeln!(output, "{result}")?;

        let Some(winner) = session.winner() else {
            continue;
        };
        writeln!(output, "{winner} wins!")?;
        info!(%winner, rolls = session.history().len(), "game finished");

        if options.auto_roll {
            return Ok(PlayOutcome::Won(winner));
        }
        match prompt(&mut input, &mut output, "Play again? (r to restart, q to quit): ")? {
            Command::Restart => session.reset(session.player_count().get())?,
            Command::Roll | Command::Quit => return Ok(PlayOutcome::Won(winner)),
        }
    }
}

/// Read one command. Unrecognized input asks again; end of input quits.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> Result<Command, CliError> {
    loop {
        write!(output, "{message}")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(Command::Quit);
        }
        match line.trim().to_ascii_lowercase().as_str() {
            "" => return Ok(Command::Roll),
            "r" | "restart" => return Ok(Command::Restart),
            "q" | "quit" => return Ok(Command::Quit),
            other => writeln!(output, "Unknown command '{other}'")?,
        }
    }
}
