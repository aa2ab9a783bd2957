//! Session command parsing.

use tacto_core::Cell;

use crate::error::CliError;

/// A parsed session command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `new` -- reset to an empty board, cross to move.
    New,
    /// `move <cell>` -- play a move for the side to move.
    Move(Cell),
    /// `go` -- let the engine move for the side to move.
    Go,
    /// `auto` -- play the game out engine against engine.
    Auto,
    /// `show` -- render the board, side to move, and move log.
    Show,
    /// `help` -- list available commands.
    Help,
    /// `quit` -- end the session.
    Quit,
    /// Unrecognized command, reported back to the user.
    Unknown(String),
}

/// Parse a single line of input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, CliError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Ok(Command::Unknown(String::new()));
    }

    match tokens[0] {
        "new" => Ok(Command::New),
        "go" => Ok(Command::Go),
        "auto" => Ok(Command::Auto),
        "show" => Ok(Command::Show),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        "move" => parse_move(&tokens[1..]),
        _ => Ok(Command::Unknown(tokens[0].to_string())),
    }
}

/// Parse the `move` command arguments.
fn parse_move(tokens: &[&str]) -> Result<Command, CliError> {
    let value = tokens.first().ok_or(CliError::MissingCell)?;
    let cell = Cell::from_coords(value).ok_or_else(|| CliError::InvalidCell {
        value: value.to_string(),
    })?;
    Ok(Command::Move(cell))
}
