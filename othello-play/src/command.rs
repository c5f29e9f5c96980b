//! Parsing player input into [`Command`]s.

use derive_more::{Display, Error};
use othello_core::Location;

/// Something a player typed at the prompt.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Command {
    /// Play at a zero-based `(row, col)`. Not yet checked against the board size.
    Move { row: usize, col: usize },
    NewGame,
    DismissPass,
    Help,
    Quit,
}

#[derive(Clone, Copy, Debug, Display, Error, Eq, PartialEq)]
#[display(fmt = "cannot parse command")]
pub struct ParseCommandError;

/// Accepts algebraic notation ("d3"), a zero-based "row col" pair, or a keyword.
impl std::str::FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim().to_ascii_lowercase();

        match input.as_str() {
            "new" | "reset" => return Ok(Command::NewGame),
            "ok" | "dismiss" => return Ok(Command::DismissPass),
            "help" | "?" => return Ok(Command::Help),
            "quit" | "exit" | "q" => return Ok(Command::Quit),
            _ => {}
        }

        let mut numbers = input.split_whitespace();
        if let (Some(row), Some(col), None) = (numbers.next(), numbers.next(), numbers.next()) {
            let row = row.parse().or(Err(ParseCommandError))?;
            let col = col.parse().or(Err(ParseCommandError))?;
            return Ok(Command::Move { row, col });
        }

        let loc: Location = input.parse().or(Err(ParseCommandError))?;
        let (row, col) = loc.to_coords();
        Ok(Command::Move { row, col })
    }
}

/// Shown in response to [`Command::Help`].
pub const HELP: &str = "\
Commands:
  d3        play at column D, row 3
  2 3       play at zero-based row 2, column 3
  ok        dismiss a pass notice
  new       start a new game
  help      show this message
  quit      leave the game";
