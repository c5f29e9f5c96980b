//! Drawing [`Snapshot`]s as text.

use colored::Colorize;
use othello_core::utils::format_grid;
use othello_core::{Cell, Outcome, Player, Snapshot, EDGE_LENGTH};
use std::fmt;

/// How the board is drawn.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RenderOptions {
    /// Mark the active player's legal moves.
    pub hints: bool,
    /// Use ANSI colors, including the highlight on freshly flipped stones.
    pub color: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            hints: true,
            color: true,
        }
    }
}

fn glyph(snapshot: &Snapshot, row: usize, col: usize, options: RenderOptions) -> String {
    let cell = snapshot.cells[row][col];
    let text = match cell {
        Cell::Black => "#",
        Cell::White => "O",
        Cell::Empty if options.hints && snapshot.is_legal(row, col) => "*",
        Cell::Empty => ".",
    };

    if !options.color {
        return text.to_string();
    }

    let styled = match cell {
        Cell::Black => text.bold().bright_blue(),
        Cell::White => text.bold().bright_white(),
        Cell::Empty if text == "*" => text.green(),
        Cell::Empty => text.dimmed(),
    };

    if snapshot.was_flipped(row, col) {
        styled.on_yellow().to_string()
    } else {
        styled.to_string()
    }
}

/// The final result, winner's count first: "Black wins (40 - 24)".
pub fn result_line(outcome: Outcome, snapshot: &Snapshot) -> String {
    let score = snapshot.score;
    match outcome.winner() {
        Some(winner) => format!(
            "{} ({} - {})",
            outcome,
            score.of(winner),
            score.of(!winner)
        ),
        None => format!("{} ({} - {})", outcome, score.black, score.white),
    }
}

/// A [`Snapshot`] drawn with some [`RenderOptions`]: the board, the score,
/// and whose turn it is or how the game ended.
#[derive(Clone, Copy, Debug)]
pub struct Frame<'a> {
    pub snapshot: &'a Snapshot,
    pub options: RenderOptions,
}

impl fmt::Display for Frame<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let snapshot = self.snapshot;
        let squares = (0..EDGE_LENGTH)
            .flat_map(|row| (0..EDGE_LENGTH).map(move |col| (row, col)))
            .map(|(row, col)| glyph(snapshot, row, col, self.options));
        format_grid(squares, f)?;

        write!(
            f,
            "\n\n{} {} - {} {}",
            Player::Black,
            snapshot.score.black,
            snapshot.score.white,
            Player::White
        )?;

        if let Some(skipped) = snapshot.pass_notice {
            write!(
                f,
                "\n{} cannot move and passes. Type `ok` to continue.",
                skipped
            )?;
        }

        match (snapshot.active_player, snapshot.outcome) {
            (_, Some(outcome)) => write!(f, "\n{}", result_line(outcome, snapshot)),
            (Some(player), None) => write!(f, "\n{} to move", player),
            (None, None) => Ok(()),
        }
    }
}

/// Render `snapshot` to a string.
pub fn render(snapshot: &Snapshot, options: RenderOptions) -> String {
    Frame { snapshot, options }.to_string()
}
