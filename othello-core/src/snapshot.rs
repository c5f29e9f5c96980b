//! The read-only view of a [`Game`](crate::Game) handed to presentation layers.

use crate::{Cell, Location, LocationList, Outcome, Player, Score, EDGE_LENGTH};

/// Everything a display needs after each call into the turn controller.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Snapshot {
    /// The grid, indexed `[row][col]`.
    pub cells: [[Cell; EDGE_LENGTH]; EDGE_LENGTH],
    /// The player to move. None once the game has ended.
    pub active_player: Option<Player>,
    /// Where the active player may play.
    pub legal_moves: LocationList,
    pub score: Score,
    /// The player skipped by the last move, for a one-shot advisory.
    pub pass_notice: Option<Player>,
    /// The final result. None while the game is in progress.
    pub outcome: Option<Outcome>,
    /// Stones flipped by the last move, for cosmetic effects only.
    pub last_flipped: LocationList,
}

impl Snapshot {
    /// The cell at `(row, col)`, or None off the board.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row)?.get(col).copied()
    }

    /// Whether the active player may play at `(row, col)`.
    pub fn is_legal(&self, row: usize, col: usize) -> bool {
        Location::try_from_coords(row, col)
            .map(|loc| self.legal_moves.contains(loc))
            .unwrap_or(false)
    }

    /// Whether the stone at `(row, col)` was flipped by the last move.
    pub fn was_flipped(&self, row: usize, col: usize) -> bool {
        Location::try_from_coords(row, col)
            .map(|loc| self.last_flipped.contains(loc))
            .unwrap_or(false)
    }
}
