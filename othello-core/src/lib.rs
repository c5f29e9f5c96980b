//! `othello-core` is the rules engine and turn controller for a local two-player Othello game.
//!
//! This package implements three levels of abstraction:
//!
//!  - [`bitboard`] contains the raw [`Bitboard`](bitboard::Bitboard) type: one bit per square,
//!    with the usual bitwise operators.
//!  - [`Board`] implements the rules engine: legality, capture runs and move application.
//!    [`Board::apply_move`] is unchecked, and may leave the board inconsistent if its
//!    contract is not checked by the caller.
//!  - [`Game`] is the safe turn controller. It owns the active player, the legal-move set
//!    and the pass and end-of-game protocol, and is what presentation layers should drive.
//!
//! Presentation layers read a [`Snapshot`] after every call into [`Game`]; nothing in this
//! crate knows how the board is displayed.

pub mod bitboard;
pub mod test_utils;
pub mod utils;

mod board;
mod direction;
mod game;
mod location;
mod player;
mod snapshot;

pub use board::*;
pub use direction::*;
pub use game::*;
pub use location::*;
pub use player::*;
pub use snapshot::*;

/// The number of spaces on one edge of an Othello board.
pub const EDGE_LENGTH: usize = 8;

/// The number of spaces on an Othello board.
pub const NUM_SPACES: usize = 64;
