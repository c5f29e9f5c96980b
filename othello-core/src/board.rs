//! The Othello rules engine: move legality, capture runs and move application.
//!
//! A [`Board`] stores one [`Bitboard`] per color. It knows nothing about whose
//! turn it is; every operation takes the [`Player`] it is evaluated for.

use crate::bitboard::{self, Bitboard};
use crate::{utils, Direction, Location, LocationList, OutOfBoundsError, Player, EDGE_LENGTH};
use derive_more::{Display, Error};
use std::fmt;

/// The contents of a single square.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Cell {
    Empty,
    Black,
    White,
}

/// The complete grid of an Othello game.
/// Invariant: no square is set in both bitboards.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Board {
    black: Bitboard,
    white: Bitboard,
}

/// Stone counts for both players.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Score {
    pub black: u8,
    pub white: u8,
}

/// Errors raised when a move cannot be applied.
#[derive(Clone, Copy, Debug, Display, Error, Eq, PartialEq)]
pub enum MoveError {
    #[display(fmt = "{}", _0)]
    OutOfBounds(OutOfBoundsError),
    #[display(fmt = "{} cannot play at {}", player, location)]
    Illegal { location: Location, player: Player },
}

impl From<OutOfBoundsError> for MoveError {
    fn from(err: OutOfBoundsError) -> Self {
        MoveError::OutOfBounds(err)
    }
}

/// A board string was not 64 valid squares.
#[derive(Clone, Copy, Debug, Display, Error, Eq, PartialEq)]
pub enum ParseBoardError {
    #[display(fmt = "expected 64 squares, found {}", _0)]
    WrongLength(#[error(not(source))] usize),
    #[display(fmt = "unexpected square character {:?}", _0)]
    InvalidSquare(#[error(not(source))] char),
}

impl Default for Board {
    /// Gets the starting board.
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The standard starting position: White on (3, 3) and (4, 4), Black on (3, 4) and (4, 3).
    pub const fn new() -> Self {
        Self {
            black: bitboard::BLACK_START,
            white: bitboard::WHITE_START,
        }
    }

    /// Build a board from one bitboard per color.
    /// Returns None if any square is claimed by both.
    pub fn from_bitboards(black: Bitboard, white: Bitboard) -> Option<Self> {
        if black.intersects(white) {
            None
        } else {
            Some(Self { black, white })
        }
    }

    /// The squares occupied by `player`.
    #[inline]
    pub fn stones(&self, player: Player) -> Bitboard {
        match player {
            Player::Black => self.black,
            Player::White => self.white,
        }
    }

    /// What occupies `loc`.
    #[inline]
    pub fn cell(&self, loc: Location) -> Cell {
        let mask: Bitboard = loc.into();
        if self.black.intersects(mask) {
            Cell::Black
        } else if self.white.intersects(mask) {
            Cell::White
        } else {
            Cell::Empty
        }
    }

    /// The whole grid, indexed `[row][col]`.
    pub fn cells(&self) -> [[Cell; EDGE_LENGTH]; EDGE_LENGTH] {
        let mut cells = [[Cell::Empty; EDGE_LENGTH]; EDGE_LENGTH];
        for (row, line) in cells.iter_mut().enumerate() {
            for (col, cell) in line.iter_mut().enumerate() {
                *cell = self.cell(Location::from_coords(row, col));
            }
        }
        cells
    }

    /// The opponent stones `player` would capture along `direction` by playing at `loc`.
    ///
    /// The walk starts one step away from `loc`. Opponent stones are collected until
    /// one of `player`'s own stones closes the run; reaching an empty square or the
    /// edge of the board first means nothing is captured in this direction.
    pub fn capture_run(&self, loc: Location, direction: Direction, player: Player) -> LocationList {
        let opponent = (!player).stone();
        let mut run = LocationList::EMPTY;
        let mut cursor = loc.step(direction);

        while let Some(next) = cursor {
            match self.cell(next) {
                Cell::Empty => return LocationList::EMPTY,
                cell if cell == opponent => run.insert(next),
                _ => return run,
            }
            cursor = next.step(direction);
        }

        LocationList::EMPTY
    }

    /// Every stone a move by `player` at `loc` would flip, across all directions.
    #[inline]
    pub fn flips(&self, loc: Location, player: Player) -> LocationList {
        Direction::ALL
            .iter()
            .fold(LocationList::EMPTY, |flips, &direction| {
                flips.union(self.capture_run(loc, direction, player))
            })
    }

    /// Returns whether `player` may play at `loc`: the square must be empty and
    /// at least one direction must capture something.
    pub fn is_legal_move(&self, loc: Location, player: Player) -> bool {
        if self.cell(loc) != Cell::Empty {
            return false;
        }

        Direction::ALL
            .iter()
            .any(|&direction| !self.capture_run(loc, direction, player).is_empty())
    }

    /// All squares where `player` may legally play, scanning the whole board.
    pub fn legal_moves(&self, player: Player) -> LocationList {
        (0..(EDGE_LENGTH * EDGE_LENGTH) as u8)
            .map(Location::from_index)
            .filter(|&loc| self.is_legal_move(loc, player))
            .collect()
    }

    /// Place a stone for `player` at `loc` and flip every captured stone,
    /// returning the flipped locations.
    ///
    /// The move must be legal. This is only checked in debug builds: an illegal
    /// move places the stone without flipping anything. Use
    /// [`Board::try_apply_move`] when legality has not been established.
    pub fn apply_move(&mut self, loc: Location, player: Player) -> LocationList {
        debug_assert!(
            self.is_legal_move(loc, player),
            "{} cannot play at {}",
            player,
            loc
        );

        let flipped = self.flips(loc, player);
        let changed = Bitboard::from(flipped) | Bitboard::from(loc);

        match player {
            Player::Black => {
                self.black |= changed;
                self.white &= !changed;
            }
            Player::White => {
                self.white |= changed;
                self.black &= !changed;
            }
        }

        flipped
    }

    /// Apply a move after checking that it is legal.
    pub fn try_apply_move(&mut self, loc: Location, player: Player) -> Result<LocationList, MoveError> {
        if !self.is_legal_move(loc, player) {
            return Err(MoveError::Illegal {
                location: loc,
                player,
            });
        }

        Ok(self.apply_move(loc, player))
    }

    /// Count the stones of each color.
    #[inline]
    pub fn count_stones(&self) -> Score {
        Score {
            black: self.black.count_occupied(),
            white: self.white.count_occupied(),
        }
    }
}

impl Score {
    /// Stones on the board.
    #[inline]
    pub fn total(self) -> u8 {
        self.black + self.white
    }

    /// The player with more stones, or None when level.
    pub fn leader(self) -> Option<Player> {
        use std::cmp::Ordering;

        match self.black.cmp(&self.white) {
            Ordering::Greater => Some(Player::Black),
            Ordering::Less => Some(Player::White),
            Ordering::Equal => None,
        }
    }

    /// Stones held by `player`.
    #[inline]
    pub fn of(self, player: Player) -> u8 {
        match player {
            Player::Black => self.black,
            Player::White => self.white,
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells = self.cells();
        utils::format_grid(
            cells.iter().flatten().map(|cell| match cell {
                Cell::Empty => '.',
                Cell::Black => '#',
                Cell::White => 'O',
            }),
            f,
        )
    }
}

/// Parse a board from 64 squares in row-major order, ignoring whitespace.
/// Black is `#`, `X` or `B`; white is `O` or `W`; empty is `.`, `-` or `_`.
impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let squares: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if squares.len() != EDGE_LENGTH * EDGE_LENGTH {
            return Err(ParseBoardError::WrongLength(squares.len()));
        }

        let mut black = Bitboard::EMPTY;
        let mut white = Bitboard::EMPTY;

        for (square, &c) in squares.iter().enumerate() {
            let loc: Bitboard = Location::from_coords(square / EDGE_LENGTH, square % EDGE_LENGTH).into();
            match c.to_ascii_uppercase() {
                '#' | 'X' | 'B' => black |= loc,
                'O' | 'W' => white |= loc,
                '.' | '-' | '_' => {}
                _ => return Err(ParseBoardError::InvalidSquare(c)),
            }
        }

        Ok(Self { black, white })
    }
}
