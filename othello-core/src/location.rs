//! Code for working with [`Location`]s on the Othello board.

use crate::bitboard::Bitboard;
use crate::utils::COLUMN_LABELS;
use crate::{Direction, EDGE_LENGTH};
use derive_more::{Display, Error, From, Into};
use std::fmt::{self, Formatter, Write};
use std::iter::FromIterator;

/// A location on the Othello board.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd, Into)]
pub struct Location(Bitboard);

/// A set of locations on the Othello board, which can be iterated in row-major order.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord, From, Into)]
pub struct LocationList(Bitboard);

/// Coordinates outside the 8x8 board were supplied.
#[derive(Clone, Copy, Debug, Display, Error, Eq, PartialEq)]
#[display(fmt = "coordinates ({}, {}) are off the board", row, col)]
pub struct OutOfBoundsError {
    pub row: usize,
    pub col: usize,
}

impl Location {
    /// Convert from a bit index: 0 for the bottom right, 63 for the top left.
    #[inline]
    pub fn from_index(index: u8) -> Self {
        assert!((index as usize) < EDGE_LENGTH * EDGE_LENGTH);
        Self(Bitboard::from(1u64 << index))
    }

    /// Convert into a bit index: 0 for the bottom right, 63 for the top left.
    #[inline]
    pub fn to_index(self) -> u8 {
        let bitboard: u64 = self.0.into();
        bitboard.trailing_zeros() as u8
    }

    /// Convert from row and column coordinates.
    /// Panics if either coordinate is off the board; use [`Location::try_from_coords`]
    /// for unvalidated input.
    pub fn from_coords(row: usize, col: usize) -> Self {
        assert!(row < EDGE_LENGTH && col < EDGE_LENGTH);
        let index = (EDGE_LENGTH - 1 - col) + ((EDGE_LENGTH - 1 - row) * EDGE_LENGTH);
        Self::from_index(index as u8)
    }

    /// Convert from row and column coordinates, rejecting anything off the board.
    pub fn try_from_coords(row: usize, col: usize) -> Result<Self, OutOfBoundsError> {
        if row < EDGE_LENGTH && col < EDGE_LENGTH {
            Ok(Self::from_coords(row, col))
        } else {
            Err(OutOfBoundsError { row, col })
        }
    }

    /// Get the `(row, column)` coordinates.
    pub fn to_coords(self) -> (usize, usize) {
        let square = EDGE_LENGTH * EDGE_LENGTH - 1 - self.to_index() as usize;
        (square / EDGE_LENGTH, square % EDGE_LENGTH)
    }

    /// The neighbouring location one step in `direction`, or None past the edge.
    #[inline]
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (row, col) = self.to_coords();
        let (dr, dc) = direction.offset();
        let row = row as isize + dr;
        let col = col as isize + dc;

        if row < 0 || col < 0 {
            return None;
        }

        Self::try_from_coords(row as usize, col as usize).ok()
    }
}

/// Convert this [`Location`] into string notation ("D3").
impl fmt::Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let (row, col) = self.to_coords();
        let row_str = "12345678".chars().nth(row).ok_or(fmt::Error)?;
        let col_str = COLUMN_LABELS.chars().nth(col).ok_or(fmt::Error)?;
        f.write_char(col_str)?;
        f.write_char(row_str)
    }
}

/// A string was not a location in algebraic notation.
#[derive(Clone, Copy, Debug, Display, Error, Eq, PartialEq)]
#[display(fmt = "invalid location string")]
pub struct ParseLocationError;

/// Build a [`Location`] from 1-indexed string notation: a column letter, then a row digit ("D3").
impl std::str::FromStr for Location {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let col_str = chars.next().ok_or(ParseLocationError)?.to_ascii_uppercase();
        let col = COLUMN_LABELS.find(col_str).ok_or(ParseLocationError)?;
        let row = chars
            .next()
            .ok_or(ParseLocationError)?
            .to_digit(10)
            .ok_or(ParseLocationError)? as usize;

        if row == 0 || chars.next().is_some() {
            return Err(ParseLocationError);
        }

        Self::try_from_coords(row - 1, col).map_err(|_| ParseLocationError)
    }
}

impl LocationList {
    /// The empty list.
    pub const EMPTY: Self = Self(Bitboard::EMPTY);

    /// Returns whether `loc` is in this list.
    #[inline]
    pub fn contains(self, loc: Location) -> bool {
        let loc_bitboard: Bitboard = loc.into();
        loc_bitboard.intersects(self.0)
    }

    /// Add `loc` to this list.
    #[inline]
    pub fn insert(&mut self, loc: Location) {
        self.0 |= Bitboard::from(loc);
    }

    /// Returns whether there are no locations in this list.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0.is_empty()
    }

    /// All locations in either list.
    #[inline]
    pub fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// The `(row, column)` pairs in this list, in row-major order.
    pub fn coords(self) -> Vec<(usize, usize)> {
        self.map(Location::to_coords).collect()
    }
}

impl ExactSizeIterator for LocationList {
    fn len(&self) -> usize {
        self.0.count_occupied() as usize
    }
}

impl Iterator for LocationList {
    type Item = Location;

    fn next(&mut self) -> Option<Location> {
        if self.0.is_empty() {
            return None;
        }

        let bitboard: u64 = self.0.into();
        let next_move: Bitboard = (1u64 << (63 - bitboard.leading_zeros())).into();
        self.0 ^= next_move;

        Some(Location(next_move))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl FromIterator<Location> for LocationList {
    fn from_iter<I: IntoIterator<Item = Location>>(iter: I) -> Self {
        let mut list = Self::EMPTY;
        for loc in iter {
            list.insert(loc);
        }
        list
    }
}

impl fmt::Display for LocationList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let string = self
            .into_iter()
            .map(|mv| mv.to_string())
            .collect::<Vec<String>>()
            .join(", ");

        f.write_fmt(format_args!("[{}]", string))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn location_from_index() {
        assert_eq!(Location::from_index(0), Location(Bitboard::from(1)));
        assert_eq!(Location::from_index(63), Location(Bitboard::from(1 << 63)));
    }

    #[test]
    fn location_to_index() {
        assert_eq!(Location(Bitboard::from(1)).to_index(), 0);
        assert_eq!(Location(Bitboard::from(1 << 63)).to_index(), 63);
    }

    #[test]
    fn location_from_coords() {
        assert_eq!(
            Location::from_coords(0, 0),
            Location(Bitboard::from(1 << 63))
        );
        assert_eq!(Location::from_coords(0, 1), Location(Bitboard::from(1 << 62)));
        assert_eq!(Location::from_coords(1, 0), Location(Bitboard::from(1 << 55)));
        assert_eq!(Location::from_coords(7, 7), Location(Bitboard::from(1)));
    }

    #[test]
    #[should_panic]
    fn location_from_coords_fail() {
        Location::from_coords(0, 8);
    }

    #[test]
    fn location_try_from_coords() {
        assert_eq!(Location::try_from_coords(3, 4), Ok(Location::from_coords(3, 4)));
        assert_eq!(
            Location::try_from_coords(8, 0),
            Err(OutOfBoundsError { row: 8, col: 0 })
        );
        assert_eq!(
            Location::try_from_coords(2, 11).unwrap_err().to_string(),
            "coordinates (2, 11) are off the board"
        );
    }

    #[test]
    fn location_to_coords() {
        assert_eq!(Location(Bitboard::from(1 << 63)).to_coords(), (0, 0));
        assert_eq!(Location(Bitboard::from(1)).to_coords(), (7, 7));
        for row in 0..8 {
            for col in 0..8 {
                assert_eq!(Location::from_coords(row, col).to_coords(), (row, col));
            }
        }
    }

    #[test]
    fn location_step() {
        let corner = Location::from_coords(0, 0);
        assert_eq!(corner.step(Direction::North), None);
        assert_eq!(corner.step(Direction::West), None);
        assert_eq!(corner.step(Direction::NorthEast), None);
        assert_eq!(corner.step(Direction::East), Some(Location::from_coords(0, 1)));
        assert_eq!(
            corner.step(Direction::SouthEast),
            Some(Location::from_coords(1, 1))
        );

        let edge = Location::from_coords(3, 7);
        assert_eq!(edge.step(Direction::East), None);
        assert_eq!(edge.step(Direction::SouthWest), Some(Location::from_coords(4, 6)));
    }

    #[test]
    fn location_from_str_success() {
        assert_eq!(
            Location::from_str("A1"),
            Ok(Location(Bitboard::from(1 << 63)))
        );
        assert_eq!(Location::from_str("h8"), Ok(Location(Bitboard::from(1))));
        assert_eq!(Location::from_str("D3"), Ok(Location::from_coords(2, 3)));
        assert_eq!(Location::from_str(" c4\n"), Ok(Location::from_coords(3, 2)));
    }

    #[test]
    fn location_from_str_fail() {
        assert_eq!(Location::from_str(""), Err(ParseLocationError));
        assert_eq!(Location::from_str("A12"), Err(ParseLocationError));
        assert_eq!(Location::from_str("AA"), Err(ParseLocationError));
        assert_eq!(Location::from_str("A0"), Err(ParseLocationError));
        assert_eq!(Location::from_str("A9"), Err(ParseLocationError));
        assert_eq!(Location::from_str("I5"), Err(ParseLocationError));
    }

    #[test]
    fn location_to_str() {
        assert_eq!(Location(Bitboard::from(1)).to_string(), "H8");
        assert_eq!(Location(Bitboard::from(1 << 63)).to_string(), "A1");
        assert_eq!(Location::from_coords(2, 3).to_string(), "D3");
        assert_eq!(Location::from_str("F6").unwrap().to_string(), "F6");
    }

    #[test]
    fn location_list_iterates_row_major() {
        let list: LocationList = vec![
            Location::from_coords(5, 2),
            Location::from_coords(0, 7),
            Location::from_coords(5, 1),
        ]
        .into_iter()
        .collect();

        assert_eq!(list.len(), 3);
        assert!(list.contains(Location::from_coords(0, 7)));
        assert!(!list.contains(Location::from_coords(7, 0)));
        assert_eq!(list.coords(), vec![(0, 7), (5, 1), (5, 2)]);
        assert_eq!(list.to_string(), "[H1, B6, C6]");
    }

    #[test]
    fn location_list_union() {
        let a: LocationList = std::iter::once(Location::from_coords(1, 1)).collect();
        let b: LocationList = std::iter::once(Location::from_coords(2, 2)).collect();
        assert_eq!(a.union(b).len(), 2);
        assert!(LocationList::EMPTY.is_empty());
        assert_eq!(LocationList::EMPTY.to_string(), "[]");
    }
}
