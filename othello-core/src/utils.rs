//! Miscellaneous project utilities.

use crate::EDGE_LENGTH;
use std::fmt::{self, Display, Formatter};

/// Column labels, left to right.
pub const COLUMN_LABELS: &str = "ABCDEFGH";

/// Format 64 pieces into a labelled grid, row-major from the upper-left.
/// `piece_iter` must yield exactly 64 items.
pub fn format_grid<T, P>(mut piece_iter: T, f: &mut Formatter) -> fmt::Result
where
    T: Iterator<Item = P>,
    P: Display,
{
    write!(f, "  ")?;
    for label in COLUMN_LABELS.chars() {
        write!(f, " {}", label)?;
    }

    for row in 0..EDGE_LENGTH {
        write!(f, "\n {}", row + 1)?;
        for _ in 0..EDGE_LENGTH {
            write!(f, " {}", piece_iter.next().ok_or(fmt::Error)?)?;
        }
    }

    match piece_iter.next() {
        None => Ok(()),
        _ => Err(fmt::Error),
    }
}
