//! Error types shared by board construction and path search.

use std::fmt;

use thiserror::Error;

use crate::geom::Coord;

/// Which end of a search a coordinate belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Endpoint {
    Source,
    Destination,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source => f.write_str("source"),
            Self::Destination => f.write_str("destination"),
        }
    }
}

/// Caller-input errors.
///
/// Reachability outcomes (a barrier endpoint, disconnected regions) are not
/// errors: searches report them as "no path" instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// The board has no rows, or its first row has no cells.
    #[error("grid is empty: it must have at least one row and one column")]
    EmptyGrid,
    /// A row's length differs from the first row's.
    #[error("grid is not rectangular: row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A dimension exceeds what a [`Coord`] component can address.
    #[error("grid of {rows}x{cols} exceeds the maximum of {max} rows or columns")]
    TooLarge { rows: usize, cols: usize, max: usize },
    /// A search endpoint lies outside the board.
    #[error("{role} {coord} is outside the {rows}x{cols} grid")]
    OutOfBounds {
        role: Endpoint,
        coord: Coord,
        rows: usize,
        cols: usize,
    },
    /// A board symbol that is neither open nor barrier.
    #[error("invalid grid symbol \u{201c}{ch}\u{201d} at ({row}, {col})")]
    InvalidSymbol { ch: char, row: usize, col: usize },
    /// Two consecutive path cells are not one unit step apart.
    #[error("path step {index} from {from} to {to} is not a unit move")]
    InvalidStep { index: usize, from: Coord, to: Coord },
    /// A direction character outside {U, D, L, R}.
    #[error("invalid direction \u{201c}{ch}\u{201d} at position {index}")]
    InvalidDirection { ch: char, index: usize },
    /// Replaying move `index` from `from` leaves the `i32` coordinate space.
    #[error("direction {index} from {from} overflows the coordinate range")]
    StepOverflow { index: usize, from: Coord },
}

impl GridError {
    /// Whether the error describes a badly shaped grid.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            Self::EmptyGrid | Self::RaggedRow { .. } | Self::TooLarge { .. }
        )
    }
}
