//! Geometry primitive: [`Coord`].
//!
//! Coordinates are matrix-style: `row` grows downward, `col` grows rightward,
//! both 0-indexed from the top-left corner of a board.

use std::fmt;
use std::ops::{Add, Sub};

/// A (row, column) position on a board.
///
/// Components are signed so that neighbour candidates just outside the board
/// (row `-1`, column `-1`) can be represented and rejected by bounds checks.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    /// Top-left corner (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new coordinate.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a coordinate shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// Like [`shift`](Self::shift), but `None` on `i32` overflow.
    #[inline]
    pub const fn checked_shift(self, drow: i32, dcol: i32) -> Option<Self> {
        match (self.row.checked_add(drow), self.col.checked_add(dcol)) {
            (Some(row), Some(col)) => Some(Self { row, col }),
            _ => None,
        }
    }

    /// Componentwise `self - rhs`, or `None` on `i32` overflow.
    #[inline]
    pub const fn checked_sub(self, rhs: Coord) -> Option<Self> {
        match (self.row.checked_sub(rhs.row), self.col.checked_sub(rhs.col)) {
            (Some(row), Some(col)) => Some(Self { row, col }),
            _ => None,
        }
    }

    /// The four cardinal neighbours in expansion order: right, left, up, down.
    ///
    /// Searches rely on this order to break ties between equally short paths.
    #[inline]
    pub const fn neighbors_4(self) -> [Coord; 4] {
        [
            self.shift(0, 1),
            self.shift(0, -1),
            self.shift(-1, 0),
            self.shift(1, 0),
        ]
    }

    /// Whether `other` is exactly one unit step away along a single axis.
    #[inline]
    pub fn is_adjacent(self, other: Coord) -> bool {
        (self.row - other.row).abs() + (self.col - other.col).abs() == 1
    }
}

// --- trait impls for Coord ---

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coord {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Coord {
    #[inline]
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl From<Coord> for (i32, i32) {
    #[inline]
    fn from(c: Coord) -> Self {
        (c.row, c.col)
    }
}

impl Add for Coord {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Coord {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coord_arithmetic() {
        let a = Coord::new(1, 2);
        let b = Coord::new(3, 4);
        assert_eq!(a + b, Coord::new(4, 6));
        assert_eq!(b - a, Coord::new(2, 2));
        assert_eq!(a.shift(-1, 1), Coord::new(0, 3));
    }

    #[test]
    fn checked_arithmetic() {
        let a = Coord::new(1, 2);
        assert_eq!(a.checked_shift(-1, 3), Some(Coord::new(0, 5)));
        assert_eq!(a.checked_sub(Coord::new(1, 1)), Some(Coord::new(0, 1)));
        assert_eq!(Coord::new(i32::MAX, 0).checked_shift(1, 0), None);
        assert_eq!(Coord::new(0, i32::MIN).checked_shift(0, -1), None);
        assert_eq!(Coord::new(i32::MIN, 0).checked_sub(Coord::new(1, 0)), None);
        assert_eq!(Coord::new(0, 1).checked_sub(Coord::new(0, i32::MIN)), None);
    }

    #[test]
    fn neighbors_in_expansion_order() {
        let c = Coord::new(5, 5);
        assert_eq!(
            c.neighbors_4(),
            [
                Coord::new(5, 6),
                Coord::new(5, 4),
                Coord::new(4, 5),
                Coord::new(6, 5),
            ]
        );
    }

    #[test]
    fn neighbors_of_origin_go_negative() {
        let n = Coord::ZERO.neighbors_4();
        assert_eq!(n[1], Coord::new(0, -1));
        assert_eq!(n[2], Coord::new(-1, 0));
    }

    #[test]
    fn adjacency() {
        let c = Coord::new(2, 2);
        assert!(c.is_adjacent(Coord::new(2, 3)));
        assert!(c.is_adjacent(Coord::new(1, 2)));
        assert!(!c.is_adjacent(c));
        assert!(!c.is_adjacent(Coord::new(3, 3)));
        assert!(!c.is_adjacent(Coord::new(2, 4)));
    }

    #[test]
    fn ordering_is_row_major() {
        let mut v = vec![Coord::new(1, 0), Coord::new(0, 2), Coord::new(0, 1)];
        v.sort();
        assert_eq!(v, vec![Coord::new(0, 1), Coord::new(0, 2), Coord::new(1, 0)]);
    }

    #[test]
    fn tuple_conversions() {
        let c: Coord = (3, 7).into();
        assert_eq!(c, Coord::new(3, 7));
        let t: (i32, i32) = c.into();
        assert_eq!(t, (3, 7));
        assert_eq!(c.to_string(), "(3, 7)");
    }
}
