//! The [`Board`] type — a validated rectangular grid of [`Tile`]s.
//!
//! A board is immutable once built. Construction checks the shape (at least
//! one row and one column, all rows equal length) so that searches never have
//! to handle malformed input.

use std::fmt;

use crate::alphabet::Alphabet;
use crate::error::{Endpoint, GridError};
use crate::geom::Coord;
use crate::tile::Tile;

/// Largest row or column count; every cell must be addressable by a [`Coord`].
pub const MAX_EXTENT: usize = i32::MAX as usize;

/// Fail with [`GridError::TooLarge`] if either dimension exceeds [`MAX_EXTENT`].
fn check_extent(rows: usize, cols: usize) -> Result<(), GridError> {
    if rows > MAX_EXTENT || cols > MAX_EXTENT {
        return Err(GridError::TooLarge {
            rows,
            cols,
            max: MAX_EXTENT,
        });
    }
    Ok(())
}

/// A rectangular grid of open and barrier cells, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    tiles: Vec<Tile>,
    rows: usize,
    cols: usize,
}

impl Board {
    /// Build a board from rows of tiles.
    ///
    /// Fails with [`GridError::EmptyGrid`] if there are no rows or the first
    /// row is empty, and with [`GridError::RaggedRow`] if any row's length
    /// differs from the first. Boards with more than [`MAX_EXTENT`] rows or
    /// columns fail with [`GridError::TooLarge`].
    pub fn from_rows<R>(rows: impl IntoIterator<Item = R>) -> Result<Self, GridError>
    where
        R: IntoIterator<Item = Tile>,
    {
        let mut tiles = Vec::new();
        let mut cols = 0;
        let mut nrows = 0;
        for (i, row) in rows.into_iter().enumerate() {
            let before = tiles.len();
            tiles.extend(row);
            let found = tiles.len() - before;
            if i == 0 {
                if found == 0 {
                    return Err(GridError::EmptyGrid);
                }
                cols = found;
            } else if found != cols {
                return Err(GridError::RaggedRow {
                    row: i,
                    expected: cols,
                    found,
                });
            }
            nrows += 1;
        }
        if nrows == 0 {
            return Err(GridError::EmptyGrid);
        }
        check_extent(nrows, cols)?;
        Ok(Self {
            tiles,
            rows: nrows,
            cols,
        })
    }

    /// Build a board from text lines using the default [`Alphabet`]
    /// (`-` or `.` open, `#` barrier).
    pub fn from_lines<S: AsRef<str>>(
        lines: impl IntoIterator<Item = S>,
    ) -> Result<Self, GridError> {
        Self::from_lines_with(&Alphabet::default(), lines)
    }

    /// Build a board from text lines using a custom alphabet.
    pub fn from_lines_with<S: AsRef<str>>(
        alphabet: &Alphabet,
        lines: impl IntoIterator<Item = S>,
    ) -> Result<Self, GridError> {
        let mut rows = Vec::new();
        for (r, line) in lines.into_iter().enumerate() {
            let row = line
                .as_ref()
                .chars()
                .enumerate()
                .map(|(c, ch)| {
                    alphabet
                        .tile(ch)
                        .ok_or(GridError::InvalidSymbol { ch, row: r, col: c })
                })
                .collect::<Result<Vec<Tile>, GridError>>()?;
            rows.push(row);
        }
        Self::from_rows(rows)
    }

    /// Parse a newline-separated board with the default alphabet.
    pub fn parse(text: &str) -> Result<Self, GridError> {
        Self::from_lines(text.lines())
    }

    /// Parse a newline-separated board with a custom alphabet.
    pub fn parse_with(alphabet: &Alphabet, text: &str) -> Result<Self, GridError> {
        Self::from_lines_with(alphabet, text.lines())
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always `false`: construction rejects empty boards.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Whether `c` lies within `[0, rows) x [0, cols)`.
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        c.row >= 0 && c.col >= 0 && (c.row as usize) < self.rows && (c.col as usize) < self.cols
    }

    /// Convert a coordinate to a flat row-major index. Returns `None` if out
    /// of bounds.
    #[inline]
    pub fn index(&self, c: Coord) -> Option<usize> {
        if !self.contains(c) {
            return None;
        }
        Some(c.row as usize * self.cols + c.col as usize)
    }

    /// Convert a flat index back to a coordinate.
    ///
    /// Both components fit in `i32`: construction caps each dimension at
    /// [`MAX_EXTENT`].
    #[inline]
    pub fn coord(&self, idx: usize) -> Coord {
        Coord::new((idx / self.cols) as i32, (idx % self.cols) as i32)
    }

    /// The tile at `c`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, c: Coord) -> Option<Tile> {
        self.index(c).map(|i| self.tiles[i])
    }

    /// Whether `c` is in bounds and open.
    #[inline]
    pub fn is_open(&self, c: Coord) -> bool {
        self.at(c).is_some_and(Tile::is_open)
    }

    /// Fail with [`GridError::OutOfBounds`] if `c` lies outside the board.
    pub fn check_bounds(&self, c: Coord, role: Endpoint) -> Result<(), GridError> {
        if self.contains(c) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds {
                role,
                coord: c,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Iterate over the rows as tile slices.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.tiles.chunks(self.cols)
    }

    /// Render the board with the given alphabet, one line per row.
    pub fn render(&self, alphabet: &Alphabet) -> String {
        let mut s = String::with_capacity(self.rows * (self.cols + 1));
        for (i, row) in self.iter_rows().enumerate() {
            if i > 0 {
                s.push('\n');
            }
            s.extend(row.iter().map(|&t| alphabet.symbol(t)));
        }
        s
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&Alphabet::new(vec!['.'], vec!['#'])))
    }
}
