use mazewalk_core::{Board, Coord, Endpoint, GridError, Tile};

use crate::bfs::Search;
use crate::direction::encode_directions;

/// A shortest path together with its direction encoding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    path: Vec<Coord>,
    directions: String,
}

impl Solution {
    /// Cells from source to destination, both inclusive.
    pub fn path(&self) -> &[Coord] {
        &self.path
    }

    /// One of `U`, `D`, `L`, `R` per step; empty when source equals
    /// destination.
    pub fn directions(&self) -> &str {
        &self.directions
    }

    /// Number of moves, i.e. `path().len() - 1`.
    pub fn steps(&self) -> usize {
        self.directions.len()
    }

    /// Split into the path and its direction string.
    pub fn into_parts(self) -> (Vec<Coord>, String) {
        (self.path, self.directions)
    }
}

/// Shortest-path solver over a borrowed [`Board`].
///
/// `PathFinder` holds no search state of its own: every [`solve`](Self::solve)
/// call allocates a fresh frontier and back-pointer table, so one finder can
/// serve many queries, including from several threads at once.
#[derive(Debug, Clone, Copy)]
pub struct PathFinder<'a> {
    board: &'a Board,
}

impl<'a> PathFinder<'a> {
    /// Create a solver for `board`.
    pub fn new(board: &'a Board) -> Self {
        Self { board }
    }

    /// Find the shortest 4-directional path from `source` to `destination`.
    ///
    /// Returns `Ok(None)` when the destination cannot be reached, including
    /// when either endpoint is a barrier. Among equally short paths, the one
    /// returned is fixed by expanding neighbors right, left, up, down.
    ///
    /// # Errors
    ///
    /// [`GridError::OutOfBounds`] if either endpoint lies outside the board.
    pub fn solve(
        &self,
        source: Coord,
        destination: Coord,
    ) -> Result<Option<Solution>, GridError> {
        self.board.check_bounds(source, Endpoint::Source)?;
        self.board.check_bounds(destination, Endpoint::Destination)?;
        log::trace!(
            "solving {source} -> {destination} on {}x{} board",
            self.board.rows(),
            self.board.cols()
        );

        let is_barrier = |c| self.board.at(c).is_some_and(Tile::is_barrier);
        if is_barrier(source) || is_barrier(destination) {
            log::debug!("no path from {source} to {destination}: endpoint is a barrier");
            return Ok(None);
        }

        let Some(path) = Search::new(self.board).run(self.board, source, destination) else {
            log::debug!("no path from {source} to {destination}: unreachable");
            return Ok(None);
        };
        let directions = encode_directions(&path)?;
        log::debug!(
            "path from {source} to {destination}: {} steps, {directions:?}",
            directions.len()
        );
        Ok(Some(Solution { path, directions }))
    }
}

/// Solve a single query on `board`; shorthand for
/// `PathFinder::new(board).solve(source, destination)`.
pub fn solve_puzzle(
    board: &Board,
    source: Coord,
    destination: Coord,
) -> Result<Option<Solution>, GridError> {
    PathFinder::new(board).solve(source, destination)
}
