//! Shortest-path search on grid puzzles.
//!
//! Given a [`Board`](mazewalk_core::Board) of open and barrier cells and two
//! coordinates, [`PathFinder::solve`] runs an unweighted breadth-first search
//! with 4-directional movement and returns the shortest path as both a
//! sequence of cells and a compact direction string over `U`, `D`, `L`, `R`.
//!
//! ```
//! use mazewalk_core::{Board, Coord};
//! use mazewalk_paths::solve_puzzle;
//!
//! let board = Board::parse(".#.\n.#.\n...").unwrap();
//! let solution = solve_puzzle(&board, Coord::new(0, 0), Coord::new(0, 2))
//!     .unwrap()
//!     .expect("reachable");
//! assert_eq!(solution.directions(), "DDRRUU");
//! assert_eq!(solution.path().len(), 7);
//! ```
//!
//! Outcomes are split by kind:
//!
//! | Situation | Result |
//! |---|---|
//! | destination reachable | `Ok(Some(solution))` |
//! | source equals destination | `Ok(Some(_))` with a one-cell path |
//! | barrier endpoint, or no connecting route | `Ok(None)` |
//! | endpoint outside the board | `Err(GridError::OutOfBounds)` |
//!
//! Malformed boards (empty or ragged) are rejected earlier, when the
//! [`Board`](mazewalk_core::Board) is built.

mod bfs;
mod direction;
mod pathfinder;
mod traits;

pub use direction::{Direction, encode_directions, replay};
pub use pathfinder::{PathFinder, Solution, solve_puzzle};
pub use traits::Pather;
