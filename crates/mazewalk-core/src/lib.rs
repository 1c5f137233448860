//! **mazewalk-core** — core types for grid path puzzles.
//!
//! This crate provides the foundational types used by the *mazewalk*
//! workspace: the [`Coord`] geometry primitive, [`Tile`] cell markers, the
//! validated rectangular [`Board`], the [`Alphabet`] used to build boards from
//! text, and the shared [`GridError`] taxonomy.

pub mod alphabet;
pub mod board;
pub mod error;
pub mod geom;
pub mod tile;

pub use alphabet::Alphabet;
pub use board::{Board, MAX_EXTENT};
pub use error::{Endpoint, GridError};
pub use geom::Coord;
pub use tile::Tile;
