use mazewalk_core::{Board, Coord};

/// Minimal pathfinding interface — provides neighbor enumeration.
pub trait Pather {
    /// Append enterable neighbors of `c` into `buf`, in expansion order.
    /// The caller clears `buf` before calling.
    fn neighbors(&self, c: Coord, buf: &mut Vec<Coord>);
}

impl Pather for Board {
    /// In-bounds open cells to the right, left, up and down, in that order.
    fn neighbors(&self, c: Coord, buf: &mut Vec<Coord>) {
        buf.extend(c.neighbors_4().into_iter().filter(|&n| self.is_open(n)));
    }
}
