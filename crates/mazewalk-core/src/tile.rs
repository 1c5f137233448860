//! The [`Tile`] type — a single board cell marker.

/// A board cell: either enterable or a barrier.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    #[default]
    Open,
    Barrier,
}

impl Tile {
    /// Whether the cell can be entered.
    #[inline]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    /// Whether the cell can never be entered.
    #[inline]
    pub const fn is_barrier(self) -> bool {
        matches!(self, Self::Barrier)
    }
}

impl From<bool> for Tile {
    /// `true` maps to [`Tile::Open`].
    #[inline]
    fn from(open: bool) -> Self {
        if open { Self::Open } else { Self::Barrier }
    }
}
