//! Symbol configuration for textual boards.

use crate::tile::Tile;

/// Maps characters to [`Tile`]s when building a [`Board`](crate::Board)
/// from text, and back when rendering one.
///
/// Several characters may mean "open"; the first of each set is used for
/// rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Alphabet {
    pub open: Vec<char>,
    pub barrier: Vec<char>,
}

impl Default for Alphabet {
    fn default() -> Self {
        Self {
            open: vec!['-', '.'],
            barrier: vec!['#'],
        }
    }
}

impl Alphabet {
    /// Create an alphabet from explicit open and barrier symbol sets.
    pub fn new(open: impl Into<Vec<char>>, barrier: impl Into<Vec<char>>) -> Self {
        Self {
            open: open.into(),
            barrier: barrier.into(),
        }
    }

    /// Translate a symbol, or `None` if it belongs to neither set.
    pub fn tile(&self, ch: char) -> Option<Tile> {
        if self.open.contains(&ch) {
            Some(Tile::Open)
        } else if self.barrier.contains(&ch) {
            Some(Tile::Barrier)
        } else {
            None
        }
    }

    /// The rendering symbol for a tile.
    pub fn symbol(&self, tile: Tile) -> char {
        let set = match tile {
            Tile::Open => &self.open,
            Tile::Barrier => &self.barrier,
        };
        match (set.first(), tile) {
            (Some(&ch), _) => ch,
            (None, Tile::Open) => '.',
            (None, Tile::Barrier) => '#',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_symbols() {
        let a = Alphabet::default();
        assert_eq!(a.tile('-'), Some(Tile::Open));
        assert_eq!(a.tile('.'), Some(Tile::Open));
        assert_eq!(a.tile('#'), Some(Tile::Barrier));
        assert_eq!(a.tile('x'), None);
        assert_eq!(a.symbol(Tile::Open), '-');
        assert_eq!(a.symbol(Tile::Barrier), '#');
    }

    #[test]
    fn custom_symbols() {
        let a = Alphabet::new(vec![' '], vec!['X', '@']);
        assert_eq!(a.tile('@'), Some(Tile::Barrier));
        assert_eq!(a.tile('.'), None);
        assert_eq!(a.symbol(Tile::Barrier), 'X');
    }

    #[test]
    fn empty_sets_fall_back_when_rendering() {
        let a = Alphabet {
            open: Vec::new(),
            barrier: Vec::new(),
        };
        assert_eq!(a.symbol(Tile::Open), '.');
        assert_eq!(a.symbol(Tile::Barrier), '#');
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let a: Alphabet = serde_json::from_str(r#"{"barrier":["X"]}"#).unwrap();
        assert_eq!(a.open, vec!['-', '.']);
        assert_eq!(a.barrier, vec!['X']);
    }
}
