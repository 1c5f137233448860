//! Unit moves and the compact direction-string encoding of paths.

use std::fmt;

use mazewalk_core::{Coord, GridError};

/// One of the four unit moves.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in neighbor expansion order.
    pub const ALL: [Direction; 4] = [Self::Right, Self::Left, Self::Up, Self::Down];

    /// The (row, col) offset of this move.
    #[inline]
    pub const fn delta(self) -> Coord {
        match self {
            Self::Up => Coord::new(-1, 0),
            Self::Down => Coord::new(1, 0),
            Self::Left => Coord::new(0, -1),
            Self::Right => Coord::new(0, 1),
        }
    }

    /// The encoding character: `U`, `D`, `L` or `R`.
    #[inline]
    pub const fn as_char(self) -> char {
        match self {
            Self::Up => 'U',
            Self::Down => 'D',
            Self::Left => 'L',
            Self::Right => 'R',
        }
    }

    /// Decode an encoding character.
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'U' => Some(Self::Up),
            'D' => Some(Self::Down),
            'L' => Some(Self::Left),
            'R' => Some(Self::Right),
            _ => None,
        }
    }

    /// The move taking `from` to `to`, if they are one unit step apart.
    pub fn between(from: Coord, to: Coord) -> Option<Self> {
        let d = to.checked_sub(from)?;
        Self::ALL.into_iter().find(|dir| dir.delta() == d)
    }

    /// Apply this move to `c`, or `None` if the result leaves the `i32`
    /// coordinate space.
    #[inline]
    pub fn step(self, c: Coord) -> Option<Coord> {
        let d = self.delta();
        c.checked_shift(d.row, d.col)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Encode a path as one direction character per step.
///
/// The result has `path.len() - 1` characters (empty for paths of zero or one
/// cell). Fails with [`GridError::InvalidStep`] at the first pair of cells
/// that are not a unit move apart.
pub fn encode_directions(path: &[Coord]) -> Result<String, GridError> {
    path.windows(2)
        .enumerate()
        .map(|(index, pair)| {
            Direction::between(pair[0], pair[1])
                .map(Direction::as_char)
                .ok_or(GridError::InvalidStep {
                    index,
                    from: pair[0],
                    to: pair[1],
                })
        })
        .collect()
}

/// Rebuild the cell sequence described by `start` and a direction string.
///
/// This is the inverse of [`encode_directions`]: replaying a solution's
/// directions from its first cell yields its path. Fails with
/// [`GridError::InvalidDirection`] on an unknown character and with
/// [`GridError::StepOverflow`] if a move leaves the `i32` coordinate space.
pub fn replay(start: Coord, directions: &str) -> Result<Vec<Coord>, GridError> {
    let mut path = Vec::with_capacity(directions.len() + 1);
    path.push(start);
    let mut cur = start;
    for (index, ch) in directions.chars().enumerate() {
        let dir = Direction::from_char(ch).ok_or(GridError::InvalidDirection { ch, index })?;
        cur = dir
            .step(cur)
            .ok_or(GridError::StepOverflow { index, from: cur })?;
        path.push(cur);
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(row: i32, col: i32) -> Coord {
        Coord::new(row, col)
    }

    #[test]
    fn between_unit_moves() {
        let o = c(3, 3);
        assert_eq!(Direction::between(o, c(3, 4)), Some(Direction::Right));
        assert_eq!(Direction::between(o, c(3, 2)), Some(Direction::Left));
        assert_eq!(Direction::between(o, c(2, 3)), Some(Direction::Up));
        assert_eq!(Direction::between(o, c(4, 3)), Some(Direction::Down));
        assert_eq!(Direction::between(o, o), None);
        assert_eq!(Direction::between(o, c(4, 4)), None);
        assert_eq!(Direction::between(o, c(3, 5)), None);
    }

    #[test]
    fn chars_round_trip() {
        for dir in Direction::ALL {
            assert_eq!(Direction::from_char(dir.as_char()), Some(dir));
            assert_eq!(dir.to_string(), dir.as_char().to_string());
        }
        assert_eq!(Direction::from_char('u'), None);
    }

    #[test]
    fn encode_path() {
        let path = [c(0, 0), c(0, 1), c(0, 2), c(1, 2), c(2, 2)];
        assert_eq!(encode_directions(&path).unwrap(), "RRDD");

        let back = [c(2, 2), c(2, 1), c(1, 1)];
        assert_eq!(encode_directions(&back).unwrap(), "LU");
    }

    #[test]
    fn encode_trivial_paths() {
        assert_eq!(encode_directions(&[]).unwrap(), "");
        assert_eq!(encode_directions(&[c(1, 1)]).unwrap(), "");
    }

    #[test]
    fn encode_rejects_jumps() {
        let path = [c(0, 0), c(0, 1), c(1, 2)];
        assert_eq!(
            encode_directions(&path),
            Err(GridError::InvalidStep {
                index: 1,
                from: c(0, 1),
                to: c(1, 2),
            })
        );
    }

    #[test]
    fn replay_inverts_encoding() {
        let path = vec![c(0, 0), c(1, 0), c(2, 0), c(2, 1), c(2, 2), c(1, 2), c(0, 2)];
        let dirs = encode_directions(&path).unwrap();
        assert_eq!(dirs, "DDRRUU");
        assert_eq!(replay(c(0, 0), &dirs).unwrap(), path);
        assert_eq!(replay(c(4, 4), "").unwrap(), vec![c(4, 4)]);
    }

    #[test]
    fn encode_rejects_far_apart_cells() {
        let path = [c(i32::MIN, 0), c(1, 0)];
        assert_eq!(
            encode_directions(&path),
            Err(GridError::InvalidStep {
                index: 0,
                from: c(i32::MIN, 0),
                to: c(1, 0),
            })
        );
        assert_eq!(Direction::between(c(0, i32::MAX), c(0, -1)), None);
    }

    #[test]
    fn step_at_coordinate_limits() {
        assert_eq!(Direction::Down.step(c(i32::MAX, 0)), None);
        assert_eq!(Direction::Left.step(c(0, i32::MIN)), None);
        assert_eq!(Direction::Up.step(c(i32::MAX, 0)), Some(c(i32::MAX - 1, 0)));
    }

    #[test]
    fn replay_rejects_overflowing_moves() {
        assert_eq!(
            replay(c(i32::MAX - 1, 0), "DD"),
            Err(GridError::StepOverflow {
                index: 1,
                from: c(i32::MAX, 0),
            })
        );
    }

    #[test]
    fn replay_rejects_unknown_direction() {
        assert_eq!(
            replay(c(0, 0), "RRX"),
            Err(GridError::InvalidDirection { ch: 'X', index: 2 })
        );
    }
}
