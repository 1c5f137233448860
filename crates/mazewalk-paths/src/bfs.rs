use std::collections::VecDeque;

use mazewalk_core::{Board, Coord};

use crate::traits::Pather;

/// Back-pointer of a cell not yet discovered.
const UNDISCOVERED: usize = usize::MAX;
/// Back-pointer of the search origin.
const ROOT: usize = usize::MAX - 1;

/// Search-scoped state for one breadth-first search.
///
/// A single back-pointer per cell doubles as the discovered flag: a cell with
/// a back-pointer has already been enqueued and is never enqueued again, so
/// the first discovery of a cell is the one kept.
pub(crate) struct Search<'a> {
    board: &'a Board,
    parents: Vec<usize>,
    frontier: VecDeque<usize>,
    nbuf: Vec<Coord>,
}

impl<'a> Search<'a> {
    pub(crate) fn new(board: &'a Board) -> Self {
        Self {
            board,
            parents: vec![UNDISCOVERED; board.len()],
            frontier: VecDeque::new(),
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Expand cells in FIFO order from `from` until `to` is dequeued.
    ///
    /// Returns the path from `from` to `to` inclusive, or `None` once the
    /// frontier is exhausted. Both endpoints must be in bounds.
    pub(crate) fn run<P: Pather>(
        &mut self,
        pather: &P,
        from: Coord,
        to: Coord,
    ) -> Option<Vec<Coord>> {
        let start = self.board.index(from)?;
        let goal = self.board.index(to)?;

        self.parents[start] = ROOT;
        self.frontier.push_back(start);

        let mut expanded = 0usize;
        let found = 'search: loop {
            let Some(ci) = self.frontier.pop_front() else {
                break 'search false;
            };
            if ci == goal {
                break 'search true;
            }
            expanded += 1;

            self.nbuf.clear();
            pather.neighbors(self.board.coord(ci), &mut self.nbuf);

            for &np in self.nbuf.iter() {
                let Some(ni) = self.board.index(np) else {
                    continue;
                };
                if self.parents[ni] != UNDISCOVERED {
                    continue;
                }
                self.parents[ni] = ci;
                self.frontier.push_back(ni);
            }
        };

        if !found {
            log::trace!("frontier exhausted after expanding {expanded} cells");
            return None;
        }
        Some(self.reconstruct(goal))
    }

    /// Follow back-pointers from `goal` to the origin, then reverse.
    fn reconstruct(&self, goal: usize) -> Vec<Coord> {
        let mut path = Vec::new();
        let mut ci = goal;
        while ci != ROOT {
            debug_assert_ne!(ci, UNDISCOVERED, "back-pointer chain left the search tree");
            path.push(self.board.coord(ci));
            ci = self.parents[ci];
        }
        path.reverse();
        path
    }
}
