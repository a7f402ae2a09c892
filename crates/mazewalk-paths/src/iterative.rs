//! Explicit-stack variant of the exhaustive search.

use log::{debug, trace};
use mazewalk_core::Point;

use crate::MazeSearch;
use crate::search::SearchResult;
use crate::traits::Pather;
use crate::visited::Trail;

/// A pending search state on the frontier.
struct Frame {
    pos: Point,
    distance: usize,
    trail: Trail,
}

impl MazeSearch {
    /// Same search as [`search_from`](Self::search_from), driven by a LIFO
    /// frontier instead of recursion.
    ///
    /// Children are pushed in reverse direction order so they are popped up,
    /// right, down, left; each subtree is exhausted before its next sibling
    /// is examined, so the bound evolves and results come out exactly as in
    /// the recursive engine. Frames share their common path prefix through a
    /// [`Trail`].
    pub fn search_iterative<P: Pather>(&mut self, pather: &P, start: Point) -> Vec<SearchResult> {
        self.reset();

        let mut results = Vec::new();
        let mut stack = vec![Frame {
            pos: start,
            distance: 0,
            trail: Trail::new(),
        }];
        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some(frame) = stack.pop() {
            self.stats.expanded += 1;

            if pather.is_target(frame.pos) {
                if self.bound.record(frame.distance) {
                    debug!("reached target at distance {}, bound lowered", frame.distance);
                }
                self.stats.completed += 1;
                results.push(SearchResult {
                    length: frame.distance,
                    path: frame.trail.to_vec(),
                });
                continue;
            }

            if self.bound.prunes(frame.distance) {
                self.stats.pruned += 1;
                trace!("pruned {} at distance {}", frame.pos, frame.distance);
                continue;
            }

            let next = nbuf.cardinal(frame.pos, |dir, n| {
                pather.can_move(frame.pos, dir) && n != start && !frame.trail.contains(n)
            });
            for &n in next.iter().rev() {
                stack.push(Frame {
                    pos: n,
                    distance: frame.distance + 1,
                    trail: frame.trail.push(n),
                });
            }
        }

        self.nbuf = nbuf;
        debug!(
            "iterative search from {start}: {} results, shortest {:?}, {:?}",
            results.len(),
            self.bound(),
            self.stats
        );
        results
    }
}
