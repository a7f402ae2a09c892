//! Recursive exhaustive depth-first search.

use log::{debug, trace};
use mazewalk_core::{Dir, Point};

use crate::bound::ShortestBound;
use crate::neighbors::Neighbors;
use crate::traits::Pather;
use crate::visited::VisitedSet;

/// One completed path from the start to the target.
///
/// `path` lists every cell entered after the start, ending with the target,
/// so `length == path.len()` and the first step is `path[0]`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    pub length: usize,
    pub path: Vec<Point>,
}

impl SearchResult {
    /// The cell entered first from the start, or `None` when start was
    /// already the target.
    #[inline]
    pub fn first_step(&self) -> Option<Point> {
        self.path.first().copied()
    }
}

/// Counters gathered during the last search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Search states entered (recursive calls or popped frames).
    pub expanded: usize,
    /// States abandoned because they reached the bound.
    pub pruned: usize,
    /// Paths that reached the target.
    pub completed: usize,
}

/// Exhaustive path search over a [`Pather`].
///
/// `MazeSearch` owns the [`ShortestBound`] for one top-level search. The
/// bound is the only state shared across branches: every call sees it as
/// left by the calls that ran before it, and lowering it is the only side
/// effect of reaching the target.
#[derive(Debug, Default)]
pub struct MazeSearch {
    pub(crate) bound: ShortestBound,
    pub(crate) stats: SearchStats,
    // scratch buffer for the explicit-stack engine
    pub(crate) nbuf: Neighbors,
}

impl MazeSearch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Length of the shortest path found by the last search, if any.
    #[inline]
    pub fn bound(&self) -> Option<usize> {
        self.bound.get()
    }

    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Forget the bound and counters left by a previous search.
    pub fn reset(&mut self) {
        self.bound.clear();
        self.stats = SearchStats::default();
    }

    /// Enumerate every simple path from `start` to the target that survives
    /// bound pruning, in up/right/down/left exploration order.
    ///
    /// The bound is reset first, so consecutive calls are independent.
    /// Returns an empty list when the target is unreachable.
    pub fn search_from<P: Pather>(&mut self, pather: &P, start: Point) -> Vec<SearchResult> {
        self.reset();
        let results = self.search(pather, &VisitedSet::new(start), 0, start, &[]);
        debug!(
            "search from {start}: {} results, shortest {:?}, {:?}",
            results.len(),
            self.bound(),
            self.stats
        );
        results
    }

    /// One step of the recursive search.
    ///
    /// `visited` must contain `position`; `distance` is the number of steps
    /// taken to reach it and `path` the cells entered so far (excluding the
    /// start). The bound is NOT reset, so this can continue a search already
    /// in progress; use [`search_from`](Self::search_from) for a fresh one.
    pub fn search<P: Pather>(
        &mut self,
        pather: &P,
        visited: &VisitedSet,
        distance: usize,
        position: Point,
        path: &[Point],
    ) -> Vec<SearchResult> {
        self.stats.expanded += 1;

        if pather.is_target(position) {
            if self.bound.record(distance) {
                debug!("reached target at distance {distance}, bound lowered");
            }
            self.stats.completed += 1;
            return vec![SearchResult {
                length: distance,
                path: path.to_vec(),
            }];
        }

        if self.bound.prunes(distance) {
            self.stats.pruned += 1;
            trace!("pruned {position} at distance {distance}");
            return Vec::new();
        }

        let mut results = Vec::new();
        for dir in Dir::ALL {
            let next = position.step(dir);
            if !pather.can_move(position, dir) || visited.contains(next) {
                continue;
            }
            let mut branch = Vec::with_capacity(path.len() + 1);
            branch.extend_from_slice(path);
            branch.push(next);
            results.extend(self.search(
                pather,
                &visited.with(next),
                distance + 1,
                next,
                &branch,
            ));
        }
        results
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::{HashSet, VecDeque};

    use super::*;
    use crate::distance::manhattan;
    use mazewalk_core::Maze;
    use rand::{Rng, RngExt, SeedableRng};

    pub(crate) fn sample_maze() -> Maze {
        Maze::new(
            &[
                [0, 0, 0, 0, 0, 0, 0, 0],
                [0, 0, 0, 0, 0, 0, 0, 0],
                [0, 0, 0, 0, 1, 1, 1, 1],
                [0, 0, 0, 0, 0, 0, 0, 0],
                [1, 1, 1, 1, 1, 0, 0, 0],
                [0, 0, 0, 0, 1, 0, 0, 0],
                [0, 0, 0, 0, 0, 0, 0, 0],
                [0, 0, 0, 0, 0, 0, 0, 0],
            ],
            Point::new(0, 7),
        )
        .unwrap()
    }

    pub(crate) fn random_maze(rng: &mut impl Rng, rows: usize, cols: usize) -> (Maze, Point) {
        let start = Point::new(rng.random_range(0..rows as i32), rng.random_range(0..cols as i32));
        let target = Point::new(rng.random_range(0..rows as i32), rng.random_range(0..cols as i32));
        let grid: Vec<Vec<i32>> = (0..rows as i32)
            .map(|x| {
                (0..cols as i32)
                    .map(|y| {
                        let p = Point::new(x, y);
                        if p != start && p != target && rng.random_range(0..4) == 0 {
                            1
                        } else {
                            0
                        }
                    })
                    .collect()
            })
            .collect();
        (Maze::new(&grid, target).unwrap(), start)
    }

    /// Breadth-first distance from `start` to the target, for cross-checking.
    pub(crate) fn bfs_distance(maze: &Maze, start: Point) -> Option<usize> {
        let mut seen = HashSet::from([start]);
        let mut queue = VecDeque::from([(start, 0)]);
        while let Some((p, d)) = queue.pop_front() {
            if maze.is_target(p) {
                return Some(d);
            }
            for dir in Dir::ALL {
                let n = p.step(dir);
                if maze.can_move(p, dir) && seen.insert(n) {
                    queue.push_back((n, d + 1));
                }
            }
        }
        None
    }

    /// Every consecutive pair adjacent, no repeats, start never re-entered,
    /// ends at the target.
    pub(crate) fn assert_valid_path(maze: &Maze, start: Point, r: &SearchResult) {
        assert_eq!(r.length, r.path.len());
        let mut prev = start;
        let mut seen = HashSet::from([start]);
        for &p in &r.path {
            assert!(prev.is_adjacent(p), "{prev} -> {p} is not a single step");
            assert!(maze.is_open(p), "{p} is not open");
            assert!(seen.insert(p), "{p} visited twice");
            prev = p;
        }
        assert!(maze.is_target(prev));
    }

    #[test]
    fn open_grid_shortest_is_manhattan() {
        let start = Point::new(7, 0);
        let target = Point::new(0, 7);
        let maze = Maze::open(8, 8, target).unwrap();
        let mut search = MazeSearch::new();
        let results = search.search_from(&maze, start);

        let shortest = results.iter().map(|r| r.length).min().unwrap();
        assert_eq!(shortest as i32, manhattan(start, target));
        assert_eq!(search.bound(), Some(14));
        // C(14, 7) monotone paths.
        assert_eq!(results.iter().filter(|r| r.length == 14).count(), 3432);
    }

    #[test]
    fn open_grid_various_pairs() {
        let maze = Maze::open(4, 5, Point::new(1, 3)).unwrap();
        let mut search = MazeSearch::new();
        for start in maze.bounds() {
            let results = search.search_from(&maze, start);
            assert_eq!(
                search.bound(),
                Some(manhattan(start, maze.target()) as usize),
                "from {start}"
            );
            for r in &results {
                assert_valid_path(&maze, start, r);
            }
        }
    }

    #[test]
    fn sample_maze_detours_around_walls() {
        let maze = sample_maze();
        let start = Point::new(7, 0);
        let mut search = MazeSearch::new();
        let results = search.search_from(&maze, start);

        assert_eq!(search.bound(), Some(18));
        assert_eq!(bfs_distance(&maze, start), Some(18));
        for r in &results {
            assert_valid_path(&maze, start, r);
        }
        let shortest: Vec<_> = results.iter().filter(|r| r.length == 18).collect();
        assert_eq!(shortest.len(), 30);
        assert_eq!(shortest[0].first_step(), Some(Point::new(6, 0)));
    }

    #[test]
    fn bound_equals_min_result_length() {
        let maze = sample_maze();
        let mut search = MazeSearch::new();
        let results = search.search_from(&maze, Point::new(5, 0));
        assert_eq!(search.bound(), results.iter().map(|r| r.length).min());
        let stats = search.stats();
        assert_eq!(stats.completed, results.len());
        assert!(stats.pruned > 0);
        assert!(stats.expanded >= stats.completed + stats.pruned);
    }

    #[test]
    fn start_is_target() {
        let maze = sample_maze();
        let mut search = MazeSearch::new();
        let results = search.search_from(&maze, maze.target());
        assert_eq!(
            results,
            vec![SearchResult {
                length: 0,
                path: Vec::new()
            }]
        );
        assert_eq!(search.bound(), Some(0));
        assert_eq!(results[0].first_step(), None);
    }

    #[test]
    fn enclosed_target_yields_nothing() {
        let maze = Maze::new(
            &[
                [0, 0, 0, 0, 0],
                [0, 1, 1, 1, 0],
                [0, 1, 0, 1, 0],
                [0, 1, 1, 1, 0],
                [0, 0, 0, 0, 0],
            ],
            Point::new(2, 2),
        )
        .unwrap();
        let mut search = MazeSearch::new();
        let results = search.search_from(&maze, Point::new(0, 0));
        assert!(results.is_empty());
        assert_eq!(search.bound(), None);
        assert_eq!(search.stats().pruned, 0);
    }

    #[test]
    fn bound_resets_between_searches() {
        let maze = Maze::open(3, 3, Point::new(0, 0)).unwrap();
        let mut search = MazeSearch::new();
        search.search_from(&maze, Point::new(0, 1));
        assert_eq!(search.bound(), Some(1));

        // A stale bound of 1 would prune everything from the far corner.
        let results = search.search_from(&maze, Point::new(2, 2));
        assert_eq!(search.bound(), Some(4));
        assert_eq!(results.iter().filter(|r| r.length == 4).count(), 6);
    }

    #[test]
    fn results_follow_direction_order() {
        // Both routes across a 2x2 grid: the up-first one is found first.
        let maze = Maze::new(&[[0, 0], [0, 0]], Point::new(0, 1)).unwrap();
        let mut search = MazeSearch::new();
        let results = search.search_from(&maze, Point::new(1, 0));
        let shortest: Vec<_> = results
            .iter()
            .filter(|r| r.length == 2)
            .map(|r| r.path.clone())
            .collect();
        assert_eq!(
            shortest,
            vec![
                vec![Point::new(0, 0), Point::new(0, 1)],
                vec![Point::new(1, 1), Point::new(0, 1)],
            ]
        );
    }

    #[test]
    fn random_mazes_match_breadth_first_distance() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        let mut search = MazeSearch::new();
        for _ in 0..40 {
            let (maze, start) = random_maze(&mut rng, 4, 5);
            let results = search.search_from(&maze, start);
            assert_eq!(search.bound(), bfs_distance(&maze, start));
            assert_eq!(search.bound(), results.iter().map(|r| r.length).min());
            for r in &results {
                assert_valid_path(&maze, start, r);
            }
        }
    }
}
