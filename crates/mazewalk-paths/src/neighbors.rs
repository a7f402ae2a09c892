use mazewalk_core::{Dir, Point};

/// Cached neighbor computation helper.
///
/// Enumerates the four cardinal neighbors of a grid point in [`Dir::ALL`]
/// order (up, right, down, left), filtered by a predicate.
#[derive(Debug)]
pub struct Neighbors {
    buf: Vec<Point>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Return the cardinal neighbors of `p`, keeping only those for which
    /// `keep(direction, neighbor)` returns `true`.
    pub fn cardinal(&mut self, p: Point, keep: impl Fn(Dir, Point) -> bool) -> &[Point] {
        self.buf.clear();
        for d in Dir::ALL {
            let n = p.step(d);
            if keep(d, n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}
