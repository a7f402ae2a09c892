//! Per-branch bookkeeping: which cells the current path already uses.
//!
//! Both types here are values: extending one never changes what a sibling
//! branch holding the original sees.

use std::collections::HashSet;
use std::rc::Rc;

use mazewalk_core::Point;

// ---------------------------------------------------------------------------
// VisitedSet
// ---------------------------------------------------------------------------

/// The set of cells already on the current branch, used by the recursive
/// engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisitedSet {
    cells: HashSet<Point>,
}

impl VisitedSet {
    /// A set holding only `start`.
    pub fn new(start: Point) -> Self {
        let mut cells = HashSet::new();
        cells.insert(start);
        Self { cells }
    }

    /// A copy of this set extended with `p`. `self` is left untouched.
    pub fn with(&self, p: Point) -> Self {
        let mut cells = self.cells.clone();
        cells.insert(p);
        Self { cells }
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.cells.contains(&p)
    }
}

// ---------------------------------------------------------------------------
// Trail
// ---------------------------------------------------------------------------

#[derive(Debug)]
struct Link {
    pos: Point,
    prev: Option<Rc<Link>>,
}

/// A persistent path: an immutable linked list growing at its head.
///
/// [`push`](Trail::push) returns a new trail sharing every earlier cell with
/// `self`, so the explicit-stack engine can hand each frontier frame its own
/// path without copying the common prefix.
#[derive(Debug, Clone, Default)]
pub struct Trail {
    head: Option<Rc<Link>>,
    len: usize,
}

impl Trail {
    /// The empty trail.
    pub fn new() -> Self {
        Self::default()
    }

    /// A trail extended by `p`.
    pub fn push(&self, p: Point) -> Self {
        Self {
            head: Some(Rc::new(Link {
                pos: p,
                prev: self.head.clone(),
            })),
            len: self.len + 1,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether `p` appears anywhere on the trail. Linear in its length.
    pub fn contains(&self, p: Point) -> bool {
        self.links().any(|q| q == p)
    }

    /// The cells in the order they were pushed.
    pub fn to_vec(&self) -> Vec<Point> {
        let mut v: Vec<Point> = self.links().collect();
        v.reverse();
        v
    }

    fn links(&self) -> impl Iterator<Item = Point> + '_ {
        std::iter::successors(self.head.as_deref(), |l| l.prev.as_deref()).map(|l| l.pos)
    }
}

impl Drop for Trail {
    // Unlink iteratively: the default recursive drop of a long uniquely
    // owned chain would use one stack frame per cell.
    fn drop(&mut self) {
        let mut next = self.head.take();
        while let Some(rc) = next {
            match Rc::try_unwrap(rc) {
                Ok(mut link) => next = link.prev.take(),
                Err(_) => break,
            }
        }
    }
}
