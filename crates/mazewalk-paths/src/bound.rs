//! The shortest-length bound shared by every branch of one search.

/// Minimum length among all completed paths found so far.
///
/// Starts unset. Only ever moves downward while a search is running; the
/// owner resets it before the next top-level search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShortestBound(Option<usize>);

impl ShortestBound {
    /// An unset bound.
    pub const fn new() -> Self {
        Self(None)
    }

    /// The current bound, if any path has been completed.
    #[inline]
    pub fn get(self) -> Option<usize> {
        self.0
    }

    /// Record a completed path of length `distance`.
    ///
    /// Returns `true` if the bound was set or lowered.
    #[inline]
    pub fn record(&mut self, distance: usize) -> bool {
        match self.0 {
            Some(best) if distance >= best => false,
            _ => {
                self.0 = Some(distance);
                true
            }
        }
    }

    /// Whether a partial path at `distance` should be abandoned: the bound is
    /// set and `distance` has already reached it.
    #[inline]
    pub fn prunes(self, distance: usize) -> bool {
        matches!(self.0, Some(best) if distance >= best)
    }

    /// Forget the bound.
    #[inline]
    pub fn clear(&mut self) {
        self.0 = None;
    }
}
