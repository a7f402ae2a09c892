//! First-step statistics over the shortest paths of a search.

use mazewalk_core::Point;

use crate::search::SearchResult;

/// First steps taken by every shortest path and how often each occurs.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FirstSteps {
    /// Length of the shortest paths.
    pub shortest: usize,
    /// First step of each shortest path, in search order.
    pub steps: Vec<Point>,
    /// Distinct first steps in order of first appearance, each with the
    /// fraction of shortest paths that begin with it.
    pub distribution: Vec<(Point, f64)>,
}

impl FirstSteps {
    /// Fraction of shortest paths starting with `step`, if any do.
    pub fn fraction(&self, step: Point) -> Option<f64> {
        self.distribution
            .iter()
            .find(|(p, _)| *p == step)
            .map(|&(_, f)| f)
    }

    /// Number of shortest paths.
    #[inline]
    pub fn total(&self) -> usize {
        self.steps.len()
    }
}

/// What a set of search results says about moving from the start.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The target is unreachable.
    NoPath,
    /// The start is the target; there is no step to take.
    AtTarget,
    Found(FirstSteps),
}

/// Keep the minimum-length results and tally their first steps.
pub fn summarize(results: &[SearchResult]) -> Outcome {
    let Some(shortest) = results.iter().map(|r| r.length).min() else {
        return Outcome::NoPath;
    };
    if shortest == 0 {
        return Outcome::AtTarget;
    }

    let steps: Vec<Point> = results
        .iter()
        .filter(|r| r.length == shortest)
        .filter_map(SearchResult::first_step)
        .collect();

    let mut counts: Vec<(Point, usize)> = Vec::new();
    for &step in &steps {
        match counts.iter_mut().find(|(p, _)| *p == step) {
            Some((_, n)) => *n += 1,
            None => counts.push((step, 1)),
        }
    }

    let total = steps.len() as f64;
    let distribution = counts
        .into_iter()
        .map(|(p, n)| (p, n as f64 / total))
        .collect();

    Outcome::Found(FirstSteps {
        shortest,
        steps,
        distribution,
    })
}
