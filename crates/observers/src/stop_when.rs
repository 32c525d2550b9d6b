use vicinity_core::{Goal, Observer};

use crate::traits::{CanStopEarly, HasScore};

/// Stops the search once a candidate's score crosses a threshold.
///
/// [`StopWhen::below`] suits distances and [`StopWhen::above`] suits
/// similarities. The crossing is strict: a score equal to the threshold does
/// not stop the search. The candidate that crosses the threshold is still
/// considered for the best match.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StopWhen {
    threshold: f64,
    goal: Goal,
    min_seen: usize,
    seen: usize,
}

impl StopWhen {
    /// Stops when a score falls strictly below `threshold`.
    #[must_use]
    pub fn below(threshold: f64) -> Self {
        Self::new(threshold, Goal::Minimize)
    }

    /// Stops when a score rises strictly above `threshold`.
    #[must_use]
    pub fn above(threshold: f64) -> Self {
        Self::new(threshold, Goal::Maximize)
    }

    /// Requires at least `min_seen` candidates before stopping.
    #[must_use]
    pub fn after(mut self, min_seen: usize) -> Self {
        self.min_seen = min_seen;
        self
    }

    fn new(threshold: f64, goal: Goal) -> Self {
        Self {
            threshold,
            goal,
            min_seen: 0,
            seen: 0,
        }
    }
}

impl<E: HasScore, A: CanStopEarly> Observer<E, A> for StopWhen {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.seen += 1;
        if self.seen >= self.min_seen && self.goal.improves(event.score(), self.threshold) {
            return Some(A::stop_early());
        }
        None
    }
}
