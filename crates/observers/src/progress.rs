use tracing::{debug, info};

use vicinity_core::{Goal, Observer};

use crate::traits::{HasLocation, HasScore};

/// Logs search progress through `tracing`.
///
/// A candidate that beats the scan's best match at the time it is seen is
/// logged at `debug`, and a progress line is logged at `info` every `every`
/// candidates. Never steers the search.
///
/// The comparison uses the best match the scan reports with each event, so
/// candidates excluded with a skip action never become the reference.
#[derive(Debug, Clone)]
pub struct Progress {
    goal: Goal,
    every: usize,
    seen: usize,
    improvements: usize,
}

impl Progress {
    /// Creates a progress logger for a search in direction `goal`.
    ///
    /// An `every` of zero disables the periodic progress line.
    #[must_use]
    pub fn new(goal: Goal, every: usize) -> Self {
        Self {
            goal,
            every,
            seen: 0,
            improvements: 0,
        }
    }

    /// Returns the number of candidates seen.
    #[must_use]
    pub fn seen(&self) -> usize {
        self.seen
    }

    /// Returns the number of candidates that beat the best match when seen.
    #[must_use]
    pub fn improvements(&self) -> usize {
        self.improvements
    }
}

impl<E: HasScore + HasLocation, A> Observer<E, A> for Progress {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.seen += 1;

        let score = event.score();
        let best = event.best_score();
        let improved = match best {
            None => !score.is_nan(),
            Some(best) => self.goal.improves(score, best),
        };
        if improved {
            self.improvements += 1;
            let location = event.location();
            debug!(
                index = event.index(),
                score,
                x = location.x,
                y = location.y,
                "improved"
            );
        }

        if self.every > 0 && self.seen % self.every == 0 {
            info!(seen = self.seen, ?best, "scanning");
        }
        None
    }
}
