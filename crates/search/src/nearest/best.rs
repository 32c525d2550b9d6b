use vicinity_core::Goal;

use super::{Match, Solution, Status};

/// Tracks the best match encountered so far.
///
/// The `Option` represents the state before any candidate has been accepted,
/// so no sentinel score is needed.
pub(super) struct Best {
    current: Option<Match>,
    goal: Goal,
}

impl Best {
    /// Creates an empty best tracker for the given direction.
    pub(super) fn empty(goal: Goal) -> Self {
        Self {
            current: None,
            goal,
        }
    }

    /// Returns the current best match.
    pub(super) fn get(&self) -> Option<Match> {
        self.current
    }

    /// Replaces the best match if `candidate` scores strictly better.
    ///
    /// Ties keep the earlier match. NaN scores are never accepted.
    /// Returns true if the best match changed.
    pub(super) fn update(&mut self, candidate: Match) -> bool {
        if candidate.score.is_nan() {
            return false;
        }
        if let Some(best) = self.current.as_ref()
            && !self.goal.improves(candidate.score, best.score)
        {
            return false;
        }
        self.current = Some(candidate);
        true
    }

    /// Returns true if the best score has reached `target`.
    pub(super) fn reaches(&self, target: f64) -> bool {
        self.current
            .as_ref()
            .is_some_and(|best| self.goal.reaches(best.score, target))
    }

    /// Finalizes the scan.
    pub(super) fn finish(self, status: Status, examined: usize) -> Solution {
        Solution {
            status,
            best: self.current,
            examined,
        }
    }
}
