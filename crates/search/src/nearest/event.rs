use vicinity_core::{Candidate, Location};

use super::Match;

/// Event emitted once per scored candidate.
///
/// `best` is the best match *before* this candidate is considered, so
/// observers can compare against it when deciding whether to stop early or
/// skip the candidate.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// Zero-based position of the candidate in the stream.
    pub index: usize,

    /// The candidate being considered.
    pub candidate: &'a Candidate,

    /// The candidate's score against the query.
    pub score: f64,

    /// The best match so far, if any.
    pub best: Option<Match>,
}

impl Event<'_> {
    /// Returns the candidate's location.
    #[must_use]
    pub fn location(&self) -> Location {
        self.candidate.location()
    }
}
