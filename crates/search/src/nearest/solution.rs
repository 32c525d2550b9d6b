use vicinity_core::Location;

/// Indicates why the scan stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "snake_case")
)]
pub enum Status {
    /// The candidate stream ran out.
    Exhausted,

    /// Examined the configured maximum number of candidates.
    MaxCandidates,

    /// The best score reached the configured target.
    TargetReached,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The best candidate seen by a scan.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Match {
    /// Where the candidate came from.
    pub location: Location,

    /// The candidate's score against the query.
    pub score: f64,

    /// Zero-based position of the candidate in the stream.
    pub index: usize,
}

/// The result of a nearest-match scan.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Solution {
    /// Why the scan stopped.
    pub status: Status,

    /// The best match, or `None` if no candidate was accepted.
    pub best: Option<Match>,

    /// Number of candidates pulled from the stream and scored.
    pub examined: usize,
}

impl Solution {
    /// Returns the best match's location, if any.
    #[must_use]
    pub fn location(&self) -> Option<Location> {
        self.best.map(|m| m.location)
    }
}
