/// Actions an observer can take during a nearest-match scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the scan after this candidate and return the best match so far.
    ///
    /// The current candidate is still considered for the best match.
    StopEarly,

    /// Exclude this candidate from best-match tracking and keep scanning.
    ///
    /// Use this to filter candidates by criteria the metric cannot see, such
    /// as masking out a region or the query's own location.
    Skip,
}
