use vicinity_core::{Location, Observer};

use crate::traits::{HasLocation, HasScore};

/// One recorded candidate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    /// Zero-based position of the candidate in the stream.
    pub index: usize,

    /// Where the candidate came from.
    pub location: Location,

    /// The candidate's score against the query.
    pub score: f64,
}

/// Records every candidate the search scores.
///
/// Memory grows with the number of candidates, so use this for diagnostics
/// on bounded streams rather than in production scans.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    records: Vec<Record>,
}

impl Recorder {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded candidates in scan order.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Consumes the recorder, returning its records.
    #[must_use]
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}

impl<E: HasScore + HasLocation, A> Observer<E, A> for Recorder {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.records.push(Record {
            index: event.index(),
            location: event.location(),
            score: event.score(),
        });
        None
    }
}
