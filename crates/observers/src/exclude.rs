use vicinity_core::{Location, Observer};

use crate::traits::{CanSkip, HasLocation};

/// Keeps candidates at matching locations out of the best match.
///
/// Useful for masking a region, or for leaving out the query's own location
/// when the query was cut from the same dataset being searched.
#[derive(Debug, Clone)]
pub struct Exclude<F> {
    predicate: F,
    excluded: usize,
}

impl<F: FnMut(Location) -> bool> Exclude<F> {
    /// Skips every candidate whose location satisfies `predicate`.
    #[must_use]
    pub fn new(predicate: F) -> Self {
        Self {
            predicate,
            excluded: 0,
        }
    }

    /// Returns the number of candidates skipped so far.
    #[must_use]
    pub fn excluded(&self) -> usize {
        self.excluded
    }
}

impl<E: HasLocation, A: CanSkip, F: FnMut(Location) -> bool> Observer<E, A> for Exclude<F> {
    fn observe(&mut self, event: &E) -> Option<A> {
        if (self.predicate)(event.location()) {
            self.excluded += 1;
            return Some(A::skip());
        }
        None
    }
}
