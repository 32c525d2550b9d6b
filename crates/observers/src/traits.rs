//! Capability traits for reusable observers.
//!
//! These traits abstract over search-specific event and action types, so an
//! observer written once works with any search that provides them.
//!
//! # Event traits
//!
//! - [`HasScore`] — events that carry a candidate score
//! - [`HasLocation`] — events that carry a candidate location
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//! - [`CanSkip`] — actions that can exclude a candidate from the result
//!
//! # Example
//!
//! ```rust
//! use vicinity_core::Observer;
//! use vicinity_observers::traits::{CanStopEarly, HasScore};
//!
//! struct CloseEnough {
//!     tolerance: f64,
//!     min_seen: usize,
//!     seen: usize,
//! }
//!
//! impl<E: HasScore, A: CanStopEarly> Observer<E, A> for CloseEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         self.seen += 1;
//!         if self.seen >= self.min_seen && event.score() < self.tolerance {
//!             return Some(A::stop_early());
//!         }
//!         None
//!     }
//! }
//! ```

use vicinity_core::Location;
use vicinity_search::nearest;

/// An event that carries a candidate score.
pub trait HasScore {
    /// Returns the score for this event.
    fn score(&self) -> f64;

    /// Returns the best score before this event, if any.
    fn best_score(&self) -> Option<f64>;
}

/// An event that carries a candidate location.
pub trait HasLocation {
    /// Returns the location of the candidate for this event.
    fn location(&self) -> Location;

    /// Returns the zero-based position of the candidate in its stream.
    fn index(&self) -> usize;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the search early.
    fn stop_early() -> Self;
}

/// An action type that can exclude a candidate from the result.
pub trait CanSkip {
    /// Returns the action that skips the current candidate.
    fn skip() -> Self;
}

// --- nearest::Event ---

impl HasScore for nearest::Event<'_> {
    fn score(&self) -> f64 {
        self.score
    }

    fn best_score(&self) -> Option<f64> {
        self.best.map(|m| m.score)
    }
}

impl HasLocation for nearest::Event<'_> {
    fn location(&self) -> Location {
        self.candidate.location()
    }

    fn index(&self) -> usize {
        self.index
    }
}

// --- nearest::Action ---

impl CanStopEarly for nearest::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanSkip for nearest::Action {
    fn skip() -> Self {
        Self::Skip
    }
}
