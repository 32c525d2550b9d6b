//! Reusable observers for Vicinity searches.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! let observers work against any search event that exposes a score.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits ([`HasScore`], [`HasLocation`],
//!   [`CanStopEarly`], [`CanSkip`])
//!
//! # Observers
//!
//! - [`StopWhen`] — stops the search once a score crosses a threshold
//! - [`Exclude`] — keeps candidates at chosen locations out of the result
//! - [`Progress`] — logs progress and improvements through `tracing`
//! - [`Recorder`] — keeps an `(index, score)` trace for later inspection
//! - [`Both`] — runs two observers side by side
//!
//! [`Observer`]: vicinity_core::Observer
//! [`HasScore`]: traits::HasScore
//! [`HasLocation`]: traits::HasLocation
//! [`CanStopEarly`]: traits::CanStopEarly
//! [`CanSkip`]: traits::CanSkip

pub mod traits;

mod both;
mod exclude;
mod progress;
mod recorder;
mod stop_when;

pub use both::Both;
pub use exclude::Exclude;
pub use progress::Progress;
pub use recorder::{Record, Recorder};
pub use stop_when::StopWhen;
