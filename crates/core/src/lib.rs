//! Core traits and types for Vicinity.
//!
//! This crate defines the shared abstractions that the search, observers, and
//! callers build on:
//!
//! - [`Embedding`] — an immutable fixed-length vector produced by a model
//! - [`Candidate`] — a located embedding pulled from a candidate stream
//! - [`Embedder`] — an initialized model handle that maps a sample to an embedding
//! - [`Metric`] — scores a pair of embeddings, with a natural [`Goal`]
//! - [`Observer`] — receives search events and optionally returns control actions

mod candidate;
mod embedder;
mod metric;
mod observer;

pub use candidate::{Candidate, Embedding, Location};
pub use embedder::Embedder;
pub use metric::{Goal, Metric};
pub use observer::Observer;
