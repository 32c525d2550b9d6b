//! Single-pass nearest-match search.
//!
//! # Algorithm
//!
//! The scan pulls candidates from a lazy stream one at a time, scores each
//! against the query with a [`Metric`], and keeps the best match seen so far.
//! A candidate replaces the best only if its score is strictly better, so the
//! first candidate wins ties. Candidates are dropped after scoring, so memory
//! use is constant no matter how long (or infinite) the stream is.
//!
//! # Direction
//!
//! Scores are compared through a [`Goal`]: distances are minimized and
//! similarities maximized. [`minimize`] and [`maximize`] fix the direction,
//! while [`nearest`] uses the config's override or else the metric's own goal.
//!
//! # Stopping
//!
//! The scan stops at the first of:
//!
//! - the stream running out ([`Status::Exhausted`])
//! - the configured candidate cap ([`Status::MaxCandidates`])
//! - the best score reaching the configured target ([`Status::TargetReached`])
//! - an observer returning [`Action::StopEarly`] ([`Status::StoppedByObserver`])
//!
//! An empty stream is not an error: the solution simply has no best match.
//!
//! # Errors
//!
//! A candidate whose dimension differs from the query's aborts the scan with
//! [`Error::DimensionMismatch`]. Fallible streams (the `try_` functions) abort
//! on the first source error, which is returned unchanged in
//! [`Error::Source`]. Nothing after the failing candidate is pulled.
//!
//! # Observer Events
//!
//! The scan emits one [`Event`] per scored candidate, carrying the best match
//! *before* this candidate. Observers can return [`Action::StopEarly`] to halt
//! after this candidate, or [`Action::Skip`] to keep it out of the best match.

mod action;
mod best;
mod config;
mod error;
mod event;
mod scan;
mod solution;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Match, Solution, Status};

use std::convert::Infallible;

use vicinity_core::{Candidate, Embedder, Embedding, Goal, Metric, Observer};

use scan::scan;

/// Finds the candidate with the lowest score.
///
/// The observer receives an [`Event`] for each scored candidate.
/// See the [module docs](self) for details on stopping and observer actions.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`] if a candidate's dimension differs
/// from the query's.
pub fn minimize<I, M, Obs>(
    query: &Embedding,
    candidates: I,
    metric: &M,
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    I: IntoIterator<Item = Candidate>,
    M: Metric + ?Sized,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    scan(
        query,
        infallible(candidates),
        metric,
        config,
        Goal::Minimize,
        observer,
    )
}

/// Finds the candidate with the lowest score without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`] if a candidate's dimension differs
/// from the query's.
pub fn minimize_unobserved<I, M>(
    query: &Embedding,
    candidates: I,
    metric: &M,
    config: &Config,
) -> Result<Solution, Error>
where
    I: IntoIterator<Item = Candidate>,
    M: Metric + ?Sized,
{
    minimize(query, candidates, metric, config, ())
}

/// Finds the candidate with the highest score.
///
/// The observer receives an [`Event`] for each scored candidate.
/// See the [module docs](self) for details on stopping and observer actions.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`] if a candidate's dimension differs
/// from the query's.
pub fn maximize<I, M, Obs>(
    query: &Embedding,
    candidates: I,
    metric: &M,
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    I: IntoIterator<Item = Candidate>,
    M: Metric + ?Sized,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    scan(
        query,
        infallible(candidates),
        metric,
        config,
        Goal::Maximize,
        observer,
    )
}

/// Finds the candidate with the highest score without observer support.
///
/// This is a convenience wrapper around [`maximize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`] if a candidate's dimension differs
/// from the query's.
pub fn maximize_unobserved<I, M>(
    query: &Embedding,
    candidates: I,
    metric: &M,
    config: &Config,
) -> Result<Solution, Error>
where
    I: IntoIterator<Item = Candidate>,
    M: Metric + ?Sized,
{
    maximize(query, candidates, metric, config, ())
}

/// Finds the best-matching candidate in the direction the metric prefers.
///
/// Uses [`Config::goal`] if set, otherwise [`Metric::goal`].
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`] if a candidate's dimension differs
/// from the query's.
pub fn nearest<I, M, Obs>(
    query: &Embedding,
    candidates: I,
    metric: &M,
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    I: IntoIterator<Item = Candidate>,
    M: Metric + ?Sized,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let goal = resolve_goal(metric, config);
    scan(query, infallible(candidates), metric, config, goal, observer)
}

/// Finds the best-matching candidate without observer support.
///
/// This is a convenience wrapper around [`nearest`] that uses a no-op observer.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`] if a candidate's dimension differs
/// from the query's.
pub fn nearest_unobserved<I, M>(
    query: &Embedding,
    candidates: I,
    metric: &M,
    config: &Config,
) -> Result<Solution, Error>
where
    I: IntoIterator<Item = Candidate>,
    M: Metric + ?Sized,
{
    nearest(query, candidates, metric, config, ())
}

/// Like [`minimize`], over a fallible candidate stream.
///
/// # Errors
///
/// Returns [`Error::Source`] with the stream's own error if the stream fails,
/// or [`Error::DimensionMismatch`] if a candidate's dimension differs from
/// the query's.
pub fn try_minimize<I, E, M, Obs>(
    query: &Embedding,
    candidates: I,
    metric: &M,
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error<E>>
where
    I: IntoIterator<Item = Result<Candidate, E>>,
    M: Metric + ?Sized,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    scan(query, candidates, metric, config, Goal::Minimize, observer)
}

/// Like [`maximize`], over a fallible candidate stream.
///
/// # Errors
///
/// Returns [`Error::Source`] with the stream's own error if the stream fails,
/// or [`Error::DimensionMismatch`] if a candidate's dimension differs from
/// the query's.
pub fn try_maximize<I, E, M, Obs>(
    query: &Embedding,
    candidates: I,
    metric: &M,
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error<E>>
where
    I: IntoIterator<Item = Result<Candidate, E>>,
    M: Metric + ?Sized,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    scan(query, candidates, metric, config, Goal::Maximize, observer)
}

/// Like [`nearest`], over a fallible candidate stream.
///
/// # Errors
///
/// Returns [`Error::Source`] with the stream's own error if the stream fails,
/// or [`Error::DimensionMismatch`] if a candidate's dimension differs from
/// the query's.
pub fn try_nearest<I, E, M, Obs>(
    query: &Embedding,
    candidates: I,
    metric: &M,
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error<E>>
where
    I: IntoIterator<Item = Result<Candidate, E>>,
    M: Metric + ?Sized,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let goal = resolve_goal(metric, config);
    scan(query, candidates, metric, config, goal, observer)
}

/// Embeds a sample and finds the best-matching candidate for it.
///
/// The embedder is an already-initialized model handle; it is borrowed, so
/// one handle can serve any number of searches.
///
/// # Errors
///
/// Returns [`Error::Embed`] if the embedder fails, otherwise the same errors
/// as [`try_nearest`].
pub fn locate<Emb, I, E, M, Obs>(
    embedder: &Emb,
    sample: &Emb::Input,
    candidates: I,
    metric: &M,
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error<E>>
where
    Emb: Embedder + ?Sized,
    I: IntoIterator<Item = Result<Candidate, E>>,
    M: Metric + ?Sized,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let query = embedder.embed(sample).map_err(Error::embed)?;
    try_nearest(&query, candidates, metric, config, observer)
}

fn resolve_goal<M: Metric + ?Sized>(metric: &M, config: &Config) -> Goal {
    config.goal().unwrap_or_else(|| metric.goal())
}

fn infallible<I>(candidates: I) -> impl Iterator<Item = Result<Candidate, Infallible>>
where
    I: IntoIterator<Item = Candidate>,
{
    candidates.into_iter().map(Ok)
}
