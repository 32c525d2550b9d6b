use std::{convert::Infallible, error::Error as StdError};

/// Errors that can occur during a nearest-match scan.
///
/// `E` is the candidate source's error type. Infallible sources use the
/// default, [`Infallible`].
#[derive(Debug, thiserror::Error)]
pub enum Error<E = Infallible> {
    #[error("candidate {index} has {found} dimensions but the query has {expected}")]
    DimensionMismatch {
        /// Zero-based position of the offending candidate in the stream.
        index: usize,

        /// Dimension of the query embedding.
        expected: usize,

        /// Dimension of the candidate embedding.
        found: usize,
    },

    /// The candidate source failed; the error is returned as produced.
    #[error("candidate source failed")]
    Source(#[source] E),

    #[error("embedding the query failed")]
    Embed(#[source] Box<dyn StdError + Send + Sync>),
}

impl<E> Error<E> {
    /// Returns the candidate source's error, if that is what stopped the scan.
    pub fn into_source(self) -> Option<E> {
        match self {
            Self::Source(err) => Some(err),
            Self::DimensionMismatch { .. } | Self::Embed(_) => None,
        }
    }

    pub(crate) fn embed<X: StdError + Send + Sync + 'static>(err: X) -> Self {
        Self::Embed(Box::new(err))
    }
}

impl Error<Infallible> {
    /// Widens an infallible-source error to any source error type.
    pub fn widen<E>(self) -> Error<E> {
        match self {
            Self::DimensionMismatch {
                index,
                expected,
                found,
            } => Error::DimensionMismatch {
                index,
                expected,
                found,
            },
            Self::Source(never) => match never {},
            Self::Embed(err) => Error::Embed(err),
        }
    }
}
