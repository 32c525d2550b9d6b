/// The direction in which a score improves.
///
/// Searches always minimize internally. [`Goal::transform`] maps a raw score
/// onto that internal scale, so one scan serves both directions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Goal {
    /// Lower scores are better (distances).
    #[default]
    Minimize,

    /// Higher scores are better (similarities).
    Maximize,
}

impl Goal {
    /// Transforms a score for internal minimization.
    ///
    /// - [`Goal::Minimize`]: returns the score unchanged
    /// - [`Goal::Maximize`]: negates the score
    #[inline]
    #[must_use]
    pub fn transform(self, score: f64) -> f64 {
        match self {
            Self::Minimize => score,
            Self::Maximize => -score,
        }
    }

    /// Returns true if `score` is strictly better than `other`.
    ///
    /// Equal scores are not an improvement, and NaN never is.
    #[inline]
    #[must_use]
    pub fn improves(self, score: f64, other: f64) -> bool {
        self.transform(score) < self.transform(other)
    }

    /// Returns true if `score` has reached `target` (inclusive).
    #[inline]
    #[must_use]
    pub fn reaches(self, score: f64, target: f64) -> bool {
        self.transform(score) <= self.transform(target)
    }
}

/// Scores how well a candidate embedding matches a query embedding.
///
/// A metric is either a distance (lower is better) or a similarity (higher is
/// better); [`Metric::goal`] states which, so searches never have to guess.
///
/// Callers guarantee both slices have the same length.
pub trait Metric {
    /// Scores `candidate` against `query`.
    fn score(&self, query: &[f32], candidate: &[f32]) -> f64;

    /// The direction in which this metric's scores improve.
    fn goal(&self) -> Goal;
}

impl<M: Metric + ?Sized> Metric for &M {
    fn score(&self, query: &[f32], candidate: &[f32]) -> f64 {
        (**self).score(query, candidate)
    }

    fn goal(&self) -> Goal {
        (**self).goal()
    }
}

impl<M: Metric + ?Sized> Metric for Box<M> {
    fn score(&self, query: &[f32], candidate: &[f32]) -> f64 {
        (**self).score(query, candidate)
    }

    fn goal(&self) -> Goal {
        (**self).goal()
    }
}
