//! Distance and similarity metrics.
//!
//! Every metric implements [`Metric`] and declares its natural [`Goal`]:
//! distances minimize, similarities maximize.
//!
//! Accumulation happens in `f64` regardless of the `f32` storage, so long
//! embeddings do not lose precision when summed.

use vicinity_core::{Goal, Metric};

/// Cosine distance: `1 − cos(a, b)`.
///
/// Identical directions score `0`, orthogonal vectors `1`, and opposite
/// directions `2`. This is the default metric.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CosineDistance;

impl Metric for CosineDistance {
    fn score(&self, query: &[f32], candidate: &[f32]) -> f64 {
        1.0 - cosine_similarity(query, candidate)
    }

    fn goal(&self) -> Goal {
        Goal::Minimize
    }
}

/// Cosine similarity: `cos(a, b)` in `[-1, 1]`, higher is closer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CosineSimilarity;

impl Metric for CosineSimilarity {
    fn score(&self, query: &[f32], candidate: &[f32]) -> f64 {
        cosine_similarity(query, candidate)
    }

    fn goal(&self) -> Goal {
        Goal::Maximize
    }
}

/// Euclidean (L2) distance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Euclidean;

impl Metric for Euclidean {
    fn score(&self, query: &[f32], candidate: &[f32]) -> f64 {
        query
            .iter()
            .zip(candidate)
            .map(|(&a, &b)| {
                let d = f64::from(a) - f64::from(b);
                d * d
            })
            .sum::<f64>()
            .sqrt()
    }

    fn goal(&self) -> Goal {
        Goal::Minimize
    }
}

/// Inner product, higher is closer.
///
/// Equivalent to cosine similarity for unit-normalized embeddings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DotProduct;

impl Metric for DotProduct {
    fn score(&self, query: &[f32], candidate: &[f32]) -> f64 {
        dot(query, candidate)
    }

    fn goal(&self) -> Goal {
        Goal::Maximize
    }
}

/// Cosine similarity between two vectors.
///
/// Returns `0.0` if either vector has zero norm. Squares of `f32` values
/// cannot underflow in `f64`, so any non-zero vector has a non-zero norm.
#[must_use]
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    let (dot, norm_a, norm_b) = a.iter().zip(b).fold(
        (0.0_f64, 0.0_f64, 0.0_f64),
        |(dot, na, nb), (&x, &y)| {
            let (x, y) = (f64::from(x), f64::from(y));
            (dot + x * y, na + x * x, nb + y * y)
        },
    );

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a.sqrt() * norm_b.sqrt())
}

fn dot(a: &[f32], b: &[f32]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(&x, &y)| f64::from(x) * f64::from(y))
        .sum()
}
