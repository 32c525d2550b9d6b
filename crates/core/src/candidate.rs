use std::ops::Deref;

/// A fixed-length embedding vector.
///
/// Embeddings are immutable once produced. The storage is a boxed slice, so
/// cloning copies the values but an embedding never grows or shrinks.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Embedding(Box<[f32]>);

impl Embedding {
    /// Creates an embedding from its values.
    #[must_use]
    pub fn new(values: impl Into<Box<[f32]>>) -> Self {
        Self(values.into())
    }

    /// Returns the number of dimensions.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.0.len()
    }

    /// Returns the values as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }
}

impl Deref for Embedding {
    type Target = [f32];

    fn deref(&self) -> &[f32] {
        &self.0
    }
}

impl AsRef<[f32]> for Embedding {
    fn as_ref(&self) -> &[f32] {
        &self.0
    }
}

impl From<Vec<f32>> for Embedding {
    fn from(values: Vec<f32>) -> Self {
        Self::new(values)
    }
}

impl From<&[f32]> for Embedding {
    fn from(values: &[f32]) -> Self {
        Self::new(values)
    }
}

impl<const N: usize> From<[f32; N]> for Embedding {
    fn from(values: [f32; N]) -> Self {
        Self::new(values.to_vec())
    }
}

impl FromIterator<f32> for Embedding {
    fn from_iter<T: IntoIterator<Item = f32>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// A coordinate pair identifying where a candidate came from.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    /// Horizontal coordinate, in the dataset's coordinate system.
    pub x: f64,

    /// Vertical coordinate, in the dataset's coordinate system.
    pub y: f64,
}

impl Location {
    /// Creates a new location.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Location {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// A located embedding yielded by a candidate stream.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Candidate {
    /// Horizontal coordinate of the candidate.
    pub x: f64,

    /// Vertical coordinate of the candidate.
    pub y: f64,

    /// The candidate's embedding, compared against the query.
    pub embedding: Embedding,
}

impl Candidate {
    /// Creates a new candidate.
    #[must_use]
    pub fn new(x: f64, y: f64, embedding: impl Into<Embedding>) -> Self {
        Self {
            x,
            y,
            embedding: embedding.into(),
        }
    }

    /// Returns the candidate's coordinates.
    #[must_use]
    pub fn location(&self) -> Location {
        Location::new(self.x, self.y)
    }
}
