use crate::Embedding;

/// An initialized embedding model.
///
/// Implementors own whatever state the model needs (weights, sessions,
/// preprocessing tables). Loading happens once, when the handle is built, and
/// the handle is then passed by reference to every call that embeds a sample.
///
/// Embedders must be deterministic, always producing the same embedding for a
/// given input.
pub trait Embedder {
    type Input;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Embeds a single sample.
    ///
    /// # Errors
    ///
    /// Each embedder defines its own `Error` type to represent model failures.
    fn embed(&self, input: &Self::Input) -> Result<Embedding, Self::Error>;
}

impl<E: Embedder + ?Sized> Embedder for &E {
    type Input = E::Input;
    type Error = E::Error;

    fn embed(&self, input: &Self::Input) -> Result<Embedding, Self::Error> {
        (**self).embed(input)
    }
}
