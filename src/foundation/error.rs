/// Crate-wide result alias.
pub type AnnotateResult<T> = Result<T, AnnotateError>;

/// Errors surfaced by the caption pipeline.
///
/// [`AnnotateError::Font`] is the only variant drivers treat as fatal for a whole run;
/// every other variant is scoped to the photo being processed.
#[derive(thiserror::Error, Debug)]
pub enum AnnotateError {
    /// Invalid input or configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// The caption font could not be located or loaded.
    #[error("font error: {0}")]
    Font(String),

    /// Text shaping or rasterisation failed.
    #[error("render error: {0}")]
    Render(String),

    /// The metadata table could not be read.
    #[error("metadata error: {0}")]
    Metadata(String),

    /// Anything else, usually IO or codec failures with attached context.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AnnotateError {
    /// Build an [`AnnotateError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`AnnotateError::Font`].
    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font(msg.into())
    }

    /// Build an [`AnnotateError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build an [`AnnotateError::Metadata`].
    pub fn metadata(msg: impl Into<String>) -> Self {
        Self::Metadata(msg.into())
    }

    /// Whether this error must abort the whole run rather than a single photo.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Font(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
