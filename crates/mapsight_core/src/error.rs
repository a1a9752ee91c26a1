//! Error types for the preview and reporting pipeline.

use thiserror::Error;

/// Result type alias using [`PreviewError`].
pub type Result<T> = std::result::Result<T, PreviewError>;

/// Top-level error type for preview configuration and generation.
///
/// Parse failures are detected at configuration time and must prevent any
/// rendering attempt. Rendering and encoding failures carry the
/// collaborator's message unmodified.
#[derive(Debug, Error)]
pub enum PreviewError {
    /// Malformed hex color text.
    #[error("invalid color format '{0}': expected 6 or 8 hex digits, optionally prefixed with '#'")]
    InvalidColorFormat(String),

    /// Unrecognized draw-layer name in a layer list.
    #[error("unknown draw layer '{0}': expected one of terrain, structures, oil (or 'all')")]
    UnknownDrawLayer(String),

    /// The rendering collaborator could not produce a pixel buffer.
    #[error("rendering failed: {0}")]
    RenderingFailed(String),

    /// The image-encoding collaborator could not write the output.
    #[error("encoding failed: {0}")]
    EncodingFailed(String),
}
