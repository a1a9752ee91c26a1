//! Error types for the CLI layer.

use thiserror::Error;

use mapsight_core::error::PreviewError;

/// Result type alias using [`ToolsError`].
pub type Result<T> = std::result::Result<T, ToolsError>;

/// Top-level error type for the command-line tools.
#[derive(Debug, Error)]
pub enum ToolsError {
    /// A core preview/report error.
    #[error(transparent)]
    Preview(#[from] PreviewError),

    /// Filesystem failure.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed bundle or report JSON.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The bundle lacks data a command needs.
    #[error("bundle is missing {0}")]
    MissingBundleData(&'static str),

    /// The user disabled every draw layer.
    #[error("draw-layer mask selects no layers; enable at least one of terrain, structures, oil")]
    EmptyLayerMask,
}
