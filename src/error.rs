use std::path::PathBuf;

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, AppError>;

/// Everything that can abort the session or be reported in a pane.
#[derive(Debug, Error)]
pub enum AppError {
    /// I/O failure with no more specific variant (event loop, drawing).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal setup failure: raw mode, alternate screen.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Startup path that does not exist or cannot be canonicalized.
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// A directory exists in the path stack but cannot be listed.
    #[error("cannot read directory {path}: {source}")]
    DirectoryUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The selected file cannot be opened for preview.
    #[error("cannot preview {path}: {source}")]
    PreviewUnavailable {
        path: PathBuf,
        source: std::io::Error,
    },
}
