//! Application-level error types.

use thiserror::Error;

/// Errors that can occur within the application.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid hex color {0:?}: expected \"#RRGGBB\"")]
    InvalidColor(String),

    #[error("window error: {0}")]
    Window(#[from] eframe::Error),
}

/// Convenience alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;
