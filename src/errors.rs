use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building geometry or painting a canvas
#[derive(Error, Debug)]
pub enum GridpaintError {
    /// Geometry that has no defined answer, e.g. the centroid of no points
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Canvas constructed with a zero width or height
    #[error("Invalid canvas dimensions: {width}x{height} (both must be positive)")]
    InvalidDimensions { width: usize, height: usize },

    /// A drawing call would paint a cell outside the grid
    #[error("Cell ({x}, {y}) is outside the {width}x{height} canvas")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },

    /// Parameter validation error
    #[error("Invalid parameter: {field} - {message}")]
    InvalidArgument { field: String, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Scene file could not be parsed or serialized
    #[error("Scene error in {path}: {message}")]
    ParseError { path: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Type alias for Result with `GridpaintError`
pub type Result<T> = std::result::Result<T, GridpaintError>;

impl GridpaintError {
    /// Create a parameter validation error
    pub fn invalid_argument(field: &str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field: field.to_string(),
            message: message.into(),
        }
    }
}
