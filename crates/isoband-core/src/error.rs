//! Error types for isoband-rs.

use thiserror::Error;

/// The main error type for isoband-rs operations.
///
/// All variants are input-contract violations detected before any geometry
/// is produced; the band mesher never fails partway through a valid mesh.
#[derive(Error, Debug)]
pub enum IsobandError {
    /// A triangle references a vertex index past the end of the position array.
    #[error("vertex index {index} out of bounds for {len} vertices")]
    IndexOutOfBounds { index: u32, len: usize },

    /// The scalar field length does not match the vertex count.
    #[error("field size mismatch: expected {expected} values, got {actual}")]
    FieldSizeMismatch { expected: usize, actual: usize },

    /// The configured band count is zero.
    #[error("band count must be positive, got {0}")]
    InvalidBandCount(u32),

    /// The configured value window is empty or inverted.
    #[error("invalid value range: min {min} must not exceed max {max}")]
    InvalidRange { min: f64, max: f64 },

    /// No color map with the given name is registered.
    #[error("unknown color map '{0}'")]
    UnknownColorMap(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A specialized Result type for isoband-rs operations.
pub type Result<T> = std::result::Result<T, IsobandError>;
