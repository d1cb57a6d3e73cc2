//! Error types for the planner's fallible edges.
//!
//! The availability index and suggestion engine are infallible. Errors
//! only arise when reading configuration, decoding store documents, or
//! parsing cell identifiers supplied from outside.

use thiserror::Error;

/// Result type for planner operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur at the planner's input boundaries.
#[derive(Error, Debug)]
pub enum Error {
    /// A cell key did not match the `D{day}_T{slot}` shape.
    #[error("Invalid cell id: {0}")]
    InvalidCellId(String),

    /// A cell lies outside the configured grid.
    #[error("Cell D{day}_T{slot} is outside a {days}x{slots} grid")]
    CellOutOfRange {
        day: usize,
        slot: usize,
        days: usize,
        slots: usize,
    },

    /// A member document could not be interpreted as a grid.
    #[error("Invalid document for member '{member}': {reason}")]
    InvalidDocument { member: String, reason: String },

    /// No team with the requested id is configured.
    #[error("Unknown team: {0}")]
    UnknownTeam(String),

    /// Configuration file could not be parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error (file operations).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
