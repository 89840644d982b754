//! Error types for grapht operations.
//!
//! Every fallible operation returns [`Result`]; nothing is recovered
//! mid-computation, so a failed heatmap never renders a partial grid.

use thiserror::Error;

/// Result type for grapht operations.
pub type Result<T> = std::result::Result<T, GraphtError>;

/// Errors that can occur during grapht operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphtError {
    /// Axis bounds collapse to a point, are inverted, or the bin count is zero.
    #[error("Invalid range for `{field}`: [{min}, {max}] with {bins} bins")]
    InvalidRange {
        field: String,
        min: f64,
        max: f64,
        bins: usize,
    },

    /// A named field is absent from the observation table.
    #[error("Missing field: {0}")]
    MissingField(String),

    /// A field holds text where numeric data is required.
    #[error("Field is not numeric: {0}")]
    NonNumericField(String),

    #[error("Column `{field}` has {actual} rows, table has {expected}")]
    ColumnLengthMismatch {
        field: String,
        expected: usize,
        actual: usize,
    },

    /// An option value that can never be valid.
    #[error("Invalid value for {field}: {reason}")]
    InvalidOption { field: String, reason: String },

    #[error("Graph is empty")]
    EmptyGraph,

    #[error("Cannot sample {requested} items without replacement from {available}")]
    SampleTooLarge { requested: usize, available: usize },

    #[error("Node not found: {0}")]
    NodeNotFound(String),

    /// A node has no entry in the position map used for drawing.
    #[error("No position for node {0}")]
    MissingPosition(usize),

    /// The external layout program could not be started.
    #[error("Layout engine unavailable: {0}")]
    EngineUnavailable(String),

    /// The external layout program produced output we could not read.
    #[error("Unreadable layout output: {0}")]
    LayoutOutput(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl From<toml::de::Error> for GraphtError {
    fn from(e: toml::de::Error) -> Self {
        GraphtError::Config(e.to_string())
    }
}

impl From<toml::ser::Error> for GraphtError {
    fn from(e: toml::ser::Error) -> Self {
        GraphtError::Config(e.to_string())
    }
}

// Convenience constructors
impl GraphtError {
    pub fn invalid_range(field: impl Into<String>, min: f64, max: f64, bins: usize) -> Self {
        GraphtError::InvalidRange {
            field: field.into(),
            min,
            max,
            bins,
        }
    }

    pub fn invalid_option(field: impl Into<String>, reason: impl Into<String>) -> Self {
        GraphtError::InvalidOption {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn node_not_found(id: impl Into<String>) -> Self {
        GraphtError::NodeNotFound(id.into())
    }
}
