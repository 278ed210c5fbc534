use thiserror::Error;

/// A dimension that failed validation, named by the role it plays for the
/// selected shape (e.g. "diameter" for a cylindrical tank).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{field} must be greater than 0")]
pub struct InvalidDimension {
    pub field: &'static str,
}

#[derive(Debug, Error)]
pub enum AquacalcError {
    #[error("Invalid dimensions: {0}")]
    InvalidDimension(#[from] InvalidDimension),

    #[error("No light sensor is available on this device")]
    SensorUnavailable,

    #[error("Light sensor failure: {0}")]
    SensorFailure(String),

    #[error("Light record store failure: {0}")]
    Storage(String),

    #[error("I/O error for file '{0}': {1}")]
    FileIO(String, #[source] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParsing(#[from] serde_json::Error),

    #[error("Failed to process CSV file '{0}': {1}")]
    CsvError(String, #[source] csv::Error),
}
