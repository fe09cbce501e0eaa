use std::fmt;

/// A color-stop record that cannot be turned into a gradient stop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopError {
    /// The record has no value for a required column.
    MissingField { record: String, field: &'static str },
    /// The `offset` column does not start with an integer.
    InvalidOffset { record: String, value: String },
}

impl StopError {
    /// Id of the offending record.
    pub fn record(&self) -> &str {
        match self {
            StopError::MissingField { record, .. } | StopError::InvalidOffset { record, .. } => record,
        }
    }
}

impl fmt::Display for StopError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopError::MissingField { record, field } => {
                write!(f, "color stop '{record}' has no {field}")
            }
            StopError::InvalidOffset { record, value } => {
                write!(f, "color stop '{record}' has non-numeric offset '{value}'")
            }
        }
    }
}

impl std::error::Error for StopError {}
