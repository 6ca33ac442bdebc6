use thiserror::Error;

/// Boundary errors for the JSON API and config validation.
///
/// The scheduling core itself never fails: invalid inputs degrade to clamped
/// or empty state as documented on each operation.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() {
            CoreError::Deserialization(err.to_string())
        } else {
            CoreError::Serialization(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
