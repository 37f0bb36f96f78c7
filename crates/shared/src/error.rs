use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    Validation,
    Delivery,
    Internal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: String,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// Failure modes of one relay invocation. Validation problems name the
/// offending field so the caller can surface a usable reason.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },
    #[error("Invalid email address")]
    InvalidEmail,
    #[error("Failed to send message. Please try again.")]
    Delivery(String),
}

impl From<RelayError> for ApiError {
    fn from(value: RelayError) -> Self {
        let code = match value {
            RelayError::MissingField { .. } | RelayError::InvalidEmail => ErrorCode::Validation,
            RelayError::Delivery(_) => ErrorCode::Delivery,
        };
        let message = value.to_string();
        Self { code, message }
    }
}
