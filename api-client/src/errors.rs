// API client errors

use claidcut_core::{ErrorCode, ErrorResponse, SelectionError};

/// API client error types
#[derive(Debug, Clone)]
pub enum ApiError {
    /// The selected file was rejected before sending
    InvalidSelection(SelectionError),
    /// Network communication error
    NetworkError(String),
    /// Server returned an unexpected response
    ServerError(String),
    /// Background removal failed with a boundary error code
    ProcessError {
        code: ErrorCode,
        message: String,
        details: Option<String>,
    },
}

impl ApiError {
    /// Convert from ErrorResponse
    pub fn from_error_response(response: ErrorResponse) -> Self {
        ApiError::ProcessError {
            code: response.code,
            message: response.error,
            details: response.details,
        }
    }

    /// Boundary code, when the server supplied one
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            ApiError::ProcessError { code, .. } => Some(*code),
            _ => None,
        }
    }
}

impl From<SelectionError> for ApiError {
    fn from(error: SelectionError) -> Self {
        ApiError::InvalidSelection(error)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::InvalidSelection(e) => write!(f, "{}", e),
            ApiError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            ApiError::ServerError(msg) => write!(f, "Server error: {}", msg),
            ApiError::ProcessError { message, .. } => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for ApiError {}
