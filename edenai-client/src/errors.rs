// Gateway errors

use crate::provider::SubProvider;
use claidcut_core::{DecodeError, ErrorCode};
use std::time::Duration;

/// Every way a background removal can fail
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// No API key configured. Same outcome for every call until redeployed.
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("invalid image data URI: {0}")]
    Decode(#[from] DecodeError),

    #[error("Eden AI API request failed with status {status}: {body}")]
    ProviderHttp { status: u16, body: String },

    #[error("Eden AI returned an unusable result: {0}")]
    ProviderContract(#[from] ContractViolation),

    #[error("Eden AI did not respond within {0:?}")]
    ProviderTimeout(Duration),

    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),
}

impl GatewayError {
    /// Transient failures worth another attempt under a retry policy
    pub fn is_retryable(&self) -> bool {
        match self {
            GatewayError::ProviderTimeout(_) | GatewayError::Network(_) => true,
            GatewayError::ProviderHttp { status, .. } => *status == 429 || *status >= 500,
            GatewayError::Configuration(_)
            | GatewayError::Decode(_)
            | GatewayError::ProviderContract(_) => false,
        }
    }

    /// Boundary error code
    pub fn to_error_code(&self) -> ErrorCode {
        match self {
            GatewayError::Configuration(_) => ErrorCode::ConfigurationError,
            GatewayError::Decode(_) => ErrorCode::DecodeError,
            GatewayError::ProviderHttp { .. } => ErrorCode::ProviderHttpError,
            GatewayError::ProviderContract(_) => ErrorCode::ProviderContractError,
            GatewayError::ProviderTimeout(_) => ErrorCode::ProviderTimeout,
            GatewayError::Network(_) => ErrorCode::NetworkError,
        }
    }

    /// Details safe to hand to an untrusted client.
    ///
    /// Configuration and network failures expose nothing.
    pub fn public_details(&self) -> Option<String> {
        match self {
            GatewayError::Configuration(_) | GatewayError::Network(_) => None,
            GatewayError::Decode(e) => Some(e.to_string()),
            GatewayError::ProviderHttp { status, body } => Some(format!("status {}: {}", status, body)),
            GatewayError::ProviderContract(v) => Some(v.to_string()),
            GatewayError::ProviderTimeout(timeout) => Some(format!("timed out after {}s", timeout.as_secs())),
        }
    }
}

/// HTTP success, but the payload does not describe a usable result
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContractViolation {
    #[error("response body is not a JSON object: {0}")]
    MalformedBody(String),

    #[error("response has no entry for provider '{provider}' (keys present: {present:?})")]
    MissingProviderKey {
        provider: SubProvider,
        present: Vec<String>,
    },

    #[error("provider '{provider}' entry is malformed: {reason}")]
    MalformedEntry { provider: SubProvider, reason: String },

    #[error("provider '{provider}' reported status '{status}'{}", message_suffix(.message))]
    ProviderFailed {
        provider: SubProvider,
        status: String,
        message: Option<String>,
    },

    #[error("provider '{0}' reported success without an image_resource_url")]
    MissingImageUrl(SubProvider),
}

fn message_suffix(message: &Option<String>) -> String {
    message.as_deref().map(|m| format!(": {}", m)).unwrap_or_default()
}

/// Invalid gateway configuration values
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown Eden AI provider '{0}'")]
    UnknownProvider(String),

    #[error("invalid value for {name}: '{value}'")]
    InvalidValue { name: &'static str, value: String },
}
