// Eden AI Client Library
//
// This crate provides the background-removal gateway: it decodes an
// uploaded image, forwards it to Eden AI and normalizes the answer.

mod client;
mod config;
mod errors;
mod provider;

pub use client::EdenAiClient;
pub use config::{ApiKey, GatewayConfig, RetryPolicy, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use errors::{ConfigError, ContractViolation, GatewayError};
pub use provider::{normalize_response, SubProvider};
