// API client library for ClaidCut
//
// This crate encodes a user-selected image and submits it to the
// ClaidCut API server for background removal.

pub mod errors;
pub mod http_client;

// Re-export commonly used items
pub use errors::ApiError;
pub use http_client::{remove_background, submit_encoded};
