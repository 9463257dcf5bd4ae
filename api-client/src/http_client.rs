// HTTP client for the ClaidCut API

use crate::errors::ApiError;
use claidcut_core::{
    encode, validate_selection, EncodedImage, ErrorResponse, RemovalResult, RemoveBackgroundRequest,
};
use std::env;

fn get_api_base_url() -> String {
    env::var("API_BASE_URL")
        .unwrap_or_else(|_| "http://localhost:8080".to_string())
}

/// Remove the background of a user-selected image via the API server
///
/// # Arguments
/// * `file_bytes` - Raw image file contents
/// * `declared_mime` - MIME type reported by the file picker
///
/// # Returns
/// Location of the processed image on success
pub async fn remove_background(file_bytes: &[u8], declared_mime: &str) -> Result<RemovalResult, ApiError> {
    let mime = validate_selection(file_bytes, declared_mime)?;
    submit_encoded(encode(file_bytes, mime)).await
}

/// Send an already encoded image to the API server
pub async fn submit_encoded(image: EncodedImage) -> Result<RemovalResult, ApiError> {
    let request = RemoveBackgroundRequest {
        image_data_uri: image.into_inner(),
    };

    let client = reqwest::Client::new();
    let api_base_url = get_api_base_url();
    let response = client
        .post(format!("{}/api/v1/remove-background", api_base_url))
        .json(&request)
        .send()
        .await
        .map_err(|_| ApiError::NetworkError("The server is not responding. Please try again later.".to_string()))?;

    let status = response.status();
    if status.is_success() {
        return response
            .json::<RemovalResult>()
            .await
            .map_err(|_| ApiError::NetworkError("Failed to parse the server response.".to_string()));
    }

    // Structured failure from the gateway, or something else entirely
    let body = response.text().await.unwrap_or_default();
    match serde_json::from_str::<ErrorResponse>(&body) {
        Ok(error_response) => Err(ApiError::from_error_response(error_response)),
        Err(_) => Err(ApiError::ServerError(format!("HTTP error: {}", status))),
    }
}
