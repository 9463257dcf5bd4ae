// Core data models for ClaidCut

use serde::{Deserialize, Serialize};

/// Maximum decoded image size accepted anywhere in the pipeline (5 MiB)
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// Request ID (UUID v4), used to correlate log events of one removal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(pub uuid::Uuid);

impl RequestId {
    /// Generate a new random request ID
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Image types the pipeline accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImageMime {
    #[serde(rename = "image/png")]
    Png,
    #[serde(rename = "image/jpeg")]
    Jpeg,
    #[serde(rename = "image/webp")]
    Webp,
}

impl ImageMime {
    pub const ALL: [ImageMime; 3] = [ImageMime::Png, ImageMime::Jpeg, ImageMime::Webp];

    pub fn as_str(&self) -> &'static str {
        match self {
            ImageMime::Png => "image/png",
            ImageMime::Jpeg => "image/jpeg",
            ImageMime::Webp => "image/webp",
        }
    }

    /// Parse a MIME type string. Matching is case-insensitive; anything
    /// outside the allowed set yields `None`.
    pub fn from_mime_str(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|mime| mime.as_str().eq_ignore_ascii_case(value))
    }
}

impl std::fmt::Display for ImageMime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Image encoded as `data:<mime>;base64,<payload>`
///
/// Construction does not validate the string; the gateway decodes it and
/// reports malformed input as a decode error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EncodedImage(String);

impl EncodedImage {
    pub fn from_data_uri(data_uri: impl Into<String>) -> Self {
        Self(data_uri.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// Decode back into binary form
    pub fn decode(&self) -> Result<DecodedImage, crate::encoding::DecodeError> {
        crate::encoding::decode(self)
    }
}

/// Binary image recovered from an `EncodedImage`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub mime: ImageMime,
    pub bytes: Vec<u8>,
}

/// A single background-removal request
#[derive(Debug, Clone)]
pub struct RemovalRequest {
    image: EncodedImage,
}

impl RemovalRequest {
    pub fn new(image: EncodedImage) -> Self {
        Self { image }
    }

    pub fn image(&self) -> &EncodedImage {
        &self.image
    }
}

impl From<RemoveBackgroundRequest> for RemovalRequest {
    fn from(request: RemoveBackgroundRequest) -> Self {
        Self::new(EncodedImage::from_data_uri(request.image_data_uri))
    }
}

/// Result of a successful removal.
///
/// `processed_image_uri` is whatever the provider reported. It may be a
/// transient URL; nothing here keeps it alive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemovalResult {
    pub processed_image_uri: String,
}

/// File name offered when the user downloads a processed image.
///
/// Uses the original file name up to its first dot, falling back to `image`.
pub fn download_file_name(original_file_name: Option<&str>) -> String {
    let stem = original_file_name
        .and_then(|name| name.split('.').next())
        .map(str::trim)
        .filter(|stem| !stem.is_empty())
        .unwrap_or("image");
    format!("ClaidCut_{}_bg_removed.png", stem)
}

/// Status level for messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StatusLevel {
    /// The caller sent something unusable
    Warning,
    /// Processing failed
    Error,
}

/// Error codes surfaced at the API boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Deployment (ERROR)
    ConfigurationError,

    // Input (WARNING)
    DecodeError,

    // Provider and network (ERROR)
    ProviderHttpError,
    ProviderContractError,
    ProviderTimeout,
    NetworkError,
}

impl ErrorCode {
    pub fn status_level(&self) -> StatusLevel {
        match self {
            ErrorCode::DecodeError => StatusLevel::Warning,
            _ => StatusLevel::Error,
        }
    }

    /// User-facing summary for this code
    pub fn to_message(&self) -> &'static str {
        match self {
            ErrorCode::ConfigurationError => {
                "The service is not configured correctly. Please try again later."
            }
            ErrorCode::DecodeError => "The uploaded image could not be read.",
            ErrorCode::ProviderHttpError => "The background removal service rejected the request.",
            ErrorCode::ProviderContractError => "Processing failed.",
            ErrorCode::ProviderTimeout => "The background removal service did not respond in time.",
            ErrorCode::NetworkError => "The background removal service could not be reached.",
        }
    }
}

/// API Request: POST /api/v1/remove-background
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveBackgroundRequest {
    /// `data:<mime>;base64,<payload>`
    pub image_data_uri: String,
}

/// API Error Response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub level: StatusLevel,

    pub code: ErrorCode,

    /// Human-readable message
    pub error: String,

    /// Optional error details (for debugging)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, details: Option<String>) -> Self {
        Self {
            level: code.status_level(),
            code,
            error: format!("Background removal failed: {}", code.to_message()),
            details,
        }
    }
}
