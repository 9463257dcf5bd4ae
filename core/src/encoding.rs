// Data URI encoding and decoding for uploaded images

use crate::models::{DecodedImage, EncodedImage, ImageMime, MAX_IMAGE_BYTES};
use base64::Engine;

const DATA_SCHEME: &str = "data:";
const BASE64_MARKER: &str = "base64";

/// Decode errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("data URI must start with 'data:'")]
    MissingScheme,

    #[error("data URI has no ',' separating header and payload")]
    MissingSeparator,

    #[error("data URI payload is not marked as base64")]
    NotBase64,

    #[error("unsupported image type: '{0}' (allowed: image/png, image/jpeg, image/webp)")]
    UnsupportedMimeType(String),

    #[error("invalid base64 payload: {0}")]
    InvalidBase64(String),

    #[error("image payload is empty")]
    EmptyPayload,

    #[error("image is too large: {0} bytes (limit: {1} bytes)")]
    TooLarge(usize, usize),
}

/// Encode image bytes as a data URI.
///
/// Size and emptiness are checked at selection time, see
/// [`crate::validation::validate_selection`].
pub fn encode(file_bytes: &[u8], mime: ImageMime) -> EncodedImage {
    let payload = base64::engine::general_purpose::STANDARD.encode(file_bytes);
    EncodedImage::from_data_uri(format!("{}{};base64,{}", DATA_SCHEME, mime.as_str(), payload))
}

/// Decode a data URI back into its MIME type and bytes.
pub fn decode(image: &EncodedImage) -> Result<DecodedImage, DecodeError> {
    let (header, payload) = image
        .as_str()
        .split_once(',')
        .ok_or(DecodeError::MissingSeparator)?;

    let header = header
        .strip_prefix(DATA_SCHEME)
        .ok_or(DecodeError::MissingScheme)?;

    // header: <mime>[;param]*;base64
    let mut params = header.split(';');
    let mime_str = params.next().unwrap_or_default();
    if !params.any(|p| p.trim().eq_ignore_ascii_case(BASE64_MARKER)) {
        return Err(DecodeError::NotBase64);
    }
    let mime = ImageMime::from_mime_str(mime_str)
        .ok_or_else(|| DecodeError::UnsupportedMimeType(mime_str.to_string()))?;

    let bytes = base64::engine::general_purpose::STANDARD
        .decode(payload.trim())
        .map_err(|e| DecodeError::InvalidBase64(e.to_string()))?;

    if bytes.is_empty() {
        return Err(DecodeError::EmptyPayload);
    }
    if bytes.len() > MAX_IMAGE_BYTES {
        return Err(DecodeError::TooLarge(bytes.len(), MAX_IMAGE_BYTES));
    }

    Ok(DecodedImage { mime, bytes })
}
