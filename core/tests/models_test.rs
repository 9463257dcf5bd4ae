// Unit tests for models module

use claidcut_core::*;
use serde_json::json;

// ==================== RequestId Tests ====================

#[test]
fn test_request_id_default() {
    let id1 = RequestId::default();
    let id2 = RequestId::default();
    assert_ne!(id1, id2);
}

// ==================== ImageMime Tests ====================

#[test]
fn test_image_mime_parse() {
    assert_eq!(ImageMime::from_mime_str("image/png"), Some(ImageMime::Png));
    assert_eq!(ImageMime::from_mime_str(" image/webp "), Some(ImageMime::Webp));
    assert_eq!(ImageMime::from_mime_str("Image/JPEG"), Some(ImageMime::Jpeg));
    assert_eq!(ImageMime::from_mime_str("image/jpg"), None);
    assert_eq!(ImageMime::from_mime_str("image/svg+xml"), None);
    assert_eq!(ImageMime::from_mime_str(""), None);
}

#[test]
fn test_image_mime_serde() {
    assert_eq!(serde_json::to_value(ImageMime::Jpeg).unwrap(), json!("image/jpeg"));
    let parsed: ImageMime = serde_json::from_value(json!("image/webp")).unwrap();
    assert_eq!(parsed, ImageMime::Webp);
}

// ==================== EncodedImage / RemovalRequest Tests ====================

#[test]
fn test_encoded_image_decode_via_method() {
    let bytes = vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10];
    let encoded = encode(&bytes, ImageMime::Jpeg);
    let decoded = encoded.decode().unwrap();
    assert_eq!(decoded, DecodedImage { mime: ImageMime::Jpeg, bytes });
}

#[test]
fn test_removal_request_from_wire() {
    let wire: RemoveBackgroundRequest =
        serde_json::from_value(json!({ "imageDataUri": "data:image/png;base64,YWJj" })).unwrap();
    let request = RemovalRequest::from(wire);
    assert_eq!(request.image().as_str(), "data:image/png;base64,YWJj");
}

#[test]
fn test_removal_result_serializes_camel_case() {
    let result = RemovalResult {
        processed_image_uri: "https://example.com/out.png".to_string(),
    };
    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        json!({ "processedImageUri": "https://example.com/out.png" })
    );
}

// ==================== download_file_name Tests ====================

#[test]
fn test_download_file_name() {
    assert_eq!(download_file_name(Some("cat.png")), "ClaidCut_cat_bg_removed.png");
    assert_eq!(download_file_name(Some("holiday.photo.jpg")), "ClaidCut_holiday_bg_removed.png");
    assert_eq!(download_file_name(Some("noext")), "ClaidCut_noext_bg_removed.png");
}

#[test]
fn test_download_file_name_fallback() {
    assert_eq!(download_file_name(None), "ClaidCut_image_bg_removed.png");
    assert_eq!(download_file_name(Some("")), "ClaidCut_image_bg_removed.png");
    assert_eq!(download_file_name(Some(".hidden")), "ClaidCut_image_bg_removed.png");
}

// ==================== ErrorResponse Tests ====================

#[test]
fn test_error_response_levels() {
    assert_eq!(ErrorResponse::new(ErrorCode::DecodeError, None).level, StatusLevel::Warning);
    assert_eq!(ErrorResponse::new(ErrorCode::ProviderTimeout, None).level, StatusLevel::Error);
}

#[test]
fn test_error_response_serialization() {
    let response = ErrorResponse::new(ErrorCode::ProviderContractError, None);
    let value = serde_json::to_value(&response).unwrap();

    assert_eq!(value["level"], "ERROR");
    assert_eq!(value["code"], "ProviderContractError");
    assert_eq!(value["error"], "Background removal failed: Processing failed.");
    // details omitted when absent
    assert!(value.get("details").is_none());
}

#[test]
fn test_error_response_round_trip_with_details() {
    let response = ErrorResponse::new(ErrorCode::ProviderHttpError, Some("status 500: boom".to_string()));
    let text = serde_json::to_string(&response).unwrap();
    let parsed: ErrorResponse = serde_json::from_str(&text).unwrap();

    assert_eq!(parsed.code, ErrorCode::ProviderHttpError);
    assert_eq!(parsed.details.as_deref(), Some("status 500: boom"));
}
