// Validation of user-selected image files

use crate::models::{ImageMime, MAX_IMAGE_BYTES};

/// Selection errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("The selected file is empty.")]
    EmptyFile,

    #[error("Unsupported file type '{0}'. Please select a PNG, JPG or WEBP image.")]
    UnsupportedType(String),

    #[error("File too large: {0} bytes. Please upload an image smaller than 5MB.")]
    TooLarge(usize),
}

/// Validate a file the user picked before it is encoded and sent.
///
/// # Rules
/// - File must not be empty
/// - Declared MIME type must be PNG, JPEG or WEBP
/// - File must not exceed 5 MiB
pub fn validate_selection(file_bytes: &[u8], declared_mime: &str) -> Result<ImageMime, SelectionError> {
    if file_bytes.is_empty() {
        return Err(SelectionError::EmptyFile);
    }

    let mime = ImageMime::from_mime_str(declared_mime)
        .ok_or_else(|| SelectionError::UnsupportedType(declared_mime.to_string()))?;

    if file_bytes.len() > MAX_IMAGE_BYTES {
        return Err(SelectionError::TooLarge(file_bytes.len()));
    }

    Ok(mime)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_selection() {
        assert_eq!(validate_selection(b"\x89PNG", "image/png"), Ok(ImageMime::Png));
        assert_eq!(validate_selection(b"\xFF\xD8", "IMAGE/JPEG"), Ok(ImageMime::Jpeg));
    }

    #[test]
    fn test_empty_file() {
        assert_eq!(validate_selection(b"", "image/png"), Err(SelectionError::EmptyFile));
    }

    #[test]
    fn test_unsupported_type() {
        assert!(matches!(
            validate_selection(b"GIF89a", "image/gif"),
            Err(SelectionError::UnsupportedType(_))
        ));
    }

    #[test]
    fn test_size_limit_is_inclusive() {
        let at_limit = vec![0u8; MAX_IMAGE_BYTES];
        assert!(validate_selection(&at_limit, "image/webp").is_ok());

        let over_limit = vec![0u8; MAX_IMAGE_BYTES + 1];
        assert_eq!(
            validate_selection(&over_limit, "image/webp"),
            Err(SelectionError::TooLarge(MAX_IMAGE_BYTES + 1))
        );
    }
}
