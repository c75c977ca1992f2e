//! Turns a base64 image payload into a named file for the share sheet.

use base64::engine::general_purpose::STANDARD as BASE64_ENGINE;
use base64::Engine;
use thiserror::Error;

/// A named in-memory file handed to share targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedFile {
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl SharedFile {
    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

#[derive(Debug, Error)]
pub enum PackagingError {
    #[error("Failed to decode image payload: {0}")]
    Decode(#[from] base64::DecodeError),
}

/// Decode `base64` and wrap the bytes as a file named `filename`.
///
/// Pixel data is passed through untouched.
pub fn to_file(base64: &str, filename: &str, mime_type: &str) -> Result<SharedFile, PackagingError> {
    let bytes = BASE64_ENGINE.decode(base64.trim())?;
    Ok(SharedFile {
        name: filename.to_string(),
        mime_type: mime_type.to_string(),
        bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_decoded_bytes() {
        let file = to_file("iVBORw0KGgo=", "fox_coloring_page.png", "image/png").unwrap();
        assert_eq!(file.name, "fox_coloring_page.png");
        assert_eq!(file.mime_type, "image/png");
        assert_eq!(file.bytes, [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
        assert_eq!(file.size(), 8);
    }

    #[test]
    fn invalid_payload_fails() {
        let err = to_file("%%%not-base64%%%", "x.png", "image/png").unwrap_err();
        assert!(matches!(err, PackagingError::Decode(_)));
    }

    #[test]
    fn empty_payload_is_an_empty_file() {
        let file = to_file("", "empty.png", "image/png").unwrap();
        assert!(file.bytes.is_empty());
    }
}
