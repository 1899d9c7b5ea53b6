//! Image format validation and detection.

use crate::error::{ImageError, ImageResult};

/// Formats accepted for rooftop analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    /// PNG format
    Png,
    /// JPEG format
    Jpeg,
}

impl ImageFormat {
    /// Detect image format from magic bytes.
    pub fn detect_from_bytes(bytes: &[u8]) -> ImageResult<Self> {
        if bytes.len() < 4 {
            return Err(ImageError::InvalidFile(
                "File too small to be a valid image".to_string(),
            ));
        }

        // PNG: 89 50 4E 47
        if bytes.starts_with(&[0x89, 0x50, 0x4e, 0x47]) {
            return Ok(ImageFormat::Png);
        }

        // JPEG: FF D8 FF
        if bytes.starts_with(&[0xff, 0xd8, 0xff]) {
            return Ok(ImageFormat::Jpeg);
        }

        if bytes.starts_with(b"GIF") {
            return Err(Self::unsupported("gif"));
        }
        if bytes.len() >= 12 && bytes.starts_with(b"RIFF") && bytes[8..12] == *b"WEBP" {
            return Err(Self::unsupported("webp"));
        }

        Err(ImageError::InvalidFile(
            "Unable to detect image format from file header".to_string(),
        ))
    }

    /// Extensions of every format that can be decoded.
    pub fn decodable_extensions() -> &'static [&'static str] {
        &["png", "jpg", "jpeg"]
    }

    fn unsupported(format: &str) -> ImageError {
        ImageError::FormatNotSupported {
            format: format.to_string(),
            supported: Self::decodable_extensions().join(", "),
        }
    }

    /// Look up a format by file extension (case-insensitive).
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "png" => Some(ImageFormat::Png),
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            _ => None,
        }
    }

    /// Get the format as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpg",
        }
    }

    /// MIME type used in data URLs.
    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
            ImageFormat::Jpeg => "image/jpeg",
        }
    }
}
