//! Loading a rooftop image and encoding it for a vision provider.

use std::path::{Path, PathBuf};

use base64::{engine::general_purpose::STANDARD, Engine as _};
use tracing::{debug, warn};

use crate::config::ImageConfig;
use crate::error::{ImageError, ImageResult};
use crate::formats::ImageFormat;

/// A validated image file held in memory.
#[derive(Debug, Clone)]
pub struct ImageSource {
    path: PathBuf,
    format: ImageFormat,
    width: u32,
    height: u32,
    bytes: Vec<u8>,
}

impl ImageSource {
    /// Load and validate an image file.
    ///
    /// Checks, in order: the extension is accepted, the file exists, it fits
    /// the size limit, its header matches a supported format, and it decodes
    /// far enough to report dimensions.
    pub fn load(path: &Path, config: &ImageConfig) -> ImageResult<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        if !config.is_format_supported(extension) {
            let shown = if extension.is_empty() { "(none)" } else { extension };
            return Err(ImageError::FormatNotSupported {
                format: shown.to_string(),
                supported: config.supported_formats_string(),
            });
        }

        if !path.exists() {
            return Err(ImageError::InvalidFile("File does not exist".to_string()));
        }

        let size = std::fs::metadata(path)?.len();
        if size > config.max_size_bytes() {
            return Err(ImageError::FileTooLarge {
                size_mb: size as f64 / (1024.0 * 1024.0),
                max_mb: config.max_size_mb,
            });
        }

        let bytes = std::fs::read(path)?;
        let source = Self::from_bytes(path.to_path_buf(), bytes)?;

        if let Some(declared) = ImageFormat::from_extension(extension) {
            if declared != source.format {
                warn!(
                    extension,
                    detected = source.format.as_str(),
                    "Image extension does not match file contents"
                );
            }
        }

        Ok(source)
    }

    /// Build a source from bytes already in memory.
    pub fn from_bytes(path: PathBuf, bytes: Vec<u8>) -> ImageResult<Self> {
        let format = ImageFormat::detect_from_bytes(&bytes)?;
        let (width, height) = image::load_from_memory(&bytes)
            .map(|img| (img.width(), img.height()))
            .map_err(|e| ImageError::InvalidFile(format!("Failed to decode image: {}", e)))?;

        debug!(
            path = %path.display(),
            format = format.as_str(),
            width,
            height,
            size_bytes = bytes.len(),
            "Loaded rooftop image"
        );

        Ok(Self {
            path,
            format,
            width,
            height,
            bytes,
        })
    }

    /// Path the image was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Detected format.
    pub fn format(&self) -> ImageFormat {
        self.format
    }

    /// Image dimensions as (width, height).
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Size of the encoded file in bytes.
    pub fn size_bytes(&self) -> u64 {
        self.bytes.len() as u64
    }

    /// Image bytes encoded as standard base64.
    pub fn base64(&self) -> String {
        STANDARD.encode(&self.bytes)
    }

    /// Inline data URL, e.g. `data:image/png;base64,...`.
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.format.mime_type(), self.base64())
    }
}
