//! Rooftop image input for solarscan.
//!
//! Validates the file a user submits (extension, size, header) and encodes
//! it as a base64 data URL for a vision provider. Images are sent as-is;
//! nothing is resized or re-encoded.

pub mod config;
pub mod error;
pub mod formats;
pub mod source;

pub use config::ImageConfig;
pub use error::{ImageError, ImageResult};
pub use formats::ImageFormat;
pub use source::ImageSource;
