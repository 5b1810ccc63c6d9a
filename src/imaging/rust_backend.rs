//! Pure Rust image processing backend — zero external dependencies.
//!
//! Everything is statically linked into the binary.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (JPEG, PNG, GIF) | `image` crate (pure Rust decoders) |
//! | Resize | `image::DynamicImage::resize_exact` with `Lanczos3` filter |
//! | Encode (JPEG, PNG, GIF) | `image::DynamicImage::save` (format from extension) |
//!
//! Aspect-preserving fits are computed up front by
//! [`fit_within`](super::calculations::fit_within) so a source already
//! inside the bounding box is copied through without resampling.

use super::backend::{BackendError, ImageBackend, ResizeParams};
use super::calculations::fit_within;
use image::ImageReader;
use image::imageops::FilterType;
use std::path::Path;

/// Extensions the backend can both decode and re-encode.
const OUTPUT_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif"];

/// Pure Rust backend using the `image` crate.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Load and decode an image from disk.
fn load_image(path: &Path) -> Result<image::DynamicImage, BackendError> {
    ImageReader::open(path)
        .map_err(BackendError::Io)?
        .decode()
        .map_err(|e| {
            BackendError::ProcessingFailed(format!("Failed to decode {}: {}", path.display(), e))
        })
}

/// Save an image to the given path, inferring format from extension.
fn save_image(img: &image::DynamicImage, path: &Path) -> Result<(), BackendError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    if !OUTPUT_EXTENSIONS.contains(&ext.as_str()) {
        return Err(BackendError::ProcessingFailed(format!(
            "Unsupported output format: {ext}"
        )));
    }

    img.save(path).map_err(|e| {
        BackendError::ProcessingFailed(format!("Failed to encode {}: {}", path.display(), e))
    })
}

impl ImageBackend for RustBackend {
    fn resize(&self, params: &ResizeParams) -> Result<(), BackendError> {
        let img = load_image(&params.source)?;

        let (target_w, target_h) = if params.keep_ratio {
            fit_within((img.width(), img.height()), (params.width, params.height))
        } else {
            (params.width, params.height)
        };

        if (target_w, target_h) == (img.width(), img.height()) {
            // Already at target size — re-encode without resampling
            return save_image(&img, &params.output);
        }

        let resized = img.resize_exact(target_w, target_h, FilterType::Lanczos3);
        save_image(&resized, &params.output)
    }
}
