//! Pure calculation functions for resize dimensions.
//!
//! All functions here are pure and testable without any I/O or images.

/// Calculate dimensions that fit a source image inside a bounding box.
///
/// Preserves the source aspect ratio and never upscales: a source that
/// already fits inside the box is returned at its original dimensions.
/// Both output dimensions are at least 1.
///
/// # Arguments
/// * `source` - Original image dimensions (width, height)
/// * `bounds` - Bounding box dimensions (width, height)
///
/// # Returns
/// * `(width, height)` - Output dimensions, within the box
pub fn fit_within(source: (u32, u32), bounds: (u32, u32)) -> (u32, u32) {
    let (src_w, src_h) = source;
    let (box_w, box_h) = bounds;

    if src_w <= box_w && src_h <= box_h {
        return (src_w, src_h);
    }

    let scale = (box_w as f64 / src_w as f64).min(box_h as f64 / src_h as f64);
    let w = ((src_w as f64 * scale).round() as u32).max(1);
    let h = ((src_h as f64 * scale).round() as u32).max(1);
    (w, h)
}
