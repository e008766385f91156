//! Point transforms: per-pixel, per-channel functions with no spatial
//! dependency.
//!
//! Every function reads each source sample exactly once, allocates a fresh
//! output buffer and clamps results to `[0, 255]`. None of them report
//! progress; they are linear single passes.

use crate::error::EnhanceError;
use crate::raster::buffer::clamp_u8;
use crate::raster::RasterBuffer;

/// Reduce to single-channel luma (`0.299 R + 0.587 G + 0.114 B`, truncated).
///
/// Single-channel input returns an unchanged copy, so the transform is
/// idempotent.
pub fn grayscale(src: &RasterBuffer) -> Result<RasterBuffer, EnhanceError> {
    src.validate("grayscale")?;
    if !src.is_color() {
        return Ok(src.clone());
    }
    let data: Vec<u8> = src.luma_plane().into_iter().map(clamp_u8).collect();
    RasterBuffer::from_raw(src.width(), src.height(), 1, data)
}

/// Photographic negative: `out = 255 - in`, per sample, per channel.
pub fn negative(src: &RasterBuffer) -> Result<RasterBuffer, EnhanceError> {
    src.validate("negative")?;
    let data: Vec<u8> = src.as_slice().iter().map(|&v| 255 - v).collect();
    RasterBuffer::from_raw(src.width(), src.height(), src.channels(), data)
}

/// Binary threshold on the luma-reduced source: strictly greater than
/// `threshold` maps to 255, everything else to 0.
pub fn threshold(src: &RasterBuffer, threshold: i32) -> Result<RasterBuffer, EnhanceError> {
    src.validate("threshold")?;
    if !(0..=255).contains(&threshold) {
        return Err(EnhanceError::InvalidParameter {
            op: "threshold",
            detail: format!("threshold {threshold} outside [0, 255]"),
        });
    }
    let gray = grayscale(src)?;
    let t = threshold as u8;
    let data: Vec<u8> = gray
        .as_slice()
        .iter()
        .map(|&v| if v > t { 255 } else { 0 })
        .collect();
    RasterBuffer::from_raw(src.width(), src.height(), 1, data)
}

/// Linear contrast about the mid-gray pivot:
/// `out = clamp(128 + alpha * (in - 128))`, per channel.
///
/// `alpha = 1` is the identity; `alpha <= 0` is rejected.
pub fn contrast(src: &RasterBuffer, alpha: f32) -> Result<RasterBuffer, EnhanceError> {
    src.validate("contrast")?;
    if !(alpha > 0.0) {
        return Err(EnhanceError::InvalidParameter {
            op: "contrast",
            detail: format!("alpha {alpha} must be positive"),
        });
    }
    let data: Vec<u8> = src
        .as_slice()
        .iter()
        .map(|&v| clamp_u8(128.0 + alpha * (v as f32 - 128.0)))
        .collect();
    RasterBuffer::from_raw(src.width(), src.height(), src.channels(), data)
}

/// Logarithmic compression scaled by the global maximum:
/// `c = 255 / ln(1 + max)`, `out = clamp(c * ln(1 + in))`.
///
/// Operates on raw channels, not luma; every channel is compressed with
/// the same `c` derived from the buffer-wide maximum. An all-zero buffer
/// stays all-zero (`c = 0`).
pub fn log_scaled(src: &RasterBuffer) -> Result<RasterBuffer, EnhanceError> {
    src.validate("log_scaled")?;
    let max = src.max_sample() as f32;
    let c = if max > 0.0 { 255.0 / (1.0 + max).ln() } else { 0.0 };
    let data: Vec<u8> = src
        .as_slice()
        .iter()
        .map(|&v| clamp_u8(c * (1.0 + v as f32).ln()))
        .collect();
    RasterBuffer::from_raw(src.width(), src.height(), src.channels(), data)
}

/// Unit-constant log transform on the luma-reduced source:
/// `c = 255 / log10(256)`, `out = c * log10(1 + gray)`, truncated.
///
/// The output is inherently bounded by 255, so no clamping pass is
/// needed; truncation matches the scaled variant's quantization.
pub fn log_unit(src: &RasterBuffer) -> Result<RasterBuffer, EnhanceError> {
    src.validate("log_unit")?;
    let gray = grayscale(src)?;
    let c = 255.0 / 256.0f32.log10();
    let data: Vec<u8> = gray
        .as_slice()
        .iter()
        .map(|&v| (c * (1.0 + v as f32).log10()) as u8)
        .collect();
    RasterBuffer::from_raw(src.width(), src.height(), 1, data)
}
