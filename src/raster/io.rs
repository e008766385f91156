//! Codec boundary: loading and saving raster buffers.
//!
//! Encoding and decoding are delegated to the `image` crate; the engine
//! only normalizes what comes back. Loaded images become RGB-8 or Luma-8
//! buffers, with any alpha channel pre-flattened onto a white background
//! so downstream operations never see transparency.

use super::RasterBuffer;
use image::{DynamicImage, GrayImage, RgbImage};
use log::debug;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk into a raster buffer.
///
/// 8-bit grayscale files stay single-channel; everything else is converted
/// to RGB-8. Sources with alpha are composited over white first.
pub fn load_image(path: &Path) -> Result<RasterBuffer, String> {
    let img = image::open(path).map_err(|e| format!("Failed to open {}: {e}", path.display()))?;

    let buffer = match img {
        DynamicImage::ImageLuma8(gray) => {
            let (w, h) = (gray.width() as usize, gray.height() as usize);
            RasterBuffer::from_raw(w, h, 1, gray.into_raw())
        }
        img if img.color().has_alpha() => {
            let rgba = img.to_rgba8();
            let (w, h) = (rgba.width() as usize, rgba.height() as usize);
            let mut data = Vec::with_capacity(w * h * 3);
            for px in rgba.pixels() {
                let alpha = px[3] as f32 / 255.0;
                for c in 0..3 {
                    let v = alpha * px[c] as f32 + (1.0 - alpha) * 255.0;
                    data.push(v.round().clamp(0.0, 255.0) as u8);
                }
            }
            RasterBuffer::from_raw(w, h, 3, data)
        }
        img => {
            let rgb = img.to_rgb8();
            let (w, h) = (rgb.width() as usize, rgb.height() as usize);
            RasterBuffer::from_raw(w, h, 3, rgb.into_raw())
        }
    }
    .map_err(|e| format!("Failed to load {}: {e}", path.display()))?;

    debug!(
        "loaded {} as {}x{}x{}",
        path.display(),
        buffer.width(),
        buffer.height(),
        buffer.channels()
    );
    Ok(buffer)
}

/// Save a raster buffer to disk, creating parent directories on demand.
pub fn save_image(buffer: &RasterBuffer, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let (w, h) = (buffer.width() as u32, buffer.height() as u32);
    let result = if buffer.is_color() {
        let img: RgbImage = RgbImage::from_raw(w, h, buffer.as_slice().to_vec())
            .ok_or_else(|| "Failed to create RGB image buffer".to_string())?;
        img.save(path)
    } else {
        let img: GrayImage = GrayImage::from_raw(w, h, buffer.as_slice().to_vec())
            .ok_or_else(|| "Failed to create grayscale image buffer".to_string())?;
        img.save(path)
    };
    result.map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
