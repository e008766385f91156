//! Geometric resampling: resize and arbitrary-angle rotation.
//!
//! Resize delegates to the `image` crate's Lanczos3 resampler; rotation
//! inverse-maps every destination pixel back into the source with
//! nearest-neighbor sampling, leaving uncovered canvas black.

use crate::error::EnhanceError;
use crate::progress::Progress;
use crate::raster::RasterBuffer;
use image::imageops::{self, FilterType};
use image::{GrayImage, RgbImage};
use log::debug;
use nalgebra::{Rotation2, Vector2};

/// Resample to `new_w × new_h` with Lanczos3 interpolation.
///
/// The output shape is exactly `(new_h, new_w)` with the source's channel
/// count. The resampler runs as one delegated pass, so only the terminal
/// progress report is emitted.
pub fn resize(
    src: &RasterBuffer,
    new_w: u32,
    new_h: u32,
    progress: &mut dyn Progress,
) -> Result<RasterBuffer, EnhanceError> {
    src.validate("resize")?;
    if new_w == 0 || new_h == 0 {
        return Err(EnhanceError::InvalidParameter {
            op: "resize",
            detail: format!("target size {new_w}x{new_h} must be positive"),
        });
    }
    let (w, h) = (src.width() as u32, src.height() as u32);

    let out = if src.is_color() {
        let img: RgbImage = RgbImage::from_raw(w, h, src.as_slice().to_vec())
            .expect("buffer length already validated");
        let resized = imageops::resize(&img, new_w, new_h, FilterType::Lanczos3);
        RasterBuffer::from_raw(new_w as usize, new_h as usize, 3, resized.into_raw())?
    } else {
        let img: GrayImage = GrayImage::from_raw(w, h, src.as_slice().to_vec())
            .expect("buffer length already validated");
        let resized = imageops::resize(&img, new_w, new_h, FilterType::Lanczos3);
        RasterBuffer::from_raw(new_w as usize, new_h as usize, 1, resized.into_raw())?
    };
    progress.report(100.0);
    Ok(out)
}

/// Rotate by `angle_deg` (counter-clockwise, any angle) onto a canvas
/// sized to exactly bound the rotated source:
/// `new_w = floor(h·|sin θ| + w·|cos θ|)`, `new_h = floor(h·|cos θ| + w·|sin θ|)`.
///
/// Every destination pixel is inverse-rotated about each image's own
/// center and filled with the nearest source sample; destinations that
/// map outside the source stay black. Progress is reported once per
/// destination row.
pub fn rotate(
    src: &RasterBuffer,
    angle_deg: f32,
    progress: &mut dyn Progress,
) -> Result<RasterBuffer, EnhanceError> {
    src.validate("rotate")?;
    let (w, h, channels) = (src.width(), src.height(), src.channels());
    let theta = angle_deg.to_radians();
    let (sin, cos) = (theta.sin().abs(), theta.cos().abs());

    let new_w = ((h as f32 * sin + w as f32 * cos).floor() as usize).max(1);
    let new_h = ((h as f32 * cos + w as f32 * sin).floor() as usize).max(1);
    debug!("rotate: {w}x{h} by {angle_deg}° onto {new_w}x{new_h} canvas");

    // Pixel-center anchors in both images; rotate(0) maps every pixel to
    // itself exactly.
    let src_center = Vector2::new((w as f32 - 1.0) / 2.0, (h as f32 - 1.0) / 2.0);
    let dst_center = Vector2::new((new_w as f32 - 1.0) / 2.0, (new_h as f32 - 1.0) / 2.0);
    let inverse = Rotation2::new(-theta);

    let mut out = if src.is_color() {
        RasterBuffer::new_rgb(new_w, new_h)
    } else {
        RasterBuffer::new_gray(new_w, new_h)
    };
    for y in 0..new_h {
        for x in 0..new_w {
            let offset = Vector2::new(x as f32, y as f32) - dst_center;
            let mapped = inverse * offset + src_center;
            let sx = mapped.x.round();
            let sy = mapped.y.round();
            if sx >= 0.0 && sy >= 0.0 && (sx as usize) < w && (sy as usize) < h {
                let (sx, sy) = (sx as usize, sy as usize);
                for c in 0..channels {
                    out.set(x, y, c, src.get(sx, sy, c));
                }
            }
        }
        progress.report((y + 1) as f32 / new_h as f32 * 100.0);
    }
    Ok(out)
}
