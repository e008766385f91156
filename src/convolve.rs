//! Spatial convolution filters over a zero-padded neighborhood window.
//!
//! Shared algorithm shape
//! - Zero-pad the source by the kernel radius on all sides (sharpening is
//!   the documented exception: it leaves the 1-pixel border at the source
//!   value and recomputes interior pixels only).
//! - For every output pixel, accumulate a weighted sum over the window,
//!   independently per channel for color input.
//! - Accumulate in `f32`, clamp to `[0, 255]` on the way out.
//! - Report progress once per completed output row as
//!   `(rows_done / total_rows) * 100`.
//!
//! Complexity is O(W·H·k²) per channel; memory is one padded `f32` plane
//! per channel plus the output buffer.

use crate::error::EnhanceError;
use crate::point::grayscale;
use crate::progress::Progress;
use crate::raster::buffer::clamp_u8;
use crate::raster::RasterBuffer;
use log::debug;

type Kernel3 = [[f32; 3]; 3];

const SHARPEN_KERNEL: Kernel3 = [[-1.0, -1.0, -1.0], [-1.0, 9.0, -1.0], [-1.0, -1.0, -1.0]];
const LAPLACIAN_KERNEL: Kernel3 = [[1.0, 1.0, 1.0], [1.0, -8.0, 1.0], [1.0, 1.0, 1.0]];

/// One channel of `src` as an `f32` plane surrounded by a zero border of
/// width `radius`. Returns the plane and its padded width.
fn zero_padded_plane(src: &RasterBuffer, c: usize, radius: usize) -> (Vec<f32>, usize) {
    let (w, h) = (src.width(), src.height());
    let pw = w + 2 * radius;
    let ph = h + 2 * radius;
    let mut plane = vec![0.0f32; pw * ph];
    for y in 0..h {
        let row = &mut plane[(y + radius) * pw + radius..(y + radius) * pw + radius + w];
        for (x, dst) in row.iter_mut().enumerate() {
            *dst = src.get(x, y, c) as f32;
        }
    }
    (plane, pw)
}

/// Uniform box smoothing with a `k × k` mean kernel, per channel.
///
/// `kernel_size` must be odd and at least 1; `k = 1` is the identity.
pub fn smooth(
    src: &RasterBuffer,
    kernel_size: usize,
    progress: &mut dyn Progress,
) -> Result<RasterBuffer, EnhanceError> {
    src.validate("smooth")?;
    if kernel_size < 1 || kernel_size % 2 == 0 {
        return Err(EnhanceError::InvalidParameter {
            op: "smooth",
            detail: format!("kernel size {kernel_size} must be an odd positive integer"),
        });
    }
    let (w, h, channels) = (src.width(), src.height(), src.channels());
    let radius = kernel_size / 2;
    let weight = 1.0 / (kernel_size * kernel_size) as f32;

    let planes: Vec<(Vec<f32>, usize)> = (0..channels)
        .map(|c| zero_padded_plane(src, c, radius))
        .collect();

    let mut out = if src.is_color() {
        RasterBuffer::new_rgb(w, h)
    } else {
        RasterBuffer::new_gray(w, h)
    };
    for y in 0..h {
        for x in 0..w {
            for (c, (plane, pw)) in planes.iter().enumerate() {
                let mut acc = 0.0f32;
                for ky in 0..kernel_size {
                    let start = (y + ky) * pw + x;
                    for &v in &plane[start..start + kernel_size] {
                        acc += v;
                    }
                }
                out.set(x, y, c, clamp_u8(acc * weight));
            }
        }
        progress.report((y + 1) as f32 / h as f32 * 100.0);
    }
    Ok(out)
}

/// Unsharp sharpening with the fixed 3×3 kernel
/// `[[-1,-1,-1],[-1,9,-1],[-1,-1,-1]]`, blended with the source:
/// `out = intensity * conv + (1 - intensity) * orig`.
///
/// No padding is applied: the outermost 1-pixel border keeps the source
/// value and only interior pixels are recomputed. `intensity` is not
/// range-checked; values outside `[0, 1]` are the caller's choice.
pub fn sharpen(
    src: &RasterBuffer,
    intensity: f32,
    progress: &mut dyn Progress,
) -> Result<RasterBuffer, EnhanceError> {
    src.validate("sharpen")?;
    let (w, h, channels) = (src.width(), src.height(), src.channels());

    // Border rows/columns stay at the source value.
    let mut out = src.clone();
    for y in 0..h {
        if y >= 1 && y + 1 < h && w >= 3 {
            for x in 1..w - 1 {
                for c in 0..channels {
                    let mut conv = 0.0f32;
                    for (ky, krow) in SHARPEN_KERNEL.iter().enumerate() {
                        for (kx, &kv) in krow.iter().enumerate() {
                            conv += kv * src.get(x + kx - 1, y + ky - 1, c) as f32;
                        }
                    }
                    let orig = src.get(x, y, c) as f32;
                    out.set(x, y, c, clamp_u8(intensity * conv + (1.0 - intensity) * orig));
                }
            }
        }
        progress.report((y + 1) as f32 / h as f32 * 100.0);
    }
    Ok(out)
}

/// Laplacian edge detection on the luma-reduced source.
///
/// Zero-pads by 1, convolves with `[[1,1,1],[1,-8,1],[1,1,1]]`, takes
/// absolute responses, then rescales so the buffer-wide maximum maps to
/// 255. The normalization is a separate pass after the full convolution
/// since the true maximum is only known once every pixel is processed.
/// Output is always single-channel.
pub fn laplacian_edge(
    src: &RasterBuffer,
    progress: &mut dyn Progress,
) -> Result<RasterBuffer, EnhanceError> {
    src.validate("laplacian_edge")?;
    let gray = grayscale(src)?;
    let (w, h) = (gray.width(), gray.height());
    let (plane, pw) = zero_padded_plane(&gray, 0, 1);

    let mut responses = vec![0.0f32; w * h];
    for y in 0..h {
        for x in 0..w {
            let mut acc = 0.0f32;
            for (ky, krow) in LAPLACIAN_KERNEL.iter().enumerate() {
                let start = (y + ky) * pw + x;
                for (kx, &kv) in krow.iter().enumerate() {
                    acc += kv * plane[start + kx];
                }
            }
            responses[y * w + x] = acc.abs();
        }
        progress.report((y + 1) as f32 / h as f32 * 100.0);
    }

    let max = responses.iter().fold(0.0f32, |m, &v| m.max(v));
    debug!("laplacian_edge: {w}x{h}, max response {max:.1}");
    let data: Vec<u8> = if max > 0.0 {
        let scale = 255.0 / max;
        responses.into_iter().map(|v| clamp_u8(v * scale)).collect()
    } else {
        vec![0; w * h]
    };
    RasterBuffer::from_raw(w, h, 1, data)
}
