//! Owned 8-bit raster buffer in row-major, interleaved layout.
//!
//! Shape is `(H, W)` for single-channel or `(H, W, 3)` for RGB; the channel
//! count is 1 or 3, never mixed within one buffer. Operations take a
//! read-only reference and allocate a brand-new output buffer, so a source
//! is never mutated in place.

use crate::error::EnhanceError;

/// Luma weights for RGB reduction (ITU-R BT.601).
pub const LUMA_WEIGHTS: [f32; 3] = [0.299, 0.587, 0.114];

/// Dense 2D/3D pixel buffer of unsigned 8-bit samples.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterBuffer {
    w: usize,
    h: usize,
    channels: usize,
    data: Vec<u8>,
}

impl RasterBuffer {
    /// Zero-filled single-channel buffer of size `w × h`.
    pub fn new_gray(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            channels: 1,
            data: vec![0; w * h],
        }
    }

    /// Zero-filled RGB buffer of size `w × h`.
    pub fn new_rgb(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            channels: 3,
            data: vec![0; w * h * 3],
        }
    }

    /// Wrap raw interleaved samples, validating the shape invariants.
    pub fn from_raw(
        w: usize,
        h: usize,
        channels: usize,
        data: Vec<u8>,
    ) -> Result<Self, EnhanceError> {
        if w == 0 || h == 0 {
            return Err(EnhanceError::EmptyBuffer { op: "from_raw" });
        }
        if channels != 1 && channels != 3 {
            return Err(EnhanceError::UnsupportedShape {
                op: "from_raw",
                channels,
            });
        }
        if data.len() != w * h * channels {
            return Err(EnhanceError::InvalidParameter {
                op: "from_raw",
                detail: format!(
                    "data length {} does not match {w}x{h}x{channels}",
                    data.len()
                ),
            });
        }
        Ok(Self {
            w,
            h,
            channels,
            data,
        })
    }

    /// Image width in pixels.
    pub fn width(&self) -> usize {
        self.w
    }

    /// Image height in pixels.
    pub fn height(&self) -> usize {
        self.h
    }

    /// Samples per pixel: 1 (grayscale) or 3 (RGB).
    pub fn channels(&self) -> usize {
        self.channels
    }

    pub fn is_color(&self) -> bool {
        self.channels == 3
    }

    /// Total number of pixels (`w * h`, independent of channel count).
    pub fn pixel_count(&self) -> usize {
        self.w * self.h
    }

    #[inline]
    fn idx(&self, x: usize, y: usize, c: usize) -> usize {
        (y * self.w + x) * self.channels + c
    }

    /// Sample at `(x, y)` in channel `c`.
    #[inline]
    pub fn get(&self, x: usize, y: usize, c: usize) -> u8 {
        self.data[self.idx(x, y, c)]
    }

    /// Overwrite the sample at `(x, y)` in channel `c`.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, c: usize, v: u8) {
        let i = self.idx(x, y, c);
        self.data[i] = v;
    }

    /// Interleaved row `y` (`w * channels` samples).
    #[inline]
    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.w * self.channels;
        &self.data[start..start + self.w * self.channels]
    }

    /// Backing storage in row-major, interleaved order.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Consume the buffer, returning the raw samples.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Largest sample across all pixels and channels.
    pub fn max_sample(&self) -> u8 {
        self.data.iter().copied().max().unwrap_or(0)
    }

    /// One channel as a dense `f32` plane (working copy for filtering).
    pub fn channel_plane(&self, c: usize) -> Vec<f32> {
        debug_assert!(c < self.channels);
        self.data[c..]
            .iter()
            .step_by(self.channels)
            .map(|&v| v as f32)
            .collect()
    }

    /// Luma-reduced `f32` plane. For grayscale input this is a plain copy;
    /// for RGB it applies the 0.299/0.587/0.114 weighting without rounding,
    /// so callers decide how to quantize.
    pub fn luma_plane(&self) -> Vec<f32> {
        if self.channels == 1 {
            return self.data.iter().map(|&v| v as f32).collect();
        }
        self.data
            .chunks_exact(3)
            .map(|px| {
                px[0] as f32 * LUMA_WEIGHTS[0]
                    + px[1] as f32 * LUMA_WEIGHTS[1]
                    + px[2] as f32 * LUMA_WEIGHTS[2]
            })
            .collect()
    }

    /// Shape re-validation every operation runs before touching pixels.
    pub fn validate(&self, op: &'static str) -> Result<(), EnhanceError> {
        if self.w == 0 || self.h == 0 || self.data.is_empty() {
            return Err(EnhanceError::EmptyBuffer { op });
        }
        if self.channels != 1 && self.channels != 3 {
            return Err(EnhanceError::UnsupportedShape {
                op,
                channels: self.channels,
            });
        }
        Ok(())
    }
}

/// Clamp a float response into the 8-bit sample range.
#[inline]
pub fn clamp_u8(v: f32) -> u8 {
    v.clamp(0.0, 255.0) as u8
}
