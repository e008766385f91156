//! Named operations with their fixed parameter schemas.
//!
//! [`Operation`] is both the typed API a presentation layer drives and the
//! on-disk schema of the demo binary's pipeline config (serde-tagged by
//! `op`). Callers parse user-facing text into these fields; the engine
//! re-validates every range invariant on dispatch and fails loudly with
//! the operation name attached.

use crate::error::EnhanceError;
use crate::progress::Progress;
use crate::raster::RasterBuffer;
use crate::{convolve, geometry, point};
use serde::{Deserialize, Serialize};

/// One enhancement operation and its parameters.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    Grayscale,
    Negative,
    Threshold { threshold: i32 },
    Contrast { alpha: f32 },
    LogScaled,
    LogUnit,
    Smooth { kernel_size: usize },
    Sharpen { intensity: f32 },
    LaplacianEdge,
    Resize { width: u32, height: u32 },
    Rotate { angle_deg: f32 },
}

impl Operation {
    /// Stable operation name, matching the config tag.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Grayscale => "grayscale",
            Operation::Negative => "negative",
            Operation::Threshold { .. } => "threshold",
            Operation::Contrast { .. } => "contrast",
            Operation::LogScaled => "log_scaled",
            Operation::LogUnit => "log_unit",
            Operation::Smooth { .. } => "smooth",
            Operation::Sharpen { .. } => "sharpen",
            Operation::LaplacianEdge => "laplacian_edge",
            Operation::Resize { .. } => "resize",
            Operation::Rotate { .. } => "rotate",
        }
    }

    /// True for operations that emit progress reports (convolution and
    /// geometric filters); point transforms and the histogram complete
    /// fast enough not to.
    pub fn reports_progress(&self) -> bool {
        matches!(
            self,
            Operation::Smooth { .. }
                | Operation::Sharpen { .. }
                | Operation::LaplacianEdge
                | Operation::Resize { .. }
                | Operation::Rotate { .. }
        )
    }

    /// Run the operation against `src`, allocating a fresh result buffer.
    pub fn apply(
        &self,
        src: &RasterBuffer,
        progress: &mut dyn Progress,
    ) -> Result<RasterBuffer, EnhanceError> {
        match *self {
            Operation::Grayscale => point::grayscale(src),
            Operation::Negative => point::negative(src),
            Operation::Threshold { threshold } => point::threshold(src, threshold),
            Operation::Contrast { alpha } => point::contrast(src, alpha),
            Operation::LogScaled => point::log_scaled(src),
            Operation::LogUnit => point::log_unit(src),
            Operation::Smooth { kernel_size } => convolve::smooth(src, kernel_size, progress),
            Operation::Sharpen { intensity } => convolve::sharpen(src, intensity, progress),
            Operation::LaplacianEdge => convolve::laplacian_edge(src, progress),
            Operation::Resize { width, height } => geometry::resize(src, width, height, progress),
            Operation::Rotate { angle_deg } => geometry::rotate(src, angle_deg, progress),
        }
    }
}
