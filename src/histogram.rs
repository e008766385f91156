//! 256-bin intensity histogram over the luma-reduced source.
//!
//! The engine's contract ends at the count table; turning counts into a
//! bar-chart raster is an external presentation concern.

use crate::error::EnhanceError;
use crate::point::grayscale;
use crate::raster::RasterBuffer;
use serde::ser::{Serialize, SerializeSeq, Serializer};

/// Frequency table indexed by intensity value 0–255.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntensityHistogram {
    bins: [u32; 256],
}

impl IntensityHistogram {
    /// Per-intensity pixel counts.
    pub fn counts(&self) -> &[u32; 256] {
        &self.bins
    }

    /// Total number of counted pixels.
    pub fn total(&self) -> u64 {
        self.bins.iter().map(|&c| c as u64).sum()
    }

    /// Largest single-bin count (the bar-chart y-axis extent).
    pub fn max_count(&self) -> u32 {
        self.bins.iter().copied().max().unwrap_or(0)
    }
}

// Serialized as a plain 256-entry sequence for JSON dumps.
impl Serialize for IntensityHistogram {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.bins.len()))?;
        for count in &self.bins {
            seq.serialize_element(count)?;
        }
        seq.end()
    }
}

/// Count occurrences of each intensity across the full buffer, reducing
/// RGB to grayscale first. Single pass, no progress reporting.
pub fn histogram(src: &RasterBuffer) -> Result<IntensityHistogram, EnhanceError> {
    src.validate("histogram")?;
    let gray = grayscale(src)?;
    let mut bins = [0u32; 256];
    for &v in gray.as_slice() {
        bins[v as usize] += 1;
    }
    Ok(IntensityHistogram { bins })
}
