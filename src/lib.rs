#![doc = include_str!("../README.md")]

pub mod config;
pub mod convolve;
pub mod error;
pub mod geometry;
pub mod histogram;
pub mod ops;
pub mod point;
pub mod progress;
pub mod raster;
pub mod session;

// --- High-level re-exports -------------------------------------------------

pub use crate::error::EnhanceError;
pub use crate::histogram::IntensityHistogram;
pub use crate::ops::Operation;
pub use crate::progress::{Progress, Silent};
pub use crate::raster::RasterBuffer;
pub use crate::session::{EnhanceSession, ProcessSource};

/// Small prelude for quick experiments.
pub mod prelude {
    pub use crate::error::EnhanceError;
    pub use crate::histogram::IntensityHistogram;
    pub use crate::ops::Operation;
    pub use crate::progress::{Progress, Silent};
    pub use crate::raster::RasterBuffer;
    pub use crate::session::{EnhanceSession, ProcessSource};
}
