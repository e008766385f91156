//! Image session: one "original" buffer, one "enhanced" buffer, and a
//! selector choosing which of the two feeds the next operation.
//!
//! The original slot is set once per image load and cleared-and-replaced
//! on the next load; the enhanced slot is replaced by every successful
//! operation. A failed operation leaves the enhanced slot exactly as it
//! was before the call.

use crate::error::EnhanceError;
use crate::histogram::{self, IntensityHistogram};
use crate::ops::Operation;
use crate::progress::Progress;
use crate::raster::RasterBuffer;
use log::debug;

/// Which buffer the next operation reads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProcessSource {
    #[default]
    Original,
    Enhanced,
}

/// Holds the two buffer slots of one editing session.
#[derive(Debug, Default)]
pub struct EnhanceSession {
    original: Option<RasterBuffer>,
    enhanced: Option<RasterBuffer>,
    source: ProcessSource,
}

impl EnhanceSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a freshly loaded image as the original, discarding any
    /// previous original and enhanced buffers and resetting the selector.
    pub fn load_original(&mut self, buffer: RasterBuffer) {
        debug!(
            "session: loaded original {}x{}x{}",
            buffer.width(),
            buffer.height(),
            buffer.channels()
        );
        self.original = Some(buffer);
        self.enhanced = None;
        self.source = ProcessSource::Original;
    }

    pub fn set_source(&mut self, source: ProcessSource) {
        self.source = source;
    }

    pub fn source(&self) -> ProcessSource {
        self.source
    }

    pub fn original(&self) -> Option<&RasterBuffer> {
        self.original.as_ref()
    }

    pub fn enhanced(&self) -> Option<&RasterBuffer> {
        self.enhanced.as_ref()
    }

    /// The buffer the selector currently points at. A missing slot is
    /// caller misuse and surfaces as [`EnhanceError::EmptyBuffer`].
    pub fn source_buffer(&self) -> Result<&RasterBuffer, EnhanceError> {
        let slot = match self.source {
            ProcessSource::Original => self.original.as_ref(),
            ProcessSource::Enhanced => self.enhanced.as_ref(),
        };
        slot.ok_or(EnhanceError::EmptyBuffer { op: "session" })
    }

    /// Run `op` against the selected source. On success the result becomes
    /// the new enhanced buffer and a reference to it is returned; on
    /// failure the enhanced slot is left untouched.
    pub fn apply(
        &mut self,
        op: &Operation,
        progress: &mut dyn Progress,
    ) -> Result<&RasterBuffer, EnhanceError> {
        let result = op.apply(self.source_buffer()?, progress)?;
        debug!(
            "session: {} -> {}x{}x{}",
            op.name(),
            result.width(),
            result.height(),
            result.channels()
        );
        self.enhanced = Some(result);
        Ok(self.enhanced.as_ref().expect("just assigned"))
    }

    /// Intensity histogram of the selected source buffer.
    pub fn histogram(&self) -> Result<IntensityHistogram, EnhanceError> {
        histogram::histogram(self.source_buffer()?)
    }

    /// Hand the enhanced buffer to the caller (e.g. for saving), leaving
    /// the slot empty.
    pub fn take_enhanced(&mut self) -> Option<RasterBuffer> {
        self.enhanced.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::Silent;

    fn gradient(w: usize, h: usize) -> RasterBuffer {
        let data = (0..w * h).map(|i| (i * 7 % 256) as u8).collect();
        RasterBuffer::from_raw(w, h, 1, data).unwrap()
    }

    #[test]
    fn apply_without_load_is_empty_buffer() {
        let mut session = EnhanceSession::new();
        assert!(matches!(
            session.apply(&Operation::Negative, &mut Silent),
            Err(EnhanceError::EmptyBuffer { op: "session" })
        ));
    }

    #[test]
    fn enhanced_source_requires_a_prior_result() {
        let mut session = EnhanceSession::new();
        session.load_original(gradient(4, 4));
        session.set_source(ProcessSource::Enhanced);
        assert!(session.apply(&Operation::Negative, &mut Silent).is_err());

        session.set_source(ProcessSource::Original);
        session.apply(&Operation::Negative, &mut Silent).unwrap();
        session.set_source(ProcessSource::Enhanced);
        // Negating twice through the enhanced slot restores the original.
        session.apply(&Operation::Negative, &mut Silent).unwrap();
        assert_eq!(session.enhanced().unwrap(), session.original().unwrap());
    }

    #[test]
    fn failed_apply_leaves_enhanced_untouched() {
        let mut session = EnhanceSession::new();
        session.load_original(gradient(4, 4));
        session.apply(&Operation::Grayscale, &mut Silent).unwrap();
        let before = session.enhanced().unwrap().clone();

        let err = session
            .apply(&Operation::Threshold { threshold: 300 }, &mut Silent)
            .unwrap_err();
        assert!(matches!(err, EnhanceError::InvalidParameter { .. }));
        assert_eq!(session.enhanced().unwrap(), &before);
    }

    #[test]
    fn load_clears_previous_state() {
        let mut session = EnhanceSession::new();
        session.load_original(gradient(4, 4));
        session.apply(&Operation::Negative, &mut Silent).unwrap();
        session.set_source(ProcessSource::Enhanced);

        session.load_original(gradient(2, 2));
        assert!(session.enhanced().is_none());
        assert_eq!(session.source(), ProcessSource::Original);
    }

    #[test]
    fn histogram_reads_the_selected_source() {
        let mut session = EnhanceSession::new();
        session.load_original(RasterBuffer::from_raw(2, 2, 1, vec![9, 9, 9, 9]).unwrap());
        let hist = session.histogram().unwrap();
        assert_eq!(hist.counts()[9], 4);
    }
}
