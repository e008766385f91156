//! Progress reporting for long-running operations.
//!
//! Contract
//! - Values are percentages in `[0, 100]`.
//! - Within one operation call the reported values never decrease.
//! - On success the final report before returning is exactly `100`.
//! - Reports are synchronous in-band calls on the operation's own stack;
//!   sinks must return promptly or they stall the operation.
//!
//! There is no cancellation channel: once started, an operation runs to
//! completion. Callers wanting cancellation discard the result.

/// Sink for fractional progress of a convolution or geometric operation.
pub trait Progress {
    fn report(&mut self, percent: f32);
}

/// Any `FnMut(f32)` closure is a valid sink.
impl<F: FnMut(f32)> Progress for F {
    fn report(&mut self, percent: f32) {
        self(percent)
    }
}

/// Sink for callers that do not observe progress.
pub struct Silent;

impl Progress for Silent {
    fn report(&mut self, _percent: f32) {}
}

/// Records every reported value; used by tests asserting the contract.
#[derive(Default)]
pub struct Recorder {
    pub reports: Vec<f32>,
}

impl Progress for Recorder {
    fn report(&mut self, percent: f32) {
        self.reports.push(percent);
    }
}

impl Recorder {
    /// True when the recorded sequence is non-decreasing and terminates
    /// at exactly 100.
    pub fn satisfies_contract(&self) -> bool {
        self.reports.windows(2).all(|w| w[0] <= w[1]) && self.reports.last() == Some(&100.0)
    }
}
