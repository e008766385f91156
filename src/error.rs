//! Engine error type.
//!
//! Every failure here is a validation error raised before any pixel work
//! begins; the engine performs no I/O and holds no shared state, so there
//! is no transient-failure surface. Each variant carries the operation
//! name so callers can build a user-facing message.

/// Errors reported by the pixel-processing operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EnhanceError {
    /// An argument fell outside its documented domain.
    InvalidParameter {
        /// Operation that rejected the argument.
        op: &'static str,
        /// Human-readable description of the offending value.
        detail: String,
    },
    /// A zero-dimension source buffer reached an operation.
    EmptyBuffer { op: &'static str },
    /// A buffer with a channel count other than 1 or 3 reached an
    /// operation that assumes one of those two shapes.
    UnsupportedShape { op: &'static str, channels: usize },
}

impl std::fmt::Display for EnhanceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnhanceError::InvalidParameter { op, detail } => {
                write!(f, "{op}: invalid parameter ({detail})")
            }
            EnhanceError::EmptyBuffer { op } => {
                write!(f, "{op}: empty source buffer")
            }
            EnhanceError::UnsupportedShape { op, channels } => {
                write!(f, "{op}: unsupported channel count {channels} (expected 1 or 3)")
            }
        }
    }
}

impl std::error::Error for EnhanceError {}
