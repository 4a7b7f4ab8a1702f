//! Error types for all filter and thresholding operations.
//!
//! Every operator is a pure computation with no transient failure
//! modes, so there is exactly one error category: the caller handed
//! us an invalid parameter or a malformed buffer. Errors are returned
//! synchronously, with no partial computation attempted.

use thiserror::Error;

/// Failure result shared by every operation in the crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterError {
    /// Gaussian sigma must be strictly positive.
    #[error("sigma must be positive, got {0}")]
    InvalidSigma(f32),

    /// Window sizes must be odd and at least 1.
    #[error("window size must be odd and positive, got {0}")]
    InvalidWindow(usize),

    /// Noise probability must lie within [0, 1].
    #[error("probability must be within [0, 1], got {0}")]
    InvalidProbability(f32),

    /// Adaptive threshold offset must lie within 0-100.
    #[error("adaptive offset must be within 0-100, got {0}")]
    OffsetOutOfRange(u8),

    /// Convolution kernels must be square with odd, non-zero size.
    #[error("kernel must be square with odd size, got {rows}x{cols}")]
    InvalidKernel { rows: usize, cols: usize },

    /// Buffers carry either 1 (grayscale) or 3 (RGB) channels.
    #[error("image must have 1 or 3 channels, got {0}")]
    ChannelMismatch(usize),

    /// Zero-area buffers are rejected up front.
    #[error("image dimensions must be non-zero, got {height}x{width}")]
    EmptyImage { height: usize, width: usize },
}
