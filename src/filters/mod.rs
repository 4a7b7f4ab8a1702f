//! Filter modules for pixel-level image processing.
//!
//! ## Numeric Domains
//!
//! Operators are written against the domain their pipeline stage uses:
//!
//! | Operator | Domain | Notes |
//! |----------|--------|-------|
//! | noise | f32, 0.0-1.0 | caller-supplied RNG |
//! | convolve + kernel | f32, 0.0-1.0 | 5x5 kernels, weights sum to 1 |
//! | median | f32, 0.0-1.0 | odd window, default 5 |
//! | kuwahara | f32, 0.0-1.0 | 5x5 window, zero border |
//! | threshold | u8, 0-255 | binary 0/255 output |
//!
//! ## Architecture
//!
//! - **Single-channel core** - Each windowed operator is written once
//!   against a single plane; color buffers are per-channel applications
//!   through [`crate::buffer::PixelBuffer::map_channels`] (kuwahara is
//!   the exception: its quadrant choice is shared across channels).
//! - **Edge-replication padding** - Windowed operators pre-pad via
//!   [`pad`], so the hot loops run without bounds checks.
//! - **Pure functions** - Immutable borrow in, new owned buffer out,
//!   identical shape, no state between calls.

pub mod convolve;
pub mod grayscale;
pub mod kernel;
pub mod kuwahara;
pub mod median;
pub mod noise;
pub mod pad;
pub mod threshold;
