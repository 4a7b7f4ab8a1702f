//! pixelkit
//!
//! A deterministic pixel-level image-processing kernel: noise
//! injection, linear convolution filters, order-statistic filters and
//! thresholding, applied per pixel or per local neighborhood over
//! grayscale or RGB buffers.
//!
//! ## Image Format
//!
//! Buffers are tagged grayscale (H, W) or RGB (H, W, 3) and come in two
//! numeric domains:
//! - `f32`: samples 0.0-1.0, used by all filters
//! - `u8`: samples 0-255, used by thresholding
//!
//! ## Architecture
//!
//! Every operator borrows its input immutably and returns a new owned
//! buffer of identical shape. Invalid parameters and malformed buffers
//! surface as [`FilterError`]; nothing is logged or silently clamped.
//! The noise injector is the only non-deterministic operator and takes
//! a caller-supplied RNG, so seeded runs are reproducible.

pub mod buffer;
pub mod error;
pub mod filters;

pub use buffer::PixelBuffer;
pub use error::FilterError;
pub use filters::convolve::{apply_kernel, convolve_channel};
pub use filters::grayscale::luminance;
pub use filters::kernel::{gaussian_kernel, triangle_kernel, KERNEL_SIZE};
pub use filters::kuwahara::kuwahara_filter;
pub use filters::median::{median_filter, MEDIAN_WINDOW};
pub use filters::noise::{salt_pepper, SALT_PEPPER_PROB};
pub use filters::pad::{crop_margin_f32, crop_margin_u8, pad_replicate_f32, pad_replicate_u8};
pub use filters::threshold::{
    adaptive_threshold, manual_threshold, mean_threshold, otsu_threshold, ThresholdOutcome,
    BINARY_MAX,
};
