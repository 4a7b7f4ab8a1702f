//! Binarization strategies: manual, mean, Otsu, adaptive.
//!
//! All strategies operate per channel on 0-255 samples and produce a
//! binary (0/255) buffer of the same shape. The first three also yield
//! one threshold scalar per channel for the display layer to overlay
//! on a histogram; the adaptive strategy has no single scalar (its
//! threshold varies per pixel) and reports `None`.
//!
//! The binarization rule is `sample >= threshold -> 255` throughout.

use ndarray::{Array2, ArrayView2};

use crate::buffer::PixelBuffer;
use crate::error::FilterError;
use crate::filters::pad::pad_replicate_u8;

/// Foreground value of binarized output.
pub const BINARY_MAX: u8 = 255;

/// Neighborhood side length for the adaptive strategy.
const ADAPTIVE_WINDOW: usize = 7;

/// Binary image plus the per-channel thresholds that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdOutcome {
    /// Binary (0/255) buffer, same shape as the input.
    pub image: PixelBuffer<u8>,
    /// One threshold per channel; `None` for the adaptive strategy.
    pub thresholds: Option<Vec<u8>>,
}

// ============================================================================
// Manual
// ============================================================================

/// Binarize every channel against one caller-supplied threshold.
///
/// The 0-255 validity range is carried by the `u8` parameter type.
pub fn manual_threshold(input: &PixelBuffer<u8>, threshold: u8) -> ThresholdOutcome {
    let image = input.map_channels(|plane| binarize_plane(plane, threshold));
    ThresholdOutcome {
        image,
        thresholds: Some(vec![threshold; input.channels()]),
    }
}

// ============================================================================
// Automatic (mean)
// ============================================================================

/// Binarize each channel against its own arithmetic mean (truncated).
pub fn mean_threshold(input: &PixelBuffer<u8>) -> ThresholdOutcome {
    let mut thresholds = Vec::with_capacity(input.channels());
    let image = input.map_channels(|plane| {
        let t = plane_mean(plane);
        thresholds.push(t);
        binarize_plane(plane, t)
    });
    ThresholdOutcome {
        image,
        thresholds: Some(thresholds),
    }
}

// ============================================================================
// Otsu
// ============================================================================

/// Binarize each channel with Otsu's method.
///
/// All 256 candidate thresholds are scanned over the channel's
/// histogram; the one maximizing the between-class variance
/// `w_bg * w_fg * (mean_bg - mean_fg)^2` wins, with ties broken by the
/// lowest candidate. Background is the bins below the candidate,
/// foreground the bins at or above it, matching the `>=` binarization
/// rule.
pub fn otsu_threshold(input: &PixelBuffer<u8>) -> ThresholdOutcome {
    let mut thresholds = Vec::with_capacity(input.channels());
    let image = input.map_channels(|plane| {
        let t = otsu_plane(plane);
        thresholds.push(t);
        binarize_plane(plane, t)
    });
    ThresholdOutcome {
        image,
        thresholds: Some(thresholds),
    }
}

fn otsu_plane(plane: ArrayView2<u8>) -> u8 {
    let hist = histogram(plane);
    let total = plane.len() as f64;
    let total_sum: f64 = hist
        .iter()
        .enumerate()
        .map(|(value, &count)| value as f64 * count as f64)
        .sum();

    let mut best_t = 0u8;
    let mut best_score = -1.0f64;
    let mut bg_count = 0.0f64;
    let mut bg_sum = 0.0f64;

    for t in 0..=255u16 {
        // Classes for candidate t: background < t, foreground >= t.
        let fg_count = total - bg_count;
        if bg_count > 0.0 && fg_count > 0.0 {
            let mean_bg = bg_sum / bg_count;
            let mean_fg = (total_sum - bg_sum) / fg_count;
            let w_bg = bg_count / total;
            let w_fg = fg_count / total;
            let diff = mean_bg - mean_fg;
            let score = w_bg * w_fg * diff * diff;
            if score > best_score {
                best_score = score;
                best_t = t as u8;
            }
        }
        bg_count += hist[t as usize] as f64;
        bg_sum += t as f64 * hist[t as usize] as f64;
    }

    best_t
}

// ============================================================================
// Adaptive (local mean)
// ============================================================================

/// Binarize each channel against a per-pixel local threshold.
///
/// The threshold at (y, x) is the mean of the edge-replicated 7x7
/// neighborhood minus `offset`. No global scalar exists for this mode,
/// so the outcome carries `thresholds: None`.
///
/// # Arguments
/// * `input` - Buffer with samples in 0-255
/// * `offset` - Constant subtracted from each local mean, 0-100
pub fn adaptive_threshold(
    input: &PixelBuffer<u8>,
    offset: u8,
) -> Result<ThresholdOutcome, FilterError> {
    if offset > 100 {
        return Err(FilterError::OffsetOutOfRange(offset));
    }
    let image = input.map_channels(|plane| adaptive_plane(plane, offset));
    Ok(ThresholdOutcome {
        image,
        thresholds: None,
    })
}

fn adaptive_plane(plane: ArrayView2<u8>, offset: u8) -> Array2<u8> {
    let (height, width) = plane.dim();
    let margin = ADAPTIVE_WINDOW / 2;
    let padded = pad_replicate_u8(plane, margin);
    let samples = (ADAPTIVE_WINDOW * ADAPTIVE_WINDOW) as f32;
    let mut out = Array2::<u8>::zeros((height, width));

    for y in 0..height {
        for x in 0..width {
            let mut sum = 0u32;
            for dy in 0..ADAPTIVE_WINDOW {
                for dx in 0..ADAPTIVE_WINDOW {
                    sum += padded[[y + dy, x + dx]] as u32;
                }
            }
            let local_t = sum as f32 / samples - offset as f32;
            if plane[[y, x]] as f32 >= local_t {
                out[[y, x]] = BINARY_MAX;
            }
        }
    }

    out
}

// ============================================================================
// Shared helpers
// ============================================================================

fn binarize_plane(plane: ArrayView2<u8>, threshold: u8) -> Array2<u8> {
    plane.mapv(|v| if v >= threshold { BINARY_MAX } else { 0 })
}

fn plane_mean(plane: ArrayView2<u8>) -> u8 {
    let sum: u64 = plane.iter().map(|&v| v as u64).sum();
    (sum / plane.len() as u64) as u8
}

fn histogram(plane: ArrayView2<u8>) -> [u64; 256] {
    let mut hist = [0u64; 256];
    for &v in plane.iter() {
        hist[v as usize] += 1;
    }
    hist
}
