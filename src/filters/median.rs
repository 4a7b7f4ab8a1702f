//! Median filter.
//!
//! An order-statistic filter: each output pixel is the median of its
//! n x n neighborhood. Windows are always odd-sized, so the sample
//! count is odd squared and the median is a single middle element with
//! no interpolation. Removes salt-and-pepper outliers while keeping
//! edges sharp.

use ndarray::{Array2, ArrayView2};
use rayon::prelude::*;

use crate::buffer::PixelBuffer;
use crate::error::FilterError;
use crate::filters::pad::pad_replicate_f32;

/// Default window side length.
pub const MEDIAN_WINDOW: usize = 5;

/// Apply a median filter with the given odd window size.
///
/// # Arguments
/// * `input` - Buffer with samples in 0.0-1.0
/// * `window` - Neighborhood side length, odd and >= 1
///
/// # Returns
/// Filtered buffer with the same shape, or an error for an even or
/// zero window
pub fn median_filter(
    input: &PixelBuffer<f32>,
    window: usize,
) -> Result<PixelBuffer<f32>, FilterError> {
    if window == 0 || window % 2 == 0 {
        return Err(FilterError::InvalidWindow(window));
    }
    input.try_map_channels(|plane| Ok(median_channel(plane, window)))
}

fn median_channel(input: ArrayView2<f32>, window: usize) -> Array2<f32> {
    let (height, width) = input.dim();
    let margin = (window - 1) / 2;
    let padded = pad_replicate_f32(input, margin);

    let rows: Vec<Vec<f32>> = (0..height)
        .into_par_iter()
        .map(|y| {
            let mut values = Vec::with_capacity(window * window);
            let mut row = Vec::with_capacity(width);
            for x in 0..width {
                values.clear();
                for dy in 0..window {
                    for dx in 0..window {
                        values.push(padded[[y + dy, x + dx]]);
                    }
                }
                values.sort_by(f32::total_cmp);
                row.push(values[values.len() / 2]);
            }
            row
        })
        .collect();

    let mut out = Array2::<f32>::zeros((height, width));
    for (y, row) in rows.into_iter().enumerate() {
        for (x, v) in row.into_iter().enumerate() {
            out[[y, x]] = v;
        }
    }

    out
}
