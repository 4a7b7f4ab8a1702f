//! Edge-replication padding for windowed operators.
//!
//! Every windowed filter in this crate reads a full k x k neighborhood
//! for each output pixel. Rather than bounds-checking inside the hot
//! loop, the input is extended by the window margin beforehand, with
//! border rows/columns replicated from the nearest edge sample.
//!
//! Both sample domains get a variant: f32 (0.0-1.0, filters) and u8
//! (0-255, adaptive thresholding).

use ndarray::{s, Array2, ArrayView2};

/// Pad an f32 plane by `margin` on every side with edge replication.
///
/// # Arguments
/// * `input` - Single-channel plane of shape (height, width)
/// * `margin` - Number of replicated rows/columns per side
///
/// # Returns
/// Plane of shape (height + 2*margin, width + 2*margin)
pub fn pad_replicate_f32(input: ArrayView2<f32>, margin: usize) -> Array2<f32> {
    let (height, width) = input.dim();
    let mut out = Array2::<f32>::zeros((height + 2 * margin, width + 2 * margin));

    for y in 0..height + 2 * margin {
        let sy = (y as isize - margin as isize).clamp(0, height as isize - 1) as usize;
        for x in 0..width + 2 * margin {
            let sx = (x as isize - margin as isize).clamp(0, width as isize - 1) as usize;
            out[[y, x]] = input[[sy, sx]];
        }
    }

    out
}

/// Pad a u8 plane by `margin` on every side with edge replication.
pub fn pad_replicate_u8(input: ArrayView2<u8>, margin: usize) -> Array2<u8> {
    let (height, width) = input.dim();
    let mut out = Array2::<u8>::zeros((height + 2 * margin, width + 2 * margin));

    for y in 0..height + 2 * margin {
        let sy = (y as isize - margin as isize).clamp(0, height as isize - 1) as usize;
        for x in 0..width + 2 * margin {
            let sx = (x as isize - margin as isize).clamp(0, width as isize - 1) as usize;
            out[[y, x]] = input[[sy, sx]];
        }
    }

    out
}

/// Remove a `margin`-wide border, undoing [`pad_replicate_f32`].
pub fn crop_margin_f32(input: ArrayView2<f32>, margin: usize) -> Array2<f32> {
    let (height, width) = input.dim();
    input
        .slice(s![margin..height - margin, margin..width - margin])
        .to_owned()
}

/// Remove a `margin`-wide border, undoing [`pad_replicate_u8`].
pub fn crop_margin_u8(input: ArrayView2<u8>, margin: usize) -> Array2<u8> {
    let (height, width) = input.dim();
    input
        .slice(s![margin..height - margin, margin..width - margin])
        .to_owned()
}
