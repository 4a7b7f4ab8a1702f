//! Grayscale reduction.
//!
//! The single color-space transform in the crate: collapse RGB to one
//! luminance channel so the single-channel filter path can be fed from
//! a color decode.

use ndarray::Array2;

use crate::buffer::PixelBuffer;

/// Luminance weights applied to R, G, B.
const LUMA_R: f32 = 0.2989;
const LUMA_G: f32 = 0.5870;
const LUMA_B: f32 = 0.1140;

/// Reduce a buffer to grayscale by weighted luminance.
///
/// Grayscale input passes through unchanged.
pub fn luminance(input: &PixelBuffer<f32>) -> PixelBuffer<f32> {
    match input {
        PixelBuffer::Gray(gray) => PixelBuffer::Gray(gray.clone()),
        PixelBuffer::Rgb(rgb) => {
            let (height, width, _) = rgb.dim();
            let mut out = Array2::<f32>::zeros((height, width));
            for y in 0..height {
                for x in 0..width {
                    out[[y, x]] = LUMA_R * rgb[[y, x, 0]]
                        + LUMA_G * rgb[[y, x, 1]]
                        + LUMA_B * rgb[[y, x, 2]];
                }
            }
            PixelBuffer::Gray(out)
        }
    }
}
