//! Salt-and-pepper noise injection.
//!
//! The only non-deterministic operator in the crate. Entropy comes
//! from a caller-supplied [`rand::Rng`], so reproducible runs seed a
//! `StdRng` instead of reaching for ambient randomness.

use ndarray::{Array2, Array3};
use rand::Rng;

use crate::buffer::PixelBuffer;
use crate::error::FilterError;

/// Default corruption probability.
pub const SALT_PEPPER_PROB: f32 = 0.05;

/// Corrupt pixels with salt-and-pepper noise.
///
/// For every pixel one uniform value `r` in [0, 1) is drawn:
/// `r < prob/2` forces the pixel to black (0.0), `r < prob` forces it
/// to white (1.0), otherwise it is copied unchanged. Color pixels are
/// corrupted as a whole: a single draw decides all three channels.
///
/// # Arguments
/// * `input` - Buffer with samples in 0.0-1.0
/// * `prob` - Corruption probability, must lie within [0, 1]
/// * `rng` - Entropy source; seed it for reproducible output
///
/// # Returns
/// Noisy buffer with the same shape, or an error for `prob` outside [0, 1]
pub fn salt_pepper<R: Rng>(
    input: &PixelBuffer<f32>,
    prob: f32,
    rng: &mut R,
) -> Result<PixelBuffer<f32>, FilterError> {
    if !(0.0..=1.0).contains(&prob) {
        return Err(FilterError::InvalidProbability(prob));
    }

    let (height, width) = (input.height(), input.width());

    match input {
        PixelBuffer::Gray(gray) => {
            let mut out = Array2::<f32>::zeros((height, width));
            for y in 0..height {
                for x in 0..width {
                    let r: f32 = rng.gen();
                    out[[y, x]] = if r < prob / 2.0 {
                        0.0
                    } else if r < prob {
                        1.0
                    } else {
                        gray[[y, x]]
                    };
                }
            }
            Ok(PixelBuffer::Gray(out))
        }
        PixelBuffer::Rgb(rgb) => {
            let mut out = Array3::<f32>::zeros((height, width, 3));
            for y in 0..height {
                for x in 0..width {
                    let r: f32 = rng.gen();
                    for c in 0..3 {
                        out[[y, x, c]] = if r < prob / 2.0 {
                            0.0
                        } else if r < prob {
                            1.0
                        } else {
                            rgb[[y, x, c]]
                        };
                    }
                }
            }
            Ok(PixelBuffer::Rgb(out))
        }
    }
}
