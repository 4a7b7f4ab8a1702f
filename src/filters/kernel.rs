//! Kernel builders for the linear convolution filters.
//!
//! Both builders produce a 5x5 kernel whose weights sum to 1, so
//! convolving a constant-valued plane leaves it unchanged (brightness
//! preservation).

use ndarray::{array, Array2};

use crate::error::FilterError;

/// Side length of every kernel built here.
pub const KERNEL_SIZE: usize = 5;

/// The fixed 5x5 triangle (pyramid) kernel, normalized by its sum of 81.
pub fn triangle_kernel() -> Array2<f32> {
    let pyramid: Array2<f32> = array![
        [1.0, 2.0, 3.0, 2.0, 1.0],
        [2.0, 4.0, 6.0, 4.0, 2.0],
        [3.0, 6.0, 9.0, 6.0, 3.0],
        [2.0, 4.0, 6.0, 4.0, 2.0],
        [1.0, 2.0, 3.0, 2.0, 1.0],
    ];
    pyramid / 81.0
}

/// Build a 5x5 Gaussian kernel for the given standard deviation.
///
/// Each weight is sampled from the 2D Gaussian density at integer
/// offsets (dx, dy) in [-2, 2], then the whole grid is divided by its
/// own sum. The renormalization is mandatory: the raw density sampled
/// on a 5x5 grid does not sum to 1.
///
/// # Arguments
/// * `sigma` - Standard deviation, must be strictly positive
///
/// # Returns
/// Normalized kernel, or an error for sigma <= 0 (or NaN)
pub fn gaussian_kernel(sigma: f32) -> Result<Array2<f32>, FilterError> {
    if !(sigma > 0.0) {
        return Err(FilterError::InvalidSigma(sigma));
    }

    let half = (KERNEL_SIZE / 2) as isize;
    let norm = 1.0 / (2.0 * std::f32::consts::PI * sigma * sigma);
    let mut kernel = Array2::<f32>::zeros((KERNEL_SIZE, KERNEL_SIZE));

    for y in 0..KERNEL_SIZE {
        for x in 0..KERNEL_SIZE {
            let dy = (y as isize - half) as f32;
            let dx = (x as isize - half) as f32;
            kernel[[y, x]] = norm * (-(dx * dx + dy * dy) / (2.0 * sigma * sigma)).exp();
        }
    }

    let sum: f32 = kernel.iter().sum();
    kernel /= sum;

    Ok(kernel)
}
