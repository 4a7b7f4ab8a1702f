//! Generic linear convolution engine.
//!
//! The engine itself is channel-agnostic: it maps one padded plane
//! against one kernel. Multi-channel buffers are handled at the call
//! site by applying the engine independently per channel, which keeps
//! the inner loop written exactly once.
//!
//! The kernels used here are symmetric, so correlation and convolution
//! coincide and the straightforward correlation sum is computed.

use ndarray::{Array2, ArrayView2};
use rayon::prelude::*;

use crate::buffer::PixelBuffer;
use crate::error::FilterError;
use crate::filters::pad::pad_replicate_f32;

/// Convolve a single plane with a square odd-sized kernel.
///
/// The plane is edge-padded by half the kernel size, so every output
/// pixel reads a full neighborhood. Output rows are computed in
/// parallel; each depends only on the padded input.
///
/// # Arguments
/// * `input` - Single-channel plane of shape (height, width)
/// * `kernel` - Square kernel of odd size
///
/// # Returns
/// Plane of the same shape, or an error for a malformed kernel
pub fn convolve_channel(
    input: ArrayView2<f32>,
    kernel: ArrayView2<f32>,
) -> Result<Array2<f32>, FilterError> {
    let (krows, kcols) = kernel.dim();
    if krows != kcols || krows % 2 == 0 || krows == 0 {
        return Err(FilterError::InvalidKernel {
            rows: krows,
            cols: kcols,
        });
    }

    let (height, width) = input.dim();
    let margin = (krows - 1) / 2;
    let padded = pad_replicate_f32(input, margin);

    let rows: Vec<Vec<f32>> = (0..height)
        .into_par_iter()
        .map(|y| {
            let mut row = Vec::with_capacity(width);
            for x in 0..width {
                let mut sum = 0.0f32;
                for ky in 0..krows {
                    for kx in 0..kcols {
                        sum += padded[[y + ky, x + kx]] * kernel[[ky, kx]];
                    }
                }
                row.push(sum);
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

    Ok(out)
}

/// Apply a kernel to a whole buffer, per channel.
pub fn apply_kernel(
    input: &PixelBuffer<f32>,
    kernel: ArrayView2<f32>,
) -> Result<PixelBuffer<f32>, FilterError> {
    input.try_map_channels(|plane| convolve_channel(plane, kernel))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::kernel::{gaussian_kernel, triangle_kernel};
    use ndarray::{array, Array2, Array3};

    #[test]
    fn test_constant_plane_unchanged_by_normalized_kernels() {
        let plane = Array2::from_elem((6, 9), 0.42f32);
        for kernel in [triangle_kernel(), gaussian_kernel(1.0).unwrap()] {
            let out = convolve_channel(plane.view(), kernel.view()).unwrap();
            for &v in out.iter() {
                assert!((v - 0.42).abs() < 1e-5, "constant not preserved: {v}");
            }
        }
    }

    #[test]
    fn test_identity_kernel_reproduces_input() {
        let plane = array![[0.1f32, 0.9, 0.3], [0.7, 0.2, 0.8], [0.4, 0.6, 0.5]];
        let identity = array![[1.0f32]];
        let out = convolve_channel(plane.view(), identity.view()).unwrap();
        assert_eq!(out, plane);
    }

    #[test]
    fn test_even_kernel_rejected() {
        let plane = Array2::<f32>::zeros((3, 3));
        let kernel = Array2::<f32>::zeros((4, 4));
        assert_eq!(
            convolve_channel(plane.view(), kernel.view()),
            Err(FilterError::InvalidKernel { rows: 4, cols: 4 })
        );
    }

    #[test]
    fn test_non_square_kernel_rejected() {
        let plane = Array2::<f32>::zeros((3, 3));
        let kernel = Array2::<f32>::zeros((3, 5));
        assert!(convolve_channel(plane.view(), kernel.view()).is_err());
    }

    #[test]
    fn test_apply_kernel_per_channel() {
        // Each channel holds a different constant; all must survive.
        let mut data = Array3::<f32>::zeros((5, 5, 3));
        for (c, v) in [0.2f32, 0.5, 0.8].iter().enumerate() {
            for y in 0..5 {
                for x in 0..5 {
                    data[[y, x, c]] = *v;
                }
            }
        }
        let buf = PixelBuffer::from_rgb(data).unwrap();
        let out = apply_kernel(&buf, triangle_kernel().view()).unwrap();
        if let PixelBuffer::Rgb(rgb) = out {
            for (c, v) in [0.2f32, 0.5, 0.8].iter().enumerate() {
                for y in 0..5 {
                    for x in 0..5 {
                        assert!((rgb[[y, x, c]] - v).abs() < 1e-5);
                    }
                }
            }
        } else {
            panic!("expected color output");
        }
    }
}
