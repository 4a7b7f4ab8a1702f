//! Kuwahara edge-preserving smoothing.
//!
//! For each interior pixel, four overlapping 3x3 quadrants of the
//! centered 5x5 window are examined; the pixel becomes the mean of the
//! quadrant with the lowest variance. Flat quadrants win over quadrants
//! straddling an edge, so edges stay sharp while flat regions smooth.
//!
//! For color buffers the quadrant is chosen once per pixel by the
//! variance summed across channels, then each channel takes that
//! quadrant's per-channel mean. The grayscale path runs the same
//! routine with a single plane.
//!
//! The outer 2-pixel border is not padded; it stays at zero, like the
//! border handling of the other fixed-window operators that skip
//! padding.

use ndarray::{Array2, Array3, ArrayView2, Axis};

use crate::buffer::PixelBuffer;

/// Quadrant side length inside the 5x5 window.
const REGION: usize = 3;
/// Interior margin left untouched at the border.
const MARGIN: usize = 2;

/// Apply the 5x5 Kuwahara filter.
///
/// # Arguments
/// * `input` - Buffer with samples in 0.0-1.0
///
/// # Returns
/// Filtered buffer of the same shape; the 2-pixel border is zero
pub fn kuwahara_filter(input: &PixelBuffer<f32>) -> PixelBuffer<f32> {
    match input {
        PixelBuffer::Gray(gray) => {
            let mut outs = kuwahara_planes(&[gray.view()]);
            PixelBuffer::Gray(outs.swap_remove(0))
        }
        PixelBuffer::Rgb(rgb) => {
            let planes: Vec<ArrayView2<f32>> = rgb.axis_iter(Axis(2)).collect();
            let outs = kuwahara_planes(&planes);
            let (height, width, _) = rgb.dim();
            let mut out = Array3::<f32>::zeros((height, width, 3));
            for (c, plane) in outs.into_iter().enumerate() {
                out.index_axis_mut(Axis(2), c).assign(&plane);
            }
            PixelBuffer::Rgb(out)
        }
    }
}

/// Run quadrant selection over 1 or 3 planes sharing one geometry.
fn kuwahara_planes(planes: &[ArrayView2<f32>]) -> Vec<Array2<f32>> {
    let (height, width) = planes[0].dim();
    let mut outs: Vec<Array2<f32>> = planes
        .iter()
        .map(|_| Array2::<f32>::zeros((height, width)))
        .collect();

    // Buffers too small for a full window are all border.
    if height < 2 * MARGIN + 1 || width < 2 * MARGIN + 1 {
        return outs;
    }

    let samples = (REGION * REGION) as f32;
    let mut best_means = vec![0.0f32; planes.len()];
    let mut means = vec![0.0f32; planes.len()];

    for y in MARGIN..height - MARGIN {
        for x in MARGIN..width - MARGIN {
            let mut best_var = f32::INFINITY;

            for qy in 0..2 {
                for qx in 0..2 {
                    // Quadrant anchored so the pixel itself is one corner.
                    let y0 = y - MARGIN + qy * MARGIN;
                    let x0 = x - MARGIN + qx * MARGIN;

                    let mut total_var = 0.0f32;
                    for (c, plane) in planes.iter().enumerate() {
                        let mut sum = 0.0f32;
                        let mut sum_sq = 0.0f32;
                        for dy in 0..REGION {
                            for dx in 0..REGION {
                                let v = plane[[y0 + dy, x0 + dx]];
                                sum += v;
                                sum_sq += v * v;
                            }
                        }
                        let mean = sum / samples;
                        total_var += sum_sq / samples - mean * mean;
                        means[c] = mean;
                    }

                    // Strict comparison: ties keep the first quadrant.
                    if total_var < best_var {
                        best_var = total_var;
                        best_means.copy_from_slice(&means);
                    }
                }
            }

            for (out, &mean) in outs.iter_mut().zip(best_means.iter()) {
                out[[y, x]] = mean;
            }
        }
    }

    outs
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array2, Array3};

    #[test]
    fn test_flat_region_reproduced_interior_border_zero() {
        let img = PixelBuffer::from_gray(Array2::from_elem((8, 8), 0.5f32)).unwrap();
        let out = kuwahara_filter(&img);
        if let PixelBuffer::Gray(gray) = out {
            for y in 0..8 {
                for x in 0..8 {
                    let interior = (2..6).contains(&y) && (2..6).contains(&x);
                    let expected = if interior { 0.5 } else { 0.0 };
                    assert_eq!(gray[[y, x]], expected, "at ({y}, {x})");
                }
            }
        } else {
            panic!("expected grayscale output");
        }
    }

    #[test]
    fn test_step_edge_preserved() {
        // Left half 0.25, right half 0.75.
        let mut data = Array2::<f32>::zeros((10, 10));
        for y in 0..10 {
            for x in 0..10 {
                data[[y, x]] = if x < 5 { 0.25 } else { 0.75 };
            }
        }
        let img = PixelBuffer::from_gray(data).unwrap();
        let out = kuwahara_filter(&img);
        if let PixelBuffer::Gray(gray) = out {
            // Pixels adjacent to the edge take their flat quadrant's
            // value, not a blend.
            assert_eq!(gray[[5, 4]], 0.25);
            assert_eq!(gray[[5, 5]], 0.75);
        } else {
            panic!("expected grayscale output");
        }
    }

    #[test]
    fn test_color_quadrant_shared_across_channels() {
        // Channel 0 is flat; channel 1 carries the edge. The quadrant
        // choice is driven by the combined variance, so channel 1 must
        // keep the edge while channel 0 stays flat.
        let mut data = Array3::<f32>::zeros((10, 10, 3));
        for y in 0..10 {
            for x in 0..10 {
                data[[y, x, 0]] = 0.5;
                data[[y, x, 1]] = if x < 5 { 0.0 } else { 1.0 };
                data[[y, x, 2]] = 0.5;
            }
        }
        let img = PixelBuffer::from_rgb(data).unwrap();
        let out = kuwahara_filter(&img);
        if let PixelBuffer::Rgb(rgb) = out {
            assert_eq!(rgb[[5, 4, 1]], 0.0);
            assert_eq!(rgb[[5, 5, 1]], 1.0);
            assert_eq!(rgb[[5, 4, 0]], 0.5);
            assert_eq!(rgb[[5, 5, 0]], 0.5);
        } else {
            panic!("expected color output");
        }
    }

    #[test]
    fn test_undersized_buffer_is_all_zero() {
        let img = PixelBuffer::from_gray(Array2::from_elem((4, 4), 0.9f32)).unwrap();
        let out = kuwahara_filter(&img);
        if let PixelBuffer::Gray(gray) = out {
            assert!(gray.iter().all(|&v| v == 0.0));
        } else {
            panic!("expected grayscale output");
        }
    }
}
