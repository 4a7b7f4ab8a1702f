//! Pixel buffer data model.
//!
//! A buffer is a 2D grid of samples with either 1 channel (grayscale)
//! or 3 channels (RGB), tagged explicitly so every operator dispatches
//! on the shape exactly once at its boundary. Two numeric domains are
//! supported:
//!
//! | Variant | Shape | Type | Domain | Used by |
//! |---------|-------|------|--------|---------|
//! | Gray | (H, W) | f32 | 0.0-1.0 | filters |
//! | Rgb | (H, W, 3) | f32 | 0.0-1.0 | filters |
//! | Gray | (H, W) | u8 | 0-255 | thresholding |
//! | Rgb | (H, W, 3) | u8 | 0-255 | thresholding |
//!
//! Construction validates dimensions (no zero-area buffers) and channel
//! count (1 or 3). Every transform borrows its input immutably and
//! returns a new owned buffer of identical shape.

use ndarray::{Array2, Array3, ArrayView2, Axis};

use crate::error::FilterError;

/// An owned image buffer, grayscale or RGB.
#[derive(Debug, Clone, PartialEq)]
pub enum PixelBuffer<T> {
    /// Single-channel image of shape (height, width).
    Gray(Array2<T>),
    /// Three-channel image of shape (height, width, 3).
    Rgb(Array3<T>),
}

impl<T: Copy> PixelBuffer<T> {
    /// Wrap a single-channel array, rejecting zero-area buffers.
    pub fn from_gray(data: Array2<T>) -> Result<Self, FilterError> {
        let (height, width) = data.dim();
        if height == 0 || width == 0 {
            return Err(FilterError::EmptyImage { height, width });
        }
        Ok(PixelBuffer::Gray(data))
    }

    /// Wrap a three-channel array, rejecting zero-area buffers and
    /// channel counts other than 3.
    pub fn from_rgb(data: Array3<T>) -> Result<Self, FilterError> {
        let (height, width, channels) = data.dim();
        if channels != 3 {
            return Err(FilterError::ChannelMismatch(channels));
        }
        if height == 0 || width == 0 {
            return Err(FilterError::EmptyImage { height, width });
        }
        Ok(PixelBuffer::Rgb(data))
    }

    /// Accept a decoded (height, width, channels) array from the shell
    /// and dispatch on the channel count once, here.
    pub fn from_array3(data: Array3<T>) -> Result<Self, FilterError> {
        match data.dim().2 {
            1 => Self::from_gray(data.index_axis_move(Axis(2), 0)),
            3 => Self::from_rgb(data),
            c => Err(FilterError::ChannelMismatch(c)),
        }
    }

    pub fn height(&self) -> usize {
        match self {
            PixelBuffer::Gray(g) => g.dim().0,
            PixelBuffer::Rgb(rgb) => rgb.dim().0,
        }
    }

    pub fn width(&self) -> usize {
        match self {
            PixelBuffer::Gray(g) => g.dim().1,
            PixelBuffer::Rgb(rgb) => rgb.dim().1,
        }
    }

    pub fn channels(&self) -> usize {
        match self {
            PixelBuffer::Gray(_) => 1,
            PixelBuffer::Rgb(_) => 3,
        }
    }

    /// Apply a single-channel transform to the gray plane, or to each
    /// color plane independently, and reassemble. The closure must
    /// preserve the plane's shape.
    pub fn map_channels(&self, mut f: impl FnMut(ArrayView2<T>) -> Array2<T>) -> PixelBuffer<T>
    where
        T: Default,
    {
        match self {
            PixelBuffer::Gray(g) => PixelBuffer::Gray(f(g.view())),
            PixelBuffer::Rgb(rgb) => {
                let (height, width, _) = rgb.dim();
                let mut out = Array3::from_elem((height, width, 3), T::default());
                for (c, plane) in rgb.axis_iter(Axis(2)).enumerate() {
                    let mapped = f(plane);
                    out.index_axis_mut(Axis(2), c).assign(&mapped);
                }
                PixelBuffer::Rgb(out)
            }
        }
    }

    /// Fallible form of [`map_channels`](Self::map_channels).
    pub fn try_map_channels(
        &self,
        mut f: impl FnMut(ArrayView2<T>) -> Result<Array2<T>, FilterError>,
    ) -> Result<PixelBuffer<T>, FilterError>
    where
        T: Default,
    {
        match self {
            PixelBuffer::Gray(g) => Ok(PixelBuffer::Gray(f(g.view())?)),
            PixelBuffer::Rgb(rgb) => {
                let (height, width, _) = rgb.dim();
                let mut out = Array3::from_elem((height, width, 3), T::default());
                for (c, plane) in rgb.axis_iter(Axis(2)).enumerate() {
                    let mapped = f(plane)?;
                    out.index_axis_mut(Axis(2), c).assign(&mapped);
                }
                Ok(PixelBuffer::Rgb(out))
            }
        }
    }
}

// ============================================================================
// Domain Conversions
// ============================================================================

impl PixelBuffer<u8> {
    /// Convert 0-255 samples to 0.0-1.0.
    pub fn to_f32(&self) -> PixelBuffer<f32> {
        match self {
            PixelBuffer::Gray(g) => PixelBuffer::Gray(g.mapv(|v| v as f32 / 255.0)),
            PixelBuffer::Rgb(rgb) => PixelBuffer::Rgb(rgb.mapv(|v| v as f32 / 255.0)),
        }
    }
}

impl PixelBuffer<f32> {
    /// Convert 0.0-1.0 samples to 0-255, clamping out-of-range values.
    pub fn to_u8(&self) -> PixelBuffer<u8> {
        match self {
            PixelBuffer::Gray(g) => {
                PixelBuffer::Gray(g.mapv(|v| (v.clamp(0.0, 1.0) * 255.0).round() as u8))
            }
            PixelBuffer::Rgb(rgb) => {
                PixelBuffer::Rgb(rgb.mapv(|v| (v.clamp(0.0, 1.0) * 255.0).round() as u8))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array2, Array3};

    #[test]
    fn test_from_array3_single_channel_becomes_gray() {
        let data = Array3::<u8>::zeros((4, 5, 1));
        let buf = PixelBuffer::from_array3(data).unwrap();
        assert_eq!(buf.channels(), 1);
        assert_eq!(buf.height(), 4);
        assert_eq!(buf.width(), 5);
    }

    #[test]
    fn test_from_array3_rejects_two_channels() {
        let data = Array3::<u8>::zeros((4, 5, 2));
        assert_eq!(
            PixelBuffer::from_array3(data),
            Err(FilterError::ChannelMismatch(2))
        );
    }

    #[test]
    fn test_zero_area_rejected() {
        let data = Array2::<f32>::zeros((0, 7));
        assert_eq!(
            PixelBuffer::from_gray(data),
            Err(FilterError::EmptyImage {
                height: 0,
                width: 7
            })
        );
    }

    #[test]
    fn test_map_channels_identity_rgb() {
        let mut data = Array3::<f32>::zeros((2, 2, 3));
        data[[0, 1, 2]] = 0.5;
        let buf = PixelBuffer::from_rgb(data.clone()).unwrap();
        let mapped = buf.map_channels(|plane| plane.to_owned());
        assert_eq!(mapped, PixelBuffer::Rgb(data));
    }

    #[test]
    fn test_map_channels_runs_per_plane() {
        let data = Array3::<f32>::from_elem((2, 2, 3), 1.0);
        let buf = PixelBuffer::from_rgb(data).unwrap();
        let mut calls = 0;
        buf.map_channels(|plane| {
            calls += 1;
            plane.to_owned()
        });
        assert_eq!(calls, 3);
    }

    #[test]
    fn test_domain_round_trip() {
        let data = Array2::from_elem((3, 3), 128u8);
        let buf = PixelBuffer::from_gray(data).unwrap();
        assert_eq!(buf.to_f32().to_u8(), buf);
    }
}
