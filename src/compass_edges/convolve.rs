use std::ops::RangeInclusive;

use image::{ImageBuffer, Luma};
use itertools::iproduct;

use crate::compass_edges::gaussian::GaussianParams;
use crate::compass_edges::kernel::{Kernel, KernelWeight};
use crate::error::ConvolutionError;
use crate::utils::validate_non_empty_image;
use crate::Image;

/// Applies `kernel` to every pixel of a grayscale image.
///
/// The kernel is centered on each output pixel and truncated at the image
/// border: cells that would read outside the image are skipped instead of
/// being padded, reflected or wrapped. Interior pixels use the full kernel.
/// The output sample is the absolute weighted sum saturated at 255.
///
/// # Errors
///
/// * `ConvolutionError::EmptyImage` - the image has a zero width or height
/// * `ConvolutionError::ImageBufferCreationFailed` - the output buffer could not be built
///
/// # Examples
///
/// ```
/// use compass_edges::{apply_kernel, Direction};
/// use image::{GrayImage, Luma};
///
/// let image = GrayImage::from_pixel(3, 3, Luma([128]));
/// let edges = apply_kernel(&image, &Direction::N.kernel())?;
/// // the side columns lose one kernel column and saturate
/// assert_eq!(edges.as_raw(), &[255, 0, 255, 255, 0, 255, 255, 0, 255]);
/// # Ok::<(), compass_edges::ConvolutionError>(())
/// ```
pub fn apply_kernel<K: KernelWeight>(
    image: &Image<Luma<u8>>,
    kernel: &Kernel<K>,
) -> Result<Image<Luma<u8>>, ConvolutionError> {
    let (width, height) = image.dimensions();
    validate_non_empty_image(width, height)?;

    let (w, h) = (width as usize, height as usize);
    let samples = image.as_raw();

    let pixels: Vec<u8> = iproduct!(0..h, 0..w)
        .map(|(y, x)| convolve_at(samples, w, h, kernel, x, y))
        .collect();

    ImageBuffer::from_raw(width, height, pixels).ok_or(ConvolutionError::ImageBufferCreationFailed)
}

/// Weighted sum of the clipped neighborhood around `(x, y)`
#[inline]
fn convolve_at<K: KernelWeight>(
    samples: &[u8],
    width: usize,
    height: usize,
    kernel: &Kernel<K>,
    x: usize,
    y: usize,
) -> u8 {
    let radius = kernel.radius();
    let size = kernel.size();
    let rows = clipped_range(y, radius, height);
    let cols = clipped_range(x, radius, width);
    let (col_start, col_end) = (*cols.start(), *cols.end());
    let first_kernel_col = col_start + radius - x;
    let span = col_end - col_start + 1;

    let mut acc = K::Accumulator::default();
    for iy in rows {
        let ky = iy + radius - y;
        let image_row = &samples[iy * width + col_start..][..span];
        let kernel_row = &kernel.weights()[ky * size + first_kernel_col..][..span];
        acc = image_row
            .iter()
            .zip(kernel_row)
            .fold(acc, |acc, (&sample, &weight)| K::accumulate(acc, weight, sample));
    }
    K::to_sample(acc)
}

/// `max(0, center - radius) ..= min(len - 1, center + radius)`
#[inline]
fn clipped_range(center: usize, radius: usize, len: usize) -> RangeInclusive<usize> {
    center.saturating_sub(radius)..=center.saturating_add(radius).min(len - 1)
}

/// Trait providing kernel application on grayscale images
pub trait ApplyKernel: Sized {
    /// Applies `kernel` and returns a new image of the same dimensions.
    ///
    /// See [`apply_kernel`] for the border policy.
    fn apply_kernel<K: KernelWeight>(&self, kernel: &Kernel<K>) -> Result<Self, ConvolutionError>;

    /// Applies `kernel` in place.
    ///
    /// Every output pixel is computed from the original samples, exactly as
    /// if a new image had been produced and assigned back. On error the
    /// image is left untouched.
    fn apply_kernel_mut<K: KernelWeight>(
        &mut self,
        kernel: &Kernel<K>,
    ) -> Result<(), ConvolutionError>;

    /// Smooths the image with a Gaussian kernel built from `params`.
    fn gaussian_smooth(&self, params: &GaussianParams) -> Result<Self, ConvolutionError> {
        let kernel = params.kernel()?;
        self.apply_kernel(&kernel)
    }

    /// Smooths the image in place with a Gaussian kernel built from `params`.
    fn gaussian_smooth_mut(&mut self, params: &GaussianParams) -> Result<(), ConvolutionError> {
        let kernel = params.kernel()?;
        self.apply_kernel_mut(&kernel)
    }
}

impl ApplyKernel for Image<Luma<u8>> {
    fn apply_kernel<K: KernelWeight>(&self, kernel: &Kernel<K>) -> Result<Self, ConvolutionError> {
        apply_kernel(self, kernel)
    }

    fn apply_kernel_mut<K: KernelWeight>(
        &mut self,
        kernel: &Kernel<K>,
    ) -> Result<(), ConvolutionError> {
        *self = apply_kernel(self, kernel)?;
        Ok(())
    }
}
