use std::borrow::Cow;

use image::Luma;

use crate::compass_edges::convolve::apply_kernel;
use crate::compass_edges::directional::{directional_kernels, Direction};
use crate::compass_edges::gaussian::GaussianParams;
use crate::error::ConvolutionError;
use crate::utils::validate_non_empty_image;
use crate::Image;

/// The eight directional edge images produced by one detection run
#[derive(Debug, Clone, PartialEq)]
pub struct CompassEdges {
    images: [Image<Luma<u8>>; 8],
}

impl CompassEdges {
    /// Edge image for `direction`
    #[inline]
    pub fn get(&self, direction: Direction) -> &Image<Luma<u8>> {
        &self.images[direction.index()]
    }

    /// Iterates `(direction, image)` pairs in compass order
    pub fn iter(&self) -> impl Iterator<Item = (Direction, &Image<Luma<u8>>)> + '_ {
        Direction::ALL.into_iter().zip(self.images.iter())
    }

    /// Dimensions shared by all eight images
    pub fn dimensions(&self) -> (u32, u32) {
        self.images[0].dimensions()
    }
}

impl IntoIterator for CompassEdges {
    type Item = (Direction, Image<Luma<u8>>);
    type IntoIter = std::iter::Zip<
        std::array::IntoIter<Direction, 8>,
        std::array::IntoIter<Image<Luma<u8>>, 8>,
    >;

    fn into_iter(self) -> Self::IntoIter {
        Direction::ALL.into_iter().zip(self.images)
    }
}

/// Runs Robinson's Compass edge detection.
///
/// When `smoothing` is given, the image is first convolved with the
/// Gaussian kernel; that pass completes before any directional pass reads
/// it. Each of the eight directional kernels is then applied to the
/// (possibly smoothed) image, every pass producing its own output image.
///
/// # Errors
///
/// * `ConvolutionError::EmptyImage` - the image has a zero width or height
/// * `ConvolutionError::Kernel` - the smoothing parameters are invalid
pub fn detect_compass_edges(
    image: &Image<Luma<u8>>,
    smoothing: Option<&GaussianParams>,
) -> Result<CompassEdges, ConvolutionError> {
    let (width, height) = image.dimensions();
    validate_non_empty_image(width, height)?;

    let source = match smoothing {
        Some(params) => {
            log::debug!(
                "smoothing {width}x{height} image with {size}x{size} gaussian, sigma={sigma}",
                size = params.size(),
                sigma = params.sigma()
            );
            let kernel = params.kernel()?;
            Cow::Owned(apply_kernel(image, &kernel)?)
        }
        None => Cow::Borrowed(image),
    };

    let images = run_directional_passes(&source)?;
    Ok(CompassEdges { images })
}

#[cfg(not(feature = "rayon"))]
fn run_directional_passes(
    source: &Image<Luma<u8>>,
) -> Result<[Image<Luma<u8>>; 8], ConvolutionError> {
    let kernels = directional_kernels();
    let images = kernels
        .iter()
        .map(|(direction, kernel)| {
            log::debug!("applying {direction} kernel");
            apply_kernel(source, kernel)
        })
        .collect::<Result<Vec<_>, _>>()?;

    images
        .try_into()
        .map_err(|_| ConvolutionError::ImageBufferCreationFailed)
}

#[cfg(feature = "rayon")]
fn run_directional_passes(
    source: &Image<Luma<u8>>,
) -> Result<[Image<Luma<u8>>; 8], ConvolutionError> {
    use rayon::prelude::*;

    let kernels = directional_kernels();
    let images = Direction::ALL
        .par_iter()
        .map(|&direction| {
            log::debug!("applying {direction} kernel");
            apply_kernel(source, kernels.get(direction))
        })
        .collect::<Result<Vec<_>, _>>()?;

    images
        .try_into()
        .map_err(|_| ConvolutionError::ImageBufferCreationFailed)
}

/// Trait providing Robinson's Compass edge detection on grayscale images
pub trait CompassEdgeDetection {
    /// Detects edges in all eight compass directions.
    ///
    /// See [`detect_compass_edges`].
    fn compass_edges(
        &self,
        smoothing: Option<&GaussianParams>,
    ) -> Result<CompassEdges, ConvolutionError>;
}

impl CompassEdgeDetection for Image<Luma<u8>> {
    fn compass_edges(
        &self,
        smoothing: Option<&GaussianParams>,
    ) -> Result<CompassEdges, ConvolutionError> {
        detect_compass_edges(self, smoothing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compass_edges::convolve::ApplyKernel;
    use crate::test_utils::{create_sequential_luma_image, create_uniform_luma_image};
    use image::ImageBuffer;

    #[test]
    fn uniform_image_has_no_interior_edges() {
        let image = create_uniform_luma_image(5, 5, 128);
        let edges = image.compass_edges(None).unwrap();

        assert_eq!(edges.dimensions(), (5, 5));
        for (direction, edge_image) in edges.iter() {
            for y in 1..4 {
                for x in 1..4 {
                    assert_eq!(edge_image.get_pixel(x, y)[0], 0, "{direction} at ({x}, {y})");
                }
            }
        }
    }

    #[test]
    fn uniform_image_responds_only_where_the_kernel_is_truncated() {
        let image = create_uniform_luma_image(3, 3, 128);
        let edges = image.compass_edges(None).unwrap();

        assert_eq!(
            edges.get(Direction::N).as_raw(),
            &vec![255, 0, 255, 255, 0, 255, 255, 0, 255]
        );
        assert_eq!(
            edges.get(Direction::W).as_raw(),
            &vec![255, 255, 255, 0, 0, 0, 255, 255, 255]
        );
    }

    #[test]
    fn each_output_matches_a_single_pass() {
        let image = create_sequential_luma_image(5, 4);
        let edges = detect_compass_edges(&image, None).unwrap();

        for direction in Direction::ALL {
            let expected = image.apply_kernel(&direction.kernel()).unwrap();
            assert_eq!(edges.get(direction), &expected, "{direction}");
        }
    }

    #[test]
    fn smoothing_runs_before_directional_passes() {
        let image = create_sequential_luma_image(6, 6);
        let params = GaussianParams::new(3, 1.0).unwrap();
        let edges = detect_compass_edges(&image, Some(&params)).unwrap();

        let smoothed = image.gaussian_smooth(&params).unwrap();
        for (direction, edge_image) in edges.iter() {
            let expected = smoothed.apply_kernel(&direction.kernel()).unwrap();
            assert_eq!(edge_image, &expected, "{direction}");
        }
    }

    #[test]
    fn vertical_step_is_detected_by_north_and_south() {
        // left half dark, right half bright
        let image: Image<Luma<u8>> =
            ImageBuffer::from_fn(6, 6, |x, _| if x < 3 { Luma([10]) } else { Luma([60]) });
        let edges = image.compass_edges(None).unwrap();

        // (1 + 2 + 1) * 50 across the step
        assert_eq!(edges.get(Direction::N).get_pixel(2, 3)[0], 200);
        assert_eq!(edges.get(Direction::S).get_pixel(2, 3)[0], 200);
        assert_eq!(edges.get(Direction::W).get_pixel(2, 3)[0], 0);
        assert_eq!(edges.get(Direction::E).get_pixel(2, 3)[0], 0);
    }

    #[test]
    fn into_iter_yields_compass_order() {
        let image = create_uniform_luma_image(2, 2, 5);
        let directions: Vec<Direction> = image
            .compass_edges(None)
            .unwrap()
            .into_iter()
            .map(|(direction, _)| direction)
            .collect();
        assert_eq!(directions, Direction::ALL.to_vec());
    }

    #[test]
    fn empty_image_returns_error() {
        let image: Image<Luma<u8>> = ImageBuffer::new(3, 0);
        assert_eq!(
            detect_compass_edges(&image, None),
            Err(ConvolutionError::EmptyImage {
                width: 3,
                height: 0
            })
        );
    }
}
