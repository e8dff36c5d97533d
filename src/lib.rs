//! # compass-edges
//!
//! Robinson's Compass edge detection for grayscale images.
//!
//! The crate is built around a small convolution engine:
//!
//! - **Kernels**: a square, odd-sized [`Kernel`] with integer or floating-point weights
//! - **Directional kernels**: the eight fixed Robinson's Compass masks (N, NW, W, SW, S, SE, E, NE)
//! - **Gaussian kernel**: a normalized smoothing kernel built from a size and a sigma
//! - **Convolution**: kernel application that truncates the kernel at image borders
//! - **Edge detection**: optional smoothing followed by the eight directional passes
//!
//! ## Example Usage
//!
//! ```no_run
//! use compass_edges::{CompassEdgeDetection, GaussianParams};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let image = image::open("input.png")?.to_luma8();
//! let smoothing = GaussianParams::new(5, 1.4)?;
//!
//! let edges = image.compass_edges(Some(&smoothing))?;
//! for (direction, edge_image) in edges.iter() {
//!     edge_image.save(format!("edges_{direction}.png"))?;
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! - `rayon`: runs the eight directional passes concurrently

mod compass_edges;
mod error;
mod utils;

#[cfg(test)]
mod test_utils;

use image::{ImageBuffer, Pixel};

pub use compass_edges::convolve::{apply_kernel, ApplyKernel};
pub use compass_edges::directional::{directional_kernels, Direction, DirectionalKernelSet};
pub use compass_edges::gaussian::{generate_gaussian_kernel, GaussianParams, MIN_SIGMA};
pub use compass_edges::kernel::{Kernel, KernelWeight};
pub use compass_edges::pipeline::{detect_compass_edges, CompassEdgeDetection, CompassEdges};
pub use error::{ConvolutionError, KernelError};

pub type Image<P> = ImageBuffer<P, Vec<<P as Pixel>::Subpixel>>;
