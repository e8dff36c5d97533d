use std::f64::consts::PI;

use crate::compass_edges::kernel::{validate_size, Kernel};
use crate::error::KernelError;

/// Smallest accepted Gaussian sigma
///
/// Smaller spreads collapse the kernel onto its center cell.
pub const MIN_SIGMA: f64 = 0.3;

/// Parameters of a Gaussian smoothing pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussianParams {
    size: usize,
    sigma: f64,
}

impl GaussianParams {
    /// Validates and stores the smoothing parameters.
    ///
    /// # Errors
    ///
    /// Same as [`generate_gaussian_kernel`].
    pub fn new(size: usize, sigma: f64) -> Result<Self, KernelError> {
        validate_params(size, sigma)?;
        Ok(Self { size, sigma })
    }

    /// Kernel side length
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Gaussian spread
    #[inline]
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Generates the normalized kernel for these parameters.
    pub fn kernel(&self) -> Result<Kernel<f64>, KernelError> {
        generate_gaussian_kernel(self.size, self.sigma)
    }
}

/// Generates a normalized `size` x `size` Gaussian smoothing kernel.
///
/// Each cell gets `exp(-(dr² + dc²) / (2σ²)) / (2πσ²)` where `dr` and `dc`
/// are the offsets from the center cell, then every weight is divided by
/// the total so the kernel sums to 1.
///
/// # Errors
///
/// * `KernelError::InvalidSize` - `size` is even or smaller than 3
/// * `KernelError::NonFiniteSigma` - `sigma` is NaN or infinite
/// * `KernelError::SigmaTooSmall` - `sigma` is below [`MIN_SIGMA`]
///
/// # Examples
///
/// ```
/// use compass_edges::generate_gaussian_kernel;
///
/// let kernel = generate_gaussian_kernel(5, 1.4)?;
/// assert_eq!(kernel.size(), 5);
/// assert!((kernel.sum() - 1.0).abs() < 1e-9);
/// # Ok::<(), compass_edges::KernelError>(())
/// ```
pub fn generate_gaussian_kernel(size: usize, sigma: f64) -> Result<Kernel<f64>, KernelError> {
    validate_params(size, sigma)?;

    let radius = (size / 2) as f64;
    let two_sigma_sq = 2.0 * sigma * sigma;
    let scale = PI * two_sigma_sq;

    let mut weights: Vec<f64> = (0..size * size)
        .map(|i| {
            let dr = (i / size) as f64 - radius;
            let dc = (i % size) as f64 - radius;
            (-(dr * dr + dc * dc) / two_sigma_sq).exp() / scale
        })
        .collect();

    let total: f64 = weights.iter().sum();
    weights.iter_mut().for_each(|w| *w /= total);

    log::trace!("generated {size}x{size} gaussian kernel, sigma={sigma}");

    Kernel::new(weights, size)
}

fn validate_params(size: usize, sigma: f64) -> Result<(), KernelError> {
    validate_size(size)?;

    if !sigma.is_finite() {
        return Err(KernelError::NonFiniteSigma(sigma));
    }
    if sigma < MIN_SIGMA {
        return Err(KernelError::SigmaTooSmall {
            sigma,
            min: MIN_SIGMA,
        });
    }
    Ok(())
}
