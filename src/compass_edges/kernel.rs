use std::fmt::Debug;

use crate::error::KernelError;
use crate::utils::clamp_f64_to_primitive;

/// Weight type usable inside a [`Kernel`]
///
/// Describes how weighted `u8` samples are summed and how the final sum is
/// mapped back into the sample domain. The mapping takes the absolute value
/// of the sum and saturates it at 255; sums are never wrapped.
pub trait KernelWeight: Copy + Debug + PartialEq + Send + Sync {
    /// Accumulator type used for the per-pixel weighted sum
    type Accumulator: Copy + Default;

    /// Adds `weight * sample` to the running sum
    fn accumulate(acc: Self::Accumulator, weight: Self, sample: u8) -> Self::Accumulator;

    /// Converts a finished sum into an output sample
    fn to_sample(acc: Self::Accumulator) -> u8;
}

impl KernelWeight for i32 {
    type Accumulator = i64;

    #[inline]
    fn accumulate(acc: i64, weight: i32, sample: u8) -> i64 {
        acc + i64::from(weight) * i64::from(sample)
    }

    #[inline]
    fn to_sample(acc: i64) -> u8 {
        acc.unsigned_abs().min(u64::from(u8::MAX)) as u8
    }
}

impl KernelWeight for f64 {
    type Accumulator = f64;

    #[inline]
    fn accumulate(acc: f64, weight: f64, sample: u8) -> f64 {
        acc + weight * f64::from(sample)
    }

    /// Fractional parts are truncated toward zero.
    #[inline]
    fn to_sample(acc: f64) -> u8 {
        clamp_f64_to_primitive::<u8>(acc.abs())
    }
}

/// A square convolution kernel with an odd side length
///
/// Weights are stored row-major. The center cell sits at
/// `(radius, radius)` where `radius == size / 2`.
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel<K> {
    data: Vec<K>,
    size: usize,
}

impl<K: KernelWeight> Kernel<K> {
    /// Builds a kernel from row-major weights and a side length.
    ///
    /// # Errors
    ///
    /// * `KernelError::InvalidSize` - `size` is even or smaller than 3
    /// * `KernelError::DataLengthMismatch` - `data.len() != size * size`
    pub fn new(data: Vec<K>, size: usize) -> Result<Self, KernelError> {
        validate_size(size)?;

        let expected = size * size;
        if data.len() != expected {
            return Err(KernelError::DataLengthMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self { data, size })
    }

    /// Builds a kernel from a square array of rows.
    ///
    /// # Errors
    ///
    /// * `KernelError::InvalidSize` - `N` is even or smaller than 3
    pub fn from_rows<const N: usize>(rows: [[K; N]; N]) -> Result<Self, KernelError> {
        validate_size(N)?;
        Ok(Self::from_rows_unchecked(rows))
    }

    /// Callers guarantee `N` is odd and at least 3.
    pub(crate) fn from_rows_unchecked<const N: usize>(rows: [[K; N]; N]) -> Self {
        Self {
            data: rows.into_iter().flatten().collect(),
            size: N,
        }
    }

    /// Side length of the kernel
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Maximum offset from the center in each direction
    #[inline]
    pub fn radius(&self) -> usize {
        self.size / 2
    }

    /// Weight at column `col` and row `row`.
    ///
    /// # Panics
    ///
    /// If `col` or `row` is outside of the kernel.
    #[inline]
    pub fn at(&self, col: usize, row: usize) -> K {
        self.data[row * self.size + col]
    }

    /// All weights in row-major order
    #[inline]
    pub fn weights(&self) -> &[K] {
        &self.data
    }

    /// Iterator over the kernel rows
    pub fn rows(&self) -> impl Iterator<Item = &[K]> + '_ {
        self.data.chunks_exact(self.size)
    }
}

impl Kernel<f64> {
    /// Sum of all weights
    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }
}

impl Kernel<i32> {
    /// Sum of all weights
    pub fn sum(&self) -> i64 {
        self.data.iter().map(|&w| i64::from(w)).sum()
    }
}

pub(crate) fn validate_size(size: usize) -> Result<(), KernelError> {
    if size < 3 || size % 2 == 0 {
        return Err(KernelError::InvalidSize { size });
    }
    Ok(())
}
