//! Collection of all error types.
//!
//! All errors derive [`thiserror::Error`], making them composable when allowed
//! and compatible with application code using [`anyhow`][anyhow].
//!
//! [anyhow]: https://crates.io/crates/anyhow

use ndarray as nd;
use thiserror::Error;
use crate::evolution::Medium;

/// Returned when an operation requiring equal-length arrays encounters arrays
/// with unequal length.
#[derive(Debug, Error)]
#[error("encountered arrays with incompatible lengths; got {0} and {1}")]
pub struct LengthError(pub usize, pub usize);

impl LengthError {
    pub(crate) fn check<S, A, T, B>(
        a: &nd::ArrayBase<S, nd::Ix1>,
        b: &nd::ArrayBase<T, nd::Ix1>,
    ) -> Result<(), Self>
    where
        S: nd::Data<Elem = A>,
        T: nd::Data<Elem = B>,
    {
        let na = a.len();
        let nb = b.len();
        (na == nb).then_some(()).ok_or(Self(na, nb))
    }
}

/// Returned from functions in [`interp`][crate::interp].
#[derive(Debug, Error)]
pub enum InterpError {
    /// [`LengthError`]
    #[error("length error: {0}")]
    Length(#[from] LengthError),

    /// Returned when fewer than two sample points are given.
    #[error("interpolation requires at least 2 sample points; got {0}")]
    TooShort(usize),

    /// Returned when sample coordinates are not strictly increasing, with the
    /// index of the first offending element.
    #[error("sample coordinates must be strictly increasing; violated at index {0}")]
    NotIncreasing(usize),

    /// Returned when a log-space interpolant encounters a non-positive (or
    /// non-finite) sample value, with the index of the offending element.
    #[error("log-space interpolation requires finite, positive samples; got {1} at index {0}")]
    NonPositive(usize, f64),

    /// Returned when a query lies outside the sampled coordinate range.
    #[error("query {x} outside of interpolation domain [{lo}, {hi}]")]
    Domain { x: f64, lo: f64, hi: f64 },
}

impl InterpError {
    pub(crate) fn check_len(n: usize) -> Result<(), Self> {
        (n >= 2).then_some(()).ok_or(Self::TooShort(n))
    }
}

/// Returned from shock evolution functions.
#[derive(Debug, Error)]
pub enum ShockError {
    /// Returned when the ejecta slope has no tabulated coefficients for the
    /// selected medium.
    #[error("unsupported ejecta slope n = {n} for {medium} medium; expected one of {supported:?}")]
    UnsupportedSlope {
        n: u32,
        medium: Medium,
        supported: Vec<u32>,
    },

    /// Returned when a medium type cannot be parsed.
    #[error("unknown medium type {0:?}; expected \"uniform\" or \"wind\"")]
    UnknownMedium(String),

    /// Returned when a physical parameter is not strictly positive (or is not
    /// finite).
    #[error("{name} must be positive and finite; got {value}")]
    NonPositive { name: &'static str, value: f64 },

    /// Returned when a requested age falls outside the range covered by the
    /// radius grid.
    #[error(
        "requested ages [{:.6e}, {:.6e}] yr (normalized [{:.6e}, {:.6e}]) \
        exceed the available range [{:.6e}, {:.6e}] yr \
        (normalized [{:.6e}, {:.6e}])",
        .requested.0, .requested.1, .requested_nat.0, .requested_nat.1,
        .available.0, .available.1, .available_nat.0, .available_nat.1
    )]
    OutOfRange {
        /// Smallest and largest requested age (yr).
        requested: (f64, f64),
        /// Smallest and largest age covered by the grid (yr).
        available: (f64, f64),
        /// `requested` in units of the characteristic time.
        requested_nat: (f64, f64),
        /// `available` in units of the characteristic time.
        available_nat: (f64, f64),
    },

    /// Returned when a radius grid is malformed.
    #[error("invalid radius grid: {0}")]
    Grid(String),

    /// [`InterpError`]
    #[error("interpolation error: {0}")]
    Interp(#[from] InterpError),
}

impl ShockError {
    pub(crate) fn check_positive(name: &'static str, value: f64)
        -> Result<(), Self>
    {
        (value.is_finite() && value > 0.0)
            .then_some(())
            .ok_or(Self::NonPositive { name, value })
    }

    /// Return `true` if `self` is a configuration error (unsupported slope or
    /// unknown medium).
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::UnsupportedSlope { .. } | Self::UnknownMedium(_))
    }

    /// Return `true` if `self` is `NonPositive`.
    pub fn is_domain(&self) -> bool {
        matches!(self, Self::NonPositive { .. })
    }

    /// Return `true` if `self` is `OutOfRange`.
    pub fn is_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }
}
