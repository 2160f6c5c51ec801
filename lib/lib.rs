//! Provides functions and higher-level constructs for computing the evolution
//! of the forward shock of a non-radiative supernova remnant, bridging the
//! ejecta-dominated and Sedov-Taylor phases with the analytic blast wave law of
//! Tang & Chevalier (2016)[^1].
//!
//! The law gives the (normalized) time at which the shock reaches a given
//! (normalized) radius in closed form; shock radii and speeds at given ages are
//! obtained by sampling the law over a dense radius grid and inverting it via
//! interpolation. Both uniform and steady-wind ambient media are supported.
//!
//! See [`docs`] for theoretical background.
//!
//! [^1]: X. Tang and R. A. Chevalier, "Shock evolution in non-radiative
//! supernova remnants" (2016).

pub mod error;
pub mod coeffs;
pub mod interp;
pub mod units;
pub mod evolution;

pub mod docs;

/// Default smallest normalized radius in the sampling grid.
pub const DEF_R_MIN: f64 = 1e-5;
/// Default largest normalized radius in the sampling grid.
pub const DEF_R_MAX: f64 = 1e2;
/// Default number of points in the sampling grid.
pub const DEF_NPOINTS: usize = 1000;

pub type Arr1<S> = ndarray::ArrayBase<S, ndarray::Ix1>;

pub use evolution::{
    shock_evolution,
    Evolution,
    Medium,
    PhysicalParameters,
    RadiusGrid,
    RangePolicy,
    ShockModel,
    ShockState,
};
pub use error::ShockError;
