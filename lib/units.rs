#![allow(non_upper_case_globals)]

//! Convenience functions and constructs to handle minutiae associated with
//! conversion to and from the characteristic units of a supernova remnant.
//!
//! All constants are given in centimeters/grams/seconds (CGS) units. See
//! [`docs/units`][crate::docs#characteristic-units] for more information.

use std::f64::consts::PI;

/// solar mass (g)
pub const Msun: f64 = 1.98847e33;
//                +/- 0.00007e33

/// hydrogen atom mass (g)
pub const mH: f64 = 1.6735575e-24;

/// mean mass per hydrogen nucleus in units of `mH`, for cosmic abundances
pub const muH: f64 = 1.4;

/// parsec (cm)
pub const pc: f64 = 3.0856775814913673e18;
//              +/- 0 (exact, by IAU definition)

/// Julian year (s)
pub const yr: f64 = 3.15576e7;
//              +/- 0 (exact)

/// kilometer (cm)
pub const km: f64 = 1e5;

/// reference explosion energy (erg)
pub const E51: f64 = 1e51;

/// Sedov-Taylor constant for a uniform medium and adiabatic index 5/3
pub const xi_uniform: f64 = 2.026;

/// Sedov-Taylor constant for a steady-wind medium and adiabatic index 5/3
pub const xi_wind: f64 = 3.0 / 2.0 / PI;

/// Mass density (g cm^-3) corresponding to a hydrogen number density `n0`
/// (cm^-3).
pub fn mass_density(n0: f64) -> f64 { muH * mH * n0 }

/// A collection of characteristic scaling factors relative to CGS units.
///
/// Constructor methods produce scaling constants whose numerical values are
/// represented in CGS units.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Units {
    /// Characteristic length scale (cm).
    pub a: f64,
    /// Characteristic time scale (s).
    pub t: f64,
}

impl Units {
    /// Construct for ejecta expanding into a uniform medium.
    ///
    /// Arguments are the ejecta mass (M☉), explosion energy (10⁵¹ erg), and
    /// ambient hydrogen number density (cm⁻³). This gives
    /// ```text
    /// R_ch = M^(1/3) ρ₀^(-1/3)
    /// t_ch = E^(-1/2) M^(5/6) ρ₀^(-1/3)
    /// ```
    /// or ≈ 3.07 pc and ≈ 423 yr for unit arguments.
    pub fn uniform(mass: f64, energy: f64, n0: f64) -> Self {
        let m = mass * Msun;
        let e = energy * E51;
        let rho0 = mass_density(n0);
        let a_unit = (m / rho0).cbrt();
        let t_unit = e.powf(-0.5) * m.powf(5.0 / 6.0) / rho0.cbrt();
        Self { a: a_unit, t: t_unit }
    }

    /// Construct for ejecta expanding into a steady progenitor wind with
    /// density `ρ = q r⁻²`.
    ///
    /// Arguments are the ejecta mass (M☉), explosion energy (10⁵¹ erg), and
    /// wind hydrogen number density (cm⁻³) at a reference radius `r_ref` (pc),
    /// so that `q = ρ₀ r_ref²`. This gives
    /// ```text
    /// R_ch = M / q
    /// t_ch = E^(-1/2) M^(3/2) / q
    /// ```
    pub fn wind(mass: f64, energy: f64, n0: f64, r_ref: f64) -> Self {
        let m = mass * Msun;
        let e = energy * E51;
        let q = mass_density(n0) * (r_ref * pc).powi(2);
        let a_unit = m / q;
        let t_unit = e.powf(-0.5) * m.powf(1.5) / q;
        Self { a: a_unit, t: t_unit }
    }

    /// Characteristic length scale in parsecs.
    pub fn length_pc(&self) -> f64 { self.a / pc }

    /// Characteristic time scale in years.
    pub fn time_yr(&self) -> f64 { self.t / yr }

    /// Characteristic speed scale in km/s.
    pub fn speed_kms(&self) -> f64 { self.a / self.t / km }

    /// Convert a quantity with dimensions of time in years to natural units.
    pub fn to_nat_time<T, U>(&self, x: T) -> U
    where T: std::ops::Mul<f64, Output = U>
    {
        x * (yr / self.t)
    }

    /// Convert a dimensionless quantity to one with time units in years.
    pub fn from_nat_time<T, U>(&self, x: T) -> U
    where T: std::ops::Mul<f64, Output = U>
    {
        x * (self.t / yr)
    }

    /// Convert a quantity with dimensions of length in parsecs to natural
    /// units.
    pub fn to_nat_length<T, U>(&self, x: T) -> U
    where T: std::ops::Mul<f64, Output = U>
    {
        x * (pc / self.a)
    }

    /// Convert a dimensionless quantity to one with length units in parsecs.
    pub fn from_nat_length<T, U>(&self, x: T) -> U
    where T: std::ops::Mul<f64, Output = U>
    {
        x * (self.a / pc)
    }

    /// Convert a dimensionless quantity to one with velocity units in km/s.
    pub fn from_nat_speed<T, U>(&self, x: T) -> U
    where T: std::ops::Mul<f64, Output = U>
    {
        x * (self.a / self.t / km)
    }
}
