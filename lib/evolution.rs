//! Evaluation of the forward shock radius and speed of a supernova remnant as
//! functions of age.
//!
//! The blast wave law gives normalized time as an explicit function of
//! normalized radius, `t*(R*)`. The inverse is found by sampling the law over
//! a dense, logarithmically spaced radius grid and interpolating the sampled
//! radii and speeds as functions of the sampled times.
//!
//! ```
//! use ndarray as nd;
//! use snrshock::evolution::{ Medium, PhysicalParameters, ShockModel };
//!
//! let params = PhysicalParameters::new(1.0, 1.0, 1.0, 9.6, 9, Medium::Wind)
//!     .unwrap();
//! let model = ShockModel::new(params).unwrap();
//! let evo = model.evaluate(&nd::array![100.0, 1000.0, 10000.0]).unwrap();
//! assert!(evo.radius[0] < evo.radius[1] && evo.radius[1] < evo.radius[2]);
//! assert!(evo.velocity.iter().all(|v| *v > 0.0));
//! ```

use std::{ fmt, str::FromStr };
use ndarray as nd;
use tracing::{ debug, warn };
use crate::{
    Arr1,
    coeffs::{ self, CoefficientTable, Coefficients },
    error::ShockError,
    interp::LogInterp,
    units::{ self, Units },
    DEF_NPOINTS,
    DEF_R_MAX,
    DEF_R_MIN,
};

pub type ShockResult<T> = Result<T, ShockError>;

/// Ambient medium into which the ejecta expand.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Medium {
    /// Constant density.
    Uniform,
    /// Density falling as `r⁻²`, as left by a steady progenitor wind.
    Wind,
}

impl Medium {
    /// Power-law index `s` of the ambient density, `ρ ∝ r⁻ˢ`.
    pub fn density_index(self) -> f64 {
        match self {
            Self::Uniform => 0.0,
            Self::Wind => 2.0,
        }
    }

    /// Sedov-Taylor energy constant.
    pub fn sedov_xi(self) -> f64 {
        match self {
            Self::Uniform => units::xi_uniform,
            Self::Wind => units::xi_wind,
        }
    }

    /// Table of blast wave fit constants.
    pub fn table(self) -> &'static CoefficientTable {
        match self {
            Self::Uniform => &coeffs::UNIFORM,
            Self::Wind => &coeffs::WIND,
        }
    }

    /// Look up fit constants for ejecta slope `n`.
    pub fn coefficients(self, n: u32) -> ShockResult<Coefficients> {
        self.table().get(n)
            .ok_or_else(|| ShockError::UnsupportedSlope {
                n,
                medium: self,
                supported: self.table().slopes().collect(),
            })
    }
}

impl fmt::Display for Medium {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uniform => write!(f, "uniform"),
            Self::Wind => write!(f, "wind"),
        }
    }
}

impl FromStr for Medium {
    type Err = ShockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "uniform" | "ism" | "s0" => Ok(Self::Uniform),
            "wind" | "csm" | "s2" => Ok(Self::Wind),
            _ => Err(ShockError::UnknownMedium(s.to_string())),
        }
    }
}

/// Physical description of a remnant.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhysicalParameters {
    /// Ejecta mass (M☉).
    pub ejecta_mass: f64,
    /// Explosion energy (10⁵¹ erg).
    pub energy: f64,
    /// Ambient hydrogen number density (cm⁻³); for a wind medium, the density
    /// at `reference_radius`.
    pub density: f64,
    /// Radius at which a wind density is normalized (pc); unused for a uniform
    /// medium.
    pub reference_radius: f64,
    /// Power-law index of the outer ejecta density profile.
    pub n: u32,
    /// Ambient medium.
    pub medium: Medium,
}

impl PhysicalParameters {
    /// Create a new, validated set of parameters.
    pub fn new(
        ejecta_mass: f64,
        energy: f64,
        density: f64,
        reference_radius: f64,
        n: u32,
        medium: Medium,
    ) -> ShockResult<Self>
    {
        let params
            = Self { ejecta_mass, energy, density, reference_radius, n, medium };
        params.validate()?;
        Ok(params)
    }

    /// Check that all scalar parameters are positive and that `n` is tabulated
    /// for `medium`.
    pub fn validate(&self) -> ShockResult<()> {
        ShockError::check_positive("ejecta mass", self.ejecta_mass)?;
        ShockError::check_positive("explosion energy", self.energy)?;
        ShockError::check_positive("ambient density", self.density)?;
        ShockError::check_positive("reference radius", self.reference_radius)?;
        self.medium.coefficients(self.n)?;
        Ok(())
    }

    /// Compute the characteristic scales.
    pub fn units(&self) -> Units {
        match self.medium {
            Medium::Uniform => {
                Units::uniform(self.ejecta_mass, self.energy, self.density)
            },
            Medium::Wind => {
                Units::wind(
                    self.ejecta_mass,
                    self.energy,
                    self.density,
                    self.reference_radius,
                )
            },
        }
    }
}

/// The blast wave law in normalized units,
/// ```text
/// t*(R*) = [ (R*/α)^(a ζ) + (R*/c)^(b ζ) ]^(1/ζ)
///
/// a = (n - s) / (n - 3)
/// b = (5 - s) / 2
/// c = ξ^(1/(5 - s))
/// ```
/// which reduces to the ejecta-dominated solution `R* = α t*^(1/a)` at early
/// times and to the Sedov-Taylor solution `R* = c t*^(1/b)` at late times.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BlastWaveLaw {
    /// Ejecta-dominated radius normalization.
    pub alpha: f64,
    /// Transition sharpness.
    pub zeta: f64,
    /// Ejecta-dominated time exponent.
    pub a: f64,
    /// Sedov-Taylor time exponent.
    pub b: f64,
    /// Sedov-Taylor radius normalization.
    pub c: f64,
}

impl BlastWaveLaw {
    /// Construct for ejecta slope `n` in a given medium, using the tabulated
    /// fit constants.
    pub fn new(n: u32, medium: Medium) -> ShockResult<Self> {
        Self::from_coefficients(medium.coefficients(n)?, n, medium)
    }

    /// Construct for ejecta slope `n` in a given medium from a particular set
    /// of fit constants.
    pub fn from_coefficients(coeffs: Coefficients, n: u32, medium: Medium)
        -> ShockResult<Self>
    {
        let Coefficients { alpha, zeta } = coeffs;
        ShockError::check_positive("alpha", alpha)?;
        ShockError::check_positive("zeta", zeta)?;
        if n <= 3 {
            return Err(ShockError::UnsupportedSlope {
                n,
                medium,
                supported: medium.table().slopes().collect(),
            });
        }
        let s = medium.density_index();
        let n = f64::from(n);
        let a = (n - s) / (n - 3.0);
        let b = (5.0 - s) / 2.0;
        let c = medium.sedov_xi().powf((5.0 - s).recip());
        Ok(Self { alpha, zeta, a, b, c })
    }

    // ejecta-dominated and Sedov-Taylor terms
    fn terms(&self, r: f64) -> (f64, f64) {
        (
            (r / self.alpha).powf(self.a * self.zeta),
            (r / self.c).powf(self.b * self.zeta),
        )
    }

    /// Normalized time at which the shock reaches normalized radius `r`.
    pub fn time(&self, r: f64) -> f64 {
        let (x, y) = self.terms(r);
        (x + y).powf(self.zeta.recip())
    }

    /// Normalized shock speed at normalized radius `r`, `(dt*/dR*)⁻¹`.
    pub fn speed(&self, r: f64) -> f64 {
        let (x, y) = self.terms(r);
        let t = (x + y).powf(self.zeta.recip());
        r * t.powf(self.zeta - 1.0) / (self.a * x + self.b * y)
    }

    /// Expansion parameter `m = d ln R / d ln t` at normalized radius `r`.
    pub fn expansion(&self, r: f64) -> f64 {
        let (x, y) = self.terms(r);
        (x + y) / (self.a * x + self.b * y)
    }

    /// Normalized radius at which both terms of the law are equal.
    pub fn transition_radius(&self) -> f64 {
        ((self.a * self.alpha.ln() - self.b * self.c.ln()) / (self.a - self.b))
            .exp()
    }
}

/// Logarithmically spaced grid of normalized radii over which the blast wave
/// law is sampled.
///
/// The grid must span enough decades that the ages of interest map into the
/// range of sampled times.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RadiusGrid {
    /// Smallest normalized radius (default: `1e-5`).
    pub r_min: f64,
    /// Largest normalized radius (default: `1e2`).
    pub r_max: f64,
    /// Number of samples (default: `1000`).
    pub npoints: usize,
}

impl Default for RadiusGrid {
    fn default() -> Self {
        Self { r_min: DEF_R_MIN, r_max: DEF_R_MAX, npoints: DEF_NPOINTS }
    }
}

impl RadiusGrid {
    /// Check that the grid is non-degenerate.
    pub fn validate(&self) -> ShockResult<()> {
        ShockError::check_positive("minimum grid radius", self.r_min)?;
        ShockError::check_positive("maximum grid radius", self.r_max)?;
        if self.r_max <= self.r_min {
            return Err(ShockError::Grid(format!(
                "r_max ({}) must exceed r_min ({})", self.r_max, self.r_min)));
        }
        if self.npoints < 2 {
            return Err(ShockError::Grid(format!(
                "npoints must be at least 2; got {}", self.npoints)));
        }
        Ok(())
    }

    /// Generate the sampled radii.
    pub fn samples(&self) -> ShockResult<nd::Array1<f64>> {
        self.validate()?;
        let mut r: nd::Array1<f64>
            = nd::Array1::logspace(
                10.0, self.r_min.log10(), self.r_max.log10(), self.npoints);
        // pin the endpoints against rounding in the exponentiation
        let n = r.len();
        r[0] = self.r_min;
        r[n - 1] = self.r_max;
        Ok(r)
    }
}

/// Treatment of ages falling outside of the range covered by a [`RadiusGrid`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RangePolicy {
    /// Return [`ShockError::OutOfRange`].
    #[default]
    Strict,
    /// Clamp to the nearest covered age, emitting a warning.
    Clamp,
}

/// Evolutionary phase of the blast wave.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Before the transition age.
    EjectaDominated,
    /// At or after the transition age.
    SedovTaylor,
}

/// Shock properties at a single age.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ShockState {
    /// Age (yr).
    pub age: f64,
    /// Shock radius (pc).
    pub radius: f64,
    /// Shock speed (km/s).
    pub velocity: f64,
    /// Expansion parameter `v t / R`.
    pub m: f64,
    /// Evolutionary phase.
    pub phase: Phase,
}

/// Shock properties over a series of ages.
#[derive(Clone, Debug, PartialEq)]
pub struct Evolution {
    /// Ages (yr).
    pub age: nd::Array1<f64>,
    /// Shock radii (pc).
    pub radius: nd::Array1<f64>,
    /// Shock speeds (km/s).
    pub velocity: nd::Array1<f64>,
    /// Expansion parameters `v t / R`.
    pub m: nd::Array1<f64>,
    /// Age (yr) of the transition between ejecta-dominated and Sedov-Taylor
    /// phases.
    pub transition_age: f64,
}

impl Evolution {
    /// Return the number of ages.
    pub fn len(&self) -> usize { self.age.len() }

    /// Return `true` if there are no ages.
    pub fn is_empty(&self) -> bool { self.age.is_empty() }

    /// Get the shock state at the `k`-th age.
    pub fn get(&self, k: usize) -> Option<ShockState> {
        (k < self.len()).then(|| self.state(k))
    }

    // assumes `k < self.len()`
    fn state(&self, k: usize) -> ShockState {
        let age = self.age[k];
        let phase
            = if age < self.transition_age {
                Phase::EjectaDominated
            } else {
                Phase::SedovTaylor
            };
        ShockState {
            age,
            radius: self.radius[k],
            velocity: self.velocity[k],
            m: self.m[k],
            phase,
        }
    }

    /// Iterate over shock states in order.
    pub fn iter(&self) -> impl Iterator<Item = ShockState> + '_ {
        (0..self.len()).filter_map(|k| self.get(k))
    }
}

fn array_bounds<S>(x: &Arr1<S>) -> (f64, f64)
where S: nd::Data<Elem = f64>
{
    x.iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), xk| {
            (lo.min(*xk), hi.max(*xk))
        })
}

/// Evaluator for the shock evolution of a single remnant.
///
/// Construction samples the blast wave law and builds the interpolants;
/// subsequent evaluations are cheap and do not mutate the model.
#[derive(Clone, Debug)]
pub struct ShockModel {
    params: PhysicalParameters,
    units: Units,
    law: BlastWaveLaw,
    grid: RadiusGrid,
    policy: RangePolicy,
    // t* → R*
    radius: LogInterp,
    // t* → v*
    speed: LogInterp,
    // grid coverage in years
    age_lo: f64,
    age_hi: f64,
}

impl ShockModel {
    /// Create a new model over the default [`RadiusGrid`].
    pub fn new(params: PhysicalParameters) -> ShockResult<Self> {
        Self::with_grid(params, RadiusGrid::default())
    }

    /// Create a new model over a particular [`RadiusGrid`].
    pub fn with_grid(params: PhysicalParameters, grid: RadiusGrid)
        -> ShockResult<Self>
    {
        let coeffs = params.medium.coefficients(params.n)?;
        Self::with_coefficients(params, coeffs, grid)
    }

    /// Create a new model over a particular [`RadiusGrid`], replacing the
    /// tabulated fit constants for `params.n` with `coeffs`.
    pub fn with_coefficients(
        params: PhysicalParameters,
        coeffs: Coefficients,
        grid: RadiusGrid,
    ) -> ShockResult<Self>
    {
        params.validate()?;
        let units = params.units();
        let law = BlastWaveLaw::from_coefficients(coeffs, params.n, params.medium)?;

        let r: nd::Array1<f64> = grid.samples()?;
        let t: nd::Array1<f64> = r.mapv(|rk| law.time(rk));
        let v: nd::Array1<f64> = r.mapv(|rk| law.speed(rk));
        let radius = LogInterp::new(&t, &r)?;
        let speed = LogInterp::new(&t, &v)?;
        let (t_lo, t_hi) = radius.bounds();
        let age_lo: f64 = units.from_nat_time(t_lo);
        let age_hi: f64 = units.from_nat_time(t_hi);
        debug!(
            medium = %params.medium,
            n = params.n,
            r_ch_pc = units.length_pc(),
            t_ch_yr = units.time_yr(),
            age_lo,
            age_hi,
            "constructed shock model"
        );
        Ok(Self {
            params,
            units,
            law,
            grid,
            policy: RangePolicy::default(),
            radius,
            speed,
            age_lo,
            age_hi,
        })
    }

    /// Set the treatment of out-of-range ages.
    pub fn with_policy(mut self, policy: RangePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Get a reference to the physical parameters.
    pub fn params(&self) -> &PhysicalParameters { &self.params }

    /// Get the characteristic scales.
    pub fn scales(&self) -> Units { self.units }

    /// Get the blast wave law.
    pub fn law(&self) -> &BlastWaveLaw { &self.law }

    /// Get the radius grid.
    pub fn grid(&self) -> RadiusGrid { self.grid }

    /// Get the out-of-range policy.
    pub fn policy(&self) -> RangePolicy { self.policy }

    /// Return the (inclusive) range of normalized times covered by the grid.
    pub fn nat_range(&self) -> (f64, f64) { self.radius.bounds() }

    /// Return the (inclusive) range of ages (yr) covered by the grid.
    pub fn age_range(&self) -> (f64, f64) { (self.age_lo, self.age_hi) }

    /// Age (yr) at which the shock reaches a given radius (pc), from the
    /// closed-form law.
    pub fn time_at_radius(&self, radius: f64) -> ShockResult<f64> {
        ShockError::check_positive("radius", radius)?;
        let r: f64 = self.units.to_nat_length(radius);
        Ok(self.units.from_nat_time(self.law.time(r)))
    }

    /// Age (yr) of the transition between ejecta-dominated and Sedov-Taylor
    /// phases.
    pub fn transition_age(&self) -> f64 {
        self.units.from_nat_time(self.law.time(self.law.transition_radius()))
    }

    // returns `true` if out-of-range values should be clamped
    fn check_range(&self, requested: (f64, f64), available: (f64, f64), nat: bool)
        -> ShockResult<bool>
    {
        if requested.0 >= available.0 && requested.1 <= available.1 {
            return Ok(false);
        }
        match self.policy {
            RangePolicy::Strict => {
                let to_nat = |x: f64| -> f64 { self.units.to_nat_time(x) };
                let from_nat = |x: f64| -> f64 { self.units.from_nat_time(x) };
                let (requested, requested_nat)
                    = if nat {
                        ((from_nat(requested.0), from_nat(requested.1)), requested)
                    } else {
                        (requested, (to_nat(requested.0), to_nat(requested.1)))
                    };
                Err(ShockError::OutOfRange {
                    requested,
                    available: self.age_range(),
                    requested_nat,
                    available_nat: self.nat_range(),
                })
            },
            RangePolicy::Clamp => Ok(true),
        }
    }

    // `t` is assumed to be positive; values outside of the grid are clamped
    fn eval_nat_unchecked<S>(&self, t: &Arr1<S>) -> Evolution
    where S: nd::Data<Elem = f64>
    {
        let (t_lo, t_hi) = self.nat_range();
        let t: nd::Array1<f64> = t.mapv(|tk| tk.clamp(t_lo, t_hi));
        let r: nd::Array1<f64> = t.mapv(|tk| self.radius.eval_clamped(tk));
        let v: nd::Array1<f64> = t.mapv(|tk| self.speed.eval_clamped(tk));
        let m: nd::Array1<f64>
            = nd::Zip::from(&v).and(&t).and(&r)
            .map_collect(|vk, tk, rk| vk * tk / rk);
        Evolution {
            age: self.units.from_nat_time(&t),
            radius: self.units.from_nat_length(&r),
            velocity: self.units.from_nat_speed(&v),
            m,
            transition_age: self.transition_age(),
        }
    }

    fn check_ages<S>(name: &'static str, x: &Arr1<S>) -> ShockResult<()>
    where S: nd::Data<Elem = f64>
    {
        x.iter().try_for_each(|xk| ShockError::check_positive(name, *xk))
    }

    /// Evaluate the shock evolution at an array of ages (yr).
    ///
    /// Returns [`ShockError::OutOfRange`] if any age lies outside of
    /// [`Self::age_range`] under [`RangePolicy::Strict`]; under
    /// [`RangePolicy::Clamp`], such ages are replaced by the nearest covered
    /// age and the returned `age` array reflects this.
    pub fn evaluate<S>(&self, ages: &Arr1<S>) -> ShockResult<Evolution>
    where S: nd::Data<Elem = f64>
    {
        Self::check_ages("age", ages)?;
        if ages.is_empty() { return Ok(self.eval_nat_unchecked(ages)); }
        let requested = array_bounds(ages);
        if self.check_range(requested, self.age_range(), false)? {
            let count
                = ages.iter()
                .filter(|a| **a < self.age_lo || **a > self.age_hi)
                .count();
            warn!(
                count,
                age_lo = self.age_lo,
                age_hi = self.age_hi,
                "clamping ages outside of the radius grid"
            );
        }
        let (age_lo, age_hi) = self.age_range();
        let t: nd::Array1<f64>
            = ages.mapv(|ak| self.units.to_nat_time(ak.clamp(age_lo, age_hi)));
        let mut evo = self.eval_nat_unchecked(&t);
        // report covered ages exactly as requested
        evo.age = ages.mapv(|ak| ak.clamp(age_lo, age_hi));
        Ok(evo)
    }

    /// Evaluate the shock evolution at an array of normalized times.
    ///
    /// Range checking is performed against [`Self::nat_range`], otherwise
    /// identically to [`Self::evaluate`].
    pub fn evaluate_nat<S>(&self, t: &Arr1<S>) -> ShockResult<Evolution>
    where S: nd::Data<Elem = f64>
    {
        Self::check_ages("normalized time", t)?;
        if t.is_empty() { return Ok(self.eval_nat_unchecked(t)); }
        let requested = array_bounds(t);
        if self.check_range(requested, self.nat_range(), true)? {
            let (t_lo, t_hi) = self.nat_range();
            let count = t.iter().filter(|tk| **tk < t_lo || **tk > t_hi).count();
            warn!(
                count,
                t_lo,
                t_hi,
                "clamping normalized times outside of the radius grid"
            );
        }
        Ok(self.eval_nat_unchecked(t))
    }

    /// Evaluate the shock evolution at a single age (yr).
    pub fn evaluate_age(&self, age: f64) -> ShockResult<ShockState> {
        Ok(self.evaluate(&nd::array![age])?.state(0))
    }
}

/// Evaluate the shock radius (pc), speed (km/s), and expansion parameter at an
/// array of ages (yr) for a single remnant, using the default [`RadiusGrid`]
/// and [`RangePolicy::Strict`].
///
/// Arguments after `ages` are as in [`PhysicalParameters`].
pub fn shock_evolution<S>(
    ages: &Arr1<S>,
    ejecta_mass: f64,
    energy: f64,
    density: f64,
    reference_radius: f64,
    n: u32,
    medium: Medium,
) -> ShockResult<Evolution>
where S: nd::Data<Elem = f64>
{
    let params = PhysicalParameters::new(
        ejecta_mass, energy, density, reference_radius, n, medium)?;
    ShockModel::new(params)?.evaluate(ages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn params(medium: Medium) -> PhysicalParameters {
        PhysicalParameters::new(1.0, 1.0, 1.0, 9.6, 9, medium).unwrap()
    }

    #[test]
    fn medium_from_str() {
        assert_eq!("uniform".parse::<Medium>().unwrap(), Medium::Uniform);
        assert_eq!(" Wind ".parse::<Medium>().unwrap(), Medium::Wind);
        assert_eq!("ISM".parse::<Medium>().unwrap(), Medium::Uniform);
        let err = "disk".parse::<Medium>().unwrap_err();
        assert!(err.is_configuration());
        assert_eq!(Medium::Wind.to_string(), "wind");
    }

    #[test]
    fn unsupported_slope() {
        for medium in [Medium::Uniform, Medium::Wind] {
            let err = PhysicalParameters::new(1.0, 1.0, 1.0, 9.6, 11, medium)
                .unwrap_err();
            assert!(err.is_configuration());
            assert!(matches!(err, ShockError::UnsupportedSlope { n: 11, .. }));
        }
    }

    #[test]
    fn non_positive_parameters() {
        let bad = [
            (0.0, 1.0, 1.0, 1.0),
            (1.0, -1.0, 1.0, 1.0),
            (1.0, 1.0, 0.0, 1.0),
            (1.0, 1.0, 1.0, -9.6),
        ];
        for (m, e, n0, r) in bad {
            let err = PhysicalParameters::new(m, e, n0, r, 9, Medium::Wind)
                .unwrap_err();
            assert!(err.is_domain());
        }
    }

    #[test]
    fn law_limits() {
        for medium in [Medium::Uniform, Medium::Wind] {
            let s = medium.density_index();
            let law = BlastWaveLaw::new(9, medium).unwrap();
            // ejecta-dominated
            let r = 1e-30;
            assert_relative_eq!(
                law.expansion(r), (9.0 - 3.0) / (9.0 - s), max_relative = 1e-6);
            assert_relative_eq!(
                law.time(r), (r / law.alpha).powf(law.a), max_relative = 1e-6);
            // Sedov-Taylor
            let r = 1e30;
            assert_relative_eq!(
                law.expansion(r), 2.0 / (5.0 - s), max_relative = 1e-6);
            assert_relative_eq!(
                law.time(r), (r / law.c).powf(law.b), max_relative = 1e-6);
        }
    }

    #[test]
    fn law_speed_is_inverse_derivative() {
        let law = BlastWaveLaw::new(7, Medium::Uniform).unwrap();
        for r in [1e-3, 0.1, 0.8, 1.5, 20.0] {
            let h = r * 1e-6;
            let dtdr = (law.time(r + h) - law.time(r - h)) / (2.0 * h);
            assert_relative_eq!(law.speed(r), dtdr.recip(), max_relative = 1e-6);
            assert_relative_eq!(
                law.expansion(r), law.speed(r) * law.time(r) / r,
                max_relative = 1e-12);
        }
    }

    // Truelove & McKee (1999): R* = 1.06 t*^(4/7) for n = 7 before the
    // transition and R* = 1.15 t*^(2/5) after it, in a uniform medium
    #[test]
    fn law_matches_truelove_mckee_limits() {
        let law = BlastWaveLaw::new(7, Medium::Uniform).unwrap();
        let r_early = 1e-8;
        let t_early = law.time(r_early);
        assert_relative_eq!(r_early / t_early.powf(4.0 / 7.0), 1.06, max_relative = 1e-2);
        let r_late = 1e8;
        let t_late = law.time(r_late);
        assert_relative_eq!(r_late / t_late.powf(0.4), 1.15, max_relative = 1e-2);
    }

    #[test]
    fn custom_coefficients() {
        let params = params(Medium::Wind);
        let tabulated = Medium::Wind.coefficients(9).unwrap();
        let same = ShockModel::with_coefficients(
            params, tabulated, RadiusGrid::default()).unwrap();
        let model = ShockModel::new(params).unwrap();
        assert_eq!(
            same.evaluate_age(1000.0).unwrap(), model.evaluate_age(1000.0).unwrap());

        let sharper = Coefficients { zeta: 2.0 * tabulated.zeta, ..tabulated };
        let other = ShockModel::with_coefficients(
            params, sharper, RadiusGrid::default()).unwrap();
        assert_eq!(other.law().zeta, sharper.zeta);
        // a sharper transition leaves the shock closer to both asymptotes
        let r_tr = model.law().transition_radius();
        assert!(other.law().time(r_tr) < model.law().time(r_tr));

        let bad = Coefficients { zeta: 0.0, ..tabulated };
        let err = ShockModel::with_coefficients(params, bad, RadiusGrid::default())
            .unwrap_err();
        assert!(err.is_domain());
    }

    #[test]
    fn transition_radius_balances_terms() {
        for medium in [Medium::Uniform, Medium::Wind] {
            for n in medium.table().slopes() {
                let law = BlastWaveLaw::new(n, medium).unwrap();
                let r = law.transition_radius();
                let (x, y) = law.terms(r);
                assert_relative_eq!(x, y, max_relative = 1e-10);
            }
        }
    }

    #[test]
    fn grid_validation() {
        assert!(RadiusGrid::default().validate().is_ok());
        let bad = RadiusGrid { r_min: 1.0, r_max: 0.1, npoints: 100 };
        assert!(matches!(bad.validate(), Err(ShockError::Grid(_))));
        let bad = RadiusGrid { npoints: 1, ..RadiusGrid::default() };
        assert!(matches!(bad.validate(), Err(ShockError::Grid(_))));
        let bad = RadiusGrid { r_min: 0.0, ..RadiusGrid::default() };
        assert!(bad.validate().unwrap_err().is_domain());
        let r = RadiusGrid::default().samples().unwrap();
        assert_eq!(r.len(), DEF_NPOINTS);
        assert_eq!(r[0], DEF_R_MIN);
        assert_eq!(r[DEF_NPOINTS - 1], DEF_R_MAX);
        let empty = RadiusGrid { npoints: 0, ..RadiusGrid::default() };
        assert!(matches!(empty.samples(), Err(ShockError::Grid(_))));
    }

    #[test]
    fn nat_boundaries() {
        let model = ShockModel::new(params(Medium::Wind)).unwrap();
        let (lo, hi) = model.nat_range();
        assert!(model.evaluate_nat(&nd::array![lo, hi]).is_ok());
        let below = lo * (1.0 - 1e-9);
        let above = hi * (1.0 + 1e-9);
        assert!(model.evaluate_nat(&nd::array![below]).unwrap_err().is_range());
        assert!(model.evaluate_nat(&nd::array![above]).unwrap_err().is_range());
    }

    #[test]
    fn age_boundaries() {
        let model = ShockModel::new(params(Medium::Uniform)).unwrap();
        let (lo, hi) = model.age_range();
        let evo = model.evaluate(&nd::array![lo, hi]).unwrap();
        assert_eq!(evo.age, nd::array![lo, hi]);
        assert_eq!(model.evaluate_age(lo).unwrap(), evo.get(0).unwrap());
        assert_eq!(model.evaluate_age(hi).unwrap(), evo.get(1).unwrap());
        assert!(model.evaluate_age(lo * (1.0 - 1e-9)).unwrap_err().is_range());
        assert!(model.evaluate_age(hi * (1.0 + 1e-9)).unwrap_err().is_range());
    }

    #[test]
    fn non_positive_age() {
        let model = ShockModel::new(params(Medium::Uniform)).unwrap();
        assert!(model.evaluate_age(0.0).unwrap_err().is_domain());
        assert!(model.evaluate(&nd::array![10.0, -1.0]).unwrap_err().is_domain());
    }

    #[test]
    fn clamp_policy() {
        let model = ShockModel::new(params(Medium::Uniform)).unwrap()
            .with_policy(RangePolicy::Clamp);
        let (_, hi) = model.age_range();
        let at_hi = model.evaluate_age(hi).unwrap();
        let beyond = model.evaluate_age(hi * 10.0).unwrap();
        assert_eq!(at_hi, beyond);
        let (lo, _) = model.nat_range();
        let evo = model.evaluate_nat(&nd::array![lo / 2.0]).unwrap();
        let at_lo = model.evaluate_nat(&nd::array![lo]).unwrap();
        assert_eq!(evo.radius, at_lo.radius);
    }

    #[test]
    fn empty_series() {
        let model = ShockModel::new(params(Medium::Wind)).unwrap();
        let evo = model.evaluate(&nd::Array1::<f64>::zeros(0)).unwrap();
        assert!(evo.is_empty());
        assert_eq!(evo.iter().count(), 0);
    }

    #[test]
    fn phases() {
        let model = ShockModel::new(params(Medium::Uniform)).unwrap();
        let t_tr = model.transition_age();
        let early = model.evaluate_age(t_tr / 100.0).unwrap();
        let late = model.evaluate_age(t_tr * 100.0).unwrap();
        assert_eq!(early.phase, Phase::EjectaDominated);
        assert_eq!(late.phase, Phase::SedovTaylor);
        assert!(early.m > late.m);
    }
}
