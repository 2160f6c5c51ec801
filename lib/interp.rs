//! One-dimensional interpolation of array-sampled, monotonic functions.
//!
//! Interpolation is performed piecewise-linearly in log-log space, which is
//! exact for power laws and well suited to functions sampled over many
//! decades. Sampled coordinates must be strictly increasing, which also makes
//! this a means of inverting a sampled function: interpolating `x` as a function
//! of `y = f(x)` gives `f⁻¹(y)`.
//!
//! ```
//! use ndarray as nd;
//! use snrshock::interp::LogInterp;
//!
//! let x: nd::Array1<f64> = nd::Array1::logspace(10.0, -2.0, 2.0, 200);
//! let y = x.mapv(|xk| 3.0 * xk.powf(1.5));
//! // invert y(x)
//! let inv = LogInterp::new(&y, &x).unwrap();
//! let x0 = inv.eval(3.0 * 8.0).unwrap();
//! assert!((x0 - 4.0).abs() < 1e-10);
//! ```

use ndarray as nd;
use crate::{ Arr1, error::* };

pub type InterpResult<T> = Result<T, InterpError>;

/// Return `Ok` if `x` is strictly increasing, otherwise the index of the first
/// element not greater than its predecessor.
pub fn check_increasing<S>(x: &Arr1<S>) -> InterpResult<()>
where S: nd::Data<Elem = f64>
{
    let bad
        = x.iter().zip(x.iter().skip(1))
        .position(|(xk, xkp1)| xkp1 <= xk || xkp1.is_nan());
    match bad {
        Some(k) => Err(InterpError::NotIncreasing(k + 1)),
        None => Ok(()),
    }
}

fn log_samples<S>(a: &Arr1<S>) -> InterpResult<nd::Array1<f64>>
where S: nd::Data<Elem = f64>
{
    a.iter().enumerate()
        .map(|(k, ak)| {
            (ak.is_finite() && *ak > 0.0)
                .then(|| ak.ln())
                .ok_or(InterpError::NonPositive(k, *ak))
        })
        .collect()
}

/// Piecewise-linear interpolant over log-transformed coordinates and values.
///
/// Queries outside of the sampled coordinate range are rejected rather than
/// extrapolated; use [`Self::eval_clamped`] to pin them to the nearest bound
/// instead.
#[derive(Clone, Debug)]
pub struct LogInterp {
    // log coordinates
    lx: nd::Array1<f64>,
    // log values
    ly: nd::Array1<f64>,
    // raw coordinate bounds
    lo: f64,
    hi: f64,
}

impl LogInterp {
    /// Create a new interpolant for samples `y` taken at coordinates `x`.
    ///
    /// Both arrays must have equal length of at least 2, contain only finite,
    /// positive values, and `x` must be strictly increasing.
    pub fn new<S, T>(x: &Arr1<S>, y: &Arr1<T>) -> InterpResult<Self>
    where
        S: nd::Data<Elem = f64>,
        T: nd::Data<Elem = f64>,
    {
        LengthError::check(x, y)?;
        InterpError::check_len(x.len())?;
        check_increasing(x)?;
        let lx = log_samples(x)?;
        let ly = log_samples(y)?;
        let lo = x[0];
        let hi = x[x.len() - 1];
        Ok(Self { lx, ly, lo, hi })
    }

    /// Return the (inclusive) coordinate range covered by the samples.
    pub fn bounds(&self) -> (f64, f64) { (self.lo, self.hi) }

    /// Return `true` if `x` lies in the sampled coordinate range.
    pub fn contains(&self, x: f64) -> bool { x >= self.lo && x <= self.hi }

    /// Return the number of samples.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.lx.len() }

    // assumes `lo <= x <= hi`
    fn eval_unchecked(&self, x: f64) -> f64 {
        let n = self.lx.len();
        if x == self.hi { return self.ly[n - 1].exp(); }
        let l = x.ln();
        let k = self.lx.as_slice()
            .map(|lx| lx.partition_point(|lxk| *lxk <= l))
            .unwrap_or_else(|| self.lx.iter().take_while(|lxk| **lxk <= l).count());
        let k = k.clamp(1, n - 1);
        let (x0, x1) = (self.lx[k - 1], self.lx[k]);
        let (y0, y1) = (self.ly[k - 1], self.ly[k]);
        (y0 + (y1 - y0) * (l - x0) / (x1 - x0)).exp()
    }

    /// Evaluate the interpolant at a single point.
    pub fn eval(&self, x: f64) -> InterpResult<f64> {
        self.contains(x)
            .then(|| self.eval_unchecked(x))
            .ok_or(InterpError::Domain { x, lo: self.lo, hi: self.hi })
    }

    /// Evaluate the interpolant at a single point, first clamping it to the
    /// sampled coordinate range.
    ///
    /// A NaN input produces a NaN output.
    pub fn eval_clamped(&self, x: f64) -> f64 {
        self.eval_unchecked(x.clamp(self.lo, self.hi))
    }

    /// Evaluate the interpolant at each point in an array.
    pub fn eval_array<S>(&self, x: &Arr1<S>) -> InterpResult<nd::Array1<f64>>
    where S: nd::Data<Elem = f64>
    {
        x.iter().map(|xk| self.eval(*xk)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn power_law() -> LogInterp {
        let x: nd::Array1<f64> = nd::Array1::logspace(10.0, -3.0, 3.0, 61);
        let y = x.mapv(|xk| 0.5 * xk.powf(-0.75));
        LogInterp::new(&x, &y).unwrap()
    }

    #[test]
    fn exact_for_power_laws() {
        let f = power_law();
        for x in [2.5e-3, 2.5e-2, 0.7, 1.0, 13.0, 999.0] {
            assert_relative_eq!(
                f.eval(x).unwrap(), 0.5 * x.powf(-0.75), max_relative = 1e-10);
        }
    }

    #[test]
    fn endpoints_inclusive() {
        let f = power_law();
        let (lo, hi) = f.bounds();
        assert!(f.eval(lo).is_ok());
        assert!(f.eval(hi).is_ok());
        assert!(matches!(f.eval(lo * (1.0 - 1e-12)), Err(InterpError::Domain { .. })));
        assert!(matches!(f.eval(hi * (1.0 + 1e-12)), Err(InterpError::Domain { .. })));
        assert!(f.eval(f64::NAN).is_err());
    }

    #[test]
    fn clamped() {
        let f = power_law();
        let (lo, hi) = f.bounds();
        assert_relative_eq!(f.eval_clamped(lo / 10.0), f.eval(lo).unwrap());
        assert_relative_eq!(f.eval_clamped(hi * 10.0), f.eval(hi).unwrap());
    }

    #[test]
    fn rejects_bad_samples() {
        let x = nd::array![1.0, 2.0, 2.0, 3.0];
        let y = nd::array![1.0, 2.0, 3.0, 4.0];
        assert!(matches!(LogInterp::new(&x, &y), Err(InterpError::NotIncreasing(2))));

        let x = nd::array![1.0, 2.0, 3.0];
        assert!(matches!(LogInterp::new(&x, &y), Err(InterpError::Length(_))));

        let y = nd::array![1.0, -2.0, 3.0];
        assert!(matches!(LogInterp::new(&x, &y), Err(InterpError::NonPositive(1, _))));

        let x = nd::array![1.0];
        let y = nd::array![1.0];
        assert!(matches!(LogInterp::new(&x, &y), Err(InterpError::TooShort(1))));
    }

    #[test]
    fn array_eval() {
        let f = power_law();
        let x = nd::array![0.01, 0.1, 1.0];
        let y = f.eval_array(&x).unwrap();
        y.iter().zip(&x)
            .for_each(|(yk, xk)| {
                assert_relative_eq!(*yk, 0.5 * xk.powf(-0.75), max_relative = 1e-10);
            });
        assert!(f.eval_array(&nd::array![0.1, 1e4]).is_err());
    }
}
