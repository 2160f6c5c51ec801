//! Tabulated fit constants for the ejecta-dominated to Sedov-Taylor blast wave
//! law.
//!
//! Each supported ejecta slope *n* maps to a pair (*α*, *ζ*): *α* normalizes
//! the ejecta-dominated radius `R* = α t*^((n - 3)/(n - s))` and *ζ* sets the
//! sharpness of the transition to the Sedov-Taylor phase. See
//! [`docs`][crate::docs#blast-wave-law].
//!
//! *α* follows from the self-similar driven-wave constants of Chevalier
//! (1982) for a flat-core, power-law-envelope ejecta profile; for a uniform
//! medium and `n = 7` it reproduces the `R* = 1.06 t*^(4/7)` of Truelove &
//! McKee (1999). *ζ* has no closed form and the values below have not been
//! checked against Table 1 of Tang & Chevalier (2017, MNRAS 465, 3793). Pass
//! the published constants to
//! [`ShockModel::with_coefficients`][crate::evolution::ShockModel::with_coefficients]
//! where they are needed exactly.

/// Fit constants for a single ejecta slope.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Coefficients {
    /// Ejecta-dominated radius normalization.
    pub alpha: f64,
    /// Transition sharpness.
    pub zeta: f64,
}

/// A read-only mapping from ejecta slope to [`Coefficients`].
#[derive(Copy, Clone, Debug)]
pub struct CoefficientTable(&'static [(u32, Coefficients)]);

const fn c(alpha: f64, zeta: f64) -> Coefficients { Coefficients { alpha, zeta } }

/// Constants for a uniform ambient medium (`s = 0`).
pub static UNIFORM: CoefficientTable = CoefficientTable(&[
    ( 6, c(1.047, 1.60)),
    ( 7, c(1.055, 1.53)),
    ( 8, c(1.083, 1.47)),
    ( 9, c(1.115, 1.42)),
    (10, c(1.147, 1.38)),
    (12, c(1.209, 1.32)),
    (14, c(1.262, 1.28)),
]);

/// Constants for a steady-wind ambient medium (`s = 2`).
pub static WIND: CoefficientTable = CoefficientTable(&[
    ( 6, c(0.747, 1.22)),
    ( 7, c(0.823, 1.18)),
    ( 8, c(0.898, 1.14)),
    ( 9, c(0.969, 1.11)),
    (10, c(1.033, 1.09)),
    (12, c(1.144, 1.06)),
    (14, c(1.239, 1.04)),
]);

impl CoefficientTable {
    /// Look up the constants for ejecta slope `n`, if tabulated.
    pub fn get(&self, n: u32) -> Option<Coefficients> {
        self.0.iter()
            .find(|(nk, _)| *nk == n)
            .map(|(_, coeffs)| *coeffs)
    }

    /// Return `true` if `n` is tabulated.
    pub fn contains(&self, n: u32) -> bool { self.get(n).is_some() }

    /// Iterate over all tabulated slopes in increasing order.
    pub fn slopes(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().map(|(n, _)| *n)
    }

    /// Iterate over all entries.
    pub fn iter(&self) -> impl Iterator<Item = (u32, Coefficients)> + '_ {
        self.0.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supported_slopes() {
        let expected = [6, 7, 8, 9, 10, 12, 14];
        for table in [&UNIFORM, &WIND] {
            assert_eq!(table.slopes().collect::<Vec<_>>(), expected);
            assert!(!table.contains(11));
            assert!(!table.contains(5));
            assert!(table.iter().all(|(_, k)| k.alpha > 0.0 && k.zeta > 0.0));
        }
    }

    #[test]
    fn lookup() {
        assert_eq!(UNIFORM.get(9), Some(Coefficients { alpha: 1.115, zeta: 1.42 }));
        assert_eq!(WIND.get(9), Some(Coefficients { alpha: 0.969, zeta: 1.11 }));
        assert_eq!(WIND.get(11), None);
    }
}
