//! Theoretical background.
//!
//! # Contents
//! - [Background](#background)
//! - [Characteristic units](#characteristic-units)
//! - [Blast wave law](#blast-wave-law)
//! - [Inversion](#inversion)
//!
//! # Background
//! After a supernova explosion, ejecta of mass *M* and kinetic energy *E* expand
//! into the surrounding medium, driving a forward shock ahead of them. The
//! outer ejecta are well described by a steep power law in velocity,
//! ```text
//! ρ_ej(v, t) ∝ t⁻³ v⁻ⁿ
//! ```
//! with *n* typically between 6 and 14, surrounding a flatter core. The ambient
//! medium is taken to be a power law in radius,
//! ```text
//! ρ_amb(r) = q r⁻ˢ
//! ```
//! with *s* = 0 for a uniform medium (*q* = *ρ*₀) and *s* = 2 for a steady wind
//! blown by the progenitor (*q* = *ρ*₀ *r*<sub>ref</sub>², with *ρ*₀ the
//! density at some reference radius *r*<sub>ref</sub>).
//!
//! At early times, while the swept-up mass is small compared to *M*, the
//! interaction between the outer ejecta and the ambient medium is
//! self-similar[^1] and the shock radius grows as
//! ```text
//!      (n - 3)/(n - s)
//! R ∝ t
//! ```
//! Once the swept-up mass greatly exceeds *M*, the remnant approaches the
//! Sedov-Taylor solution for a point explosion,
//! ```text
//!          1/(5 - s)
//!     ξ E t²
//! R = (------)
//!     (  q   )
//! ```
//! where *ξ* is a constant fixed by the adiabatic index and *s*; for an
//! adiabatic index of 5/3, *ξ* = 2.026 when *s* = 0 and *ξ* = 3/2π when *s* = 2.
//!
//! # Characteristic units
//! The only dimensional quantities in the problem are *E*, *M*, and *q*, from
//! which unique length and time scales can be formed[^2]:
//! ```text
//!          1/(3 - s)
//! R_ch = (M/q)
//!
//!           -1/2  (5 - s)/(2(3 - s))  -1/(3 - s)
//! t_ch = E      M                    q
//! ```
//! For *s* = 0 and *n*₀ = 1 cm⁻³ (*ρ*₀ = 1.4 *m*<sub>H</sub> *n*₀), *M* = 1 M☉,
//! and *E* = 10⁵¹ erg, these are *R*<sub>ch</sub> ≈ 3.07 pc and
//! *t*<sub>ch</sub> ≈ 423 yr. In the normalized variables *R** = *R* /
//! *R*<sub>ch</sub> and *t** = *t* / *t*<sub>ch</sub>, the Sedov-Taylor solution
//! becomes *R** = *ξ*<sup>1/(5 - s)</sup> *t**<sup>2/(5 - s)</sup>, independent
//! of all physical parameters.
//!
//! Items in [`units`][crate::units] are provided to handle the minutiae
//! associated with conversion to and from these units. Shock speeds are
//! converted using *R*<sub>ch</sub> / *t*<sub>ch</sub> and then from cm/s to
//! km/s.
//!
//! # Blast wave law
//! Tang & Chevalier[^3] join the two limiting solutions by summing the times,
//! rather than the radii, at which each would reach a given radius:
//! ```text
//!                   a ζ             b ζ  1/ζ
//! t*(R*) = [ (R*/α)      + (R*/c)      ]
//!
//! a = (n - s) / (n - 3)
//! b = (5 - s) / 2
//! c = ξ^(1/(5 - s))
//! ```
//! The ejecta-dominated normalization *α* and transition sharpness *ζ* depend
//! on *n* and *s*, and are tabulated in [`coeffs`][crate::coeffs]. The shock
//! speed follows by differentiation:
//! ```text
//!                          -1        ζ - 1
//!         dR*    ( dt* )         R* t*
//! v*  =  ---- =  (----)    =  -------------
//!         dt*    ( dR* )       a X + b Y
//!
//! X = (R*/α)^(a ζ)
//! Y = (R*/c)^(b ζ)
//! ```
//! as does the expansion parameter
//! ```text
//!     d ln R*    v* t*    X + Y
//! m = ------- =  ----- = ---------
//!     d ln t*     R*     a X + b Y
//! ```
//! which falls from (*n* - 3)/(*n* - *s*) to 2/(5 - *s*) as the remnant
//! decelerates. The two terms are equal at the radius
//! ```text
//!               a ln α - b ln c
//! ln R*_tr  =  ---------------
//!                   a - b
//! ```
//! which is used to mark the transition between the two phases.
//!
//! # Inversion
//! The law does not admit a closed-form expression for *R**(*t**). Because
//! *t**(*R**) is strictly increasing, it can instead be sampled over a dense,
//! logarithmically spaced grid of radii spanning several decades (by default
//! 10⁻⁵ ≤ *R** ≤ 10², see [`RadiusGrid`][crate::evolution::RadiusGrid]) and the
//! sampled radii and speeds interpolated as functions of the sampled times.
//! Since both limiting solutions are power laws, the interpolation is performed
//! linearly in log-log space, which is exact in either limit.
//!
//! The inversion is only valid within the range of sampled times; ages outside
//! of this range are rejected by default, or optionally clamped (see
//! [`RangePolicy`][crate::evolution::RangePolicy]).
//!
//! [^1]: R. A. Chevalier, "Self-similar solutions for the interaction of stellar
//! ejecta with an external medium." ApJ **258** 790 (1982).
//!
//! [^2]: J. K. Truelove and C. F. McKee, "Evolution of nonradiative supernova
//! remnants." ApJS **120** 299 (1999).
//!
//! [^3]: X. Tang and R. A. Chevalier, "Shock evolution in non-radiative
//! supernova remnants" (2016).
