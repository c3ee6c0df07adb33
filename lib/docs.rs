//! Theoretical background.
//!
//! # Contents
//! - [Background](#background)
//! - [Radial functions](#radial-functions)
//! - [Angular functions](#angular-functions)
//! - [Planar slices](#planar-slices)
//! - [Units](#units)
//! - [Supported range](#supported-range)
//!
//! # Background
//! For a single electron bound to a point nucleus, the time-independent
//! Schrödinger equation
//! ```text
//!    ħ²
//! - --- ∇²ψ - (Z e² / 4π ε₀ r) ψ = E ψ
//!   2 μ
//! ```
//! separates in spherical coordinates (*r*, *θ*, *φ*) into
//! ```text
//! ψ(r, θ, φ) = R[n, l](r) Y[l, m](θ, φ)
//! ```
//! with integer quantum numbers *n* ≥ 1, 0 ≤ *l* ≤ *n* - 1, and
//! |*m*| ≤ *l*. Here *μ* = *m*<sub>e</sub> *M* / (*m*<sub>e</sub> + *M*) is the
//! reduced mass of the electron-nucleus pair, which enters only through the
//! length scale
//! ```text
//!      4π ε₀ ħ²
//! a = ----------
//!      μ Z e²
//! ```
//! This crate evaluates the closed-form solution directly; nothing is solved
//! numerically.
//!
//! # Radial functions
//! With *ρ* = 2 *r* / (*n* *a*),
//! ```text
//! R[n, l](r) = C exp(-ρ/2) ρ^l L[n-l-1, 2l+1](ρ)
//! ```
//! where *L*[*k*, *α*] is the generalized Laguerre polynomial in its modern
//! normalization,
//! ```text
//!            k            (k + α)!
//! L[k, α](x) = Σ (-1)^j ---------------- x^j
//!           j=0       (k - j)! (α + j)! j!
//! ```
//! evaluated here by forward recurrence. The normalization constant is taken to
//! be
//! ```text
//!      ⎛  2  ⎞³  (n - l - 1)!
//! C² = ⎜-----⎟  ---------------
//!      ⎝ n a ⎠  2n ((n + l)!)³
//! ```
//! which is the textbook constant written for the older Laguerre convention
//! (where *L* carries an extra factor of (*n* + *l*)!). Combined with the
//! modern polynomials, the resulting radial functions integrate to
//! ```text
//! ∫ r² R² dr = 1 / ((n + l)!)²
//! ```
//! rather than 1. Since every image is rendered from a single state and
//! rescaled for display, this has no visible effect; [`radial_norm`] computes
//! the integral for callers that need absolute values.
//!
//! *R* has exactly *n* - *l* - 1 nodes for *r* > 0 and behaves as *r*<sup>*l*</sup>
//! near the origin.
//!
//! # Angular functions
//! ```text
//! Y[l, m](θ, φ) = C' P[l, m](cos θ) exp(i m φ)
//!
//!               ┌─────────────────────────┐
//! C' = (-1)^m  ╱ (2l + 1) (l - m)!
//!             ╱  --------------------
//!            ╲╱    4π (l + m)!
//! ```
//! where *P*[*l*, *m*] is the associated Legendre function including the
//! Condon-Shortley phase (-1)<sup>*m*</sup>. The two phase factors cancel, so
//! that e.g. *Y*[1, 1] ∝ +sin *θ* exp(*iφ*). Negative orders follow from
//! ```text
//! P[l, -m](x) = (-1)^m (l - m)! / (l + m)! P[l, m](x)
//! ```
//! and satisfy *Y*[*l*, -*m*] = (-1)<sup>*m*</sup> conj(*Y*[*l*, *m*]). These
//! functions are unit-normalized over the sphere.
//!
//! # Planar slices
//! Images are planar. [`compose`] samples the plane containing the polar axis,
//! which is drawn vertically: for a grid point (*x*, *y*),
//! ```text
//! r = √(x² + y²),   θ = atan2(x, y),   φ = 0
//! ```
//! The two-argument arctangent is regular everywhere, including on the polar
//! axis and at the origin. With *φ* fixed, exp(*imφ*) reduces to the real
//! factor cos(*mφ*) = 1 and the planar wavefunction is real. Reflection
//! *x* → -*x* only flips the sign of *θ*, which leaves cos *θ* and hence the
//! density unchanged; the left and right halves of every image are mirror
//! images.
//!
//! For slices in any other orientation, [`compose_spatial`] evaluates the full
//! complex wavefunction on arbitrary (*x*, *y*, *z*) arrays in the standard
//! convention (*z* polar, *φ* measured from *x*).
//!
//! # Units
//! Every function takes its length scale explicitly. Grids are usually laid out
//! in "display units" in which one unit is one pixel; the conversion from meters
//! is the single constant [`VIEW_SCALE`] = 10¹¹, giving a Bohr radius of about
//! 5.3 display units ([`BOHR_VIEW`]).
//!
//! # Supported range
//! Factorials only enter through ratios and are evaluated as differences of
//! log-gamma values. The Laguerre recurrence is carried with a running log
//! scale, and every factor of the radial function is combined in log space
//! before a single exponentiation, so the far tail of a high-*n* state
//! underflows cleanly to zero instead of meeting an overflowing polynomial.
//! For *n* ≤ [`MAX_N`] = 30 the remaining values (Legendre functions and
//! their normalizations) are comfortably within double-precision range;
//! larger *n* is rejected with a [`RangeError`].
//!
//! Both polynomial families are evaluated from their three-term recurrences
//! and checked against closed forms and tabulated values up to degree 29.
//!
//! [`radial_norm`]: crate::utils::radial_norm
//! [`compose`]: crate::wavefunction::compose
//! [`compose_spatial`]: crate::wavefunction::compose_spatial
//! [`VIEW_SCALE`]: crate::units::VIEW_SCALE
//! [`BOHR_VIEW`]: crate::units::BOHR_VIEW
//! [`MAX_N`]: crate::MAX_N
//! [`RangeError`]: crate::error::RangeError
