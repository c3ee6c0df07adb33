//! Radial factor *R*<sub>*nl*</sub>(*r*) of the hydrogen eigenfunctions.
//!
//! With *ρ* = 2 *r* / (*n* *a*₀),
//! ```text
//! R(r) = C exp(-ρ/2) ρ^l L[n-l-1, 2l+1](ρ)
//!
//! C² = (2 / (n a₀))³ (n - l - 1)! / (2 n ((n + l)!)³)
//! ```
//! where *L*[*k*, *α*] is the generalized Laguerre polynomial of degree *k* and
//! parameter *α*.
//!
//! See [`docs`][crate::docs#radial-functions] for conventions.

use ndarray as nd;
use crate::{
    error::{ HError, QuantumError, RangeError },
    special::{ ln_factorial, ln_genlaguerre },
    wavefunction::HResult,
};

// scaled radii beyond which R is identically zero in double precision
const RHO_CUTOFF: f64 = 1e100;

/// Per-state constants of the radial function, computed once per call and
/// shared by every grid point.
#[derive(Copy, Clone, Debug)]
pub(crate) struct RadialParams {
    // ln of the normalization constant
    ln_c: f64,
    // Laguerre degree n - l - 1
    k: u32,
    // Laguerre parameter 2l + 1
    alpha: f64,
    // n * a0
    na: f64,
    l: i32,
}

impl RadialParams {
    pub(crate) fn new(a0: f64, n: i32, l: i32) -> HResult<Self> {
        QuantumError::check_length_scale(a0)?;
        QuantumError::check_principal(n)?;
        RangeError::check(n)?;
        QuantumError::check_azimuthal(n, l)?;
        let k = (n - l - 1) as u32;
        let na = n as f64 * a0;
        let ln_c = 0.5 * (
            3.0 * (2.0 / na).ln()
            + ln_factorial(k)
            - (2.0 * n as f64).ln()
            - 3.0 * ln_factorial((n + l) as u32)
        );
        Ok(Self { ln_c, k, alpha: (2 * l + 1) as f64, na, l })
    }

    /// The scaled radial coordinate ρ = 2r / (n a0).
    pub(crate) fn rho(&self, r: f64) -> f64 { 2.0 * r / self.na }

    /// Evaluate at a single radius.
    ///
    /// The normalization, exponential, power, and polynomial factors are all
    /// combined in log space before a single exponentiation, so that neither
    /// the tiny constants of high-`n` states nor the huge polynomial values in
    /// the far tail can overflow or underflow on their own.
    pub(crate) fn eval(&self, r: f64) -> f64 {
        let rho = self.rho(r);
        // exp(-ρ/2) wins over any polynomial factor long before this
        if !(rho < RHO_CUTOFF) { return 0.0; }
        let (sign, ln_lag) = ln_genlaguerre(self.k, self.alpha, rho);
        if sign == 0.0 { return 0.0; }
        if rho == 0.0 {
            if self.l == 0 { sign * (self.ln_c + ln_lag).exp() } else { 0.0 }
        } else {
            let ln_mag
                = self.ln_c - rho / 2.0 + self.l as f64 * rho.ln() + ln_lag;
            sign * ln_mag.exp()
        }
    }
}

/// Compute the normalized radial function *R*<sub>*nl*</sub>(*r*) for length
/// scale `a0` over an array of radial distances.
///
/// Quantum numbers and the length scale are checked before any evaluation:
/// `a0` must be finite and positive, `1 ≤ n ≤` [`MAX_N`][crate::MAX_N], and
/// `0 ≤ l ≤ n - 1`. All radii must be finite and non-negative.
///
/// ```
/// use ndarray as nd;
/// use hydrogen::radial::radial;
///
/// let r: nd::Array1<f64> = nd::Array1::linspace(0.0, 5.0, 6);
/// let R = radial(1.0, 1, 0, &r).unwrap();
/// // 1s: R = 2 exp(-r / a0)
/// assert!(R.iter().zip(&r).all(|(Rk, rk)| (Rk - 2.0 * (-rk).exp()).abs() < 1e-12));
/// ```
pub fn radial<S, D>(a0: f64, n: i32, l: i32, r: &nd::ArrayBase<S, D>)
    -> HResult<nd::Array<f64, D>>
where
    S: nd::Data<Elem = f64>,
    D: nd::Dimension,
{
    let params = RadialParams::new(a0, n, l)?;
    HError::check_radii(r)?;
    Ok(r.mapv(|rk| params.eval(rk)))
}

/// Compute the radial probability distribution *r*² *R*<sub>*nl*</sub>(*r*)²,
/// i.e. the probability per unit radius of finding the electron at distance
/// *r* from the nucleus.
pub fn radial_distribution<S, D>(
    a0: f64,
    n: i32,
    l: i32,
    r: &nd::ArrayBase<S, D>,
) -> HResult<nd::Array<f64, D>>
where
    S: nd::Data<Elem = f64>,
    D: nd::Dimension,
{
    let params = RadialParams::new(a0, n, l)?;
    HError::check_radii(r)?;
    Ok(r.mapv(|rk| (rk * params.eval(rk)).powi(2)))
}
