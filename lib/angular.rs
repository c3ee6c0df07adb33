//! Angular factor *Y*<sub>*lm*</sub>(*θ*, *φ*) of the hydrogen eigenfunctions.
//!
//! ```text
//! Y(θ, φ) = C P_l^m(cos θ) exp(i m φ)
//!
//! C = (-1)^m √( (2l + 1) (l - m)! / (4π (l + m)!) )
//! ```
//! where *P*<sub>*l*</sub><sup>*m*</sup> is the associated Legendre function,
//! itself carrying the Condon-Shortley phase.

use std::f64::consts::PI;
use ndarray as nd;
use num_complex::Complex64 as C64;
use crate::{
    error::{ QuantumError, RangeError, ShapeError },
    special::{ ln_factorial, lpmv },
    wavefunction::HResult,
};

/// Per-state constants of the angular function.
#[derive(Copy, Clone, Debug)]
pub(crate) struct AngularParams {
    // normalization constant, including (-1)^m
    c: f64,
    l: u32,
    m: i32,
}

impl AngularParams {
    pub(crate) fn new(l: i32, m: i32) -> HResult<Self> {
        QuantumError::check_nonneg_azimuthal(l)?;
        RangeError::check_azimuthal(l)?;
        QuantumError::check_magnetic(l, m)?;
        let lu = l as u32;
        let ln_ratio
            = ln_factorial((l - m) as u32) - ln_factorial((l + m) as u32);
        let sign = if m.rem_euclid(2) == 0 { 1.0 } else { -1.0 };
        let c = sign
            * ((2 * l + 1) as f64 / (4.0 * PI)).sqrt()
            * (0.5 * ln_ratio).exp();
        Ok(Self { c, l: lu, m })
    }

    /// The θ-dependent part, `C P_l^m(cos θ)`.
    pub(crate) fn polar(&self, theta: f64) -> f64 {
        self.c * lpmv(self.m, self.l, theta.cos())
    }

    /// The azimuthal phase `exp(i m φ)`.
    pub(crate) fn phase(&self, phi: f64) -> C64 {
        C64::from_polar(1.0, self.m as f64 * phi)
    }
}

/// Compute the real-valued angular function
/// *C* *P*<sub>*l*</sub><sup>*m*</sup>(cos *θ*) Re(*e*<sup>*imφ*</sup>) over
/// an array of polar angles at a single azimuth `phi`.
///
/// Holding `phi` fixed reduces the complex azimuthal phase to the real factor
/// cos(*m* *φ*); this is what a planar slice of the orbital displays. See
/// [`angular_complex`] for the full function.
///
/// Requires `0 ≤ l ≤ MAX_N - 1` and `|m| ≤ l`.
///
/// ```
/// use std::f64::consts::PI;
/// use ndarray as nd;
/// use hydrogen::angular::angular;
///
/// let theta: nd::Array1<f64> = nd::Array1::linspace(0.0, PI, 7);
/// let Y = angular(0, 0, &theta, 0.0).unwrap();
/// let y00 = (4.0 * PI).sqrt().recip();
/// assert!(Y.iter().all(|Yk| (Yk - y00).abs() < 1e-15));
/// ```
pub fn angular<S, D>(l: i32, m: i32, theta: &nd::ArrayBase<S, D>, phi: f64)
    -> HResult<nd::Array<f64, D>>
where
    S: nd::Data<Elem = f64>,
    D: nd::Dimension,
{
    let params = AngularParams::new(l, m)?;
    let re_phase = params.phase(phi).re;
    Ok(theta.mapv(|th| params.polar(th) * re_phase))
}

/// Compute the complex angular function (spherical harmonic)
/// *C* *P*<sub>*l*</sub><sup>*m*</sup>(cos *θ*) *e*<sup>*imφ*</sup> with both
/// angles given as arrays of the same shape.
pub fn angular_complex<S, T, D>(
    l: i32,
    m: i32,
    theta: &nd::ArrayBase<S, D>,
    phi: &nd::ArrayBase<T, D>,
) -> HResult<nd::Array<C64, D>>
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
    D: nd::Dimension,
{
    let params = AngularParams::new(l, m)?;
    ShapeError::check(theta, phi)?;
    let Y: nd::Array<C64, D>
        = nd::Zip::from(theta).and(phi)
        .map_collect(|th, ph| params.phase(*ph) * params.polar(*th));
    Ok(Y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use crate::{ error::HError, utils::trapz };

    #[test]
    fn s_is_isotropic() {
        let theta: nd::Array2<f64>
            = nd::Array2::from_shape_fn((5, 9), |(i, j)| (i * 9 + j) as f64 * 0.1 - 2.0);
        let Y = angular(0, 0, &theta, 0.0).unwrap();
        let y00 = (4.0 * PI).sqrt().recip();
        assert!(Y.iter().all(|Yk| (Yk - y00).abs() < 1e-15));
    }

    #[test]
    fn p_orbitals() {
        let theta: nd::Array1<f64> = nd::Array1::linspace(0.0, PI, 37);
        let Y10 = angular(1, 0, &theta, 0.0).unwrap();
        let Y11 = angular(1, 1, &theta, 0.0).unwrap();
        let c10 = (3.0 / (4.0 * PI)).sqrt();
        let c11 = (3.0 / (8.0 * PI)).sqrt();
        for ((th, a), b) in theta.iter().zip(&Y10).zip(&Y11) {
            assert_relative_eq!(*a, c10 * th.cos(), epsilon = 1e-14);
            assert_relative_eq!(*b, c11 * th.sin(), epsilon = 1e-14);
        }
    }

    #[test]
    fn azimuth_projection() {
        let theta = nd::array![PI / 2.0];
        let Y = angular(2, 2, &theta, PI / 4.0).unwrap();
        // cos(2 φ) = 0 at φ = π/4
        assert!(Y[0].abs() < 1e-15);
        let Yc = angular_complex(2, 2, &theta, &nd::array![PI / 4.0]).unwrap();
        assert_relative_eq!(Yc[0].re, 0.0, epsilon = 1e-15);
        assert!(Yc[0].im.abs() > 0.1);
    }

    #[test]
    fn normalized_on_sphere() {
        // 2π ∫ |C P_l^m(cos θ)|² sin θ dθ = 1
        let theta: nd::Array1<f64> = nd::Array1::linspace(0.0, PI, 20001);
        let dtheta = theta[1] - theta[0];
        for l in 0..=4 {
            for m in -l..=l {
                let phi: nd::Array1<f64> = nd::Array1::zeros(theta.len());
                let Y = angular_complex(l, m, &theta, &phi).unwrap();
                let integrand: nd::Array1<f64>
                    = Y.iter().zip(&theta)
                    .map(|(Yk, th)| Yk.norm_sqr() * th.sin())
                    .collect();
                let norm = 2.0 * PI * trapz(&integrand, dtheta);
                assert_relative_eq!(norm, 1.0, max_relative = 1e-6);
            }
        }
    }

    #[test]
    fn conjugate_symmetry() {
        // Y_l^{-m} = (-1)^m conj(Y_l^m)
        let theta: nd::Array1<f64> = nd::Array1::linspace(0.1, 3.0, 11);
        let phi: nd::Array1<f64> = nd::Array1::linspace(-2.0, 2.0, 11);
        for m in 1..=3 {
            let yp = angular_complex(3, m, &theta, &phi).unwrap();
            let ym = angular_complex(3, -m, &theta, &phi).unwrap();
            let sign = if m % 2 == 0 { 1.0 } else { -1.0 };
            for (a, b) in yp.iter().zip(&ym) {
                assert_relative_eq!(b.re, sign * a.conj().re, epsilon = 1e-12);
                assert_relative_eq!(b.im, sign * a.conj().im, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn rejects_before_evaluating() {
        let theta = nd::array![0.0, 1.0];
        assert!(matches!(
            angular(1, 2, &theta, 0.0),
            Err(HError::Quantum(QuantumError::BadMagnetic { l: 1, m: 2 }))
        ));
        assert!(matches!(
            angular(-1, 0, &theta, 0.0),
            Err(HError::Quantum(QuantumError::NegativeAzimuthal(-1)))
        ));
        assert!(matches!(angular(30, 0, &theta, 0.0), Err(HError::Range(_))));
        assert!(matches!(
            angular_complex(1, 0, &theta, &nd::array![0.0]),
            Err(HError::Shape(_))
        ));
    }

    #[test]
    fn top_of_range_is_finite() {
        let theta: nd::Array1<f64> = nd::Array1::linspace(0.0, PI, 181);
        for &m in [-29, -1, 0, 14, 29].iter() {
            let Y = angular(29, m, &theta, 0.0).unwrap();
            assert!(Y.iter().all(|Yk| Yk.is_finite()), "m = {}", m);
        }
    }
}
