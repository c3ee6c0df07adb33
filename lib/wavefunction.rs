//! Composition of the radial and angular factors into full wavefunctions
//! sampled over Cartesian grids.
//!
//! In the plane, the polar axis is taken to be the grid's `y` axis, so that
//! *θ* = atan2(*x*, *y*) and *φ* = 0 everywhere. The azimuthal phase then
//! collapses to 1 and the planar wavefunction is real.

use ndarray as nd;
use num_complex::Complex64 as C64;
use crate::{
    Arr2,
    angular::{ AngularParams, angular },
    error::{ HError, ShapeError, check_state },
    radial::{ RadialParams, radial },
};

pub type HResult<T> = Result<T, HError>;

/// Polar coordinates `(r, θ)` of every point of a planar grid.
#[derive(Clone, Debug)]
pub struct PolarGrid {
    /// Distance from the origin, always ≥ 0.
    pub r: nd::Array2<f64>,
    /// Angle from the positive `y` axis, in `[-π, π]`.
    pub theta: nd::Array2<f64>,
}

impl PolarGrid {
    /// Convert Cartesian coordinate arrays to polar coordinates.
    ///
    /// The angle is computed with a two-argument arctangent and is well-defined
    /// everywhere, including along the polar axis and at the origin.
    pub fn from_cartesian<S, T>(x: &Arr2<S>, y: &Arr2<T>) -> HResult<Self>
    where
        S: nd::Data<Elem = f64>,
        T: nd::Data<Elem = f64>,
    {
        ShapeError::check(x, y)?;
        let r: nd::Array2<f64>
            = nd::Zip::from(x).and(y).map_collect(|xk, yk| xk.hypot(*yk));
        let theta: nd::Array2<f64>
            = nd::Zip::from(x).and(y).map_collect(|xk, yk| xk.atan2(*yk));
        Ok(Self { r, theta })
    }

    /// Get the common shape of the coordinate arrays.
    pub fn dim(&self) -> (usize, usize) { self.r.dim() }
}

/// Compute the planar wavefunction *ψ* = *R*<sub>*nl*</sub>(*r*)
/// *Y*<sub>*lm*</sub>(*θ*, 0) over Cartesian coordinate arrays `x` and `y`.
///
/// `a0` is used exactly as given (see [`units`][crate::units] to derive it from
/// physical constants). All quantum numbers are validated before any array is
/// touched.
///
/// ```
/// use ndarray as nd;
/// use hydrogen::wavefunction::compose;
///
/// let x = nd::array![[0.0, 1.0], [0.0, 1.0]];
/// let y = nd::array![[0.0, 0.0], [1.0, 1.0]];
/// let psi = compose(1.0, 2, 1, 0, &x, &y).unwrap();
/// // 2p lies along the y axis: no amplitude in the equatorial direction
/// assert_eq!(psi[[0, 0]], 0.0);
/// assert!(psi[[0, 1]].abs() < 1e-16);
/// assert!(psi[[1, 0]] > 0.0);
/// ```
pub fn compose<S, T>(a0: f64, n: i32, l: i32, m: i32, x: &Arr2<S>, y: &Arr2<T>)
    -> HResult<nd::Array2<f64>>
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
{
    check_state(n, l, m)?;
    RadialParams::new(a0, n, l)?;
    let polar = PolarGrid::from_cartesian(x, y)?;
    log::debug!(
        "wavefunction::compose: (n, l, m) = ({}, {}, {}), a0 = {}, grid {:?}",
        n, l, m, a0, polar.dim(),
    );
    let mut psi = radial(a0, n, l, &polar.r)?;
    let Y = angular(l, m, &polar.theta, 0.0)?;
    psi *= &Y;
    Ok(psi)
}

/// Compute the complex wavefunction *ψ* = *R*<sub>*nl*</sub>(*r*)
/// *Y*<sub>*lm*</sub>(*θ*, *φ*) over three Cartesian coordinate arrays, with the
/// usual conventions of *z* as the polar axis and *φ* measured from *x*.
///
/// This keeps the full azimuthal phase, so the result is complex for `m ≠ 0`.
/// Pass arrays describing any 2D surface through space (e.g. a tilted plane) to
/// obtain a slice that is not restricted to containing the polar axis.
pub fn compose_spatial<S, T, U>(
    a0: f64,
    n: i32,
    l: i32,
    m: i32,
    x: &Arr2<S>,
    y: &Arr2<T>,
    z: &Arr2<U>,
) -> HResult<nd::Array2<C64>>
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
    U: nd::Data<Elem = f64>,
{
    check_state(n, l, m)?;
    let rad = RadialParams::new(a0, n, l)?;
    let ang = AngularParams::new(l, m)?;
    ShapeError::check(x, y)?;
    ShapeError::check(x, z)?;
    log::debug!(
        "wavefunction::compose_spatial: (n, l, m) = ({}, {}, {}), a0 = {}, grid {:?}",
        n, l, m, a0, x.dim(),
    );
    let psi: nd::Array2<C64>
        = nd::Zip::from(x).and(y).and(z)
        .map_collect(|xk, yk, zk| {
            let rho = xk.hypot(*yk);
            let r = rho.hypot(*zk);
            let theta = rho.atan2(*zk);
            let phi = yk.atan2(*xk);
            ang.phase(phi) * (rad.eval(r) * ang.polar(theta))
        });
    Ok(psi)
}
