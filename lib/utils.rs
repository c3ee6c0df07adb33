//! Miscellaneous tools.

use ndarray::{ self as nd, Ix1, Ix2 };
use num_traits::Float;
use crate::{
    radial::radial_distribution,
    wavefunction::HResult,
};

/// Integrate using the trapezoidal rule.
///
/// *Panics if `y` has length less than 2*.
pub fn trapz<S, A>(y: &nd::ArrayBase<S, Ix1>, dx: A) -> A
where
    S: nd::Data<Elem = A>,
    A: Float,
{
    let n: usize = y.len();
    let two = A::one() + A::one();
    let inner = y.slice(nd::s![1..n - 1]).iter()
        .fold(A::zero(), |acc, yk| acc + *yk);
    (dx / two) * (y[0] + two * inner + y[n - 1])
}

/// Integrate a 2D array sampled on a uniform grid using the trapezoidal rule
/// along both axes, with `dy` the spacing along the first axis and `dx` the
/// spacing along the second.
///
/// *Panics if either axis has length less than 2*.
pub fn trapz2<S, A>(z: &nd::ArrayBase<S, Ix2>, dx: A, dy: A) -> A
where
    S: nd::Data<Elem = A>,
    A: Float,
{
    let rows: nd::Array1<A>
        = z.rows().into_iter()
        .map(|row| trapz(&row, dx))
        .collect();
    trapz(&rows, dy)
}

/// Compute ∫ *r*² *R*<sub>*nl*</sub>(*r*)² d*r* over `[0, r_max]` with
/// `npoints` samples.
///
/// For the radial functions produced by [`radial`][crate::radial::radial] this
/// converges to 1 / ((*n* + *l*)!)² as `r_max` grows, which is the
/// normalization convention they carry.
///
/// *Panics if `npoints` is less than 2*.
pub fn radial_norm(a0: f64, n: i32, l: i32, r_max: f64, npoints: usize)
    -> HResult<f64>
{
    let r: nd::Array1<f64> = nd::Array1::linspace(0.0, r_max, npoints);
    let dr = r[1] - r[0];
    let p = radial_distribution(a0, n, l, &r)?;
    Ok(trapz(&p, dr))
}
