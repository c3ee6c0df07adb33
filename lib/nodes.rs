//! Location of nodes in sampled functions via Lagrange interpolation, and of
//! radial nodes in particular.
//!
//! ```
//! use hydrogen::nodes::radial_nodes;
//!
//! // the 2s node sits at r = 2 a0
//! let nodes = radial_nodes(1.0, 2, 0, 40.0, 4000).unwrap();
//! assert_eq!(nodes.len(), 1);
//! assert!((nodes[0] - 2.0).abs() < 1e-6);
//! ```

use std::cmp;
use ndarray as nd;
use num_traits::Float;
use crate::{
    error::*,
    radial::radial,
    wavefunction::HResult,
};

pub type InterpResult<T> = Result<T, InterpError>;

/// Specifies a set of zeros to look for in [`find_zeros`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Zero {
    /// Points at which a function changes from positive to negative.
    Falling,
    /// Points at which a function changes from negative to positive.
    Rising,
    /// Either/both of the above.
    All,
}

impl Zero {
    fn matches<A>(&self, a: &A, b: &A) -> bool
    where A: PartialOrd
    {
        match self {
            Self::Falling if a > b => true,
            Self::Rising if a < b => true,
            Self::All if a != b => true,
            _ => false,
        }
    }
}

/// Compute the value of a sampled function at `x` via a Lagrange polynomial
/// through all given points.
pub fn lagrange<S, T, A>(
    data_x: &nd::ArrayBase<S, nd::Ix1>,
    data_y: &nd::ArrayBase<T, nd::Ix1>,
    x: A,
) -> InterpResult<A>
where
    S: nd::Data<Elem = A>,
    T: nd::Data<Elem = A>,
    A: Float,
{
    LengthError::check(data_x, data_y)?;
    let res: A
        = data_x.iter().zip(data_y).enumerate()
        .map(|(j, (&xj, &yj))| {
            let basis
                = data_x.iter().enumerate()
                .filter(|(k, _)| *k != j)
                .map(|(_, &xk)| (x - xk) / (xj - xk))
                .fold(A::one(), |acc, f| acc * f);
            yj * basis
        })
        .fold(A::zero(), |acc, t| acc + t);
    Ok(res)
}

/// Return a list of all zeros of a given kind in a sampled function.
///
/// Each sign change is refined by inverse interpolation over the four nearest
/// samples, so the function must be locally invertible on the scale of a few
/// grid points.
pub fn find_zeros<S, T, A>(
    data_x: &nd::ArrayBase<S, nd::Ix1>,
    data_y: &nd::ArrayBase<T, nd::Ix1>,
    kind: Zero,
) -> InterpResult<Vec<A>>
where
    S: nd::Data<Elem = A>,
    T: nd::Data<Elem = A>,
    A: Float,
{
    LengthError::check(data_x, data_y)?;
    LagrangeError::check(data_x)?;
    let n = data_x.len();
    let z = A::zero();
    data_x.iter().zip(data_y).skip(1)
        .zip(data_y)
        .enumerate()
        .filter_map(|(i, ((&xi, &yi), &yim1))| {
            // i indexes the sample *before* (xi, yi)
            if yi == z {
                Some(Ok(xi))
            } else if yim1 != z && yi * yim1 < z && kind.matches(&yim1, &yi) {
                let il = i.saturating_sub(1);
                let ir = cmp::min(n, i + 3);
                if ir - il < 4 {
                    log::warn!(
                        "nodes::find_zeros: attempting to interpolate near an \
                        edge of the given data; some accuracy may be lost"
                    );
                }
                Some(lagrange(
                    &data_y.slice(nd::s![il..ir]),
                    &data_x.slice(nd::s![il..ir]),
                    z,
                ))
            } else {
                None
            }
        })
        .collect()
}

/// Locate the radial nodes of *R*<sub>*nl*</sub> on `(0, r_max]`, sampling the
/// radial function at `npoints` points.
///
/// A sufficiently large `r_max` and fine sampling return exactly
/// `n - l - 1` nodes. Fewer than six samples leave too few points away from
/// the origin to interpolate, and produce a [`LagrangeError`].
pub fn radial_nodes(a0: f64, n: i32, l: i32, r_max: f64, npoints: usize)
    -> HResult<Vec<f64>>
{
    let r: nd::Array1<f64> = nd::Array1::linspace(0.0, r_max, npoints);
    let R = radial(a0, n, l, &r)?;
    // skip the origin, where R vanishes identically for l > 0
    let i0 = cmp::min(1, npoints);
    let nodes = find_zeros(
        &r.slice(nd::s![i0..]),
        &R.slice(nd::s![i0..]),
        Zero::All,
    )?;
    Ok(nodes)
}
