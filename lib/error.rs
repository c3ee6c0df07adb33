//! Collection of all error types.
//!
//! All errors derive [`thiserror::Error`], making them composable when allowed
//! and compatible with application code using [`anyhow`][anyhow].
//!
//! [anyhow]: https://crates.io/crates/anyhow

use ndarray as nd;
use thiserror::Error;
use crate::{ MAX_N, MAX_STRETCH };

/// Returned when a set of quantum numbers or a length scale violates the
/// constraints of a bound hydrogen state.
///
/// These are always raised before any array computation takes place.
#[derive(Copy, Clone, Debug, PartialEq, Error)]
pub enum QuantumError {
    /// The principal quantum number must satisfy `n ≥ 1`.
    #[error("principal quantum number must satisfy n >= 1; got n = {0}")]
    BadPrincipal(i32),

    /// The azimuthal quantum number must satisfy `0 ≤ l ≤ n - 1`.
    #[error("azimuthal quantum number must satisfy 0 <= l <= n - 1; got n = {n}, l = {l}")]
    BadAzimuthal { n: i32, l: i32 },

    /// The azimuthal quantum number must be non-negative (for angular
    /// functions evaluated without a principal quantum number).
    #[error("azimuthal quantum number must satisfy l >= 0; got l = {0}")]
    NegativeAzimuthal(i32),

    /// The magnetic quantum number must satisfy `|m| ≤ l`.
    #[error("magnetic quantum number must satisfy |m| <= l; got l = {l}, m = {m}")]
    BadMagnetic { l: i32, m: i32 },

    /// The length scale must be finite and strictly positive.
    #[error("length scale must be finite and greater than 0; got {0}")]
    BadLengthScale(f64),
}

impl QuantumError {
    pub(crate) fn check_principal(n: i32) -> Result<(), Self> {
        (n >= 1).then_some(()).ok_or(Self::BadPrincipal(n))
    }

    pub(crate) fn check_azimuthal(n: i32, l: i32) -> Result<(), Self> {
        (0..n).contains(&l).then_some(()).ok_or(Self::BadAzimuthal { n, l })
    }

    pub(crate) fn check_nonneg_azimuthal(l: i32) -> Result<(), Self> {
        (l >= 0).then_some(()).ok_or(Self::NegativeAzimuthal(l))
    }

    pub(crate) fn check_magnetic(l: i32, m: i32) -> Result<(), Self> {
        (-l..=l).contains(&m).then_some(()).ok_or(Self::BadMagnetic { l, m })
    }

    pub(crate) fn check_length_scale(a0: f64) -> Result<(), Self> {
        (a0.is_finite() && a0 > 0.0).then_some(())
            .ok_or(Self::BadLengthScale(a0))
    }
}

/// Returned when a quantum number lies outside the range over which
/// normalization constants and polynomial evaluation are guaranteed accurate
/// (`n ≤` [`MAX_N`], hence `l ≤ MAX_N - 1`).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
#[error("{name} = {value} is outside the supported range {name} <= {max}")]
pub struct RangeError {
    /// Name of the offending quantum number.
    pub name: &'static str,
    /// Value received.
    pub value: i32,
    /// Largest supported value.
    pub max: i32,
}

impl RangeError {
    pub(crate) fn check(n: i32) -> Result<(), Self> {
        let max = MAX_N as i32;
        (n <= max).then_some(())
            .ok_or(Self { name: "n", value: n, max })
    }

    pub(crate) fn check_azimuthal(l: i32) -> Result<(), Self> {
        let max = MAX_N as i32 - 1;
        (l <= max).then_some(())
            .ok_or(Self { name: "l", value: l, max })
    }
}

/// Returned when an operation requiring equal-shape arrays encounters arrays
/// with unequal shapes.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("encountered arrays with incompatible shapes; got {0:?} and {1:?}")]
pub struct ShapeError(pub Vec<usize>, pub Vec<usize>);

impl ShapeError {
    pub(crate) fn check<S, A, T, B, D>(
        a: &nd::ArrayBase<S, D>,
        b: &nd::ArrayBase<T, D>,
    ) -> Result<(), Self>
    where
        S: nd::Data<Elem = A>,
        T: nd::Data<Elem = B>,
        D: nd::Dimension,
    {
        let sa = a.shape();
        let sb = b.shape();
        (sa == sb).then_some(()).ok_or_else(|| Self(sa.to_vec(), sb.to_vec()))
    }
}

/// Returned when an operation requiring equal-length arrays encounters arrays
/// with unequal length.
#[derive(Debug, Error)]
#[error("encountered arrays with incompatible lengths; got {0} and {1}")]
pub struct LengthError(pub usize, pub usize);

impl LengthError {
    pub(crate) fn check<S, A, T, B>(
        a: &nd::ArrayBase<S, nd::Ix1>,
        b: &nd::ArrayBase<T, nd::Ix1>,
    ) -> Result<(), Self>
    where
        S: nd::Data<Elem = A>,
        T: nd::Data<Elem = B>,
    {
        let na = a.len();
        let nb = b.len();
        (na == nb).then_some(()).ok_or(Self(na, nb))
    }
}

/// Returned from a call to [`find_zeros`][crate::nodes::find_zeros] when data
/// arrays are less than 5 elements long.
#[derive(Debug, Error)]
#[error("coordinate arrays in interpolation must be longer than 4 elements; got {0}")]
pub struct LagrangeError(pub usize);

impl LagrangeError {
    pub(crate) fn check<S, A>(a: &nd::ArrayBase<S, nd::Ix1>)
        -> Result<(), Self>
    where S: nd::Data<Elem = A>
    {
        let n = a.len();
        (n > 4).then_some(()).ok_or(Self(n))
    }
}

/// Returned from functions in [`nodes`][crate::nodes].
#[derive(Debug, Error)]
pub enum InterpError {
    /// [`LengthError`]
    #[error("length error: {0}")]
    Length(#[from] LengthError),

    /// [`LagrangeError`]
    #[error("lagrange error: {0}")]
    Lagrange(#[from] LagrangeError),
}

/// Returned from [`build_grid`][crate::grid::build_grid] when the requested
/// sampling domain is malformed.
#[derive(Copy, Clone, Debug, PartialEq, Error)]
pub enum GridError {
    /// Each axis needs at least two sample points.
    #[error("grid resolution must be at least 2 points; got {0}")]
    BadResolution(usize),

    /// Ranges must be finite with a strictly increasing pair of bounds.
    #[error("grid range must be finite with lower < upper; got ({0}, {1})")]
    BadRange(f64, f64),

    /// Aspect ratios must be finite and strictly positive.
    #[error("aspect ratio must be finite and greater than 0; got {0}")]
    BadAspect(f64),

    /// Buffer factors must be finite and strictly positive.
    #[error("aspect buffer must be finite and greater than 0; got {0}")]
    BadBuffer(f64),

    /// An aspect ratio may not stretch the vertical axis to more than a fixed
    /// multiple of the horizontal point count.
    #[error("aspect ratio would require {ny:e} vertical points for {nx} horizontal ones; at most {max} are allowed")]
    TooTall { ny: f64, nx: usize, max: usize },
}

impl GridError {
    pub(crate) fn check_resolution(npoints: usize) -> Result<(), Self> {
        (npoints >= 2).then_some(()).ok_or(Self::BadResolution(npoints))
    }

    pub(crate) fn check_range(range: (f64, f64)) -> Result<(), Self> {
        (range.0.is_finite() && range.1.is_finite() && range.0 < range.1)
            .then_some(())
            .ok_or(Self::BadRange(range.0, range.1))
    }

    pub(crate) fn check_aspect(ratio: f64) -> Result<(), Self> {
        (ratio.is_finite() && ratio > 0.0).then_some(())
            .ok_or(Self::BadAspect(ratio))
    }

    pub(crate) fn check_buffer(buffer: f64) -> Result<(), Self> {
        (buffer.is_finite() && buffer > 0.0).then_some(())
            .ok_or(Self::BadBuffer(buffer))
    }

    pub(crate) fn check_stretch(ny: f64, nx: usize) -> Result<(), Self> {
        let max = nx.saturating_mul(MAX_STRETCH);
        (ny.is_finite() && ny <= max as f64).then_some(())
            .ok_or(Self::TooTall { ny, nx, max })
    }
}

/// Returned from all wavefunction evaluation functions.
#[derive(Debug, Error)]
pub enum HError {
    /// [`QuantumError`]
    #[error("invalid quantum state: {0}")]
    Quantum(#[from] QuantumError),

    /// [`RangeError`]
    #[error("numeric range error: {0}")]
    Range(#[from] RangeError),

    /// [`ShapeError`]
    #[error("array shape error: {0}")]
    Shape(#[from] ShapeError),

    /// [`GridError`]
    #[error("grid error: {0}")]
    Grid(#[from] GridError),

    /// [`InterpError`]
    #[error("interpolation error: {0}")]
    Interp(#[from] InterpError),

    /// Returned when a radial coordinate is negative or not finite.
    #[error("radial coordinates must be finite and non-negative; got {0}")]
    BadRadius(f64),
}

impl HError {
    pub(crate) fn check_radii<S, D>(r: &nd::ArrayBase<S, D>) -> Result<(), Self>
    where
        S: nd::Data<Elem = f64>,
        D: nd::Dimension,
    {
        match r.iter().find(|rk| !(rk.is_finite() && **rk >= 0.0)) {
            Some(bad) => Err(Self::BadRadius(*bad)),
            None => Ok(()),
        }
    }
}

/// Check a full set of quantum numbers in the order `n`, `l`, `m`, including
/// the supported numeric range.
pub(crate) fn check_state(n: i32, l: i32, m: i32) -> Result<(), HError> {
    QuantumError::check_principal(n)?;
    RangeError::check(n)?;
    QuantumError::check_azimuthal(n, l)?;
    QuantumError::check_magnetic(l, m)?;
    Ok(())
}
