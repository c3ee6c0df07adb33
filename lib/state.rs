//! Validated quantum numbers and the orbital they identify.

use std::fmt;
use ndarray as nd;
use num_complex::Complex64 as C64;
use serde::{ Deserialize, Serialize };
use crate::{
    Arr2,
    error::{ HError, check_state },
    grid::SpatialGrid,
    units::LengthScale,
    density,
    wavefunction::{ self, HResult },
};

/// A set of hydrogen quantum numbers `(n, l, m)`.
///
/// Construction guarantees `1 ≤ n ≤` [`MAX_N`][crate::MAX_N],
/// `0 ≤ l ≤ n - 1`, and `|m| ≤ l`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawState", into = "RawState")]
pub struct QuantumState {
    n: i32,
    l: i32,
    m: i32,
}

#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
struct RawState {
    n: i32,
    l: i32,
    m: i32,
}

impl TryFrom<RawState> for QuantumState {
    type Error = HError;

    fn try_from(raw: RawState) -> Result<Self, Self::Error> {
        Self::new(raw.n, raw.l, raw.m)
    }
}

impl From<QuantumState> for RawState {
    fn from(state: QuantumState) -> Self {
        Self { n: state.n, l: state.l, m: state.m }
    }
}

impl QuantumState {
    /// Validate and construct.
    pub fn new(n: i32, l: i32, m: i32) -> HResult<Self> {
        check_state(n, l, m)?;
        Ok(Self { n, l, m })
    }

    /// The ground state, `(1, 0, 0)`.
    pub fn ground() -> Self { Self { n: 1, l: 0, m: 0 } }

    /// Principal quantum number.
    pub fn n(&self) -> i32 { self.n }

    /// Azimuthal quantum number.
    pub fn l(&self) -> i32 { self.l }

    /// Magnetic quantum number.
    pub fn m(&self) -> i32 { self.m }

    /// Number of radial nodes, `n - l - 1`.
    pub fn radial_nodes(&self) -> u32 { (self.n - self.l - 1) as u32 }

    /// Number of angular nodes, `l`.
    pub fn angular_nodes(&self) -> u32 { self.l as u32 }

    /// Iterate over all valid states with principal quantum number at most
    /// `nmax` (clamped to the supported range), ordered by `n`, then `l`, then
    /// `m`.
    pub fn iter_to(nmax: i32) -> impl Iterator<Item = Self> {
        let nmax = nmax.min(crate::MAX_N as i32);
        (1..=nmax).flat_map(|n| {
            (0..n).flat_map(move |l| {
                (-l..=l).map(move |m| Self { n, l, m })
            })
        })
    }
}

impl Default for QuantumState {
    fn default() -> Self { Self::ground() }
}

impl fmt::Display for QuantumState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const SPECTROSCOPIC: &[char] = &['s', 'p', 'd', 'f', 'g', 'h', 'i'];
        match SPECTROSCOPIC.get(self.l as usize) {
            Some(c) => write!(f, "{}{} (m = {})", self.n, c, self.m),
            None => write!(f, "(n, l, m) = ({}, {}, {})", self.n, self.l, self.m),
        }
    }
}

/// A quantum state paired with the length scale it should be drawn at.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Orbital {
    pub state: QuantumState,
    pub scale: LengthScale,
}

impl Orbital {
    pub fn new(state: QuantumState, scale: LengthScale) -> Self {
        Self { state, scale }
    }

    /// Thin interface to [`wavefunction::compose`] over a prebuilt grid.
    pub fn psi_planar(&self, grid: &SpatialGrid) -> HResult<nd::Array2<f64>> {
        wavefunction::compose(
            self.scale.value(),
            self.state.n,
            self.state.l,
            self.state.m,
            &grid.x,
            &grid.y,
        )
    }

    /// Probability density over a prebuilt grid.
    pub fn density_planar(&self, grid: &SpatialGrid)
        -> HResult<nd::Array2<f64>>
    {
        self.psi_planar(grid).map(|psi| density::density(&psi))
    }

    /// Thin interface to [`wavefunction::compose_spatial`] for planar slices
    /// through three-dimensional space.
    pub fn psi_spatial<S, T, U>(&self, x: &Arr2<S>, y: &Arr2<T>, z: &Arr2<U>)
        -> HResult<nd::Array2<C64>>
    where
        S: nd::Data<Elem = f64>,
        T: nd::Data<Elem = f64>,
        U: nd::Data<Elem = f64>,
    {
        wavefunction::compose_spatial(
            self.scale.value(),
            self.state.n,
            self.state.l,
            self.state.m,
            x,
            y,
            z,
        )
    }
}
