#![allow(non_upper_case_globals)]

//! Length units for the wavefunction evaluators.
//!
//! All evaluators take their length scale `a0` as an explicit argument; nothing
//! in this crate multiplies a physical constant in behind the caller's back.
//! This module holds the one physical constant involved and the one documented
//! conversion from it to display units.
//!
//! Concrete physical constants are taken from NIST.

use serde::{ Deserialize, Serialize };
use crate::error::QuantumError;

/// Bohr radius (m)
pub const a0: f64 = 5.29177210903e-11;
//              +/- 0.00000000080e-11

/// electron mass (kg)
pub const me: f64 = 9.1093837015e-31;
//              +/- 0.0000000028e-31

/// proton mass (kg)
pub const mp: f64 = 1.67262192369e-27;
//              +/- 0.00000000051e-27

/// Multiplier taking lengths in meters to display units, chosen so that the
/// Bohr radius is about 5.3 display units: one grid step on a typical
/// thousand-point image then resolves the ground state comfortably.
pub const VIEW_SCALE: f64 = 1e11;

/// Bohr radius in display units, `a0 * VIEW_SCALE`.
pub const BOHR_VIEW: f64 = a0 * VIEW_SCALE;

/// Ratio `a_μ / a0` of the reduced-mass Bohr radius to the infinite-nuclear-mass
/// Bohr radius for a nucleus of mass `nucleus_mass` (kg).
///
/// This is `me / μ = 1 + me / M`.
pub fn reduced_mass_ratio(nucleus_mass: f64) -> f64 {
    1.0 + me / nucleus_mass
}

/// A validated length scale passed to the radial evaluator.
///
/// This is a visualization scale: the characteristic length *a* in
/// *ρ* = 2 *r* / (*n* *a*), measured in the same units as the sampling grid.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct LengthScale(f64);

impl LengthScale {
    /// Use `factor` directly as the length scale, in grid units.
    pub fn from_factor(factor: f64) -> Result<Self, QuantumError> {
        QuantumError::check_length_scale(factor)?;
        Ok(Self(factor))
    }

    /// Use `factor` Bohr radii, expressed in display units (see
    /// [`VIEW_SCALE`]).
    pub fn physical(factor: f64) -> Result<Self, QuantumError> {
        QuantumError::check_length_scale(factor)?;
        Self::from_factor(factor * BOHR_VIEW)
    }

    /// Scale for a hydrogen-like ion of nuclear charge `z` and nuclear mass
    /// `nucleus_mass` (kg), in display units: `a_μ / Z`.
    pub fn hydrogen_like(z: u32, nucleus_mass: f64)
        -> Result<Self, QuantumError>
    {
        let a = BOHR_VIEW * reduced_mass_ratio(nucleus_mass) / z as f64;
        Self::from_factor(a)
    }

    /// Get the bare value.
    pub fn value(&self) -> f64 { self.0 }
}

impl TryFrom<f64> for LengthScale {
    type Error = QuantumError;

    fn try_from(factor: f64) -> Result<Self, Self::Error> {
        Self::from_factor(factor)
    }
}

impl From<LengthScale> for f64 {
    fn from(scale: LengthScale) -> Self { scale.0 }
}
