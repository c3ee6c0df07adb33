#![allow(dead_code, non_snake_case)]

//! Provides functions and higher-level constructs to evaluate the closed-form
//! bound-state wavefunctions of the hydrogen atom (or any one-electron,
//! hydrogen-like system) over planar sampling grids, for display as probability
//! density images.
//!
//! The computation is split into a small number of pure, array-valued steps:
//! - [Grid construction][grid::build_grid] over a Cartesian window, optionally
//!   matched to a viewport aspect ratio
//! - [Radial functions][radial::radial] *R*<sub>*nl*</sub>(*r*) from generalized
//!   Laguerre polynomials
//! - [Angular functions][angular::angular] *Y*<sub>*lm*</sub>(*θ*, *φ*) from
//!   associated Legendre functions
//! - [Composition][wavefunction::compose] into *ψ* = *R* *Y* over a grid
//! - [Reduction][density::density] to the probability density |*ψ*|²
//!
//! ```
//! use hydrogen::{ grid, wavefunction, density };
//!
//! let g = grid::build_grid((-10.0, 10.0), grid::YExtent::Range(-10.0, 10.0), 201)
//!     .unwrap();
//! let psi = wavefunction::compose(1.0, 2, 1, 0, &g.x, &g.y).unwrap();
//! let p = density::density(&psi);
//! assert_eq!(p.shape(), &[201, 201]);
//! assert!(p.iter().all(|pk| pk.is_finite() && *pk >= 0.0));
//! ```
//!
//! See [`docs`] for theoretical background.

pub mod error;
pub mod special;
pub mod state;
pub mod units;
pub mod grid;
pub mod radial;
pub mod angular;
pub mod wavefunction;
pub mod density;
pub mod nodes;
pub mod utils;
pub mod render;

pub mod docs;

/// Largest principal quantum number for which all normalization constants and
/// polynomial values are guaranteed to be finite and accurate.
pub const MAX_N: u32 = 30;

pub(crate) const DEF_BUFFER: f64 = 1.1;
pub(crate) const DEF_RESOLUTION: usize = 1000;

/// Largest factor by which an aspect-ratio grid may multiply the horizontal
/// point count along the vertical axis.
pub const MAX_STRETCH: usize = 100;

pub type Arr1<S> = ndarray::ArrayBase<S, ndarray::Ix1>;
pub type Arr2<S> = ndarray::ArrayBase<S, ndarray::Ix2>;
