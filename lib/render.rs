//! One-call pipeline from a render request to arrays ready for display.
//!
//! A [`RenderConfig`] collects everything a presentation layer gathers from
//! its user (quantum numbers, length scale, sampling window), and
//! [`RenderConfig::render`] runs grid construction, composition, and reduction
//! in sequence.
//!
//! ```
//! use hydrogen::{ grid::YExtent, render::RenderConfig, state::QuantumState };
//!
//! let config = RenderConfig {
//!     state: QuantumState::new(3, 2, 0).unwrap(),
//!     a0: 1.0,
//!     x_range: (-40.0, 40.0),
//!     y_extent: YExtent::aspect(1.6),
//!     resolution: 160,
//!     ..Default::default()
//! };
//! let frame = config.render().unwrap();
//! assert_eq!(frame.density.dim(), frame.grid.dim());
//! ```

use ndarray as nd;
use serde::{ Deserialize, Serialize };
use crate::{
    density::{ density, normalized_intensity },
    grid::{ SpatialGrid, YExtent, build_grid },
    state::{ Orbital, QuantumState },
    units::LengthScale,
    utils::trapz2,
    wavefunction::HResult,
    DEF_RESOLUTION,
};

/// How the `a0` value of a [`RenderConfig`] is interpreted.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleUnits {
    /// `a0` is given directly in grid units.
    #[default]
    Grid,
    /// `a0` is a number of Bohr radii, converted to grid units by
    /// [`LengthScale::physical`].
    Bohr,
}

/// Parameters of a single render.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Quantum numbers to draw (default: ground state).
    pub state: QuantumState,
    /// Length scale (default: `0.7`).
    pub a0: f64,
    /// Interpretation of `a0` (default: grid units).
    pub units: ScaleUnits,
    /// Horizontal sampling window (default: `(-500, 500)`).
    pub x_range: (f64, f64),
    /// Vertical sampling window (default: square viewport with a 1.1 buffer).
    pub y_extent: YExtent,
    /// Number of horizontal samples (default: `1000`).
    pub resolution: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            state: QuantumState::ground(),
            a0: 0.7,
            units: ScaleUnits::Grid,
            x_range: (-500.0, 500.0),
            y_extent: YExtent::default(),
            resolution: DEF_RESOLUTION,
        }
    }
}

impl RenderConfig {
    /// Resolve the length scale.
    pub fn scale(&self) -> HResult<LengthScale> {
        let scale = match self.units {
            ScaleUnits::Grid => LengthScale::from_factor(self.a0)?,
            ScaleUnits::Bohr => LengthScale::physical(self.a0)?,
        };
        Ok(scale)
    }

    /// Resolve the state and length scale.
    pub fn orbital(&self) -> HResult<Orbital> {
        Ok(Orbital::new(self.state, self.scale()?))
    }

    /// Build the sampling grid.
    pub fn grid(&self) -> HResult<SpatialGrid> {
        Ok(build_grid(self.x_range, self.y_extent, self.resolution)?)
    }

    /// Run the full pipeline.
    ///
    /// The length scale is validated before the grid is built.
    pub fn render(&self) -> HResult<Frame> {
        let orbital = self.orbital()?;
        let grid = self.grid()?;
        let psi = orbital.psi_planar(&grid)?;
        let density = density(&psi);
        log::debug!(
            "render::render: {} on a {:?} grid",
            self.state, grid.dim(),
        );
        Ok(Frame { grid, psi, density })
    }
}

/// The output of a render.
#[derive(Clone, Debug)]
pub struct Frame {
    /// Sampling grid.
    pub grid: SpatialGrid,
    /// Planar wavefunction.
    pub psi: nd::Array2<f64>,
    /// Probability density.
    pub density: nd::Array2<f64>,
}

impl Frame {
    /// Display intensities in `[0, 1]`.
    pub fn intensity(&self) -> nd::Array2<f64> {
        normalized_intensity(&self.density)
    }

    /// Integrate the density over the sampled window with the trapezoidal
    /// rule, i.e. the probability carried by this slice per unit length
    /// normal to the plane.
    pub fn slice_probability(&self) -> f64 {
        let (dx, dy) = self.grid.spacing();
        trapz2(&self.density, dx, dy)
    }

    /// Index `(row, column)` and value of the density maximum.
    pub fn peak(&self) -> ((usize, usize), f64) {
        self.density.indexed_iter()
            .fold(((0, 0), f64::NEG_INFINITY), |best, (idx, p)| {
                if *p > best.1 { (idx, *p) } else { best }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ HError, QuantumError };

    #[test]
    fn defaults_match_viewer() {
        let c = RenderConfig::default();
        let g = c.grid().unwrap();
        assert_eq!(g.dim(), (909, 1000));
        assert_eq!(c.scale().unwrap().value(), 0.7);
    }

    #[test]
    fn bohr_units() {
        let c = RenderConfig { a0: 2.0, units: ScaleUnits::Bohr, ..Default::default() };
        let s = c.scale().unwrap();
        assert!((s.value() - 2.0 * crate::units::BOHR_VIEW).abs() < 1e-12);
    }

    #[test]
    fn bad_scale_is_reported_first() {
        let c = RenderConfig { a0: 0.0, resolution: 0, ..Default::default() };
        assert!(matches!(
            c.render(),
            Err(HError::Quantum(QuantumError::BadLengthScale(_)))
        ));
        let c = RenderConfig { resolution: 0, ..Default::default() };
        assert!(matches!(c.render(), Err(HError::Grid(_))));
    }

    #[test]
    fn from_json() {
        let c: RenderConfig = serde_json::from_str(r#"
            {
                "state": { "n": 2, "l": 1, "m": 0 },
                "a0": 1.0,
                "x_range": [-20.0, 20.0],
                "y_extent": { "aspect": { "ratio": 1.0, "buffer": 1.0 } },
                "resolution": 81
            }
        "#).unwrap();
        assert_eq!(c.state, QuantumState::new(2, 1, 0).unwrap());
        assert_eq!(c.units, ScaleUnits::Grid);
        let f = c.render().unwrap();
        assert_eq!(f.density.dim(), (81, 81));
        let bad: Result<RenderConfig, _>
            = serde_json::from_str(r#"{ "state": { "n": 1, "l": 0, "m": 1 } }"#);
        assert!(bad.is_err());
    }

    #[test]
    fn ground_state_slice_probability() {
        // |ψ_100|² = exp(-2r) / π for a0 = 1, so the integral over the
        // plane through the nucleus is 2 ∫ r exp(-2r) dr = 1/2
        let c = RenderConfig {
            a0: 1.0,
            x_range: (-15.0, 15.0),
            y_extent: YExtent::Range(-15.0, 15.0),
            resolution: 601,
            ..Default::default()
        };
        let f = c.render().unwrap();
        let p = f.slice_probability();
        assert!((p - 0.5).abs() < 5e-3, "{}", p);
        // scales as 1 / a0 for the same grid in units of a0
        let c2 = RenderConfig {
            a0: 2.0,
            x_range: (-30.0, 30.0),
            y_extent: YExtent::Range(-30.0, 30.0),
            ..c
        };
        let p2 = c2.render().unwrap().slice_probability();
        assert!((p2 - p / 2.0).abs() < 1e-12, "{} vs {}", p2, p);
    }

    #[test]
    fn peak_and_intensity() {
        let c = RenderConfig {
            a0: 1.0,
            x_range: (-10.0, 10.0),
            y_extent: YExtent::Range(-10.0, 10.0),
            resolution: 201,
            ..Default::default()
        };
        let f = c.render().unwrap();
        assert_eq!(f.peak().0, (100, 100));
        let I = f.intensity();
        assert_eq!(I[[100, 100]], 1.0);
        assert!(I.iter().all(|Ik| (0.0..=1.0).contains(Ik)));
    }
}
