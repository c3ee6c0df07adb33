//! Construction of planar sampling domains.
//!
//! A [`SpatialGrid`] is a pair of equal-shape 2D arrays `(x, y)` produced as the
//! mesh of two uniform 1D coordinate arrays. Following image conventions, the
//! first (or zero-th) axis indexes `y` and the second indexes `x`, so that
//! `grid.x[[i, j]] == xs[j]` and `grid.y[[i, j]] == ys[i]`.

use ndarray as nd;
use serde::{ Deserialize, Serialize };
use crate::{
    Arr1,
    error::GridError,
    DEF_BUFFER,
};

pub type GridResult<T> = Result<T, GridError>;

/// Specifies the vertical extent of a grid relative to its horizontal one.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YExtent {
    /// Use an explicit `(lower, upper)` range, sampled with the same number of
    /// points as the horizontal axis.
    Range(f64, f64),
    /// Derive the vertical range from the horizontal one so that the grid
    /// matches a viewport of the given width/height `ratio`:
    /// ```text
    /// y_range = x_range / (ratio * buffer)
    /// ```
    /// The number of vertical points is chosen to keep the horizontal sampling
    /// density, and may be at most [`MAX_STRETCH`][crate::MAX_STRETCH] times
    /// the horizontal one.
    Aspect {
        /// Viewport width divided by height.
        ratio: f64,
        /// Margin factor (default: `1.1`).
        buffer: Option<f64>,
    },
}

impl YExtent {
    /// Aspect-ratio mode with the default buffer.
    pub fn aspect(ratio: f64) -> Self {
        Self::Aspect { ratio, buffer: None }
    }

    /// Return `true` if `self` is `Range`.
    pub fn is_range(&self) -> bool { matches!(self, Self::Range(..)) }

    /// Return `true` if `self` is `Aspect`.
    pub fn is_aspect(&self) -> bool { matches!(self, Self::Aspect { .. }) }

    // resolve to a concrete range and point count
    fn resolve(self, x_range: (f64, f64), npoints: usize)
        -> GridResult<((f64, f64), usize)>
    {
        match self {
            Self::Range(lower, upper) => {
                GridError::check_range((lower, upper))?;
                Ok(((lower, upper), npoints))
            },
            Self::Aspect { ratio, buffer } => {
                let buffer = buffer.unwrap_or(DEF_BUFFER);
                GridError::check_aspect(ratio)?;
                GridError::check_buffer(buffer)?;
                let div = ratio * buffer;
                let range = (x_range.0 / div, x_range.1 / div);
                GridError::check_range(range)?;
                let frac = (range.1 - range.0) / (x_range.1 - x_range.0);
                let nyf = (npoints as f64 * frac).round();
                GridError::check_stretch(nyf, npoints)?;
                let ny = (nyf as usize).max(2);
                Ok((range, ny))
            },
        }
    }
}

impl Default for YExtent {
    fn default() -> Self { Self::aspect(1.0) }
}

/// A Cartesian sampling of the visualization plane.
///
/// Arrays borrowed from this type are guaranteed to have the same shape and to
/// be sampled on a uniform grid.
#[derive(Clone, Debug)]
pub struct SpatialGrid {
    /// Horizontal coordinates.
    pub x: nd::Array2<f64>,
    /// Vertical coordinates.
    pub y: nd::Array2<f64>,
}

impl SpatialGrid {
    /// Mesh two 1D coordinate arrays.
    pub fn from_axes<S, T>(xs: &Arr1<S>, ys: &Arr1<T>) -> Self
    where
        S: nd::Data<Elem = f64>,
        T: nd::Data<Elem = f64>,
    {
        let (x, y) = meshgrid(xs, ys);
        Self { x, y }
    }

    /// Get the common shape of the coordinate arrays as `(rows, columns)`.
    pub fn dim(&self) -> (usize, usize) { self.x.dim() }

    /// Get the horizontal sample coordinates.
    pub fn xs(&self) -> nd::ArrayView1<f64> { self.x.row(0) }

    /// Get the vertical sample coordinates.
    pub fn ys(&self) -> nd::ArrayView1<f64> { self.y.column(0) }

    /// Get the grid spacings `(dx, dy)`.
    pub fn spacing(&self) -> (f64, f64) {
        let xs = self.xs();
        let ys = self.ys();
        (xs[1] - xs[0], ys[1] - ys[0])
    }
}

/// Return coordinate matrices from two coordinate vectors, like NumPy's
/// `meshgrid` with `indexing = "xy"`.
pub fn meshgrid<S, T>(xs: &Arr1<S>, ys: &Arr1<T>)
    -> (nd::Array2<f64>, nd::Array2<f64>)
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
{
    let shape = (ys.len(), xs.len());
    let x: nd::Array2<f64> = nd::Array2::from_shape_fn(shape, |(_, j)| xs[j]);
    let y: nd::Array2<f64> = nd::Array2::from_shape_fn(shape, |(i, _)| ys[i]);
    (x, y)
}

/// Build a [`SpatialGrid`] spanning `x_range` with `npoints` horizontal
/// samples and a vertical extent set by `y_extent`.
///
/// Both ends of every range are included.
///
/// ```
/// use hydrogen::grid::{ build_grid, YExtent };
///
/// let aspect = YExtent::Aspect { ratio: 2.0, buffer: Some(1.0) };
/// let g = build_grid((-500.0, 500.0), aspect, 1000).unwrap();
/// assert_eq!(g.dim(), (500, 1000));
/// assert_eq!(g.y[[0, 0]], -250.0);
/// ```
pub fn build_grid(x_range: (f64, f64), y_extent: YExtent, npoints: usize)
    -> GridResult<SpatialGrid>
{
    GridError::check_resolution(npoints)?;
    GridError::check_range(x_range)?;
    let (y_range, ny) = y_extent.resolve(x_range, npoints)?;
    let xs: nd::Array1<f64> = linspace(x_range, npoints);
    let ys: nd::Array1<f64> = linspace(y_range, ny);
    let grid = SpatialGrid::from_axes(&xs, &ys);
    log::debug!(
        "grid::build_grid: {}x{} points over x = {:?}, y = {:?}",
        ny, npoints, x_range, y_range,
    );
    Ok(grid)
}

// like nd::Array1::linspace, but with the endpoint pinned exactly
fn linspace(range: (f64, f64), n: usize) -> nd::Array1<f64> {
    let mut v: nd::Array1<f64> = nd::Array1::linspace(range.0, range.1, n);
    v[n - 1] = range.1;
    v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_aspect_spans_exactly() {
        let aspect = YExtent::Aspect { ratio: 1.0, buffer: Some(1.0) };
        let g = build_grid((-500.0, 500.0), aspect, 1000).unwrap();
        assert_eq!(g.x.shape(), &[1000, 1000]);
        assert_eq!(g.y.shape(), &[1000, 1000]);
        assert_eq!(g.x[[0, 0]], -500.0);
        assert_eq!(g.x[[0, 999]], 500.0);
        assert_eq!(g.y[[0, 0]], -500.0);
        assert_eq!(g.y[[999, 0]], 500.0);
        let xmin = g.x.iter().cloned().fold(f64::INFINITY, f64::min);
        let ymax = g.y.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        assert_eq!(xmin, -500.0);
        assert_eq!(ymax, 500.0);
    }

    #[test]
    fn default_buffer_shrinks_height() {
        let g = build_grid((-500.0, 500.0), YExtent::aspect(1.0), 1000).unwrap();
        let ys = g.ys();
        assert!((ys[0] + 500.0 / 1.1).abs() < 1e-9);
        assert_eq!(g.dim(), (909, 1000));
    }

    #[test]
    fn explicit_range() {
        let g = build_grid((-10.0, 10.0), YExtent::Range(-5.0, 5.0), 201)
            .unwrap();
        assert_eq!(g.dim(), (201, 201));
        let (dx, dy) = g.spacing();
        assert!((dx - 0.1).abs() < 1e-12);
        assert!((dy - 0.05).abs() < 1e-12);
        // rows index y, columns index x
        assert_eq!(g.x[[7, 3]], g.xs()[3]);
        assert_eq!(g.y[[7, 3]], g.ys()[7]);
    }

    #[test]
    fn rejects_bad_requests() {
        assert_eq!(
            build_grid((-1.0, 1.0), YExtent::aspect(1.0), 1).unwrap_err(),
            GridError::BadResolution(1),
        );
        assert!(build_grid((1.0, -1.0), YExtent::aspect(1.0), 10).is_err());
        assert!(build_grid((-1.0, 1.0), YExtent::aspect(0.0), 10).is_err());
        assert!(build_grid((-1.0, 1.0), YExtent::Range(2.0, 2.0), 10).is_err());
        let aspect = YExtent::Aspect { ratio: 1.0, buffer: Some(f64::NAN) };
        assert!(build_grid((-1.0, 1.0), aspect, 10).is_err());
    }

    #[test]
    fn rejects_runaway_heights() {
        assert!(matches!(
            build_grid((-1.0, 1.0), YExtent::aspect(1e-300), 10),
            Err(GridError::TooTall { nx: 10, max: 1000, .. })
        ));
        assert!(matches!(
            build_grid((-500.0, 500.0), YExtent::aspect(1e-3), 1000),
            Err(GridError::TooTall { .. })
        ));
        // a hundredfold stretch is still allowed
        let aspect = YExtent::Aspect { ratio: 0.01, buffer: Some(1.0) };
        let g = build_grid((-1.0, 1.0), aspect, 10).unwrap();
        assert_eq!(g.dim(), (1000, 10));
    }

    #[test]
    fn tall_viewport_keeps_density() {
        let aspect = YExtent::Aspect { ratio: 0.5, buffer: Some(1.0) };
        let g = build_grid((-1.0, 1.0), aspect, 101).unwrap();
        assert_eq!(g.dim(), (202, 101));
        assert_eq!(g.ys()[0], -2.0);
        assert_eq!(g.ys()[201], 2.0);
    }
}
