//! Uniform coordinate grids for position-space sampling.
//!
//! A [`PositionGrid`] fixes the discretization of every grid-based operation
//! in this crate; its density is the accuracy knob for the trapezoidal
//! quadrature used by the basis transforms.
//!
//! ```
//! use qbasis::grid::PositionGrid;
//!
//! let grid = PositionGrid::linspace(0.0, 1.0, 1000).unwrap();
//! assert_eq!(grid.len(), 1000);
//! assert!((grid.get_dx() - 1.0 / 999.0).abs() < 1e-15);
//! assert!(PositionGrid::linspace(0.0, 1.0, 1).is_err());
//! ```

use ndarray as nd;
use crate::error::GridError;

pub type GridResult<T> = Result<T, GridError>;

/// A uniform, strictly increasing coordinate grid over a closed interval.
///
/// Arrays borrowed from this type are guaranteed to have at least 2 points
/// and uniform spacing; both invariants are checked once at construction.
#[derive(Clone, Debug, PartialEq)]
pub struct PositionGrid {
    // coordinate array
    x: nd::Array1<f64>,
    // grid spacing
    dx: f64,
    // array size
    n: usize,
}

impl PositionGrid {
    /// Create a new grid from "linspace-style" arguments (start, inclusive
    /// end, and an array length).
    pub fn linspace(start: f64, end: f64, n: usize) -> GridResult<Self> {
        GridError::check_npoints(n)?;
        GridError::check_bounds(start, end)?;
        let x: nd::Array1<f64> = nd::Array1::linspace(start, end, n);
        let dx = x[1] - x[0];
        Ok(Self { x, dx, n })
    }

    /// Get a reference to the coordinate array.
    pub fn get_x(&self) -> &nd::Array1<f64> { &self.x }

    /// Get the grid spacing.
    pub fn get_dx(&self) -> f64 { self.dx }

    /// Get the number of grid points.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.n }

    /// Get the first coordinate.
    pub fn start(&self) -> f64 { self.x[0] }

    /// Get the last coordinate.
    pub fn end(&self) -> f64 { self.x[self.n - 1] }
}
