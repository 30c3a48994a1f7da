//! Collection of all error types.
//!
//! All errors derive [`thiserror::Error`], making them composable when allowed
//! and compatible with application code using [`anyhow`][anyhow].
//!
//! Two kinds of failure appear here: configuration errors (bad grids, empty
//! bases, mismatched array lengths), which are caller mistakes surfaced
//! immediately, and consistency errors (a constructed operator failing its
//! Hermiticity or eigenvalue-recovery check, a substantially negative
//! variance), which indicate an arithmetic or construction defect. Small
//! floating-point residuals are clamped locally and never escalated.
//!
//! [anyhow]: https://crates.io/crates/anyhow

use ndarray as nd;
use thiserror::Error;

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

/// Returned from [`PositionGrid`][crate::grid::PositionGrid] constructors.
#[derive(Debug, Error)]
pub enum GridError {
    /// Returned when a grid would have fewer than 2 points.
    #[error("position grids must have at least 2 points; got {0}")]
    TooFewPoints(usize),

    /// Returned when grid bounds are not strictly increasing.
    #[error("position grid bounds must be strictly increasing; got [{0}, {1}]")]
    BadBounds(f64, f64),
}

impl GridError {
    pub(crate) fn check_npoints(n: usize) -> Result<(), Self> {
        (n >= 2).then_some(()).ok_or(Self::TooFewPoints(n))
    }

    pub(crate) fn check_bounds(start: f64, end: f64) -> Result<(), Self> {
        (end > start).then_some(()).ok_or(Self::BadBounds(start, end))
    }
}

/// Returned from basis constructors and basis-transform functions.
#[derive(Debug, Error)]
pub enum BasisError {
    /// Returned when a non-positive box length is encountered.
    #[error("box length must be greater than 0; got {0}")]
    BadBoxLength(f64),

    /// Returned when a basis would hold zero states.
    #[error("basis size must be greater than 0")]
    EmptyBasis,

    /// Returned when a non-positive oscillator parameter is encountered.
    #[error("oscillator parameters must be greater than 0; got m = {0}, w = {1}, hbar = {2}")]
    BadOscillator(f64, f64, f64),

    /// [`LengthError`]
    #[error("array length error: {0}")]
    Length(#[from] LengthError),
}

impl BasisError {
    pub(crate) fn check_box_length(l: f64) -> Result<(), Self> {
        (l > 0.0).then_some(()).ok_or(Self::BadBoxLength(l))
    }

    pub(crate) fn check_basis_size(n_max: usize) -> Result<(), Self> {
        (n_max != 0).then_some(()).ok_or(Self::EmptyBasis)
    }

    pub(crate) fn check_oscillator(m: f64, w: f64, hbar: f64)
        -> Result<(), Self>
    {
        (m > 0.0 && w > 0.0 && hbar > 0.0)
            .then_some(())
            .ok_or(Self::BadOscillator(m, w, hbar))
    }
}

/// Returned from two-level system constructors and observables.
#[derive(Debug, Error)]
pub enum TwoLevelError {
    /// Returned when the two position eigenvalues coincide; the position
    /// operator must have a non-degenerate spectrum.
    #[error("position eigenvalues must be distinct; got {0} twice")]
    DegeneratePosition(f64),

    /// Returned when the constructed position operator fails its Hermiticity
    /// post-condition. This indicates a construction defect, not bad input.
    #[error("position operator failed its hermiticity check; max deviation {0:.3e}")]
    NotHermitian(f64),

    /// Returned when the spectrum of the constructed position operator does
    /// not recover the requested eigenvalues.
    #[error("position operator spectrum should be ({0}, {1}); got ({2}, {3})")]
    EigvalMismatch(f64, f64, f64, f64),

    /// Returned when a computed variance is negative beyond floating
    /// tolerance.
    #[error("variance is significantly negative; got {0:.3e}")]
    NegativeVariance(f64),

    /// [`LengthError`]
    #[error("array length error: {0}")]
    Length(#[from] LengthError),
}

impl TwoLevelError {
    pub(crate) fn check_distinct(x0: f64, x1: f64) -> Result<(), Self> {
        (x0 != x1).then_some(()).ok_or(Self::DegeneratePosition(x0))
    }
}
