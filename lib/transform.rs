//! Forward/inverse transforms between a finite energy-eigenbasis
//! representation and a discretized position representation of a particle in
//! an infinite square well.
//!
//! The forward direction is an exact (up to rounding) linear synthesis; the
//! inverse is approximate, carrying the `O(dx²)` trapezoidal quadrature error
//! of the supplied grid plus whatever population lies in modes at or above
//! the basis cutoff. Neither direction normalizes its output.

use ndarray as nd;
use num_complex::Complex64 as C64;
use crate::{
    Arr1,
    basis::{ BasisResult, BoxBasis },
    error::LengthError,
    grid::PositionGrid,
    utils::{ wf_dot, wf_norm },
    DEF_EPSILON,
};

/// Transform a state from the energy basis to the position basis.
///
/// Computes `ψ(x) = Σ_n c_n ψ_n(x)` over the grid. Coefficients beyond the
/// basis cutoff `n_max` are silently truncated; this is the documented lossy
/// behavior of a finite basis, not an error.
pub fn energy_to_position<S>(
    basis: &BoxBasis,
    coeffs: &Arr1<S>,
    grid: &PositionGrid,
) -> nd::Array1<C64>
where S: nd::Data<Elem = C64>
{
    let n_states = coeffs.len().min(basis.n_max());
    let mut psi: nd::Array1<C64> = nd::Array1::zeros(grid.len());
    for (n, cn) in coeffs.iter().enumerate().take(n_states) {
        let c = *cn;
        let psi_n = basis.sampled(n, grid);
        nd::Zip::from(&mut psi).and(&psi_n)
            .for_each(|pk, bk| { *pk += c * *bk; });
    }
    psi
}

/// Transform a state from the position basis to the energy basis.
///
/// Computes `c_n = ∫ ψ_n*(x) ψ(x) dx` for `n = 0 … n_max - 1` by trapezoidal
/// quadrature over the supplied grid. This inverts [`energy_to_position`]
/// only approximately: population in modes `n ≥ n_max` is not recovered.
pub fn position_to_energy<S>(
    basis: &BoxBasis,
    samples: &Arr1<S>,
    grid: &PositionGrid,
) -> BasisResult<nd::Array1<C64>>
where S: nd::Data<Elem = C64>
{
    LengthError::check(samples, grid.get_x())?;
    let dx = grid.get_dx();
    let coeffs: nd::Array1<C64>
        = (0..basis.n_max())
        .map(|n| {
            let psi_n: nd::Array1<C64>
                = basis.sampled(n, grid).mapv(C64::from);
            wf_dot(&psi_n, samples, dx)
        })
        .collect();
    Ok(coeffs)
}

/// Construct a normalized Gaussian packet centered at `x0` with width
/// `sigma`, clamped to zero at the grid endpoints to respect hard-wall
/// boundary conditions.
///
/// A packet that underflows to zero on every interior point (e.g. centered
/// far outside the grid) is returned as the zero vector rather than
/// renormalized.
pub fn gaussian_packet(grid: &PositionGrid, x0: f64, sigma: f64)
    -> nd::Array1<C64>
{
    let a = grid.start();
    let b = grid.end();
    let mut psi: nd::Array1<C64>
        = grid.get_x()
        .mapv(|xk| {
            if xk <= a || xk >= b {
                C64::from(0.0)
            } else {
                C64::from((-(xk - x0).powi(2) / (2.0 * sigma * sigma)).exp())
            }
        });
    let norm = wf_norm(&psi, grid.get_dx()).sqrt();
    if norm > DEF_EPSILON {
        psi.mapv_inplace(|pk| pk / norm);
    }
    psi
}
