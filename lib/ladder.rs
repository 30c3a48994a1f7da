//! Ladder-operator algebra on finite Fock-basis coefficient vectors.
//!
//! Coefficient vectors index harmonic-oscillator quantum numbers starting at
//! 0 for the ground state. All operations are functional: a new vector of
//! the same length is returned and the input is untouched.
//!
//! The basis is finite, so the creation operator is lossy at its top edge:
//! population that would be raised past the last index is discarded. The raw
//! operators do not preserve norm (`â` on the vacuum legitimately yields the
//! zero vector); callers wanting unit-norm states invoke [`renormalized`]
//! explicitly afterward. A zero-length coefficient vector represents no
//! basis at all and is rejected as a configuration error.

use ndarray as nd;
use num_complex::Complex64 as C64;
use crate::{
    Arr1,
    basis::{ BasisResult, Oscillator },
    error::BasisError,
    grid::PositionGrid,
    DEF_EPSILON,
};

/// Apply the creation operator `â†`: `new[n + 1] = √(n + 1) c[n]`.
///
/// The top coefficient is dropped rather than raised out of the basis. A
/// warning is printed when the discarded amplitude is non-negligible. Fails
/// if `coeffs` is empty.
pub fn apply_creation<S>(coeffs: &Arr1<S>) -> BasisResult<nd::Array1<C64>>
where S: nd::Data<Elem = C64>
{
    BasisError::check_basis_size(coeffs.len())?;
    let len = coeffs.len();
    let mut new: nd::Array1<C64> = nd::Array1::zeros(len);
    let discarded = coeffs[len - 1].norm();
    if discarded > DEF_EPSILON {
        println!(
            "ladder::apply_creation: WARNING: truncating non-negligible \
            amplitude {:.3e} at the top of the basis", discarded
        );
    }
    for (n, cn) in coeffs.iter().enumerate().take(len - 1) {
        new[n + 1] = ((n + 1) as f64).sqrt() * *cn;
    }
    Ok(new)
}

/// Apply the annihilation operator `â`: `new[n - 1] = √n c[n]`, with
/// `new[0] = 0` always (the vacuum has no lower state).
///
/// Annihilating the vacuum yields the zero vector; this is a valid,
/// non-error outcome representing "state annihilated." Fails if `coeffs` is
/// empty.
pub fn apply_annihilation<S>(coeffs: &Arr1<S>) -> BasisResult<nd::Array1<C64>>
where S: nd::Data<Elem = C64>
{
    BasisError::check_basis_size(coeffs.len())?;
    let len = coeffs.len();
    let mut new: nd::Array1<C64> = nd::Array1::zeros(len);
    for (n, cn) in coeffs.iter().enumerate().skip(1) {
        new[n - 1] = (n as f64).sqrt() * *cn;
    }
    Ok(new)
}

/// Compute the Fock-space norm `√(Σ |c_n|²)` (no grid weighting).
pub fn coeff_norm<S>(coeffs: &Arr1<S>) -> f64
where S: nd::Data<Elem = C64>
{
    coeffs.iter().map(|cn| cn.norm_sqr()).sum::<f64>().sqrt()
}

/// Return a unit-norm copy of a coefficient vector, or an unchanged copy
/// when the norm is below the numerical threshold (e.g. after annihilating
/// the vacuum). Fails if `coeffs` is empty.
pub fn renormalized<S>(coeffs: &Arr1<S>) -> BasisResult<nd::Array1<C64>>
where S: nd::Data<Elem = C64>
{
    BasisError::check_basis_size(coeffs.len())?;
    let norm = coeff_norm(coeffs);
    if norm > DEF_EPSILON {
        Ok(coeffs.mapv(|cn| cn / norm))
    } else {
        Ok(coeffs.to_owned())
    }
}

/// Renormalize a coefficient vector in place; near-zero vectors are left
/// unchanged. Fails if `coeffs` is empty.
pub fn renormalize<S>(coeffs: &mut Arr1<S>) -> BasisResult<()>
where S: nd::DataMut<Elem = C64>
{
    BasisError::check_basis_size(coeffs.len())?;
    let norm = coeff_norm(coeffs);
    if norm > DEF_EPSILON {
        coeffs.iter_mut().for_each(|cn| { *cn /= norm; });
    }
    Ok(())
}

/// Synthesize the position-space wavefunction `ψ(x) = Σ_n c_n φ_n(x)` over a
/// grid, where `φ_n` are the oscillator eigenfunctions.
///
/// Contributions with negligible amplitude are skipped; this is an
/// optimization with no effect on the result beyond the threshold itself.
pub fn state_to_wavefunction<S>(
    osc: &Oscillator,
    coeffs: &Arr1<S>,
    grid: &PositionGrid,
) -> nd::Array1<C64>
where S: nd::Data<Elem = C64>
{
    let mut psi: nd::Array1<C64> = nd::Array1::zeros(grid.len());
    for (n, cn) in coeffs.iter().enumerate() {
        if cn.norm() <= DEF_EPSILON { continue; }
        let c = *cn;
        let phi_n = osc.sampled(n, grid);
        nd::Zip::from(&mut psi).and(&phi_n)
            .for_each(|pk, fk| { *pk += c * *fk; });
    }
    psi
}
