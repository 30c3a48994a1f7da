//! Unitary time propagation and position observables for a two-level system.
//!
//! States are 2-component complex vectors in the energy eigenbasis
//! `{|0⟩, |1⟩}`. The Hamiltonian is diagonal with real eigenvalues
//! `(E₀, E₁)`; the position operator is assembled from the spectral
//! decomposition `X = x₀|x₀⟩⟨x₀| + x₁|x₁⟩⟨x₁|`, whose eigenkets follow from
//! a closed-form orthonormality solve (see [`TwoLevel::new`]).

use ndarray as nd;
use num_complex::Complex64 as C64;
use crate::{
    Arr1,
    Arr2,
    error::{ LengthError, TwoLevelError },
    DEF_TOL,
};

pub type TwoLevelResult<T> = Result<T, TwoLevelError>;

/// Compute the outer product `|a⟩⟨b|` of two state vectors.
pub fn outer_prod<S, T>(a: &Arr1<S>, b: &Arr1<T>) -> nd::Array2<C64>
where
    S: nd::Data<Elem = C64>,
    T: nd::Data<Elem = C64>,
{
    let mut out: nd::Array2<C64> = nd::Array2::zeros((a.len(), b.len()));
    for (i, ai) in a.iter().enumerate() {
        for (j, bj) in b.iter().enumerate() {
            out[[i, j]] = *ai * bj.conj();
        }
    }
    out
}

/// Compute the expectation value `⟨ψ|O|ψ⟩` of a Hermitian operator.
///
/// The result is required to be real; a non-negligible imaginary remainder
/// triggers a printed warning since it indicates accumulated floating-point
/// error (or a non-Hermitian operator).
///
/// Fails if the operator dimensions do not match the state length.
pub fn expectation<S, T>(op: &Arr2<S>, state: &Arr1<T>) -> TwoLevelResult<f64>
where
    S: nd::Data<Elem = C64>,
    T: nd::Data<Elem = C64>,
{
    check_dims(op, state)?;
    let mut acc = C64::from(0.0);
    for (i, si) in state.iter().enumerate() {
        for (j, sj) in state.iter().enumerate() {
            acc += si.conj() * op[[i, j]] * *sj;
        }
    }
    if acc.im.abs() > DEF_TOL {
        println!(
            "twolevel::expectation: WARNING: expectation value has \
            non-negligible imaginary part {:.3e}", acc.im
        );
    }
    Ok(acc.re)
}

/// Compute the variance `⟨O²⟩ - ⟨O⟩²` of a Hermitian operator.
///
/// Small negative results within floating tolerance are clamped to zero; a
/// substantially negative result indicates an implementation defect and is
/// returned as [`TwoLevelError::NegativeVariance`].
///
/// Fails if the operator dimensions do not match the state length.
pub fn variance<S, T>(op: &Arr2<S>, state: &Arr1<T>) -> TwoLevelResult<f64>
where
    S: nd::Data<Elem = C64>,
    T: nd::Data<Elem = C64>,
{
    check_dims(op, state)?;
    let op_sq: nd::Array2<C64> = op.dot(op);
    let ex = expectation(op, state)?;
    let ex_sq = expectation(&op_sq, state)?;
    let var = ex_sq - ex * ex;
    if var < -DEF_TOL {
        Err(TwoLevelError::NegativeVariance(var))
    } else {
        Ok(var.max(0.0))
    }
}

fn check_dims<S, T>(op: &Arr2<S>, state: &Arr1<T>) -> Result<(), LengthError>
where
    S: nd::Data<Elem = C64>,
    T: nd::Data<Elem = C64>,
{
    let n = state.len();
    (op.nrows() == n).then_some(()).ok_or(LengthError(op.nrows(), n))?;
    (op.ncols() == n).then_some(()).ok_or(LengthError(op.ncols(), n))?;
    Ok(())
}

/// Eigenvalues of a 2×2 Hermitian matrix in ascending order, computed in
/// closed form from the trace and determinant.
pub fn eigvals2<S>(op: &Arr2<S>) -> (f64, f64)
where S: nd::Data<Elem = C64>
{
    let half_tr = 0.5 * (op[[0, 0]].re + op[[1, 1]].re);
    let det = (op[[0, 0]] * op[[1, 1]] - op[[0, 1]] * op[[1, 0]]).re;
    let disc = (half_tr * half_tr - det).max(0.0).sqrt();
    (half_tr - disc, half_tr + disc)
}

/// A two-level system: diagonal Hamiltonian, Hermitian position operator,
/// and the position eigenkets expressed in the energy basis.
///
/// Writing the eigenkets as `|x₀⟩ = c₀(|0⟩ + |1⟩)` and
/// `|x₁⟩ = c₁(|0⟩ + α|1⟩)`, orthogonality `⟨x₀|x₁⟩ = 0` forces `α = -1` and
/// unit norms force `c₀ = c₁ = 1/√2`. The 2×2 constraints are solved in this
/// closed form once at construction; no iteration is involved.
#[derive(Clone, Debug)]
pub struct TwoLevel {
    // energy eigenvalues
    e: (f64, f64),
    // position eigenvalues
    x: (f64, f64),
    // reduced Planck constant
    hbar: f64,
    // diagonal hamiltonian
    h: nd::Array2<C64>,
    // position operator in the energy basis
    x_op: nd::Array2<C64>,
    // position eigenkets in the energy basis
    ket_x0: nd::Array1<C64>,
    ket_x1: nd::Array1<C64>,
}

impl TwoLevel {
    /// Build the Hamiltonian and position operator for energy eigenvalues
    /// `(e0, e1)` and distinct position eigenvalues `(x0, x1)`, with ħ = 1.
    ///
    /// The constructed position operator is verified Hermitian and its
    /// closed-form spectrum is verified to recover `{x0, x1}`; failure of
    /// either post-condition is a [consistency error][TwoLevelError].
    pub fn new(e0: f64, e1: f64, x0: f64, x1: f64) -> TwoLevelResult<Self> {
        Self::with_hbar(e0, e1, x0, x1, 1.0)
    }

    /// Like [`Self::new`], with an explicit value of ħ.
    pub fn with_hbar(e0: f64, e1: f64, x0: f64, x1: f64, hbar: f64)
        -> TwoLevelResult<Self>
    {
        TwoLevelError::check_distinct(x0, x1)?;
        let c = C64::from(0.5_f64.sqrt());
        let ket_x0: nd::Array1<C64> = nd::array![c, c];
        let ket_x1: nd::Array1<C64> = nd::array![c, -c];
        let zero = C64::from(0.0);
        let h: nd::Array2<C64>
            = nd::array![
                [C64::from(e0), zero],
                [zero, C64::from(e1)],
            ];
        let x_op: nd::Array2<C64>
            = outer_prod(&ket_x0, &ket_x0).mapv(|pk| pk * x0)
            + outer_prod(&ket_x1, &ket_x1).mapv(|pk| pk * x1);
        check_hermitian(&x_op)?;
        check_eigvals(&x_op, x0, x1)?;
        Ok(Self { e: (e0, e1), x: (x0, x1), hbar, h, x_op, ket_x0, ket_x1 })
    }

    /// Get the energy eigenvalues `(E₀, E₁)`.
    pub fn energies(&self) -> (f64, f64) { self.e }

    /// Get the position eigenvalues `(x₀, x₁)`.
    pub fn positions(&self) -> (f64, f64) { self.x }

    /// Get the value of ħ.
    pub fn hbar(&self) -> f64 { self.hbar }

    /// Get the oscillation frequency `ω = (E₀ - E₁) / ħ` of the position
    /// observable.
    pub fn angular_freq(&self) -> f64 { (self.e.0 - self.e.1) / self.hbar }

    /// Get a reference to the Hamiltonian.
    pub fn get_h(&self) -> &nd::Array2<C64> { &self.h }

    /// Get a reference to the position operator.
    pub fn get_x_op(&self) -> &nd::Array2<C64> { &self.x_op }

    /// Get a reference to the position eigenket `|x₀⟩`.
    pub fn ket_x0(&self) -> &nd::Array1<C64> { &self.ket_x0 }

    /// Get a reference to the position eigenket `|x₁⟩`.
    pub fn ket_x1(&self) -> &nd::Array1<C64> { &self.ket_x1 }

    /// Apply the time-evolution operator `U(t) = exp(-i H t / ħ)` to a
    /// state.
    ///
    /// The Hamiltonian is diagonal by construction, so the matrix
    /// exponential reduces to elementwise phases `exp(-i E_k t / ħ)`. The
    /// evolution is unitary and reversible: propagating by `t` and then `-t`
    /// recovers the input.
    pub fn propagate<S>(&self, state: &Arr1<S>, t: f64)
        -> TwoLevelResult<nd::Array1<C64>>
    where S: nd::Data<Elem = C64>
    {
        LengthError::check(state, &self.ket_x0)?;
        let phases = [
            C64::cis(-self.e.0 * t / self.hbar),
            C64::cis(-self.e.1 * t / self.hbar),
        ];
        Ok(state.iter().zip(phases).map(|(sk, uk)| uk * *sk).collect())
    }

    /// Compute `⟨X⟩` for a state.
    pub fn expectation_x<S>(&self, state: &Arr1<S>) -> TwoLevelResult<f64>
    where S: nd::Data<Elem = C64>
    {
        expectation(&self.x_op, state)
    }

    /// Compute `Var X = ⟨X²⟩ - ⟨X⟩²` for a state.
    pub fn variance_x<S>(&self, state: &Arr1<S>) -> TwoLevelResult<f64>
    where S: nd::Data<Elem = C64>
    {
        variance(&self.x_op, state)
    }

    /// Closed-form `⟨X⟩(t)` for the initial state `|x₀⟩`:
    /// `(x₀ + x₁)/2 + (x₀ - x₁)/2 · cos(ωt)` with `ω = (E₀ - E₁)/ħ`.
    pub fn expectation_analytic(&self, t: f64) -> f64 {
        let (x0, x1) = self.x;
        let w = self.angular_freq();
        0.5 * (x0 + x1) + 0.5 * (x0 - x1) * (w * t).cos()
    }

    /// Closed-form `Var X(t)` for the initial state `|x₀⟩`, from
    /// `⟨X²⟩(t) = (x₀² + x₁²)/2 + (x₀² - x₁²)/2 · cos(ωt)`.
    pub fn variance_analytic(&self, t: f64) -> f64 {
        let (x0, x1) = self.x;
        let w = self.angular_freq();
        let ex = self.expectation_analytic(t);
        let ex_sq = 0.5 * (x0 * x0 + x1 * x1)
            + 0.5 * (x0 * x0 - x1 * x1) * (w * t).cos();
        (ex_sq - ex * ex).max(0.0)
    }
}

// post-condition: X = X†
fn check_hermitian(op: &nd::Array2<C64>) -> TwoLevelResult<()> {
    let mut dev: f64 = 0.0;
    for i in 0..2 {
        for j in 0..2 {
            dev = dev.max((op[[i, j]] - op[[j, i]].conj()).norm());
        }
    }
    (dev <= DEF_TOL).then_some(()).ok_or(TwoLevelError::NotHermitian(dev))
}

// post-condition: spectrum of X recovers the requested eigenvalues
fn check_eigvals(op: &nd::Array2<C64>, x0: f64, x1: f64) -> TwoLevelResult<()> {
    let (lo, hi) = eigvals2(op);
    let (xlo, xhi) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
    ((lo - xlo).abs() <= DEF_TOL && (hi - xhi).abs() <= DEF_TOL)
        .then_some(())
        .ok_or(TwoLevelError::EigvalMismatch(xlo, xhi, lo, hi))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eigvals2_pauli_x() {
        let zero = C64::from(0.0);
        let one = C64::from(1.0);
        let sx: nd::Array2<C64> = nd::array![[zero, one], [one, zero]];
        let (lo, hi) = eigvals2(&sx);
        assert!((lo - (-1.0)).abs() < 1e-12);
        assert!((hi - 1.0).abs() < 1e-12);
    }

    #[test]
    fn eigvals2_diagonal() {
        let zero = C64::from(0.0);
        let d: nd::Array2<C64>
            = nd::array![[C64::from(-2.5), zero], [zero, C64::from(0.75)]];
        let (lo, hi) = eigvals2(&d);
        assert!((lo - (-2.5)).abs() < 1e-12);
        assert!((hi - 0.75).abs() < 1e-12);
    }

    #[test]
    fn position_kets_are_orthonormal() {
        let sys = TwoLevel::new(1.0, 0.0, 1.0, -1.0).unwrap();
        let dot: C64
            = sys.ket_x0().iter().zip(sys.ket_x1())
            .map(|(a, b)| a.conj() * *b)
            .sum();
        assert!(dot.norm() < 1e-12);
        let norm0: f64
            = sys.ket_x0().iter().map(|a| a.norm_sqr()).sum();
        assert!((norm0 - 1.0).abs() < 1e-12);
    }
}
