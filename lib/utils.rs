//! Quadrature and wavefunction-norm tools.

use ndarray::{ self as nd, Ix1 };
use num_complex::ComplexFloat;
use num_traits::{ Float, Num, One, Zero };

/// Integrate using the trapezoidal rule.
///
/// *Panics if `y` has length less than 2*.
pub fn trapz<S, A>(y: &nd::ArrayBase<S, Ix1>, dx: A) -> A
where
    S: nd::Data<Elem = A>,
    A: Num + Copy,
{
    let n: usize = y.len();
    let two = A::one() + A::one();
    let inner = y.iter().skip(1).take(n - 2)
        .fold(A::zero(), |acc, yk| acc + *yk);
    (dx / two) * (y[0] + two * inner + y[n - 1])
}

/// Calculate the squared norm `∫ |ψ|² dx` of a sampled wavefunction.
///
/// *Panics if `q` has length less than 2*.
pub fn wf_norm<S, A>(q: &nd::ArrayBase<S, Ix1>, dx: A::Real) -> A::Real
where
    S: nd::Data<Elem = A>,
    A: ComplexFloat,
{
    let n: usize = q.len();
    let two = <A as ComplexFloat>::Real::one()
        + <A as ComplexFloat>::Real::one();
    let inner = q.iter().skip(1).take(n - 2)
        .fold(
            <A as ComplexFloat>::Real::zero(),
            |acc, qk| acc + Float::powi(qk.abs(), 2),
        );
    (dx / two) * (
        Float::powi(q[0].abs(), 2)
        + two * inner
        + Float::powi(q[n - 1].abs(), 2)
    )
}

/// Calculate the inner product `∫ ψ₁* ψ₂ dx` of two sampled wavefunctions.
///
/// *Panics if either array has length less than 2*.
pub fn wf_dot<S, T, A>(
    q: &nd::ArrayBase<S, Ix1>,
    p: &nd::ArrayBase<T, Ix1>,
    dx: A::Real,
) -> A
where
    S: nd::Data<Elem = A>,
    T: nd::Data<Elem = A>,
    A: ComplexFloat + From<<A as ComplexFloat>::Real>,
{
    let n: usize = q.len().min(p.len());
    let two = A::one() + A::one();
    let dxc: A = From::from(dx);
    let inner = q.iter().zip(p).skip(1).take(n - 2)
        .fold(A::zero(), |acc, (qk, pk)| acc + qk.conj() * *pk);
    (dxc / two) * (
        q[0].conj() * p[0]
        + two * inner
        + q[n - 1].conj() * p[n - 1]
    )
}

/// Renormalize a sampled wavefunction in place so that `∫ |ψ|² dx = 1`.
///
/// *Panics if `q` has length less than 2*.
pub fn wf_renormalize<S, A>(q: &mut nd::ArrayBase<S, Ix1>, dx: A::Real)
where
    S: nd::DataMut<Elem = A>,
    A: ComplexFloat + From<<A as ComplexFloat>::Real>,
{
    let norm: A = From::from(Float::sqrt(wf_norm(q, dx)));
    q.iter_mut().for_each(|qk| { *qk = *qk / norm; });
}

/// Return a normalized copy of a sampled wavefunction.
///
/// *Panics if `q` has length less than 2*.
pub fn wf_normalized<S, A>(q: &nd::ArrayBase<S, Ix1>, dx: A::Real)
    -> nd::Array1<A>
where
    S: nd::Data<Elem = A>,
    A: ComplexFloat + From<<A as ComplexFloat>::Real>,
{
    let norm: A = From::from(Float::sqrt(wf_norm(q, dx)));
    q.mapv(|qk| qk / norm)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trapz_linear_exact() {
        // trapezoidal rule is exact for linear integrands
        let x: nd::Array1<f64> = nd::Array1::linspace(0.0, 1.0, 11);
        let dx = x[1] - x[0];
        let y = x.mapv(|xk| 3.0 * xk);
        assert!((trapz(&y, dx) - 1.5).abs() < 1e-12);
    }

    #[test]
    fn wf_norm_matches_trapz() {
        let x: nd::Array1<f64> = nd::Array1::linspace(0.0, 1.0, 1001);
        let dx = x[1] - x[0];
        let q = x.mapv(|xk| (std::f64::consts::PI * xk).sin());
        // ∫₀¹ sin²(πx) dx = 1/2
        assert!((wf_norm(&q, dx) - 0.5).abs() < 1e-5);
    }

    #[test]
    fn wf_normalized_handles_complex_elements() {
        use num_complex::Complex64 as C64;
        let x: nd::Array1<f64> = nd::Array1::linspace(0.0, 1.0, 401);
        let dx = x[1] - x[0];
        let q: nd::Array1<C64> = x.mapv(|xk| C64::new(xk, 1.0 - xk));
        let p = wf_normalized(&q, dx);
        assert!((wf_norm(&p, dx) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn wf_renormalize_gives_unit_norm() {
        let x: nd::Array1<f64> = nd::Array1::linspace(-1.0, 1.0, 501);
        let dx = x[1] - x[0];
        let mut q = x.mapv(|xk| 2.5 * (1.0 - xk * xk));
        wf_renormalize(&mut q, dx);
        assert!((wf_norm(&q, dx) - 1.0).abs() < 1e-12);
    }
}
