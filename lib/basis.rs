//! Analytic position-space eigenfunctions for the infinite square well and
//! the quantum harmonic oscillator.
//!
//! Both basis types are stateless value objects; eigenfunctions are
//! recomputed on demand. Mode indices start at 0 for the ground state, so a
//! box index `n` corresponds to the textbook quantum number `n + 1`.

use std::f64::consts::PI;
use ndarray as nd;
use crate::{
    error::BasisError,
    grid::PositionGrid,
    utils::trapz,
};

pub type BasisResult<T> = Result<T, BasisError>;

/// Energy eigenbasis of a particle in an infinite square well of length `L`.
///
/// ```text
/// ψ_n(x) = √(2/L) sin((n + 1) π x / L),  x ∊ [0, L]
/// ```
/// and identically zero outside the well (hard-wall boundary condition).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoxBasis {
    // box length
    l: f64,
    // number of retained modes
    n_max: usize,
}

impl BoxBasis {
    /// Create a new basis for a box of length `l` holding modes
    /// `0 … n_max - 1`.
    pub fn new(l: f64, n_max: usize) -> BasisResult<Self> {
        BasisError::check_box_length(l)?;
        BasisError::check_basis_size(n_max)?;
        Ok(Self { l, n_max })
    }

    /// Get the box length.
    pub fn get_l(&self) -> f64 { self.l }

    /// Get the number of retained modes.
    pub fn n_max(&self) -> usize { self.n_max }

    /// Evaluate ψ_n at a single point.
    pub fn psi(&self, n: usize, x: f64) -> f64 {
        if !(0.0..=self.l).contains(&x) { return 0.0; }
        (2.0 / self.l).sqrt()
            * ((n as f64 + 1.0) * PI * x / self.l).sin()
    }

    /// Sample ψ_n over a grid.
    pub fn sampled(&self, n: usize, grid: &PositionGrid) -> nd::Array1<f64> {
        grid.get_x().mapv(|xk| self.psi(n, xk))
    }

    /// Compute the overlap matrix `⟨m|n⟩` of all retained modes by
    /// trapezoidal quadrature over a grid.
    ///
    /// For a sufficiently fine grid spanning `[0, L]` this approximates the
    /// identity matrix to within quadrature error.
    pub fn overlap_matrix(&self, grid: &PositionGrid) -> nd::Array2<f64> {
        let dx = grid.get_dx();
        let sampled: Vec<nd::Array1<f64>>
            = (0..self.n_max).map(|n| self.sampled(n, grid)).collect();
        let mut overlap: nd::Array2<f64>
            = nd::Array2::zeros((self.n_max, self.n_max));
        for (m, psi_m) in sampled.iter().enumerate() {
            for (n, psi_n) in sampled.iter().enumerate() {
                overlap[[m, n]] = trapz(&(psi_m * psi_n), dx);
            }
        }
        overlap
    }
}

/// Physicists' Hermite polynomial `H_n(x)`, evaluated by the three-term
/// recurrence `H_{k+1}(x) = 2x H_k(x) - 2k H_{k-1}(x)`.
pub fn hermite(n: usize, x: f64) -> f64 {
    match n {
        0 => 1.0,
        1 => 2.0 * x,
        _ => {
            let mut hm1: f64 = 1.0;
            let mut h: f64 = 2.0 * x;
            let mut hp1: f64;
            for k in 1..n {
                hp1 = 2.0 * x * h - 2.0 * (k as f64) * hm1;
                hm1 = h;
                h = hp1;
            }
            h
        },
    }
}

fn factorial(n: usize) -> f64 {
    (1..=n).map(|k| k as f64).product()
}

/// Energy eigenbasis of a quantum harmonic oscillator.
///
/// ```text
/// φ_n(x) = (m ω / π ħ)^¼ / √(2ⁿ n!) · exp(-ξ²/2) H_n(ξ),  ξ = x / x₀
/// ```
/// with characteristic length `x₀ = √(ħ / m ω)`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Oscillator {
    // mass
    m: f64,
    // angular frequency
    w: f64,
    // reduced Planck constant
    hbar: f64,
    // characteristic length √(ħ / m ω)
    x0: f64,
}

impl Oscillator {
    /// Create a new oscillator basis from a mass, angular frequency, and
    /// value of ħ (pass 1.0 for natural units).
    pub fn new(m: f64, w: f64, hbar: f64) -> BasisResult<Self> {
        BasisError::check_oscillator(m, w, hbar)?;
        let x0 = (hbar / (m * w)).sqrt();
        Ok(Self { m, w, hbar, x0 })
    }

    /// Get the characteristic length scale `√(ħ / m ω)`.
    pub fn char_length(&self) -> f64 { self.x0 }

    /// Evaluate φ_n at a single point.
    pub fn psi(&self, n: usize, x: f64) -> f64 {
        let xi = x / self.x0;
        let norm = (self.m * self.w / (PI * self.hbar)).powf(0.25)
            / (2.0_f64.powi(n as i32) * factorial(n)).sqrt();
        norm * (-xi * xi / 2.0).exp() * hermite(n, xi)
    }

    /// Sample φ_n over a grid.
    pub fn sampled(&self, n: usize, grid: &PositionGrid) -> nd::Array1<f64> {
        grid.get_x().mapv(|xk| self.psi(n, xk))
    }
}

impl Default for Oscillator {
    /// Natural units: `m = ω = ħ = 1`.
    fn default() -> Self {
        Self { m: 1.0, w: 1.0, hbar: 1.0, x0: 1.0 }
    }
}
