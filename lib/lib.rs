//! Numerical core for small demonstrations of introductory quantum mechanics:
//! basis transformations for a particle in a one-dimensional box,
//! ladder-operator algebra for the quantum harmonic oscillator, and unitary
//! time propagation of a two-level system.
//!
//! The crate is organized as three independent subsystems:
//! - [`transform`]: forward/inverse transforms between a finite
//!   energy-eigenbasis representation and a discretized position
//!   representation of a particle in an infinite square well, built on
//!   [`basis`] (analytic eigenfunctions) and [`utils`] (trapezoidal
//!   quadrature).
//! - [`ladder`]: creation/annihilation operators acting on finite Fock-basis
//!   coefficient vectors, with explicit renormalization.
//! - [`twolevel`]: time evolution of a two-level state under a diagonal
//!   Hamiltonian, with expectation values and variances of a Hermitian
//!   position observable.
//!
//! All operations are pure functions of caller-supplied configuration
//! ([`grid::PositionGrid`], [`basis::BoxBasis`], [`basis::Oscillator`],
//! [`twolevel::TwoLevel`]); nothing holds mutable state between calls.
//!
//! See [`docs`] for theoretical background.

pub mod error;
pub mod grid;
pub mod basis;
pub mod transform;
pub mod ladder;
pub mod twolevel;
pub mod utils;

pub mod docs;

/// Negligibility threshold for amplitudes and norms; below this,
/// renormalization is skipped and basis contributions are dropped.
pub(crate) const DEF_EPSILON: f64 = 1e-10;

/// Tolerance for consistency checks (Hermiticity, eigenvalue recovery,
/// variance non-negativity) and expectation-value imaginary remainders.
pub(crate) const DEF_TOL: f64 = 1e-9;

pub type Arr1<S> = ndarray::ArrayBase<S, ndarray::Ix1>;
pub type Arr2<S> = ndarray::ArrayBase<S, ndarray::Ix2>;
