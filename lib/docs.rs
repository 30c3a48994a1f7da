//! Theoretical background.
//!
//! # Contents
//! - [Change of basis](#change-of-basis)
//! - [Ladder operators](#ladder-operators)
//! - [Two-level dynamics](#two-level-dynamics)
//!
//! # Change of basis
//! A particle confined to a box of length *L* with infinite walls at *x* = 0
//! and *x* = *L* has the energy eigenfunctions
//! ```text
//!          ┌───┐
//! ψ_n(x) = │2/L· sin((n + 1) π x / L),  x ∊ [0, L]
//!          └───┘
//! ```
//! (zero outside the well), indexed here from *n* = 0 for the ground state.
//! These form a complete orthonormal set on [0, *L*], so any state admits
//! the two equivalent representations
//! ```text
//! |ψ⟩ = Σ_n c_n |n⟩        (energy basis)
//! ψ(x) = Σ_n c_n ψ_n(x)    (position basis)
//! ```
//! with the inverse given by projection,
//! ```text
//! c_n = ⟨n|ψ⟩ = ∫ ψ_n*(x) ψ(x) dx.
//! ```
//! Numerically the state is sampled on a uniform grid and the projection
//! integral is evaluated by the trapezoidal rule, so a forward-then-inverse
//! round trip reproduces the coefficients up to an *O*(*δx*²) quadrature
//! error for any state representable within the retained modes. Population
//! in modes at or above the cutoff *n*_max is simply not recovered; this
//! truncation error is a property of the finite basis, not of the
//! quadrature, and both are controlled by the caller (grid density and
//! *n*_max respectively).
//!
//! # Ladder operators
//! For the quantum harmonic oscillator with eigenstates |*n*⟩, the creation
//! and annihilation operators act as
//! ```text
//! â†|n⟩ = √(n + 1) |n + 1⟩
//! â |n⟩ = √n |n - 1⟩,   â|0⟩ = 0.
//! ```
//! On a finite coefficient vector of length *n*_max the action of â† at the
//! top of the basis would populate index *n*_max, which does not exist; that
//! amplitude is discarded. Neither operator is unitary, so norms are not
//! preserved: after application, callers renormalize explicitly (guarding
//! against the zero vector produced by annihilating the vacuum).
//!
//! The position-space eigenfunctions used to render a Fock-basis state are
//! the Hermite functions
//! ```text
//!          (m ω/π ħ)^¼
//! φ_n(x) = ─────────── exp(-ξ²/2) H_n(ξ),   ξ = x / x₀,  x₀ = √(ħ/m ω)
//!           √(2ⁿ n!)
//! ```
//! with *H*_n evaluated by the three-term recurrence
//! *H*_{k+1} = 2ξ *H*_k - 2k *H*_{k-1}.
//!
//! # Two-level dynamics
//! Take a two-level system with diagonal Hamiltonian eigenvalues
//! (*E*₀, *E*₁) and a position observable with two distinct eigenvalues
//! (*x*₀, *x*₁). Writing the position eigenkets in the energy basis as
//! ```text
//! |x₀⟩ = c₀ (|0⟩ + |1⟩)
//! |x₁⟩ = c₁ (|0⟩ + α |1⟩)
//! ```
//! orthogonality ⟨x₀|x₁⟩ = 0 forces α = -1 and normalization forces
//! *c*₀ = *c*₁ = 1/√2. The position operator is then assembled from its
//! spectral decomposition,
//! ```text
//! X = x₀ |x₀⟩⟨x₀| + x₁ |x₁⟩⟨x₁|
//! ```
//! which is Hermitian by construction (verified as a post-condition, along
//! with recovery of {x₀, x₁} from the closed-form 2×2 spectrum).
//!
//! Because *H* is diagonal, the propagator exp(-i *H* *t*/ħ) acts as
//! elementwise phases exp(-i *E*_k *t*/ħ). Starting from |x₀⟩, the position
//! observable oscillates at ω = (*E*₀ - *E*₁)/ħ:
//! ```text
//! ⟨X⟩(t)  = (x₀ + x₁)/2  + (x₀ - x₁)/2  cos(ω t)
//! ⟨X²⟩(t) = (x₀² + x₁²)/2 + (x₀² - x₁²)/2 cos(ω t)
//! Var X(t) = ⟨X²⟩(t) - ⟨X⟩(t)²
//! ```
//! These closed forms are pure functions of *t* and the four eigenvalues and
//! serve as cross-checks for the numerically propagated curves.
