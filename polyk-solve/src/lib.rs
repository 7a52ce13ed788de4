//! Closed-form solvers for separable polynomial constraints.
//!
//! Given a [`Problem`](polyk_core::Problem) describing `Σ aᵢ·xᵢ^pᵢ = b` and
//! a caller-supplied parameter `k`, [`formula::solve`] produces the solution
//! vector by direct algebraic substitution. There is no iteration and no
//! convergence criterion; the output is a pure function of the inputs.

pub mod formula;
