//! # polylog
//!
//! **Dilogarithm, Clausen functions and Dirichlet eta values in pure Rust.**
//!
//! polylog provides scalar implementations of a small family of classical
//! special functions that show up as primitives in loop-integral and
//! polylogarithm-ladder evaluations. Every function is a pure mapping from
//! input to output: no shared state, no allocation, no I/O, and every call
//! runs a fixed number of polynomial-evaluation steps.
//!
//! # Functions
//!
//! - **li2**: Real dilogarithm Li₂(x), degree-19 Chebyshev series evaluated
//!   by a backward Clenshaw recurrence (CERNLIB DILOG C332 lineage)
//! - **cli2**: Complex dilogarithm Li₂(z), unit-disk mapping plus a
//!   10-term scaled-Bernoulli series
//! - **cl2/cl2f**: Clausen function Cl₂(θ) = Im(Li₂(e^{iθ})), economized
//!   Padé approximations at two precision tiers
//! - **cl3/cl3f**: Clausen function Cl₃(θ) = Re(Li₃(e^{iθ})), same
//!   structure with even symmetry and a logarithmic correction term
//! - **neg_eta**: Dirichlet η(n) at integer arguments, via precomputed
//!   tables
//!
//! # Precision tiers
//!
//! The Clausen functions come in two tiers selected by argument width: the
//! `f64` functions carry the higher-degree coefficient sets (fitted beyond
//! the f64 mantissa), the `f32` functions the lower-degree sets. One call
//! never mixes constants from different tiers.
//!
//! # Error handling
//!
//! There is none: every function is total over the finite floats. NaN and
//! infinity propagate through the arithmetic following IEEE rules, and the
//! eta table saturates to signed infinity outside its precomputed range.
//!
//! # References
//!
//! - Y. L. Luke, *Mathematical functions and their approximations*,
//!   Academic Press, New York 1975, p. 67
//! - K. S. Kölbig, Journal of Computational and Applied Mathematics 64
//!   (1995) 295-297

#![warn(missing_docs)]
#![warn(clippy::all)]
// Coefficient tables keep the full fitted digit strings.
#![allow(clippy::excessive_precision)]

mod clausen2;
mod clausen3;
mod dilog;
mod dilog_complex;
mod eta;
mod poly;

pub use clausen2::{cl2, cl2f};
pub use clausen3::{cl3, cl3f};
pub use dilog::li2;
pub use dilog_complex::{cli2, cli2_parts};
pub use eta::neg_eta;
