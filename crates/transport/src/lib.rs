//! Optimal transport between small discrete distributions.
//!
//! The curvature crates compare the local mass distributions around the two
//! endpoints of an edge. This crate supplies the vocabulary for that
//! comparison and an exact solver for it.
//!
//! ## Algorithms
//!
//! - [`Simplex`] — Transportation simplex (MODI) with Bland's pivoting rule
//!
//! ## Core Types
//!
//! - [`Coupling`] — A transport plan between two distributions
//! - [`Density`] — A discrete probability distribution (histogram)
//! - [`Measure`] — Ground metric between support elements
//! - [`Support`] — Elements a distribution can place mass on
//!
//! ## Usage
//!
//! [`emd`] wraps the common case of building a [`Simplex`], minimizing it,
//! and reading its cost. Tolerances and the pivot budget are defined in
//! `kappa-core`.
mod coupling;
mod density;
mod measure;
mod simplex;
mod support;

pub use coupling::*;
pub use density::*;
pub use measure::*;
pub use simplex::*;
pub use support::*;
