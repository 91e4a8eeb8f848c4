//! Discrete curvature of undirected, unweighted graphs.
//!
//! ## Edge Curvature
//!
//! - [`Ollivier`] — α-Ollivier-Ricci: one minus the exact earth mover's
//!   distance between the α-mixed neighborhoods of an edge's endpoints
//! - [`LinLuYau`] — Twice the α = 1/2 Ollivier-Ricci curvature
//!
//! ## Node Curvature
//!
//! - [`steinerberger_curvature`] — Pseudoinverse of the hop-distance matrix
//!   applied to the constant vector n
//!
//! Per-edge values are rounded to [`kappa_core::PRECISION`] digits; node
//! values are returned unrounded.
mod linluyau;
mod ollivier;
mod steinerberger;

pub use linluyau::*;
pub use ollivier::*;
pub use steinerberger::*;
