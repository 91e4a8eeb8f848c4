//! Discrete curvature of finite, undirected, unweighted graphs.
//!
//! This facade crate re-exports all public kappa crates for convenient access.
//!
//! ## Crate Organization
//!
//! - [`core`] — Type aliases, errors, and numerical constants
//! - [`transport`] — Exact optimal transport (transportation simplex)
//! - [`graph`] — petgraph adapters, hop distances, local mass distributions
//! - [`curvature`] — Ollivier-Ricci, Lin-Lu-Yau, and Steinerberger curvature
//!
//! ## Entry Points
//!
//! ```no_run
//! let graph = kappa::graph::families::cycle(8);
//! let ricci = kappa::ollivier_ricci_curvature(&graph, 0.5, true)?;
//! let lly = kappa::lin_lu_yau_curvature(&graph, true)?;
//! let node = kappa::steinerberger_curvature(&graph)?;
//! # Ok::<(), kappa::Error>(())
//! ```

pub use kappa_core      as core;
pub use kappa_transport as transport;
pub use kappa_graph     as graph;
pub use kappa_curvature as curvature;

// Re-export commonly used types at the root
pub use kappa_core::*;
pub use kappa_curvature::*;
pub use kappa_graph::Topology;
