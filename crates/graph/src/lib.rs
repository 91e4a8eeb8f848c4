//! Graph-side building blocks for discrete curvature.
//!
//! ## Core Types
//!
//! - [`Topology`] — Read-only graph view, implemented for petgraph graphs
//! - [`Distances`] — All-pairs hop distances; also the transport ground metric
//! - [`Mass`] — α-mixed local distribution around a node
//!
//! ## Fixtures
//!
//! - [`families`] — Complete graphs, cycles, paths, stars, grids, and random
//!   connected graphs with known curvature
mod distances;
mod mass;
mod topology;

pub mod families;

pub use distances::*;
pub use mass::*;
pub use topology::*;
