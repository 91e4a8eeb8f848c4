use super::ollivier::Ollivier;
use kappa_core::*;
use kappa_graph::Distances;
use kappa_graph::Topology;
use std::collections::BTreeMap;

/// Mixing parameter at which Lin-Lu-Yau coincides with half of Ollivier-Ricci.
const LAZINESS: Probability = 0.5;

/// Lin-Lu-Yau curvature, κ_LLY(x, y) = 2 · κ_{1/2}(x, y).
///
/// Doubling happens before rounding, so a reported value may differ from
/// twice the rounded Ollivier-Ricci value by one unit in the last digit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinLuYau(Ollivier);

impl Default for LinLuYau {
    fn default() -> Self {
        Self(Ollivier {
            alpha: LAZINESS,
            mirror: true,
        })
    }
}

impl LinLuYau {
    /// Whether [`curvature`](LinLuYau::curvature) stores each edge under
    /// both orientations. On by default.
    pub fn mirror(self, mirror: bool) -> Self {
        Self(self.0.mirror(mirror))
    }
    /// Unrounded curvature of the pair (x, y) against a prebuilt table.
    pub fn edge<G>(
        &self,
        graph: &G,
        distances: &Distances<G::Node>,
        x: G::Node,
        y: G::Node,
    ) -> Result<Kappa>
    where
        G: Topology,
    {
        self.0.edge(graph, distances, x, y).map(|kappa| 2. * kappa)
    }
    /// Rounded curvature of every edge.
    pub fn curvature<G>(&self, graph: &G) -> Result<BTreeMap<(G::Node, G::Node), Kappa>>
    where
        G: Topology,
    {
        self.0.aggregate(graph, |kappa| round(2. * kappa))
    }
}

impl From<bool> for LinLuYau {
    fn from(mirror: bool) -> Self {
        Self::default().mirror(mirror)
    }
}

/// Lin-Lu-Yau curvature of every edge, rounded.
pub fn lin_lu_yau_curvature<G>(
    graph: &G,
    mirror: bool,
) -> Result<BTreeMap<(G::Node, G::Node), Kappa>>
where
    G: Topology,
{
    LinLuYau::from(mirror).curvature(graph)
}
