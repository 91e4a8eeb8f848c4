use kappa_core::*;
use kappa_graph::Distances;
use kappa_graph::Mass;
use kappa_graph::Topology;
use std::collections::BTreeMap;
use std::collections::BTreeSet;

/// α-Ollivier-Ricci curvature.
///
/// For an edge (x, y), κ(x, y) = 1 − W(μ_x, μ_y), where μ is the α-mixed
/// [`Mass`] around each endpoint and W is the exact earth mover's distance
/// under hop counts.
///
/// # Mirroring
///
/// Every undirected edge is solved once; parallel edges collapse.
///
/// - `mirror = true` orients each edge with the smaller node first and
///   stores the value under both `(x, y)` and `(y, x)`.
/// - `mirror = false` keeps the orientation the graph enumerates and
///   stores a single entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ollivier {
    pub(crate) alpha: Probability,
    pub(crate) mirror: bool,
}

impl Default for Ollivier {
    fn default() -> Self {
        Self {
            alpha: 0.5,
            mirror: true,
        }
    }
}

impl Ollivier {
    /// Fails with [`Error::InvalidInput`] unless `alpha` lies in `[0, 1]`.
    pub fn new(alpha: Probability) -> Result<Self> {
        if !(0. ..=1.).contains(&alpha) {
            return Err(Error::InvalidInput(format!(
                "mixing parameter {} outside [0, 1]",
                alpha
            )));
        }
        Ok(Self {
            alpha,
            mirror: true,
        })
    }
    /// Whether [`curvature`](Ollivier::curvature) stores each edge under
    /// both orientations. On by default.
    pub fn mirror(self, mirror: bool) -> Self {
        Self { mirror, ..self }
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
        for node in [x, y] {
            if distances.index(&node).is_none() {
                return Err(Error::InvalidInput(format!(
                    "node {:?} is not in the distance table",
                    node
                )));
            }
        }
        let source = Mass::new(graph, x, self.alpha)?;
        let target = Mass::new(graph, y, self.alpha)?;
        let cost = kappa_transport::emd(&source, &target, distances)?;
        log::trace!("{:?} -> {:?} transport cost {:.6}", x, y, cost);
        Ok(1. - cost)
    }

    /// Rounded curvature of every edge.
    pub fn curvature<G>(&self, graph: &G) -> Result<BTreeMap<(G::Node, G::Node), Kappa>>
    where
        G: Topology,
    {
        self.aggregate(graph, round)
    }

    /// Undirected edges to solve, once each, oriented per the mirror policy.
    fn pairs<G>(&self, graph: &G) -> Vec<(G::Node, G::Node)>
    where
        G: Topology,
    {
        let mut seen = BTreeSet::new();
        graph
            .edges()
            .map(|(x, y)| if self.mirror { (x.min(y), x.max(y)) } else { (x, y) })
            .filter(|&(x, y)| seen.insert((x.min(y), x.max(y))))
            .collect()
    }

    /// Solve every edge, map each raw value through `finish`, and lay the
    /// results out per the mirror policy.
    pub(crate) fn aggregate<G, F>(
        &self,
        graph: &G,
        finish: F,
    ) -> Result<BTreeMap<(G::Node, G::Node), Kappa>>
    where
        G: Topology,
        F: Fn(Kappa) -> Kappa + Sync,
    {
        let start = std::time::Instant::now();
        let distances = Distances::from(graph);
        let pairs = self.pairs(graph);
        log::info!(
            "curving {} edges over {} nodes (alpha {}, mirror {})",
            pairs.len(),
            graph.order(),
            self.alpha,
            self.mirror
        );
        let solve = |&(x, y): &(G::Node, G::Node)| {
            self.edge(graph, &distances, x, y)
                .map(|kappa| ((x, y), finish(kappa)))
        };
        #[cfg(feature = "parallel")]
        let values = {
            use rayon::prelude::*;
            pairs.par_iter().map(solve).collect::<Result<Vec<_>>>()?
        };
        #[cfg(not(feature = "parallel"))]
        let values = pairs.iter().map(solve).collect::<Result<Vec<_>>>()?;
        let mut curvature = BTreeMap::new();
        for ((x, y), kappa) in values {
            log::debug!("{:?} -- {:?} : {:.3}", x, y, kappa);
            curvature.insert((x, y), kappa);
            if self.mirror {
                curvature.insert((y, x), kappa);
            }
        }
        log::info!("curved {} edges in {:?}", pairs.len(), start.elapsed());
        Ok(curvature)
    }
}

/// α-Ollivier-Ricci curvature of every edge, rounded.
pub fn ollivier_ricci_curvature<G>(
    graph: &G,
    alpha: Probability,
    mirror: bool,
) -> Result<BTreeMap<(G::Node, G::Node), Kappa>>
where
    G: Topology,
{
    Ollivier::new(alpha)?.mirror(mirror).curvature(graph)
}
