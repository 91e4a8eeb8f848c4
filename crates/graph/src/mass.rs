use super::topology::Topology;
use kappa_core::*;
use kappa_transport::Density;
use kappa_transport::Support;

/// α-mixed local distribution around a node.
///
/// Places mass α on the center `x` and spreads `1 - α` uniformly over its
/// neighbors. A node without neighbors keeps all of its mass.
///
/// The support is `x` first, then neighbors in ascending order. Transport
/// solvers read rows and columns from [`Density::support`], so the same
/// layout flows through to the cost matrix of any edge.
#[derive(Debug, Clone, PartialEq)]
pub struct Mass<N> {
    atoms: Vec<(N, Probability)>,
}

impl<N> Mass<N>
where
    N: Copy + Ord,
{
    /// Build the α-mixed distribution of `x`.
    /// Fails with [`Error::InvalidInput`] unless `alpha` lies in `[0, 1]`.
    pub fn new<G>(graph: &G, x: N, alpha: Probability) -> Result<Self>
    where
        G: Topology<Node = N>,
    {
        if !(0. ..=1.).contains(&alpha) {
            return Err(Error::InvalidInput(format!(
                "mixing parameter {} outside [0, 1]",
                alpha
            )));
        }
        let neighbors = graph.neighbors(x);
        let spread = (1. - alpha) / neighbors.len().max(1) as Probability;
        let atoms = if neighbors.is_empty() {
            vec![(x, 1.)]
        } else {
            std::iter::once((x, alpha))
                .chain(neighbors.into_iter().map(|y| (y, spread)))
                .collect()
        };
        Ok(Self { atoms })
    }
    /// The node this distribution is centered on.
    pub fn center(&self) -> N {
        self.atoms[0].0
    }
    /// Support points and their masses, center first.
    pub fn atoms(&self) -> &[(N, Probability)] {
        &self.atoms
    }
    /// Total mass, one up to rounding.
    pub fn total(&self) -> Probability {
        self.atoms.iter().map(|(_, p)| p).sum()
    }
}

impl<N> Density for Mass<N>
where
    N: Support,
{
    type Support = N;
    fn density(&self, x: &Self::Support) -> Probability {
        self.atoms.density(x)
    }
    fn support(&self) -> impl Iterator<Item = Self::Support> {
        self.atoms.support()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::families;
    use petgraph::graph::NodeIndex;

    #[test]
    fn masses_sum_to_one() {
        let graph = families::star(5);
        for alpha in [0., 0.1, 0.25, 0.5, 0.9, 1.] {
            for x in graph.node_indices() {
                let mass = Mass::new(&graph, x, alpha).unwrap();
                assert!((mass.total() - 1.).abs() < MASS_TOLERANCE);
                assert!(mass.atoms().iter().all(|(_, p)| *p >= 0.));
            }
        }
    }
    #[test]
    fn center_leads_then_sorted_neighbors() {
        let graph = families::cycle(5);
        let x = NodeIndex::new(0);
        let mass = Mass::new(&graph, x, 0.5).unwrap();
        let support = mass.support().collect::<Vec<_>>();
        assert_eq!(support, vec![x, NodeIndex::new(1), NodeIndex::new(4)]);
        assert_eq!(mass.center(), x);
        assert_eq!(mass.density(&x), 0.5);
        assert_eq!(mass.density(&NodeIndex::new(4)), 0.25);
        assert_eq!(mass.density(&NodeIndex::new(2)), 0.);
    }
    #[test]
    fn isolated_node_keeps_its_mass() {
        let mut graph = petgraph::graph::UnGraph::<(), ()>::new_undirected();
        let x = graph.add_node(());
        graph.add_edge(x, x, ());
        let mass = Mass::new(&graph, x, 0.).unwrap();
        assert_eq!(mass.atoms(), &[(x, 1.)]);
    }
    #[test]
    fn rejects_mixing_outside_unit_interval() {
        let graph = families::path(2);
        let x = NodeIndex::new(0);
        for alpha in [-0.01, 1.01, Probability::NAN] {
            assert!(matches!(
                Mass::new(&graph, x, alpha),
                Err(Error::InvalidInput(_))
            ));
        }
    }
}
