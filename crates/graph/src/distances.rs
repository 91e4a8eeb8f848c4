use super::topology::Topology;
use kappa_core::*;
use kappa_transport::Measure;
use std::collections::BTreeMap;
use std::collections::VecDeque;

/// Hop count stored for pairs with no connecting path.
const UNREACHABLE: u32 = u32::MAX;

/// All-pairs shortest-path hop distances.
///
/// Built by one breadth-first search per source node, O(n·(n + m)) overall.
/// The table is symmetric with a zero diagonal, so only the strict lower
/// triangle is stored, as a flat array indexed by [`Distances::triangular`].
///
/// Once built the table is read-only; aggregators build one per call and
/// share it by reference across every edge they evaluate.
#[derive(Debug, Clone)]
pub struct Distances<N> {
    /// Nodes in dense index order.
    nodes: Vec<N>,
    /// Dense index of each node.
    index: BTreeMap<N, usize>,
    /// Lower-triangle hop counts, `UNREACHABLE` for disconnected pairs.
    hops: Vec<u32>,
}

impl<N> Distances<N>
where
    N: Copy + Ord,
{
    /// Flat position of the unordered pair `{i, j}`, `i != j`.
    fn triangular(i: usize, j: usize) -> usize {
        let (hi, lo) = if i > j { (i, j) } else { (j, i) };
        hi * (hi - 1) / 2 + lo
    }
    /// Hop counts from `source` to every node, by dense index.
    fn bfs<G>(graph: &G, nodes: &[N], index: &BTreeMap<N, usize>, source: usize) -> Vec<u32>
    where
        G: Topology<Node = N>,
    {
        let mut hops = vec![UNREACHABLE; nodes.len()];
        let mut queue = VecDeque::from([source]);
        hops[source] = 0;
        while let Some(i) = queue.pop_front() {
            for y in graph.neighbors(nodes[i]) {
                if let Some(&j) = index.get(&y) {
                    if hops[j] == UNREACHABLE {
                        hops[j] = hops[i] + 1;
                        queue.push_back(j);
                    }
                }
            }
        }
        hops
    }

    /// Number of nodes covered by the table.
    pub fn order(&self) -> usize {
        self.nodes.len()
    }
    /// Nodes in dense index order.
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }
    /// Dense index of `x`, if the table covers it.
    pub fn index(&self, x: &N) -> Option<usize> {
        self.index.get(x).copied()
    }
    /// Hop count between `x` and `y`.
    /// `None` if no path connects them or either node is unknown.
    pub fn hops(&self, x: &N, y: &N) -> Option<u32> {
        let i = self.index(x)?;
        let j = self.index(y)?;
        if i == j {
            Some(0)
        } else {
            Some(self.hops[Self::triangular(i, j)]).filter(|&h| h != UNREACHABLE)
        }
    }
    /// Whether every pair of nodes is connected.
    pub fn is_connected(&self) -> bool {
        self.hops.iter().all(|&h| h != UNREACHABLE)
    }
    /// Largest finite hop count, zero for graphs with fewer than two nodes.
    pub fn diameter(&self) -> u32 {
        self.hops
            .iter()
            .copied()
            .filter(|&h| h != UNREACHABLE)
            .max()
            .unwrap_or(0)
    }
    /// Dense n×n matrix in [`nodes`](Distances::nodes) order.
    ///
    /// Fails with [`Error::InvalidInput`] when some pair is unreachable:
    /// there is no finite matrix to hand to downstream linear algebra.
    pub fn matrix(&self) -> Result<Vec<Vec<Energy>>> {
        if !self.is_connected() {
            return Err(Error::InvalidInput(
                "graph is disconnected; some hop distances are infinite".into(),
            ));
        }
        let n = self.order();
        Ok((0..n)
            .map(|i| {
                (0..n)
                    .map(|j| if i == j { 0. } else { self.hops[Self::triangular(i, j)] as Energy })
                    .collect()
            })
            .collect())
    }
}

impl<'a, G> From<&'a G> for Distances<G::Node>
where
    G: Topology,
{
    fn from(graph: &'a G) -> Self {
        let nodes = graph.nodes().collect::<Vec<_>>();
        let index = nodes
            .iter()
            .enumerate()
            .map(|(i, &x)| (x, i))
            .collect::<BTreeMap<_, _>>();
        let n = nodes.len();
        // strict lower triangle of row s
        let lower = |s: usize| Self::bfs(graph, &nodes, &index, s)[..s].to_vec();
        #[cfg(feature = "parallel")]
        let hops = {
            use rayon::prelude::*;
            (0..n).into_par_iter().flat_map_iter(lower).collect::<Vec<_>>()
        };
        #[cfg(not(feature = "parallel"))]
        let hops = (0..n).flat_map(lower).collect::<Vec<_>>();
        log::debug!("built hop distances over {} nodes", n);
        Self { nodes, index, hops }
    }
}

/// Hop counts as ground costs for optimal transport.
/// Unreachable or unknown pairs cost infinity.
impl<N> Measure for Distances<N>
where
    N: Copy + Ord,
{
    type X = N;
    type Y = N;
    fn distance(&self, x: &Self::X, y: &Self::Y) -> Energy {
        self.hops(x, y)
            .map(|h| h as Energy)
            .unwrap_or(Energy::INFINITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::families;
    use petgraph::graph::NodeIndex;
    use petgraph::graph::UnGraph;

    #[test]
    fn flattens_rows_in_triangular_order() {
        let mut position = 0;
        for i in 1..12 {
            for j in 0..i {
                assert_eq!(Distances::<usize>::triangular(i, j), position);
                assert_eq!(Distances::<usize>::triangular(j, i), position);
                position += 1;
            }
        }
    }
    #[test]
    fn path_distances_count_hops() {
        let graph = families::path(5);
        let distances = Distances::from(&graph);
        let x = NodeIndex::new(0);
        for k in 0..5 {
            let y = NodeIndex::new(k);
            assert_eq!(distances.hops(&x, &y), Some(k as u32));
            assert_eq!(distances.hops(&y, &x), Some(k as u32));
        }
        assert_eq!(distances.diameter(), 4);
        assert!(distances.is_connected());
        assert_eq!(distances.hops.len(), 5 * 4 / 2);
    }
    #[test]
    fn cycle_distances_wrap_around() {
        let graph = families::cycle(6);
        let distances = Distances::from(&graph);
        let x = NodeIndex::new(0);
        assert_eq!(distances.hops(&x, &NodeIndex::new(5)), Some(1));
        assert_eq!(distances.hops(&x, &NodeIndex::new(3)), Some(3));
        assert_eq!(distances.diameter(), 3);
    }
    #[test]
    fn random_graphs_satisfy_metric_axioms() {
        for seed in 0..16 {
            let families::Random(graph) = families::Random::seeded(seed);
            let distances = Distances::from(&graph);
            let nodes = distances.nodes().to_vec();
            for x in nodes.iter() {
                assert_eq!(distances.hops(x, x), Some(0));
                for y in nodes.iter() {
                    let xy = distances.distance(x, y);
                    assert_eq!(xy, distances.distance(y, x));
                    for z in nodes.iter() {
                        let xz = distances.distance(x, z);
                        let zy = distances.distance(z, y);
                        assert!(xy <= xz + zy, "{:?} {:?} {:?}", x, y, z);
                    }
                }
            }
        }
    }
    #[test]
    fn disconnected_pairs_are_unreachable() {
        let mut graph = UnGraph::<(), ()>::new_undirected();
        let a = graph.add_node(());
        let b = graph.add_node(());
        let c = graph.add_node(());
        graph.add_edge(a, b, ());
        let distances = Distances::from(&graph);
        assert_eq!(distances.hops(&a, &b), Some(1));
        assert_eq!(distances.hops(&a, &c), None);
        assert_eq!(distances.distance(&a, &c), Energy::INFINITY);
        assert!(!distances.is_connected());
        assert!(matches!(distances.matrix(), Err(Error::InvalidInput(_))));
    }
    #[test]
    fn matrix_is_symmetric_with_zero_diagonal() {
        let graph = families::star(4);
        let matrix = Distances::from(&graph).matrix().unwrap();
        assert_eq!(matrix.len(), 5);
        for i in 0..5 {
            assert_eq!(matrix[i][i], 0.);
            for j in 0..5 {
                assert_eq!(matrix[i][j], matrix[j][i]);
            }
        }
        assert_eq!(matrix[0][3], 1.);
        assert_eq!(matrix[1][4], 2.);
    }
    #[test]
    fn unknown_nodes_have_no_distance() {
        let graph = families::path(2);
        let distances = Distances::from(&graph);
        let ghost = NodeIndex::new(7);
        assert_eq!(distances.index(&ghost), None);
        assert_eq!(distances.hops(&ghost, &NodeIndex::new(0)), None);
    }
}
