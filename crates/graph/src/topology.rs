use petgraph::Undirected;
use petgraph::graph::Graph;
use petgraph::graph::IndexType;
use petgraph::graph::NodeIndex;
use petgraph::graphmap::GraphMap;
use petgraph::graphmap::NodeTrait;
use petgraph::graphmap::UnGraphMap;
use petgraph::visit::EdgeRef;
use std::fmt::Debug;
use std::hash::Hash;

/// Read-only view of a finite, undirected, unweighted graph.
///
/// This is the only surface the curvature algorithms consume. Storage,
/// construction, and mutation stay with the graph library behind it.
///
/// # Neighborhoods
///
/// [`neighbors`](Topology::neighbors) yields distinct nodes other than the
/// query node, in ascending order. Self-loops and parallel edges therefore
/// leave neighborhoods, degrees, and hop distances unchanged.
///
/// # Implementations
///
/// - `petgraph::graph::UnGraph<N, E, Ix>` — nodes are `NodeIndex<Ix>`
/// - `petgraph::graphmap::UnGraphMap<N, E>` — nodes are the weights themselves
pub trait Topology: Sync {
    /// Stable node identifier.
    type Node: Copy + Ord + Hash + Debug + Send + Sync;
    /// Every node, in a stable order.
    fn nodes(&self) -> impl Iterator<Item = Self::Node>;
    /// Every edge once, in the orientation the graph stores it.
    fn edges(&self) -> impl Iterator<Item = (Self::Node, Self::Node)>;
    /// Distinct neighbors of `x` other than `x`, ascending.
    fn neighbors(&self, x: Self::Node) -> Vec<Self::Node>;
    /// Number of distinct neighbors of `x`.
    fn degree(&self, x: Self::Node) -> usize {
        self.neighbors(x).len()
    }
    /// Number of nodes.
    fn order(&self) -> usize;
}

impl<N, E, Ix> Topology for Graph<N, E, Undirected, Ix>
where
    N: Sync,
    E: Sync,
    Ix: IndexType + Send + Sync,
{
    type Node = NodeIndex<Ix>;
    fn nodes(&self) -> impl Iterator<Item = Self::Node> {
        self.node_indices()
    }
    fn edges(&self) -> impl Iterator<Item = (Self::Node, Self::Node)> {
        self.edge_references().map(|e| (e.source(), e.target()))
    }
    fn neighbors(&self, x: Self::Node) -> Vec<Self::Node> {
        let mut neighbors = Graph::neighbors(self, x)
            .filter(|&y| y != x)
            .collect::<Vec<_>>();
        neighbors.sort();
        neighbors.dedup();
        neighbors
    }
    fn order(&self) -> usize {
        self.node_count()
    }
}

impl<N, E> Topology for UnGraphMap<N, E>
where
    N: NodeTrait + Debug + Send + Sync,
    E: Sync,
{
    type Node = N;
    fn nodes(&self) -> impl Iterator<Item = Self::Node> {
        GraphMap::nodes(self)
    }
    fn edges(&self) -> impl Iterator<Item = (Self::Node, Self::Node)> {
        self.all_edges().map(|(a, b, _)| (a, b))
    }
    fn neighbors(&self, x: Self::Node) -> Vec<Self::Node> {
        let mut neighbors = GraphMap::neighbors(self, x)
            .filter(|&y| y != x)
            .collect::<Vec<_>>();
        neighbors.sort();
        neighbors.dedup();
        neighbors
    }
    fn order(&self) -> usize {
        self.node_count()
    }
}
