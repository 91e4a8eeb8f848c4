//! Small graph families with known curvature, for tests and benches.
use kappa_core::Arbitrary;
use petgraph::graph::UnGraph;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

fn build(n: usize, edges: impl IntoIterator<Item = (usize, usize)>) -> UnGraph<(), ()> {
    let mut graph = UnGraph::with_capacity(n, 0);
    let nodes = (0..n).map(|_| graph.add_node(())).collect::<Vec<_>>();
    for (a, b) in edges {
        graph.add_edge(nodes[a], nodes[b], ());
    }
    graph
}

/// K_n.
pub fn complete(n: usize) -> UnGraph<(), ()> {
    build(n, (0..n).flat_map(|i| (i + 1..n).map(move |j| (i, j))))
}
/// C_n. Needs `n >= 3` to be simple.
pub fn cycle(n: usize) -> UnGraph<(), ()> {
    build(n, (0..n).map(|i| (i, (i + 1) % n)))
}
/// P_n, nodes in order along the path.
pub fn path(n: usize) -> UnGraph<(), ()> {
    build(n, (1..n).map(|i| (i - 1, i)))
}
/// Star with center 0 and `leaves` leaves.
pub fn star(leaves: usize) -> UnGraph<(), ()> {
    build(leaves + 1, (1..=leaves).map(|i| (0, i)))
}
/// `rows × cols` lattice, row-major node order.
pub fn grid(rows: usize, cols: usize) -> UnGraph<(), ()> {
    let at = move |r: usize, c: usize| r * cols + c;
    build(
        rows * cols,
        (0..rows).flat_map(move |r| {
            (0..cols).flat_map(move |c| {
                std::iter::empty()
                    .chain((c + 1 < cols).then(|| (at(r, c), at(r, c + 1))))
                    .chain((r + 1 < rows).then(|| (at(r, c), at(r + 1, c))))
            })
        }),
    )
}
/// Disjoint copies of `count` triangles.
pub fn triangles(count: usize) -> UnGraph<(), ()> {
    build(
        3 * count,
        (0..count).flat_map(|t| [(3 * t, 3 * t + 1), (3 * t + 1, 3 * t + 2), (3 * t + 2, 3 * t)]),
    )
}

/// Connected random graph: a random spanning tree plus independent extra edges.
pub struct Random(pub UnGraph<(), ()>);

impl Random {
    /// Reproducible draw: the same seed always yields the same graph.
    pub fn seeded(seed: u64) -> Self {
        let ref mut rng = SmallRng::seed_from_u64(seed);
        let n = rng.random_range(4..16);
        let tree = (1..n)
            .map(|i| (rng.random_range(0..i), i))
            .collect::<Vec<_>>();
        let extra = (0..n)
            .flat_map(|i| (i + 1..n).map(move |j| (i, j)))
            .filter(|(i, j)| !tree.contains(&(*i, *j)))
            .collect::<Vec<_>>()
            .into_iter()
            .filter(|_| rng.random_bool(0.25))
            .collect::<Vec<_>>();
        Self(build(n, tree.into_iter().chain(extra)))
    }
}

impl Arbitrary for Random {
    fn random() -> Self {
        let seed = rand::rng().random::<u64>();
        log::debug!("drawing random graph from seed {}", seed);
        Self::seeded(seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::Topology;

    #[test]
    fn seeded_draws_repeat() {
        for seed in 0..16 {
            let Random(a) = Random::seeded(seed);
            let Random(b) = Random::seeded(seed);
            assert_eq!(Topology::order(&a), Topology::order(&b));
            assert_eq!(
                Topology::edges(&a).collect::<Vec<_>>(),
                Topology::edges(&b).collect::<Vec<_>>()
            );
        }
    }
    #[test]
    fn random_graphs_are_connected() {
        for seed in 0..16 {
            let Random(graph) = Random::seeded(seed);
            assert!(crate::Distances::from(&graph).is_connected(), "seed {}", seed);
        }
    }
}
