criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        building_grid_distances,
        building_lazy_mass,
        computing_optimal_transport_simplex,
        curving_random_graph_ollivier,
        curving_complete_graph_ollivier,
        curving_grid_lin_lu_yau,
        curving_grid_steinerberger,
}

fn building_grid_distances(c: &mut criterion::Criterion) {
    let graph = families::grid(16, 16);
    c.bench_function("build hop distances on a 16x16 grid", |b| {
        b.iter(|| Distances::from(&graph))
    });
}

fn building_lazy_mass(c: &mut criterion::Criterion) {
    let graph = families::complete(32);
    let x = graph.node_indices().next().expect("nonempty");
    c.bench_function("build a lazy mass on K32", |b| {
        b.iter(|| Mass::new(&graph, x, 0.5))
    });
}

fn computing_optimal_transport_simplex(c: &mut criterion::Criterion) {
    let graph = families::complete(24);
    let ref distances = Distances::from(&graph);
    let mut nodes = graph.node_indices();
    let x = nodes.next().expect("nonempty");
    let y = nodes.next().expect("nonempty");
    let ref source = Mass::new(&graph, x, 0.).expect("valid mixing");
    let ref target = Mass::new(&graph, y, 0.).expect("valid mixing");
    c.bench_function("compute optimal transport (transportation simplex)", |b| {
        b.iter(|| Simplex::from((source, target, distances)).minimize().map(|s| s.cost()))
    });
}

fn curving_random_graph_ollivier(c: &mut criterion::Criterion) {
    let families::Random(graph) = families::Random::random();
    c.bench_function("curve a random graph (Ollivier-Ricci)", |b| {
        b.iter(|| kappa::ollivier_ricci_curvature(&graph, 0.5, true))
    });
}

fn curving_complete_graph_ollivier(c: &mut criterion::Criterion) {
    let graph = families::complete(16);
    c.bench_function("curve K16 (Ollivier-Ricci)", |b| {
        b.iter(|| kappa::ollivier_ricci_curvature(&graph, 0., true))
    });
}

fn curving_grid_lin_lu_yau(c: &mut criterion::Criterion) {
    let graph = families::grid(8, 8);
    c.bench_function("curve an 8x8 grid (Lin-Lu-Yau)", |b| {
        b.iter(|| kappa::lin_lu_yau_curvature(&graph, true))
    });
}

fn curving_grid_steinerberger(c: &mut criterion::Criterion) {
    let graph = families::grid(8, 8);
    c.bench_function("curve an 8x8 grid (Steinerberger)", |b| {
        b.iter(|| kappa::steinerberger_curvature(&graph))
    });
}

use kappa::Arbitrary;
use kappa::graph::Distances;
use kappa::graph::Mass;
use kappa::graph::families;
use kappa::transport::Coupling;
use kappa::transport::Simplex;
