use kappa_core::*;
use kappa_graph::Distances;
use kappa_graph::Topology;
use nalgebra::DMatrix;
use nalgebra::DVector;
use std::collections::BTreeMap;

/// Steinerberger curvature of every node.
///
/// Solves D·κ = n·𝟙 in the least-squares sense, κ = D⁺·(n·𝟙), where D is
/// the n×n hop-distance matrix and D⁺ its Moore-Penrose pseudoinverse.
/// Singular values at or below [`PINV_RCOND`] times the largest are
/// dropped, so rank-deficient matrices still produce the minimum-norm
/// solution.
///
/// Values are returned unrounded. Fails with [`Error::InvalidInput`] on an
/// empty or disconnected graph, and with [`Error::Numerical`] when the SVD
/// does not converge or the solution is not finite.
pub fn steinerberger_curvature<G>(graph: &G) -> Result<BTreeMap<G::Node, Kappa>>
where
    G: Topology,
{
    let n = graph.order();
    if n == 0 {
        return Err(Error::InvalidInput("graph has no nodes".into()));
    }
    let start = std::time::Instant::now();
    let distances = Distances::from(graph);
    let matrix = distances.matrix()?;
    let matrix = DMatrix::from_fn(n, n, |i, j| matrix[i][j]);
    let svd = matrix
        .try_svd(true, true, f64::EPSILON, SVD_ITERATIONS)
        .ok_or_else(|| Error::Numerical("distance matrix SVD did not converge".into()))?;
    let cutoff = PINV_RCOND * svd.singular_values.max();
    let rank = svd.rank(cutoff);
    if rank < n {
        log::warn!("distance matrix has rank {} of {}; truncating", rank, n);
    }
    let pinv = svd
        .pseudo_inverse(cutoff)
        .map_err(|e| Error::Numerical(e.to_string()))?;
    let kappa = pinv * DVector::from_element(n, n as Kappa);
    if kappa.iter().any(|k| !k.is_finite()) {
        return Err(Error::Numerical("pseudoinverse produced non-finite curvature".into()));
    }
    log::info!("curved {} nodes in {:?}", n, start.elapsed());
    Ok(distances
        .nodes()
        .iter()
        .copied()
        .zip(kappa.iter().copied())
        .collect())
}
