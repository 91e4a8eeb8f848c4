use super::support::Support;
use kappa_core::Probability;

/// A discrete probability distribution over a support set.
///
/// Provides access to probability mass at each point and iteration over
/// the support. This abstraction enables optimal transport algorithms to
/// work with any collection type that maps elements to probabilities.
///
/// # Required Methods
///
/// - [`density`](Density::density) — Query probability at a point
/// - [`support`](Density::support) — Iterate over points in the support
///
/// # Ordering
///
/// Solvers lay out rows and columns in `support()` order, so an
/// implementation must yield the same order on every call.
///
/// # Implementations
///
/// - `Vec<(T, Probability)>` — Association list with O(n) lookup, for the
///   handful of atoms a one-hop neighborhood carries
/// - `Mass<N>` in `kappa-graph` — α-mixed neighborhood of a node
pub trait Density {
    /// The type of elements in the distribution's support.
    type Support: Support;
    /// Returns the probability mass at point `x`, or 0 if not in support.
    fn density(&self, x: &Self::Support) -> Probability;
    /// Iterates over all points in the support.
    fn support(&self) -> impl Iterator<Item = Self::Support>;
}

impl<T> Density for Vec<(T, Probability)>
where
    T: Support,
{
    type Support = T;
    fn density(&self, x: &Self::Support) -> Probability {
        self.iter()
            .find(|(a, _)| a == x)
            .map(|(_, p)| p)
            .copied()
            .unwrap_or(0.)
    }
    fn support(&self) -> impl Iterator<Item = Self::Support> {
        self.iter().map(|(a, _)| a).cloned()
    }
}
