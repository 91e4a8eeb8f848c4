use super::density::Density;
use super::measure::Measure;
use super::support::Support;
use kappa_core::Energy;
use kappa_core::Probability;
use kappa_core::Result;

/// A transport plan (coupling) between two probability distributions.
///
/// In optimal transport theory, a coupling is a joint distribution π(x,y) whose
/// marginals match the source distribution P and target distribution Q. The
/// transport cost is the expected ground cost under this joint distribution.
///
/// # Type Parameters
///
/// - `X` — Source support space
/// - `Y` — Target support space
/// - `M` — Ground metric defining transport costs
/// - `P` — Source distribution (marginal over X)
/// - `Q` — Target distribution (marginal over Y)
///
/// # Algorithm Contract
///
/// Implementations must ensure that after [`minimize`](Coupling::minimize)
/// succeeds, [`cost`](Coupling::cost) returns the optimal transport cost.
/// A solver that cannot certify optimality must fail instead of returning
/// an approximate plan.
pub trait Coupling: Sized {
    /// Source support space.
    type X: Support;
    /// Target support space.
    type Y: Support;
    /// Ground metric for transport costs.
    type M: Measure<X = Self::X, Y = Self::Y>;
    /// Source probability distribution.
    type P: Density<Support = Self::X>;
    /// Target probability distribution.
    type Q: Density<Support = Self::Y>;
    /// Optimizes the coupling to minimize total transport cost.
    ///
    /// Fails with [`Error::Numerical`](kappa_core::Error::Numerical) when the
    /// problem is infeasible or the solver does not converge.
    fn minimize(self) -> Result<Self>;
    /// Returns the mass transported from `x` to `y` in the coupling.
    fn flow(&self, x: &Self::X, y: &Self::Y) -> Probability;
    /// Returns the total transport cost of this coupling.
    ///
    /// This is the sum of `flow(x, y) * distance(x, y)` over all pairs.
    fn cost(&self) -> Energy;
}
