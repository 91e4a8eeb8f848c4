use super::support::Support;
use kappa_core::Energy;

/// Ground metric between elements of two support spaces.
///
/// Defines the cost of transporting one unit of mass from a point in
/// the source space to a point in the target space. This is the "ground cost"
/// that optimal transport algorithms minimize over.
///
/// # Type Parameters
///
/// - `X` — Source support space (e.g., nodes around one endpoint of an edge)
/// - `Y` — Target support space (e.g., nodes around the other endpoint)
///
/// While `X` and `Y` are often the same type, the trait supports heterogeneous
/// transport problems where source and target live in different spaces.
///
/// # Implementations
///
/// - **Distances**: shortest-path hop counts from a precomputed table (`kappa-graph`)
/// - **Dense**: `Vec<Vec<Energy>>` indexed by support position
pub trait Measure {
    /// Source support space.
    type X: Support;
    /// Target support space.
    type Y: Support;
    /// Returns the cost of transporting mass from `x` to `y`.
    fn distance(&self, x: &Self::X, y: &Self::Y) -> Energy;
}

/// Dense cost matrix indexed by support position.
impl Measure for Vec<Vec<Energy>> {
    type X = usize;
    type Y = usize;
    fn distance(&self, x: &Self::X, y: &Self::Y) -> Energy {
        self.get(*x)
            .and_then(|row| row.get(*y))
            .copied()
            .unwrap_or(Energy::INFINITY)
    }
}
