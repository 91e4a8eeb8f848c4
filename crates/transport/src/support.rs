/// Marker trait for types that form the support of a probability distribution.
///
/// In measure theory, the support of a distribution is the smallest closed set
/// containing all points with positive probability. This trait marks types that
/// can serve as elements of such a support set.
///
/// The `Clone` bound enables copying support elements when laying out
/// transport plans; `Eq` lets a plan locate an element again by value.
pub trait Support: Clone + Eq {}

/// Any cloneable, comparable identifier can index a distribution: graph
/// node ids, plain `usize` positions, or labels.
impl<T> Support for T where T: Clone + Eq {}
