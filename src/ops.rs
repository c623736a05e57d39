//! Capability traits for the two operator seams of a reduction:
//! the per-element transform and the binary combine.

/// A unary operation applied to every element before combining.
///
/// Blanket-implemented for any `Fn(T) -> T`, so plain functions,
/// closures and dedicated operator structs all qualify.
pub trait UnaryOp<T> {
    /// Transform one value.
    fn apply(&self, value: T) -> T;
}

impl<T, F> UnaryOp<T> for F
where
    F: Fn(T) -> T,
{
    fn apply(&self, value: T) -> T {
        self(value)
    }
}

/// A binary operation merging two transformed values into one.
///
/// The parallel reduction is only deterministic when this operation is
/// commutative and associative. Nothing checks it: a combine violating
/// either law still runs but yields partition-dependent results.
pub trait BinaryOp<T> {
    /// Combine two values into one.
    fn combine(&self, left: T, right: T) -> T;
}

impl<T, F> BinaryOp<T> for F
where
    F: Fn(T, T) -> T,
{
    fn combine(&self, left: T, right: T) -> T {
        self(left, right)
    }
}
