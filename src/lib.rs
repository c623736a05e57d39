//! This crate provides a manual parallel transform-reduce over integer
//! slices and compares its latency against sequential and rayon
//! reductions: it partitions the input into per-worker blocks, spawns
//! one fresh thread per block, and merges the partial results.
#![deny(missing_docs)]
#![warn(clippy::all)]

mod ops;
pub use crate::ops::{BinaryOp, UnaryOp};
mod partition;
pub use crate::partition::{effective_workers, hardware_parallelism, partition};
mod reduce;
pub use crate::reduce::{transform_reduce, Error};

mod input;
pub use crate::input::{random_vector, seeded_vector};
mod measure;
pub use crate::measure::measure;

mod stats;
pub use crate::stats::{time_string, Nanos, Stats};
mod compare;
pub use crate::compare::{AlgorithmLog, Comparator, ComparisonLog};
