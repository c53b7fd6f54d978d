//! Checked sequence algorithms.
//!
//! Operations with an input precondition (sortedness, partitioning, buffer
//! capacity, range bounds) validate it before touching any buffer and return
//! [`AlgorithmError`](crate::error::AlgorithmError) on violation.

mod copying;
mod counting;
mod heap;
mod partition;
mod random;
mod searching;
mod set_ops;
mod sorting;

pub use copying::{copy_backward, copy_to_end, generate_n};
pub use counting::{count_if, minmax, minmax_element};
pub use heap::{is_heap, is_heap_until};
pub use partition::{is_partitioned, partition_point};
pub use random::shuffle;
pub use searching::{equal_range, mismatch};
pub use set_ops::set_symmetric_difference;
pub use sorting::{is_sorted, partial_sort_copy};
