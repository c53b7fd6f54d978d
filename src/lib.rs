//! Sequence Algorithm Demos
//!
//! Small runnable demos of classic sequence algorithms, each one building a
//! fixed input, calling a single algorithm and printing what it returns.
//!
//! ## Algorithms
//!
//! 1. **Counting** - `count_if`, `minmax_element`
//! 2. **Copying and filling** - `copy_backward`, `generate_n`, `shuffle`
//! 3. **Partitions and heaps** - `partition_point`, `is_heap_until`
//! 4. **Sorted inputs** - `set_symmetric_difference`, `partial_sort_copy`, `equal_range`
//! 5. **Comparison** - `mismatch`
//!
//! Algorithms that need a particular input shape check it first and return
//! [`AlgorithmError`] instead of misbehaving.
//!
//! ## Running Demos
//!
//! ```bash
//! cargo run --bin count_if
//! cargo run --bin equal_range
//! cargo run --bin seqdemo -- list
//! cargo run --bin seqdemo -- run shuffle --seed 7
//! cargo run --bin seqdemo -- all --config demos.toml
//! ```

pub mod algo;
pub mod config;
pub mod demo;
pub mod error;
pub mod position;

pub use config::{ConfigError, DemoConfig};
pub use demo::{DemoKind, Outcome, Runner};
pub use error::{AlgorithmError, Result, Violation};
pub use position::Position;
