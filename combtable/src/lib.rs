//! Precomputed binomial coefficient tables
//!
//! This crate trades memory for lookup speed:
//! - `table`: Pascal's-triangle table built once, queried in O(1)
//! - `coefficient`: element types a table can hold, with checked addition
//! - `direct`: multiplicative C(n,k), used as a reference and a benchmark baseline
//! - `shared`: lazily built process-wide tables for the native widths
//! - `verify`: per-row invariant checks (endpoints, symmetry, Pascal, row sums)
//! - `error`: `TableError` and argument parsing

pub mod coefficient;
pub mod direct;
pub mod error;
pub mod shared;
pub mod table;
pub mod verify;

pub use coefficient::{Coefficient, U128_EXACT_MAX_N, U32_EXACT_MAX_N, U64_EXACT_MAX_N};
pub use error::{parse_index, Result, TableError};
pub use table::CombinationTable;

#[cfg(any(kani, test))]
#[path = "kani_proofs.rs"]
mod kani_proofs;
