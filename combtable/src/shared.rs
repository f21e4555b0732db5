//! Process-wide tables for the native widths, built on first use.
//!
//! Sized to the largest n whose row fits the width, so every lookup that the
//! width can represent is available without building a table per caller.

use once_cell::sync::Lazy;

use crate::coefficient::{U128_EXACT_MAX_N, U64_EXACT_MAX_N};
use crate::table::CombinationTable;

static SHARED_U64: Lazy<CombinationTable<u64>> = Lazy::new(|| {
    CombinationTable::try_from_usize(U64_EXACT_MAX_N).expect("u64 rows up to 67 fit")
});

static SHARED_U128: Lazy<CombinationTable<u128>> = Lazy::new(|| {
    CombinationTable::try_from_usize(U128_EXACT_MAX_N).expect("u128 rows up to 131 fit")
});

/// Shared `u64` table covering n <= 67.
pub fn shared_u64() -> &'static CombinationTable<u64> {
    &SHARED_U64
}

/// Shared `u128` table covering n <= 131.
pub fn shared_u128() -> &'static CombinationTable<u128> {
    &SHARED_U128
}
