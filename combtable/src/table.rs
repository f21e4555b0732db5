//! Pascal's-triangle lookup table for C(n,k).
//!
//! Rows 0..=max_n are built eagerly at construction: row 0 is `[1]` and every
//! following row is the previous row padded with a zero on each side and summed
//! pairwise. Only additions are performed, so there is no factorial overflow or
//! precision loss; an entry too large for the element type fails construction
//! with [`TableError::Overflow`].
//!
//! Queries follow one convention for `k > n`: the coefficient is 0, not an error.

use std::iter;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::coefficient::{Coefficient, U128_EXACT_MAX_N};
use crate::error::{Result, TableError};

/// Rows shorter than this are summed on the calling thread even with `parallel`.
#[cfg(feature = "parallel")]
const PARALLEL_ROW_THRESHOLD: usize = 1024;

/// Precomputed binomial coefficients for every 0 <= k <= n <= max_n.
///
/// Immutable after construction, so a built table can be shared across
/// threads by reference.
#[derive(Debug, Clone, PartialEq)]
pub struct CombinationTable<T = u64> {
    max_n: usize,
    /// rows[n][k] = C(n,k), rows[n].len() == n + 1
    rows: Vec<Vec<T>>,
}

impl<T: Coefficient> CombinationTable<T> {
    /// Build the table for all n up to and including `max_n`.
    ///
    /// Fails with `InvalidArgument` if `max_n` is negative, and with `Overflow`
    /// if some C(n,k) does not fit `T`.
    pub fn new(max_n: i64) -> Result<Self> {
        let max_n = usize::try_from(max_n).map_err(|_| {
            TableError::InvalidArgument(format!(
                "cannot build a combination table with max_n = {max_n}"
            ))
        })?;
        Self::try_from_usize(max_n)
    }

    /// Same as [`new`](Self::new) for a bound that is already unsigned.
    pub fn try_from_usize(max_n: usize) -> Result<Self> {
        // capacity is capped: an oversized bound fails on overflow long before
        // it would need that many rows
        let mut rows = Vec::with_capacity(max_n.min(U128_EXACT_MAX_N) + 1);
        let mut row = vec![T::one()];

        for n in 1..=max_n {
            let next = next_row(&row, n)?;
            rows.push(std::mem::replace(&mut row, next));
        }
        rows.push(row);

        let table = Self { max_n, rows };
        debug!(
            max_n,
            entries = table.entry_count(),
            "built combination table"
        );
        Ok(table)
    }

    /// C(n,k) for `0 <= n <= max_n`.
    ///
    /// Returns 0 when `k > n`. Fails with `OutOfRange` when `n` is outside
    /// `0..=max_n` or `k` is negative.
    pub fn combination(&self, n: i64, k: i64) -> Result<T> {
        let row = self.checked_row(n)?;

        if k > n {
            return Ok(T::zero());
        }
        if k < 0 {
            trace!(n, k, "rejected negative k");
            return Err(TableError::OutOfRange {
                arg: "k",
                value: k,
                min: 0,
                max: n,
            });
        }

        Ok(row[k as usize].clone())
    }

    fn checked_row(&self, n: i64) -> Result<&[T]> {
        let max = i64::try_from(self.max_n).unwrap_or(i64::MAX);
        if n < 0 || n > max {
            trace!(n, max_n = self.max_n, "rejected n outside table");
            return Err(TableError::OutOfRange {
                arg: "n",
                value: n,
                min: 0,
                max,
            });
        }
        Ok(&self.rows[n as usize])
    }
}

impl<T> CombinationTable<T> {
    /// Largest n this table answers for.
    #[inline]
    pub fn max_n(&self) -> usize {
        self.max_n
    }

    /// Raw entry at (n, k), `None` outside the stored triangle.
    #[inline]
    pub fn get(&self, n: usize, k: usize) -> Option<&T> {
        self.rows.get(n)?.get(k)
    }

    /// Row n as a slice of n + 1 coefficients.
    #[inline]
    pub fn row(&self, n: usize) -> Option<&[T]> {
        self.rows.get(n).map(Vec::as_slice)
    }

    /// Rows in order of n.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[T]> + '_ {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Number of stored coefficients, (max_n + 1)(max_n + 2) / 2.
    pub fn entry_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }
}

/// Row n from row n - 1: `[0, prev..] + [prev.., 0]`.
fn next_row<T: Coefficient>(prev: &[T], n: usize) -> Result<Vec<T>> {
    #[cfg(feature = "parallel")]
    {
        if n >= PARALLEL_ROW_THRESHOLD {
            return next_row_parallel(prev, n);
        }
    }

    let zero = T::zero();
    let shifted_right = iter::once(&zero).chain(prev);
    let shifted_left = prev.iter().chain(iter::once(&zero));

    shifted_right
        .zip(shifted_left)
        .enumerate()
        .map(|(k, (a, b))| a.checked_sum(b).ok_or(TableError::Overflow { n, k }))
        .collect()
}

#[cfg(feature = "parallel")]
fn next_row_parallel<T: Coefficient>(prev: &[T], n: usize) -> Result<Vec<T>> {
    let zero = T::zero();

    (0..=n)
        .into_par_iter()
        .map(|k| {
            let a = if k == 0 { &zero } else { &prev[k - 1] };
            let b = prev.get(k).unwrap_or(&zero);
            a.checked_sum(b).ok_or(TableError::Overflow { n, k })
        })
        .collect()
}
