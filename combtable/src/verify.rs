//! Invariant checks over a built table.
//!
//! `check_row` validates a single row against its predecessor so callers can
//! report progress while walking a large table.

use crate::coefficient::Coefficient;
use crate::table::CombinationTable;

/// First broken invariant found in a row.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    #[error("row {n} is missing or has the wrong length")]
    Shape { n: usize },

    #[error("C({n},0) or C({n},{n}) is not 1")]
    Endpoint { n: usize },

    #[error("C({n},{k}) != C({n},{})", .n - .k)]
    Asymmetric { n: usize, k: usize },

    #[error("C({n},{k}) != C({},{}) + C({},{k})", .n - 1, .k - 1, .n - 1)]
    Pascal { n: usize, k: usize },

    #[error("row {n} does not sum to twice row {}", .n - 1)]
    RowSum { n: usize },
}

/// Check row `n` of `table`: shape, endpoints, symmetry, Pascal's identity
/// against row n - 1, and that its sum is twice the previous row's (2^n).
///
/// The sum check is skipped when a row sum does not fit `T`.
pub fn check_row<T: Coefficient>(table: &CombinationTable<T>, n: usize) -> Result<(), Violation> {
    let row = match table.row(n) {
        Some(row) if row.len() == n + 1 => row,
        _ => return Err(Violation::Shape { n }),
    };

    let one = T::one();
    if row[0] != one || row[n] != one {
        return Err(Violation::Endpoint { n });
    }

    if let Some(k) = (0..=n / 2).find(|&k| row[k] != row[n - k]) {
        return Err(Violation::Asymmetric { n, k });
    }

    if n == 0 {
        return Ok(());
    }
    let prev = table.row(n - 1).ok_or(Violation::Shape { n: n - 1 })?;

    for k in 1..n {
        if prev[k - 1].checked_sum(&prev[k]).as_ref() != Some(&row[k]) {
            return Err(Violation::Pascal { n, k });
        }
    }

    if let (Some(sum), Some(prev_sum)) = (row_sum(row), row_sum(prev)) {
        if prev_sum.checked_sum(&prev_sum).is_some_and(|twice| twice != sum) {
            return Err(Violation::RowSum { n });
        }
    }

    Ok(())
}

/// Check every row in order, stopping at the first violation.
pub fn check_table<T: Coefficient>(table: &CombinationTable<T>) -> Result<(), Violation> {
    (0..=table.max_n()).try_for_each(|n| check_row(table, n))
}

fn row_sum<T: Coefficient>(row: &[T]) -> Option<T> {
    row.iter()
        .try_fold(T::zero(), |acc, value| acc.checked_sum(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coefficient::{U32_EXACT_MAX_N, U64_EXACT_MAX_N};

    #[test]
    fn test_built_tables_pass() {
        let table = CombinationTable::<u64>::try_from_usize(U64_EXACT_MAX_N).unwrap();
        assert_eq!(check_table(&table), Ok(()));

        let table = CombinationTable::<u32>::try_from_usize(U32_EXACT_MAX_N).unwrap();
        assert_eq!(check_table(&table), Ok(()));
    }

    #[test]
    fn test_missing_row_is_shape_violation() {
        let table = CombinationTable::<u64>::new(3).unwrap();
        assert_eq!(check_row(&table, 4), Err(Violation::Shape { n: 4 }));
    }

    #[test]
    fn test_row_sum_helper() {
        assert_eq!(row_sum(&[1u64, 4, 6, 4, 1]), Some(16));
        assert_eq!(row_sum(&[u32::MAX, 1]), None);
    }

    #[test]
    fn test_violation_messages() {
        assert_eq!(
            Violation::Pascal { n: 5, k: 2 }.to_string(),
            "C(5,2) != C(4,1) + C(4,2)"
        );
        assert_eq!(Violation::Asymmetric { n: 6, k: 1 }.to_string(), "C(6,1) != C(6,5)");
    }
}
