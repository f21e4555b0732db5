//! Direct C(n,k) without a table.
//!
//! Multiplicative recurrence C(n,i+1) = C(n,i) * (n-i) / (i+1), with the
//! gcd taken out first so intermediates never exceed the final value.
//! Serves as the reference for table tests and the baseline in `bench_lookup`.

/// C(n,k) as `u128`, or `None` if it does not fit. Returns `Some(0)` when `k > n`.
pub fn binomial(n: u64, k: u64) -> Option<u128> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);

    let mut acc: u128 = 1;
    for i in 0..k {
        let numer = u128::from(n - i);
        let denom = u128::from(i + 1);
        // denom / g always divides numer since acc * numer is a multiple of denom
        let g = gcd(acc, denom);
        acc = (acc / g).checked_mul(numer / (denom / g))?;
    }
    Some(acc)
}

fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values() {
        assert_eq!(binomial(0, 0), Some(1));
        assert_eq!(binomial(52, 5), Some(2_598_960));
        assert_eq!(binomial(20, 10), Some(184_756));
        assert_eq!(binomial(67, 33), Some(14_226_520_737_620_288_370));
        assert_eq!(
            binomial(100, 50),
            Some(100_891_344_545_564_193_334_812_497_256)
        );
    }

    #[test]
    fn test_k_above_n() {
        assert_eq!(binomial(3, 4), Some(0));
    }

    #[test]
    fn test_overflow_is_none() {
        assert!(binomial(131, 65).is_some());
        assert_eq!(binomial(132, 66), None);
    }

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(7, 0), 7);
        assert_eq!(gcd(1, 99), 1);
    }
}
