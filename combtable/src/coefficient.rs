//! Element types a combination table can store.
//!
//! Construction only ever adds two coefficients, so the trait is just
//! zero, one and a checked sum. Native widths report overflow through
//! `checked_sum`; `BigUint` (feature `bigint`) never overflows.

use std::fmt;

/// Largest n for which every C(n,k) fits in a `u32`.
pub const U32_EXACT_MAX_N: usize = 34;
/// Largest n for which every C(n,k) fits in a `u64`.
pub const U64_EXACT_MAX_N: usize = 67;
/// Largest n for which every C(n,k) fits in a `u128`.
pub const U128_EXACT_MAX_N: usize = 131;

/// A non-negative integer type usable as a table entry.
pub trait Coefficient: Clone + fmt::Debug + fmt::Display + PartialEq + Send + Sync + 'static {
    fn zero() -> Self;
    fn one() -> Self;

    /// `self + other`, or `None` if the sum is not representable.
    fn checked_sum(&self, other: &Self) -> Option<Self>;
}

macro_rules! impl_native_coefficient {
    ($($t:ty),*) => {
        $(
            impl Coefficient for $t {
                #[inline]
                fn zero() -> Self {
                    0
                }

                #[inline]
                fn one() -> Self {
                    1
                }

                #[inline]
                fn checked_sum(&self, other: &Self) -> Option<Self> {
                    <$t>::checked_add(*self, *other)
                }
            }
        )*
    };
}

impl_native_coefficient!(u32, u64, u128);

#[cfg(feature = "bigint")]
impl Coefficient for num::BigUint {
    fn zero() -> Self {
        num::BigUint::from(0u32)
    }

    fn one() -> Self {
        num::BigUint::from(1u32)
    }

    fn checked_sum(&self, other: &Self) -> Option<Self> {
        Some(self + other)
    }
}
