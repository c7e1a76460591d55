// ============================================================================
// Product Accumulation
// Exact product of roots and the (-1)^n sign convention
// ============================================================================

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::One;
use std::borrow::Borrow;

/// Multiply all values together, starting from 1.
///
/// Accepts owned values or references. An empty sequence yields 1.
///
/// # Example
/// ```
/// use constant_term::engine::accumulate_product;
/// use num_bigint::BigInt;
///
/// let values = [BigInt::from(-3), BigInt::from(4), BigInt::from(2)];
/// assert_eq!(accumulate_product(&values), BigInt::from(-24));
/// ```
pub fn accumulate_product<I>(values: I) -> BigInt
where
    I: IntoIterator,
    I::Item: Borrow<BigInt>,
{
    values
        .into_iter()
        .fold(BigInt::one(), |acc, value| {
            acc * Borrow::<BigInt>::borrow(&value)
        })
}

/// `1` when `degree` is even, `-1` when odd; the value of `(-1)^n`.
#[inline]
pub fn sign_multiplier(degree: u64) -> i8 {
    if degree.is_odd() {
        -1
    } else {
        1
    }
}

/// Constant term of a monic polynomial from the product of its roots:
/// `(-1)^degree * product`.
#[inline]
pub fn apply_sign_convention(product: BigInt, degree: u64) -> BigInt {
    if degree.is_odd() {
        -product
    } else {
        product
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::Zero;
    use proptest::prelude::*;
    use quickcheck::quickcheck;

    #[test]
    fn test_product_empty_is_identity() {
        assert_eq!(accumulate_product(Vec::<BigInt>::new()), BigInt::one());
    }

    #[test]
    fn test_product_owned_and_borrowed() {
        let values = vec![BigInt::from(5), BigInt::from(10)];
        assert_eq!(accumulate_product(&values), BigInt::from(50));
        assert_eq!(accumulate_product(values), BigInt::from(50));
    }

    #[test]
    fn test_product_with_zero() {
        let values = [BigInt::from(7), BigInt::zero(), BigInt::from(-9)];
        assert!(accumulate_product(&values).is_zero());
    }

    #[test]
    fn test_product_beyond_u64() {
        let big = BigInt::from(u64::MAX);
        let product = accumulate_product([&big, &big]);
        assert_eq!(
            product.to_string(),
            "340282366920938463426481119284349108225"
        );
    }

    #[test]
    fn test_sign_multiplier() {
        assert_eq!(sign_multiplier(0), 1);
        assert_eq!(sign_multiplier(1), -1);
        assert_eq!(sign_multiplier(2), 1);
        assert_eq!(sign_multiplier(u64::MAX), -1);
    }

    #[test]
    fn test_sign_convention() {
        assert_eq!(apply_sign_convention(BigInt::from(50), 2), BigInt::from(50));
        assert_eq!(apply_sign_convention(BigInt::from(-24), 3), BigInt::from(24));
        assert_eq!(apply_sign_convention(BigInt::from(7), 1), BigInt::from(-7));
        assert_eq!(apply_sign_convention(BigInt::zero(), 5), BigInt::zero());
    }

    quickcheck! {
        fn qc_sign_convention_follows_parity(p: i64, n: u64) -> bool {
            let p = BigInt::from(p);
            let c = apply_sign_convention(p.clone(), n);
            if n % 2 == 0 { c == p } else { c == -p }
        }

        fn qc_sign_multiplier_matches_convention(p: i64, n: u64) -> bool {
            let p = BigInt::from(p);
            apply_sign_convention(p.clone(), n) == p * BigInt::from(sign_multiplier(n))
        }
    }

    proptest! {
        #[test]
        fn prop_product_order_independent(
            mut values in proptest::collection::vec(any::<i64>(), 0..12),
            seed in any::<u64>(),
        ) {
            let forward: Vec<BigInt> = values.iter().copied().map(BigInt::from).collect();
            let expected = accumulate_product(&forward);

            // Deterministic shuffle driven by the seed
            let len = values.len();
            let mut state = seed;
            for i in (1..len).rev() {
                state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
                let j = (state >> 33) as usize % (i + 1);
                values.swap(i, j);
            }
            let shuffled: Vec<BigInt> = values.into_iter().map(BigInt::from).collect();

            prop_assert_eq!(accumulate_product(&shuffled), expected.clone());

            let reversed: Vec<BigInt> = forward.iter().rev().cloned().collect();
            prop_assert_eq!(accumulate_product(&reversed), expected);
        }
    }
}
