use crate::error::{MathError, Result};

/// Floor division: the quotient rounds toward negative infinity and the
/// remainder takes the sign of the divisor, so `a == q * b + r` and
/// `|r| < |b|`.
///
/// # Example
///
/// ```
/// use math::floor_div_rem;
///
/// assert_eq!(floor_div_rem(7, -2), Ok((-4, -1)));
/// assert_eq!(floor_div_rem(-7, 2), Ok((-4, 1)));
/// ```
pub fn floor_div_rem(a: i64, b: i64) -> Result<(i64, i64)> {
    if b == 0 {
        return Err(MathError::DivisionByZero);
    }
    let overflow = || MathError::ArithmeticOverflow(format!("{} / {}", a, b));
    let q = a.checked_div(b).ok_or_else(overflow)?;
    let r = a.checked_rem(b).ok_or_else(overflow)?;

    // Truncating division disagrees with floor division exactly when the
    // remainder is nonzero and its sign differs from the divisor's.
    if r != 0 && (r < 0) != (b < 0) {
        Ok((q - 1, r + b))
    } else {
        Ok((q, r))
    }
}

/// Every result the arithmetic exercise prints for one `a b` pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PairSummary {
    pub a: i64,
    pub b: i64,
    pub sum: i64,
    pub product: i64,
    pub difference: i64,
    pub quotient: i64,
    pub remainder: i64,
}

impl PairSummary {
    pub fn compute(a: i64, b: i64) -> Result<Self> {
        let sum = a
            .checked_add(b)
            .ok_or_else(|| MathError::ArithmeticOverflow(format!("{} + {}", a, b)))?;
        let product = a
            .checked_mul(b)
            .ok_or_else(|| MathError::ArithmeticOverflow(format!("{} * {}", a, b)))?;
        let difference = a
            .checked_sub(b)
            .ok_or_else(|| MathError::ArithmeticOverflow(format!("{} - {}", a, b)))?;
        let (quotient, remainder) = floor_div_rem(a, b)?;

        Ok(PairSummary {
            a,
            b,
            sum,
            product,
            difference,
            quotient,
            remainder,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_floor_div_rem_signs() {
        assert_eq!(floor_div_rem(7, 2), Ok((3, 1)));
        assert_eq!(floor_div_rem(7, -2), Ok((-4, -1)));
        assert_eq!(floor_div_rem(-7, 2), Ok((-4, 1)));
        assert_eq!(floor_div_rem(-7, -2), Ok((3, -1)));
    }

    #[test]
    fn test_floor_div_rem_exact() {
        assert_eq!(floor_div_rem(6, -2), Ok((-3, 0)));
        assert_eq!(floor_div_rem(-6, 2), Ok((-3, 0)));
        assert_eq!(floor_div_rem(0, 5), Ok((0, 0)));
    }

    #[test]
    fn test_floor_div_rem_errors() {
        assert_eq!(floor_div_rem(1, 0), Err(MathError::DivisionByZero));
        assert!(matches!(
            floor_div_rem(i64::MIN, -1),
            Err(MathError::ArithmeticOverflow(_))
        ));
        assert_eq!(floor_div_rem(i64::MIN, 1), Ok((i64::MIN, 0)));
    }

    #[test]
    fn test_pair_summary() {
        let s = PairSummary::compute(7, -2).unwrap();
        assert_eq!(s.sum, 5);
        assert_eq!(s.product, -14);
        assert_eq!(s.difference, 9);
        assert_eq!((s.quotient, s.remainder), (-4, -1));
    }

    #[test]
    fn test_pair_summary_overflow() {
        assert!(matches!(
            PairSummary::compute(i64::MAX, 1),
            Err(MathError::ArithmeticOverflow(_))
        ));
        assert!(matches!(
            PairSummary::compute(i64::MAX, 2),
            Err(MathError::ArithmeticOverflow(_))
        ));
        assert!(matches!(
            PairSummary::compute(i64::MIN, 1),
            Err(MathError::ArithmeticOverflow(_))
        ));
        assert_eq!(PairSummary::compute(3, 0), Err(MathError::DivisionByZero));
    }

    proptest! {
        #[test]
        fn prop_floor_division_identity(a in -100_000i64..100_000, b in -1_000i64..1_000) {
            prop_assume!(b != 0);
            let (q, r) = floor_div_rem(a, b).unwrap();
            prop_assert_eq!(q * b + r, a);
            prop_assert!(r.abs() < b.abs());
            prop_assert!(r == 0 || r.signum() == b.signum());
            prop_assert_eq!(q, (a as f64 / b as f64).floor() as i64);
        }
    }
}
