use std::fmt;
use std::ops::{Add, Mul};
use std::str::FromStr;

use crate::error::{MathError, Result};

/// A non-negative big integer represented as a vector of decimal digits
/// (least significant first).
///
/// The digit vector never carries leading zeros; zero is `[0]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BigInt {
    digits: Vec<u8>,
}

impl BigInt {
    /// Create a BigInt representing one.
    pub fn one() -> Self {
        BigInt { digits: vec![1] }
    }

    fn from_digits(mut digits: Vec<u8>) -> Self {
        while digits.len() > 1 && digits.last() == Some(&0) {
            digits.pop();
        }
        if digits.is_empty() {
            digits.push(0);
        }
        BigInt { digits }
    }

    /// Number of decimal digits. Zero has one digit.
    pub fn digit_count(&self) -> usize {
        self.digits.len()
    }

    /// Remainder of division by a machine-word divisor.
    ///
    /// Walks the digits from the most significant end, so the running
    /// remainder always stays below `divisor` and fits in a `u128`.
    ///
    /// # Example
    ///
    /// ```
    /// use math::BigInt;
    ///
    /// let n: BigInt = "111111".parse().unwrap();
    /// assert_eq!(n.rem_u64(7), Ok(0));
    /// assert_eq!(n.rem_u64(10), Ok(1));
    /// ```
    pub fn rem_u64(&self, divisor: u64) -> Result<u64> {
        if divisor == 0 {
            return Err(MathError::DivisionByZero);
        }
        let d = divisor as u128;
        let rem = self
            .digits
            .iter()
            .rev()
            .fold(0u128, |r, &digit| (r * 10 + digit as u128) % d);
        Ok(rem as u64)
    }
}

impl FromStr for BigInt {
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(MathError::InvalidInput("empty number".to_string()));
        }
        let digits = s
            .chars()
            .rev()
            .map(|c| {
                c.to_digit(10).map(|d| d as u8).ok_or_else(|| {
                    MathError::InvalidInput(format!("{:?} is not a decimal digit", c))
                })
            })
            .collect::<Result<Vec<u8>>>()?;
        Ok(BigInt::from_digits(digits))
    }
}

impl Add<u32> for BigInt {
    type Output = BigInt;

    fn add(mut self, other: u32) -> BigInt {
        let mut carry = other as u64;
        for d in self.digits.iter_mut() {
            if carry == 0 {
                break;
            }
            let sum = *d as u64 + carry;
            *d = (sum % 10) as u8;
            carry = sum / 10;
        }
        while carry > 0 {
            self.digits.push((carry % 10) as u8);
            carry /= 10;
        }
        self
    }
}

impl Mul<u32> for &BigInt {
    type Output = BigInt;

    fn mul(self, other: u32) -> BigInt {
        let mut result = Vec::with_capacity(self.digits.len() + 10);
        let mut carry = 0u64;

        for &d in &self.digits {
            let product = d as u64 * other as u64 + carry;
            result.push((product % 10) as u8);
            carry = product / 10;
        }

        while carry > 0 {
            result.push((carry % 10) as u8);
            carry /= 10;
        }

        BigInt::from_digits(result)
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &d in self.digits.iter().rev() {
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        let n: BigInt = "12345".parse().unwrap();
        assert_eq!(n.digits, vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_from_str_strips_leading_zeros() {
        let n: BigInt = "000120".parse().unwrap();
        assert_eq!(n.digits, vec![0, 2, 1]);
        let z: BigInt = "0000".parse().unwrap();
        assert_eq!(z.digits, vec![0]);
    }

    #[test]
    fn test_from_str_rejects_non_digits() {
        assert!(matches!("12a4".parse::<BigInt>(), Err(MathError::InvalidInput(_))));
        assert!(matches!("-5".parse::<BigInt>(), Err(MathError::InvalidInput(_))));
        assert!(matches!("".parse::<BigInt>(), Err(MathError::InvalidInput(_))));
    }

    #[test]
    fn test_display() {
        let n: BigInt = "12345".parse().unwrap();
        assert_eq!(format!("{}", n), "12345");
    }

    #[test]
    fn test_add_small() {
        let a: BigInt = "1110".parse().unwrap();
        assert_eq!((a + 1).to_string(), "1111");
        let b: BigInt = "9999".parse().unwrap();
        assert_eq!((b + 1).to_string(), "10000");
        let z: BigInt = "0".parse().unwrap();
        assert_eq!((z + 4_000_000_000).to_string(), "4000000000");
    }

    #[test]
    fn test_mul_u32_with_carry() {
        let a: BigInt = "999".parse().unwrap();
        assert_eq!((&a * 9).to_string(), "8991");
    }

    #[test]
    fn test_mul_by_zero_is_normalized() {
        let a: BigInt = "12345".parse().unwrap();
        let z = &a * 0;
        assert_eq!(z.to_string(), "0");
        assert_eq!(z.digit_count(), 1);
    }

    #[test]
    fn test_mul_large_factor_does_not_overflow() {
        let a: BigInt = "99".parse().unwrap();
        assert_eq!((&a * u32::MAX).to_string(), (99u64 * u32::MAX as u64).to_string());
    }

    #[test]
    fn test_rem_u64() {
        let n: BigInt = "111111111".parse().unwrap();
        assert_eq!(n.rem_u64(9), Ok(0));
        assert_eq!(n.rem_u64(2), Ok(1));
        assert_eq!(n.rem_u64(1), Ok(0));
        assert_eq!(n.rem_u64(0), Err(MathError::DivisionByZero));
    }

    #[test]
    fn test_rem_u64_beyond_machine_word() {
        // 23 divides the 22-digit repunit, which is larger than u64::MAX.
        let n: BigInt = "1111111111111111111111".parse().unwrap();
        assert!(n.digit_count() > u64::MAX.to_string().len());
        assert_eq!(n.rem_u64(23), Ok(0));
        assert_eq!(n.rem_u64(11), Ok(0));
        assert_eq!(n.rem_u64(10), Ok(1));
    }
}
