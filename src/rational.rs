//! Exact values of [Bf16] and [E8M10] as [Rational]s, and checks that a result is the correct
//! rounding (or truncation) of an exact value. This is what the datapath is tested against.

use crate::{Bf16, E8M10, NonFinite};

use malachite::rational::Rational;
use malachite::base::num::arithmetic::traits::{Abs, PowerOf2};

/// The two formats share everything but the width of the mantissa, so the oracle is written once
/// for both.
pub trait Format: Copy + PartialEq + core::fmt::Debug {
  const MANT_BITS: u32;

  fn unpack_fields(self) -> (bool, u8, u32);
  fn pack_fields(sign: bool, exponent: u8, mantissa: u32) -> Self;

  /// The value with the same sign and the next larger magnitude.
  fn next_magnitude(self) -> Self {
    let (sign, exponent, mantissa) = self.unpack_fields();
    if mantissa + 1 == 1 << Self::MANT_BITS {
      Self::pack_fields(sign, exponent + 1, 0)
    } else {
      Self::pack_fields(sign, exponent, mantissa + 1)
    }
  }

  /// The value with the same sign and the next smaller magnitude.
  fn prior_magnitude(self) -> Self {
    let (sign, exponent, mantissa) = self.unpack_fields();
    if mantissa == 0 {
      Self::pack_fields(sign, exponent - 1, (1 << Self::MANT_BITS) - 1)
    } else {
      Self::pack_fields(sign, exponent, mantissa - 1)
    }
  }

  /// A **super-explicit** rendition of decoding: `(-1)^sign × 1.mantissa × 2^(exponent - 127)`.
  fn to_rational(self) -> Result<Rational, NonFinite> {
    let (sign, exponent, mantissa) = self.unpack_fields();
    if exponent == u8::MAX { return Err(NonFinite) }
    if exponent == 0 { return Ok(Rational::from(0)) }

    let significand = Rational::from((1 << Self::MANT_BITS) + mantissa)
      / Rational::power_of_2(Self::MANT_BITS as i64);
    let scale = Rational::power_of_2(exponent as i64 - Bf16::BIAS as i64);
    let magnitude = significand * scale;
    Ok(if sign { -magnitude } else { magnitude })
  }
}

impl Format for Bf16 {
  const MANT_BITS: u32 = Bf16::MANT_BITS;

  fn unpack_fields(self) -> (bool, u8, u32) {
    let (sign, exponent, mantissa) = self.unpack();
    (sign, exponent, mantissa as u32)
  }

  fn pack_fields(sign: bool, exponent: u8, mantissa: u32) -> Self {
    Bf16::pack(sign, exponent, mantissa as u8)
  }
}

impl Format for E8M10 {
  const MANT_BITS: u32 = E8M10::MANT_BITS;

  fn unpack_fields(self) -> (bool, u8, u32) {
    let (sign, exponent, mantissa) = self.unpack();
    (sign, exponent, mantissa as u32)
  }

  fn pack_fields(sign: bool, exponent: u8, mantissa: u32) -> Self {
    E8M10::pack(sign, exponent, mantissa as u16)
  }
}

impl TryFrom<Bf16> for Rational {
  type Error = NonFinite;

  fn try_from(value: Bf16) -> Result<Self, Self::Error> {
    value.to_rational()
  }
}

impl TryFrom<E8M10> for Rational {
  type Error = NonFinite;

  fn try_from(value: E8M10) -> Result<Self, Self::Error> {
    value.to_rational()
  }
}

/// Check whether the rational number `exact` should be rounded to `x`: round to nearest, ties to
/// even, with an exact 0 (and only an exact 0) giving `+0`.
///
/// Only meaningful away from the edges of the exponent range, where the neighbours of `x` are
/// themselves finite and nonzero.
pub fn is_correct_rounded<F: Format>(exact: Rational, x: F) -> bool {
  let (sign, exponent, mantissa) = x.unpack_fields();
  if exact == 0 { return !sign && exponent == 0 && mantissa == 0 }
  if exponent == 0 || sign != (exact < 0) { return false }

  let Ok(curr) = x.to_rational() else { return false };
  let Ok(prev) = x.prior_magnitude().to_rational() else { return false };
  let Ok(next) = x.next_magnitude().to_rational() else { return false };
  let (exact, curr, prev, next) = ((&exact).abs(), curr.abs(), prev.abs(), next.abs());
  let is_even = mantissa & 1 == 0;

  if exact == curr {
    true
  } else if prev < exact && exact < curr {
    // `exact` lies in interval `]prev, curr[`: needs to be closer to `curr`, or the same distance
    // if `curr` is even.
    let (d_curr, d_prev) = (&curr - &exact, &exact - &prev);
    d_curr < d_prev || d_curr == d_prev && is_even
  } else if curr < exact && exact < next {
    let (d_curr, d_next) = (&exact - &curr, &next - &exact);
    d_curr < d_next || d_curr == d_next && is_even
  } else {
    false
  }
}

/// Check whether the rational number `exact` should be truncated (rounded towards zero) to `x`,
/// with an exact 0 (and only an exact 0) giving `+0`.
pub fn is_truncated<F: Format>(exact: Rational, x: F) -> bool {
  let (sign, exponent, mantissa) = x.unpack_fields();
  if exact == 0 { return !sign && exponent == 0 && mantissa == 0 }
  if exponent == 0 || sign != (exact < 0) { return false }

  let Ok(curr) = x.to_rational() else { return false };
  let Ok(next) = x.next_magnitude().to_rational() else { return false };
  let exact = (&exact).abs();
  curr.abs() <= exact && exact < next.abs()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn bf16_examples() {
    assert_eq!(Rational::try_from(Bf16::ZERO), Ok(Rational::from(0)));
    assert_eq!(Rational::try_from(Bf16::from_bits(0x8042)), Ok(Rational::from(0)));
    assert_eq!(Rational::try_from(Bf16::ONE), Ok(Rational::from(1)));
    assert_eq!(Rational::try_from(Bf16::MINUS_ONE), Ok(Rational::from(-1)));
    assert_eq!(Rational::try_from(Bf16::from_bits(0x40e0)), Ok(Rational::from(7)));
    assert_eq!(Rational::try_from(Bf16::from_bits(0x3bfe)), Ok(Rational::from_signeds(127, 16384)));
    assert_eq!(Rational::try_from(Bf16::from_bits(0xbf81)), Ok(Rational::from_signeds(-129, 128)));
    assert_eq!(Rational::try_from(Bf16::MIN_POSITIVE), Ok(Rational::power_of_2(-126_i64)));
    assert_eq!(Rational::try_from(Bf16::from_bits(0x7f80)), Err(NonFinite));
  }

  #[test]
  fn e8m10_examples() {
    assert_eq!(Rational::try_from(E8M10::ZERO), Ok(Rational::from(0)));
    assert_eq!(Rational::try_from(E8M10::ONE), Ok(Rational::from(1)));
    assert_eq!(Rational::try_from(E8M10::pack(false, 129, 0x300)), Ok(Rational::from(7)));
    assert_eq!(Rational::try_from(E8M10::pack(true, 127, 1)), Ok(Rational::from_signeds(-1025, 1024)));
    assert_eq!(Rational::try_from(E8M10::pack(false, 255, 0)), Err(NonFinite));
  }

  /// Agrees with the (exact) conversion to `f64` everywhere.
  #[test]
  fn bf16_exhaustive() {
    for x in Bf16::cases_exhaustive() {
      let value = Rational::try_from(x).unwrap();
      assert_eq!(Rational::try_from(x.to_f64()).unwrap(), value, "{x:?}");
    }
  }

  #[test]
  fn neighbours() {
    assert_eq!(Bf16::ONE.next_magnitude(), Bf16::from_bits(0x3f81));
    assert_eq!(Bf16::ONE.prior_magnitude(), Bf16::from_bits(0x3f7f));
    assert_eq!(Bf16::MINUS_ONE.next_magnitude(), Bf16::from_bits(0xbf81));
    assert_eq!(Bf16::from_bits(0x3fff).next_magnitude(), Bf16::from_f64(2.0));
    assert_eq!(E8M10::ONE.next_magnitude(), E8M10::pack(false, 127, 1));
  }

  #[test]
  fn rounding() {
    let one = Bf16::ONE;
    let half_ulp = Rational::power_of_2(-8_i64);
    assert!(is_correct_rounded(Rational::from(1), one));
    assert!(is_correct_rounded(Rational::from(1) + &half_ulp, one));  // tie, even
    assert!(!is_correct_rounded(Rational::from(1) + &half_ulp, one.next_magnitude()));
    assert!(is_correct_rounded(Rational::from(1) + Rational::from(3) * &half_ulp, Bf16::from_bits(0x3f82)));
    assert!(!is_correct_rounded(Rational::from(-1), one));
    assert!(is_correct_rounded(Rational::from(0), Bf16::ZERO));
    assert!(!is_correct_rounded(Rational::from(0), Bf16::from_bits(0x8000)));

    assert!(is_truncated(Rational::from(1) + &half_ulp, one));
    assert!(is_truncated(Rational::from(-1) - &half_ulp, Bf16::MINUS_ONE));
    assert!(!is_truncated(Rational::from(1) - &half_ulp, one));
  }
}
