use super::*;

use core::ops::RangeInclusive;

impl Bf16 {
  /// An iterator through all the finite, nonzero BF16s (exponent fields 1 to 254).
  pub(crate) fn cases_exhaustive() -> impl Iterator<Item = Self> {
    (0 ..= u16::MAX)
      .map(Self::from_bits)
      .filter(|x| x.is_finite() && !x.is_zero())
  }

  /// A [proptest Strategy](proptest::strategy::Strategy) that yields BF16s of either sign, any
  /// mantissa, and an exponent field in `exponents`.
  pub(crate) fn cases_proptest(
    exponents: RangeInclusive<u8>,
  ) -> impl proptest::strategy::Strategy<Value = Self> {
    use proptest::prelude::*;
    (
      any::<bool>(),
      exponents,
      0 ..= Self::MANT_MASK,
    ).prop_map(|(sign, exponent, mantissa)| Self::pack(sign, exponent, mantissa))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn cases_exhaustive() {
    assert_eq!(Bf16::cases_exhaustive().count(), 2 * 254 * 128);
    assert_eq!(Bf16::cases_exhaustive().next(), Some(Bf16::MIN_POSITIVE));
    assert!(Bf16::cases_exhaustive().all(|x| x.is_finite() && !x.is_zero()));
  }
}
