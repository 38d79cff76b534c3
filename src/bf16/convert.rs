use super::*;

impl Bf16 {
  /// Convert from an `f32` by keeping its top 16 bits, i.e. truncating the mantissa towards zero.
  ///
  /// `f32` subnormals become zero (their exponent field is 0), and Inf/NaN become patterns with
  /// exponent field 255, which are outside the datapath's domain.
  ///
  /// ```
  /// # use soft_bf16::Bf16;
  /// assert_eq!(Bf16::from_f32(1.0), Bf16::ONE);
  /// assert_eq!(Bf16::from_f32(1.00390625), Bf16::ONE);  // 1 + 2⁻⁸ truncates
  /// ```
  #[inline]
  pub fn from_f32(value: f32) -> Self {
    Self((value.to_bits() >> 16) as u16)
  }

  /// Convert from an `f64`: first round it to the nearest `f32`, then truncate that to BF16 like
  /// [`from_f32`](Self::from_f32).
  #[inline]
  pub fn from_f64(value: f64) -> Self {
    Self::from_f32(value as f32)
  }

  /// Convert to an `f32`. This is exact: the BF16 bits become the top half of the `f32` bits.
  ///
  /// Note that a BF16 zero with a nonzero mantissa becomes an `f32` subnormal, not 0.0; use
  /// [`is_zero`](Self::is_zero) to test for zero.
  #[inline]
  pub fn to_f32(self) -> f32 {
    f32::from_bits((self.0 as u32) << 16)
  }

  /// Convert to an `f64`. This is exact.
  #[inline]
  pub fn to_f64(self) -> f64 {
    self.to_f32() as f64
  }
}

impl From<Bf16> for f32 {
  #[inline]
  fn from(value: Bf16) -> Self { value.to_f32() }
}

impl From<Bf16> for f64 {
  #[inline]
  fn from(value: Bf16) -> Self { value.to_f64() }
}
