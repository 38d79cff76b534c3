use super::*;

impl Bf16 {
  /// Construct a BF16 from its raw bit pattern.
  #[inline]
  pub const fn from_bits(bits: u16) -> Self {
    Self(bits)
  }

  /// Construct a BF16 from its raw bit pattern, rejecting patterns with exponent field 255.
  ///
  /// ```
  /// # use soft_bf16::{Bf16, NonFinite};
  /// assert_eq!(Bf16::try_from_bits(0x3f80), Ok(Bf16::ONE));
  /// assert_eq!(Bf16::try_from_bits(0x7f80), Err(NonFinite));
  /// ```
  #[inline]
  pub const fn try_from_bits(bits: u16) -> Result<Self, NonFinite> {
    let x = Self(bits);
    if x.is_finite() { Ok(x) } else { Err(NonFinite) }
  }

  /// Return the raw bit pattern of `self`.
  #[inline]
  pub const fn to_bits(self) -> u16 {
    self.0
  }

  /// Assemble a BF16 from a sign, a biased 8-bit exponent, and the 7 explicit mantissa bits.
  /// Mantissa bits above the low 7 are ignored.
  ///
  /// ```
  /// # use soft_bf16::Bf16;
  /// assert_eq!(Bf16::pack(true, 128, 0x40), Bf16::from_f64(-3.0));
  /// ```
  #[inline]
  pub const fn pack(sign: bool, exponent: u8, mantissa: u8) -> Self {
    Self(
      (sign as u16) << (Self::EXP_BITS + Self::MANT_BITS)
      | (exponent as u16) << Self::MANT_BITS
      | (mantissa & Self::MANT_MASK) as u16
    )
  }

  /// Split `self` into `(sign, exponent, mantissa)`; the inverse of [`pack`](Self::pack).
  #[inline]
  pub const fn unpack(self) -> (bool, u8, u8) {
    (self.sign(), self.exponent(), self.mantissa())
  }

  /// The sign bit: `true` if negative.
  #[inline]
  pub const fn sign(self) -> bool {
    self.0 >> (Self::EXP_BITS + Self::MANT_BITS) != 0
  }

  /// The biased exponent field.
  #[inline]
  pub const fn exponent(self) -> u8 {
    (self.0 >> Self::MANT_BITS) as u8
  }

  /// The 7 explicit mantissa bits, without the implicit leading 1.
  #[inline]
  pub const fn mantissa(self) -> u8 {
    self.0 as u8 & Self::MANT_MASK
  }

  /// Whether `self` is zero, i.e. has exponent field 0. The sign and mantissa are ignored.
  #[inline]
  pub const fn is_zero(self) -> bool {
    self.exponent() == 0
  }

  /// Whether `self` is inside the domain of the datapath, i.e. its exponent field is not 255.
  #[inline]
  pub const fn is_finite(self) -> bool {
    self.exponent() != u8::MAX
  }
}
