use super::*;

impl Bf16 {
  /// Total width in bits.
  pub const BITS: u32 = 16;

  /// Width of the exponent field.
  pub const EXP_BITS: u32 = 8;

  /// Width of the explicit mantissa field.
  pub const MANT_BITS: u32 = 7;

  pub(crate) const MANT_MASK: u8 = (1 << Self::MANT_BITS) - 1;

  /// Exponent bias: a biased exponent `e` stands for 2^(e-127).
  pub const BIAS: i32 = 127;

  /// Zero (`+0`, all bits 0). This is the only zero the arithmetic ever produces.
  pub const ZERO: Self = Self(0x0000);

  /// 1.0
  pub const ONE: Self = Self(0x3f80);

  /// -1.0
  pub const MINUS_ONE: Self = Self(0xbf80);

  /// Largest finite value, (2 - 2⁻⁷) × 2¹²⁷.
  pub const MAX: Self = Self(0x7f7f);

  /// Smallest finite value, -(2 - 2⁻⁷) × 2¹²⁷.
  pub const MIN: Self = Self(0xff7f);

  /// Smallest positive value, 2⁻¹²⁶ (there are no subnormals).
  pub const MIN_POSITIVE: Self = Self(0x0080);

  /// Difference between 1.0 and the next larger value, 2⁻⁷.
  pub const EPSILON: Self = Self(0x3c00);
}
