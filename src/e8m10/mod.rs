//! The extended accumulator word carried between the steps of a multiply-accumulate chain.

use crate::Bf16;

/// An extended accumulator word: 1 sign bit, 8 exponent bits (bias 127, as [Bf16]), and 10
/// mantissa bits, as `0bseeeeeeeemmmmmmmmmm` in the low 19 bits of a `u32`.
///
/// That is a BF16 with 3 more mantissa bits, and the same conventions: exponent field 0 is zero
/// regardless of the mantissa, exponent field 255 is outside the domain, and equality is bitwise.
/// Bits above the 19th are never set.
///
/// ```
/// # use soft_bf16::{Bf16, E8M10};
/// let x = E8M10::from(Bf16::from_f64(-1.5));
/// assert_eq!(x.unpack(), (true, 127, 0b1000000_000));
/// assert_eq!(E8M10::pack(false, 127, 1).to_f64(), 1.0 + 2f64.powi(-10));
/// ```
#[derive(Clone, Copy, Default)]
#[derive(Eq, PartialEq, Hash)]
pub struct E8M10(u32);

/// Conversions to and from `f32`, `f64` and [Bf16]
mod convert;

impl E8M10 {
  /// Total width in bits.
  pub const BITS: u32 = 19;

  /// Width of the exponent field.
  pub const EXP_BITS: u32 = 8;

  /// Width of the explicit mantissa field.
  pub const MANT_BITS: u32 = 10;

  const MANT_MASK: u16 = (1 << Self::MANT_BITS) - 1;

  /// Zero (`+0`, all bits 0).
  pub const ZERO: Self = Self(0);

  /// 1.0
  pub const ONE: Self = Self((Bf16::BIAS as u32) << Self::MANT_BITS);

  /// Construct from a raw bit pattern. Bits above the lowest 19 are ignored.
  #[inline]
  pub const fn from_bits(bits: u32) -> Self {
    Self(bits & ((1 << Self::BITS) - 1))
  }

  /// Return the raw bit pattern of `self`.
  #[inline]
  pub const fn to_bits(self) -> u32 {
    self.0
  }

  /// Assemble from a sign, a biased 8-bit exponent, and the 10 explicit mantissa bits. Mantissa
  /// bits above the low 10 are ignored.
  #[inline]
  pub const fn pack(sign: bool, exponent: u8, mantissa: u16) -> Self {
    Self(
      (sign as u32) << (Self::EXP_BITS + Self::MANT_BITS)
      | (exponent as u32) << Self::MANT_BITS
      | (mantissa & Self::MANT_MASK) as u32
    )
  }

  /// Split `self` into `(sign, exponent, mantissa)`; the inverse of [`pack`](Self::pack).
  #[inline]
  pub const fn unpack(self) -> (bool, u8, u16) {
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

  /// The 10 explicit mantissa bits.
  #[inline]
  pub const fn mantissa(self) -> u16 {
    self.0 as u16 & Self::MANT_MASK
  }

  /// Whether `self` is zero, i.e. has exponent field 0.
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

impl core::fmt::Debug for E8M10 {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let (sign, exponent, mantissa) = self.unpack();
    f.debug_tuple("E8M10")
      .field(&format_args!("0b{:b}_{exponent:08b}_{mantissa:010b}", sign as u8))
      .finish()
  }
}

impl core::fmt::Display for E8M10 {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    if self.is_zero() {
      core::fmt::Display::fmt(if self.sign() { &-0.0_f32 } else { &0.0_f32 }, f)
    } else {
      core::fmt::Display::fmt(&self.to_f32(), f)
    }
  }
}
