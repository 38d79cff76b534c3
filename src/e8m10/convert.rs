use super::*;

use crate::datapath::{Grs, round_nearest_even};

/// Number of mantissa bits an E8M10 has over a BF16.
const EXTRA_BITS: u32 = E8M10::MANT_BITS - Bf16::MANT_BITS;

/// Number of low `f32` bits below the E8M10 mantissa.
const F32_DROPPED: u32 = 32 - E8M10::BITS;

impl E8M10 {
  /// Convert from an `f32` by keeping its top 19 bits, i.e. truncating the mantissa towards zero.
  ///
  /// ```
  /// # use soft_bf16::E8M10;
  /// assert_eq!(E8M10::from_f32(1.0), E8M10::ONE);
  /// assert_eq!(E8M10::from_f32(-3.5).unpack(), (true, 128, 0b1100000000));
  /// ```
  #[inline]
  pub fn from_f32(value: f32) -> Self {
    Self(value.to_bits() >> F32_DROPPED)
  }

  /// Convert from an `f64`: first round it to the nearest `f32`, then truncate that like
  /// [`from_f32`](Self::from_f32).
  #[inline]
  pub fn from_f64(value: f64) -> Self {
    Self::from_f32(value as f32)
  }

  /// Convert to an `f32`. This is exact.
  #[inline]
  pub fn to_f32(self) -> f32 {
    f32::from_bits(self.0 << F32_DROPPED)
  }

  /// Convert to an `f64`. This is exact.
  #[inline]
  pub fn to_f64(self) -> f64 {
    self.to_f32() as f64
  }

  /// Drop the 3 extra mantissa bits, i.e. truncate towards zero.
  ///
  /// ```
  /// # use soft_bf16::{Bf16, E8M10};
  /// assert_eq!(E8M10::pack(false, 127, 0b0000001_111).to_bf16(), Bf16::from_bits(0x3f81));
  /// ```
  #[inline]
  pub const fn to_bf16(self) -> Bf16 {
    let (sign, exponent, mantissa) = self.unpack();
    Bf16::pack(sign, exponent, (mantissa >> EXTRA_BITS) as u8)
  }

  /// Round to the nearest BF16, ties to even, carrying into the exponent if the mantissa rounds up
  /// past 0b1111111. The 3 extra mantissa bits are the guard, round and sticky bits.
  ///
  /// A zero is not rounded, only truncated, since its mantissa is meaningless anyway.
  ///
  /// ```
  /// # use soft_bf16::{Bf16, E8M10};
  /// assert_eq!(E8M10::pack(false, 127, 0b0000001_100).round_to_bf16(), Bf16::from_bits(0x3f82));
  /// assert_eq!(E8M10::pack(false, 127, 0b0000010_100).round_to_bf16(), Bf16::from_bits(0x3f82));
  /// assert_eq!(E8M10::pack(false, 127, 0b1111111_101).round_to_bf16(), Bf16::from_f64(2.0));
  /// ```
  pub fn round_to_bf16(self) -> Bf16 {
    if self.is_zero() { return self.to_bf16() }

    let (sign, exponent, mantissa) = self.unpack();
    let mantissa = mantissa as u64;
    let grs = Grs {
      guard: mantissa & 0b100 != 0,
      round: mantissa & 0b010 != 0,
      sticky: mantissa & 0b001 != 0,
    };
    let (mantissa, carry) = round_nearest_even::<{ Bf16::MANT_BITS }>(mantissa >> EXTRA_BITS, grs);
    Bf16::pack(sign, exponent.wrapping_add(carry as u8), mantissa as u8)
  }
}

impl From<Bf16> for E8M10 {
  /// Widen a BF16, appending three 0 mantissa bits. This is exact.
  #[inline]
  fn from(value: Bf16) -> Self {
    let (sign, exponent, mantissa) = value.unpack();
    Self::pack(sign, exponent, (mantissa as u16) << EXTRA_BITS)
  }
}

impl From<E8M10> for f32 {
  #[inline]
  fn from(value: E8M10) -> Self { value.to_f32() }
}

impl From<E8M10> for f64 {
  #[inline]
  fn from(value: E8M10) -> Self { value.to_f64() }
}
