use super::*;

use crate::datapath::{
  CarryAdder, CarrySelect, Grs, WORK_WIDTH,
  leading_zeros, normalize, round_nearest_even,
};
use crate::underlying::{Word, mask};
use crate::E8M10;

/// Multiplication.
mod mul;

/// Addition and subtraction (both use the same addition algorithm, and `a - b` is simply
/// `a + (-b)`.
mod add;

/// Fused multiply-add and the multiply-accumulate kernel.
mod fma;

/// A nonzero operand or result in the middle of the datapath: a sign, a biased exponent, and a
/// 26-bit working mantissa.
///
/// The exponent is kept as an `i32` while in flight, so that comparisons between exponents are
/// exact; it is only wrapped to 8 bits when packed into the final result.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Working {
  pub sign: bool,
  pub exp: i32,
  pub mant: u64,
}

impl Working {
  /// Where the explicit mantissa of a BF16 sits in the working mantissa.
  const BF16_SHIFT: u32 = WORK_WIDTH - 1 - Bf16::MANT_BITS;

  /// Where the explicit mantissa of an E8M10 sits in the working mantissa.
  const E8M10_SHIFT: u32 = WORK_WIDTH - 1 - E8M10::MANT_BITS;

  /// Unpack a BF16, which must not be zero, restoring its implicit 1 at bit 25.
  ///
  ///   0b1_10000000_1000000  →  sign 1, exp 128, mant 0b1_1000000_000000000000000000
  #[inline]
  pub fn of_bf16(x: Bf16) -> Self {
    let (sign, exp, mant) = x.unpack();
    Self {
      sign,
      exp: exp as i32,
      mant: (1 << Bf16::MANT_BITS | mant as u64) << Self::BF16_SHIFT,
    }
  }

  /// Unpack an E8M10, which must not be zero, restoring its implicit 1 at bit 25.
  #[inline]
  pub fn of_e8m10(x: E8M10) -> Self {
    let (sign, exp, mant) = x.unpack();
    Self {
      sign,
      exp: exp as i32,
      mant: (1 << E8M10::MANT_BITS | mant as u64) << Self::E8M10_SHIFT,
    }
  }

  /// Add `larger`, the operand with the larger exponent, and `smaller`, whose working mantissa
  /// has already been aligned to `larger`'s exponent. Return the normalised sum, with its leading
  /// 1 back at bit 25 but not yet rounded, or `None` if the sum is exactly zero.
  ///
  /// The exponent of the sum is `larger`'s exponent plus the normalisation adjustment.
  pub fn combine(larger: Self, smaller: Self) -> Option<Self> {
    // Adding two values of the same sign: an overflow by 1 place *may* occur, into bit 26, which
    // is why the adder is one bit wider than the working mantissa. For example
    //
    //     1.5  = 0b01_1000…
    //   + 1.0  = 0b01_0000…
    //   = 2.5  = 0b10_1000…
    //
    // If this happens, we shift the sum right by 1 (dropping its lowest bit, which can only hold
    // alignment residue) and add 1 to the exponent to compensate.
    //
    // Adding two values of different signs: we subtract the smaller magnitude from the larger,
    // which cannot overflow but *may* cancel any number of leading bits. For example
    //
    //     1.25 = 0b1_0100…
    //   - 1.0  = 0b1_0000…
    //   = 0.25 = 0b0_0100…
    //
    // If this happens, we shift the difference left by the number of leading 0s, and subtract
    // that from the exponent. The count comes from the leading zero anticipator, which sees the
    // same operands as the adder rather than its result.
    //
    // When the exponents differ the larger-exponent operand is always the larger magnitude (its
    // bit 25 is set and the other's is not); when they are equal the raw mantissas decide, and
    // `larger` wins a tie. The sign of the result is that of the larger magnitude.
    let (sum, sign, lz_a, lz_b) = if larger.sign == smaller.sign {
      let (sum, _) = CarrySelect::<6>::add::<{ WORK_WIDTH + 1 }>(larger.mant, smaller.mant, false);
      (sum, larger.sign, larger.mant, smaller.mant)
    } else {
      let (big, small) = if larger.mant >= smaller.mant { (larger, smaller) } else { (smaller, larger) };
      let (diff, _) = CarrySelect::<6>::sub::<WORK_WIDTH>(big.mant, small.mant);
      (diff, big.sign, big.mant, !small.mant & mask(WORK_WIDTH))
    };

    if sum == 0 { return None }

    let (mant, adjust) = if sum.get_bit(WORK_WIDTH) {
      (sum >> 1, 1)
    } else {
      let lz = leading_zeros::<WORK_WIDTH>(lz_a, lz_b, larger.sign != smaller.sign);
      (normalize::<WORK_WIDTH>(sum, lz), -(lz as i32))
    };

    Some(Self { sign, exp: larger.exp + adjust, mant })
  }

  /// Round a normalised working value to the 7 explicit mantissa bits of a BF16 (bits 24..18),
  /// with guard, round and sticky taken from the bits below. If the mantissa rounds up past
  /// 0b1111111 it wraps to 0, and the exponent goes up by 1. The exponent is then wrapped to
  /// 8 bits.
  #[inline]
  pub fn round(self) -> Bf16 {
    let mant = self.mant.field(Self::BF16_SHIFT, Bf16::MANT_BITS);
    let (mant, carry) = round_nearest_even::<{ Bf16::MANT_BITS }>(mant, Grs::of_working(self.mant));
    let exp = self.exp + carry as i32;
    Bf16::pack(self.sign, exp as u8, mant as u8)
  }

  /// Truncate a normalised working value to the 10 explicit mantissa bits of an E8M10 (bits
  /// 24..15). The exponent is wrapped to 8 bits.
  #[inline]
  pub fn truncate_e8m10(self) -> E8M10 {
    let mant = self.mant.field(Self::E8M10_SHIFT, E8M10::MANT_BITS);
    E8M10::pack(self.sign, self.exp as u8, mant as u16)
  }
}

/// Helper macro for implementing operators for all combinations of value and reference
macro_rules! mk_ops {
  ($trait:ident, $trait_assign:ident, $name:ident, $name_assign:ident) => {
    impl $trait<Bf16> for Bf16 {
      type Output = Bf16;

      #[inline]
      fn $name(self, rhs: Self) -> Self::Output { self.$name(rhs) }
    }

    impl $trait<&Bf16> for Bf16 {
      type Output = Bf16;

      #[inline]
      fn $name(self, rhs: &Self) -> Self::Output { self.$name(*rhs) }
    }

    impl $trait<Bf16> for &Bf16 {
      type Output = Bf16;

      #[inline]
      fn $name(self, rhs: Bf16) -> Self::Output { (*self).$name(rhs) }
    }

    impl $trait<&Bf16> for &Bf16 {
      type Output = Bf16;

      #[inline]
      fn $name(self, rhs: &Bf16) -> Self::Output { (*self).$name(*rhs) }
    }

    impl $trait_assign<Bf16> for Bf16 {
      #[inline]
      fn $name_assign(&mut self, rhs: Bf16) { *self = self.$name(rhs) }
    }

    impl $trait_assign<&Bf16> for Bf16 {
      #[inline]
      fn $name_assign(&mut self, rhs: &Bf16) { *self = self.$name(*rhs) }
    }
  }
}

pub(crate) use mk_ops;
