use super::*;

use crate::datapath::mul_mantissas;

impl Working {
  /// The exact product of two nonzero BF16s, as a working value.
  ///
  /// Multiplying two numbers in the form `1.mmmmmmm × 2^(e - 127)` is much easier than adding
  /// them: the mantissas multiply and the exponents add,
  ///
  ///   (1.ma × 2^(ea - 127)) × (1.mb × 2^(eb - 127)) = (1.ma × 1.mb) × 2^((ea + eb - 127) - 127)
  ///
  /// so the biased exponent of the product is `ea + eb - 127`. The mantissa product is in [1, 4)
  /// with 14 fractional bits, 16 bits in all (see [`mul_mantissas`]). If it is ≥ 2 (bit 15 set),
  /// it is 1 place too far left, so we place it 1 place lower in the working register and add 1
  /// to the exponent:
  ///
  ///   bit 15 clear: 0b01.xxxxxxxxxxxxxx << 11, leading 1 (bit 14) → bit 25
  ///   bit 15 set:   0b1x.xxxxxxxxxxxxxx << 10, leading 1 (bit 15) → bit 25
  ///
  /// Either way the product fits with room to spare, so it is exact. Also returns whether the
  /// mantissa product was ≥ 2.
  #[inline]
  pub fn product(a: Bf16, b: Bf16) -> (Self, bool) {
    let (a_sign, a_exp, a_mant) = a.unpack();
    let (b_sign, b_exp, b_mant) = b.unpack();
    let product = mul_mantissas(a_mant, b_mant) as u64;
    let overflow = product.get_bit(15);
    let product = Self {
      sign: a_sign ^ b_sign,
      exp: a_exp as i32 + b_exp as i32 - Bf16::BIAS + overflow as i32,
      mant: if overflow { product << 10 } else { product << 11 },
    };
    (product, overflow)
  }

  /// Keep the 7 explicit mantissa bits of a normalised working value (bits 24..18) and drop the
  /// rest, i.e. round towards zero. The exponent is wrapped to 8 bits.
  #[inline]
  pub fn truncate(self) -> Bf16 {
    let mant = self.mant.field(Self::BF16_SHIFT, Bf16::MANT_BITS);
    Bf16::pack(self.sign, self.exp as u8, mant as u8)
  }
}

impl Bf16 {
  /// Multiply `self` by `other`, truncating the result.
  ///
  /// This is the stand-alone multiplier: the mantissa product keeps its top 7 fractional bits
  /// and the rest are simply dropped. If either operand is zero, the result is `+0`.
  ///
  /// ```
  /// # use soft_bf16::Bf16;
  /// let (a, b) = (Bf16::from_f64(-2.0), Bf16::from_f64(-3.0));
  /// assert_eq!(a.mul(b).to_bits(), 0x40c0);
  /// assert_eq!(a * b, Bf16::from_f64(6.0));
  /// ```
  pub fn mul(self, other: Self) -> Self {
    if self.is_zero() || other.is_zero() {
      Self::ZERO
    } else {
      Working::product(self, other).0.truncate()
    }
  }
}

use core::ops::{Mul, MulAssign};
super::mk_ops!{Mul, MulAssign, mul, mul_assign}
