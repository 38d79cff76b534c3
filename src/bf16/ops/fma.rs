use super::*;

use crate::datapath::{ExpDiff, align, clamp_shift, exp_diff_fused};

impl Working {
  /// The fused multiply-add kernel: `a × b + addend`, with `a`, `b` and `addend` all nonzero,
  /// normalised but not rounded. `None` if the result is exactly zero.
  ///
  /// The product is never rounded on its own: all 16 bits of the mantissa product go into the
  /// working register (see [`Working::product`]), so the only rounding is the final one. The
  /// exponent difference is taken straight from the three input exponents, then corrected by 1
  /// if the mantissa product turns out ≥ 2; that decides which of product and addend is aligned
  /// to the other. From there on it is exactly an addition.
  ///
  /// For example, `1.0078125 × 1.9921875 - 2`:
  ///
  ///   product mantissa  0x81 × 0xff = 0x807f, ≥ 2, so `<< 10` and exponent +1
  ///   product           0b10_0000_0001_1111_1100_0000_0000  (exp 128)
  ///   addend          - 0b10_0000_0000_0000_0000_0000_0000  (exp 128)
  ///                   = 0b00_0000_0001_1111_1100_0000_0000
  ///   normalise by 9  = 0b11_1111_1000_0000_0000_0000_0000  (exp 119)
  ///
  /// i.e. 127 × 2⁻¹⁴ exactly, where multiplying first and then adding would have given 0.
  pub fn fused(a: Bf16, b: Bf16, addend: Self) -> Option<Self> {
    let (product, overflow) = Self::product(a, b);
    let ExpDiff { diff, .. } = exp_diff_fused(a.exponent(), b.exponent(), addend.exp as u8);

    // A difference of exactly 0 counts in favour of the product.
    let diff = diff + overflow as i32;
    let shift = clamp_shift(diff);
    let (larger, smaller) = if diff >= 0 { (product, addend) } else { (addend, product) };
    let smaller = Self { mant: align::<WORK_WIDTH>(smaller.mant, shift), ..smaller };

    Self::combine(larger, smaller)
  }
}

impl Bf16 {
  /// Fused multiply-add: `self × b + c`, with a single rounding (to nearest, ties to even) at the
  /// end.
  ///
  /// If `self` or `b` is zero the result is `c`, unchanged. If `c` is zero the result is the
  /// plain (truncating) product [`self.mul(b)`](Self::mul). An exact cancellation gives `+0`.
  ///
  /// Results are correctly rounded as long as the exponents of the product and of `c` differ by
  /// at most 8 (so that the aligner drops nothing).
  ///
  /// ```
  /// # use soft_bf16::Bf16;
  /// let x = |v: f64| Bf16::from_f64(v);
  /// assert_eq!(x(2.0).fma_fused(x(3.0), x(1.0)), x(7.0));
  /// assert_eq!(x(4.0).fma_fused(x(2.0), x(1.0)), x(9.0));
  ///
  /// // The product is not rounded before the addition:
  /// let (a, b, c) = (Bf16::from_bits(0x3f81), Bf16::from_bits(0x3fff), x(-2.0));
  /// assert_eq!(a.fma_fused(b, c), Bf16::from_bits(0x3bfe));
  /// assert_eq!(a.fma_via_compose(b, c), Bf16::ZERO);
  /// ```
  pub fn fma_fused(self, b: Self, c: Self) -> Self {
    if self.is_zero() || b.is_zero() {
      c
    } else if c.is_zero() {
      self.mul(b)
    } else {
      match Working::fused(self, b, Working::of_bf16(c)) {
        Some(result) => result.round(),
        None => Self::ZERO,
      }
    }
  }

  /// Multiply-then-add: `(self × b) + c`, through the stand-alone multiplier (which truncates)
  /// and then the adder (which rounds). Two roundings, so in general less accurate than
  /// [`fma_fused`](Self::fma_fused).
  #[inline]
  pub fn fma_via_compose(self, b: Self, c: Self) -> Self {
    self.mul(b).add(c)
  }

  /// Multiply-accumulate into an extended accumulator: `self × b + acc`.
  ///
  /// Returns two results: the sum rounded once to BF16, exactly as [`fma_fused`](Self::fma_fused)
  /// would; and the same sum *truncated* to E8M10, to be fed back as `acc` for the next step.
  /// Chaining the E8M10 word rather than the BF16 result means small addends are not lost
  /// entirely at every step, only their bits below E8M10 precision.
  ///
  ///   - If `self` or `b` is zero: `(acc` rounded to BF16, `acc)`.
  ///   - If `acc` is zero: the plain (truncating) product, and the product truncated to E8M10.
  ///   - On an exact cancellation: `+0` for both.
  ///
  /// ```
  /// # use soft_bf16::{Bf16, E8M10};
  /// let x = |v: f64| Bf16::from_f64(v);
  /// let (out, acc) = x(2.0).mac(x(3.0), E8M10::from(x(1.0)));
  /// assert_eq!((out.to_f64(), acc.to_f64()), (7.0, 7.0));
  ///
  /// // 1 + 2⁻⁹ is lost in BF16, but not in E8M10.
  /// let (out, acc) = x(2f64.powi(-9)).mac(x(1.0), E8M10::ONE);
  /// assert_eq!(out, Bf16::ONE);
  /// assert_eq!(acc.to_f64(), 1.0 + 2f64.powi(-9));
  /// ```
  pub fn mac(self, b: Self, acc: E8M10) -> (Self, E8M10) {
    if self.is_zero() || b.is_zero() {
      (acc.round_to_bf16(), acc)
    } else if acc.is_zero() {
      let (product, _) = Working::product(self, b);
      (product.truncate(), product.truncate_e8m10())
    } else {
      match Working::fused(self, b, Working::of_e8m10(acc)) {
        Some(result) => (result.round(), result.truncate_e8m10()),
        None => (Self::ZERO, E8M10::ZERO),
      }
    }
  }
}
