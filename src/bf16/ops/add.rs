use super::*;

use crate::datapath::{align, clamp_shift};

impl Bf16 {
  /// Add `self` and `other`, rounding the result to nearest, ties to even.
  ///
  /// If both are zero the result is `+0`; if only one is, the result is the other, unchanged.
  /// An exact cancellation also gives `+0`, never `-0`.
  ///
  /// Results are correctly rounded as long as the exponents differ by at most 16: beyond that
  /// the aligner starts dropping bits of the smaller operand outright (and beyond 25 it is
  /// dropped entirely).
  ///
  /// ```
  /// # use soft_bf16::Bf16;
  /// let x = |v: f64| Bf16::from_f64(v);
  /// assert_eq!(x(5.0).add(x(-5.0)).to_bits(), 0x0000);
  /// assert_eq!(x(1.5) + x(1.0), x(2.5));
  /// assert_eq!(x(256.0) + x(1.0), x(256.0));  // 257 is a tie, to even
  /// ```
  pub fn add(self, other: Self) -> Self {
    if self.is_zero() && other.is_zero() {
      Self::ZERO
    } else if self.is_zero() {
      other
    } else if other.is_zero() {
      self
    } else {
      let x = Working::of_bf16(self);
      let y = Working::of_bf16(other);

      // The operand with the larger exponent keeps its working mantissa as it is; the other one is
      // shifted right to line up with it. On equal exponents, `self` counts as the larger one.
      let (larger, smaller) = if x.exp >= y.exp { (x, y) } else { (y, x) };
      let shift = clamp_shift(larger.exp - smaller.exp);
      let smaller = Working { mant: align::<WORK_WIDTH>(smaller.mant, shift), ..smaller };

      match Working::combine(larger, smaller) {
        Some(sum) => sum.round(),
        None => Self::ZERO,
      }
    }
  }

  /// Subtract `other` from `self`: exactly `self + (-other)`.
  ///
  /// ```
  /// # use soft_bf16::Bf16;
  /// let x = |v: f64| Bf16::from_f64(v);
  /// assert_eq!(x(2.0) - x(3.0), x(-1.0));
  /// assert_eq!(x(2.0) - x(2.0), Bf16::ZERO);
  /// ```
  #[inline]
  pub fn sub(self, other: Self) -> Self {
    self.add(-other)
  }
}

use core::ops::{Add, AddAssign, Sub, SubAssign};
super::mk_ops!{Add, AddAssign, add, add_assign}
super::mk_ops!{Sub, SubAssign, sub, sub_assign}
