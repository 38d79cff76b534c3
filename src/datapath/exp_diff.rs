use super::MAX_SHIFT;

/// Output of the fused exponent difference unit.
#[derive(Debug, Clone, Copy, Default)]
#[derive(Eq, PartialEq, Hash)]
pub struct ExpDiff {
  /// `(a + b - 127) - c`: positive if the product has the larger exponent, negative if the
  /// addend does.
  pub diff: i32,
  /// `|diff|` clamped to [`MAX_SHIFT`]: how far to align the operand with the smaller exponent.
  pub shift: u32,
}

/// Compare the exponent of a product `a × b` with that of an addend `c`, without first computing
/// (and wrapping) the product's exponent on its own. All three are biased 8-bit exponents; the
/// difference needs 10 bits signed, and comfortably fits an `i32`.
///
/// This is the difference *before* normalising the product mantissa: if the product of the
/// mantissas turns out ≥ 2 the caller adds 1 to `diff` (and recomputes the shift).
///
/// ```
/// # use soft_bf16::datapath::{ExpDiff, exp_diff_fused};
/// // 2 × 3 + 1: 2¹ × 2¹ vs 2⁰
/// assert_eq!(exp_diff_fused(128, 128, 127), ExpDiff { diff: 2, shift: 2 });
/// assert_eq!(exp_diff_fused(100, 100, 200), ExpDiff { diff: -127, shift: 25 });
/// ```
#[inline]
pub fn exp_diff_fused(a_exp: u8, b_exp: u8, c_exp: u8) -> ExpDiff {
  let diff = a_exp as i32 + b_exp as i32 - crate::Bf16::BIAS - c_exp as i32;
  ExpDiff { diff, shift: clamp_shift(diff) }
}

/// The alignment-only variant of [`exp_diff_fused`], for a datapath where the product always has
/// the larger exponent: `(a + b - 127) - c`, saturated to the range `0 ..= 255`.
///
/// ```
/// # use soft_bf16::datapath::exp_diff_saturating;
/// assert_eq!(exp_diff_saturating(128, 128, 127), 2);
/// assert_eq!(exp_diff_saturating(100, 20, 0), 0);    // a + b < 127
/// assert_eq!(exp_diff_saturating(128, 128, 200), 0); // c is larger
/// assert_eq!(exp_diff_saturating(254, 254, 0), 255);
/// ```
#[inline]
pub fn exp_diff_saturating(a_exp: u8, b_exp: u8, c_exp: u8) -> u8 {
  let sum = a_exp as i32 + b_exp as i32;
  if sum < crate::Bf16::BIAS {
    0
  } else {
    (sum - crate::Bf16::BIAS - c_exp as i32).clamp(0, u8::MAX as i32) as u8
  }
}

/// Alignment shift for an exponent difference `diff`: `|diff|`, but no more than [`MAX_SHIFT`].
#[inline]
pub fn clamp_shift(diff: i32) -> u32 {
  diff.unsigned_abs().min(MAX_SHIFT)
}
