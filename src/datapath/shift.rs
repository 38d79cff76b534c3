use crate::underlying::Word;

/// Shift the `W`-bit `value` right by `shift` places, filling with 0s from the left. This is the
/// aligner that brings the operand with the smaller exponent in line with the larger one.
///
/// Bits shifted out are lost; a shift of `W` or more yields 0.
///
/// ```
/// # use soft_bf16::datapath::align;
/// assert_eq!(align::<26>(0x200_0000, 2), 0x080_0000);
/// assert_eq!(align::<26>(0x200_0000, 26), 0);
/// ```
#[inline]
pub fn align<const W: u32>(value: u64, shift: u32) -> u64 {
  super::check_width!(W);
  if shift >= W { 0 } else { value.mask_lsb(W) >> shift }
}

/// Shift the `W`-bit `value` left by `shift` places, modulo 2^W. This is the normaliser that
/// brings the leading 1 of a result back to bit `W-1` after a cancellation.
///
/// Bits shifted past the top are lost; a shift of `W` or more yields 0.
///
/// ```
/// # use soft_bf16::datapath::normalize;
/// assert_eq!(normalize::<26>(0x1_fc00, 9), 0x3f8_0000);
/// ```
#[inline]
pub fn normalize<const W: u32>(value: u64, shift: u32) -> u64 {
  super::check_width!(W);
  if shift >= W { 0 } else { (value << shift).mask_lsb(W) }
}
