/// Multiply two 7-bit BF16 mantissas, each with its implicit leading 1 restored, exactly.
///
/// Both factors are in `0x80 ..= 0xff`, i.e. `[1, 2)` with 7 fractional bits, so the 16-bit
/// product is in `0x4000 ..= 0xfe01`, i.e. `[1, 4)` with 14 fractional bits. Bit 15 tells which
/// half of that range we landed in: if it's set the product is ≥ 2 and the caller must shift it
/// one more place and add 1 to the exponent.
///
/// Bits of `a` and `b` above the low 7 are ignored.
///
/// ```
/// # use soft_bf16::datapath::mul_mantissas;
/// assert_eq!(mul_mantissas(0x00, 0x00), 0x4000);  // 1.0 × 1.0
/// assert_eq!(mul_mantissas(0x00, 0x40), 0x6000);  // 1.0 × 1.5
/// assert_eq!(mul_mantissas(0x7f, 0x7f), 0xfe01);
/// ```
#[inline]
pub fn mul_mantissas(a: u8, b: u8) -> u16 {
  let a = 0x80 | (a & 0x7f) as u16;
  let b = 0x80 | (b & 0x7f) as u16;
  a * b
}
