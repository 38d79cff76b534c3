use super::prefix::kogge_stone_carries;
use crate::underlying::Word;

/// Leading zero count of the `W`-bit sum `(a + b + carry_in) mod 2^W`, or `W` if the sum is 0.
///
/// In hardware the count is needed at the same time as the sum (to drive the normaliser), so it
/// cannot wait for a full carry chain. Instead the anticipator derives the sum bits straight from
/// the generate/propagate signals through the logarithmic-depth [`kogge_stone_carries`] network,
/// and a priority encoder then picks out the most significant 1. For a subtraction `a - b`, call
/// it with `!b` and a carry in of 1.
///
/// ```
/// # use soft_bf16::datapath::leading_zeros;
/// // 0x201fc00 - 0x2000000 = 0x1fc00, whose leading 1 is bit 16 of 26.
/// assert_eq!(leading_zeros::<26>(0x201_fc00, !0x200_0000 & 0x3ff_ffff, true), 9);
/// assert_eq!(leading_zeros::<26>(0, 0, false), 26);
/// ```
pub fn leading_zeros<const W: u32>(a: u64, b: u64, carry_in: bool) -> u32 {
  let (a, b) = (a.mask_lsb(W), b.mask_lsb(W));
  let (g, p) = (a & b, a ^ b);
  let carries = kogge_stone_carries::<W>(g, p, carry_in);
  let predicted = (p ^ carries).mask_lsb(W);
  predicted.leading_zeros_in(W)
}

#[cfg(test)]
mod tests {
  use super::*;
  use proptest::prelude::*;

  fn clz(a: u64, b: u64, carry_in: bool, width: u32) -> u32 {
    let sum = (a.mask_lsb(width) + b.mask_lsb(width) + carry_in as u64).mask_lsb(width);
    sum.leading_zeros() - (64 - width)
  }

  #[test]
  fn exhaustive_8() {
    for a in 0 .. 1_u64 << 8 {
      for b in 0 .. 1_u64 << 8 {
        for carry_in in [false, true] {
          assert_eq!(leading_zeros::<8>(a, b, carry_in), clz(a, b, carry_in, 8), "{a:08b} {b:08b} {carry_in}")
        }
      }
    }
  }

  #[test]
  fn subtraction() {
    // a - a = 0
    assert_eq!(leading_zeros::<8>(0x5a, !0x5a & 0xff, true), 8);
    // 0x80 - 0x7f = 1
    assert_eq!(leading_zeros::<8>(0x80, !0x7f & 0xff, true), 7);
    // 0x80 - 0x01 = 0x7f
    assert_eq!(leading_zeros::<8>(0x80, !0x01 & 0xff, true), 1);
  }

  proptest!{
    #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]

    #[test]
    fn sum_16(a in 0 .. 1_u64 << 16, b in 0 .. 1_u64 << 16, carry_in in any::<bool>()) {
      prop_assert_eq!(leading_zeros::<16>(a, b, carry_in), clz(a, b, carry_in, 16))
    }

    #[test]
    fn sum_26(a in 0 .. 1_u64 << 26, b in 0 .. 1_u64 << 26, carry_in in any::<bool>()) {
      prop_assert_eq!(leading_zeros::<26>(a, b, carry_in), clz(a, b, carry_in, 26))
    }

    /// The way the datapath actually uses it: the difference of two working mantissas that both
    /// have their leading 1 in the top bit, or one of them aligned right.
    #[test]
    fn cancellation_26(a in 1_u64 << 25 .. 1 << 26, b in 0 .. 1_u64 << 26) {
      let (big, small) = if a >= b { (a, b) } else { (b, a) };
      let diff = big - small;
      prop_assert_eq!(
        leading_zeros::<26>(big, !small & 0x3ff_ffff, true),
        if diff == 0 { 26 } else { diff.leading_zeros() - 38 },
      )
    }
  }
}
