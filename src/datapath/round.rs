use super::{CarryAdder, KoggeStone};
use crate::underlying::Word;

/// The guard, round and sticky bits below the last kept bit of a mantissa.
///
///   - **guard**: the first bit shifted out, i.e. the one worth half an ulp,
///   - **round**: the next one,
///   - **sticky**: the OR of all the bits below that.
#[derive(Debug, Clone, Copy, Default)]
#[derive(Eq, PartialEq, Hash)]
pub struct Grs {
  pub guard: bool,
  pub round: bool,
  pub sticky: bool,
}

impl Grs {
  /// The bits that are dropped when a 26-bit working mantissa is rounded to the 7 explicit
  /// mantissa bits of a BF16 (bits 24..18): guard is bit 17, round bit 16, and sticky the OR of
  /// bits 15..0.
  #[inline]
  pub fn of_working(value: u64) -> Self {
    Self {
      guard: value.get_bit(17),
      round: value.get_bit(16),
      sticky: value.any_lsb(16),
    }
  }

  /// Whether any discarded bit is set, i.e. the rounding is inexact.
  #[inline]
  pub fn is_inexact(self) -> bool {
    self.guard | self.round | self.sticky
  }
}

/// Round the `W`-bit `mantissa` to nearest, ties to even, given the bits below it. Returns the
/// rounded mantissa (modulo 2^W) and whether the increment carried out of the top bit.
///
/// We round up if the discarded part is more than half an ulp (guard and any other bit set), or
/// exactly half an ulp and the mantissa is odd:
///
///   round_up = guard & (round | sticky | lsb)
///
/// If the mantissa was all 1s, rounding up wraps it to 0 and sets the overflow. For a mantissa
/// with an implicit leading 1, e.g. the 7 bits of a BF16, that is exactly the right result
/// provided the caller adds 1 to the exponent:
///
///   1.1111111|1 → 10.0000000 = 1.0000000 × 2¹
///
/// ```
/// # use soft_bf16::datapath::{Grs, round_nearest_even};
/// let half = Grs { guard: true, round: false, sticky: false };
/// assert_eq!(round_nearest_even::<7>(0b0000001, half), (0b0000010, false));
/// assert_eq!(round_nearest_even::<7>(0b0000010, half), (0b0000010, false));
/// assert_eq!(round_nearest_even::<7>(0b1111111, half), (0b0000000, true));
/// ```
#[inline]
pub fn round_nearest_even<const W: u32>(mantissa: u64, grs: Grs) -> (u64, bool) {
  let lsb = mantissa.get_bit(0);
  let round_up = grs.guard & (grs.round | grs.sticky | lsb);
  KoggeStone::add::<W>(mantissa, 0, round_up)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn grs(bits: u8) -> Grs {
    Grs { guard: bits & 0b100 != 0, round: bits & 0b010 != 0, sticky: bits & 0b001 != 0 }
  }

  #[test]
  fn cases() {
    // Below half: truncate.
    assert_eq!(round_nearest_even::<7>(0b0101010, grs(0b011)), (0b0101010, false));
    assert_eq!(round_nearest_even::<7>(0b0101011, grs(0b001)), (0b0101011, false));
    // Above half: round up.
    assert_eq!(round_nearest_even::<7>(0b0101010, grs(0b110)), (0b0101011, false));
    assert_eq!(round_nearest_even::<7>(0b0101010, grs(0b101)), (0b0101011, false));
    assert_eq!(round_nearest_even::<7>(0b0101010, grs(0b111)), (0b0101011, false));
    // Tie: to even.
    assert_eq!(round_nearest_even::<7>(0b0101010, grs(0b100)), (0b0101010, false));
    assert_eq!(round_nearest_even::<7>(0b0101011, grs(0b100)), (0b0101100, false));
    // Overflow.
    assert_eq!(round_nearest_even::<7>(0b1111111, grs(0b110)), (0b0000000, true));
    assert_eq!(round_nearest_even::<7>(0b1111110, grs(0b110)), (0b1111111, false));
    assert_eq!(round_nearest_even::<7>(0b1111110, grs(0b100)), (0b1111110, false));
  }

  #[test]
  fn widths() {
    assert_eq!(round_nearest_even::<8>(0xff, grs(0b100)), (0x00, true));
    assert_eq!(round_nearest_even::<8>(0xfe, grs(0b100)), (0xfe, false));
    assert_eq!(round_nearest_even::<16>(0xffff, grs(0b101)), (0x0000, true));
    assert_eq!(round_nearest_even::<16>(0x1234, grs(0b110)), (0x1235, false));
  }

  /// Exhaustively compare against rounding the exact value `(mantissa + frac / 8)`, where the
  /// 3 bits of `frac` stand in for guard, round and a single sticky bit.
  #[test]
  fn exhaustive_7() {
    for mantissa in 0_u64 .. 1 << 7 {
      for frac in 0_u8 .. 8 {
        let expected = match frac {
          0 ..= 3 => mantissa,
          4 => mantissa + (mantissa & 1),
          _ => mantissa + 1,
        };
        assert_eq!(
          round_nearest_even::<7>(mantissa, grs(frac)),
          (expected & 0x7f, expected >> 7 == 1),
          "{mantissa:07b}|{frac:03b}",
        )
      }
    }
  }

  #[test]
  fn of_working() {
    assert_eq!(Grs::of_working(0x3f8_0000), grs(0b000));
    assert_eq!(Grs::of_working(0x2_0000), grs(0b100));
    assert_eq!(Grs::of_working(0x1_0000), grs(0b010));
    assert_eq!(Grs::of_working(0x0_0001), grs(0b001));
    assert_eq!(Grs::of_working(0x0_8000), grs(0b001));
    assert_eq!(Grs::of_working(0x3_ffff), grs(0b111));
    assert!(!Grs::of_working(0x3fc_0000).is_inexact());
    assert!(Grs::of_working(0x3fc_0001).is_inexact());
  }
}
