use super::prefix::{kogge_stone_carries, ripple};
use crate::underlying::{Word, mask};

/// A `W`-bit binary adder with carry in and carry out.
///
/// Implementors differ only in how they compute the carries; every implementation must agree with
/// schoolbook addition modulo 2^W for all `W`-bit inputs.
pub trait CarryAdder {
  /// Return `(a + b + carry_in) mod 2^W` and the carry out of bit `W-1`. Bits of `a` and `b` above
  /// `W` are ignored.
  fn add<const W: u32>(a: u64, b: u64, carry_in: bool) -> (u64, bool);

  /// Return `(a - b) mod 2^W` and whether the subtraction borrowed, i.e. whether `b > a`.
  ///
  /// Computed in two's complement as `a + !b + 1`: the carry out is set exactly when no borrow
  /// occurs.
  fn sub<const W: u32>(a: u64, b: u64) -> (u64, bool) {
    let (diff, carry_out) = Self::add::<W>(a, !b & mask(W), true);
    (diff, !carry_out)
  }
}

/// A carry-select adder with blocks of `BLOCK` bits.
///
/// The lowest block is a plain ripple adder. Every other block computes *both* its sum assuming a
/// carry in of 0 and its sum assuming a carry in of 1, and once the real carry from the block
/// below arrives it merely selects between the two. If `W` is not a multiple of `BLOCK`, the last
/// block is narrower.
///
/// The datapath uses `CarrySelect<6>` for the 26- and 27-bit mantissa additions.
///
/// ```
/// # use soft_bf16::datapath::{CarryAdder, CarrySelect};
/// assert_eq!(CarrySelect::<6>::add::<27>(0x300_0000, 0x080_0000, false), (0x380_0000, false));
/// assert_eq!(CarrySelect::<6>::sub::<26>(0x201_fc00, 0x200_0000), (0x1_fc00, false));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CarrySelect<const BLOCK: u32 = 6>;

impl<const BLOCK: u32> CarrySelect<BLOCK> {
  /// One `width`-bit ripple block: the block sum and its carry out.
  #[inline]
  fn block(a: u64, b: u64, carry_in: bool, width: u32) -> (u64, bool) {
    let (g, p) = (a & b, a ^ b);
    let carries = ripple(g, p, carry_in, width);
    ((p ^ carries).mask_lsb(width), carries.get_bit(width))
  }
}

impl<const BLOCK: u32> CarryAdder for CarrySelect<BLOCK> {
  fn add<const W: u32>(a: u64, b: u64, carry_in: bool) -> (u64, bool) {
    super::check_width!(W);
    const { assert!(BLOCK >= 1, "carry-select blocks must be at least 1 bit wide") }

    let mut sum = 0;
    let mut carry = carry_in;
    let mut lo = 0;
    while lo < W {
      let width = BLOCK.min(W - lo);
      let a = a.field(lo, width);
      let b = b.field(lo, width);
      let block = if lo == 0 {
        Self::block(a, b, carry, width)
      } else {
        let with_0 = Self::block(a, b, false, width);
        let with_1 = Self::block(a, b, true, width);
        if carry { with_1 } else { with_0 }
      };
      sum |= block.0 << lo;
      carry = block.1;
      lo += width;
    }

    (sum, carry)
  }
}

/// A Kogge-Stone parallel-prefix adder. See [`kogge_stone_carries`].
///
/// ```
/// # use soft_bf16::datapath::{CarryAdder, KoggeStone};
/// assert_eq!(KoggeStone::add::<8>(0xff, 0x01, false), (0x00, true));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct KoggeStone;

impl CarryAdder for KoggeStone {
  fn add<const W: u32>(a: u64, b: u64, carry_in: bool) -> (u64, bool) {
    let (a, b) = (a.mask_lsb(W), b.mask_lsb(W));
    let (g, p) = (a & b, a ^ b);
    let carries = kogge_stone_carries::<W>(g, p, carry_in);
    ((p ^ carries).mask_lsb(W), carries.get_bit(W))
  }
}
