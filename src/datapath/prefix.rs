//! Carry computation from the generate and propagate signals of an addition.
//!
//! Both networks compute the same function: given `g = a & b`, `p = a ^ b` and a carry in, they
//! return the `W+1` carries of the `W`-bit addition `a + b + carry_in`, packed in a `u64` where
//! bit `i` is the carry *into* position `i`. Bit 0 is therefore the carry in, and bit `W` the
//! carry out. The sum bits are then simply `p ^ carries`.
//!
//! The ripple network is the obvious serial one, the Kogge-Stone network the parallel-prefix one
//! used by the leading zero anticipator and [`KoggeStone`](super::KoggeStone) adder.

use crate::underlying::{Word, mask};

/// Carries of `a + b + carry_in` by rippling the carry through all `W` positions in turn:
///
///   c[0]   = carry_in
///   c[i+1] = g[i] | (p[i] & c[i])
pub fn ripple_carries<const W: u32>(g: u64, p: u64, carry_in: bool) -> u64 {
  super::check_width!(W);
  ripple(g, p, carry_in, W)
}

/// [`ripple_carries`] with the width known only at runtime, for blocks of a larger adder.
pub(crate) fn ripple(g: u64, p: u64, carry_in: bool, width: u32) -> u64 {
  let mut carry = carry_in;
  let mut carries = carry as u64;
  for i in 0 .. width {
    carry = g.get_bit(i) | (p.get_bit(i) & carry);
    carries |= (carry as u64) << (i + 1);
  }
  carries
}

/// Carries of `a + b + carry_in` through a Kogge-Stone parallel prefix network.
///
/// We combine (generate, propagate) pairs with the usual associative operator
///
///   (G, P) ∘ (G', P') = (G | (P & G'), P & P')
///
/// where (G, P) is the more significant group. After the level with span `s`, position `i` holds
/// the group signals of bits `i-2s+1 ..= i`; after `⌈log2(W+1)⌉` levels every position holds the
/// signals of the whole range down to the carry in, and its G is the carry out of that range.
///
/// The carry in is folded in as an extra generate at the bottom: shifting `g` and `p` up by one
/// place makes room for it in bit 0, and turns "carry out of bit `i-1`" into "carry into bit `i`",
/// which is exactly the packing we want to return.
///
/// For example, for `W = 4`, `a = 0b0111`, `b = 0b0001`, `carry_in = 0`:
///
///   g = 0b00010, p = 0b01100  (shifted up, carry in at bit 0)
///   span 1: G = 0b00110, P = 0b01000
///   span 2: G = 0b01110, P = 0b00000
///   span 4: G = 0b01110
///
/// i.e. carries into bits 1, 2 and 3, no carry out, and the sum is `p ^ c = 0b1000`.
pub fn kogge_stone_carries<const W: u32>(g: u64, p: u64, carry_in: bool) -> u64 {
  super::check_width!(W);
  let width = W + 1;
  let mut group_g = (g.mask_lsb(W) << 1) | carry_in as u64;
  let mut group_p = p.mask_lsb(W) << 1;

  let mut span = 1;
  while span < width {
    // Positions below `span` have no partner `span` places down; their G is already final, and
    // their P is padded with 1s so that it remains the identity for the levels above.
    group_g |= group_p & (group_g << span);
    group_p &= (group_p << span) | mask(span);
    span <<= 1;
  }

  group_g.mask_lsb(width)
}
