//! Bit-field helpers shared by the codecs and the datapath primitives. Every hardware signal in
//! this crate is modelled as a machine unsigned integer, of which only the lowest `width` bits
//! are meaningful; these helpers extract, test and count bits within that logical width.
//!
//! Hidden from the end-user; the public functions in [`crate::datapath`] take and return plain
//! `u64`s.

/// Operations on an unsigned machine word carrying a narrower logical bit field.
pub(crate) trait Word:
  Copy + Clone +
  Eq + Ord +
  core::fmt::Debug + core::fmt::Binary +
  core::ops::Shl<u32, Output=Self> +
  core::ops::Shr<u32, Output=Self> +
  core::ops::BitAnd<Output=Self> +
  core::ops::BitOr<Output=Self> +
  core::ops::BitXor<Output=Self> +
  core::ops::Not<Output=Self>
{
  const ZERO: Self;
  const BITS: u32;

  /// Set all bits more significant than `n` to 0. `n` may be anything up to `Self::BITS`.
  ///
  /// ```ignore
  /// assert_eq!(0xabcd_u16.mask_lsb(4), 0x000d_u16)
  /// ```
  fn mask_lsb(self, n: u32) -> Self;

  /// Bit `n` of `self` as a bool.
  fn get_bit(self, n: u32) -> bool;

  /// The `len` bits starting from bit `lo`, shifted down to bit 0.
  ///
  /// ```ignore
  /// assert_eq!(0b1101_0110_u16.field(2, 4), 0b0101)
  /// ```
  fn field(self, lo: u32, len: u32) -> Self {
    (self >> lo).mask_lsb(len)
  }

  /// Whether any of the lowest `n` bits is set (an OR-reduction, i.e. a sticky bit).
  fn any_lsb(self, n: u32) -> bool {
    self.mask_lsb(n) != Self::ZERO
  }

  /// Number of leading 0 bits of `self` viewed as a `width`-bit field; `width` if `self` is 0.
  ///
  /// Bits above `width` must be 0.
  fn leading_zeros_in(self, width: u32) -> u32;
}

macro_rules! impl_word {
  ($uint:ty) => {
    impl Word for $uint {
      const ZERO: Self = 0;
      const BITS: u32 = <$uint>::BITS;

      #[inline]
      fn mask_lsb(self, n: u32) -> Self {
        if n >= Self::BITS { self } else { self & ((1 << n) - 1) }
      }

      #[inline]
      fn get_bit(self, n: u32) -> bool {
        (self >> n) & 1 == 1
      }

      #[inline]
      fn leading_zeros_in(self, width: u32) -> u32 {
        debug_assert!(width <= Self::BITS && self.mask_lsb(width) == self);
        self.leading_zeros() - (Self::BITS - width)
      }
    }
  }
}

impl_word!{u16}
impl_word!{u32}
impl_word!{u64}

/// A mask of the lowest `width` bits, as a `u64`. `width` may be anything up to 64.
#[inline]
pub(crate) const fn mask(width: u32) -> u64 {
  if width >= u64::BITS { u64::MAX } else { (1 << width) - 1 }
}
