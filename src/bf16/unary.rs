use super::*;

impl Bf16 {
  /// Return the absolute value of `self`: clear the sign bit. This is exact, and never rounds.
  #[inline]
  pub const fn abs(self) -> Self {
    Self(self.0 & !(1 << (Self::BITS - 1)))
  }
}

impl core::ops::Neg for Bf16 {
  type Output = Bf16;

  /// Flip the sign bit. This is exact, and never rounds; zero becomes a zero of the opposite
  /// sign.
  #[inline]
  fn neg(self) -> Self::Output {
    Bf16(self.0 ^ 1 << (Bf16::BITS - 1))
  }
}

impl core::ops::Neg for &Bf16 {
  type Output = Bf16;

  #[inline]
  fn neg(self) -> Self::Output {
    -*self
  }
}
