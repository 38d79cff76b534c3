use super::*;

use core::fmt::{Debug, Display};

impl Debug for Bf16 {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let (sign, exponent, mantissa) = self.unpack();
    f.debug_tuple("Bf16")
      .field(&format_args!("0b{:b}_{exponent:08b}_{mantissa:07b}", sign as u8))
      .finish()
  }
}

impl Display for Bf16 {
  /// The value as the equivalent `f32`, with a zero of any mantissa shown as `0` / `-0`.
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    if self.is_zero() {
      Display::fmt(if self.sign() { &-0.0_f32 } else { &0.0_f32 }, f)
    } else {
      Display::fmt(&self.to_f32(), f)
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn debug() {
    assert_eq!(format!("{:?}", Bf16::from_bits(0x4040)).as_str(), "Bf16(0b0_10000000_1000000)");
    assert_eq!(format!("{:?}", Bf16::MIN).as_str(), "Bf16(0b1_11111110_1111111)");
    assert_eq!(format!("{:?}", Bf16::ZERO).as_str(), "Bf16(0b0_00000000_0000000)");
  }

  #[test]
  fn display() {
    assert_eq!(format!("{}", Bf16::from_f64(7.0)).as_str(), "7");
    assert_eq!(format!("{}", Bf16::from_f64(-0.5)).as_str(), "-0.5");
    assert_eq!(format!("{}", Bf16::from_bits(0x0001)).as_str(), "0");
    assert_eq!(format!("{}", Bf16::from_bits(0x8001)).as_str(), "-0");
    assert_eq!(format!("{:.3}", Bf16::from_bits(0x3bfe)).as_str(), "0.008");
  }
}
