//! The arithmetic building blocks of the tensor-core datapath, each modelled as a pure function
//! over fixed-width unsigned integers.
//!
//! A `W`-bit hardware signal is held in the low `W` bits of a `u64`; bits above `W` are ignored on
//! input and are always 0 on output. Widths are const generics, so the same primitive serves the
//! 7-bit rounder in the BF16 output path and the 26-bit adders of the working mantissa. Every
//! width must be between 1 and 63, so that a carry out of the top bit still fits in a `u64`.
//!
//! Some notation used in the comments:
//!
//!   - **Working mantissa**: the 26-bit register the multiplier, adder and FMA operate on. Bit 25
//!     holds the implicit 1, bits 24..18 the 7 explicit BF16 mantissa bits, and bits 17..0 the
//!     extra precision gathered during alignment. See [`WORK_WIDTH`].
//!   - **g, p**: generate (`a & b`) and propagate (`a ^ b`) signals of an addition.
//!   - **Bit 0, bit 1, .. bit W-1**: numbered least significant to most significant.

/// Width of the working mantissa register.
pub const WORK_WIDTH: u32 = 26;

/// Largest alignment shift the datapath ever applies. Shifting a working mantissa further would
/// discard it entirely, so exponent differences are clamped to this.
pub const MAX_SHIFT: u32 = WORK_WIDTH - 1;

/// Compile-time check of a datapath width.
macro_rules! check_width {
  ($w:expr) => {
    const { assert!(1 <= $w && $w <= 63, "datapath widths must be between 1 and 63 bits") }
  }
}

pub(crate) use check_width;

/// Aligner and normaliser.
mod shift;

/// Carry networks (ripple and Kogge-Stone parallel prefix).
pub mod prefix;

/// Carry-select and Kogge-Stone adders and subtractors.
mod adder;

/// Leading zero anticipator.
mod lza;

/// Round to nearest, ties to even.
mod round;

/// Mantissa multiplier.
mod mantissa;

/// Exponent difference units.
mod exp_diff;

pub use shift::{align, normalize};
pub use adder::{CarryAdder, CarrySelect, KoggeStone};
pub use lza::leading_zeros;
pub use round::{Grs, round_nearest_even};
pub use mantissa::mul_mantissas;
pub use exp_diff::{ExpDiff, exp_diff_fused, exp_diff_saturating, clamp_shift};
