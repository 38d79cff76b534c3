//! The BFloat16 type and its arithmetic, as computed by the tensor-core datapath.
//!
//! Every operation here is assembled from the primitives in [`crate::datapath`], in the same order
//! a hardware implementation would wire them: unpack, multiply or align, add or subtract,
//! anticipate leading zeros, normalise, round, pack. Comments walk through the bit-level detail.
//!
//! Some notation used in the comments:
//!
//!   - **Working mantissa**: a 26-bit mantissa with the implicit 1 at bit 25 (see
//!     [`crate::datapath::WORK_WIDTH`]).
//!   - **Larger / smaller operand**: the operands of an addition, ordered by exponent (not by
//!     magnitude, although the two coincide except when the exponents are equal).

/// A BFloat16 number: 1 sign bit, 8 exponent bits (bias 127), and 7 mantissa bits, as
/// `0bseeeeeeeemmmmmmm`.
///
/// Unlike IEEE754 binary16/32, there are no subnormals and no special values: any pattern with
/// exponent field 0 is zero regardless of its mantissa, and exponent field 255 is outside the
/// domain of the datapath (it is treated as an ordinary exponent, and [`is_finite`](Bf16::is_finite)
/// is false).
///
/// Equality is bitwise, so `+0` and `-0` (or two zeros with different junk mantissas) are
/// distinct values.
///
/// ```
/// # use soft_bf16::Bf16;
/// let x = Bf16::from_bits(0x4040);
/// assert_eq!(x.unpack(), (false, 128, 0x40));
/// assert_eq!(x.to_f64(), 3.0);
/// ```
#[derive(Clone, Copy, Default)]
#[derive(Eq, PartialEq, Hash)]
pub struct Bf16(u16);

/// The error returned when a bit pattern has exponent field 255, which is outside the domain of
/// the datapath (the Inf/NaN range of IEEE754).
#[derive(Debug, Clone, Copy)]
#[derive(Eq, PartialEq)]
pub struct NonFinite;

impl core::fmt::Display for NonFinite {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.write_str("exponent field 255 is not a finite value")
  }
}

impl core::error::Error for NonFinite {}

/// Basics
mod basics;

/// Constants (zero, one, max, min_positive, etc)
mod consts;

/// Conversions to and from `f32` and `f64`
mod convert;

/// Debug and Display
mod fmt;

/// Negation and absolute value
mod unary;

/// Arithmetic operations: multiplication, addition, subtraction, fused multiply-add
mod ops;

/// Test cases
#[cfg(test)]
mod test;
