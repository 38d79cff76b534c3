#![cfg_attr(not(test), no_std)]
//! This crate provides a bit-exact software model of the numeric datapath of a BFloat16 tensor
//! core: an array of processing elements, each computing one fused multiply-add per cycle.
//!
//! # Introduction
//!
//! [BFloat16](https://en.wikipedia.org/wiki/Bfloat16_floating-point_format) keeps the 8-bit
//! exponent of an IEEE754 single but only 7 explicit mantissa bits. Hardware that multiplies and
//! accumulates BF16 matrices is built from a handful of small, exact arithmetic blocks: an
//! aligner, a leading-zero anticipator, carry-select and Kogge-Stone adders, a normaliser and a
//! round-to-nearest-even rounder. This crate models each of those blocks as a plain function over
//! fixed-width integers (see [`datapath`]), and composes them into a multiplier, an adder, a
//! single-rounding FMA, and a MAC kernel that chains an extended [`E8M10`] accumulator word.
//!
//! The model is *bit-exact*, not *IEEE-exact*. In particular:
//!
//!   - Any value with exponent field 0 is zero; there are no subnormals.
//!   - There is no Inf or NaN; exponent field 255 is outside the defined domain.
//!   - The plain multiplier truncates rather than rounds.
//!   - Exponents wrap silently in 8 bits on overflow and underflow.
//!   - Exact cancellation always produces `+0`.
//!
//! # Usage
//!
//! ```
//! use soft_bf16::{Bf16, E8M10};
//!
//! let a = Bf16::from_f64(2.0);
//! let b = Bf16::from_f64(3.0);
//! let c = Bf16::ONE;
//!
//! assert_eq!(a.fma_fused(b, c).to_f64(), 7.0);
//! assert_eq!((a * b).to_bits(), 0x40c0);
//! assert_eq!((a - a).to_bits(), 0x0000);
//!
//! // Chain an extended-precision accumulator, round to BF16 only at the output.
//! let (out, acc) = a.mac(b, E8M10::from(c));
//! assert_eq!(out.to_f64(), 7.0);
//! assert_eq!(acc.to_f64(), 7.0);
//! ```
//!
//! A processing element wraps one accumulator register:
//!
//! ```
//! use soft_bf16::{Bf16, E8M10, pe::ProcessingElement};
//!
//! let mut pe = ProcessingElement::<E8M10>::new();
//! pe.load(Bf16::ONE);
//! pe.step(Bf16::from_f64(2.0), Bf16::from_f64(3.0));
//! assert_eq!(pe.read().to_f64(), 7.0);
//! ```

mod bf16;
mod e8m10;
mod underlying;

pub mod datapath;
pub mod pe;

/// Exact values for testing against
#[cfg(test)]
mod rational;

pub use bf16::{Bf16, NonFinite};
pub use e8m10::E8M10;

/// Number of cases for each `proptest` property.
#[cfg(test)]
const PROPTEST_CASES: u32 = if cfg!(debug_assertions) { 0x4000 } else { 0x40000 };
