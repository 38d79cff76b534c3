//! A processing element: one accumulator register, and the BF16 output it drives, updated by one
//! multiply-accumulate per cycle.
//!
//! A tensor core is an array of these. To compute an 8×8 tile of `A × B + C`, the scheduler loads
//! each element of `C` into its own PE, then feeds it the 8 pairs `(A[i][k], B[k][j])` one per
//! step; the PEs never talk to each other. Wiring the array (and splitting large matrices into
//! tiles) is left to the scheduler, which only needs [`load`](ProcessingElement::load),
//! [`step`](ProcessingElement::step) and [`read`](ProcessingElement::read).
//!
//! What the register holds between steps is up to the [`Accumulator`]:
//!
//!   - [`Bf16`]: each step is a [fused multiply-add](Bf16::fma_fused), rounded back to BF16.
//!   - [`E8M10`]: each step is a [multiply-accumulate](Bf16::mac); the register keeps 3 more bits
//!     than the output, so that small addends add up instead of being rounded away one by one.
//!
//! ```
//! # use soft_bf16::{Bf16, E8M10, pe::ProcessingElement};
//! let x = |v: f64| Bf16::from_f64(v);
//! let mut narrow = ProcessingElement::<Bf16>::new();
//! let mut wide = ProcessingElement::<E8M10>::new();
//! narrow.load(Bf16::ONE);
//! wide.load(Bf16::ONE);
//! for _ in 0 .. 8 {
//!   narrow.step(x(2f64.powi(-9)), Bf16::ONE);
//!   wide.step(x(2f64.powi(-9)), Bf16::ONE);
//! }
//! assert_eq!(narrow.read(), Bf16::ONE);
//! assert_eq!(wide.read(), Bf16::from_bits(0x3f82));
//! ```

use crate::{Bf16, E8M10};

/// The contents of a PE's accumulator register, and how a multiply-accumulate updates it.
pub trait Accumulator: Copy + core::fmt::Debug {
  /// The register contents after loading the BF16 value `c`.
  fn load(c: Bf16) -> Self;

  /// One multiply-accumulate step, `a × b + self`: return the BF16 output and the next register
  /// contents.
  fn accumulate(self, a: Bf16, b: Bf16) -> (Bf16, Self);
}

impl Accumulator for Bf16 {
  #[inline]
  fn load(c: Bf16) -> Self { c }

  #[inline]
  fn accumulate(self, a: Bf16, b: Bf16) -> (Bf16, Self) {
    let sum = a.fma_fused(b, self);
    (sum, sum)
  }
}

impl Accumulator for E8M10 {
  #[inline]
  fn load(c: Bf16) -> Self { E8M10::from(c) }

  #[inline]
  fn accumulate(self, a: Bf16, b: Bf16) -> (Bf16, Self) {
    a.mac(b, self)
  }
}

/// One cycle's worth of input to a [ProcessingElement].
#[derive(Debug, Clone, Copy)]
#[derive(Eq, PartialEq)]
pub enum Command {
  /// Do nothing; the register and the output hold their values.
  Idle,
  /// Load a new value into the register, see [`ProcessingElement::load`].
  Load(Bf16),
  /// Multiply the two operands and accumulate, see [`ProcessingElement::step`].
  Accumulate(Bf16, Bf16),
}

/// A processing element with an accumulator register of type `A` (see the [module
/// documentation](self)).
#[derive(Debug, Clone, Copy)]
pub struct ProcessingElement<A: Accumulator> {
  acc: A,
  out: Bf16,
}

impl<A: Accumulator> ProcessingElement<A> {
  /// A PE with the register loaded with zero.
  pub fn new() -> Self {
    Self { acc: A::load(Bf16::ZERO), out: Bf16::ZERO }
  }

  /// Load `c` into the register; the output becomes `c` too.
  pub fn load(&mut self, c: Bf16) {
    log::trace!("load {c:?}");
    self.acc = A::load(c);
    self.out = c;
  }

  /// Accumulate `a × b` into the register.
  pub fn step(&mut self, a: Bf16, b: Bf16) {
    let (out, acc) = self.acc.accumulate(a, b);
    log::trace!("step {a:?} × {b:?} + {:?} = {acc:?}", self.acc);
    self.acc = acc;
    self.out = out;
  }

  /// Apply one [Command].
  pub fn tick(&mut self, command: Command) {
    match command {
      Command::Idle => (),
      Command::Load(c) => self.load(c),
      Command::Accumulate(a, b) => self.step(a, b),
    }
  }

  /// The current BF16 output.
  #[inline]
  pub fn read(&self) -> Bf16 {
    self.out
  }

  /// The current contents of the register.
  #[inline]
  pub fn accumulator(&self) -> A {
    self.acc
  }
}

impl<A: Accumulator> Default for ProcessingElement<A> {
  fn default() -> Self {
    Self::new()
  }
}
