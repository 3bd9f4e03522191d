//! CRC-16/EN-13757 checksum.
//!
//! Parameters (CRC Catalogue):
//! - width: 16
//! - poly: 0x3D65
//! - init: 0x0000
//! - refin/refout: false
//! - xorout: 0xFFFF
//! - check: 0xC2B7
//! - residue: 0xA366

use traits::{Checksum, ChecksumCombine, VerificationError};

use crate::constants::{RESIDUE, XOR_OUT};

/// CRC-16/EN-13757 checksum.
///
/// Holds the *raw* register; the complement is applied by
/// [`finalize`](Self::finalize) without consuming the hasher, so intermediate
/// registers are never finalized by accident.
#[derive(Clone, Debug)]
pub struct Crc16En13757 {
  /// Current raw register.
  state: u16,
  /// Raw register restored by `reset`.
  initial: u16,
}

impl Crc16En13757 {
  const INIT: u16 = 0x0000;

  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self {
      state: Self::INIT,
      initial: Self::INIT,
    }
  }

  /// Create a hasher that continues from a previously *finalized* checksum.
  #[inline]
  #[must_use]
  pub const fn resume(crc: u16) -> Self {
    Self::from_raw(crc ^ XOR_OUT)
  }

  /// Create a hasher that continues from a *raw* register, as returned by
  /// [`compute`](crate::compute).
  #[inline]
  #[must_use]
  pub const fn from_raw(register: u16) -> Self {
    Self {
      state: register,
      initial: register,
    }
  }

  /// Compute CRC-16/EN-13757 of `data` in one shot.
  #[inline]
  #[must_use]
  pub fn checksum(data: &[u8]) -> u16 {
    crate::compute(Self::INIT, data) ^ XOR_OUT
  }

  #[inline]
  pub fn update(&mut self, data: &[u8]) {
    self.state = crate::compute(self.state, data);
  }

  #[inline]
  #[must_use]
  pub const fn finalize(&self) -> u16 {
    self.state ^ XOR_OUT
  }

  #[inline]
  pub fn reset(&mut self) {
    self.state = self.initial;
  }

  /// Current checksum, as [`finalize`](Self::finalize) would return it.
  #[inline]
  #[must_use]
  pub const fn state(&self) -> u16 {
    self.finalize()
  }

  /// The raw, un-finalized register.
  #[inline]
  #[must_use]
  pub const fn raw(&self) -> u16 {
    self.state
  }

  /// Combine two checksums: `crc(A || B)` from `crc(A)`, `crc(B)`, `len(B)`.
  #[inline]
  #[must_use]
  pub fn combine(crc_a: u16, crc_b: u16, len_b: usize) -> u16 {
    crate::combine::crc16_en13757_combine(crc_a, crc_b, len_b)
  }

  /// Check `data` against a checksum received with it.
  ///
  /// # Errors
  ///
  /// [`VerificationError`] with the expected and computed values on mismatch.
  #[inline]
  pub fn verify(data: &[u8], expected: u16) -> Result<(), VerificationError<u16>> {
    <Self as Checksum>::verify(data, expected)
  }

  /// Check a frame that ends with its checksum in big-endian order.
  ///
  /// Feeding the data and its appended checksum through the register leaves
  /// the fixed residue `0xA366` exactly when the frame is intact.
  ///
  /// # Errors
  ///
  /// [`VerificationError`] with the expected residue and the register left by
  /// the frame. Frames shorter than two bytes cannot carry a checksum and
  /// always fail.
  #[inline]
  pub fn verify_residue(frame: &[u8]) -> Result<(), VerificationError<u16>> {
    let register = crate::compute(Self::INIT, frame);
    if frame.len() >= 2 && register == RESIDUE {
      Ok(())
    } else {
      Err(VerificationError::new(RESIDUE, register))
    }
  }
}

impl Default for Crc16En13757 {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl Checksum for Crc16En13757 {
  const OUTPUT_SIZE: usize = 2;
  type Output = u16;

  #[inline]
  fn new() -> Self {
    Crc16En13757::new()
  }

  #[inline]
  fn with_initial(initial: Self::Output) -> Self {
    Self::resume(initial)
  }

  #[inline]
  fn update(&mut self, data: &[u8]) {
    Crc16En13757::update(self, data);
  }

  #[inline]
  fn finalize(&self) -> Self::Output {
    Crc16En13757::finalize(self)
  }

  #[inline]
  fn reset(&mut self) {
    Crc16En13757::reset(self);
  }

  #[inline]
  fn checksum(data: &[u8]) -> Self::Output {
    Crc16En13757::checksum(data)
  }
}

impl ChecksumCombine for Crc16En13757 {
  #[inline]
  fn combine(crc_a: Self::Output, crc_b: Self::Output, len_b: usize) -> Self::Output {
    Crc16En13757::combine(crc_a, crc_b, len_b)
  }
}
