//! Bit-serial reference kernel.
//!
//! Processes the input one bit at a time by explicit polynomial division. It
//! needs no tables, so it is the only kernel compiled under `no-tables`, and it
//! is the oracle every table-driven kernel is tested against.
//!
//! Intentionally slow (8 conditional shifts per byte).

// Indices are bounded by `data.len()`.
#![allow(clippy::indexing_slicing)]

use crate::constants::step8;

/// Bitwise CRC-16/EN-13757 (normal, MSB-first).
///
/// Returns the raw register; apply [`finalize`](crate::finalize) once after the
/// last chunk. An empty `data` returns `crc` unchanged.
#[must_use]
pub const fn bitwise(crc: u16, data: &[u8]) -> u16 {
  let mut crc = crc;
  let mut i = 0usize;
  while i < data.len() {
    crc = step8(crc ^ ((data[i] as u16) << 8));
    i += 1;
  }
  crc
}
