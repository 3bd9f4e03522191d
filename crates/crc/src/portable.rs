//! Table-driven CRC-16/EN-13757 kernels.
//!
//! | Kernel | Bytes/iter | Tables |
//! |--------|------------|--------|
//! | `table` | 1 | 1×256×u16 (512 B) |
//! | `slice4` | 4 | 4×256×u16 (2 KiB) |
//! | `slice8` | 8 | 8×256×u16 (4 KiB) |
//!
//! The register is MSB-first, so the first input byte lines up with the high
//! byte of the register. In slice-by-N the first two bytes of each block are
//! XORed into the register and every byte then indexes the table that accounts
//! for the number of bytes still following it in the block.

// Table indices are a `u8` widened or masked with `& 0xFF`; chunk indices are
// bounded by `chunks_exact`.
#![allow(clippy::indexing_slicing)]

use crate::constants::{TABLE, TABLES_4, TABLES_8};

/// One byte through the 256-entry table.
#[inline(always)]
const fn table_step(crc: u16, byte: u8) -> u16 {
  (crc << 8) ^ TABLE[(((crc >> 8) ^ byte as u16) & 0xFF) as usize]
}

/// Byte-at-a-time table kernel.
#[inline]
#[must_use]
pub fn table(mut crc: u16, data: &[u8]) -> u16 {
  for &byte in data {
    crc = table_step(crc, byte);
  }
  crc
}

/// Slice-by-4 kernel.
#[inline]
#[must_use]
pub fn slice4(mut crc: u16, data: &[u8]) -> u16 {
  let t = &TABLES_4.0;
  let chunks = data.chunks_exact(4);
  let remainder = chunks.remainder();

  for chunk in chunks {
    let a = crc ^ u16::from_be_bytes([chunk[0], chunk[1]]);

    crc = t[3][(a >> 8) as usize] ^ t[2][(a & 0xFF) as usize] ^ t[1][chunk[2] as usize] ^ t[0][chunk[3] as usize];
  }

  table(crc, remainder)
}

/// Slice-by-8 kernel.
#[inline]
#[must_use]
pub fn slice8(mut crc: u16, data: &[u8]) -> u16 {
  let t = &TABLES_8.0;
  let chunks = data.chunks_exact(8);
  let remainder = chunks.remainder();

  for chunk in chunks {
    let a = crc ^ u16::from_be_bytes([chunk[0], chunk[1]]);

    crc = t[7][(a >> 8) as usize]
      ^ t[6][(a & 0xFF) as usize]
      ^ t[5][chunk[2] as usize]
      ^ t[4][chunk[3] as usize]
      ^ t[3][chunk[4] as usize]
      ^ t[2][chunk[5] as usize]
      ^ t[1][chunk[6] as usize]
      ^ t[0][chunk[7] as usize];
  }

  table(crc, remainder)
}
