//! CRC-16/EN-13757 constants.
//!
//! Generator: x^16 + x^13 + x^12 + x^11 + x^10 + x^8 + x^6 + x^5 + x^2 + 1
//! (0x13D65, normal MSB-first form with the leading term implicit).
//!
//! All tables are computed at compile time by `const fn`, so there is no
//! runtime initialisation and no way to observe a partially built table.

// Indices are bounded by loop counters (0..256, 0..N).
#![allow(clippy::indexing_slicing)]

/// Generator polynomial, low 16 bits.
pub const POLYNOMIAL: u16 = 0x3D65;

/// Value applied by the finalizer (one's complement).
pub const XOR_OUT: u16 = 0xFFFF;

/// Raw register left by `compute(0, data || be_bytes(checksum(data)))`.
pub const RESIDUE: u16 = 0xA366;

/// `checksum(b"123456789")`.
pub const CHECK: u16 = 0xC2B7;

/// Wrapper forcing 64-byte (cache line) alignment of the slice tables.
#[cfg(not(feature = "no-tables"))]
#[repr(align(64))]
#[derive(Debug)]
pub struct Aligned64<T>(pub T);

/// Single-byte lookup table (MSB-first). 256 * 2 = 512 bytes.
#[cfg(not(feature = "no-tables"))]
pub const TABLE: [u16; 256] = generate_table();

/// Slice-by-4 tables. `TABLES_4.0[k][i]` is byte `i` followed by `k` zero bytes.
#[cfg(not(feature = "no-tables"))]
pub static TABLES_4: Aligned64<[[u16; 256]; 4]> = Aligned64(generate_slice_tables::<4>());

/// Slice-by-8 tables.
#[cfg(not(feature = "no-tables"))]
pub static TABLES_8: Aligned64<[[u16; 256]; 8]> = Aligned64(generate_slice_tables::<8>());

/// Shift one byte's worth of bits out of `crc`, reducing by the polynomial.
#[inline]
#[must_use]
pub const fn step8(mut crc: u16) -> u16 {
  let mut bit = 0;
  while bit < 8 {
    crc = if crc & 0x8000 != 0 {
      (crc << 1) ^ POLYNOMIAL
    } else {
      crc << 1
    };
    bit += 1;
  }
  crc
}

/// `table[k] = step8(k << 8)`.
#[must_use]
pub const fn generate_table() -> [u16; 256] {
  let mut table = [0u16; 256];
  let mut i = 0usize;
  while i < 256 {
    // Align the byte into the top 8 bits of the register.
    table[i] = step8((i as u16) << 8);
    i += 1;
  }
  table
}

/// Stacked tables for slice-by-`N`.
///
/// `T[k][i] = (T[k-1][i] << 8) ^ T[0][T[k-1][i] >> 8]`: one more zero byte
/// pushed through the register.
#[must_use]
pub const fn generate_slice_tables<const N: usize>() -> [[u16; 256]; N] {
  let mut tables = [[0u16; 256]; N];
  if N == 0 {
    return tables;
  }

  tables[0] = generate_table();

  let mut k = 1usize;
  while k < N {
    let mut i = 0usize;
    while i < 256 {
      let prev = tables[k - 1][i];
      tables[k][i] = (prev << 8) ^ tables[0][(prev >> 8) as usize];
      i += 1;
    }
    k += 1;
  }

  tables
}
