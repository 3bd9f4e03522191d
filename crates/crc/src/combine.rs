//! CRC-16/EN-13757 combination.
//!
//! Computes `crc(A || B)` from `crc(A)`, `crc(B)`, and `len(B)` in
//! O(log len(B)) time, so independently checksummed parts can be joined
//! without touching their bytes again.
//!
//! With a zero initial register the raw CRC is linear over GF(2):
//! `raw(A || B) = raw(A) * x^(8*len(B)) mod G(x) XOR raw(B)`. The finalized
//! value is affine (`crc(empty) = 0xFFFF`), so both inputs are moved to the
//! linear form, joined, and moved back.

// Matrix indices are bounded by the 16-row operator.
#![allow(clippy::indexing_slicing)]

use crate::constants::{POLYNOMIAL, XOR_OUT};

/// 16×16 GF(2) matrix; row `i` is the image of bit `i`.
type Gf2Matrix = [u16; 16];

/// Multiply the register by `x` (one zero bit) modulo the polynomial.
#[inline]
const fn step_one_bit(crc: u16) -> u16 {
  if crc & 0x8000 != 0 {
    (crc << 1) ^ POLYNOMIAL
  } else {
    crc << 1
  }
}

/// Operator for one zero bit.
#[inline]
fn gf2_matrix_one_bit() -> Gf2Matrix {
  let mut mat = [0u16; 16];
  for (i, row) in mat.iter_mut().enumerate() {
    *row = step_one_bit(1 << i);
  }
  mat
}

/// Multiply a matrix by a vector.
#[inline]
fn gf2_matrix_times(mat: &Gf2Matrix, vec: u16) -> u16 {
  let mut sum = 0u16;
  let mut v = vec;

  // Iterate set bits only.
  while v != 0 {
    let bit = v.trailing_zeros() as usize;
    sum ^= mat[bit];
    v &= v - 1;
  }

  sum
}

/// `mat * mat`.
#[inline]
fn gf2_matrix_square(mat: &Gf2Matrix) -> Gf2Matrix {
  let mut square = [0u16; 16];
  for (row, &m) in square.iter_mut().zip(mat.iter()) {
    *row = gf2_matrix_times(mat, m);
  }
  square
}

/// Advance a *raw* register over `len` zero bytes.
#[must_use]
pub fn shift_raw(crc: u16, len: usize) -> u16 {
  if len == 0 || crc == 0 {
    return crc;
  }

  // x -> x^2 -> x^4 -> x^8: one zero byte.
  let mut op = gf2_matrix_one_bit();
  op = gf2_matrix_square(&op);
  op = gf2_matrix_square(&op);
  op = gf2_matrix_square(&op);

  let mut crc = crc;
  let mut len = len as u64;
  while len != 0 {
    if (len & 1) != 0 {
      crc = gf2_matrix_times(&op, crc);
    }
    len >>= 1;
    if len == 0 {
      break;
    }
    op = gf2_matrix_square(&op);
  }

  crc
}

/// Combine two *raw* registers, both computed from initial register 0.
#[inline]
#[must_use]
pub fn combine_raw(raw_a: u16, raw_b: u16, len_b: usize) -> u16 {
  shift_raw(raw_a, len_b) ^ raw_b
}

/// Combine two finalized CRC-16/EN-13757 values.
#[inline]
#[must_use]
pub fn crc16_en13757_combine(crc_a: u16, crc_b: u16, len_b: usize) -> u16 {
  if len_b == 0 {
    return crc_a;
  }
  combine_raw(crc_a ^ XOR_OUT, crc_b ^ XOR_OUT, len_b) ^ XOR_OUT
}
