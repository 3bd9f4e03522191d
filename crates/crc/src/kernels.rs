//! Kernel names, function pointers and length-based selection.
//!
//! Every kernel implements the same contract, [`Crc16Fn`]: take a raw register
//! and a buffer, return the raw register after the buffer. They differ only in
//! speed and in how much table memory they pull into the binary.
//!
//! # Kernel Tiers
//!
//! - Tier 0 (Reference): bit-serial, no tables
//! - Tier 1 (Table): one 256-entry table, one byte per step
//! - Tier 2 (Slice): slice-by-4 / slice-by-8 stacked tables

use crate::reference;
#[cfg(not(feature = "no-tables"))]
use crate::portable;

/// Function signature shared by all CRC-16/EN-13757 kernels.
pub type Crc16Fn = fn(u16, &[u8]) -> u16;

/// Reference (bitwise) kernel name.
pub const REFERENCE: &str = "reference/bitwise";
/// Byte-at-a-time table kernel name.
pub const PORTABLE_TABLE: &str = "portable/table";
/// Slice-by-4 kernel name.
pub const PORTABLE_SLICE4: &str = "portable/slice4";
/// Slice-by-8 kernel name.
pub const PORTABLE_SLICE8: &str = "portable/slice8";

/// A concrete CRC-16/EN-13757 kernel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kernel {
  /// Bit-serial polynomial division.
  Reference,
  /// 256-entry lookup table.
  #[cfg(not(feature = "no-tables"))]
  Table,
  /// Slice-by-4.
  #[cfg(not(feature = "no-tables"))]
  Slice4,
  /// Slice-by-8.
  #[cfg(not(feature = "no-tables"))]
  Slice8,
}

impl Kernel {
  /// Every kernel compiled into this build, ordered by increasing table size.
  #[cfg(not(feature = "no-tables"))]
  pub const ALL: &'static [Self] = &[Self::Reference, Self::Table, Self::Slice4, Self::Slice8];

  /// Every kernel compiled into this build.
  #[cfg(feature = "no-tables")]
  pub const ALL: &'static [Self] = &[Self::Reference];

  #[inline]
  #[must_use]
  pub const fn name(self) -> &'static str {
    match self {
      Self::Reference => REFERENCE,
      #[cfg(not(feature = "no-tables"))]
      Self::Table => PORTABLE_TABLE,
      #[cfg(not(feature = "no-tables"))]
      Self::Slice4 => PORTABLE_SLICE4,
      #[cfg(not(feature = "no-tables"))]
      Self::Slice8 => PORTABLE_SLICE8,
    }
  }

  #[inline]
  #[must_use]
  pub fn func(self) -> Crc16Fn {
    match self {
      Self::Reference => reference::bitwise,
      #[cfg(not(feature = "no-tables"))]
      Self::Table => portable::table,
      #[cfg(not(feature = "no-tables"))]
      Self::Slice4 => portable::slice4,
      #[cfg(not(feature = "no-tables"))]
      Self::Slice8 => portable::slice8,
    }
  }

  /// Run this kernel: raw register in, raw register out.
  #[inline]
  #[must_use]
  pub fn compute(self, crc: u16, data: &[u8]) -> u16 {
    (self.func())(crc, data)
  }

  /// Look a kernel up by its [`name`](Self::name).
  #[must_use]
  pub fn from_name(name: &str) -> Option<Self> {
    Self::ALL.iter().copied().find(|k| k.name() == name)
  }
}

/// Auto selection: reference without tables, table below the threshold,
/// slice-by-8 at or above it.
#[inline]
#[must_use]
#[allow(unused_variables)] // `len` and the threshold are unused under `no-tables`
pub const fn auto_for_len(len: usize, table_to_slice8: usize) -> Kernel {
  #[cfg(feature = "no-tables")]
  {
    Kernel::Reference
  }

  #[cfg(not(feature = "no-tables"))]
  {
    if len < table_to_slice8 {
      Kernel::Table
    } else {
      Kernel::Slice8
    }
  }
}
