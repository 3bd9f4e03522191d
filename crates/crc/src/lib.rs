//! CRC-16/EN-13757 checksums for embedded communication stacks.
//!
//! The variant used by Wireless M-Bus (EN 13757-4) link layers:
//!
//! | Parameter | Value |
//! |-----------|-------|
//! | Polynomial | `0x3D65` (`x^16 + x^13 + x^12 + x^11 + x^10 + x^8 + x^6 + x^5 + x^2 + 1`) |
//! | Bit order | MSB-first, no reflection |
//! | Initial register | caller supplied, `0x0000` for a fresh checksum |
//! | Finalization | one's complement (`xorout = 0xFFFF`) |
//! | Check (`"123456789"`) | `0xC2B7` |
//!
//! # Kernels
//!
//! Several interchangeable kernels implement the same contract (raw register
//! in, raw register out) and always agree bit for bit:
//!
//! | Kernel | Memory | Notes |
//! |--------|--------|-------|
//! | `reference/bitwise` | none | the only kernel with the `no-tables` feature |
//! | `portable/table` | 512 B | one byte per step |
//! | `portable/slice4` | 2 KiB | four bytes per step |
//! | `portable/slice8` | 4 KiB | eight bytes per step, default for long buffers |
//!
//! All tables are `const`, computed at compile time.
//!
//! # Example
//!
//! ```rust
//! use en13757_crc::{Crc16En13757, compute, compute_finalize, finalize};
//!
//! // One-shot.
//! assert_eq!(compute_finalize(b"123456789"), 0xC2B7);
//!
//! // Chained across chunks: carry the raw register, finalize once.
//! let reg = compute(0, b"1234");
//! let reg = compute(reg, b"56789");
//! assert_eq!(finalize(reg), 0xC2B7);
//!
//! // Streaming hasher.
//! let mut h = Crc16En13757::new();
//! h.update(b"1234");
//! h.update(b"56789");
//! assert_eq!(h.finalize(), 0xC2B7);
//! ```
//!
//! # no_std Support
//!
//! The crate is `no_std`. Disable default features for embedded use, and add
//! `no-tables` to trade speed for the table memory:
//!
//! ```toml
//! [dependencies]
//! en13757-crc = { version = "0.1", default-features = false, features = ["no-tables"] }
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod combine;
pub mod config;
pub mod constants;
mod en13757;
pub mod kernels;
#[cfg(not(feature = "no-tables"))]
pub mod portable;
pub mod reference;

#[cfg(feature = "alloc")]
pub mod kernel_test;

#[cfg(test)]
mod proptests;

#[doc(hidden)]
pub mod __internal {
  #[cfg(feature = "alloc")]
  pub use crate::kernel_test;
}

pub use config::{Crc16Config, Crc16Force, Crc16Tunables};
pub use en13757::Crc16En13757;
pub use kernels::{Crc16Fn, Kernel};
pub use traits::{Checksum, ChecksumCombine, VerificationError};

/// Feed `data` through the register, starting from `initial`.
///
/// Returns the raw register. Use `0` for a fresh checksum, or the value
/// returned by a previous call to continue across chunks. Apply [`finalize`]
/// once, after the last chunk. Empty `data` returns `initial` unchanged.
#[inline]
#[must_use]
pub fn compute(initial: u16, data: &[u8]) -> u16 {
  selected_kernel(data.len()).compute(initial, data)
}

/// One's complement of the register: the value sent on the wire.
#[inline]
#[must_use]
pub const fn finalize(register: u16) -> u16 {
  register ^ constants::XOR_OUT
}

/// `finalize(compute(0, data))`.
#[inline]
#[must_use]
pub fn compute_finalize(data: &[u8]) -> u16 {
  finalize(compute(0, data))
}

/// Kernel [`compute`] uses for a buffer of `len` bytes.
#[inline]
#[must_use]
pub fn selected_kernel(len: usize) -> Kernel {
  config::get().kernel_for_len(len)
}

/// Name of the kernel used for a representative 1 KiB buffer.
#[inline]
#[must_use]
pub fn backend_name() -> &'static str {
  selected_kernel(1024).name()
}
