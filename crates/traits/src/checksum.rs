//! Non-cryptographic checksum traits.
//!
//! - **One-shot**: [`Checksum::checksum`] over a buffer already in memory
//! - **Streaming**: `new` + repeated `update` + a single `finalize`
//! - **Parallel**: [`ChecksumCombine::combine`] joins independently computed parts

use core::fmt::Debug;

use crate::error::VerificationError;

/// Non-cryptographic checksum algorithm.
///
/// # Usage
///
/// ```rust
/// use traits::Checksum;
///
/// /// XOR of every byte.
/// #[derive(Clone, Default)]
/// struct Xor8(u8);
///
/// impl Checksum for Xor8 {
///   const OUTPUT_SIZE: usize = 1;
///   type Output = u8;
///
///   fn new() -> Self {
///     Self(0)
///   }
///
///   fn with_initial(initial: u8) -> Self {
///     Self(initial)
///   }
///
///   fn update(&mut self, data: &[u8]) {
///     self.0 = data.iter().fold(self.0, |acc, &b| acc ^ b);
///   }
///
///   fn finalize(&self) -> u8 {
///     self.0
///   }
///
///   fn reset(&mut self) {
///     self.0 = 0;
///   }
/// }
///
/// // One-shot
/// let crc = Xor8::checksum(b"123456789");
///
/// // Streaming
/// let mut hasher = Xor8::new();
/// hasher.update(b"1234");
/// hasher.update(b"56789");
/// assert_eq!(hasher.finalize(), crc);
///
/// // Verification against a received value
/// assert!(Xor8::verify(b"123456789", crc).is_ok());
/// assert!(Xor8::verify(b"123456789", crc ^ 1).is_err());
/// ```
///
/// # Implementor Requirements
///
/// - `new()` must return the same state as `Default::default()`
/// - `finalize()` must be idempotent and must not consume the hasher
/// - `reset()` must restore the state the hasher was constructed with
pub trait Checksum: Clone + Default {
  /// Output size in bytes (2 for a 16-bit CRC).
  const OUTPUT_SIZE: usize;

  /// The checksum output type.
  type Output: Copy + Eq + Debug + Default;

  /// Create a new hasher with the default initial value.
  #[must_use]
  fn new() -> Self;

  /// Create a new hasher whose *finalized* starting value is `initial`.
  ///
  /// `with_initial(checksum(a))` followed by `update(b)` yields `checksum(a || b)`.
  #[must_use]
  fn with_initial(initial: Self::Output) -> Self;

  /// Update the hasher with additional data.
  fn update(&mut self, data: &[u8]);

  /// Update the hasher with multiple non-contiguous buffers, in order.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Return the checksum of everything processed so far.
  #[must_use]
  fn finalize(&self) -> Self::Output;

  /// Reset the hasher to its initial state.
  fn reset(&mut self);

  /// Compute the checksum of data in one shot.
  #[inline]
  #[must_use]
  fn checksum(data: &[u8]) -> Self::Output {
    let mut h = Self::new();
    h.update(data);
    h.finalize()
  }

  /// Compute the checksum of multiple buffers in one shot.
  #[inline]
  #[must_use]
  fn checksum_vectored(bufs: &[&[u8]]) -> Self::Output {
    let mut h = Self::new();
    h.update_vectored(bufs);
    h.finalize()
  }

  /// Check `data` against a received checksum.
  ///
  /// # Errors
  ///
  /// Returns [`VerificationError`] carrying both values when they differ.
  #[inline]
  fn verify(data: &[u8], expected: Self::Output) -> Result<(), VerificationError<Self::Output>> {
    let computed = Self::checksum(data);
    if computed == expected {
      Ok(())
    } else {
      Err(VerificationError::new(expected, computed))
    }
  }
}

/// Checksums that support combining independently computed parts.
///
/// For a CRC with generator `G(x)`:
///
/// ```text
/// crc(A || B) = crc(A) * x^(8*len(B)) mod G(x) XOR crc(B)
/// ```
///
/// (after removing any affine init/xorout offset). The exponentiation uses
/// square-and-multiply, so the cost is O(log len(B)).
pub trait ChecksumCombine: Checksum {
  /// Given `crc_a = crc(A)` and `crc_b = crc(B)`, computes `crc(A || B)`.
  #[must_use]
  fn combine(crc_a: Self::Output, crc_b: Self::Output, len_b: usize) -> Self::Output;
}
