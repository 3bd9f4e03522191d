//! Error types for checksum verification.
//!
//! Computing a CRC cannot fail. The only fallible operation is comparing a
//! computed checksum against one received alongside the data.

use core::fmt;

/// A received checksum did not match the one computed over the data.
///
/// Both values are kept so a framing layer can log or count the mismatch.
///
/// # Examples
///
/// ```
/// use traits::VerificationError;
///
/// let err = VerificationError::new(0xC2B7u16, 0x1234u16);
/// assert_eq!(err.expected(), 0xC2B7);
/// assert_eq!(err.to_string(), "checksum mismatch: expected 0xC2B7, computed 0x1234");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct VerificationError<T> {
  expected: T,
  computed: T,
}

impl<T: Copy> VerificationError<T> {
  #[inline]
  #[must_use]
  pub const fn new(expected: T, computed: T) -> Self {
    Self { expected, computed }
  }

  /// The checksum that accompanied the data.
  #[inline]
  #[must_use]
  pub const fn expected(&self) -> T {
    self.expected
  }

  /// The checksum computed over the data.
  #[inline]
  #[must_use]
  pub const fn computed(&self) -> T {
    self.computed
  }
}

impl<T: fmt::UpperHex> fmt::Display for VerificationError<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "checksum mismatch: expected {:#X}, computed {:#X}",
      self.expected, self.computed
    )
  }
}

impl<T: fmt::Debug + fmt::UpperHex> core::error::Error for VerificationError<T> {}
