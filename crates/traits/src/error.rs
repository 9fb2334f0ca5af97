//! Error types for hash engines.
//!
//! Every failure is a local misuse condition reported to the immediate caller.
//! None of them are transient, so there is nothing to retry: a caller that sees
//! one of these must discard the state and treat the digest as never produced.

use core::fmt;

/// Misuse of a hash state.
///
/// Returned by initialization (bad key or output length) and finalization
/// (wrong output length, second finalize). No output bytes are written when
/// an operation fails with this error.
///
/// # Examples
///
/// ```
/// use traits::HashError;
///
/// fn check_key(key: &[u8]) -> Result<(), HashError> {
///   if (16..=32).contains(&key.len()) {
///     Ok(())
///   } else {
///     Err(HashError::InvalidKeyLength)
///   }
/// }
///
/// assert_eq!(check_key(&[0u8; 15]), Err(HashError::InvalidKeyLength));
/// assert!(check_key(&[0u8; 32]).is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum HashError {
  /// A key was supplied whose length is outside the accepted range
  /// (this includes an empty key slice standing in for "no key").
  InvalidKeyLength,
  /// The requested output length is outside the accepted range.
  InvalidDigestLength,
  /// The state has already produced its digest.
  AlreadyFinalized,
  /// The output buffer length differs from the length fixed at initialization.
  XofLengthMismatch,
}

impl HashError {
  /// Short, stable description of the error kind.
  #[inline]
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::InvalidKeyLength => "invalid key length",
      Self::InvalidDigestLength => "invalid digest length",
      Self::AlreadyFinalized => "hash state already finalized",
      Self::XofLengthMismatch => "output length does not match the length given at initialization",
    }
  }
}

impl fmt::Display for HashError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl core::error::Error for HashError {}

/// Verification failed.
///
/// Returned when a keyed-hash tag does not match. Intentionally opaque: it
/// does not say whether the key, the tag length or the tag bytes were wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub struct VerificationError;

impl VerificationError {
  /// Create a new verification error.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self
  }
}

impl From<HashError> for VerificationError {
  #[inline]
  fn from(_: HashError) -> Self {
    Self
  }
}

impl fmt::Display for VerificationError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("verification failed")
  }
}

impl core::error::Error for VerificationError {}
