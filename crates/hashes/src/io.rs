//! [`std::io::Write`] support for streaming hash states.
//!
//! A [`Blake2Xs`] state is a sink: every byte written is absorbed, so a reader
//! can be hashed with [`std::io::copy`] without buffering it in memory.
//!
//! # Example
//!
//! ```rust
//! use hashes::crypto::Blake2Xs;
//!
//! let mut state = Blake2Xs::new(None, 48)?;
//! std::io::copy(&mut &b"streamed input"[..], &mut state)?;
//! let digest = state.finalize_vec()?;
//! assert_eq!(digest, hashes::crypto::blake2xs::hash_vec(b"streamed input", 48, None)?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::io;

use crate::crypto::Blake2Xs;

impl io::Write for Blake2Xs {
  /// Absorbs all of `buf`. Fails once the state has been finalized.
  #[inline]
  fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
    self.update(buf).map_err(io::Error::other)?;
    Ok(buf.len())
  }

  #[inline]
  fn flush(&mut self) -> io::Result<()> {
    Ok(())
  }
}
