//! BLAKE2Xs: keyed BLAKE2s with tree-expanded extendable output.
//!
//! Outputs of up to [`BYTES`] (32) bytes are a single BLAKE2s node. Longer
//! outputs, up to [`BYTES_MAX`], hash the message into a 32-byte root and then
//! derive each 32-byte output block `i` as an independent leaf node over that
//! root, with `node_offset = i`. The message is read exactly once.
//!
//! Portable, `no_std`, pure Rust implementation.
//!
//! # Example
//!
//! ```
//! use hashes::crypto::blake2xs::{self, Blake2Xs};
//!
//! let key = [0x42u8; blake2xs::KEYBYTES];
//!
//! // One-shot, 64 bytes of keyed output.
//! let mut tag = [0u8; 64];
//! blake2xs::hash(&mut tag, b"hello world", Some(&key))?;
//!
//! // Streaming produces the same bytes.
//! let mut state = Blake2Xs::new(Some(&key), 64)?;
//! state.update(b"hello ")?;
//! state.update(b"world")?;
//! let mut streamed = [0u8; 64];
//! state.finalize_into(&mut streamed)?;
//! assert_eq!(tag, streamed);
//!
//! assert!(blake2xs::verify(&tag, b"hello world", &key).is_ok());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![allow(clippy::indexing_slicing)] // Buffer offsets are bounded by BLOCK_LEN

use core::fmt;

use rand_core::{CryptoRng, RngCore};
use traits::{HashError, VerificationError};
use zeroize::{Zeroize, ZeroizeOnDrop};

use self::{
  compress::{LAST_BLOCK, compress},
  params::Params,
};
use crate::util::ct_eq;

mod compress;
#[cfg(test)]
mod kernel_test;
mod params;

/// Compression block size in bytes.
pub const BLOCK_LEN: usize = 64;
/// Native BLAKE2s digest size; longer outputs switch to XOF mode.
pub const BYTES: usize = 32;
/// Smallest accepted output length.
pub const BYTES_MIN: usize = 16;
/// Largest accepted output length.
pub const BYTES_MAX: usize = 0xFFFF;
/// Recommended key length, as produced by [`keygen`].
pub const KEYBYTES: usize = 32;
/// Smallest accepted key length.
pub const KEYBYTES_MIN: usize = 16;
/// Largest accepted key length.
pub const KEYBYTES_MAX: usize = 32;

/// One BLAKE2s node: chaining value, counter, finalization flag and the
/// pending partial block.
#[derive(Clone, Zeroize)]
struct Node {
  h: [u32; 8],
  t: u64,
  f: u32,
  buf: [u8; BLOCK_LEN],
  buf_len: usize,
}

impl Node {
  #[inline]
  fn new(params: Params) -> Self {
    Self {
      h: params.chaining_value(),
      t: 0,
      f: 0,
      buf: [0u8; BLOCK_LEN],
      buf_len: 0,
    }
  }

  #[inline]
  fn is_finalized(&self) -> bool {
    self.f != 0
  }

  /// Absorb `data`.
  ///
  /// A block is compressed as soon as it is complete, so a message ending on
  /// a block boundary finalizes over an all-zero block without advancing the
  /// counter.
  fn absorb(&mut self, mut data: &[u8]) {
    if self.buf_len != 0 {
      let take = core::cmp::min(BLOCK_LEN - self.buf_len, data.len());
      let (head, rest) = data.split_at(take);
      self.buf[self.buf_len..self.buf_len + take].copy_from_slice(head);
      self.buf_len += take;
      data = rest;

      if self.buf_len < BLOCK_LEN {
        return;
      }
      self.t = self.t.wrapping_add(BLOCK_LEN as u64);
      compress(&mut self.h, &self.buf, self.t, 0);
      self.buf_len = 0;
    }

    let (blocks, rest) = data.as_chunks::<BLOCK_LEN>();
    for block in blocks {
      self.t = self.t.wrapping_add(BLOCK_LEN as u64);
      compress(&mut self.h, block, self.t, 0);
    }
    self.buf[..rest.len()].copy_from_slice(rest);
    self.buf_len = rest.len();
  }

  /// Pad and compress the last block, then write the first `out.len()`
  /// digest bytes. The caller guarantees `out.len() <= BYTES` and that the
  /// node has not been finalized yet.
  fn finish(&mut self, out: &mut [u8]) {
    debug_assert!(out.len() <= BYTES);
    debug_assert!(!self.is_finalized());

    self.f = LAST_BLOCK;
    self.t = self.t.wrapping_add(self.buf_len as u64);
    self.buf[self.buf_len..].fill(0);
    compress(&mut self.h, &self.buf, self.t, self.f);

    let mut digest = [0u8; BYTES];
    let (words, _) = digest.as_chunks_mut::<4>();
    for (dst, word) in words.iter_mut().zip(self.h) {
      *dst = word.to_le_bytes();
    }
    out.copy_from_slice(&digest[..out.len()]);
    digest.zeroize();
  }

  #[inline]
  fn finalize_into(&mut self, out: &mut [u8]) -> Result<(), HashError> {
    if self.is_finalized() {
      return Err(HashError::AlreadyFinalized);
    }
    self.finish(out);
    Ok(())
  }
}

impl Drop for Node {
  fn drop(&mut self) {
    self.zeroize();
  }
}

impl ZeroizeOnDrop for Node {}

/// One leaf of the expansion tree.
struct Leaf {
  bytes: [u8; BYTES],
  len: usize,
}

impl Leaf {
  #[inline]
  fn as_slice(&self) -> &[u8] {
    &self.bytes[..self.len]
  }
}

/// Leaf digests of an XOF output in node-offset order.
///
/// Every leaf hashes the same root under its own index; leaves do not depend
/// on each other.
struct Leaves<'a> {
  root: &'a [u8; BYTES],
  xof_len: u16,
  index: u32,
  remaining: usize,
}

impl<'a> Leaves<'a> {
  #[inline]
  fn new(root: &'a [u8; BYTES], xof_len: u16) -> Self {
    Self {
      root,
      xof_len,
      index: 0,
      remaining: xof_len as usize,
    }
  }
}

impl Iterator for Leaves<'_> {
  type Item = Leaf;

  fn next(&mut self) -> Option<Leaf> {
    if self.remaining == 0 {
      return None;
    }
    let len = core::cmp::min(self.remaining, BYTES);
    let mut node = Node::new(Params::xof_leaf(self.xof_len, self.index, len as u8));
    node.absorb(self.root);

    let mut leaf = Leaf {
      bytes: [0u8; BYTES],
      len,
    };
    node.finish(&mut leaf.bytes[..len]);

    self.index += 1;
    self.remaining -= len;
    Some(leaf)
  }
}

/// Incremental BLAKE2Xs state.
///
/// Created with [`Blake2Xs::new`], fed with [`Blake2Xs::update`] and consumed
/// by exactly one successful [`Blake2Xs::finalize_into`]. The state is not
/// synchronized: share it across threads only behind external locking.
///
/// Key material and chaining state are wiped when the state is dropped.
#[derive(Clone)]
pub struct Blake2Xs {
  node: Node,
  digest_len: u8,
  xof_len: u16,
}

impl Blake2Xs {
  /// Start a new hash producing `out_len` bytes.
  ///
  /// `key`, when present, must be [`KEYBYTES_MIN`]..=[`KEYBYTES_MAX`] bytes
  /// long; it is absorbed as a zero-padded first block. `out_len` must lie in
  /// [`BYTES_MIN`]..=[`BYTES_MAX`]; values above [`BYTES`] select XOF mode.
  ///
  /// # Errors
  ///
  /// - [`HashError::InvalidKeyLength`] for a key outside the accepted range
  ///   (including an empty slice).
  /// - [`HashError::InvalidDigestLength`] for an out-of-range `out_len`.
  pub fn new(key: Option<&[u8]>, out_len: usize) -> Result<Self, HashError> {
    let key_len = match key {
      None => 0,
      Some(k) if (KEYBYTES_MIN..=KEYBYTES_MAX).contains(&k.len()) => k.len() as u8,
      Some(_) => return Err(HashError::InvalidKeyLength),
    };
    if !(BYTES_MIN..=BYTES_MAX).contains(&out_len) {
      return Err(HashError::InvalidDigestLength);
    }

    let params = if out_len > BYTES {
      Params::xof_root(key_len, out_len as u16)
    } else {
      Params::plain(out_len as u8, key_len)
    };

    let mut state = Self {
      node: Node::new(params),
      digest_len: params.digest_len,
      xof_len: params.xof_len,
    };

    if let Some(key) = key {
      let mut block = [0u8; BLOCK_LEN];
      block[..key.len()].copy_from_slice(key);
      state.node.absorb(&block);
      block.zeroize();
    }
    Ok(state)
  }

  /// Output length fixed at initialization.
  #[inline]
  #[must_use]
  pub fn output_len(&self) -> usize {
    if self.is_xof() {
      self.xof_len as usize
    } else {
      self.digest_len as usize
    }
  }

  /// Whether the output is derived through the leaf expansion.
  #[inline]
  #[must_use]
  pub fn is_xof(&self) -> bool {
    self.xof_len != 0
  }

  /// Whether the digest has already been produced.
  #[inline]
  #[must_use]
  pub fn is_finalized(&self) -> bool {
    self.node.is_finalized()
  }

  /// Absorb more input.
  ///
  /// # Errors
  ///
  /// [`HashError::AlreadyFinalized`] once the digest has been produced.
  #[inline]
  pub fn update(&mut self, data: &[u8]) -> Result<(), HashError> {
    if self.is_finalized() {
      return Err(HashError::AlreadyFinalized);
    }
    self.node.absorb(data);
    Ok(())
  }

  /// Check `out_len` against the bounds and the length given at `new`.
  fn check_output_len(&self, out_len: usize) -> Result<(), HashError> {
    if !(BYTES_MIN..=BYTES_MAX).contains(&out_len) {
      return Err(HashError::InvalidDigestLength);
    }
    if out_len != self.output_len() {
      return Err(HashError::XofLengthMismatch);
    }
    Ok(())
  }

  /// Produce the digest into `out`, whose length must equal [`Self::output_len`].
  ///
  /// Nothing is written to `out` on failure.
  ///
  /// # Errors
  ///
  /// - [`HashError::InvalidDigestLength`] if `out.len()` is out of range.
  /// - [`HashError::XofLengthMismatch`] if `out.len()` differs from the
  ///   length given at initialization.
  /// - [`HashError::AlreadyFinalized`] on a second call.
  pub fn finalize_into(&mut self, out: &mut [u8]) -> Result<(), HashError> {
    self.check_output_len(out.len())?;
    if !self.is_xof() {
      return self.node.finalize_into(out);
    }

    let mut root = [0u8; BYTES];
    self.node.finalize_into(&mut root)?;
    for (leaf, dst) in Leaves::new(&root, self.xof_len).zip(out.chunks_mut(BYTES)) {
      dst.copy_from_slice(leaf.as_slice());
    }
    root.zeroize();
    Ok(())
  }

  /// Produce the digest as a freshly allocated vector.
  ///
  /// # Errors
  ///
  /// [`HashError::AlreadyFinalized`] on a second call.
  #[cfg(feature = "alloc")]
  pub fn finalize_vec(&mut self) -> Result<alloc::vec::Vec<u8>, HashError> {
    let mut out = alloc::vec![0u8; self.output_len()];
    self.finalize_into(&mut out)?;
    Ok(out)
  }

  /// Finalize and compare against `tag` without branching on digest bytes.
  fn finalize_eq(&mut self, tag: &[u8]) -> Result<bool, HashError> {
    self.check_output_len(tag.len())?;
    let mut root = [0u8; BYTES];
    let digest = if self.is_xof() { &mut root[..] } else { &mut root[..tag.len()] };
    self.node.finalize_into(digest)?;

    let equal = if self.is_xof() {
      let mut equal = true;
      for (leaf, expected) in Leaves::new(&root, self.xof_len).zip(tag.chunks(BYTES)) {
        equal &= ct_eq(leaf.as_slice(), expected);
      }
      equal
    } else {
      ct_eq(&root[..tag.len()], tag)
    };
    root.zeroize();
    Ok(equal)
  }
}

impl fmt::Debug for Blake2Xs {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Blake2Xs")
      .field("output_len", &self.output_len())
      .field("xof", &self.is_xof())
      .field("finalized", &self.is_finalized())
      .finish_non_exhaustive()
  }
}

impl ZeroizeOnDrop for Blake2Xs {}

/// Hash `input` into `out` in one shot; `out.len()` selects the output length.
///
/// On error `out` holds no valid digest.
///
/// # Errors
///
/// See [`Blake2Xs::new`].
pub fn hash(out: &mut [u8], input: &[u8], key: Option<&[u8]>) -> Result<(), HashError> {
  let mut state = Blake2Xs::new(key, out.len())?;
  state.update(input)?;
  state.finalize_into(out)
}

/// Hash `input` into a new vector of `out_len` bytes.
///
/// # Errors
///
/// See [`Blake2Xs::new`].
#[cfg(feature = "alloc")]
pub fn hash_vec(input: &[u8], out_len: usize, key: Option<&[u8]>) -> Result<alloc::vec::Vec<u8>, HashError> {
  let mut state = Blake2Xs::new(key, out_len)?;
  state.update(input)?;
  state.finalize_vec()
}

/// Check a keyed-hash `tag` over `input`. The tag length selects the output
/// length, so it must lie in [`BYTES_MIN`]..=[`BYTES_MAX`].
///
/// # Errors
///
/// [`VerificationError`] if the tag does not match or the key or tag length
/// is invalid.
pub fn verify(tag: &[u8], input: &[u8], key: &[u8]) -> Result<(), VerificationError> {
  let mut state = Blake2Xs::new(Some(key), tag.len())?;
  state.update(input)?;
  if state.finalize_eq(tag)? {
    Ok(())
  } else {
    Err(VerificationError::new())
  }
}

/// Generate a [`KEYBYTES`]-byte key from `rng`.
#[must_use]
pub fn keygen<R: CryptoRng + ?Sized>(rng: &mut R) -> [u8; KEYBYTES] {
  let mut key = [0u8; KEYBYTES];
  RngCore::fill_bytes(rng, &mut key);
  key
}

/// Fill `key` from `rng`.
///
/// # Errors
///
/// [`HashError::InvalidKeyLength`] unless `key` is
/// [`KEYBYTES_MIN`]..=[`KEYBYTES_MAX`] bytes long.
pub fn keygen_into<R: CryptoRng + ?Sized>(rng: &mut R, key: &mut [u8]) -> Result<(), HashError> {
  if !(KEYBYTES_MIN..=KEYBYTES_MAX).contains(&key.len()) {
    return Err(HashError::InvalidKeyLength);
  }
  RngCore::fill_bytes(rng, key);
  Ok(())
}

/// Generate a [`KEYBYTES`]-byte key from the operating system's random source.
///
/// # Errors
///
/// Propagates the OS random source failure.
#[cfg(feature = "getrandom")]
pub fn keygen_os() -> Result<[u8; KEYBYTES], getrandom::Error> {
  let mut key = [0u8; KEYBYTES];
  getrandom::fill(&mut key)?;
  Ok(key)
}
