//! BLAKE2s parameter block.
//!
//! The 32-byte block is laid out as in RFC 7693 / BLAKE2X:
//!
//! | Offset | Size | Field |
//! |--------|------|-------|
//! | 0 | 1 | digest length |
//! | 1 | 1 | key length |
//! | 2 | 1 | fanout |
//! | 3 | 1 | depth |
//! | 4 | 4 | leaf length |
//! | 8 | 4 | node offset |
//! | 12 | 2 | XOF output length |
//! | 14 | 1 | node depth |
//! | 15 | 1 | inner digest length |
//! | 16 | 16 | salt, personalization (always zero here) |

#![allow(clippy::indexing_slicing)] // Fixed offsets into the parameter block

use super::{BYTES, compress::IV};

pub(crate) const PARAM_LEN: usize = 32;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Params {
  pub(crate) digest_len: u8,
  pub(crate) key_len: u8,
  pub(crate) fanout: u8,
  pub(crate) depth: u8,
  pub(crate) leaf_len: u32,
  pub(crate) node_offset: u32,
  pub(crate) xof_len: u16,
  pub(crate) node_depth: u8,
  pub(crate) inner_len: u8,
}

impl Params {
  /// Single-node hash producing `digest_len <= 32` bytes.
  ///
  /// Fanout and depth stay zero in this mode.
  #[inline]
  #[must_use]
  pub(crate) const fn plain(digest_len: u8, key_len: u8) -> Self {
    Self {
      digest_len,
      key_len,
      fanout: 0,
      depth: 0,
      leaf_len: 0,
      node_offset: 0,
      xof_len: 0,
      node_depth: 0,
      inner_len: 0,
    }
  }

  /// Root node over the message when `xof_len` bytes of output are wanted.
  #[inline]
  #[must_use]
  pub(crate) const fn xof_root(key_len: u8, xof_len: u16) -> Self {
    Self {
      digest_len: BYTES as u8,
      key_len,
      fanout: 1,
      depth: 1,
      xof_len,
      ..Self::plain(0, 0)
    }
  }

  /// Leaf `index` of the expansion tree, emitting `digest_len` bytes.
  #[inline]
  #[must_use]
  pub(crate) const fn xof_leaf(xof_len: u16, index: u32, digest_len: u8) -> Self {
    Self {
      digest_len,
      key_len: 0,
      fanout: 0,
      depth: 0,
      leaf_len: BYTES as u32,
      node_offset: index,
      xof_len,
      node_depth: 0,
      inner_len: BYTES as u8,
    }
  }

  #[must_use]
  pub(crate) fn to_bytes(self) -> [u8; PARAM_LEN] {
    let mut p = [0u8; PARAM_LEN];
    p[0] = self.digest_len;
    p[1] = self.key_len;
    p[2] = self.fanout;
    p[3] = self.depth;
    p[4..8].copy_from_slice(&self.leaf_len.to_le_bytes());
    p[8..12].copy_from_slice(&self.node_offset.to_le_bytes());
    p[12..14].copy_from_slice(&self.xof_len.to_le_bytes());
    p[14] = self.node_depth;
    p[15] = self.inner_len;
    p
  }

  /// Initial chaining value: IV XOR the little-endian parameter words.
  #[must_use]
  pub(crate) fn chaining_value(self) -> [u32; 8] {
    let bytes = self.to_bytes();
    let (words, _) = bytes.as_chunks::<4>();
    let mut h = IV;
    for (hw, pw) in h.iter_mut().zip(words) {
      *hw ^= u32::from_le_bytes(*pw);
    }
    h
  }
}
