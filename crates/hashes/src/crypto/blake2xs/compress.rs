//! BLAKE2s compression function (RFC 7693, section 3.2).

#![allow(clippy::indexing_slicing)] // Compression schedule uses fixed indices

use super::BLOCK_LEN;
use crate::util::rotr32;

pub(crate) const IV: [u32; 8] = [
  0x6A09_E667,
  0xBB67_AE85,
  0x3C6E_F372,
  0xA54F_F53A,
  0x510E_527F,
  0x9B05_688C,
  0x1F83_D9AB,
  0x5BE0_CD19,
];

const SIGMA: [[usize; 16]; 10] = [
  [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
  [14, 10, 4, 8, 9, 15, 13, 6, 1, 12, 0, 2, 11, 7, 5, 3],
  [11, 8, 12, 0, 5, 2, 15, 13, 10, 14, 3, 6, 7, 1, 9, 4],
  [7, 9, 3, 1, 13, 12, 11, 14, 2, 6, 5, 10, 4, 0, 15, 8],
  [9, 0, 5, 7, 2, 4, 10, 15, 14, 1, 11, 12, 6, 8, 3, 13],
  [2, 12, 6, 10, 0, 11, 8, 3, 4, 13, 7, 5, 15, 14, 1, 9],
  [12, 5, 1, 15, 14, 13, 4, 10, 0, 7, 6, 3, 9, 2, 8, 11],
  [13, 11, 7, 14, 12, 1, 3, 9, 5, 0, 15, 4, 8, 6, 2, 10],
  [6, 15, 14, 9, 11, 3, 0, 8, 12, 2, 13, 7, 1, 4, 10, 5],
  [10, 2, 8, 4, 7, 6, 1, 5, 15, 11, 9, 14, 3, 12, 13, 0],
];

/// Finalization flag word mixed into `v[14]` for the last block.
pub(crate) const LAST_BLOCK: u32 = 0xFFFF_FFFF;

#[inline(always)]
fn g(a: &mut u32, b: &mut u32, c: &mut u32, d: &mut u32, x: u32, y: u32) {
  *a = a.wrapping_add(*b).wrapping_add(x);
  *d = rotr32(*d ^ *a, 16);
  *c = c.wrapping_add(*d);
  *b = rotr32(*b ^ *c, 12);
  *a = a.wrapping_add(*b).wrapping_add(y);
  *d = rotr32(*d ^ *a, 8);
  *c = c.wrapping_add(*d);
  *b = rotr32(*b ^ *c, 7);
}

/// Mix one block into the chaining value `h`.
///
/// `t` is the byte counter *after* counting this block and `f` the
/// finalization flag word (`0` or [`LAST_BLOCK`]). Neither is modified here.
#[inline]
pub(crate) fn compress(h: &mut [u32; 8], block: &[u8; BLOCK_LEN], t: u64, f: u32) {
  let (chunks, _) = block.as_chunks::<4>();
  let mut m = [0u32; 16];
  for (i, c) in chunks.iter().enumerate() {
    m[i] = u32::from_le_bytes(*c);
  }

  let mut v = [0u32; 16];
  v[..8].copy_from_slice(h);
  v[8..12].copy_from_slice(&IV[..4]);
  v[12] = IV[4] ^ (t as u32);
  v[13] = IV[5] ^ ((t >> 32) as u32);
  v[14] = IV[6] ^ f;
  v[15] = IV[7];

  let [v0, v1, v2, v3, v4, v5, v6, v7, v8, v9, v10, v11, v12, v13, v14, v15] = &mut v;

  for s in &SIGMA {
    g(v0, v4, v8, v12, m[s[0]], m[s[1]]);
    g(v1, v5, v9, v13, m[s[2]], m[s[3]]);
    g(v2, v6, v10, v14, m[s[4]], m[s[5]]);
    g(v3, v7, v11, v15, m[s[6]], m[s[7]]);

    g(v0, v5, v10, v15, m[s[8]], m[s[9]]);
    g(v1, v6, v11, v12, m[s[10]], m[s[11]]);
    g(v2, v7, v8, v13, m[s[12]], m[s[13]]);
    g(v3, v4, v9, v14, m[s[14]], m[s[15]]);
  }

  for (i, word) in h.iter_mut().enumerate() {
    *word ^= v[i] ^ v[i + 8];
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  // RFC 7693 Appendix B: BLAKE2s-256("abc"), a single final block.
  #[test]
  fn rfc7693_abc() {
    let mut h = IV;
    h[0] ^= 0x0101_0020;
    let mut block = [0u8; BLOCK_LEN];
    block[..3].copy_from_slice(b"abc");
    compress(&mut h, &block, 3, LAST_BLOCK);

    let mut out = [0u8; 32];
    for (dst, word) in out.chunks_exact_mut(4).zip(h) {
      dst.copy_from_slice(&word.to_le_bytes());
    }
    assert_eq!(
      out,
      [
        0x50, 0x8C, 0x5E, 0x8C, 0x32, 0x7C, 0x14, 0xE2, 0xE1, 0xA7, 0x2B, 0xA3, 0x4E, 0xEB, 0x45, 0x2F, 0x37, 0x45,
        0x8B, 0x20, 0x9E, 0xD6, 0x3A, 0x29, 0x4D, 0x99, 0x9B, 0x4C, 0x86, 0x67, 0x59, 0x82,
      ]
    );
  }

  #[test]
  fn counter_halves_and_flag_are_mixed() {
    let block = [0x11u8; BLOCK_LEN];
    let run = |t: u64, f: u32| {
      let mut h = IV;
      compress(&mut h, &block, t, f);
      h
    };
    let base = run(64, 0);
    assert_ne!(base, run(64, LAST_BLOCK));
    assert_ne!(base, run(64 | (1 << 32), 0));
    assert_ne!(run(1 << 32, 0), run(0, 0));
  }
}
