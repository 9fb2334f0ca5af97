//! Oracle checks of the compression engine against the `blake2` crate.
//!
//! With standard BLAKE2s parameters (fanout = depth = 1) a node computes
//! plain BLAKE2s for every message whose length is not a nonzero multiple of
//! the block size; only there do eager and deferred last-block handling
//! differ.

extern crate alloc;

use alloc::vec::Vec;

use blake2::digest::{Digest as _, Mac as _};

use super::{BLOCK_LEN, BYTES, Node, params::Params};

fn pattern(len: usize) -> Vec<u8> {
  (0..len)
    .map(|i| (i as u8).wrapping_mul(17).wrapping_add((i >> 8) as u8))
    .collect()
}

fn standard_node(key: &[u8]) -> Node {
  let params = Params {
    fanout: 1,
    depth: 1,
    ..Params::plain(BYTES as u8, key.len() as u8)
  };
  let mut node = Node::new(params);
  if !key.is_empty() {
    let mut block = [0u8; BLOCK_LEN];
    block[..key.len()].copy_from_slice(key);
    node.absorb(&block);
  }
  node
}

fn finish(mut node: Node) -> [u8; BYTES] {
  let mut out = [0u8; BYTES];
  node.finish(&mut out);
  out
}

fn oracle(msg: &[u8]) -> [u8; BYTES] {
  let mut out = [0u8; BYTES];
  out.copy_from_slice(&blake2::Blake2s256::digest(msg));
  out
}

fn oracle_keyed(key: &[u8], msg: &[u8]) -> [u8; BYTES] {
  let mut mac = blake2::Blake2sMac256::new_from_slice(key).unwrap();
  mac.update(msg);
  let mut out = [0u8; BYTES];
  out.copy_from_slice(&mac.finalize().into_bytes());
  out
}

const LENS: [usize; 13] = [0, 1, 2, 3, 31, 32, 33, 63, 65, 127, 129, 1000, 10_000];

#[test]
fn compression_matches_blake2_oracle_and_streaming_splits() {
  for len in LENS {
    let msg = pattern(len);
    let mut node = standard_node(&[]);
    node.absorb(&msg);
    let ours = finish(node);
    assert_eq!(ours, oracle(&msg), "blake2s oracle mismatch len={len}");

    for chunk in [1usize, 7, 31, 32, 63, 64, 65, 128, 1024, 4096] {
      let mut node = standard_node(&[]);
      for part in msg.chunks(chunk) {
        node.absorb(part);
      }
      assert_eq!(finish(node), ours, "streaming mismatch len={len} chunk={chunk}");
    }
  }
}

#[test]
fn keyed_compression_matches_blake2_mac_oracle() {
  let key: [u8; 32] = core::array::from_fn(|i| i as u8);
  for len in LENS.into_iter().filter(|&len| len != 0) {
    let msg = pattern(len);
    let mut node = standard_node(&key);
    node.absorb(&msg);
    assert_eq!(finish(node), oracle_keyed(&key, &msg), "blake2s-mac mismatch len={len}");
  }
}

#[test]
fn full_final_block_is_compressed_eagerly() {
  // A 64-byte message is compressed during absorb; the final compression
  // runs over an empty block, which deferred BLAKE2s never does.
  let msg = pattern(BLOCK_LEN);
  let mut node = standard_node(&[]);
  node.absorb(&msg);
  assert_eq!(node.buf_len, 0);
  assert_eq!(node.t, BLOCK_LEN as u64);
  assert_ne!(finish(node), oracle(&msg));
}
