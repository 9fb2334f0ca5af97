use hashes::crypto::blake2xs::{self, BYTES};

/// Deterministic benchmark input of `len` bytes, produced by BLAKE2Xs itself
/// over `(seed, block index)` so no extra generator is needed.
pub fn input(len: usize, seed: u64) -> Vec<u8> {
  let mut out = vec![0u8; len];
  let mut msg = [0u8; 16];
  msg[..8].copy_from_slice(&seed.to_le_bytes());
  for (i, chunk) in out.chunks_mut(BYTES).enumerate() {
    msg[8..].copy_from_slice(&(i as u64).to_le_bytes());
    let mut block = [0u8; BYTES];
    blake2xs::hash(&mut block, &msg, None).expect("32-byte output is in range");
    chunk.copy_from_slice(&block[..chunk.len()]);
  }
  out
}

/// Message sizes around the 64-byte block boundary plus bulk sizes.
pub fn sized_inputs() -> Vec<(usize, Vec<u8>)> {
  [0usize, 1, 32, 63, 64, 65, 256, 1024, 16 * 1024, 1024 * 1024]
    .into_iter()
    .map(|len| (len, input(len, 1)))
    .collect()
}
