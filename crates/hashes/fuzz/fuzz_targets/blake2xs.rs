#![no_main]

use hashes::crypto::blake2xs::{self, BYTES_MIN, Blake2Xs, KEYBYTES_MIN};
use libfuzzer_sys::fuzz_target;

fn split_point(input: &[u8]) -> usize {
  if input.is_empty() {
    return 0;
  }
  (input[0] as usize) % (input.len() + 1)
}

fuzz_target!(|input: &[u8]| {
  let split = split_point(input);
  let (a, b) = input.split_at(split);

  // Output length in [16, 271] covers both the plain and the XOF path.
  let out_len = BYTES_MIN + input.get(1).copied().unwrap_or(0) as usize;
  let key = input.get(..KEYBYTES_MIN).filter(|_| input.len() % 2 == 0);

  let mut one_shot = vec![0u8; out_len];
  blake2xs::hash(&mut one_shot, input, key).unwrap();

  let mut h = Blake2Xs::new(key, out_len).unwrap();
  h.update(a).unwrap();
  h.update(b).unwrap();
  let mut streamed = vec![0u8; out_len];
  h.finalize_into(&mut streamed).unwrap();
  assert_eq!(one_shot, streamed);

  assert!(h.finalize_into(&mut streamed).is_err());
  assert_eq!(one_shot, streamed);

  if let Some(key) = key {
    assert!(blake2xs::verify(&one_shot, input, key).is_ok());
  }
});
