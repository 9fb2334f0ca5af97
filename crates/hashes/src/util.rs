#[inline(always)]
pub const fn rotr32(x: u32, n: u32) -> u32 {
  x.rotate_right(n)
}

/// Compare two byte slices without branching on their contents.
///
/// Slices of different lengths compare unequal; the length itself is public.
#[must_use]
pub fn ct_eq(a: &[u8], b: &[u8]) -> bool {
  if a.len() != b.len() {
    return false;
  }
  let mut diff = 0u8;
  for (&x, &y) in a.iter().zip(b) {
    diff |= x ^ y;
  }
  core::hint::black_box(diff) == 0
}
