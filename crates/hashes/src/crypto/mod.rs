//! Cryptographic hash functions.

pub mod blake2xs;

pub use blake2xs::Blake2Xs;
