//! Keyed BLAKE2Xs hashing with extendable output, in pure Rust.
//!
//! `hydrohash` produces 16..=65535-byte digests from a BLAKE2s core. Outputs
//! up to 32 bytes are plain (optionally keyed) BLAKE2s nodes; longer outputs
//! expand a 32-byte root into independent 32-byte leaves. `no_std`
//! compatible.
//!
//! # Quick Start
//!
//! ```
//! use hydrohash::{Blake2Xs, hash};
//!
//! // One-shot computation
//! let mut digest = [0u8; 32];
//! hash(&mut digest, b"hello world", None)?;
//!
//! // Streaming computation
//! let mut state = Blake2Xs::new(None, 32)?;
//! state.update(b"hello ")?;
//! state.update(b"world")?;
//! let mut streamed = [0u8; 32];
//! state.finalize_into(&mut streamed)?;
//! assert_eq!(digest, streamed);
//! # Ok::<(), hydrohash::HashError>(())
//! ```
//!
//! # Keyed hashing
//!
//! ```
//! use hydrohash::{hash, keygen, verify};
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let key = keygen(&mut StdRng::seed_from_u64(7));
//! let mut tag = [0u8; 48];
//! hash(&mut tag, b"payload", Some(&key))?;
//! assert!(verify(&tag, b"payload", &key).is_ok());
//! assert!(verify(&tag, b"tampered", &key).is_err());
//! # Ok::<(), hydrohash::HashError>(())
//! ```
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std` | Yes | `std::io::Write` for [`Blake2Xs`]; implies `alloc` |
//! | `alloc` | Yes | `Vec`-returning helpers ([`hash_vec`], [`Blake2Xs::finalize_vec`]) |
//! | `getrandom` | No | `keygen_os` backed by the operating system's random source |
//!
//! ## `no_std` Usage
//!
//! ```toml
//! [dependencies]
//! hydrohash = { version = "0.1", default-features = false }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
pub use hashes::crypto::blake2xs::hash_vec;
#[cfg(feature = "getrandom")]
pub use hashes::crypto::blake2xs::keygen_os;
pub use hashes::crypto::{
  Blake2Xs,
  blake2xs::{
    BLOCK_LEN, BYTES, BYTES_MAX, BYTES_MIN, KEYBYTES, KEYBYTES_MAX, KEYBYTES_MIN, hash, keygen, keygen_into, verify,
  },
};
pub use traits::{HashError, VerificationError};
