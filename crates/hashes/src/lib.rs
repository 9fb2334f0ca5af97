//! Keyed, extendable-output BLAKE2Xs hashing.
//!
//! This crate is `no_std` compatible. Library dependencies are limited to
//! `rand_core` (key generation interface), `zeroize` (wiping key material and
//! chaining state) and, behind the `getrandom` feature, the OS random source.
//! Dev-only dependencies are used for oracle testing and benchmarking.
//!
//! # Modules
//!
//! - [`crypto`] - The BLAKE2Xs hash engine.
//! - `io` - [`std::io::Write`] support for streaming states (`std` feature).
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod crypto;
#[cfg(feature = "std")]
mod io;

mod util;

pub use traits::{HashError, VerificationError};
