//! Shared types for the hydrohash workspace.
//!
//! This crate is `no_std` compatible and has zero dependencies. It carries the
//! error types every hash engine in the workspace reports through.
//!
//! # Error Types
//!
//! - [`HashError`] - Misuse of a hash state (bad key or output length, double finalize)
//! - [`VerificationError`] - Opaque error for keyed-hash tag verification
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod error;

pub use error::{HashError, VerificationError};
