// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # tessera_rand
//!
//! Cryptographically secure byte source for the Tessera identifier engine.
//!
//! Everything that needs randomness in Tessera goes through the
//! [`EntropySource`] trait, so callers can swap the OS-backed source for a
//! deterministic one in tests.
//!
//! ## Core Types
//!
//! - [`SystemEntropySource`]: OS-level CSPRNG (via `getrandom`)
//! - [`uniform_index`]: unbiased index in `[0, n)` drawn from an entropy source
//! - [`shuffle`]: Fisher-Yates shuffle driven by an entropy source
//!
//! ## Example
//!
//! ```rust
//! use tessera_rand::{EntropySource, SystemEntropySource, shuffle};
//!
//! let entropy = SystemEntropySource {};
//!
//! let mut bytes = [0u8; 32];
//! entropy.fill_bytes(&mut bytes).expect("Failed to generate entropy");
//!
//! let mut deck = [1u8, 2, 3, 4, 5];
//! shuffle(&entropy, &mut deck).expect("Failed to shuffle");
//! ```
//!
//! ## Platform Support
//!
//! Supports all platforms via `getrandom`:
//! - Linux/Android: `getrandom()` syscall
//! - macOS/iOS: `getentropy()`
//! - Windows: `ProcessPrng`
//! - WASI: `random_get`
//!
//! There is no fallback to a non-cryptographic generator. If the platform
//! cannot provide entropy, every call fails with
//! [`EntropyError::EntropyNotAvailable`].

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod error;
mod support;
mod system;
mod traits;
mod uniform;

pub use error::EntropyError;
pub use system::{SystemEntropySource, fill_with_random_bytes};
pub use traits::EntropySource;
pub use uniform::{shuffle, uniform_index};

#[cfg(any(test, feature = "test-utils"))]
pub use support::test_utils;
