// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # tessera
//!
//! Cryptographically secure random identifiers over arbitrary alphabets.
//!
//! ## Core Types
//!
//! - [`Generator`]: assembles identifiers from an injectable [`EntropySource`]
//! - [`Alphabet`]: validated, de-duplicated symbol set (2 to 256 symbols)
//! - [`Sampler`]: byte-to-symbol mapping with rejection sampling, selected by
//!   [`BiasPolicy`]
//! - [`analyzer`]: entropy, collision probability and length recommendations
//! - [`Advisory`] / [`AdvisorySink`]: non-fatal warnings about weak requests
//!
//! ## Example
//!
//! ```rust
//! use tessera::analyzer::{collision_probability, recommended_length};
//! use tessera::{AlphabetName, CharacterClasses, Generator};
//!
//! let generator = Generator::new();
//!
//! let id = generator.id().expect("Failed to generate id");
//! let token = generator.token(32).expect("Failed to generate token");
//! let code = generator.numeric(6).expect("Failed to generate code");
//! let password = generator
//!     .complex(12, CharacterClasses::ALL)
//!     .expect("Failed to generate password");
//!
//! assert_eq!(id.len(), 21);
//! assert_eq!(token.len(), 32);
//! assert!(code.chars().all(|c| c.is_ascii_digit()));
//! assert_eq!(password.len(), 12);
//!
//! // How long must a hex id be for a billion ids at <= 0.0001% collision risk?
//! let length = recommended_length(16, 1_000_000_000, 0.0001);
//! assert!(collision_probability(length, 16, 1_000_000_000) <= 0.0001);
//! ```
//!
//! ## Free functions
//!
//! The `generate_*` functions below use a default [`Generator`] (OS entropy,
//! advisories logged through `tracing`).

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod advisory;
mod alphabet;
mod config;
mod error;
mod generator;
mod length;
mod presets;
mod sampler;
mod support;

pub mod analyzer;

pub use advisory::{Advisory, AdvisorySink, SilentAdvisorySink, TracingAdvisorySink};
pub use alphabet::{
    ALPHANUMERIC, Alphabet, AlphabetName, AlphabetSpec, HEX_LOWERCASE, LOWERCASE,
    MAX_ALPHABET_SIZE, MIN_ALPHABET_SIZE, NO_LOOK_ALIKE, NUMERIC, SYMBOLS, UPPERCASE, URL_SAFE,
};
pub use config::{
    DEFAULT_INCREMENTAL_THRESHOLD, DEFAULT_MAX_BATCH_BYTES, DEFAULT_MIN_ENTROPY_BITS,
    GeneratorConfig,
};
pub use error::GenerateError;
pub use generator::{DEFAULT_ID_LENGTH, Generator, IdFactory};
pub use length::Length;
pub use presets::{
    CharacterClasses, DEFAULT_HEX_LENGTH, DEFAULT_NUMERIC_LENGTH, DEFAULT_SALT_LENGTH,
    DEFAULT_TOKEN_LENGTH, MIN_COMPLEX_LENGTH, MIN_SALT_LENGTH, MIN_TOKEN_LENGTH,
};
pub use sampler::{BiasPolicy, Sampler, SamplingStrategy};
pub use tessera_rand::{EntropyError, EntropySource, SystemEntropySource};

#[cfg(any(test, feature = "test-utils"))]
pub use support::test_utils;

/// [`Generator::generate`] on a default generator.
///
/// # Errors
///
/// See [`Generator::generate`].
pub fn generate_id<'a>(
    length: usize,
    alphabet: impl Into<AlphabetSpec<'a>>,
) -> Result<String, GenerateError> {
    Generator::new().generate(length, alphabet)
}

/// [`Generator::token`] on a default generator.
///
/// # Errors
///
/// See [`Generator::token`].
pub fn generate_token(length: usize) -> Result<String, GenerateError> {
    Generator::new().token(length)
}

/// [`Generator::salt`] on a default generator.
///
/// # Errors
///
/// See [`Generator::salt`].
pub fn generate_salt(length: usize) -> Result<String, GenerateError> {
    Generator::new().salt(length)
}

/// [`Generator::hex`] on a default generator.
///
/// # Errors
///
/// See [`Generator::hex`].
pub fn generate_hex(length: usize) -> Result<String, GenerateError> {
    Generator::new().hex(length)
}

/// [`Generator::numeric`] on a default generator.
///
/// # Errors
///
/// See [`Generator::numeric`].
pub fn generate_numeric(length: usize) -> Result<String, GenerateError> {
    Generator::new().numeric(length)
}

/// [`Generator::complex`] on a default generator.
///
/// # Errors
///
/// See [`Generator::complex`].
pub fn generate_complex(
    length: usize,
    classes: CharacterClasses,
) -> Result<String, GenerateError> {
    Generator::new().complex(length, classes)
}
