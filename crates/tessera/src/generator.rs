// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Identifier assembly.
//!
//! # Algorithm
//!
//! 1. Resolve the alphabet (named, literal, or prebuilt).
//! 2. Build a [`Sampler`] once for the alphabet size and bias policy.
//! 3. Pull bytes from the entropy source in batches sized by
//!    [`Sampler::step_for`], refilling whenever the batch runs dry.
//! 4. Short outputs are pushed onto a `String` one symbol at a time; longer
//!    ones collect indices into a pre-sized buffer and are joined at the end.
//!
//! Random bytes and collected indices live in zeroize-on-drop buffers.

use zeroize::Zeroizing;

use tessera_rand::{EntropySource, SystemEntropySource};

use crate::advisory::{Advisory, AdvisorySink, TracingAdvisorySink};
use crate::alphabet::{Alphabet, AlphabetName, AlphabetSpec};
use crate::analyzer::entropy_bits;
use crate::config::GeneratorConfig;
use crate::error::GenerateError;
use crate::length::Length;
use crate::sampler::Sampler;

/// Default identifier length (126 bits over [`URL_SAFE`](crate::alphabet::URL_SAFE)).
pub const DEFAULT_ID_LENGTH: usize = 21;

/// Batch of random bytes consumed one at a time through a [`Sampler`].
struct RandomBytes<'g, E: EntropySource> {
    entropy: &'g E,
    sampler: Sampler,
    cap: usize,
    buffer: Zeroizing<Vec<u8>>,
    cursor: usize,
}

impl<'g, E: EntropySource> RandomBytes<'g, E> {
    fn new(entropy: &'g E, sampler: Sampler, cap: usize) -> Self {
        Self {
            entropy,
            sampler,
            cap,
            buffer: Zeroizing::new(Vec::new()),
            cursor: 0,
        }
    }

    fn refill(&mut self, remaining: usize) -> Result<(), GenerateError> {
        let step = self.sampler.step_for(remaining, self.cap);

        self.buffer.clear();
        self.buffer.resize(step, 0);
        self.entropy.fill_bytes(&mut self.buffer)?;
        self.cursor = 0;

        Ok(())
    }

    /// Next accepted index. `remaining` (including this one) sizes refills.
    fn next_index(&mut self, remaining: usize) -> Result<usize, GenerateError> {
        loop {
            if self.cursor == self.buffer.len() {
                self.refill(remaining)?;
            }

            let byte = self.buffer[self.cursor];
            self.cursor += 1;

            if let Some(index) = self.sampler.sample(byte) {
                return Ok(index);
            }
        }
    }
}

/// Secure identifier generator.
///
/// Owns an [`EntropySource`], an [`AdvisorySink`] and a [`GeneratorConfig`].
/// Holds no per-call state, so one instance can serve any number of
/// concurrent callers when `E` and `S` are `Sync`.
///
/// # Example
///
/// ```rust
/// use tessera::{AlphabetName, Generator};
///
/// let generator = Generator::new();
///
/// let id = generator.id().expect("Failed to generate id");
/// assert_eq!(id.chars().count(), 21);
///
/// let code = generator
///     .generate(8, AlphabetName::NoLookAlike)
///     .expect("Failed to generate code");
/// assert_eq!(code.chars().count(), 8);
///
/// let custom = generator.generate(12, "abc").expect("Failed to generate");
/// assert!(custom.chars().all(|c| "abc".contains(c)));
/// ```
#[derive(Debug, Clone)]
pub struct Generator<E = SystemEntropySource, S = TracingAdvisorySink> {
    entropy: E,
    sink: S,
    config: GeneratorConfig,
}

impl Generator<SystemEntropySource, TracingAdvisorySink> {
    /// OS entropy, `tracing` advisories, default configuration.
    pub fn new() -> Self {
        Self::with_parts(
            SystemEntropySource {},
            TracingAdvisorySink,
            GeneratorConfig::default(),
        )
    }
}

impl Default for Generator<SystemEntropySource, TracingAdvisorySink> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: EntropySource, S: AdvisorySink> Generator<E, S> {
    /// Assembles a generator from explicit collaborators.
    pub fn with_parts(entropy: E, sink: S, config: GeneratorConfig) -> Self {
        Self {
            entropy,
            sink,
            config,
        }
    }

    /// Replaces the configuration.
    pub fn with_config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    /// Replaces the entropy source.
    pub fn with_entropy<E2: EntropySource>(self, entropy: E2) -> Generator<E2, S> {
        Generator::with_parts(entropy, self.sink, self.config)
    }

    /// Replaces the advisory sink.
    pub fn with_sink<S2: AdvisorySink>(self, sink: S2) -> Generator<E, S2> {
        Generator::with_parts(self.entropy, sink, self.config)
    }

    /// Entropy source in use.
    pub fn entropy(&self) -> &E {
        &self.entropy
    }

    /// Advisory sink in use.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Active configuration.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// A [`DEFAULT_ID_LENGTH`]-symbol identifier over the URL-safe alphabet.
    ///
    /// # Errors
    ///
    /// [`GenerateError::SecureRandomUnavailable`] if the entropy source fails.
    pub fn id(&self) -> Result<String, GenerateError> {
        self.generate(DEFAULT_ID_LENGTH, AlphabetName::UrlSafe)
    }

    /// A `length`-symbol string drawn uniformly from `alphabet`.
    ///
    /// Emits [`Advisory::LowEntropy`] when the result carries fewer bits than
    /// [`GeneratorConfig::min_entropy_bits`].
    ///
    /// # Errors
    ///
    /// - [`GenerateError::InvalidLength`] for `length == 0`
    /// - [`GenerateError::InvalidAlphabet`] for an invalid literal alphabet
    /// - [`GenerateError::SecureRandomUnavailable`] if the entropy source fails
    pub fn generate<'a>(
        &self,
        length: usize,
        alphabet: impl Into<AlphabetSpec<'a>>,
    ) -> Result<String, GenerateError> {
        let length = Length::new(length)?;
        let alphabet = alphabet.into().resolve()?;

        self.check_entropy(length.get(), alphabet.len());
        self.assemble(length, &alphabet)
    }

    pub(crate) fn check_entropy(&self, length: usize, alphabet_size: usize) {
        let bits = entropy_bits(length, alphabet_size);
        let threshold = self.config.min_entropy_bits();

        if bits < threshold {
            self.sink.advise(Advisory::LowEntropy {
                length,
                alphabet_size,
                bits,
                threshold,
            });
        }
    }

    /// Draws `length` symbols without any advisory check.
    pub(crate) fn assemble(
        &self,
        length: Length,
        alphabet: &Alphabet,
    ) -> Result<String, GenerateError> {
        let length = length.get();
        let symbols = alphabet.symbols();
        let sampler = Sampler::for_alphabet(alphabet, self.config.bias_policy());
        let mut bytes = RandomBytes::new(&self.entropy, sampler, self.config.max_batch_bytes());

        tracing::trace!(
            target: "tessera",
            length,
            alphabet_size = symbols.len(),
            strategy = ?sampler.strategy(),
            "assembling identifier"
        );

        if length < self.config.incremental_threshold() {
            let mut output = String::new();
            for produced in 0..length {
                let index = bytes.next_index(length - produced)?;
                output.push(symbols[index]);
            }
            return Ok(output);
        }

        // Indices fit in a byte since alphabets hold at most 256 symbols.
        let mut indices: Zeroizing<Vec<u8>> = Zeroizing::new(Vec::with_capacity(length));
        for produced in 0..length {
            let index = bytes.next_index(length - produced)?;
            indices.push(index as u8);
        }

        Ok(indices.iter().map(|&i| symbols[usize::from(i)]).collect())
    }
}

/// A reusable `(length, alphabet)` pair, validated once.
///
/// # Example
///
/// ```rust
/// use tessera::{Generator, IdFactory};
///
/// let invoices = IdFactory::new(10, "0123456789ABCDEF").expect("Failed to build factory");
/// let generator = Generator::new();
///
/// let id = invoices.generate(&generator).expect("Failed to generate id");
/// assert_eq!(id.len(), 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdFactory {
    length: Length,
    alphabet: Alphabet,
}

impl IdFactory {
    /// Validates `length` and `alphabet` up front.
    ///
    /// # Errors
    ///
    /// [`GenerateError::InvalidLength`] or [`GenerateError::InvalidAlphabet`].
    pub fn new<'a>(
        length: usize,
        alphabet: impl Into<AlphabetSpec<'a>>,
    ) -> Result<Self, GenerateError> {
        let length = Length::new(length)?;
        let alphabet = alphabet.into().resolve()?.into_owned();

        Ok(Self { length, alphabet })
    }

    /// Output length.
    pub fn length(&self) -> usize {
        self.length.get()
    }

    /// Output alphabet.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Bits of entropy per generated identifier.
    pub fn entropy_bits(&self) -> f64 {
        entropy_bits(self.length.get(), self.alphabet.len())
    }

    /// Draws one identifier through `generator`.
    ///
    /// # Errors
    ///
    /// [`GenerateError::SecureRandomUnavailable`] if the entropy source fails.
    pub fn generate<E: EntropySource, S: AdvisorySink>(
        &self,
        generator: &Generator<E, S>,
    ) -> Result<String, GenerateError> {
        generator.check_entropy(self.length.get(), self.alphabet.len());
        generator.assemble(self.length, &self.alphabet)
    }
}
