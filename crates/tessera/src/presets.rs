// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Ready-made string shapes: tokens, salts, hex, numeric codes and
//! policy-style complex strings.

use zeroize::Zeroizing;

use tessera_rand::{EntropySource, shuffle};

use crate::advisory::{Advisory, AdvisorySink};
use crate::alphabet::{Alphabet, AlphabetName};
use crate::error::GenerateError;
use crate::generator::Generator;
use crate::length::Length;

/// Default token length (190 bits over alphanumerics).
pub const DEFAULT_TOKEN_LENGTH: usize = 32;

/// Tokens below this length trigger [`Advisory::ShortToken`].
pub const MIN_TOKEN_LENGTH: usize = 16;

/// Default salt length.
pub const DEFAULT_SALT_LENGTH: usize = 16;

/// Salts below this length trigger [`Advisory::ShortSalt`].
pub const MIN_SALT_LENGTH: usize = 8;

/// Default hex string length (128 bits).
pub const DEFAULT_HEX_LENGTH: usize = 32;

/// Default numeric code length.
pub const DEFAULT_NUMERIC_LENGTH: usize = 6;

/// Shortest complex string.
pub const MIN_COMPLEX_LENGTH: usize = 4;

/// Character classes a complex string must cover.
///
/// Defaults to lowercase, uppercase and digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CharacterClasses {
    /// `a-z`
    pub lowercase: bool,
    /// `A-Z`
    pub uppercase: bool,
    /// `0-9`
    pub numbers: bool,
    /// [`SYMBOLS`](crate::alphabet::SYMBOLS)
    pub symbols: bool,
}

impl Default for CharacterClasses {
    fn default() -> Self {
        Self {
            lowercase: true,
            uppercase: true,
            numbers: true,
            symbols: false,
        }
    }
}

impl CharacterClasses {
    /// Every class enabled.
    pub const ALL: Self = Self {
        lowercase: true,
        uppercase: true,
        numbers: true,
        symbols: true,
    };

    /// Every class disabled.
    pub const NONE: Self = Self {
        lowercase: false,
        uppercase: false,
        numbers: false,
        symbols: false,
    };

    /// Alphabets of the enabled classes, in a fixed order.
    pub fn selected(&self) -> Vec<&'static Alphabet> {
        [
            (self.lowercase, AlphabetName::Lowercase),
            (self.uppercase, AlphabetName::Uppercase),
            (self.numbers, AlphabetName::Numeric),
            (self.symbols, AlphabetName::Symbols),
        ]
        .into_iter()
        .filter(|(enabled, _)| *enabled)
        .map(|(_, name)| Alphabet::named(name))
        .collect()
    }
}

impl<E: EntropySource, S: AdvisorySink> Generator<E, S> {
    /// Alphanumeric bearer/session token.
    ///
    /// Lengths below [`MIN_TOKEN_LENGTH`] emit [`Advisory::ShortToken`] but
    /// are honoured.
    ///
    /// # Errors
    ///
    /// [`GenerateError::InvalidLength`] for `length == 0`,
    /// [`GenerateError::SecureRandomUnavailable`] if the entropy source fails.
    pub fn token(&self, length: usize) -> Result<String, GenerateError> {
        let length = Length::new(length)?;

        if length.get() < MIN_TOKEN_LENGTH {
            self.sink().advise(Advisory::ShortToken {
                length: length.get(),
                recommended: MIN_TOKEN_LENGTH,
            });
        }

        let alphabet = Alphabet::named(AlphabetName::Alphanumeric);
        self.check_entropy(length.get(), alphabet.len());
        self.assemble(length, alphabet)
    }

    /// Alphanumeric salt.
    ///
    /// Lengths below [`MIN_SALT_LENGTH`] emit [`Advisory::ShortSalt`]. No
    /// entropy advisory: salts only need to be unique, not unguessable.
    ///
    /// # Errors
    ///
    /// Same as [`Generator::token`].
    pub fn salt(&self, length: usize) -> Result<String, GenerateError> {
        let length = Length::new(length)?;

        if length.get() < MIN_SALT_LENGTH {
            self.sink().advise(Advisory::ShortSalt {
                length: length.get(),
                recommended: MIN_SALT_LENGTH,
            });
        }

        self.assemble(length, Alphabet::named(AlphabetName::Alphanumeric))
    }

    /// Lowercase hexadecimal string. Always one random byte per symbol.
    ///
    /// # Errors
    ///
    /// Same as [`Generator::token`].
    pub fn hex(&self, length: usize) -> Result<String, GenerateError> {
        self.generate(length, AlphabetName::Hex)
    }

    /// Decimal digit code (one-time codes, PINs).
    ///
    /// Numeric codes are short by design, so no entropy advisory is emitted.
    ///
    /// # Errors
    ///
    /// Same as [`Generator::token`].
    pub fn numeric(&self, length: usize) -> Result<String, GenerateError> {
        let length = Length::new(length)?;
        self.assemble(length, Alphabet::named(AlphabetName::Numeric))
    }

    /// String containing at least one symbol from every selected class.
    ///
    /// One symbol is drawn from each class, the rest from the union of all
    /// selected classes, then the whole string is Fisher-Yates shuffled with
    /// the same entropy source.
    ///
    /// # Errors
    ///
    /// - [`GenerateError::NoCharacterClassSelected`] if `classes` is empty
    /// - [`GenerateError::InvalidLength`] if `length` is below
    ///   [`MIN_COMPLEX_LENGTH`] or the number of selected classes
    /// - [`GenerateError::SecureRandomUnavailable`] if the entropy source fails
    pub fn complex(
        &self,
        length: usize,
        classes: CharacterClasses,
    ) -> Result<String, GenerateError> {
        let selected = classes.selected();
        if selected.is_empty() {
            return Err(GenerateError::NoCharacterClassSelected);
        }
        if length < MIN_COMPLEX_LENGTH.max(selected.len()) {
            return Err(GenerateError::InvalidLength);
        }

        let pool = Alphabet::union(selected.iter().copied())?;
        self.check_entropy(length, pool.len());

        let mut symbols: Zeroizing<Vec<char>> = Zeroizing::new(Vec::with_capacity(length));
        for class in &selected {
            symbols.extend(self.assemble(Length::new(1)?, class)?.chars());
        }

        let rest = length - selected.len();
        if rest > 0 {
            symbols.extend(self.assemble(Length::new(rest)?, &pool)?.chars());
        }

        shuffle(self.entropy(), symbols.as_mut_slice())?;

        Ok(symbols.iter().collect())
    }
}
