// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Symbol sets identifiers are drawn from.
//!
//! An [`Alphabet`] is an ordered set of 2 to 256 distinct `char`s. The upper
//! bound comes from the sampler, which turns one random byte into at most one
//! symbol.
//!
//! Predefined alphabets are built once per process and shared read-only; see
//! [`AlphabetName`] and [`Alphabet::named`].

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::error::GenerateError;

/// Smallest alphabet that carries any entropy.
pub const MIN_ALPHABET_SIZE: usize = 2;

/// Largest alphabet addressable by a single random byte.
pub const MAX_ALPHABET_SIZE: usize = 256;

/// URL-safe 64-symbol alphabet (`A-Za-z0-9_-`), ordered for compression.
pub const URL_SAFE: &str = "useandom-26T198340PX75pxJACKVERYMINDBUSHWOLF_GQZbfghjklqvwyzrict";

/// Alphanumerics without visually ambiguous symbols (`0O1lI2Z5S` and friends).
pub const NO_LOOK_ALIKE: &str = "346789ABCDEFGHJKLMNPQRTUVWXYabcdefghijkmnpqrtwxyz";

/// `0-9A-Za-z`.
pub const ALPHANUMERIC: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Lowercase hexadecimal digits.
pub const HEX_LOWERCASE: &str = "0123456789abcdef";

/// Decimal digits.
pub const NUMERIC: &str = "0123456789";

/// `a-z`.
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";

/// `A-Z`.
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Printable ASCII punctuation accepted by most password policies.
pub const SYMBOLS: &str = "!@#$%^&*()-_=+[]{};:,.<>?";

/// Names of the predefined alphabets.
///
/// Parses from kebab-case (`"url-safe"`, `"no-look-alike"`, `"hex"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlphabetName {
    /// [`URL_SAFE`]
    UrlSafe,
    /// [`NO_LOOK_ALIKE`]
    NoLookAlike,
    /// [`ALPHANUMERIC`]
    Alphanumeric,
    /// [`HEX_LOWERCASE`]
    Hex,
    /// [`NUMERIC`]
    Numeric,
    /// [`LOWERCASE`]
    Lowercase,
    /// [`UPPERCASE`]
    Uppercase,
    /// [`SYMBOLS`]
    Symbols,
}

impl AlphabetName {
    /// Every predefined alphabet, in declaration order.
    pub const ALL: [AlphabetName; 8] = [
        AlphabetName::UrlSafe,
        AlphabetName::NoLookAlike,
        AlphabetName::Alphanumeric,
        AlphabetName::Hex,
        AlphabetName::Numeric,
        AlphabetName::Lowercase,
        AlphabetName::Uppercase,
        AlphabetName::Symbols,
    ];

    /// Raw symbols of this alphabet.
    pub const fn symbols(self) -> &'static str {
        match self {
            AlphabetName::UrlSafe => URL_SAFE,
            AlphabetName::NoLookAlike => NO_LOOK_ALIKE,
            AlphabetName::Alphanumeric => ALPHANUMERIC,
            AlphabetName::Hex => HEX_LOWERCASE,
            AlphabetName::Numeric => NUMERIC,
            AlphabetName::Lowercase => LOWERCASE,
            AlphabetName::Uppercase => UPPERCASE,
            AlphabetName::Symbols => SYMBOLS,
        }
    }

    /// Kebab-case key accepted by [`FromStr`].
    pub const fn key(self) -> &'static str {
        match self {
            AlphabetName::UrlSafe => "url-safe",
            AlphabetName::NoLookAlike => "no-look-alike",
            AlphabetName::Alphanumeric => "alphanumeric",
            AlphabetName::Hex => "hex",
            AlphabetName::Numeric => "numeric",
            AlphabetName::Lowercase => "lowercase",
            AlphabetName::Uppercase => "uppercase",
            AlphabetName::Symbols => "symbols",
        }
    }

    const fn slot(self) -> usize {
        self as usize
    }
}

impl fmt::Display for AlphabetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for AlphabetName {
    type Err = GenerateError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        AlphabetName::ALL
            .into_iter()
            .find(|name| name.key() == key)
            .ok_or(GenerateError::InvalidAlphabet("unknown alphabet name"))
    }
}

static PREDEFINED: LazyLock<[Alphabet; 8]> =
    LazyLock::new(|| AlphabetName::ALL.map(|name| Alphabet::dedup(name.symbols().chars())));

/// An ordered set of distinct symbols.
///
/// # Example
///
/// ```rust
/// use tessera::Alphabet;
///
/// let alphabet = Alphabet::new("aabbcc").expect("Failed to build alphabet");
/// assert_eq!(alphabet.symbols(), &['a', 'b', 'c']);
///
/// assert!(Alphabet::new("aaaa").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// Builds an alphabet from `symbols`, dropping repeated symbols (first
    /// occurrence wins).
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::InvalidAlphabet`] when fewer than
    /// [`MIN_ALPHABET_SIZE`] or more than [`MAX_ALPHABET_SIZE`] distinct
    /// symbols remain.
    pub fn new(symbols: &str) -> Result<Self, GenerateError> {
        Self::from_chars(symbols.chars())
    }

    /// Same as [`Alphabet::new`] for an arbitrary `char` iterator.
    ///
    /// # Errors
    ///
    /// See [`Alphabet::new`].
    pub fn from_chars<I: IntoIterator<Item = char>>(symbols: I) -> Result<Self, GenerateError> {
        let alphabet = Self::dedup(symbols);

        if alphabet.symbols.len() < MIN_ALPHABET_SIZE {
            return Err(GenerateError::InvalidAlphabet(
                "alphabet needs at least 2 distinct symbols",
            ));
        }
        if alphabet.symbols.len() > MAX_ALPHABET_SIZE {
            return Err(GenerateError::InvalidAlphabet(
                "alphabet exceeds 256 distinct symbols",
            ));
        }

        Ok(alphabet)
    }

    /// Returns the shared instance of a predefined alphabet.
    pub fn named(name: AlphabetName) -> &'static Alphabet {
        &PREDEFINED[name.slot()]
    }

    /// Union of several alphabets, keeping first-seen order.
    ///
    /// # Errors
    ///
    /// See [`Alphabet::new`].
    pub fn union<'a, I>(alphabets: I) -> Result<Self, GenerateError>
    where
        I: IntoIterator<Item = &'a Alphabet>,
    {
        Self::from_chars(
            alphabets
                .into_iter()
                .flat_map(|alphabet| alphabet.symbols.iter().copied()),
        )
    }

    // Stops collecting one past the maximum so huge inputs fail fast.
    fn dedup<I: IntoIterator<Item = char>>(symbols: I) -> Self {
        let mut unique: Vec<char> = Vec::new();

        for symbol in symbols {
            if unique.len() > MAX_ALPHABET_SIZE {
                break;
            }
            if !unique.contains(&symbol) {
                unique.push(symbol);
            }
        }

        Self { symbols: unique }
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always `false` for a validated alphabet.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbols in order.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Whether `symbol` belongs to this alphabet.
    pub fn contains(&self, symbol: char) -> bool {
        self.symbols.contains(&symbol)
    }

    /// Whether every character of `value` belongs to this alphabet.
    pub fn spans(&self, value: &str) -> bool {
        value.chars().all(|c| self.contains(c))
    }

    /// Whether the size is a power of two (every random byte maps to a symbol).
    pub fn is_power_of_two(&self) -> bool {
        self.symbols.len().is_power_of_two()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.symbols.iter().try_for_each(|c| fmt::Write::write_char(f, *c))
    }
}

impl FromStr for Alphabet {
    type Err = GenerateError;

    fn from_str(symbols: &str) -> Result<Self, Self::Err> {
        Self::new(symbols)
    }
}

/// A reference to an alphabet, resolved once per generation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlphabetSpec<'a> {
    /// One of the predefined alphabets.
    Named(AlphabetName),
    /// Raw symbols, validated and de-duplicated on resolution.
    Literal(&'a str),
    /// An already validated alphabet.
    Custom(&'a Alphabet),
}

impl<'a> AlphabetSpec<'a> {
    /// Resolves to a validated alphabet, borrowing whenever possible.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::InvalidAlphabet`] for an invalid literal.
    pub fn resolve(self) -> Result<Cow<'a, Alphabet>, GenerateError> {
        match self {
            AlphabetSpec::Named(name) => Ok(Cow::Borrowed(Alphabet::named(name))),
            AlphabetSpec::Literal(symbols) => Alphabet::new(symbols).map(Cow::Owned),
            AlphabetSpec::Custom(alphabet) => Ok(Cow::Borrowed(alphabet)),
        }
    }
}

impl Default for AlphabetSpec<'_> {
    fn default() -> Self {
        AlphabetSpec::Named(AlphabetName::UrlSafe)
    }
}

impl From<AlphabetName> for AlphabetSpec<'_> {
    fn from(name: AlphabetName) -> Self {
        AlphabetSpec::Named(name)
    }
}

impl<'a> From<&'a str> for AlphabetSpec<'a> {
    fn from(symbols: &'a str) -> Self {
        AlphabetSpec::Literal(symbols)
    }
}

impl<'a> From<&'a String> for AlphabetSpec<'a> {
    fn from(symbols: &'a String) -> Self {
        AlphabetSpec::Literal(symbols.as_str())
    }
}

impl<'a> From<&'a Alphabet> for AlphabetSpec<'a> {
    fn from(alphabet: &'a Alphabet) -> Self {
        AlphabetSpec::Custom(alphabet)
    }
}
