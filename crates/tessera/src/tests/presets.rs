// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use tessera_rand::EntropyError;

use crate::advisory::Advisory;
use crate::alphabet::{ALPHANUMERIC, LOWERCASE, NUMERIC, SYMBOLS, UPPERCASE};
use crate::config::GeneratorConfig;
use crate::error::GenerateError;
use crate::presets::{
    CharacterClasses, DEFAULT_HEX_LENGTH, DEFAULT_NUMERIC_LENGTH, DEFAULT_SALT_LENGTH,
    DEFAULT_TOKEN_LENGTH, MIN_SALT_LENGTH, MIN_TOKEN_LENGTH,
};
use crate::generator::Generator;
use crate::support::test_utils::{
    MockEntropySource, MockEntropySourceBehaviour, RecordingAdvisorySink,
};
use crate::{generate_complex, generate_hex, generate_numeric, generate_salt};

use super::support::mock_generator;

fn healthy() -> Generator<MockEntropySource, RecordingAdvisorySink> {
    mock_generator(MockEntropySourceBehaviour::None, GeneratorConfig::default())
}

#[test]
fn test_token() {
    let generator = healthy();

    let token = generator
        .token(DEFAULT_TOKEN_LENGTH)
        .expect("Failed to token(..)");

    assert_eq!(token.len(), DEFAULT_TOKEN_LENGTH);
    assert!(token.chars().all(|c| ALPHANUMERIC.contains(c)));
    assert!(generator.sink().is_empty());
}

#[test]
fn test_short_token_warns_but_keeps_length() {
    let generator = healthy();

    let token = generator.token(8).expect("Failed to token(..)");

    assert_eq!(token.len(), 8);
    let advisories = generator.sink().take();
    assert!(advisories.contains(&Advisory::ShortToken {
        length: 8,
        recommended: MIN_TOKEN_LENGTH,
    }));
    assert!(
        advisories
            .iter()
            .any(|a| matches!(a, Advisory::LowEntropy { length: 8, .. }))
    );
}

#[test]
fn test_salt() {
    let generator = healthy();

    let salt = generator
        .salt(DEFAULT_SALT_LENGTH)
        .expect("Failed to salt(..)");

    assert_eq!(salt.len(), DEFAULT_SALT_LENGTH);
    assert!(salt.chars().all(|c| ALPHANUMERIC.contains(c)));
    assert!(generator.sink().is_empty());
}

#[test]
fn test_short_salt_warns_only_about_length() {
    let generator = healthy();

    let salt = generator.salt(4).expect("Failed to salt(..)");

    assert_eq!(salt.len(), 4);
    assert_eq!(
        generator.sink().take(),
        vec![Advisory::ShortSalt {
            length: 4,
            recommended: MIN_SALT_LENGTH,
        }]
    );
}

#[test]
fn test_hex() {
    let hex = generate_hex(DEFAULT_HEX_LENGTH).expect("Failed to generate_hex(..)");

    assert_eq!(hex.len(), DEFAULT_HEX_LENGTH);
    assert!(hex.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
}

#[test]
fn test_numeric_is_silent() {
    let generator = healthy();

    let code = generator
        .numeric(DEFAULT_NUMERIC_LENGTH)
        .expect("Failed to numeric(..)");

    assert_eq!(code.len(), DEFAULT_NUMERIC_LENGTH);
    assert!(code.chars().all(|c| NUMERIC.contains(c)));
    assert!(generator.sink().is_empty());
}

#[test]
fn test_presets_reject_zero_length() {
    let generator = healthy();

    assert_eq!(generator.token(0), Err(GenerateError::InvalidLength));
    assert_eq!(generator.salt(0), Err(GenerateError::InvalidLength));
    assert_eq!(generator.hex(0), Err(GenerateError::InvalidLength));
    assert_eq!(generator.numeric(0), Err(GenerateError::InvalidLength));
    assert_eq!(generate_numeric(0), Err(GenerateError::InvalidLength));
    assert_eq!(generate_salt(0), Err(GenerateError::InvalidLength));
}

#[test]
fn test_character_classes_selection() {
    assert_eq!(CharacterClasses::default().selected().len(), 3);
    assert_eq!(CharacterClasses::ALL.selected().len(), 4);
    assert!(CharacterClasses::NONE.selected().is_empty());
}

#[test]
fn test_complex_contains_every_selected_class() {
    let generator = healthy();

    for _ in 0..500 {
        let value = generator
            .complex(8, CharacterClasses::default())
            .expect("Failed to complex(..)");

        assert_eq!(value.chars().count(), 8);
        assert!(value.chars().any(|c| LOWERCASE.contains(c)), "{value}");
        assert!(value.chars().any(|c| UPPERCASE.contains(c)), "{value}");
        assert!(value.chars().any(|c| NUMERIC.contains(c)), "{value}");
        assert!(!value.chars().any(|c| SYMBOLS.contains(c)), "{value}");
    }
}

#[test]
fn test_complex_minimum_length_with_all_classes() {
    for _ in 0..200 {
        let value =
            generate_complex(4, CharacterClasses::ALL).expect("Failed to generate_complex(..)");

        assert_eq!(value.chars().count(), 4);
        assert_eq!(value.chars().filter(|c| LOWERCASE.contains(*c)).count(), 1);
        assert_eq!(value.chars().filter(|c| UPPERCASE.contains(*c)).count(), 1);
        assert_eq!(value.chars().filter(|c| NUMERIC.contains(*c)).count(), 1);
        assert_eq!(value.chars().filter(|c| SYMBOLS.contains(*c)).count(), 1);
    }
}

#[test]
fn test_complex_single_class() {
    let classes = CharacterClasses {
        numbers: true,
        ..CharacterClasses::NONE
    };

    let value = generate_complex(6, classes).expect("Failed to generate_complex(..)");

    assert!(value.chars().all(|c| NUMERIC.contains(c)));
}

#[test]
fn test_complex_positions_are_shuffled() {
    // Without the shuffle the required symbols would always lead, in class order.
    let generator = healthy();
    let mut lowercase_first = 0;

    for _ in 0..200 {
        let value = generator
            .complex(16, CharacterClasses::default())
            .expect("Failed to complex(..)");
        if value.starts_with(|c: char| c.is_ascii_lowercase()) {
            lowercase_first += 1;
        }
    }

    // Expected around 80
    assert!(lowercase_first < 150, "{lowercase_first}");
}

#[test]
fn test_complex_errors() {
    let generator = healthy();

    assert_eq!(
        generator.complex(8, CharacterClasses::NONE),
        Err(GenerateError::NoCharacterClassSelected)
    );
    assert_eq!(
        generator.complex(3, CharacterClasses::default()),
        Err(GenerateError::InvalidLength)
    );
    assert_eq!(
        generator.complex(0, CharacterClasses::ALL),
        Err(GenerateError::InvalidLength)
    );

    let failing = mock_generator(
        MockEntropySourceBehaviour::FailAlways,
        GeneratorConfig::default(),
    );
    assert!(matches!(
        failing.complex(8, CharacterClasses::default()),
        Err(GenerateError::SecureRandomUnavailable(
            EntropyError::EntropyNotAvailable { .. }
        ))
    ));
}
