// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::GenerateError;
use crate::length::Length;

#[test]
fn test_length_new() {
    assert_eq!(Length::new(21).map(Length::get), Ok(21));
    assert_eq!(Length::new(0), Err(GenerateError::InvalidLength));
}

#[test]
fn test_length_from_signed() {
    assert_eq!(Length::try_from(7i64).map(usize::from), Ok(7));
    assert_eq!(Length::try_from(7i32).map(usize::from), Ok(7));
    assert_eq!(Length::try_from(0i64), Err(GenerateError::InvalidLength));
    assert_eq!(Length::try_from(-5i64), Err(GenerateError::InvalidLength));
    assert_eq!(Length::try_from(-5i32), Err(GenerateError::InvalidLength));
}

#[test]
fn test_length_from_float() {
    assert_eq!(Length::try_from(16.0f64).map(Length::get), Ok(16));
    assert_eq!(Length::try_from(2.5f64), Err(GenerateError::InvalidLength));
    assert_eq!(Length::try_from(0.0f64), Err(GenerateError::InvalidLength));
    assert_eq!(Length::try_from(-3.0f64), Err(GenerateError::InvalidLength));
    assert_eq!(Length::try_from(f64::NAN), Err(GenerateError::InvalidLength));
    assert_eq!(
        Length::try_from(f64::INFINITY),
        Err(GenerateError::InvalidLength)
    );
    assert_eq!(Length::try_from(1e300f64), Err(GenerateError::InvalidLength));
}

#[test]
fn test_length_display() {
    let length = Length::new(42).expect("Failed to Length::new(..)");
    assert_eq!(length.to_string(), "42");
}
