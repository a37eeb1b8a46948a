// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use getrandom::Error as GetRandomError;

use crate::error::EntropyError;
use crate::system::{SystemEntropySource, fill_with_random_bytes};
use crate::traits::EntropySource;

#[test]
fn test_draw_failure_reports_requested_size() {
    let mut bytes = [0u8; 32];
    let result =
        SystemEntropySource::draw_with(&|_| Err(GetRandomError::UNSUPPORTED), &mut bytes);

    assert!(result.is_err());
    assert!(matches!(result, Err(EntropyError::EntropyNotAvailable { requested: 32 })));
}

#[test]
fn test_fill_bytes_ok() {
    let source = SystemEntropySource {};
    let mut bytes = [0u8; 32];
    let result = source.fill_bytes(&mut bytes);

    assert!(result.is_ok());
}

#[test]
fn test_fill_returns_same_buffer() {
    let source = SystemEntropySource {};
    let mut bytes = [0u8; 64];
    let ptr = bytes.as_ptr();

    let filled = source.fill(&mut bytes).expect("Failed to fill(..)");

    assert_eq!(filled.as_ptr(), ptr);
    assert_eq!(filled.len(), 64);
    // 64 zero bytes from a CSPRNG has probability 2^-512
    assert!(filled.iter().any(|b| *b != 0));
}

#[test]
fn test_fill_with_random_bytes_ok() {
    let mut buf = [0u8; 32];
    assert!(fill_with_random_bytes(&mut buf).is_ok());
}

#[test]
fn test_fill_with_random_bytes_empty_slice_ok() {
    let mut buf = [];
    assert!(fill_with_random_bytes(&mut buf).is_ok());
}

#[test]
fn test_reference_delegates() {
    let source = SystemEntropySource {};
    let by_ref = &source;
    let mut bytes = [0u8; 16];

    assert!(by_ref.fill_bytes(&mut bytes).is_ok());
}

#[test]
fn test_empty_draw_skips_the_os() {
    let source = SystemEntropySource {};

    assert_eq!(source.fill_bytes(&mut []), Ok(()));
}
