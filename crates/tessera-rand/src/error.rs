// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Failure to draw bytes from an [`EntropySource`](crate::EntropySource).
///
/// Never recovered from internally: a failed draw aborts the identifier,
/// index or shuffle being built and no partial output escapes.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EntropyError {
    /// The source could not fill a draw of `requested` bytes.
    #[error("EntropyNotAvailable: {requested} bytes")]
    EntropyNotAvailable {
        /// Size of the draw that failed.
        requested: usize,
    },
}
