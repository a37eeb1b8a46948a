// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec::Vec;
use core::cell::Cell;

use crate::error::EntropyError;
use crate::traits::EntropySource;

/// Deterministic entropy source that replays a fixed byte script.
///
/// Bytes are served in order and the script wraps around once exhausted.
/// An empty script serves zeros.
///
/// **Not random.** Only meant for tests that need to pin down exactly which
/// bytes a consumer sees.
pub struct ReplayEntropySource {
    script: Vec<u8>,
    cursor: Cell<usize>,
    bytes_served: Cell<usize>,
}

impl ReplayEntropySource {
    /// Creates a source replaying `script`.
    pub fn new(script: impl Into<Vec<u8>>) -> Self {
        Self {
            script: script.into(),
            cursor: Cell::new(0),
            bytes_served: Cell::new(0),
        }
    }

    /// Returns the total number of bytes served so far.
    pub fn bytes_served(&self) -> usize {
        self.bytes_served.get()
    }

    /// Rewinds the script to its first byte and clears the counter.
    pub fn rewind(&self) {
        self.cursor.set(0);
        self.bytes_served.set(0);
    }
}

impl EntropySource for ReplayEntropySource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        self.bytes_served.set(self.bytes_served.get() + dest.len());

        if self.script.is_empty() {
            dest.fill(0);
            return Ok(());
        }

        let mut cursor = self.cursor.get();
        for byte in dest.iter_mut() {
            *byte = self.script[cursor];
            cursor = (cursor + 1) % self.script.len();
        }
        self.cursor.set(cursor);

        Ok(())
    }
}
