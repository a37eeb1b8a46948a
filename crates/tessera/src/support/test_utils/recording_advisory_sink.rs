// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::sync::{Mutex, PoisonError};

use crate::advisory::{Advisory, AdvisorySink};

/// Advisory sink that keeps every advisory it receives.
#[derive(Debug, Default)]
pub struct RecordingAdvisorySink {
    advisories: Mutex<Vec<Advisory>>,
}

impl RecordingAdvisorySink {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the advisories received so far.
    pub fn advisories(&self) -> Vec<Advisory> {
        self.advisories
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Drains the recorded advisories.
    pub fn take(&self) -> Vec<Advisory> {
        core::mem::take(
            &mut *self
                .advisories
                .lock()
                .unwrap_or_else(PoisonError::into_inner),
        )
    }

    /// Whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.advisories
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }
}

impl AdvisorySink for RecordingAdvisorySink {
    fn advise(&self, advisory: Advisory) {
        self.advisories
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(advisory);
    }
}
