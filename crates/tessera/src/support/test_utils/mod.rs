// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for generators.
//!
//! Re-exports the entropy mocks from `tessera_rand` next to an advisory
//! recorder, so a test needs a single import.

mod recording_advisory_sink;

pub use recording_advisory_sink::RecordingAdvisorySink;
pub use tessera_rand::test_utils::{
    MockEntropySource, MockEntropySourceBehaviour, ReplayEntropySource,
};
