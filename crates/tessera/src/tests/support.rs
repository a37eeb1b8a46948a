// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::config::GeneratorConfig;
use crate::generator::Generator;
use crate::support::test_utils::{
    MockEntropySource, MockEntropySourceBehaviour, RecordingAdvisorySink, ReplayEntropySource,
};

pub(crate) fn replay_generator(
    script: &[u8],
    config: GeneratorConfig,
) -> Generator<ReplayEntropySource, RecordingAdvisorySink> {
    Generator::with_parts(
        ReplayEntropySource::new(script.to_vec()),
        RecordingAdvisorySink::new(),
        config,
    )
}

pub(crate) fn mock_generator(
    behaviour: MockEntropySourceBehaviour,
    config: GeneratorConfig,
) -> Generator<MockEntropySource, RecordingAdvisorySink> {
    Generator::with_parts(
        MockEntropySource::new(behaviour),
        RecordingAdvisorySink::new(),
        config,
    )
}

/// Pearson chi-square statistic against a uniform expectation.
pub(crate) fn chi_square(counts: &[usize]) -> f64 {
    let total: usize = counts.iter().sum();
    let expected = total as f64 / counts.len() as f64;

    counts
        .iter()
        .map(|&c| {
            let d = c as f64 - expected;
            d * d / expected
        })
        .sum()
}
