// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use proptest::prelude::*;

use crate::advisory::SilentAdvisorySink;
use crate::alphabet::Alphabet;
use crate::analyzer::{collision_probability, recommended_length};
use crate::config::GeneratorConfig;
use crate::generator::Generator;
use crate::sampler::BiasPolicy;

fn bias_policy() -> impl Strategy<Value = BiasPolicy> {
    prop_oneof![
        Just(BiasPolicy::StrictUnbiased),
        Just(BiasPolicy::FastModulo)
    ]
}

proptest! {
    #[test]
    fn generated_ids_have_exact_length_and_stay_in_alphabet(
        length in 1..=300usize,
        symbols in "[a-zA-Z0-9_\\-αβγ]{2,80}",
        policy in bias_policy(),
        threshold in 0..=64usize,
    ) {
        let alphabet = Alphabet::new(&symbols);
        prop_assume!(alphabet.is_ok());
        let alphabet = alphabet.expect("Failed to Alphabet::new(..)");

        let generator = Generator::new()
            .with_sink(SilentAdvisorySink)
            .with_config(
                GeneratorConfig::default()
                    .with_bias_policy(policy)
                    .with_incremental_threshold(threshold),
            );

        let id = generator
            .generate(length, &alphabet)
            .expect("Failed to generate(..)");

        prop_assert_eq!(id.chars().count(), length);
        prop_assert!(alphabet.spans(&id));
    }

    #[test]
    fn recommended_length_never_exceeds_ceiling(
        alphabet_size in 2..=256usize,
        id_count in 2..=u64::MAX,
        ceiling in 1e-9..99.9f64,
    ) {
        let length = recommended_length(alphabet_size, id_count, ceiling);
        prop_assert!(collision_probability(length, alphabet_size, id_count) <= ceiling);
    }

    #[test]
    fn collision_probability_stays_in_percent_range(
        length in 0..=64usize,
        alphabet_size in 0..=256usize,
        id_count in any::<u64>(),
    ) {
        let probability = collision_probability(length, alphabet_size, id_count);
        prop_assert!((0.0..=100.0).contains(&probability));
    }
}
