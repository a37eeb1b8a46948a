// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::cell::Cell;

use crate::error::EntropyError;
use crate::system::SystemEntropySource;
use crate::traits::EntropySource;

/// When a [`MockEntropySource`] refuses a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockEntropySourceBehaviour {
    /// Every draw succeeds with OS bytes.
    None,
    /// Every draw fails.
    FailAlways,
    /// The Nth draw fails (1-indexed); the others succeed.
    FailAtNthFillBytes(usize),
    /// Draws succeed until the running byte total would exceed the budget.
    FailAfterBytes(usize),
}

impl MockEntropySourceBehaviour {
    fn refuses(self, draw: usize, served: usize, requested: usize) -> bool {
        match self {
            Self::None => false,
            Self::FailAlways => true,
            Self::FailAtNthFillBytes(n) => draw == n,
            Self::FailAfterBytes(budget) => served + requested > budget,
        }
    }
}

/// OS-backed source that records every draw and fails on demand.
///
/// `call_count` and `bytes_requested` let tests pin how a generator sizes
/// its batches; the behaviour drives the failure paths of a generation in
/// progress.
pub struct MockEntropySource {
    inner: SystemEntropySource,
    behaviour: MockEntropySourceBehaviour,
    draws: Cell<usize>,
    bytes_requested: Cell<usize>,
    bytes_served: Cell<usize>,
}

impl MockEntropySource {
    /// Creates a mock with the given failure behaviour.
    pub fn new(behaviour: MockEntropySourceBehaviour) -> Self {
        Self {
            inner: SystemEntropySource {},
            behaviour,
            draws: Cell::new(0),
            bytes_requested: Cell::new(0),
            bytes_served: Cell::new(0),
        }
    }

    /// Swaps the failure behaviour; counters are kept.
    pub fn change_behaviour(&mut self, behaviour: MockEntropySourceBehaviour) {
        self.behaviour = behaviour;
    }

    /// Zeroes every counter.
    pub fn reset_count(&self) {
        self.draws.set(0);
        self.bytes_requested.set(0);
        self.bytes_served.set(0);
    }

    /// Draws attempted, failed ones included.
    pub fn call_count(&self) -> usize {
        self.draws.get()
    }

    /// Bytes asked for across all draws, failed ones included.
    pub fn bytes_requested(&self) -> usize {
        self.bytes_requested.get()
    }

    /// Bytes actually written by successful draws.
    pub fn bytes_served(&self) -> usize {
        self.bytes_served.get()
    }
}

impl EntropySource for MockEntropySource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        let draw = self.draws.get() + 1;
        let served = self.bytes_served.get();

        self.draws.set(draw);
        self.bytes_requested.set(self.bytes_requested.get() + dest.len());

        if self.behaviour.refuses(draw, served, dest.len()) {
            return Err(EntropyError::EntropyNotAvailable {
                requested: dest.len(),
            });
        }

        self.inner.fill_bytes(dest)?;
        self.bytes_served.set(served + dest.len());

        Ok(())
    }
}
