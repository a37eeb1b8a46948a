// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use getrandom::Error as GetRandomError;

use crate::error::EntropyError;
use crate::traits::EntropySource;

/// Operating-system CSPRNG, read through `getrandom`.
///
/// The default byte source of every `tessera` generator. Stateless: each
/// draw goes straight to the OS, so one value can be copied into any
/// number of generators and threads.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemEntropySource {}

impl SystemEntropySource {
    /// Draws through `draw`, tagging failures with the size of the draw.
    pub(crate) fn draw_with(
        draw: &dyn Fn(&mut [u8]) -> Result<(), GetRandomError>,
        dest: &mut [u8],
    ) -> Result<(), EntropyError> {
        draw(dest).map_err(|_| EntropyError::EntropyNotAvailable {
            requested: dest.len(),
        })
    }
}

impl EntropySource for SystemEntropySource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        if dest.is_empty() {
            return Ok(());
        }

        Self::draw_with(&getrandom::fill, dest)
    }
}

/// Fills `dest` from the OS CSPRNG and returns it.
///
/// # Errors
///
/// Returns [`EntropyError::EntropyNotAvailable`] if the OS refuses to
/// provide entropy.
///
/// # Example
///
/// ```rust
/// use tessera_rand::fill_with_random_bytes;
///
/// let mut salt = [0u8; 16];
/// let salt = fill_with_random_bytes(&mut salt).expect("Failed to generate entropy");
/// assert_eq!(salt.len(), 16);
/// ```
pub fn fill_with_random_bytes(dest: &mut [u8]) -> Result<&mut [u8], EntropyError> {
    SystemEntropySource {}.fill(dest)
}
