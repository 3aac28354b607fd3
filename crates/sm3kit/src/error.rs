// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// SM3 input error
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sm3Error {
    /// A UTF-16 surrogate code unit without its partner
    #[error("unpaired surrogate {unit:#06x} at code unit index {index}")]
    UnpairedSurrogate {
        /// Position of the offending unit in the input slice
        index: usize,
        /// The offending code unit
        unit: u16,
    },
}
