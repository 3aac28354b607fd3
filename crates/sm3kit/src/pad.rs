// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Merkle-Damgard padding per GB/T 32905-2016 Section 5.2

use alloc::vec::Vec;

use crate::consts::{BLOCK_LEN, LENGTH_FIELD_LEN};

/// Length in bytes of the padded form of a `len`-byte message.
///
/// Always a multiple of [`BLOCK_LEN`] and at least `len + 9`.
pub const fn padded_len(len: usize) -> usize {
    // Message, the 0x80 marker and the length field, rounded up to a block
    let min = len + 1 + LENGTH_FIELD_LEN;
    min.div_ceil(BLOCK_LEN) * BLOCK_LEN
}

/// Bit length of a `len`-byte message as stored in the length field.
///
/// The field is 64 bits wide; lengths beyond 2^64 bits wrap.
#[inline(always)]
pub(crate) const fn bit_len(len: usize) -> u64 {
    (len as u64).wrapping_mul(8)
}

/// Write the padded form of `message` into `out`.
///
/// `out` is cleared first and ends up exactly `padded_len(message.len())`
/// bytes long:
/// 1. the message,
/// 2. a single `0x80` byte,
/// 3. `0x00` bytes up to 56 mod 64,
/// 4. the message bit length as a big-endian `u64`.
pub(crate) fn pad_into(message: &[u8], out: &mut Vec<u8>) {
    let total = padded_len(message.len());

    out.clear();
    out.reserve_exact(total);
    out.extend_from_slice(message);
    out.push(0x80);
    out.resize(total - LENGTH_FIELD_LEN, 0x00);
    out.extend_from_slice(&bit_len(message.len()).to_be_bytes());

    debug_assert_eq!(out.len(), total);
    debug_assert_eq!(out.len() % BLOCK_LEN, 0);
}

/// Pad `message` to a whole number of 64-byte blocks.
pub fn pad(message: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    pad_into(message, &mut out);
    out
}
