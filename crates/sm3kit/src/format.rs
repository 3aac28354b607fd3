// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::string::String;

use crate::consts::HASH_LEN;

/// Render a digest as 64 uppercase hexadecimal characters
pub fn to_upper_hex(digest: &[u8; HASH_LEN]) -> String {
    hex::encode_upper(digest)
}

/// Parse a 64-character hex digest, either case.
///
/// Returns `false` on a wrong length or a non-hex character.
pub(crate) fn parse_hex(s: &str, out: &mut [u8; HASH_LEN]) -> bool {
    hex::decode_to_slice(s, out).is_ok()
}
