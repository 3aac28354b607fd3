// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SM3 cryptographic hash with wiped working memory
//!
//! Implementation per GB/T 32905-2016 (SM3 Cryptographic Hash Algorithm).
//! One-shot only: a complete in-memory message goes in, a 256-bit digest
//! comes out. Padding buffers, message schedule and registers are zeroized
//! before each call returns.
//!
//! ```
//! assert_eq!(
//!     sm3kit::hash("abc"),
//!     "66C7F0F462EEEDD9D1F2D46BDC10E4E24167C4875CF2F7A2297DA02B8F4BA8E0"
//! );
//! ```
//!
//! References:
//! - GB/T 32905-2016: Information security techniques - SM3 cryptographic
//!   hash algorithm
//! - draft-sca-cfrg-sm3-02: The SM3 Cryptographic Hash Function
//!   <https://datatracker.ietf.org/doc/html/draft-sca-cfrg-sm3-02>

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod consts;
mod encode;
mod error;
mod format;
mod pad;
mod schedule;
mod sm3;
mod word32;

use alloc::string::String;

use subtle::ConstantTimeEq;
use zeroize::{Zeroize, Zeroizing};

pub use consts::{BLOCK_LEN, HASH_LEN, HEX_LEN, IV};
pub use encode::{encode_chars, encode_utf16};
pub use error::Sm3Error;
pub use format::to_upper_hex;
pub use pad::{pad, padded_len};

/// SM3 digest of raw bytes, written to `out`
pub fn digest_into(message: &[u8], out: &mut [u8; HASH_LEN]) {
    let mut state = sm3::Sm3State::new();
    state.hash(message, out);
}

/// SM3 digest of raw bytes
pub fn digest(message: &[u8]) -> [u8; HASH_LEN] {
    let mut out = [0u8; HASH_LEN];
    digest_into(message, &mut out);
    out
}

fn hash_bytes(message: &[u8]) -> String {
    let mut out = [0u8; HASH_LEN];
    digest_into(message, &mut out);
    let hex = to_upper_hex(&out);
    out.zeroize();
    hex
}

/// SM3 digest of `text` as 64 uppercase hexadecimal characters.
///
/// The text is hashed in its UTF-8 encoding. Total for every input,
/// including the empty string.
pub fn hash(text: &str) -> String {
    hash_bytes(text.as_bytes())
}

/// SM3 digest of UTF-16 code units as 64 uppercase hexadecimal characters.
///
/// # Errors
/// Returns [`Sm3Error::UnpairedSurrogate`] if the input contains a surrogate
/// without its partner. Nothing is hashed in that case.
pub fn hash_utf16(units: &[u16]) -> Result<String, Sm3Error> {
    let bytes = Zeroizing::new(encode_utf16(units)?);
    Ok(hash_bytes(&bytes))
}

/// Check `text` against a stored hex digest.
///
/// `expected_hex` may use either case. The digest bytes are compared in
/// constant time; malformed hex never matches.
pub fn verify(text: &str, expected_hex: &str) -> bool {
    let mut expected = [0u8; HASH_LEN];
    if !format::parse_hex(expected_hex, &mut expected) {
        log::debug!("sm3: rejecting malformed expected digest");
        return false;
    }

    let mut actual = digest(text.as_bytes());
    let matches: bool = actual[..].ct_eq(&expected[..]).into();

    actual.zeroize();
    expected.zeroize();

    matches
}
