// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Text to byte encoding (variable width, 1-4 bytes per character)
//!
//! `&str` input is already in this encoding and is hashed through its byte
//! view. The functions here serve callers that hold code points or UTF-16
//! code units, such as text handed over from a JavaScript runtime.

use alloc::vec::Vec;

use zeroize::Zeroizing;

use crate::error::Sm3Error;

const HIGH_SURROGATES: core::ops::RangeInclusive<u16> = 0xd800..=0xdbff;
const LOW_SURROGATES: core::ops::RangeInclusive<u16> = 0xdc00..=0xdfff;

/// Append the encoding of one scalar value
#[inline(always)]
fn push_scalar(out: &mut Vec<u8>, cp: u32) {
    if cp < 0x80 {
        out.push(cp as u8);
    } else if cp < 0x800 {
        out.push(0xc0 | (cp >> 6) as u8);
        out.push(0x80 | (cp & 0x3f) as u8);
    } else if cp < 0x1_0000 {
        out.push(0xe0 | (cp >> 12) as u8);
        out.push(0x80 | ((cp >> 6) & 0x3f) as u8);
        out.push(0x80 | (cp & 0x3f) as u8);
    } else {
        out.push(0xf0 | (cp >> 18) as u8);
        out.push(0x80 | ((cp >> 12) & 0x3f) as u8);
        out.push(0x80 | ((cp >> 6) & 0x3f) as u8);
        out.push(0x80 | (cp & 0x3f) as u8);
    }
}

/// Combine a surrogate pair into its supplementary-plane scalar
#[inline(always)]
pub(crate) fn combine_surrogates(high: u16, low: u16) -> u32 {
    (((u32::from(high) & 0x3ff) << 10) | (u32::from(low) & 0x3ff)) + 0x1_0000
}

/// Encode a sequence of code points.
///
/// Total: every `char` is a valid scalar, so this never fails.
pub fn encode_chars<I>(chars: I) -> Vec<u8>
where
    I: IntoIterator<Item = char>,
{
    let mut out = Vec::new();
    for c in chars {
        push_scalar(&mut out, u32::from(c));
    }
    out
}

/// Encode a sequence of UTF-16 code units.
///
/// A high surrogate must be immediately followed by a low surrogate; the
/// pair is emitted as one 4-byte character. Any other surrogate is rejected
/// with [`Sm3Error::UnpairedSurrogate`] and the partial output is wiped.
pub fn encode_utf16(units: &[u16]) -> Result<Vec<u8>, Sm3Error> {
    // 3 bytes per unit bounds the output: a pair is 2 units for 4 bytes.
    // Reserving up front keeps the buffer from reallocating and leaving
    // unwiped copies behind.
    let mut out = Zeroizing::new(Vec::with_capacity(units.len() * 3));

    let mut i = 0;
    while i < units.len() {
        let unit = units[i];

        if HIGH_SURROGATES.contains(&unit) {
            let low = match units.get(i + 1) {
                Some(&low) if LOW_SURROGATES.contains(&low) => low,
                _ => return Err(Sm3Error::UnpairedSurrogate { index: i, unit }),
            };
            push_scalar(&mut out, combine_surrogates(unit, low));
            i += 2;
        } else if LOW_SURROGATES.contains(&unit) {
            return Err(Sm3Error::UnpairedSurrogate { index: i, unit });
        } else {
            push_scalar(&mut out, u32::from(unit));
            i += 1;
        }
    }

    Ok(core::mem::take(&mut *out))
}
