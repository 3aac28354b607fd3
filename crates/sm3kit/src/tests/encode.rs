// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::encode::{combine_surrogates, encode_chars, encode_utf16};
use crate::error::Sm3Error;

#[test]
fn test_encode_empty() {
    assert_eq!(encode_utf16(&[]), Ok(Vec::new()));
    assert_eq!(encode_chars("".chars()), Vec::<u8>::new());
}

#[test]
fn test_encode_ascii_is_verbatim() {
    assert_eq!(encode_utf16(&[0x61, 0x62, 0x63]), Ok(vec![0x61, 0x62, 0x63]));
    assert_eq!(encode_utf16(&[0x7f]), Ok(vec![0x7f]));
}

#[test]
fn test_encode_two_byte() {
    // U+00E9 LATIN SMALL LETTER E WITH ACUTE
    assert_eq!(encode_utf16(&[0x00e9]), Ok(vec![0xc3, 0xa9]));
    // Boundaries
    assert_eq!(encode_utf16(&[0x0080]), Ok(vec![0xc2, 0x80]));
    assert_eq!(encode_utf16(&[0x07ff]), Ok(vec![0xdf, 0xbf]));
}

#[test]
fn test_encode_three_byte() {
    // U+4E2D U+6587
    assert_eq!(
        encode_utf16(&[0x4e2d, 0x6587]),
        Ok(vec![0xe4, 0xb8, 0xad, 0xe6, 0x96, 0x87])
    );
    // Boundaries around the surrogate band
    assert_eq!(encode_utf16(&[0x0800]), Ok(vec![0xe0, 0xa0, 0x80]));
    assert_eq!(encode_utf16(&[0xd7ff]), Ok(vec![0xed, 0x9f, 0xbf]));
    assert_eq!(encode_utf16(&[0xe000]), Ok(vec![0xee, 0x80, 0x80]));
    assert_eq!(encode_utf16(&[0xffff]), Ok(vec![0xef, 0xbf, 0xbf]));
}

#[test]
fn test_encode_surrogate_pair() {
    // U+1F600 GRINNING FACE = D83D DE00
    assert_eq!(combine_surrogates(0xd83d, 0xde00), 0x1f600);
    assert_eq!(
        encode_utf16(&[0xd83d, 0xde00]),
        Ok(vec![0xf0, 0x9f, 0x98, 0x80])
    );
    // Lowest and highest supplementary scalars
    assert_eq!(
        encode_utf16(&[0xd800, 0xdc00]),
        Ok(vec![0xf0, 0x90, 0x80, 0x80])
    );
    assert_eq!(
        encode_utf16(&[0xdbff, 0xdfff]),
        Ok(vec![0xf4, 0x8f, 0xbf, 0xbf])
    );
}

#[test]
fn test_encode_mixed_matches_str_bytes() {
    let text = "h\u{e9}llo \u{4e16}\u{754c} \u{1f600}";
    let units: Vec<u16> = text.encode_utf16().collect();

    assert_eq!(encode_utf16(&units).as_deref(), Ok(text.as_bytes()));
    assert_eq!(encode_chars(text.chars()), text.as_bytes());
    assert_eq!(
        text.as_bytes(),
        [
            0x68, 0xc3, 0xa9, 0x6c, 0x6c, 0x6f, 0x20, 0xe4, 0xb8, 0x96, 0xe7, 0x95, 0x8c, 0x20,
            0xf0, 0x9f, 0x98, 0x80,
        ]
    );
}

#[test]
fn test_encode_lone_high_surrogate_at_end() {
    assert_eq!(
        encode_utf16(&[0x61, 0xd83d]),
        Err(Sm3Error::UnpairedSurrogate {
            index: 1,
            unit: 0xd83d
        })
    );
}

#[test]
fn test_encode_high_surrogate_followed_by_non_surrogate() {
    assert_eq!(
        encode_utf16(&[0xd83d, 0x0041]),
        Err(Sm3Error::UnpairedSurrogate {
            index: 0,
            unit: 0xd83d
        })
    );
}

#[test]
fn test_encode_two_high_surrogates() {
    assert_eq!(
        encode_utf16(&[0xd83d, 0xd83d, 0xde00]),
        Err(Sm3Error::UnpairedSurrogate {
            index: 0,
            unit: 0xd83d
        })
    );
}

#[test]
fn test_encode_lone_low_surrogate() {
    assert_eq!(
        encode_utf16(&[0x61, 0x62, 0xde00, 0x63]),
        Err(Sm3Error::UnpairedSurrogate {
            index: 2,
            unit: 0xde00
        })
    );
}

#[test]
fn test_unpaired_surrogate_message() {
    let err = Sm3Error::UnpairedSurrogate {
        index: 3,
        unit: 0xdc00,
    };
    assert_eq!(
        err.to_string(),
        "unpaired surrogate 0xdc00 at code unit index 3"
    );
}
