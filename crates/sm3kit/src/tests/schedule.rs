// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::consts::{ROUNDS, W_LEN};
use crate::pad::pad;
use crate::schedule::MessageSchedule;

/// Straightforward u32 expansion to compare against
fn reference_expand(block: &[u8]) -> ([u32; W_LEN], [u32; ROUNDS]) {
    let p1 = |x: u32| x ^ x.rotate_left(15) ^ x.rotate_left(23);

    let mut w = [0u32; W_LEN];
    for (j, chunk) in block.chunks_exact(4).enumerate() {
        w[j] = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    for j in 16..W_LEN {
        w[j] = p1(w[j - 16] ^ w[j - 9] ^ w[j - 3].rotate_left(15))
            ^ w[j - 13].rotate_left(7)
            ^ w[j - 6];
    }

    let mut w1 = [0u32; ROUNDS];
    for j in 0..ROUNDS {
        w1[j] = w[j] ^ w[j + 4];
    }

    (w, w1)
}

fn assert_matches_reference(block: &[u8]) {
    let (w, w1) = reference_expand(block);

    let mut schedule = MessageSchedule::new();
    schedule.expand(block);

    for j in 0..W_LEN {
        assert_eq!(schedule.word(j).as_u32(), w[j], "W[{j}] mismatch");
    }
    for j in 0..ROUNDS {
        assert_eq!(schedule.derived_word(j).as_u32(), w1[j], "W'[{j}] mismatch");
    }
}

#[test]
fn test_expand_abc_block() {
    // Example 1 of GB/T 32905-2016 Appendix A
    let padded = pad(b"abc");

    let mut schedule = MessageSchedule::new();
    schedule.expand(&padded);

    assert_eq!(schedule.word(0).as_u32(), 0x6162_6380);
    for j in 1..15 {
        assert_eq!(schedule.word(j).as_u32(), 0, "W[{j}]");
    }
    assert_eq!(schedule.word(15).as_u32(), 0x0000_0018);

    let expected_16_to_23 = [
        0x9092_e200,
        0x0000_0000,
        0x000c_0606,
        0x719c_70ed,
        0x0000_0000,
        0x8001_801f,
        0x939f_7da9,
        0x0000_0000,
    ];
    for (offset, expected) in expected_16_to_23.iter().enumerate() {
        assert_eq!(schedule.word(16 + offset).as_u32(), *expected, "W[{}]", 16 + offset);
    }

    // W'[0] = W[0] ^ W[4]
    assert_eq!(schedule.derived_word(0).as_u32(), 0x6162_6380);
}

#[test]
fn test_expand_matches_reference() {
    assert_matches_reference(&pad(b"abc"));
    assert_matches_reference(&[0xffu8; 64]);

    let counting: Vec<u8> = (0..64).map(|i| i as u8).collect();
    assert_matches_reference(&counting);

    let padded = pad(&[0x5au8; 100]);
    assert_matches_reference(&padded[..64]);
    assert_matches_reference(&padded[64..]);
}

#[test]
fn test_expand_overwrites_previous_block() {
    let mut schedule = MessageSchedule::new();
    schedule.expand(&[0xffu8; 64]);
    schedule.expand(&[0x00u8; 64]);

    for j in 0..W_LEN {
        assert_eq!(schedule.word(j).as_u32(), 0, "W[{j}]");
    }
}
