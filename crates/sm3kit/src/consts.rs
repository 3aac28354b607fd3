// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// SM3 output size in bytes
pub const HASH_LEN: usize = 32;

/// SM3 block size in bytes
pub const BLOCK_LEN: usize = 64;

/// Length of the hexadecimal digest rendering
pub const HEX_LEN: usize = 2 * HASH_LEN;

/// Size of the trailing big-endian bit-length field appended by padding
pub const LENGTH_FIELD_LEN: usize = 8;

/// Initial chaining value IV per GB/T 32905-2016 Section 4.1
pub const IV: [u32; 8] = [
    0x7380166f, 0x4914b2b9, 0x172442d7, 0xda8a0600, 0xa96f30bc, 0x163138aa, 0xe38dee4d, 0xb0fb0e4e,
];

/// Round constant T(j) for rounds 0..=15
pub(crate) const T_LOW: u32 = 0x79cc4519;

/// Round constant T(j) for rounds 16..=63
pub(crate) const T_HIGH: u32 = 0x7a879d8a;

/// Number of expanded words W[0..68]
pub(crate) const W_LEN: usize = 68;

/// Number of derived words W'[0..64], one per round
pub(crate) const ROUNDS: usize = 64;
