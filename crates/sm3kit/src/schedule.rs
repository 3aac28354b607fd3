// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Message expansion per GB/T 32905-2016 Section 5.3.2

use zeroize::Zeroize;

use crate::consts::{BLOCK_LEN, ROUNDS, W_LEN};
use crate::word32::Word32;

/// Expanded words of a single block.
///
/// Refilled by [`MessageSchedule::expand`] for every block and wiped once
/// the block has been compressed.
#[derive(Zeroize)]
pub(crate) struct MessageSchedule {
    // W[0..67]
    w: [Word32; W_LEN],

    // W'[0..63]
    w1: [Word32; ROUNDS],

    // Temporaries
    scratch: Word32,
    w_tmp: Word32,
    tmp_word: [u8; 4],
}

impl MessageSchedule {
    pub fn new() -> Self {
        Self {
            w: core::array::from_fn(|_| Word32::zero()),
            w1: core::array::from_fn(|_| Word32::zero()),
            scratch: Word32::zero(),
            w_tmp: Word32::zero(),
            tmp_word: [0u8; 4],
        }
    }

    /// Expand one 64-byte block into W and W'
    pub fn expand(&mut self, block: &[u8]) {
        debug_assert_eq!(block.len(), BLOCK_LEN);

        // W[0..15] from block (big-endian)
        for j in 0..16 {
            self.tmp_word.copy_from_slice(&block[j * 4..(j + 1) * 4]);
            self.w[j].fill_with_be_bytes(&mut self.tmp_word);
        }

        // W[j] = P1(W[j-16] ⊕ W[j-9] ⊕ (W[j-3] <<< 15)) ⊕ (W[j-13] <<< 7) ⊕ W[j-6]
        for j in 16..W_LEN {
            // scratch = W[j-16] ⊕ W[j-9] ⊕ (W[j-3] <<< 15)
            self.scratch.copy_from(&self.w[j - 3]);
            self.scratch.rotate_left_assign(15);
            self.scratch.xor_assign(&self.w[j - 16]);
            self.scratch.xor_assign(&self.w[j - 9]);

            // W[j] = P1(scratch)
            self.w_tmp.copy_from(&self.scratch);
            Word32::set_p1(&mut self.scratch, &self.w_tmp);
            self.w[j].copy_from(&self.scratch);
            self.scratch.zeroize();

            // ⊕ (W[j-13] <<< 7)
            self.w_tmp.copy_from(&self.w[j - 13]);
            self.w_tmp.rotate_left_assign(7);
            self.w[j].xor_assign(&self.w_tmp);

            // ⊕ W[j-6]
            self.w_tmp.copy_from(&self.w[j - 6]);
            self.w[j].xor_assign(&self.w_tmp);
            self.w_tmp.zeroize();
        }

        // W'[j] = W[j] ⊕ W[j+4]
        for (j, w1) in self.w1.iter_mut().enumerate() {
            w1.copy_from(&self.w[j]);
            w1.xor_assign(&self.w[j + 4]);
        }
    }

    /// W[j]
    #[inline(always)]
    pub fn word(&self, j: usize) -> &Word32 {
        &self.w[j]
    }

    /// W'[j]
    #[inline(always)]
    pub fn derived_word(&self, j: usize) -> &Word32 {
        &self.w1[j]
    }
}

impl Drop for MessageSchedule {
    fn drop(&mut self) {
        self.zeroize();
    }
}
