// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SM3 compression and chaining per GB/T 32905-2016 Section 5.3

use alloc::vec::Vec;

use zeroize::{Zeroize, Zeroizing};

use crate::consts::{BLOCK_LEN, HASH_LEN, IV, ROUNDS, T_HIGH, T_LOW};
use crate::pad::pad_into;
use crate::schedule::MessageSchedule;
use crate::word32::Word32;

// Register positions in the working variables
const A: usize = 0;
const B: usize = 1;
const C: usize = 2;
const D: usize = 3;
const E: usize = 4;
const F: usize = 5;
const G: usize = 6;
const H: usize = 7;

/// T(j) <<< (j mod 32)
#[inline(always)]
pub(crate) const fn rotated_round_constant(j: usize) -> u32 {
    let t = if j < 16 { T_LOW } else { T_HIGH };
    t.rotate_left((j % 32) as u32)
}

/// SM3 one-shot state per GB/T 32905-2016 Section 5
///
/// Lives for exactly one hash call. All sensitive working variables live
/// in the struct for guaranteed zeroization.
#[derive(Zeroize)]
pub(crate) struct Sm3State {
    // Chaining value V(i)
    v: [Word32; 8],

    // Working registers A..H
    wv: [Word32; 8],

    // Per-block W / W'
    schedule: MessageSchedule,

    // Round temporaries
    ss1: Word32,
    ss2: Word32,
    tt1: Word32,
    tt2: Word32,
    scratch: Word32,
    w_tmp: Word32,

    tmp_word: [u8; 4],
}

impl Sm3State {
    /// Create new SM3 state initialized with IV
    pub fn new() -> Self {
        Self {
            v: IV.map(Word32::new),
            wv: core::array::from_fn(|_| Word32::zero()),
            schedule: MessageSchedule::new(),
            ss1: Word32::zero(),
            ss2: Word32::zero(),
            tt1: Word32::zero(),
            tt2: Word32::zero(),
            scratch: Word32::zero(),
            w_tmp: Word32::zero(),
            tmp_word: [0u8; 4],
        }
    }

    /// SM3 compression function CF (single block)
    ///
    /// Updates chaining value `v` with a single 512-bit message block.
    ///
    /// # Arguments
    /// * `v` - Chaining value (8 × u32, input/output)
    /// * `block` - Message block (64 bytes)
    #[cfg(test)]
    pub fn compress_block(&mut self, v: &mut [u32; 8], block: &[u8; BLOCK_LEN]) {
        for (dst, src) in self.v.iter_mut().zip(v.iter()) {
            dst.zeroize();
            *dst = Word32::new(*src);
        }

        self.compress(block);

        for (i, word) in self.v.iter_mut().enumerate() {
            v[i] = word.as_u32();
            word.zeroize();
        }
    }

    /// V(i+1) = CF(V(i), block)
    fn compress(&mut self, block: &[u8]) {
        self.schedule.expand(block);

        // ABCDEFGH = V(i)
        for (wv, v) in self.wv.iter_mut().zip(self.v.iter()) {
            wv.copy_from(v);
        }

        for j in 0..ROUNDS {
            // scratch = A <<< 12
            self.scratch.copy_from(&self.wv[A]);
            self.scratch.rotate_left_assign(12);

            // SS1 = ((A <<< 12) + E + (T(j) <<< j)) <<< 7
            self.ss1.copy_from(&self.scratch);
            self.ss1.wrapping_add_assign(&self.wv[E]);
            self.ss1.wrapping_add_assign_val(rotated_round_constant(j));
            self.ss1.rotate_left_assign(7);

            // SS2 = SS1 ⊕ (A <<< 12)
            self.ss2.copy_from(&self.ss1);
            self.ss2.xor_assign(&self.scratch);
            self.scratch.zeroize();

            // TT1 = FF(A,B,C) + D + SS2 + W'[j]
            Word32::set_ff(&mut self.tt1, j, &self.wv[A], &self.wv[B], &self.wv[C]);
            self.tt1.wrapping_add_assign(&self.wv[D]);
            self.tt1.wrapping_add_assign(&self.ss2);
            self.tt1.wrapping_add_assign(self.schedule.derived_word(j));

            // TT2 = GG(E,F,G) + H + SS1 + W[j]
            Word32::set_gg(&mut self.tt2, j, &self.wv[E], &self.wv[F], &self.wv[G]);
            self.tt2.wrapping_add_assign(&self.wv[H]);
            self.tt2.wrapping_add_assign(&self.ss1);
            self.tt2.wrapping_add_assign(self.schedule.word(j));

            self.ss1.zeroize();
            self.ss2.zeroize();

            // D = C, C = B <<< 9, B = A, A = TT1
            self.w_tmp.copy_from(&self.wv[C]);
            self.wv[D].copy_from(&self.w_tmp);

            self.w_tmp.copy_from(&self.wv[B]);
            self.w_tmp.rotate_left_assign(9);
            self.wv[C].copy_from(&self.w_tmp);

            self.w_tmp.copy_from(&self.wv[A]);
            self.wv[B].copy_from(&self.w_tmp);

            self.wv[A].copy_from(&self.tt1);

            // H = G, G = F <<< 19, F = E, E = P0(TT2)
            self.w_tmp.copy_from(&self.wv[G]);
            self.wv[H].copy_from(&self.w_tmp);

            self.w_tmp.copy_from(&self.wv[F]);
            self.w_tmp.rotate_left_assign(19);
            self.wv[G].copy_from(&self.w_tmp);

            self.w_tmp.copy_from(&self.wv[E]);
            self.wv[F].copy_from(&self.w_tmp);

            Word32::set_p0(&mut self.wv[E], &self.tt2);

            // Zeroize temporaries
            self.w_tmp.zeroize();
            self.tt1.zeroize();
            self.tt2.zeroize();
        }

        // V(i+1) = ABCDEFGH ⊕ V(i)
        for (v, wv) in self.v.iter_mut().zip(self.wv.iter_mut()) {
            v.xor_assign(wv);
            wv.zeroize();
        }

        // W / W' do not outlive the block
        self.schedule.zeroize();
    }

    /// Compress every block of an already padded message
    fn absorb_padded(&mut self, padded: &[u8]) {
        debug_assert_eq!(padded.len() % BLOCK_LEN, 0);

        for block in padded.chunks_exact(BLOCK_LEN) {
            self.compress(block);
        }
    }

    /// Output V(n) as 32 big-endian bytes, zeroizing the chaining value
    fn export(&mut self, out: &mut [u8; HASH_LEN]) {
        for (i, word) in self.v.iter_mut().enumerate() {
            word.export_as_be_bytes(&mut self.tmp_word);
            out[i * 4..(i + 1) * 4].copy_from_slice(&self.tmp_word);
        }
        self.tmp_word.zeroize();
    }

    /// Hash complete message: pad, compress all blocks, output digest
    pub fn hash(&mut self, message: &[u8], out: &mut [u8; HASH_LEN]) {
        let mut padded: Zeroizing<Vec<u8>> = Zeroizing::new(Vec::new());
        pad_into(message, &mut padded);

        log::trace!(
            "sm3: hashing {} bytes in {} blocks",
            message.len(),
            padded.len() / BLOCK_LEN
        );

        self.absorb_padded(&padded);
        self.export(out);
        self.zeroize();
    }
}

impl Drop for Sm3State {
    fn drop(&mut self) {
        self.zeroize();
    }
}
