// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Word32 - 32-bit word wrapper with guaranteed zeroization on drop.
//!
//! All operations are in-place to avoid stack temporaries.
//! SM3 functions use internal temporaries that are zeroized before return.

use zeroize::Zeroize;

/// 32-bit word wrapper with guaranteed zeroization.
///
/// - `#[repr(transparent)]` ensures same layout as u32
/// - Drop asserts zeroized (debug) then zeroizes (safety net)
/// - All operations are `_assign` variants for in-place mutation
#[derive(Default)]
#[repr(transparent)]
pub(crate) struct Word32(u32);

impl Word32 {
    /// Create new Word32 with given value
    #[inline(always)]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Create zero Word32
    #[inline(always)]
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Copy value from another Word32
    #[inline(always)]
    pub fn copy_from(&mut self, src: &Word32) {
        self.0 = src.0;
    }

    /// Fill word with big-endian bytes, zeroizing source bytes
    #[inline(always)]
    pub fn fill_with_be_bytes(&mut self, bytes: &mut [u8; 4]) {
        self.0 = u32::from_be_bytes(*bytes);
        bytes.zeroize();
    }

    /// Export word as big-endian bytes, zeroizing self
    #[inline(always)]
    pub fn export_as_be_bytes(&mut self, bytes: &mut [u8; 4]) {
        *bytes = self.0.to_be_bytes();
        self.0.zeroize();
    }

    /// True once the word holds zero
    #[inline(always)]
    pub fn is_zeroized(&self) -> bool {
        self.0 == 0
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // Arithmetic operations (in-place, modulo 2^32)
    // ═══════════════════════════════════════════════════════════════════════════

    /// self += rhs (wrapping)
    #[inline(always)]
    pub fn wrapping_add_assign(&mut self, rhs: &Word32) {
        self.0 = self.0.wrapping_add(rhs.0);
    }

    /// self += rhs (wrapping, raw value)
    #[inline(always)]
    pub fn wrapping_add_assign_val(&mut self, rhs: u32) {
        self.0 = self.0.wrapping_add(rhs);
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // Bitwise operations (in-place)
    // ═══════════════════════════════════════════════════════════════════════════

    /// self ^= rhs
    #[inline(always)]
    pub fn xor_assign(&mut self, rhs: &Word32) {
        self.0 ^= rhs.0;
    }

    /// self &= rhs
    #[inline(always)]
    pub fn and_assign(&mut self, rhs: &Word32) {
        self.0 &= rhs.0;
    }

    /// self |= rhs
    #[inline(always)]
    pub fn or_assign(&mut self, rhs: &Word32) {
        self.0 |= rhs.0;
    }

    /// self = !self
    #[inline(always)]
    pub fn not_assign(&mut self) {
        self.0 = !self.0;
    }

    /// self = self.rotate_left(n)
    ///
    /// `n` is taken modulo 32, so round-indexed rotations need no masking.
    #[inline(always)]
    pub fn rotate_left_assign(&mut self, n: u32) {
        self.0 = self.0.rotate_left(n);
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // SM3 functions per GB/T 32905-2016 Section 4.3 and 4.4
    // Internal temporaries are zeroized before return.
    // ═══════════════════════════════════════════════════════════════════════════

    /// P0(x) = x ⊕ (x <<< 9) ⊕ (x <<< 17)
    #[inline(always)]
    pub fn set_p0(out: &mut Word32, x: &Word32) {
        Self::set_permutation(out, x, 9, 17);
    }

    /// P1(x) = x ⊕ (x <<< 15) ⊕ (x <<< 23)
    #[inline(always)]
    pub fn set_p1(out: &mut Word32, x: &Word32) {
        Self::set_permutation(out, x, 15, 23);
    }

    /// out = x ⊕ (x <<< r1) ⊕ (x <<< r2)
    #[inline(always)]
    fn set_permutation(out: &mut Word32, x: &Word32, r1: u32, r2: u32) {
        let mut v = Word32::zero();
        v.copy_from(x);

        out.copy_from(x);

        v.rotate_left_assign(r1);
        out.xor_assign(&v);

        // r2 > r1, continue rotating from x <<< r1
        v.rotate_left_assign(r2 - r1);
        out.xor_assign(&v);

        v.zeroize();
    }

    /// x ⊕ y ⊕ z, the round 0..=15 form of both FF and GG
    #[inline(always)]
    fn set_parity(out: &mut Word32, x: &Word32, y: &Word32, z: &Word32) {
        out.copy_from(x);
        out.xor_assign(y);
        out.xor_assign(z);
    }

    /// FF(j; x,y,z) = x ⊕ y ⊕ z for j ≤ 15, else (x ∧ y) ∨ (x ∧ z) ∨ (y ∧ z)
    #[inline(always)]
    pub fn set_ff(out: &mut Word32, round: usize, x: &Word32, y: &Word32, z: &Word32) {
        if round < 16 {
            Self::set_parity(out, x, y, z);
            return;
        }

        // xy = x & y
        let mut xy = Word32::zero();
        xy.copy_from(x);
        xy.and_assign(y);

        // xz = x & z
        let mut xz = Word32::zero();
        xz.copy_from(x);
        xz.and_assign(z);

        // out = y & z | xy | xz
        out.copy_from(y);
        out.and_assign(z);
        out.or_assign(&xy);
        out.or_assign(&xz);

        // Zeroize temporaries before drop
        xy.zeroize();
        xz.zeroize();
    }

    /// GG(j; x,y,z) = x ⊕ y ⊕ z for j ≤ 15, else (x ∧ y) ∨ (¬x ∧ z)
    #[inline(always)]
    pub fn set_gg(out: &mut Word32, round: usize, x: &Word32, y: &Word32, z: &Word32) {
        if round < 16 {
            Self::set_parity(out, x, y, z);
            return;
        }

        // not_x_z = !x & z
        let mut not_x_z = Word32::zero();
        not_x_z.copy_from(x);
        not_x_z.not_assign();
        not_x_z.and_assign(z);

        // out = (x & y) | (!x & z)
        out.copy_from(x);
        out.and_assign(y);
        out.or_assign(&not_x_z);

        // Zeroize temporaries before drop
        not_x_z.zeroize();
    }

    /// Get inner u32 value for testing/assertions only
    #[cfg(test)]
    #[inline(always)]
    pub(crate) fn as_u32(&self) -> u32 {
        self.0
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Zeroization traits
// ═══════════════════════════════════════════════════════════════════════════════

impl Zeroize for Word32 {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl Drop for Word32 {
    fn drop(&mut self) {
        // Debug: assert was properly zeroized before drop
        debug_assert!(self.is_zeroized(), "Word32 dropped without zeroization");
        // Safety net: zeroize anyway
        self.zeroize();
    }
}
