// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod concurrency_tests {
    use std::thread;

    use sm3kit::hash;

    #[test]
    fn test_parallel_calls_are_independent() {
        let inputs: Vec<String> = (0..16).map(|i| "abc".repeat(i * 7)).collect();
        let sequential: Vec<String> = inputs.iter().map(|s| hash(s)).collect();

        let handles: Vec<_> = inputs
            .into_iter()
            .map(|s| thread::spawn(move || hash(&s)))
            .collect();

        let parallel: Vec<String> = handles
            .into_iter()
            .map(|h| h.join().expect("Failed to join hashing thread"))
            .collect();

        assert_eq!(parallel, sequential);
    }
}
