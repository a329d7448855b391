//! Helpers shared by the integration tests.
#![allow(dead_code)]

use rand_chacha::rand_core::SeedableRng;
use tss::Share;

/// Lexicographic k-of-n combinations without repetition.
///
/// Yields index vectors `[0, 1, .., k-1]`, `[0, 1, .., k]`, ... up to
/// `[n-k, .., n-1]`. `k == 0` yields nothing, as does `k > n`.
pub struct Combinations {
    indices: Vec<usize>,
    n: usize,
    started: bool,
    done: bool,
}

impl Combinations {
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            indices: (0..k).collect(),
            n,
            started: false,
            done: k == 0 || k > n,
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.indices.clone());
        }

        let k = self.indices.len();
        // rightmost position that can still move right
        let Some(pos) = (0..k).rev().find(|&i| self.indices[i] < self.n - k + i) else {
            self.done = true;
            return None;
        };

        self.indices[pos] += 1;
        for i in pos + 1..k {
            self.indices[i] = self.indices[i - 1] + 1;
        }
        Some(self.indices.clone())
    }
}

pub fn rng(seed: u64) -> rand_chacha::ChaCha8Rng {
    rand_chacha::ChaCha8Rng::seed_from_u64(seed)
}

pub fn random_secret(len: usize, seed: u64) -> Vec<u8> {
    use rand_chacha::rand_core::RngCore;

    let mut secret = vec![0u8; len];
    rng(seed ^ 0x5eed).fill_bytes(&mut secret);
    secret
}

pub fn pick(shares: &[Share], picks: &[usize]) -> Vec<Share> {
    picks.iter().map(|&i| shares[i].clone()).collect()
}

pub fn binomial(n: usize, k: usize) -> usize {
    (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
}

