//! Threshold secret sharing over GF(256).
//!
//! A secret of up to 65534 bytes is split into up to 255 shares so that any
//! `threshold` of them reconstruct it exactly while fewer reveal nothing about
//! it. Each secret byte is hidden by its own random polynomial of degree
//! `threshold - 1`; shares are evaluations of those polynomials at distinct
//! nonzero x-coordinates and recovery is Lagrange interpolation at x = 0.
//!
//! A share is laid out as `[index][payload...]`, one payload byte per secret
//! byte. There is no checksum or version byte: framing and storage are left to
//! the caller.
//!
//! ```
//! # fn main() -> tss::Result<()> {
//! let secret = b"correct horse battery staple";
//! let shares = tss::generate(secret, 5, 3)?;
//!
//! let recovered = tss::recover(&[shares[0].clone(), shares[1].clone(), shares[4].clone()])?;
//! assert_eq!(recovered.as_slice(), secret);
//! # Ok(())
//! # }
//! ```

pub mod gf256;
pub mod poly;
mod share;

use gf256::GF256;
use hashbrown::HashSet;
use log::{debug, trace};
use rand::{CryptoRng, RngCore};
use thiserror::Error;
use zeroize::Zeroizing;

pub use share::{Share, ShareSet};

/// Maximum secret length, in bytes.
pub const MAX_SECRET_LEN: usize = 65534;

/// Maximum encoded share length: the secret plus the index byte.
pub const MAX_SHARE_LEN: usize = MAX_SECRET_LEN + 1;

/// Minimum secret length enforced by [`Policy::strict`].
pub const STRICT_MIN_SECRET_LEN: usize = 32;

/// Minimum number of shares produced or accepted for recovery.
pub const MIN_SHARES: usize = 2;

/// Maximum number of shares; every nonzero byte is one x-coordinate.
pub const MAX_SHARES: usize = 255;

/// Smallest accepted threshold.
pub const MIN_THRESHOLD: usize = 2;

/// Errors that can occur during secret sharing operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TssError {
    /// The secret is empty
    #[error("some secret is required")]
    SecretRequired,
    /// The secret is shorter than the policy minimum
    #[error("secret too short")]
    SecretTooShort,
    /// The secret is longer than 65534 bytes
    #[error("secret too large")]
    SecretTooLarge,
    /// Fewer than 2 shares requested or supplied
    #[error("too few shares")]
    TooFewShares,
    /// More than 255 shares requested or supplied
    #[error("too many shares")]
    TooManyShares,
    /// Threshold below 2 or above the share count
    #[error("invalid threshold")]
    InvalidThreshold,
    /// A share is malformed, inconsistent with the others, or repeats an index
    #[error("invalid share")]
    InvalidShare,
    /// The random source failed while sampling coefficients
    #[error("entropy source failure: {0}")]
    EntropySourceFailure(String),
}

pub type Result<T> = std::result::Result<T, TssError>;

/// A recovered secret. The bytes are wiped when it is dropped.
pub type Secret = Zeroizing<Vec<u8>>;

/// Length limits applied by generation and recovery.
///
/// The only configurable bound is the minimum secret length. The default
/// accepts any non-empty secret; [`Policy::strict`] requires 32 bytes, which
/// also raises the minimum share length accepted by recovery to 33.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Policy {
    min_secret_len: usize,
}

impl Policy {
    /// Creates a policy with the given minimum secret length, clamped to
    /// `1..=MAX_SECRET_LEN`.
    pub const fn new(min_secret_len: usize) -> Self {
        let min_secret_len = if min_secret_len == 0 {
            1
        } else if min_secret_len > MAX_SECRET_LEN {
            MAX_SECRET_LEN
        } else {
            min_secret_len
        };
        Self { min_secret_len }
    }

    /// Policy enforcing a 32-byte minimum secret.
    pub const fn strict() -> Self {
        Self::new(STRICT_MIN_SECRET_LEN)
    }

    /// Minimum secret length in bytes.
    pub const fn min_secret_len(&self) -> usize {
        self.min_secret_len
    }

    /// Minimum encoded share length accepted by recovery.
    pub const fn min_share_len(&self) -> usize {
        self.min_secret_len + 1
    }
}

impl Default for Policy {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Splits and recovers secrets under a [`Policy`].
///
/// Holds no mutable state: one value can serve any number of concurrent
/// calls.
///
/// # Examples
/// ```
/// use tss::{Policy, Tss, TssError};
///
/// let tss = Tss::new(Policy::strict());
/// assert_eq!(tss.generate(b"too short", 3, 2), Err(TssError::SecretTooShort));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tss {
    policy: Policy,
}

impl Tss {
    /// Creates a new instance applying `policy`.
    pub const fn new(policy: Policy) -> Self {
        Self { policy }
    }

    /// Returns the policy in use.
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Splits `secret` into `shares_count` shares, any `threshold` of which
    /// recover it.
    ///
    /// Share `i` (0-based) gets index `i + 1`. Every secret byte gets its own
    /// polynomial with `threshold - 1` coefficients drawn from `rng`.
    ///
    /// # Errors
    /// Checked in this order, first failure wins:
    /// * `TssError::SecretRequired` - the secret is empty
    /// * `TssError::SecretTooShort` - shorter than the policy minimum
    /// * `TssError::SecretTooLarge` - longer than [`MAX_SECRET_LEN`]
    /// * `TssError::TooFewShares` - `shares_count < 2`
    /// * `TssError::TooManyShares` - `shares_count > 255`
    /// * `TssError::InvalidThreshold` - `threshold > shares_count` or `threshold < 2`
    /// * `TssError::EntropySourceFailure` - `rng` failed; no shares are returned
    ///
    /// # Examples
    /// ```
    /// use tss::Tss;
    /// use rand_chacha::rand_core::SeedableRng;
    ///
    /// let mut rng = rand_chacha::ChaCha20Rng::from_seed([0x90; 32]);
    /// let shares = Tss::default()
    ///     .generate_with_rng(b"Hello world!", 5, 3, &mut rng)
    ///     .unwrap();
    /// assert_eq!(shares.len(), 5);
    /// assert_eq!(shares[0].len(), 13);
    /// ```
    pub fn generate_with_rng<R>(
        &self,
        secret: &[u8],
        shares_count: usize,
        threshold: usize,
        rng: &mut R,
    ) -> Result<ShareSet>
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        self.check_generate(secret, shares_count, threshold)?;
        debug!(
            "generating {} shares with threshold {} for a {}-byte secret",
            shares_count,
            threshold,
            secret.len()
        );

        // `shares_count <= MAX_SHARES`, so every index fits in a nonzero byte.
        // Wiped on drop unless generation completes and hands the shares out.
        let mut shares: Zeroizing<Vec<Share>> = Zeroizing::new(
            (1..=shares_count as u8)
                .map(|x| Share::new(GF256(x), vec![GF256::ZERO; secret.len()]))
                .collect(),
        );

        let mut coefficients = Zeroizing::new(vec![0u8; threshold]);
        for (offset, &byte) in secret.iter().enumerate() {
            poly::random_polynomial(byte, &mut coefficients, &mut *rng).map_err(|err| {
                debug!("random source failed at offset {}: {}", offset, err);
                TssError::EntropySourceFailure(err.to_string())
            })?;

            for share in shares.iter_mut() {
                share.y[offset] = poly::evaluate_polynomial(&coefficients, share.x);
            }
        }

        Ok(ShareSet::from(core::mem::take(&mut *shares)))
    }

    /// Splits `secret` using the operating system's random source.
    ///
    /// See [`Tss::generate_with_rng`] for the validation rules.
    #[cfg(feature = "std")]
    pub fn generate(&self, secret: &[u8], shares_count: usize, threshold: usize) -> Result<ShareSet> {
        self.generate_with_rng(secret, shares_count, threshold, &mut rand::rngs::OsRng)
    }

    /// Recovers the secret from a set of shares.
    ///
    /// The shares may come in any order. The result is exact when at least
    /// `threshold` shares of one generation are supplied; with fewer the
    /// output is unrelated to the secret and no error can tell.
    ///
    /// # Errors
    /// Checked in this order, first failure wins:
    /// * `TssError::TooFewShares` - fewer than 2 shares
    /// * `TssError::TooManyShares` - more than 255 shares
    /// * `TssError::InvalidShare` - the first share's length is outside
    ///   `policy.min_share_len()..=MAX_SHARE_LEN`, another share has a
    ///   different length, an index is zero, or an index repeats
    ///
    /// # Examples
    /// ```
    /// use tss::Share;
    ///
    /// let shares = [
    ///     Share::from_bytes(&[0x01, 0xb9, 0xfa, 0x07, 0xe1, 0x85]).unwrap(),
    ///     Share::from_bytes(&[0x02, 0xf5, 0x40, 0x9b, 0x45, 0x11]).unwrap(),
    /// ];
    /// let secret = tss::recover(&shares).unwrap();
    /// assert_eq!(secret.as_slice(), b"test\0");
    /// ```
    pub fn recover(&self, shares: &[Share]) -> Result<Secret> {
        self.check_recover(shares)?;

        let secret_len = shares[0].secret_len();
        debug!(
            "recovering a {}-byte secret from {} shares",
            secret_len,
            shares.len()
        );

        let xs = Zeroizing::new(shares.iter().map(|share| share.x).collect::<Vec<_>>());
        let basis = Zeroizing::new(poly::lagrange_basis_at_zero(&xs));
        let mut ys = Zeroizing::new(vec![GF256::ZERO; shares.len()]);

        let mut secret = Zeroizing::new(Vec::with_capacity(secret_len));
        for offset in 0..secret_len {
            for (y, share) in ys.iter_mut().zip(shares) {
                *y = share.y[offset];
            }
            secret.push(poly::combine(&basis, &ys).value());
        }

        Ok(secret)
    }

    fn check_generate(&self, secret: &[u8], shares_count: usize, threshold: usize) -> Result<()> {
        let result = if secret.is_empty() {
            Err(TssError::SecretRequired)
        } else if secret.len() < self.policy.min_secret_len() {
            Err(TssError::SecretTooShort)
        } else if secret.len() > MAX_SECRET_LEN {
            Err(TssError::SecretTooLarge)
        } else if shares_count < MIN_SHARES {
            Err(TssError::TooFewShares)
        } else if shares_count > MAX_SHARES {
            Err(TssError::TooManyShares)
        } else if threshold > shares_count || threshold < MIN_THRESHOLD {
            Err(TssError::InvalidThreshold)
        } else {
            Ok(())
        };

        if let Err(err) = &result {
            trace!(
                "rejected generation (secret {} bytes, {} shares, threshold {}): {}",
                secret.len(),
                shares_count,
                threshold,
                err
            );
        }
        result
    }

    fn check_recover(&self, shares: &[Share]) -> Result<()> {
        if shares.len() < MIN_SHARES {
            return Err(TssError::TooFewShares);
        }
        if shares.len() > MAX_SHARES {
            return Err(TssError::TooManyShares);
        }

        let share_len = shares[0].len();
        if share_len < self.policy.min_share_len() || share_len > MAX_SHARE_LEN {
            trace!("share length {} out of bounds", share_len);
            return Err(TssError::InvalidShare);
        }

        let mut seen = HashSet::with_capacity(shares.len());
        for share in shares {
            if share.len() != share_len {
                trace!(
                    "share {} has length {}, expected {}",
                    share.index(),
                    share.len(),
                    share_len
                );
                return Err(TssError::InvalidShare);
            }
            if share.x.is_zero() {
                trace!("share with index zero");
                return Err(TssError::InvalidShare);
            }
            if !seen.insert(share.index()) {
                trace!("duplicate share index {}", share.index());
                return Err(TssError::InvalidShare);
            }
        }
        Ok(())
    }
}

/// Splits `secret` with the default policy and the operating system's random
/// source. See [`Tss::generate_with_rng`].
#[cfg(feature = "std")]
pub fn generate(secret: &[u8], shares_count: usize, threshold: usize) -> Result<ShareSet> {
    Tss::default().generate(secret, shares_count, threshold)
}

/// Splits `secret` with the default policy and a caller-supplied random
/// source. See [`Tss::generate_with_rng`].
pub fn generate_with_rng<R>(
    secret: &[u8],
    shares_count: usize,
    threshold: usize,
    rng: &mut R,
) -> Result<ShareSet>
where
    R: RngCore + CryptoRng + ?Sized,
{
    Tss::default().generate_with_rng(secret, shares_count, threshold, rng)
}

/// Recovers a secret with the default policy. See [`Tss::recover`].
pub fn recover(shares: &[Share]) -> Result<Secret> {
    Tss::default().recover(shares)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::rand_core::SeedableRng;
    use std::collections::HashSet;

    fn rng(seed: u8) -> rand_chacha::ChaCha8Rng {
        rand_chacha::ChaCha8Rng::from_seed([seed; 32])
    }

    fn split(secret: &[u8], shares_count: usize, threshold: usize, seed: u8) -> ShareSet {
        generate_with_rng(secret, shares_count, threshold, &mut rng(seed)).unwrap()
    }

    /// Random source that always fails.
    struct BrokenRng;

    impl RngCore for BrokenRng {
        fn next_u32(&mut self) -> u32 {
            0
        }

        fn next_u64(&mut self) -> u64 {
            0
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(0)
        }

        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> std::result::Result<(), rand::Error> {
            Err(rand::Error::new(std::io::Error::other("entropy pool drained")))
        }
    }

    impl CryptoRng for BrokenRng {}

    /// Random source that serves `fills_left` requests and then fails.
    struct DrainingRng {
        inner: rand_chacha::ChaCha8Rng,
        fills_left: usize,
    }

    impl DrainingRng {
        fn new(fills_left: usize) -> Self {
            Self {
                inner: rng(3),
                fills_left,
            }
        }
    }

    impl RngCore for DrainingRng {
        fn next_u32(&mut self) -> u32 {
            self.inner.next_u32()
        }

        fn next_u64(&mut self) -> u64 {
            self.inner.next_u64()
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            self.inner.fill_bytes(dest)
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> std::result::Result<(), rand::Error> {
            if self.fills_left == 0 {
                return Err(rand::Error::new(std::io::Error::other("entropy pool drained")));
            }
            self.fills_left -= 1;
            self.inner.try_fill_bytes(dest)
        }
    }

    impl CryptoRng for DrainingRng {}

    #[test]
    fn test_basic_split_and_recover() {
        let secret = b"Hello, threshold sharing!";
        let shares = split(secret, 5, 3, 0x90);

        let recovered = recover(&shares[..3]).unwrap();
        assert_eq!(recovered.as_slice(), secret);
    }

    #[test]
    fn test_generate_validation_order() {
        let mut rng = rng(1);
        let secret = [7u8; 32];

        assert_eq!(
            generate_with_rng(&[], 3, 2, &mut rng),
            Err(TssError::SecretRequired)
        );
        // An empty secret wins over every other problem
        assert_eq!(
            generate_with_rng(&[], 1, 9, &mut rng),
            Err(TssError::SecretRequired)
        );
        assert_eq!(
            generate_with_rng(&vec![0u8; MAX_SECRET_LEN + 1], 1, 1, &mut rng),
            Err(TssError::SecretTooLarge)
        );
        assert_eq!(
            generate_with_rng(&secret, 1, 1, &mut rng),
            Err(TssError::TooFewShares)
        );
        assert_eq!(
            generate_with_rng(&secret, 256, 2, &mut rng),
            Err(TssError::TooManyShares)
        );
        assert_eq!(
            generate_with_rng(&secret, 3, 4, &mut rng),
            Err(TssError::InvalidThreshold)
        );
        assert_eq!(
            generate_with_rng(&secret, 2, 3, &mut rng),
            Err(TssError::InvalidThreshold)
        );
    }

    #[test]
    fn test_threshold_below_two_rejected() {
        let mut rng = rng(2);
        assert_eq!(
            generate_with_rng(&[1u8; 32], 3, 1, &mut rng),
            Err(TssError::InvalidThreshold)
        );
        assert_eq!(
            generate_with_rng(&[1u8; 32], 3, 0, &mut rng),
            Err(TssError::InvalidThreshold)
        );
    }

    #[test]
    fn test_single_byte_secret_with_default_policy() {
        let shares = split(b"X", 2, 2, 3);
        assert_eq!(shares[0].len(), 2);

        let recovered = recover(&shares).unwrap();
        assert_eq!(recovered.as_slice(), b"X");
    }

    #[test]
    fn test_strict_policy() {
        let tss = Tss::new(Policy::strict());
        let mut rng = rng(4);

        assert_eq!(
            tss.generate_with_rng(&[0u8; 31], 3, 2, &mut rng),
            Err(TssError::SecretTooShort)
        );
        assert_eq!(
            tss.generate_with_rng(&[], 3, 2, &mut rng),
            Err(TssError::SecretRequired)
        );

        let shares = tss.generate_with_rng(&[9u8; 32], 3, 2, &mut rng).unwrap();
        assert_eq!(tss.recover(&shares).unwrap().as_slice(), &[9u8; 32]);

        // Shares of a short secret are below the strict recovery bound.
        let short = split(b"short", 3, 2, 5);
        assert_eq!(tss.recover(&short), Err(TssError::InvalidShare));
    }

    #[test]
    fn test_policy_clamping() {
        assert_eq!(Policy::new(0).min_secret_len(), 1);
        assert_eq!(Policy::new(usize::MAX).min_secret_len(), MAX_SECRET_LEN);
        assert_eq!(Policy::default().min_share_len(), 2);
        assert_eq!(Policy::strict().min_share_len(), 33);
    }

    #[test]
    fn test_entropy_failure() {
        let result = generate_with_rng(b"secret", 3, 2, &mut BrokenRng);
        match result {
            Err(TssError::EntropySourceFailure(message)) => {
                assert!(message.contains("entropy pool drained"))
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_entropy_failure_mid_secret() {
        let secret = [0x5au8; 16];

        for fills in [1, 4, 15] {
            let mut rng = DrainingRng::new(fills);
            assert!(matches!(
                generate_with_rng(&secret, 5, 3, &mut rng),
                Err(TssError::EntropySourceFailure(_))
            ));
            assert_eq!(rng.fills_left, 0);
        }

        // One fill per secret byte is all generation needs
        let mut rng = DrainingRng::new(secret.len());
        let shares = generate_with_rng(&secret, 5, 3, &mut rng).unwrap();
        assert_eq!(recover(&shares[1..4]).unwrap().as_slice(), secret);
    }

    #[test]
    fn test_validation_precedes_entropy() {
        assert_eq!(
            generate_with_rng(b"secret", 1, 2, &mut BrokenRng),
            Err(TssError::TooFewShares)
        );
    }

    #[test]
    fn test_recover_errors() {
        let shares = split(&[5u8; 32], 10, 2, 6);

        assert_eq!(recover(&[]), Err(TssError::TooFewShares));
        assert_eq!(recover(&shares[..1]), Err(TssError::TooFewShares));

        let truncated = Share::from_bytes(&shares[1].to_bytes()[..20]).unwrap();
        assert_eq!(
            recover(&[shares[0].clone(), truncated]),
            Err(TssError::InvalidShare)
        );

        let oversized = Share::new(GF256(1), vec![GF256(0); MAX_SHARE_LEN]);
        assert_eq!(
            recover(&[oversized.clone(), oversized]),
            Err(TssError::InvalidShare)
        );

        let many: Vec<Share> = (0..=MAX_SHARES)
            .map(|i| Share::new(GF256(i as u8), vec![GF256(0); 4]))
            .collect();
        assert_eq!(recover(&many), Err(TssError::TooManyShares));
    }

    #[test]
    fn test_empty_payload_rejected() {
        let empty = Share::new(GF256(1), Vec::new());
        assert_eq!(
            recover(&[empty.clone(), empty]),
            Err(TssError::InvalidShare)
        );
    }

    #[test]
    fn test_duplicate_index_rejected() {
        let shares = split(b"duplicate test", 3, 2, 7);

        let duplicated = [shares[0].clone(), shares[1].clone(), shares[0].clone()];
        assert_eq!(recover(&duplicated), Err(TssError::InvalidShare));
    }

    #[test]
    fn test_zero_index_rejected() {
        let shares = split(b"zero index", 3, 2, 8);

        let mut forged = shares[1].clone();
        forged.x = GF256::ZERO;
        assert_eq!(
            recover(&[shares[0].clone(), forged]),
            Err(TssError::InvalidShare)
        );
    }

    #[test]
    fn test_share_structure() {
        let secret = b"structure test";
        let shares = split(secret, 5, 3, 11);

        assert_eq!(shares.len(), 5);
        for (i, share) in shares.iter().enumerate() {
            assert_eq!(share.index() as usize, i + 1);
            assert_eq!(share.len(), secret.len() + 1);
        }

        let indices: HashSet<u8> = shares.iter().map(Share::index).collect();
        assert_eq!(indices.len(), shares.len());
        assert!(!indices.contains(&0));
    }

    #[test]
    fn test_more_than_threshold_shares() {
        let secret = b"more shares than needed";
        let shares = split(secret, 10, 3, 8);

        let recovered = recover(&shares).unwrap();
        assert_eq!(recovered.as_slice(), secret);
    }

    #[test]
    fn test_order_independence() {
        let secret = b"order does not matter";
        let shares = split(secret, 6, 4, 12);

        let picked = [
            shares[5].clone(),
            shares[0].clone(),
            shares[3].clone(),
            shares[2].clone(),
        ];
        assert_eq!(recover(&picked).unwrap().as_slice(), secret);
    }

    #[test]
    fn test_below_threshold_does_not_recover() {
        let secret = [0xa5u8; 64];
        let shares = split(&secret, 5, 3, 13);

        let recovered = recover(&shares[..2]).unwrap();
        assert_ne!(recovered.as_slice(), &secret);
    }

    #[test]
    fn test_maximum_shares_and_threshold() {
        let secret = b"max threshold";
        let shares = split(secret, MAX_SHARES, MAX_SHARES, 6);

        assert_eq!(shares.len(), 255);
        assert_eq!(shares[254].index(), 255);
        assert_eq!(recover(&shares).unwrap().as_slice(), secret);
    }

    #[test]
    fn test_maximum_secret() {
        let secret: Vec<u8> = (0..MAX_SECRET_LEN).map(|i| (i % 251) as u8).collect();
        let shares = split(&secret, 3, 2, 14);

        assert_eq!(shares[0].len(), MAX_SHARE_LEN);
        assert_eq!(*recover(&shares[1..]).unwrap(), secret);
    }

    #[test]
    fn test_all_possible_byte_values() {
        let secret: Vec<u8> = (0..=255).collect();
        let shares = split(&secret, 5, 3, 4);

        assert_eq!(*recover(&shares[2..]).unwrap(), secret);
    }

    #[test]
    fn test_deterministic_with_same_seed() {
        let secret = b"seed test";

        assert_eq!(split(secret, 3, 2, 42), split(secret, 3, 2, 42));
        assert_ne!(split(secret, 3, 2, 42), split(secret, 3, 2, 43));
    }

    #[test]
    fn test_os_rng_generation() {
        let secret = b"fresh randomness";

        let first = generate(secret, 5, 3).unwrap();
        let second = generate(secret, 5, 3).unwrap();
        assert_ne!(first[0].payload(), second[0].payload());

        assert_eq!(recover(&first[..3]).unwrap().as_slice(), secret);
        assert_eq!(recover(&second[2..]).unwrap().as_slice(), secret);
    }

    #[test]
    fn test_inputs_not_mutated() {
        let secret = b"leave my bytes alone".to_vec();
        let before = secret.clone();
        let shares = split(&secret, 4, 3, 15);
        assert_eq!(secret, before);

        let snapshot = shares.clone();
        let first = recover(&shares).unwrap();
        let second = recover(&shares).unwrap();
        assert_eq!(first, second);
        assert_eq!(shares, snapshot);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(TssError::SecretRequired.to_string(), "some secret is required");
        assert_eq!(TssError::InvalidShare.to_string(), "invalid share");
        assert_eq!(
            TssError::EntropySourceFailure("boom".into()).to_string(),
            "entropy source failure: boom"
        );
    }
}
