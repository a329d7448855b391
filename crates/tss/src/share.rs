//! Share representation and its byte layout.
use core::ops::Deref;

use zeroize::Zeroize;

use super::gf256::GF256;
use super::{Result, TssError};

/// A single share of a secret.
///
/// On the wire a share is `[index][payload...]`: the index is the public
/// x-coordinate and payload byte `j` is the evaluation of the polynomial
/// hiding secret byte `j`. The secret length is implied by the share length.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Share {
    /// The x-coordinate (evaluation point) for this share
    pub x: GF256,
    /// The y-coordinates, one per secret byte
    pub y: Vec<GF256>,
}

impl Share {
    /// Creates a new share with the given x-coordinate and y-values.
    pub fn new(x: GF256, y: Vec<GF256>) -> Self {
        Self { x, y }
    }

    /// Returns the share index (its x-coordinate).
    pub fn index(&self) -> u8 {
        self.x.0
    }

    /// Returns the payload, one field element per secret byte.
    pub fn payload(&self) -> &[GF256] {
        &self.y
    }

    /// Length of the encoded share: payload plus the index byte.
    pub fn len(&self) -> usize {
        self.y.len() + 1
    }

    /// Returns true if the payload is empty. [`Share::len`] still counts the
    /// index byte, so an empty share has length 1.
    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }

    /// Length of the secret this share encodes.
    pub fn secret_len(&self) -> usize {
        self.y.len()
    }

    /// Serializes this share as `[index, payload...]`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.len());
        bytes.push(self.x.0);
        bytes.extend(self.y.iter().map(|gf| gf.0));
        bytes
    }

    /// Parses a share from its byte layout.
    ///
    /// # Errors
    /// Returns [`TssError::InvalidShare`] if the input is shorter than 2 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        match bytes {
            [index, payload @ ..] if !payload.is_empty() => Ok(Self {
                x: GF256(*index),
                y: payload.iter().copied().map(GF256).collect(),
            }),
            _ => Err(TssError::InvalidShare),
        }
    }
}

impl core::fmt::Display for Share {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:02x}-", self.x.0)?;
        for y in &self.y {
            write!(f, "{}", y)?;
        }
        Ok(())
    }
}

/// Overwrites the index and every payload byte, then empties the payload.
impl Zeroize for Share {
    fn zeroize(&mut self) {
        self.x.zeroize();
        self.y.zeroize();
    }
}

impl TryFrom<&[u8]> for Share {
    type Error = TssError;

    fn try_from(bytes: &[u8]) -> Result<Share> {
        Share::from_bytes(bytes)
    }
}

/// The shares produced by one generation call, or gathered for recovery.
///
/// Order carries no meaning for recovery.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShareSet(Vec<Share>);

impl ShareSet {
    /// Unwraps the underlying vector.
    pub fn into_inner(self) -> Vec<Share> {
        self.0
    }
}

impl From<Vec<Share>> for ShareSet {
    fn from(shares: Vec<Share>) -> Self {
        Self(shares)
    }
}

impl FromIterator<Share> for ShareSet {
    fn from_iter<I: IntoIterator<Item = Share>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Deref for ShareSet {
    type Target = [Share];

    fn deref(&self) -> &[Share] {
        &self.0
    }
}

impl IntoIterator for ShareSet {
    type Item = Share;
    type IntoIter = std::vec::IntoIter<Share>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ShareSet {
    type Item = &'a Share;
    type IntoIter = core::slice::Iter<'a, Share>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
