use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use thiserror::Error;

use super::bitreader::BitReader;

/// An ordered sequence of bits, packed 8 per byte with the most significant bit first.
///
/// Bits past `len` in the last byte are always zero, so the packed bytes can be written to a
/// container as is.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BitSequence {
    /// Packed bits.
    bytes: Vec<u8>,
    /// Count of valid bits in `bytes`.
    len: usize,
}

impl BitSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty sequence with room for `bits` bits.
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bytes: Vec::with_capacity((bits + 7) / 8),
            len: 0,
        }
    }

    /// Build a sequence from packed bytes, keeping only the first `len` bits.
    /// Returns None if `bytes` is too short to hold `len` bits.
    pub fn from_packed(mut bytes: Vec<u8>, len: usize) -> Option<Self> {
        let needed = (len + 7) / 8;
        if needed > bytes.len() {
            return None;
        }
        bytes.truncate(needed);
        let padding = (8 - len % 8) % 8;
        if let Some(last) = bytes.last_mut() {
            *last &= 0xff << padding;
        }
        Some(Self { bytes, len })
    }

    /// Trusted constructor for packers that already zero their padding.
    pub(crate) fn from_parts(bytes: Vec<u8>, len: usize) -> Self {
        debug_assert_eq!(bytes.len(), (len + 7) / 8);
        Self { bytes, len }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of zero bits needed to round the sequence up to a whole byte (0-7).
    pub fn padding(&self) -> u8 {
        ((8 - self.len % 8) % 8) as u8
    }

    /// The packed bytes, last byte zero padded.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Append one bit.
    pub fn push(&mut self, bit: bool) {
        let shift = 7 - (self.len % 8);
        if shift == 7 {
            self.bytes.push(0);
        }
        if bit {
            self.bytes[self.len / 8] |= 1 << shift;
        }
        self.len += 1;
    }

    /// Return the bit at `index`, or None if it is past the end.
    pub fn get(&self, index: usize) -> Option<bool> {
        if index >= self.len {
            return None;
        }
        Some(self.bytes[index / 8] & (0x80 >> (index % 8)) != 0)
    }

    /// Iterate over the bits in order.
    pub fn iter(&self) -> BitReader<'_> {
        BitReader::with_limit(&self.bytes, self.len)
    }

    /// True if every bit of `self` matches the start of `other`.
    pub fn is_prefix_of(&self, other: &BitSequence) -> bool {
        self.len <= other.len && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<'a> IntoIterator for &'a BitSequence {
    type Item = bool;
    type IntoIter = BitReader<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<bool> for BitSequence {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut bits = BitSequence::new();
        iter.into_iter().for_each(|bit| bits.push(bit));
        bits
    }
}

/// Shows the bits as a string of '0' and '1'.
impl Display for BitSequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// A character other than '0' or '1' in a textual bit string.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid bit character {found:?} at position {position}")]
pub struct ParseBitsError {
    pub position: usize,
    pub found: char,
}

impl FromStr for BitSequence {
    type Err = ParseBitsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bits = BitSequence::with_capacity(s.len());
        for (position, found) in s.chars().enumerate() {
            match found {
                '0' => bits.push(false),
                '1' => bits.push(true),
                _ => return Err(ParseBitsError { position, found }),
            }
        }
        Ok(bits)
    }
}
