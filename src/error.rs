//! Error types for huffzip.
//!
//! Every failure in the library is reported as a [`HuffError`]. Nothing is retried and nothing is
//! swallowed: the caller (normally `main`) decides how to tell the user and which exit status to use.

use std::io;

use thiserror::Error;

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, HuffError>;

#[derive(Debug, Error)]
pub enum HuffError {
    /// A tree was requested for a frequency table with no symbols in it.
    #[error("cannot build a Huffman tree from an empty frequency table")]
    EmptyAlphabet,

    /// The symbol has no entry in the code table used for encoding.
    #[error("symbol 0x{symbol:02x} has no entry in the code table")]
    UnknownSymbol { symbol: u8 },

    /// The bitstream ran out part way through a code.
    #[error("bitstream ends inside a code that starts at bit {offset}")]
    TruncatedCode { offset: usize },

    /// A bit tried to descend below a leaf (only possible with a single-symbol tree).
    #[error("bit {offset} does not belong to any code in the tree")]
    InvalidCode { offset: usize },

    /// The container ended before its header was complete.
    #[error("container header truncated: {needed}-byte field at offset {offset} runs past the end")]
    TruncatedHeader { needed: usize, offset: usize },

    /// The container payload is shorter than its frequency table requires.
    #[error("container payload truncated: expected {expected} bytes, found {actual}")]
    TruncatedPayload { expected: usize, actual: usize },

    /// The container header is complete but not self-consistent.
    #[error("invalid container header: {0}")]
    InvalidHeader(String),

    /// A symbol occurs more often than a 4-byte frequency can record.
    #[error("frequency of symbol 0x{symbol:02x} does not fit in 32 bits")]
    FrequencyOverflow { symbol: u8 },

    /// Decoding produced a different number of symbols than the frequency table promised.
    #[error("decoded {actual} symbols, frequency table promises {expected}")]
    LengthMismatch { expected: u64, actual: u64 },

    /// Round trip check found that the restored data differs from the original.
    #[error("round trip verification failed for {0}")]
    VerifyFailed(String),

    /// Storage access failed. The only error category surfaced from the filesystem.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl HuffError {
    /// Wrap a storage failure together with the path that caused it.
    pub fn io(path: impl Into<String>, source: io::Error) -> Self {
        HuffError::Io {
            path: path.into(),
            source,
        }
    }
}
