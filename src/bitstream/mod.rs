//! The bitstream module forms the bit-level I/O subsystem for huffzip.
//!
//! Huffman codes are not byte aligned, so everything between the code table and the container is
//! expressed as a [`BitSequence`]: an exact count of bits packed most significant bit first.
//!
//! - bit_sequence: the owned, growable bit buffer shared by codes, encoded messages and payloads.
//! - bitpacker: a queue based writer that appends codes quickly and yields a `BitSequence`.
//! - bitreader: reads bits (or whole bytes) back out of a packed slice.
//!
pub mod bit_sequence;
pub mod bitpacker;
pub mod bitreader;

pub use bit_sequence::{BitSequence, ParseBitsError};
pub use bitpacker::BitPacker;
pub use bitreader::BitReader;
