//! The container module reads and writes the compressed file format.
//!
//! Layout, little endian throughout:
//!
//! | field          | size               | notes                                  |
//! |----------------|--------------------|----------------------------------------|
//! | symbol count N | 4 bytes (u32)      | distinct symbols, at most 256          |
//! | entries        | N * 5 bytes        | 1 byte symbol + 4 byte frequency (u32) |
//! | padding        | 1 byte             | zero bits in the last payload byte, 0-7 |
//! | payload        | ceil(bits / 8)     | code bits, MSB first                   |
//!
//! Entries are written in ascending symbol order. The frequency table fully determines the
//! Huffman tree, and therefore the exact payload length, so the reader can tell a truncated
//! payload from a complete one.
//!

pub mod read;
pub mod write;

pub use read::deserialize_container;
pub use write::serialize_container;

/// Size of the symbol count field.
pub const COUNT_BYTES: usize = 4;
/// Size of one (symbol, frequency) entry.
pub const ENTRY_BYTES: usize = 5;
/// Largest legal symbol count.
pub const MAX_SYMBOLS: usize = 256;
