//! The compression module strings the Huffman core together into whole sessions.
//!
//! Compression:
//! - Frequency count: how often each byte value occurs.
//! - Tree build: an optimal prefix tree from those counts.
//! - Code generation and encoding: each byte replaced by its code.
//! - Container: frequency table, padding count and packed code bits written out.
//!
//! Decompression reverses it. The frequency table from the container rebuilds the same tree,
//! which decodes the payload.
//!
//! Each session is single threaded and owns its tree, table and bits outright.
//!

pub mod compress;
pub mod decompress;
pub mod verify;
