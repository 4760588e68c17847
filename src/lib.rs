//! Huffman coding file compressor.
//!
//! Compresses a byte stream with a Huffman code built from the stream's own byte frequencies,
//! and stores the result in a small self-describing container: the frequency table, a padding
//! count and the packed code bits. The table is all that is needed to rebuild the tree and
//! decode the data.
//!
//! The composable entry points are:
//! - [`count_frequencies`]
//! - [`HuffTree::build`]
//! - [`generate_codes`] / [`encode`] / [`decode`]
//! - [`serialize_container`] / [`deserialize_container`]
//!
//! Basic usage to compress a file is as follows:
//!
//! `$> huffzip notes.txt`
//!
//! This will compress the file and create the file notes.txt.huf. `huffzip demo` compresses a
//! built-in sample text to demo.huf, and `huffzip -t notes.txt` also reads the artifact back and
//! checks that it restores the original.
//!
pub mod bitstream;
pub mod compression;
pub mod container;
pub mod error;
pub mod huffman_coding;
pub mod tools;

pub use bitstream::BitSequence;
pub use compression::compress::{compress, Compressed};
pub use compression::decompress::decompress;
pub use container::{deserialize_container, serialize_container};
pub use error::{HuffError, Result};
pub use huffman_coding::{decode, encode, generate_codes, CodeTable, HuffTree, Node};
pub use tools::freq_count::{count_frequencies, FrequencyTable};
