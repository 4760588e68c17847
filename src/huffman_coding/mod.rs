//! The huffman module turns symbol frequencies into codes and moves data between symbols and bits.
//!
//! - tree: builds the optimal prefix tree from a frequency table.
//! - codes: walks the tree into a symbol -> code table.
//! - codec: encodes symbols with the table and decodes bits by walking the tree.
//!
//! Encoding and decoding are inherently sequential and single threaded.
//!

pub mod codec;
pub mod codes;
pub mod tree;

pub use codec::{decode, encode};
pub use codes::{generate_codes, CodeTable};
pub use tree::{HuffTree, Node};
