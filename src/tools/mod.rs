//! The tools module provides the helpers that sit around the Huffman core.
//!
//! The tools are:
//! - cli: Command line interface for huffzip.
//! - freq_count: Frequency count of the input bytes.
//! - report: Compression statistics shown to the user.
//! - storage: Reading inputs and writing artifacts.
//!
pub mod cli;
pub mod freq_count;
pub mod report;
pub mod storage;
