use log::debug;

use super::codes::CodeTable;
use super::tree::{HuffTree, Node};
use crate::bitstream::{BitPacker, BitSequence};
use crate::error::{HuffError, Result};

/// Concatenate the code of every symbol, in input order.
pub fn encode(symbols: &[u8], table: &CodeTable) -> Result<BitSequence> {
    let mut bp = BitPacker::new(symbols.len());
    for &symbol in symbols {
        let code = table
            .get(symbol)
            .ok_or(HuffError::UnknownSymbol { symbol })?;
        bp.out_seq(code);
    }
    debug!("Encoded {} symbols into {} bits", symbols.len(), bp.bit_count());
    Ok(bp.finish())
}

/// Walk the tree bit by bit (0 = left, 1 = right), emitting a symbol and returning to the root at
/// every leaf. With a single-leaf tree each 0 bit is one symbol.
pub fn decode(bits: &BitSequence, tree: &HuffTree) -> Result<Vec<u8>> {
    let root = tree.root();
    let mut output = Vec::new();
    let mut current = root;
    // First bit of the code being walked.
    let mut code_start = 0;

    for (offset, bit) in bits.iter().enumerate() {
        current = match current {
            Node::Internal { left, right, .. } => {
                if bit {
                    right.as_ref()
                } else {
                    left.as_ref()
                }
            }
            // Only reachable when the root itself is a leaf.
            Node::Leaf { .. } if !bit => current,
            Node::Leaf { .. } => return Err(HuffError::InvalidCode { offset }),
        };
        if let Node::Leaf { symbol, .. } = current {
            output.push(*symbol);
            current = root;
            code_start = offset + 1;
        }
    }

    if code_start < bits.len() {
        return Err(HuffError::TruncatedCode { offset: code_start });
    }
    debug!("Decoded {} bits into {} symbols", bits.len(), output.len());
    Ok(output)
}
