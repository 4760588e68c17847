use log::trace;
use rustc_hash::FxHashMap;

use super::tree::{HuffTree, Node};
use crate::bitstream::BitSequence;
use crate::error::{HuffError, Result};
use crate::tools::freq_count::FrequencyTable;

/// Symbol -> code. Codes are the root-to-leaf paths of one tree (0 = left, 1 = right), so no
/// code is a prefix of another.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: FxHashMap<u8, BitSequence>,
}

impl CodeTable {
    /// Walk the tree and record the path to every leaf.
    pub fn from_tree(tree: &HuffTree) -> Self {
        generate_codes(tree)
    }

    pub fn get(&self, symbol: u8) -> Option<&BitSequence> {
        self.codes.get(&symbol)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// All (symbol, code) pairs in ascending symbol order.
    pub fn sorted(&self) -> Vec<(u8, &BitSequence)> {
        let mut pairs = self.codes.iter().map(|(&s, c)| (s, c)).collect::<Vec<_>>();
        pairs.sort_unstable_by_key(|&(s, _)| s);
        pairs
    }

    /// Bits needed to encode a message with these symbol counts.
    pub fn encoded_len(&self, freqs: &FrequencyTable) -> Result<u64> {
        freqs.iter().try_fold(0_u64, |total, (&symbol, &count)| {
            let code = self.get(symbol).ok_or(HuffError::UnknownSymbol { symbol })?;
            Ok(total + code.len() as u64 * count as u64)
        })
    }
}

/// Depth first walk from the root with an explicit stack. Each branch carries its own copy of
/// the path so far. A root that is a leaf gets the code "0".
pub fn generate_codes(tree: &HuffTree) -> CodeTable {
    let mut codes = FxHashMap::default();
    let mut stack = vec![(tree.root(), BitSequence::new())];

    while let Some((node, mut path)) = stack.pop() {
        match node {
            Node::Leaf { symbol, .. } => {
                if path.is_empty() {
                    path.push(false);
                }
                trace!("code for 0x{:02x}: {}", symbol, path);
                codes.insert(*symbol, path);
            }
            Node::Internal { left, right, .. } => {
                let mut right_path = path.clone();
                right_path.push(true);
                path.push(false);
                stack.push((right.as_ref(), right_path));
                stack.push((left.as_ref(), path));
            }
        }
    }
    CodeTable { codes }
}

#[cfg(test)]
mod test {
    use super::{generate_codes, CodeTable};
    use crate::bitstream::BitSequence;
    use crate::huffman_coding::tree::HuffTree;
    use crate::tools::freq_count::{count_frequencies, FrequencyTable};

    fn codes_for(text: &[u8]) -> CodeTable {
        let tree = HuffTree::build(&count_frequencies(text).unwrap()).unwrap();
        generate_codes(&tree)
    }

    #[test]
    fn single_symbol_gets_zero() {
        let codes = codes_for(b"aaaa");
        assert_eq!(codes.len(), 1);
        assert_eq!(codes.get(b'a').unwrap().to_string(), "0");
    }

    #[test]
    fn two_symbols_get_one_bit_each() {
        let codes = codes_for(b"abb");
        // 'a' is lighter, popped first, so it sits on the left.
        assert_eq!(codes.get(b'a').unwrap().to_string(), "0");
        assert_eq!(codes.get(b'b').unwrap().to_string(), "1");
    }

    #[test]
    fn codes_are_prefix_free() {
        let codes = codes_for(b"abracadabra! huffman coding is a lossless data compression algorithm.");
        let all = codes.sorted();
        for (i, (_, a)) in all.iter().enumerate() {
            assert!(!a.is_empty());
            for (j, (_, b)) in all.iter().enumerate() {
                if i != j {
                    assert!(!a.is_prefix_of(b), "{} is a prefix of {}", a, b);
                }
            }
        }
    }

    #[test]
    fn encoded_len_matches_tree() {
        let freqs: FrequencyTable = [(b'a', 5), (b'b', 9), (b'c', 12), (b'd', 13), (b'e', 16), (b'f', 45)]
            .into_iter()
            .collect();
        let tree = HuffTree::build(&freqs).unwrap();
        let codes = CodeTable::from_tree(&tree);
        assert_eq!(codes.encoded_len(&freqs).unwrap(), 224);
        // f is by far the most common, so it has the single shortest code.
        assert_eq!(codes.get(b'f').unwrap().len(), 1);
    }

    #[test]
    fn encoded_len_unknown_symbol() {
        let codes = codes_for(b"ab");
        let freqs: FrequencyTable = [(b'z', 1)].into_iter().collect();
        assert!(codes.encoded_len(&freqs).is_err());
    }

    #[test]
    fn sorted_is_ascending() {
        let codes = codes_for(b"zyxzyz");
        let symbols = codes.sorted().iter().map(|(s, _)| *s).collect::<Vec<_>>();
        assert_eq!(symbols, b"xyz".to_vec());
        assert!(codes.get(b'q').is_none());
        assert_eq!(codes.get(b'z').map(BitSequence::len), Some(1));
    }
}
