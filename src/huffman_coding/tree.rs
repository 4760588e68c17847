//! Builds the Huffman tree from a frequency table.
//!
//! Leaves enter a min-priority queue in ascending symbol order. The two lightest nodes are
//! popped, merged under a new internal node (first popped on the left) and pushed back until one
//! node remains. Among equal weights the node that entered the queue first leaves first, so a
//! given table always yields the same tree.
//!

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::{debug, trace};

use crate::error::{HuffError, Result};
use crate::tools::freq_count::FrequencyTable;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// One symbol and its frequency.
    Leaf { symbol: u8, weight: u64 },
    /// Exactly two children and the sum of their weights.
    Internal {
        weight: u64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    pub fn weight(&self) -> u64 {
        match self {
            Node::Leaf { weight, .. } => *weight,
            Node::Internal { weight, .. } => *weight,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    fn merge(left: Node, right: Node) -> Node {
        Node::Internal {
            weight: left.weight() + right.weight(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

/// Priority queue entry. `seq` is the order in which the node entered the queue.
#[derive(Debug)]
struct Pending {
    weight: u64,
    seq: usize,
    node: Node,
}

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.seq == other.seq
    }
}

impl Eq for Pending {}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pending {
    /// Reversed so the max-heap pops the lightest node, then the oldest among equal weights.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// An optimal prefix-code tree. Built once, never modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffTree {
    root: Node,
}

impl HuffTree {
    /// Build the tree for `freqs`. Fails with EmptyAlphabet if the table has no symbols.
    pub fn build(freqs: &FrequencyTable) -> Result<Self> {
        let mut symbols = freqs.iter().map(|(&s, &f)| (s, f)).collect::<Vec<_>>();
        symbols.sort_unstable();

        let mut heap: BinaryHeap<Pending> = symbols
            .into_iter()
            .enumerate()
            .map(|(seq, (symbol, freq))| Pending {
                weight: freq as u64,
                seq,
                node: Node::Leaf {
                    symbol,
                    weight: freq as u64,
                },
            })
            .collect();
        let mut seq = heap.len();

        // A single leaf never enters the merge step; it becomes the root directly.
        let root = loop {
            let first = heap.pop().ok_or(HuffError::EmptyAlphabet)?;
            let second = match heap.pop() {
                Some(second) => second,
                None => break first.node,
            };
            let node = Node::merge(first.node, second.node);
            trace!(
                "merge {} + {} -> {} (seq {})",
                first.weight,
                second.weight,
                node.weight(),
                seq
            );
            heap.push(Pending {
                weight: node.weight(),
                seq,
                node,
            });
            seq += 1;
        };

        let tree = HuffTree { root };
        debug!(
            "Built tree over {} symbols, total weight {}",
            freqs.len(),
            tree.symbol_count()
        );
        Ok(tree)
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Total number of symbols the tree was built for (the root weight).
    pub fn symbol_count(&self) -> u64 {
        self.root.weight()
    }

    /// Sum over leaves of weight * depth, i.e. the bit length of the encoded message.
    /// A root that is itself a leaf counts as depth 1, matching its one bit code.
    pub fn weighted_path_length(&self) -> u64 {
        if let Node::Leaf { weight, .. } = self.root {
            return weight;
        }
        let mut total = 0;
        let mut stack = vec![(&self.root, 0_u64)];
        while let Some((node, depth)) = stack.pop() {
            match node {
                Node::Leaf { weight, .. } => total += weight * depth,
                Node::Internal { left, right, .. } => {
                    stack.push((right.as_ref(), depth + 1));
                    stack.push((left.as_ref(), depth + 1));
                }
            }
        }
        total
    }

    /// Recover the frequency table from the leaves.
    pub fn frequencies(&self) -> FrequencyTable {
        let mut freqs = FrequencyTable::default();
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            match node {
                Node::Leaf { symbol, weight } => {
                    freqs.insert(*symbol, *weight as u32);
                }
                Node::Internal { left, right, .. } => {
                    stack.push(right);
                    stack.push(left);
                }
            }
        }
        freqs
    }
}
