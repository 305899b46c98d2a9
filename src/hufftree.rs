use std::cmp::Ordering;

use log::debug;

use crate::error::Result;
use crate::frequency::ByteFrequency;
use crate::min_heap::MinHeap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffNode {
    Leaf {
        weight: u64,
        byte: u8,
    },
    Internal {
        weight: u64,
        left: Box<HuffNode>,
        right: Box<HuffNode>,
    },
}

impl HuffNode {
    pub fn new(byte: u8, weight: u64) -> Self {
        HuffNode::Leaf { weight, byte }
    }

    pub fn weight(&self) -> u64 {
        match self {
            HuffNode::Leaf { weight, .. } => *weight,
            HuffNode::Internal { weight, .. } => *weight,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffNode::Leaf { .. })
    }

    pub fn merge(a: Self, b: Self) -> Self {
        // a is the smaller node and goes left
        let weight = a.weight() + b.weight();
        HuffNode::Internal {
            weight,
            left: Box::new(a),
            right: Box::new(b),
        }
    }
}

/// Queue entry ordering nodes by `(weight, byte, class, seq)`.
///
/// Internal nodes rank as byte 0, so on equal weight a leaf for byte 0 comes
/// first, then internal nodes in creation order, then the remaining leaves by
/// ascending byte. The order is total, so the same frequency table always
/// yields the same tree.
#[derive(Debug)]
struct Queued {
    weight: u64,
    byte: u8,
    class: u8,
    seq: u32,
    node: HuffNode,
}

impl Queued {
    fn leaf(byte: u8, count: u32) -> Self {
        Queued {
            weight: count as u64,
            byte,
            class: 0,
            seq: 0,
            node: HuffNode::new(byte, count as u64),
        }
    }

    fn internal(node: HuffNode, seq: u32) -> Self {
        Queued {
            weight: node.weight(),
            byte: 0,
            class: 1,
            seq,
            node,
        }
    }

    fn key(&self) -> (u64, u8, u8, u32) {
        (self.weight, self.byte, self.class, self.seq)
    }
}

impl PartialEq for Queued {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Queued {}

impl PartialOrd for Queued {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Queued {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

/// A Huffman prefix-code tree. Empty when built from an empty input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HuffmanTree {
    root: Option<HuffNode>,
}

impl HuffmanTree {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let frequencies = ByteFrequency::from_bytes(bytes)?;
        Self::from_frequencies(&frequencies)
    }

    /// Greedy Huffman construction over the entries of `frequencies`.
    pub fn from_frequencies(frequencies: &ByteFrequency) -> Result<Self> {
        let leaves: Vec<Queued> = frequencies
            .iter()
            .map(|(byte, count)| Queued::leaf(byte, count))
            .collect();

        if leaves.is_empty() {
            return Ok(HuffmanTree { root: None });
        }

        let heap = MinHeap::build(leaves)?;
        let tree = Self::build_from_heap(heap)?;
        debug!(
            "built tree with {} leaves, root weight {}",
            frequencies.len(),
            tree.root.as_ref().map_or(0, HuffNode::weight)
        );
        Ok(tree)
    }

    fn build_from_heap(mut heap: MinHeap<Queued>) -> Result<Self> {
        let mut seq = 0u32;
        while heap.heap_size() > 1 {
            let x = heap.extract_min()?;
            let y = heap.extract_min()?;

            let z = HuffNode::merge(x.node, y.node);
            heap.insert(Queued::internal(z, seq));
            seq += 1;
        }
        let root = heap.extract_min()?.node;

        Ok(HuffmanTree { root: Some(root) })
    }

    pub fn root(&self) -> Option<&HuffNode> {
        self.root.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Nodes in pre-order (node, then left subtree, then right subtree).
    pub fn nodes(&self) -> Nodes<'_> {
        Nodes {
            stack: self.root.iter().collect(),
        }
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes().filter(|n| n.is_leaf()).count()
    }

    /// Recover the frequency table from the leaves.
    pub fn frequencies(&self) -> ByteFrequency {
        self.nodes()
            .filter_map(|node| match node {
                HuffNode::Leaf { byte, weight } => Some((*byte, *weight as u32)),
                HuffNode::Internal { .. } => None,
            })
            .collect()
    }
}

pub struct Nodes<'a> {
    stack: Vec<&'a HuffNode>,
}

impl<'a> Iterator for Nodes<'a> {
    type Item = &'a HuffNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if let HuffNode::Internal { left, right, .. } = node {
            self.stack.push(right);
            self.stack.push(left);
        }
        Some(node)
    }
}
