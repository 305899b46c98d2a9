use std::collections::{BTreeMap, HashMap};
use std::fmt;

use crate::hufftree::{HuffNode, HuffmanTree};

/// A codeword: the left (0) / right (1) choices on the path from the root to a leaf.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code(Vec<bool>);

impl Code {
    pub fn new() -> Self {
        Code(Vec::new())
    }

    pub fn push(&mut self, bit: bool) {
        self.0.push(bit);
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn bits(&self) -> &[bool] {
        &self.0
    }

    pub fn starts_with(&self, prefix: &Code) -> bool {
        self.0.starts_with(&prefix.0)
    }

    fn with(&self, bit: bool) -> Self {
        let mut next = self.clone();
        next.push(bit);
        next
    }
}

impl From<&str> for Code {
    /// Parse a string of `0`/`1` characters. Any other character counts as `1`.
    fn from(s: &str) -> Self {
        Code(s.chars().map(|c| c != '0').collect())
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.0 {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Forward (byte to code) and reverse (code to byte) mappings for one tree.
#[derive(Debug, Clone, Default)]
pub struct CodeTable {
    forward: BTreeMap<u8, Code>,
    reverse: HashMap<Code, u8>,
    max_len: usize,
}

impl CodeTable {
    /// Walk the tree appending `0` for left and `1` for right.
    ///
    /// A tree that is a single leaf assigns that byte the one-bit code `0`
    /// so every encoded byte costs at least one bit.
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut table = CodeTable::default();
        let Some(root) = tree.root() else {
            return table;
        };

        if let HuffNode::Leaf { byte, .. } = root {
            table.insert(*byte, Code::from("0"));
            return table;
        }

        let mut stack = vec![(root, Code::new())];
        while let Some((node, code)) = stack.pop() {
            match node {
                HuffNode::Leaf { byte, .. } => table.insert(*byte, code),
                HuffNode::Internal { left, right, .. } => {
                    stack.push((&**right, code.with(true)));
                    stack.push((&**left, code.with(false)));
                }
            }
        }
        table
    }

    fn insert(&mut self, byte: u8, code: Code) {
        self.max_len = self.max_len.max(code.len());
        self.reverse.insert(code.clone(), byte);
        self.forward.insert(byte, code);
    }

    pub fn get(&self, byte: u8) -> Option<&Code> {
        self.forward.get(&byte)
    }

    pub fn lookup(&self, code: &Code) -> Option<u8> {
        self.reverse.get(code).copied()
    }

    /// `(byte, code)` pairs in ascending byte order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &Code)> + '_ {
        self.forward.iter().map(|(&b, c)| (b, c))
    }

    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Length of the longest codeword, 0 for an empty table.
    pub fn max_code_len(&self) -> usize {
        self.max_len
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn table_for(data: &[u8]) -> CodeTable {
        CodeTable::from_tree(&HuffmanTree::from_bytes(data).unwrap())
    }

    #[test]
    fn test_abracadabra_codes() {
        let table = table_for(b"abracadabra");
        assert_eq!(table.get(b'a'), Some(&Code::from("0")));
        assert_eq!(table.get(b'r'), Some(&Code::from("10")));
        assert_eq!(table.get(b'c'), Some(&Code::from("1100")));
        assert_eq!(table.get(b'd'), Some(&Code::from("1101")));
        assert_eq!(table.get(b'b'), Some(&Code::from("111")));
        assert_eq!(table.max_code_len(), 4);
    }

    #[test]
    fn test_forward_and_reverse_agree() {
        let table = table_for(b"mississippi river");
        for (byte, code) in table.iter() {
            assert_eq!(table.lookup(code), Some(byte));
        }
        assert_eq!(table.reverse.len(), table.len());
    }

    #[test]
    fn test_prefix_free() {
        let table = table_for(b"she sells sea shells by the sea shore");
        let codes: Vec<&Code> = table.iter().map(|(_, c)| c).collect();
        for (i, a) in codes.iter().enumerate() {
            for (j, b) in codes.iter().enumerate() {
                if i != j {
                    assert!(!b.starts_with(a), "{} is a prefix of {}", a, b);
                }
            }
        }
    }

    #[test]
    fn test_single_symbol_gets_one_bit() {
        let table = table_for(b"zzzz");
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(b'z').map(|c| c.to_string()), Some("0".to_string()));
    }

    #[test]
    fn test_empty_tree() {
        let table = CodeTable::from_tree(&HuffmanTree::default());
        assert!(table.is_empty());
        assert_eq!(table.max_code_len(), 0);
    }
}
