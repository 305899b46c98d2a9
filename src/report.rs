//! Text renderings of the frequency table, tree and codes for verbose output.
//!
//! These are plain functions over read-only data; nothing here touches the
//! codec's state.

use std::fmt::Write;

use crate::code_table::CodeTable;
use crate::frequency::ByteFrequency;
use crate::hufftree::{HuffNode, HuffmanTree};

fn is_printable(byte: u8) -> bool {
    byte.is_ascii_graphic() || byte == b' '
}

fn byte_label(byte: u8) -> String {
    format!("0x{:02x} ({:>3}):", byte, byte)
}

fn printable_suffix(byte: u8) -> String {
    if is_printable(byte) {
        format!(" '{}'", byte as char)
    } else {
        String::new()
    }
}

/// Entries by descending frequency, ties by ascending byte.
pub fn render_frequency_table(frequencies: &ByteFrequency) -> String {
    let mut out = String::from("Byte Frequency Table (sorted by frequency):\n");
    for (byte, freq) in frequencies.by_descending_count() {
        let _ = writeln!(out, "{} {}{}", byte_label(byte), freq, printable_suffix(byte));
    }
    out
}

/// The tree as an indented branch diagram, left child above right child.
pub fn render_tree(tree: &HuffmanTree) -> String {
    let Some(root) = tree.root() else {
        return String::from("Huffman tree is empty.\n");
    };

    let mut out = String::from("Huffman Tree:\n");
    let mut stack: Vec<(&HuffNode, String, bool)> = vec![(root, String::new(), false)];

    while let Some((node, indent, is_left)) = stack.pop() {
        let branch = if is_left { "├──" } else { "└──" };
        match node {
            HuffNode::Leaf { weight, byte } => {
                let label = if is_printable(*byte) {
                    (*byte as char).to_string()
                } else {
                    format!("\\x{:02x}", byte)
                };
                let _ = writeln!(out, "{}{} '{}' ({})", indent, branch, label, weight);
            }
            HuffNode::Internal { weight, left, right } => {
                let _ = writeln!(out, "{}{} * ({})", indent, branch, weight);
                let child_indent = format!("{}{}", indent, if is_left { "│   " } else { "    " });
                stack.push((&**right, child_indent.clone(), false));
                stack.push((&**left, child_indent, true));
            }
        }
    }
    out
}

/// Codes in ascending byte order.
pub fn render_code_table(table: &CodeTable) -> String {
    if table.is_empty() {
        return String::from("No Huffman codes (empty input).\n");
    }
    let mut out = String::from("Huffman Codes (sorted by byte ascending):\n");
    for (byte, code) in table.iter() {
        let _ = writeln!(out, "{} {}{}", byte_label(byte), code, printable_suffix(byte));
    }
    out
}

/// The complete verbose block printed after compressing or decompressing.
pub fn render_report(
    padding: u8,
    frequencies: &ByteFrequency,
    tree: &HuffmanTree,
    table: &CodeTable,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Padding size: {} bits", padding);
    let _ = writeln!(out, "Table size: {} entries", frequencies.len());
    out.push_str(&render_frequency_table(frequencies));
    out.push_str(&render_tree(tree));
    out.push_str(&render_code_table(table));
    out
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_frequency_table() {
        let freq = ByteFrequency::from_bytes(b"abracadabra\n").unwrap();
        let text = render_frequency_table(&freq);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Byte Frequency Table (sorted by frequency):");
        assert_eq!(lines[1], "0x61 ( 97): 5 'a'");
        assert_eq!(lines[2], "0x62 ( 98): 2 'b'");
        assert_eq!(lines[3], "0x72 (114): 2 'r'");
        assert_eq!(lines[4], "0x0a ( 10): 1");
    }

    #[test]
    fn test_tree_diagram() {
        let tree = HuffmanTree::from_bytes(b"aab\n").unwrap();
        let expected = "Huffman Tree:\n\
                        └── * (4)\n    \
                        ├── * (2)\n    \
                        │   ├── '\\x0a' (1)\n    \
                        │   └── 'b' (1)\n    \
                        └── 'a' (2)\n";
        assert_eq!(render_tree(&tree), expected);
    }

    #[test]
    fn test_empty_renderings() {
        assert_eq!(render_tree(&HuffmanTree::default()), "Huffman tree is empty.\n");
        assert!(render_code_table(&CodeTable::default()).starts_with("No Huffman codes"));
    }

    #[test]
    fn test_code_table() {
        let tree = HuffmanTree::from_bytes(b"abracadabra").unwrap();
        let text = render_code_table(&CodeTable::from_tree(&tree));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[1], "0x61 ( 97): 0 'a'");
        assert_eq!(lines[5], "0x72 (114): 10 'r'");
    }
}
