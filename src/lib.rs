//! # huffpack
//!
//! Lossless file compression with static Huffman coding.
//!
//! The compressor counts byte frequencies, builds a prefix-code tree with a
//! deterministic tie-break, and writes the frequency table, a padding count and
//! the packed bitstream. The decompressor rebuilds the identical tree from the
//! stored table and decodes the bits back into the original bytes.
//!
//! ## Quick Start
//!
//! ```rust
//! let original = b"abracadabra".to_vec();
//! let compressed = huffpack::compress(&original)?;
//! let restored = huffpack::decompress(&compressed)?;
//! assert_eq!(original, restored);
//! # Ok::<(), huffpack::HuffmanError>(())
//! ```

pub mod code_table;
pub mod config;
pub mod container;
pub mod error;
pub mod frequency;
pub mod huffman_codec;
pub mod hufftree;
pub mod report;

// Internal modules - not part of public API
mod bit_vec;
mod metadata;
mod min_heap;

// Re-export main types for convenience
pub use bit_vec::BitVec;
pub use code_table::{Code, CodeTable};
pub use config::{Config, Mode};
pub use container::CompressedContainer;
pub use error::{HuffmanError, Result};
pub use frequency::ByteFrequency;
pub use huffman_codec::{
    compress, compress_file, decompress, decompress_file, HuffmanCodec, Summary,
};
pub use hufftree::{HuffNode, HuffmanTree};
pub use min_heap::HeapErr;
