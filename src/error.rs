//! Error type shared by every stage of the compressor.

use thiserror::Error;

use crate::min_heap::HeapErr;

/// Errors produced while compressing or decompressing.
#[derive(Error, Debug)]
pub enum HuffmanError {
    /// The input or output file could not be opened, read or written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The container header or bitstream is inconsistent
    #[error("Malformed container: {message}")]
    MalformedContainer {
        /// What was wrong with the container
        message: String,
    },

    /// A byte occurs more often than the 4-byte frequency field can record
    #[error("Input too large: byte 0x{byte:02x} occurs {count} times")]
    InputTooLarge {
        /// The offending byte
        byte: u8,
        /// Its occurrence count
        count: u64,
    },

    /// A byte has no codeword in the code table
    #[error("No code for byte 0x{byte:02x}")]
    MissingCode {
        /// The byte that could not be encoded
        byte: u8,
    },

    /// The priority queue was driven past its bounds
    #[error("Priority queue error: {0}")]
    Heap(#[from] HeapErr),
}

impl HuffmanError {
    pub fn malformed<S: Into<String>>(message: S) -> Self {
        HuffmanError::MalformedContainer {
            message: message.into(),
        }
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, HuffmanError::MalformedContainer { .. })
    }
}

pub type Result<T> = std::result::Result<T, HuffmanError>;
