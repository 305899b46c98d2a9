use std::collections::BTreeMap;

use crate::error::{HuffmanError, Result};

/// Occurrence count of every distinct byte in an input.
///
/// Iteration is always in ascending byte order, which is the order entries
/// are written to the container and inserted into the priority queue.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ByteFrequency {
    counts: BTreeMap<u8, u32>,
}

impl ByteFrequency {
    pub fn new() -> Self {
        ByteFrequency {
            counts: BTreeMap::new(),
        }
    }

    /// Count every byte of `data`.
    ///
    /// Fails only if a single byte value occurs more than `u32::MAX` times,
    /// since the container stores counts in four bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let mut wide = [0u64; 256];
        for &byte in data {
            wide[byte as usize] += 1;
        }

        let mut counts = BTreeMap::new();
        for (byte, &count) in wide.iter().enumerate() {
            if count == 0 {
                continue;
            }
            let byte = byte as u8;
            let count = u32::try_from(count)
                .map_err(|_| HuffmanError::InputTooLarge { byte, count })?;
            counts.insert(byte, count);
        }

        Ok(ByteFrequency { counts })
    }

    /// Record `count` occurrences of `byte`, replacing any earlier value.
    pub fn insert(&mut self, byte: u8, count: u32) -> Option<u32> {
        self.counts.insert(byte, count)
    }

    pub fn get(&self, byte: u8) -> Option<u32> {
        self.counts.get(&byte).copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the length of the input the table was built from.
    pub fn total(&self) -> u64 {
        self.counts.values().map(|&c| c as u64).sum()
    }

    /// `(byte, count)` pairs in ascending byte order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u32)> + '_ {
        self.counts.iter().map(|(&b, &c)| (b, c))
    }

    /// Entries ordered by descending count, ties by ascending byte.
    pub fn by_descending_count(&self) -> Vec<(u8, u32)> {
        let mut entries: Vec<(u8, u32)> = self.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        entries
    }
}

impl FromIterator<(u8, u32)> for ByteFrequency {
    fn from_iter<I: IntoIterator<Item = (u8, u32)>>(iter: I) -> Self {
        ByteFrequency {
            counts: iter.into_iter().collect(),
        }
    }
}
