use crate::code_table::Code;
use crate::error::{HuffmanError, Result};

/// A growable bit sequence stored most-significant-bit first in each byte.
///
/// Unused low bits of the last byte are always zero, so the backing bytes are
/// already the padded, packed form of the sequence.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct BitVec {
    bits: Vec<u8>,
    bit_count: usize,
}

impl BitVec {
    pub fn new() -> Self {
        BitVec {
            bits: Vec::new(),
            bit_count: 0,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bits
    }

    pub fn len(&self) -> usize {
        self.bit_count
    }

    pub fn is_empty(&self) -> bool {
        self.bit_count == 0
    }

    pub fn push_bit(&mut self, bit: bool) {
        let byte_index = self.bit_count / 8;
        let bit_offset = self.bit_count % 8;

        if byte_index >= self.bits.len() {
            self.bits.push(0);
        }

        if bit {
            self.bits[byte_index] |= 1 << (7 - bit_offset);
        }

        self.bit_count += 1;
    }

    pub fn push_code(&mut self, code: &Code) {
        for &bit in code.bits() {
            self.push_bit(bit);
        }
    }

    pub fn get(&self, index: usize) -> Option<bool> {
        if index >= self.bit_count {
            return None;
        }
        Some(self.bits[index / 8] & (1 << (7 - index % 8)) != 0)
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.bit_count).map(move |i| self.bits[i / 8] & (1 << (7 - i % 8)) != 0)
    }

    /// Number of zero bits needed to reach a byte boundary, always in `0..=7`.
    pub fn padding(&self) -> u8 {
        ((8 - self.bit_count % 8) % 8) as u8
    }

    /// The packed bytes and the count of trailing padding bits.
    pub fn into_packed(self) -> (Vec<u8>, u8) {
        let padding = self.padding();
        (self.bits, padding)
    }

    /// Expand packed bytes and drop the last `padding` bits.
    pub fn from_packed(bytes: Vec<u8>, padding: u8) -> Result<Self> {
        if padding > 7 {
            return Err(HuffmanError::malformed(format!(
                "padding of {} bits is out of range",
                padding
            )));
        }
        let total = bytes.len() * 8;
        if (padding as usize) > total {
            return Err(HuffmanError::malformed(format!(
                "padding of {} bits with an empty bitstream",
                padding
            )));
        }

        let mut bits = bytes;
        let bit_count = total - padding as usize;
        // clear whatever the padding bits held so the invariant holds
        if let Some(last) = bits.last_mut() {
            *last &= 0xffu8 << padding;
        }
        Ok(BitVec { bits, bit_count })
    }
}

impl FromIterator<bool> for BitVec {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut bv = BitVec::new();
        for bit in iter {
            bv.push_bit(bit);
        }
        bv
    }
}
