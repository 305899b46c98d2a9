use std::io::{self, Cursor, Read, Write};

use crate::bit_vec::BitVec;
use crate::error::{HuffmanError, Result};
use crate::frequency::ByteFrequency;
use crate::metadata::ContainerHeader;

/// The on-disk compressed form: frequency table, padding count and packed bits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressedContainer {
    pub frequencies: ByteFrequency,
    pub padding: u8,
    pub payload: Vec<u8>,
}

impl CompressedContainer {
    pub fn new(frequencies: ByteFrequency, bits: BitVec) -> Self {
        let (payload, padding) = bits.into_packed();
        CompressedContainer {
            frequencies,
            padding,
            payload,
        }
    }

    pub fn entry_count(&self) -> usize {
        self.frequencies.len()
    }

    /// Number of meaningful bits in the payload.
    pub fn bit_len(&self) -> usize {
        (self.payload.len() * 8).saturating_sub(self.padding as usize)
    }

    /// Unpack the payload, dropping the padding bits.
    pub fn bits(&self) -> Result<BitVec> {
        BitVec::from_packed(self.payload.clone(), self.padding)
    }

    fn header(&self) -> ContainerHeader {
        ContainerHeader {
            frequencies: self.frequencies.clone(),
            padding: self.padding,
        }
    }

    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        self.header().write_to(writer)?;
        writer.write_all(&self.payload)?;
        Ok(())
    }

    pub fn serialize(&self) -> io::Result<Vec<u8>> {
        let mut bytes = Vec::with_capacity(self.header().encoded_len() + self.payload.len());
        self.write_to(&mut bytes)?;
        Ok(bytes)
    }

    pub fn read_from<R: Read>(reader: &mut R) -> Result<Self> {
        let ContainerHeader {
            frequencies,
            padding,
        } = ContainerHeader::read_from(reader)?;

        let mut payload = Vec::new();
        reader.read_to_end(&mut payload)?;

        if frequencies.is_empty() && !payload.is_empty() {
            return Err(HuffmanError::malformed(format!(
                "{} payload bytes follow an empty frequency table",
                payload.len()
            )));
        }
        if payload.is_empty() && padding != 0 {
            return Err(HuffmanError::malformed(format!(
                "padding of {} bits with an empty bitstream",
                padding
            )));
        }

        Ok(CompressedContainer {
            frequencies,
            padding,
            payload,
        })
    }

    pub fn deserialize(data: &[u8]) -> Result<Self> {
        Self::read_from(&mut Cursor::new(data))
    }
}
