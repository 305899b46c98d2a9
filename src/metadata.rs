//! Fixed-width header fields of the container.
//!
//! Layout, all integers little-endian:
//!
//! ```text
//! [entry count: u32] [(byte: u8, frequency: u32) x entry count] [padding: u8]
//! ```

use std::io::{self, Read, Write};

use crate::error::{HuffmanError, Result};
use crate::frequency::ByteFrequency;

/// Size in bytes of one `(byte, frequency)` entry.
pub const ENTRY_SIZE: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerHeader {
    pub frequencies: ByteFrequency,
    pub padding: u8,
}

impl ContainerHeader {
    pub fn encoded_len(&self) -> usize {
        4 + self.frequencies.len() * ENTRY_SIZE + 1
    }

    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        let entry_count = self.frequencies.len() as u32;
        writer.write_all(&entry_count.to_le_bytes())?;

        for (byte, freq) in self.frequencies.iter() {
            writer.write_all(&[byte])?;
            writer.write_all(&freq.to_le_bytes())?;
        }

        writer.write_all(&[self.padding])?;
        Ok(())
    }

    pub fn read_from<R: Read>(reader: &mut R) -> Result<Self> {
        let count = read_u32(reader, "entry count")? as usize;
        if count > 256 {
            return Err(HuffmanError::malformed(format!(
                "entry count {} exceeds 256 byte values",
                count
            )));
        }

        let mut frequencies = ByteFrequency::new();
        for i in 0..count {
            let byte = read_u8(reader, "entry byte")?;
            let freq = read_u32(reader, "entry frequency")?;
            if freq == 0 {
                return Err(HuffmanError::malformed(format!(
                    "entry {} (byte 0x{:02x}) has zero frequency",
                    i, byte
                )));
            }
            if frequencies.insert(byte, freq).is_some() {
                return Err(HuffmanError::malformed(format!(
                    "byte 0x{:02x} appears twice in the header",
                    byte
                )));
            }
        }

        let padding = read_u8(reader, "padding")?;
        if padding > 7 {
            return Err(HuffmanError::malformed(format!(
                "padding of {} bits is out of range",
                padding
            )));
        }

        Ok(ContainerHeader {
            frequencies,
            padding,
        })
    }
}

fn read_exact_field<R: Read>(reader: &mut R, buf: &mut [u8], field: &str) -> Result<()> {
    reader.read_exact(buf).map_err(|e| match e.kind() {
        io::ErrorKind::UnexpectedEof => {
            HuffmanError::malformed(format!("truncated header while reading {}", field))
        }
        _ => HuffmanError::Io(e),
    })
}

fn read_u8<R: Read>(reader: &mut R, field: &str) -> Result<u8> {
    let mut buf = [0u8; 1];
    read_exact_field(reader, &mut buf, field)?;
    Ok(buf[0])
}

fn read_u32<R: Read>(reader: &mut R, field: &str) -> Result<u32> {
    let mut buf = [0u8; 4];
    read_exact_field(reader, &mut buf, field)?;
    Ok(u32::from_le_bytes(buf))
}
