use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use log::{debug, info, warn};
use tempfile::NamedTempFile;

use crate::bit_vec::BitVec;
use crate::code_table::{Code, CodeTable};
use crate::container::CompressedContainer;
use crate::error::{HuffmanError, Result};
use crate::frequency::ByteFrequency;
use crate::hufftree::HuffmanTree;
use crate::report;

/// A frequency table together with the tree and codes derived from it.
///
/// The compressor builds one from the input and the decompressor rebuilds
/// an identical one from the frequency table stored in the container.
#[derive(Debug, Clone)]
pub struct HuffmanCodec {
    frequencies: ByteFrequency,
    tree: HuffmanTree,
    table: CodeTable,
}

impl HuffmanCodec {
    pub fn new(frequencies: ByteFrequency) -> Result<Self> {
        let tree = HuffmanTree::from_frequencies(&frequencies)?;
        let table = CodeTable::from_tree(&tree);
        Ok(HuffmanCodec {
            frequencies,
            tree,
            table,
        })
    }

    pub fn from_data(data: &[u8]) -> Result<Self> {
        Self::new(ByteFrequency::from_bytes(data)?)
    }

    pub fn frequencies(&self) -> &ByteFrequency {
        &self.frequencies
    }

    pub fn tree(&self) -> &HuffmanTree {
        &self.tree
    }

    pub fn table(&self) -> &CodeTable {
        &self.table
    }

    /// Concatenate the code of every byte of `data`, in order.
    pub fn encode(&self, data: &[u8]) -> Result<BitVec> {
        let mut bit_vec = BitVec::new();
        for &byte in data {
            let code = self
                .table
                .get(byte)
                .ok_or(HuffmanError::MissingCode { byte })?;
            bit_vec.push_code(code);
        }
        Ok(bit_vec)
    }

    /// Greedy prefix matching of `bits` against the reverse code table.
    ///
    /// Fails if bits are left over that do not complete a codeword, or if the
    /// number of decoded bytes disagrees with the frequency table.
    pub fn decode(&self, bits: &BitVec) -> Result<Vec<u8>> {
        let expected = self.frequencies.total();
        let max_len = self.table.max_code_len();
        // every byte costs at least one bit
        let mut result = Vec::with_capacity(expected.min(bits.len() as u64) as usize);
        let mut candidate = Code::new();

        for (index, bit) in bits.iter().enumerate() {
            candidate.push(bit);
            if let Some(byte) = self.table.lookup(&candidate) {
                result.push(byte);
                candidate.clear();
            } else if candidate.len() >= max_len {
                return Err(HuffmanError::malformed(format!(
                    "bits ending at offset {} match no codeword",
                    index
                )));
            }
        }

        if !candidate.is_empty() {
            return Err(HuffmanError::malformed(format!(
                "{} residual bits at end of stream",
                candidate.len()
            )));
        }

        if result.len() as u64 != expected {
            return Err(HuffmanError::malformed(format!(
                "Expected {} bytes, got {}",
                expected,
                result.len()
            )));
        }

        Ok(result)
    }

    pub fn compress(&self, data: &[u8]) -> Result<CompressedContainer> {
        let bits = self.encode(data)?;
        debug!(
            "encoded {} bytes into {} bits with {} codes",
            data.len(),
            bits.len(),
            self.table.len()
        );
        Ok(CompressedContainer::new(self.frequencies.clone(), bits))
    }

    /// The verbose report for this codec.
    pub fn report(&self, padding: u8) -> String {
        report::render_report(padding, &self.frequencies, &self.tree, &self.table)
    }
}

/// Compress `data` into container bytes.
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    let codec = HuffmanCodec::from_data(data)?;
    Ok(codec.compress(data)?.serialize()?)
}

/// Restore the original bytes from container bytes.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    let container = CompressedContainer::deserialize(data)?;
    decode_container(&container).map(|(decoded, _)| decoded)
}

fn decode_container(container: &CompressedContainer) -> Result<(Vec<u8>, HuffmanCodec)> {
    let codec = HuffmanCodec::new(container.frequencies.clone())?;
    let bits = container.bits()?;
    debug!(
        "decoding {} bits (padding {}) with {} codes",
        bits.len(),
        container.padding,
        codec.table().len()
    );
    let decoded = codec.decode(&bits)?;
    Ok((decoded, codec))
}

/// Outcome of a file operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub input_len: usize,
    pub output_len: usize,
    pub entries: usize,
    pub padding: u8,
    /// Rendered tables and tree, present when requested
    pub report: Option<String>,
}

pub fn compress_file(input: &Path, output: &Path, verbose: bool) -> Result<Summary> {
    let data = fs::read(input)?;
    let codec = HuffmanCodec::from_data(&data)?;
    let container = codec.compress(&data)?;
    let bytes = container.serialize()?;

    write_output(output, &bytes)?;
    info!(
        "compressed {} ({} bytes) to {} ({} bytes)",
        input.display(),
        data.len(),
        output.display(),
        bytes.len()
    );

    Ok(Summary {
        input_len: data.len(),
        output_len: bytes.len(),
        entries: container.entry_count(),
        padding: container.padding,
        report: verbose.then(|| codec.report(container.padding)),
    })
}

pub fn decompress_file(input: &Path, output: &Path, verbose: bool) -> Result<Summary> {
    let data = fs::read(input)?;
    let container = CompressedContainer::deserialize(&data)?;
    let (decoded, codec) = decode_container(&container)?;

    write_output(output, &decoded)?;
    info!(
        "decompressed {} ({} bytes) to {} ({} bytes)",
        input.display(),
        data.len(),
        output.display(),
        decoded.len()
    );

    Ok(Summary {
        input_len: data.len(),
        output_len: decoded.len(),
        entries: container.entry_count(),
        padding: container.padding,
        report: verbose.then(|| codec.report(container.padding)),
    })
}

fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    write_output_with(path, |writer| writer.write_all(bytes))
}

/// Stage the output in a temporary file next to `path` and move it into place
/// only once `fill` has succeeded, so a failed write leaves `path` untouched.
///
/// Paths that exist but are not regular files (`/dev/null`, a fifo) are
/// written in place and never replaced or removed.
fn write_output_with<F>(path: &Path, fill: F) -> Result<()>
where
    F: FnOnce(&mut dyn Write) -> io::Result<()>,
{
    if fs::metadata(path).is_ok_and(|m| !m.is_file()) {
        let mut file = OpenOptions::new().write(true).open(path)?;
        fill(&mut file)?;
        return Ok(());
    }

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut staged = NamedTempFile::new_in(dir)?;
    let written = fill(&mut staged).and_then(|_| staged.as_file().sync_all());
    if let Err(e) = written {
        warn!("discarding partial output for {}: {}", path.display(), e);
        // dropping `staged` deletes the temporary file
        return Err(e.into());
    }
    staged.persist(path).map_err(|e| e.error)?;
    Ok(())
}
