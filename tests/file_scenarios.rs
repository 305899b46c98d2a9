//! End-to-end checks through the file entry points.

use std::fs;

use tempfile::TempDir;

use huffpack::{
    compress_file, decompress, decompress_file, ByteFrequency, CodeTable, HuffmanError, HuffmanTree,
};

fn roundtrip_file(contents: &[u8]) -> (TempDir, Vec<u8>, Vec<u8>) {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input.bin");
    let packed = dir.path().join("input.huf");
    let restored = dir.path().join("restored.bin");

    fs::write(&input, contents).unwrap();
    compress_file(&input, &packed, false).unwrap();
    decompress_file(&packed, &restored, false).unwrap();

    let container = fs::read(&packed).unwrap();
    let output = fs::read(&restored).unwrap();
    (dir, container, output)
}

#[test]
fn test_single_distinct_byte() {
    let (_dir, container, output) = roundtrip_file(b"aaaa");
    assert_eq!(&container[..4], &1u32.to_le_bytes());
    assert_eq!(container[4], b'a');
    assert_eq!(&container[5..9], &4u32.to_le_bytes());
    assert_eq!(output, b"aaaa");
}

#[test]
fn test_abracadabra() {
    let freq = ByteFrequency::from_bytes(b"abracadabra").unwrap();
    let expected: Vec<(u8, u32)> = vec![(b'a', 5), (b'b', 2), (b'c', 1), (b'd', 1), (b'r', 2)];
    assert_eq!(freq.iter().collect::<Vec<_>>(), expected);

    let table = CodeTable::from_tree(&HuffmanTree::from_frequencies(&freq).unwrap());
    assert_eq!(table.len(), 5);

    let (_dir, container, output) = roundtrip_file(b"abracadabra");
    // 4 + 5 * 5 + 1 header bytes, 23 bits packed into 3 bytes
    assert_eq!(container.len(), 30 + 3);
    assert_eq!(container[29], 1);
    assert_eq!(output, b"abracadabra");
}

#[test]
fn test_decodes_container_from_byte_zero_tie_rule() {
    // abracadabra with a=0 r=10 c=1100 d=1101 b=111, where the merged c+d
    // node ranks ahead of the b and r leaves of equal weight
    let mut container = vec![5, 0, 0, 0];
    for (byte, freq) in [(b'a', 5u32), (b'b', 2), (b'c', 1), (b'd', 1), (b'r', 2)] {
        container.push(byte);
        container.extend_from_slice(&freq.to_le_bytes());
    }
    container.push(1);
    container.extend_from_slice(&[0x79, 0x8d, 0x78]);

    assert_eq!(decompress(&container).unwrap(), b"abracadabra");
    assert_eq!(huffpack::compress(b"abracadabra").unwrap(), container);
}

#[test]
fn test_empty_input() {
    let (_dir, container, output) = roundtrip_file(b"");
    assert_eq!(container, vec![0, 0, 0, 0, 0]);
    assert!(output.is_empty());
}

#[test]
fn test_all_byte_values() {
    let data: Vec<u8> = (0..=255u8).cycle().take(10_000).collect();
    let (_dir, _container, output) = roundtrip_file(&data);
    assert_eq!(output, data);
}

#[test]
fn test_truncated_header_fails_without_output() {
    let dir = TempDir::new().unwrap();
    let packed = dir.path().join("bad.huf");
    let restored = dir.path().join("restored.bin");

    // claims 200 entries, carries one
    let mut bytes = 200u32.to_le_bytes().to_vec();
    bytes.extend_from_slice(&[b'a', 1, 0, 0, 0]);
    fs::write(&packed, &bytes).unwrap();

    let err = decompress_file(&packed, &restored, false).unwrap_err();
    assert!(matches!(err, HuffmanError::MalformedContainer { .. }), "{:?}", err);
    assert!(!restored.exists());
}

#[test]
fn test_corrupted_payload_is_malformed() {
    let mut container = huffpack::compress(b"abracadabra").unwrap();
    // drop the last payload byte
    container.pop();
    assert!(decompress(&container).unwrap_err().is_malformed());
}

#[test]
fn test_missing_input_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = compress_file(&dir.path().join("nope"), &dir.path().join("out"), false).unwrap_err();
    assert!(matches!(err, HuffmanError::Io(_)));
    assert!(!dir.path().join("out").exists());
}

#[test]
fn test_verbose_report() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.txt");
    let packed = dir.path().join("in.huf");
    fs::write(&input, "abracadabra").unwrap();

    let summary = compress_file(&input, &packed, true).unwrap();
    assert_eq!(summary.entries, 5);
    assert_eq!(summary.padding, 1);
    assert_eq!(summary.input_len, 11);
    let report = summary.report.unwrap();
    assert!(report.contains("Table size: 5 entries"));
    assert!(report.contains("Byte Frequency Table (sorted by frequency):"));
    assert!(report.contains("0x72 (114): 10 'r'"));

    let summary = decompress_file(&packed, &dir.path().join("out.txt"), false).unwrap();
    assert_eq!(summary.output_len, 11);
    assert!(summary.report.is_none());
}
