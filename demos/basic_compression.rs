use std::fs;

use huffpack::{compress_file, decompress_file};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let dir = std::env::temp_dir().join("huffpack-demo");
    fs::create_dir_all(&dir)?;
    let sample_path = dir.join("sample.txt");
    let packed_path = dir.join("sample.huf");
    let restored_path = dir.join("decompressed.txt");

    let sample_text = "Hello, world! This is a sample text for Huffman compression. \
                      The quick brown fox jumps over the lazy dog. \
                      Huffman encoding is a greedy algorithm that builds optimal prefix codes.";
    fs::write(&sample_path, sample_text)?;
    println!("Created sample file: {} bytes", sample_text.len());

    let summary = compress_file(&sample_path, &packed_path, true)?;
    if let Some(report) = &summary.report {
        print!("{}", report);
    }
    println!(
        "Compressed to: {} bytes ({:.1}% of original)",
        summary.output_len,
        summary.output_len as f64 / summary.input_len as f64 * 100.0
    );

    decompress_file(&packed_path, &restored_path, false)?;
    let restored = fs::read_to_string(&restored_path)?;
    if restored != sample_text {
        return Err("Decompression verification failed".into());
    }
    println!("Decompression successful, data matches exactly.");

    fs::remove_dir_all(&dir)?;
    Ok(())
}
