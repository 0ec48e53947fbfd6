use flate2::Compression;
use flate2::write::GzEncoder;
use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=notebook-index/index.json");

    let out_dir = env::var("OUT_DIR").unwrap();
    let input_path = "notebook-index/index.json";
    let output_path = Path::new(&out_dir).join("index.json.gz");

    // Read the exported index metadata
    let json_data = fs::read(input_path).expect("Failed to read notebook-index/index.json");

    // Compress the data
    let mut encoder = GzEncoder::new(Vec::new(), Compression::best());
    encoder
        .write_all(&json_data)
        .expect("Failed to compress index metadata");
    let compressed_data = encoder.finish().expect("Failed to finish compression");

    // Write compressed data to output directory
    fs::write(&output_path, &compressed_data).expect("Failed to write compressed index");
}
