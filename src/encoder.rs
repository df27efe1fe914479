// pfmdb: Compression and conversion of position frequency matrix databases.
//
// Copyrights in this project are retained by contributors. No copyright assignment
// is required to contribute to this project.
//
// Except as otherwise noted (below and/or in individual files), this
// project is licensed under the Apache License, Version 2.0
// <LICENSE-APACHE> or <http://www.apache.org/licenses/LICENSE-2.0> or
// the MIT license, <LICENSE-MIT> or <http://opensource.org/licenses/MIT>,
// at your option.
//
use std::io::Write;

use flate2::write::GzEncoder;
use flate2::Compression;

use crate::IndexEntry;

type E = Box<dyn std::error::Error>;

fn deflate_bytes(
    bytes: &[u8],
) -> Result<Vec<u8>, E> {
    let mut deflated: Vec<u8> = Vec::with_capacity(bytes.len());
    let mut encoder = GzEncoder::new(&mut deflated, Compression::default());
    encoder.write_all(bytes)?;
    encoder.finish()?;
    Ok(deflated)
}

/// Serializes a base-major matrix as JSON and compresses the bytes.
pub fn encode_matrix(
    bases: &[Vec<f64>],
) -> Result<Vec<u8>, E> {
    let serialized = serde_json::to_vec(bases)?;
    deflate_bytes(&serialized)
}

/// Serializes the database index as JSON and compresses the bytes.
pub fn encode_index(
    entries: &[IndexEntry],
) -> Result<Vec<u8>, E> {
    let serialized = serde_json::to_vec(entries)?;
    deflate_bytes(&serialized)
}

// Tests
#[cfg(test)]
mod tests {

    #[test]
    fn encode_matrix_is_gzip() {
        use super::encode_matrix;

        let bases = vec![vec![0.1, 0.5], vec![0.2, 0.3]];
        let got = encode_matrix(&bases).unwrap();

        // Gzip magic bytes
        assert_eq!(got[0..2], [0x1f, 0x8b]);
    }

    #[test]
    fn encode_index_is_gzip() {
        use crate::IndexEntry;
        use super::encode_index;

        let entries = vec![
            IndexEntry{ name: "MOTIF1".to_string(), file: "db/motif1.json.gz".to_string() },
        ];
        let got = encode_index(&entries).unwrap();

        assert_eq!(got[0..2], [0x1f, 0x8b]);
    }
}
