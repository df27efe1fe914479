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

use flate2::write::GzDecoder;
use serde::Deserialize;

use crate::IndexEntry;

type E = Box<dyn std::error::Error>;

/// Contents of a decompressed .json.gz artifact.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Artifact {
    /// A per-motif artifact: base-major frequency matrix.
    Matrix(Vec<Vec<f64>>),
    /// The top-level database index.
    Index(Vec<IndexEntry>),
}

fn inflate_bytes(
    deflated: &[u8],
) -> Result<Vec<u8>, E> {
    let mut inflated: Vec<u8> = Vec::new();
    let mut decoder = GzDecoder::new(&mut inflated);
    decoder.write_all(deflated)?;
    decoder.finish()?;
    Ok(inflated)
}

/// Decompresses and parses a per-motif artifact.
pub fn decode_matrix(
    bytes: &[u8],
) -> Result<Vec<Vec<f64>>, E> {
    let inflated = inflate_bytes(bytes)?;
    Ok(serde_json::from_slice(&inflated)?)
}

/// Decompresses and parses the database index.
pub fn decode_index(
    bytes: &[u8],
) -> Result<Vec<IndexEntry>, E> {
    let inflated = inflate_bytes(bytes)?;
    Ok(serde_json::from_slice(&inflated)?)
}

/// Decompresses an artifact without knowing which kind it is.
pub fn decode_artifact(
    bytes: &[u8],
) -> Result<Artifact, E> {
    let inflated = inflate_bytes(bytes)?;
    Ok(serde_json::from_slice(&inflated)?)
}

// Tests
#[cfg(test)]
mod tests {

    #[test]
    fn decode_matrix_roundtrip() {
        use crate::encoder::encode_matrix;
        use super::decode_matrix;

        let bases = vec![vec![0.1, 0.5], vec![0.2, 0.3], vec![0.3, 0.1], vec![0.4, 0.1]];

        let bytes = encode_matrix(&bases).unwrap();
        let got = decode_matrix(&bytes).unwrap();

        assert_eq!(got, bases);
    }

    #[test]
    fn decode_index_roundtrip() {
        use crate::IndexEntry;
        use crate::encoder::encode_index;
        use super::decode_index;

        let entries = vec![
            IndexEntry{ name: "MOTIF1".to_string(), file: "db/motif1.json.gz".to_string() },
            IndexEntry{ name: "MOTIF2".to_string(), file: "db/motif2.json.gz".to_string() },
        ];

        let bytes = encode_index(&entries).unwrap();
        let got = decode_index(&bytes).unwrap();

        assert_eq!(got, entries);
    }

    #[test]
    fn decode_artifact_discriminates() {
        use crate::IndexEntry;
        use crate::encoder::encode_index;
        use crate::encoder::encode_matrix;
        use super::decode_artifact;
        use super::Artifact;

        let bases = vec![vec![0.1, 0.5], vec![0.2, 0.3]];
        let entries = vec![
            IndexEntry{ name: "MOTIF1".to_string(), file: "db/motif1.json.gz".to_string() },
        ];

        let got_matrix = decode_artifact(&encode_matrix(&bases).unwrap()).unwrap();
        let got_index = decode_artifact(&encode_index(&entries).unwrap()).unwrap();

        assert_eq!(got_matrix, Artifact::Matrix(bases));
        assert_eq!(got_index, Artifact::Index(entries));
    }

    #[test]
    fn decode_matrix_rejects_garbage() {
        use super::decode_matrix;

        let bytes: Vec<u8> = b"not a gzip stream".to_vec();
        let got = decode_matrix(&bytes);

        assert!(got.is_err());
    }
}
