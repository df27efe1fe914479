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

//! pfmdb is a library and a command-line client for:
//!
//!   - Converting plain text motif databases into gzip-compressed per-motif
//!     JSON artifacts plus a compressed index enumerating them.
//!   - Decompressing the artifacts back into plain text matrices.
//!
//! The input is a line-oriented, tab-separated motif database. A line
//! containing the `>` marker opens a new motif record and names it with its
//! second tab-separated token; every other line is a row of frequencies
//! belonging to the most recently opened record:
//!
//! ```text
//! >AGGTCA	MOTIF1
//! 0.1	0.2	0.3	0.4
//! 0.5	0.3	0.1	0.1
//! >TGACGT	MOTIF2
//! 1.0	0.0	0.0	0.0
//! ```
//!
//! Each motif is written as the transpose of its frequency rows (one row per
//! base, one column per matrix position) serialized as a JSON nested array and
//! gzip-compressed, at `db/<sanitized name>.json.gz`. The index `db.json.gz`
//! holds a JSON array of `{name, file}` objects in input order.
//!
//! ## Usage
//!
//! ### Command line
//!
//! The pfmdb CLI supports the following subcommands:
//!   - `pfmdb encode` convert a motif database into compressed JSON artifacts.
//!   - `pfmdb decode` decompress artifacts back to plain text.
//!
//! ### Rust API
//!
//! The API provides functions for operating on structs that implement
//! [Read] and/or [Write](std::io::Write):
//!
//!   - [read_motifs](parser::read_motifs): parses plain text motif records from a [Read].
//!   - [encode_motif]: transposes and compresses a single [Motif] to bytes.
//!   - [decode_matrix](decoder::decode_matrix): recovers the matrix stored in an artifact.
//!   - [convert_from_read]: runs the full conversion, writing the artifacts
//!     and the index under an output directory.
//!
//! See documentation for the appropriate functions for usage examples.
//!

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use serde::Serialize;

pub mod db;
pub mod decoder;
pub mod encoder;
pub mod matrix;
pub mod parser;

type E = Box<dyn std::error::Error>;

/// A named position frequency matrix parsed from a motif database.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Motif {
    /// Identifier from the second token of the header line.
    pub name: String,
    /// Artifact path derived from `name`, relative to the output directory.
    pub file: String,
    /// Frequency rows in input order, one row per matrix position.
    pub positions: Vec<Vec<f64>>,
}

/// One entry in the top-level database index.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct IndexEntry {
    /// Motif identifier.
    pub name: String,
    /// Path of the per-motif artifact, relative to the output directory.
    pub file: String,
}

/// Encode a single motif into a compressed artifact.
///
/// The artifact stores the transpose of the input rows: one row per base,
/// one column per matrix position.
///
/// ## Usage
///
/// ```rust
/// use pfmdb::{encode_motif, Motif};
/// use pfmdb::decoder::decode_matrix;
///
/// let motif = Motif {
///     name: "MOTIF1".to_string(),
///     file: "db/motif1.json.gz".to_string(),
///     positions: vec![vec![0.1, 0.2, 0.3, 0.4], vec![0.5, 0.3, 0.1, 0.1]],
/// };
///
/// let bytes = encode_motif(&motif).unwrap();
/// let got = decode_matrix(&bytes).unwrap();
///
/// let expected = vec![vec![0.1, 0.5], vec![0.2, 0.3], vec![0.3, 0.1], vec![0.4, 0.1]];
/// assert_eq!(got, expected);
/// ```
pub fn encode_motif(
    motif: &Motif,
) -> Result<Vec<u8>, E> {
    let bases = matrix::transpose(&motif.positions);
    encoder::encode_matrix(&bases)
}

/// Convert a motif database from [Read] into artifacts under `out_dir`.
///
/// Parses every motif record from `conn_in`, writes one compressed artifact
/// per motif under `<out_dir>/db/` and the index to `<out_dir>/db.json.gz`.
///
/// Returns the index entries in input order.
///
/// ## Usage
///
/// ```rust
/// use pfmdb::convert_from_read;
/// use std::io::Cursor;
///
/// let data = b">AGGTCA\tMOTIF1\n0.1\t0.2\t0.3\t0.4\n0.5\t0.3\t0.1\t0.1\n".to_vec();
/// let mut input: Cursor<Vec<u8>> = Cursor::new(data);
///
/// let out_dir = std::env::temp_dir().join("pfmdb-doctest-convert");
/// let entries = convert_from_read(&mut input, &out_dir).unwrap();
///
/// assert_eq!(entries.len(), 1);
/// assert_eq!(entries[0].name, "MOTIF1");
/// assert_eq!(entries[0].file, "db/motif1.json.gz");
/// ```
pub fn convert_from_read<R: Read>(
    conn_in: &mut R,
    out_dir: &Path,
) -> Result<Vec<IndexEntry>, E> {
    let motifs = parser::read_motifs(conn_in)?;
    db::write_db(&motifs, out_dir)
}
