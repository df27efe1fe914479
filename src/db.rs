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
use std::fs::create_dir_all;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use log::info;

use crate::encoder::encode_index;
use crate::encoder::encode_matrix;
use crate::matrix::transpose;
use crate::IndexEntry;
use crate::Motif;

type E = Box<dyn std::error::Error>;

/// Name of the top-level index artifact.
pub const INDEX_FILE: &str = "db.json.gz";

/// Writes the per-motif artifacts and the index under `out_dir`.
///
/// Each motif is transposed, compressed, and written to
/// `<out_dir>/db/<sanitized name>.json.gz`; the index goes to
/// `<out_dir>/db.json.gz` and lists the motifs in input order.
///
/// Writes are not atomic: a failure partway through leaves the artifacts
/// written so far in place.
///
/// Returns the index entries.
pub fn write_db(
    motifs: &[Motif],
    out_dir: &Path,
) -> Result<Vec<IndexEntry>, E> {
    create_dir_all(out_dir.join("db"))?;

    let mut entries: Vec<IndexEntry> = Vec::with_capacity(motifs.len());
    for motif in motifs {
        let bases = transpose(&motif.positions);
        let bytes = encode_matrix(&bases)?;

        let mut conn_out = File::create(out_dir.join(&motif.file))?;
        conn_out.write_all(&bytes)?;

        info!("{}\t{}", motif.name, motif.file);
        entries.push(IndexEntry{ name: motif.name.clone(), file: motif.file.clone() });
    }

    let bytes = encode_index(&entries)?;
    let mut conn_out = File::create(out_dir.join(INDEX_FILE))?;
    conn_out.write_all(&bytes)?;

    Ok(entries)
}
