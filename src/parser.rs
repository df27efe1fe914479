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
use std::io::BufRead;
use std::io::BufReader;
use std::io::Read;

use crate::Motif;

type E = Box<dyn std::error::Error>;

#[derive(Debug, Clone)]
pub struct DataBeforeHeader;

impl std::fmt::Display for DataBeforeHeader {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "data line before any motif header")
    }
}

impl std::error::Error for DataBeforeHeader {}

#[derive(Debug, Clone)]
pub struct MissingIdentifier;

impl std::fmt::Display for MissingIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "motif header line has no identifier token")
    }
}

impl std::error::Error for MissingIdentifier {}

/// Derives a safe artifact filename component from a motif identifier.
///
/// Lowercases the identifier, replaces every character outside `[a-z0-9]`
/// with an underscore, and collapses runs of underscores into one.
///
/// The result is idempotent: sanitizing an already sanitized name returns
/// the same string.
///
/// ## Usage
///
/// ```rust
/// use pfmdb::parser::sanitize_name;
///
/// assert_eq!(sanitize_name("Atf3(bZIP)"), "atf3_bzip_");
/// assert_eq!(sanitize_name("atf3_bzip_"), "atf3_bzip_");
/// ```
pub fn sanitize_name(
    name: &str,
) -> String {
    let mut sanitized = String::with_capacity(name.len());
    let mut prev_underscore = false;
    for character in name.to_lowercase().chars() {
        if character.is_ascii_alphanumeric() {
            sanitized.push(character);
            prev_underscore = false;
        } else if !prev_underscore {
            sanitized.push('_');
            prev_underscore = true;
        }
    }
    sanitized
}

/// Parse every motif record from a motif database.
///
/// A line containing the `>` marker opens a new record named by its second
/// tab-separated token; every other line is split on tabs and parsed as a row
/// of frequencies for the most recently opened record.
///
/// Returns the records in input order.
///
/// The numeric contents are not validated: rows of unequal length and
/// frequencies that do not sum to 1 are accepted as-is. Unparseable numeric
/// tokens, a header without an identifier token, and a data line before the
/// first header are errors.
///
/// ## Usage
///
/// ```rust
/// use pfmdb::parser::read_motifs;
/// use std::io::Cursor;
///
/// let mut data: Vec<u8> = b">AGGTCA\tMOTIF1\n".to_vec();
/// data.append(&mut b"0.1\t0.2\t0.3\t0.4\n".to_vec());
/// data.append(&mut b"0.5\t0.3\t0.1\t0.1\n".to_vec());
/// data.append(&mut b">TGACGT\tMOTIF2\n".to_vec());
/// data.append(&mut b"1.0\t0.0\t0.0\t0.0\n".to_vec());
///
/// let mut input: Cursor<Vec<u8>> = Cursor::new(data);
/// let got = read_motifs(&mut input).unwrap();
///
/// assert_eq!(got.len(), 2);
/// assert_eq!(got[0].name, "MOTIF1");
/// assert_eq!(got[0].file, "db/motif1.json.gz");
/// assert_eq!(got[1].positions, vec![vec![1.0, 0.0, 0.0, 0.0]]);
/// ```
pub fn read_motifs<R: Read>(
    conn_in: &mut R,
) -> Result<Vec<Motif>, E> {
    let separator: char = '\t';
    let reader = BufReader::new(conn_in);

    let mut motifs: Vec<Motif> = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();

        if line.contains('>') {
            let mut tokens = line.split(separator);
            // Consume the consensus sequence token
            tokens.next();
            let name = tokens.next().ok_or(MissingIdentifier)?;
            let file = "db/".to_string() + &sanitize_name(name) + ".json.gz";
            motifs.push(Motif{ name: name.to_string(), file, positions: Vec::new() });
        } else {
            let row = line.split(separator)
                .map(|token| token.parse::<f64>())
                .collect::<Result<Vec<f64>, _>>()?;
            motifs.last_mut().ok_or(DataBeforeHeader)?.positions.push(row);
        }
    }

    Ok(motifs)
}
