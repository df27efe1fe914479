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

/// Transposes a row-major matrix.
///
/// The input rows are the matrix positions, the output rows are the bases.
/// Rows of unequal length are accepted: the output has one row per column of
/// the longest input row, and input rows that do not reach a column
/// contribute no value to it.
///
/// ## Usage
///
/// ```rust
/// use pfmdb::matrix::transpose;
///
/// let rows = vec![vec![0.1, 0.2, 0.3, 0.4], vec![0.5, 0.3, 0.1, 0.1]];
/// let got = transpose(&rows);
///
/// let expected = vec![vec![0.1, 0.5], vec![0.2, 0.3], vec![0.3, 0.1], vec![0.4, 0.1]];
/// assert_eq!(got, expected);
/// ```
pub fn transpose(
    rows: &[Vec<f64>],
) -> Vec<Vec<f64>> {
    let n_cols = rows.iter().map(|row| row.len()).max().unwrap_or(0);
    (0..n_cols).map(|col_idx| {
        rows.iter().filter_map(|row| row.get(col_idx).copied()).collect()
    }).collect()
}

// Tests
#[cfg(test)]
mod tests {

    #[test]
    fn transpose_dimensions_swap() {
        use super::transpose;

        let rows = vec![vec![0.1, 0.2, 0.3, 0.4], vec![0.5, 0.3, 0.1, 0.1]];
        let got = transpose(&rows);

        assert_eq!(got.len(), 4);
        assert!(got.iter().all(|row| row.len() == 2));
    }

    #[test]
    fn transpose_involution() {
        use super::transpose;

        let rows = vec![vec![1.0, 0.0, 0.0, 0.0], vec![0.25, 0.25, 0.25, 0.25]];
        let got = transpose(&transpose(&rows));

        assert_eq!(got, rows);
    }

    #[test]
    fn transpose_empty() {
        use super::transpose;

        let rows: Vec<Vec<f64>> = Vec::new();
        let got = transpose(&rows);

        assert!(got.is_empty());
    }

    #[test]
    fn transpose_ragged_rows() {
        use super::transpose;

        let rows = vec![vec![0.1, 0.2], vec![0.3]];
        let got = transpose(&rows);

        let expected = vec![vec![0.1, 0.3], vec![0.2]];
        assert_eq!(got, expected);
    }

    #[test]
    fn transpose_ragged_rows_longest_later() {
        use super::transpose;

        let rows = vec![vec![0.3], vec![0.1, 0.2]];
        let got = transpose(&rows);

        let expected = vec![vec![0.3, 0.1], vec![0.2]];
        assert_eq!(got, expected);
    }

    #[test]
    fn transpose_single_row() {
        use super::transpose;

        let rows = vec![vec![1.0, 0.0, 0.0, 0.0]];
        let got = transpose(&rows);

        let expected = vec![vec![1.0], vec![0.0], vec![0.0], vec![0.0]];
        assert_eq!(got, expected);
    }
}
