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
use std::fs::File;
use std::io::BufWriter;
use std::io::Read;
use std::io::Write;

use clap::Parser;
use log::info;

mod cli;

/// Initializes the logger with verbosity given in `log_max_level`.
fn init_log(log_max_level: usize) {
    stderrlog::new()
    .module(module_path!())
    .quiet(false)
    .verbosity(log_max_level)
    .timestamp(stderrlog::Timestamp::Off)
    .init()
    .unwrap();
}

fn main() {
    let cli = cli::Cli::parse();

    // Subcommands:
    match &cli.command {
        // Encode
        Some(cli::Commands::Encode {
            input_file,
            out_dir,
            verbose,
        }) => {
            init_log(if *verbose { 2 } else { 1 });

            let mut conn_in = File::open(input_file).unwrap();
            let entries = pfmdb::convert_from_read(&mut conn_in, out_dir).unwrap();

            info!("Wrote {} motifs under {}", entries.len(), out_dir.display());
        },

        // Decode
        Some(cli::Commands::Decode {
            input_files,
            verbose,
        }) => {
            init_log(if *verbose { 2 } else { 1 });

            let stdout = std::io::stdout();
            let mut conn_out = BufWriter::new(stdout.lock());

            input_files.iter().for_each(|file| {
                let mut bytes: Vec<u8> = Vec::new();
                File::open(file).unwrap().read_to_end(&mut bytes).unwrap();

                match pfmdb::decoder::decode_artifact(&bytes).unwrap() {
                    pfmdb::decoder::Artifact::Matrix(bases) => {
                        // Print in the input orientation: one row per position
                        let positions = pfmdb::matrix::transpose(&bases);
                        positions.iter().for_each(|row| {
                            let line = row.iter().map(|x| x.to_string()).collect::<Vec<String>>().join("\t") + "\n";
                            let _ = conn_out.write_all(line.as_bytes());
                        });
                    },
                    pfmdb::decoder::Artifact::Index(entries) => {
                        entries.iter().for_each(|entry| {
                            let line = entry.name.clone() + "\t" + &entry.file + "\n";
                            let _ = conn_out.write_all(line.as_bytes());
                        });
                    },
                }
            });

            conn_out.flush().unwrap();
        },

        None => { todo!("Print help message.")},
    }
}
