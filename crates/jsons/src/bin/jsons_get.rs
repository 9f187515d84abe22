//! `jsons-get`: print the node at a path in a JSON document.
//!
//! Usage:
//!   jsons-get [--type] [--] <segment>...
//!
//! The document is read from stdin. Canonical integer segments index
//! arrays; other segments name object members. A path that does not
//! resolve prints `undefined` and exits with status 1.

use jsons::cli::{lookup, Args, CliError};
use std::io::{self, Read, Write};

fn main() {
    let args = Args::parse(std::env::args().skip(1));

    let mut buf = Vec::new();
    if let Err(e) = io::stdin().read_to_end(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    match lookup(&buf, &args) {
        Ok(result) => {
            let mut stdout = io::stdout().lock();
            if let Err(e) = writeln!(stdout, "{result}") {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
        Err(CliError::Undefined) => {
            println!("undefined");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
