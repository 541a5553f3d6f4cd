//! Reads a JSON5 file, times the parse, and prints the resulting tree.
//!
//! ```sh
//! cargo run --example dump -- config.json5
//! ```

use std::{env, fs, process::ExitCode, time::Instant};

use json5tree::{ParserOptions, parse};

fn main() -> ExitCode {
    let Some(path) = env::args().nth(1) else {
        eprintln!("usage: dump <file.json5>");
        return ExitCode::FAILURE;
    };

    let mut text = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("dump: {path}: {err}");
            return ExitCode::FAILURE;
        }
    };
    let bytes = text.len();

    let options = ParserOptions {
        strip_comments: true,
        ..ParserOptions::default()
    };

    let started = Instant::now();
    let root = match parse(&mut text, options) {
        Ok(root) => root,
        Err(err) => {
            eprintln!("dump: {path}: {err}");
            return ExitCode::FAILURE;
        }
    };
    let elapsed = started.elapsed();

    println!("{root}");
    eprintln!("parsed {bytes} bytes in {elapsed:?}");
    ExitCode::SUCCESS
}
