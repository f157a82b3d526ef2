//! Build script to generate the embedded dictionary
//!
//! Reads `data/dictionary.txt` and generates a Rust const array compiled into
//! the binary.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

const DICTIONARY_PATH: &str = "data/dictionary.txt";

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let out_path = Path::new(&out_dir).join("dictionary.rs");

    let content = fs::read_to_string(DICTIONARY_PATH)
        .unwrap_or_else(|e| panic!("Failed to read {DICTIONARY_PATH}: {e}"));
    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .collect();

    let mut output = fs::File::create(&out_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", out_path.display()));

    writeln!(output, "// Generated word list").unwrap();
    writeln!(output, "/// Embedded dictionary of mixed-length words").unwrap();
    writeln!(output, "pub const WORDS: &[&str] = &[").unwrap();
    for word in &words {
        writeln!(output, "    \"{word}\",").unwrap();
    }
    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in WORDS").unwrap();
    writeln!(output, "pub const WORDS_COUNT: usize = {};", words.len()).unwrap();

    // Rebuild if the word list changes
    println!("cargo:rerun-if-changed={DICTIONARY_PATH}");
}
