//! Build script to generate embedded word lists
//!
//! Reads the per-length word list files and generates Rust source code with
//! const arrays, one acceptable list and one candidate list per word length.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

const LENGTHS: [usize; 4] = [4, 5, 6, 7];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let output_path = Path::new(&out_dir).join("wordlists.rs");
    let mut output = fs::File::create(&output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word lists").unwrap();
    writeln!(output).unwrap();

    for length in LENGTHS {
        let check_path = format!("data/check_words/{length}_letter_words.txt");
        let pick_path = format!("data/pick_words/{length}_letter_words.txt");

        generate_word_list(
            &mut output,
            &check_path,
            &format!("ACCEPTABLE_{length}"),
            &format!("Acceptable {length}-letter guesses"),
        );
        generate_word_list(
            &mut output,
            &pick_path,
            &format!("CANDIDATES_{length}"),
            &format!("Candidate {length}-letter target words"),
        );

        println!("cargo:rerun-if-changed={check_path}");
        println!("cargo:rerun-if-changed={pick_path}");
    }
}

fn generate_word_list(output: &mut fs::File, input_path: &str, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    writeln!(output, "/// {doc_comment} ({} words)", words.len()).unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    \"{word}\",").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
}
