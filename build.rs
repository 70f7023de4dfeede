//! Build script to generate embedded datasets
//!
//! Reads the series data files and generates Rust source code with const line tables.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

const DATASETS: &[(&str, &str, &str, &str)] = &[
    (
        "data/naruto.csv",
        "naruto.rs",
        "NARUTO",
        "Naruto character dataset (header row + one character per line)",
    ),
    (
        "data/one_piece.csv",
        "one_piece.rs",
        "ONE_PIECE",
        "One Piece character dataset (header row + one character per line)",
    ),
    (
        "data/naruto_grid.csv",
        "naruto_grid.rs",
        "NARUTO_GRID",
        "Naruto grid buckets (category name followed by its bucket values)",
    ),
    (
        "data/words.txt",
        "words.rs",
        "WORDS",
        "Five-letter answer words for the letter game",
    ),
];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    for (input, output, const_name, doc_comment) in DATASETS {
        generate_line_table(
            input,
            &Path::new(&out_dir).join(output),
            const_name,
            doc_comment,
        );

        // Rebuild if the dataset changes
        println!("cargo:rerun-if-changed={input}");
    }
}

fn generate_line_table(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let lines: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let count = lines.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated dataset").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for line in lines {
        writeln!(output, "    {line:?},").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of lines in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
