//! Canonical symbols read from a text file.
//!
//! Symbols may be separated by commas, spaces or new lines. Each one is passed to the
//! server exactly as written in the file, including its casing: alias lookups are
//! case-sensitive.
use signal_common::Result;
use std::io::BufRead;

/// Parses canonical symbols from a buffered reader.
///
/// Empty fields are skipped; duplicates are kept in file order.
pub fn parse_from_file<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut symbols = Vec::new();

    for line_result in reader.lines() {
        let line = line_result?;
        symbols.extend(
            line.split(|c: char| c == ',' || c.is_whitespace())
                .filter(|field| !field.is_empty())
                .map(String::from),
        );
    }
    Ok(symbols)
}
