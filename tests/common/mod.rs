//! Common test utilities

use std::io::Write;
use std::path::{Path, PathBuf};

/// Rows of a small source table covering every spectrum
pub const PRIMARIES: &[(u8, u8, u8, &str)] = &[
    (0, 0, 0, "black"),
    (255, 255, 255, "white"),
    (255, 0, 0, "red"),
    (0, 255, 0, "green"),
    (0, 0, 255, "blue"),
    (0, 255, 255, "cyan"),
    (255, 255, 0, "yellow"),
    (255, 0, 255, "magenta"),
];

/// Format one source row the way hand-written rgb.txt files look
pub fn source_row(r: u8, g: u8, b: u8, name: &str) -> String {
    format!("{:>3} {:>3} {:>3}\t\t{}", r, g, b, name)
}

/// Write raw lines as a source table
pub fn write_source(path: &Path, lines: &[&str]) -> std::io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    for line in lines {
        writeln!(file, "{}", line)?;
    }
    Ok(())
}

/// Write a source table from (r, g, b, name) rows
pub fn write_rows(path: &Path, rows: &[(u8, u8, u8, &str)]) -> std::io::Result<()> {
    let lines: Vec<String> = rows
        .iter()
        .map(|&(r, g, b, name)| source_row(r, g, b, name))
        .collect();
    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
    write_source(path, &refs)
}

/// Path of a spectrum table inside a pallet folder
pub fn table(pallet: &Path, name: &str) -> PathBuf {
    pallet.join(format!("{}.txt", name))
}

/// Non-empty lines of a spectrum table
pub fn table_lines(pallet: &Path, name: &str) -> Vec<String> {
    std::fs::read_to_string(table(pallet, name))
        .unwrap_or_default()
        .lines()
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}
