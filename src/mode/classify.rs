//! Classify mode: report the spectra of a single row

use prism::ColorEntry;

use crate::output::{print_error, print_spectra};

pub fn run_classify(row: &str) {
    let entry: ColorEntry = row.parse().unwrap_or_else(|e: prism::RowError| {
        print_error(&e.to_string());
        std::process::exit(1);
    });

    print_spectra(&prism::classify(&entry));
}
