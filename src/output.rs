use colored::*;
use prism::{ColorEntry, RefractionSummary};

/// Width of one spectrum column in distribution tables
const COLUMN_WIDTH: usize = 8;

fn style_label(label: &str) -> ColoredString {
    label.bold()
}

pub(crate) fn print_error(msg: &str) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

pub(crate) fn print_warning(msg: &str) {
    eprintln!("{}: {}", "warning".yellow().bold(), msg);
}

pub(crate) fn print_separator(columns: usize, prefix_width: usize) {
    println!("{}", "-".repeat(prefix_width + columns * COLUMN_WIDTH));
}

pub(crate) fn print_header(names: &[&str], prefix: &str) {
    print!("{}", prefix);
    for name in names {
        print!(" {:>7}", name);
    }
    println!();
}

pub(crate) fn print_counts(label: &str, counts: &[usize]) {
    print!("{}", style_label(label));
    for count in counts {
        if *count == 0 {
            print!("       -");
        } else {
            print!(" {:>7}", count);
        }
    }
    println!();
}

pub(crate) fn print_distribution(summary: &RefractionSummary) {
    let (names, counts): (Vec<&str>, Vec<usize>) = summary.iter().unzip();

    println!("[Spectrum Distribution]");
    print_header(&names, "        ");
    print_separator(names.len(), 8);
    print_counts("Rows    ", &counts);
}

pub(crate) fn print_entries(entries: &[ColorEntry]) {
    for entry in entries {
        println!("{}", entry);
    }
}

pub(crate) fn print_spectra(names: &[&str]) {
    if names.is_empty() {
        println!("(none)");
    } else {
        println!("{}", names.join(" "));
    }
}

pub(crate) fn print_legend() {
    println!("Rows: Entries written to each spectrum table");
    println!("A color may belong to several spectra, or to none.");
}
