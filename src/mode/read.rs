//! Read mode: print one spectrum table

use prism::Prism;

use super::fail;

pub fn run_read(prism: &Prism, name: &str, quiet: bool) {
    let entries = prism.read(name).unwrap_or_else(|e| fail(e));

    if !quiet {
        eprintln!("{}: {} entries", name, entries.len());
    }
    crate::output::print_entries(&entries);
}
