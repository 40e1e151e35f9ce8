//! Rebuild mode: sort a source table into the pallet

use prism::{Prism, categories};

use crate::output::{print_distribution, print_legend, print_warning};

use super::fail;

/// Rebuild the pallet from the configured source
pub fn run_refract(prism: &Prism, append: bool, quiet: bool) {
    if append && has_entries(prism) {
        print_warning("appending to a non-empty pallet, rows may be duplicated");
    }

    if !quiet && let Some(source) = prism.source() {
        eprint!("Refracting {}...", source.display());
    }

    let result = if append {
        prism.rebuild()
    } else {
        prism.refresh()
    };
    let summary = result.unwrap_or_else(|e| {
        if !quiet {
            eprintln!();
        }
        fail(e)
    });

    if !quiet {
        eprintln!(" done");
        println!();
        println!("Pallet: {}", prism.pallet().display());
        println!("Color rows: {}", summary.rows);
        println!();
    }

    print_distribution(&summary);

    if !quiet {
        println!();
        print_legend();
    }
}

/// Whether any existing spectrum table already holds rows
fn has_entries(prism: &Prism) -> bool {
    categories().into_iter().any(|name| {
        let exists = prism.spectrum_path(name).is_ok_and(|path| path.exists());
        exists && !prism.read(name).unwrap_or_else(|e| fail(e)).is_empty()
    })
}
