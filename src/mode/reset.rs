//! Reset mode: truncate every spectrum table

use prism::Prism;

use super::fail;

pub fn run_reset(prism: &Prism, quiet: bool) {
    prism.reset().unwrap_or_else(|e| fail(e));

    if !quiet {
        eprintln!("Pallet reset: {}", prism.pallet().display());
    }
}
