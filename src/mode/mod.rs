//! CLI mode implementations

mod classify;
mod read;
mod refract;
mod reset;

pub use classify::run_classify;
pub use read::run_read;
pub use refract::run_refract;
pub use reset::run_reset;

use prism::PrismError;

use crate::output::print_error;

/// Print the error and leave with status 1
pub(crate) fn fail(err: PrismError) -> ! {
    print_error(&err.to_string());
    std::process::exit(1);
}

/// List the spectrum names, one per line
pub fn run_list() {
    for name in prism::categories() {
        println!("{}", name);
    }
}
