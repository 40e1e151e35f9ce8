//! Spectrum classification of named RGB colors

mod error;
mod predicates;
mod row;
mod store;

pub use error::{PrismError, PrismResult};
pub use predicates::{SPECTRA, SPECTRUM_COUNT, Spectrum};
pub use row::{ColorEntry, RowError};
pub use store::{Prism, RefractionSummary, categories, classify};
