//! Sorts tables of named RGB colors into one pallet table per spectrum.
//!
//! ```no_run
//! use prism::Prism;
//!
//! let prism = Prism::new("pallet").with_source("rgb.txt");
//! prism.refresh()?;
//! for entry in prism.read("gray")? {
//!     println!("{}", entry);
//! }
//! # Ok::<(), prism::PrismError>(())
//! ```

pub mod spectrum;

pub use spectrum::{
    ColorEntry, Prism, PrismError, PrismResult, RefractionSummary, RowError, SPECTRA,
    SPECTRUM_COUNT, Spectrum, categories, classify,
};
