//! Error types for pallet operations

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Result type alias for pallet operations
pub type PrismResult<T> = Result<T, PrismError>;

#[derive(Debug)]
pub enum PrismError {
    /// Rebuild requested but no source table is configured
    MissingSource,

    /// Spectrum name is not one of the fixed spectra
    UnknownSpectrum { name: String },

    /// Source table is one of the pallet tables it would be sorted into
    SourceInPallet { path: PathBuf },

    /// A source or pallet table could not be opened, read, or written
    Storage { path: PathBuf, source: io::Error },
}

impl PrismError {
    pub(crate) fn storage(path: impl Into<PathBuf>, source: io::Error) -> Self {
        PrismError::Storage {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for PrismError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrismError::MissingSource => write!(f, "No source table configured"),
            PrismError::UnknownSpectrum { name } => {
                write!(f, "Unknown spectrum '{}'", name)
            }
            PrismError::SourceInPallet { path } => {
                write!(
                    f,
                    "Source table {} is part of the pallet and would be overwritten",
                    path.display()
                )
            }
            PrismError::Storage { path, source } => {
                write!(f, "Storage error on {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for PrismError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PrismError::Storage { source, .. } => Some(source),
            _ => None,
        }
    }
}
