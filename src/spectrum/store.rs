//! Pallet folder holding one table per spectrum

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use super::error::{PrismError, PrismResult};
use super::predicates::{SPECTRA, SPECTRUM_COUNT, Spectrum};
use super::row::ColorEntry;

/// Label used in storage errors for streams without a path
const STREAM_LABEL: &str = "-";

/// Classifier bound to a pallet folder and, optionally, a source table
#[derive(Debug, Clone)]
pub struct Prism {
    pallet: PathBuf,
    source: Option<PathBuf>,
}

/// Outcome of one rebuild pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RefractionSummary {
    /// Source rows that followed the row grammar
    pub rows: usize,
    /// Rows appended per spectrum, in `SPECTRA` order
    pub written: [usize; SPECTRUM_COUNT],
}

impl RefractionSummary {
    pub fn written_to(&self, name: &str) -> Option<usize> {
        SPECTRA
            .iter()
            .position(|s| s.name == name)
            .map(|i| self.written[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, usize)> + '_ {
        SPECTRA.iter().map(|s| s.name).zip(self.written.iter().copied())
    }
}

/// Names of the fixed spectra, in table order
pub fn categories() -> Vec<&'static str> {
    SPECTRA.iter().map(|s| s.name).collect()
}

/// Names of every spectrum the entry belongs to (possibly none, possibly all)
pub fn classify(entry: &ColorEntry) -> Vec<&'static str> {
    SPECTRA
        .iter()
        .filter(|s| s.contains(entry))
        .map(|s| s.name)
        .collect()
}

/// Feed every parseable row of `reader` to `on_entry`. Rows that do not follow
/// the grammar (including non UTF-8 lines) are skipped.
fn for_each_row<R, F>(reader: R, path: &Path, mut on_entry: F) -> PrismResult<()>
where
    R: BufRead,
    F: FnMut(ColorEntry) -> PrismResult<()>,
{
    for line in reader.split(b'\n') {
        let line = line.map_err(|e| PrismError::storage(path, e))?;
        let Ok(text) = std::str::from_utf8(&line) else {
            continue;
        };
        if let Ok(entry) = text.parse::<ColorEntry>() {
            on_entry(entry)?;
        }
    }
    Ok(())
}

impl Prism {
    pub fn new(pallet: impl Into<PathBuf>) -> Self {
        Self {
            pallet: pallet.into(),
            source: None,
        }
    }

    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn set_source(&mut self, source: impl Into<PathBuf>) {
        self.source = Some(source.into());
    }

    pub fn pallet(&self) -> &Path {
        &self.pallet
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    fn table_path(&self, spectrum: &Spectrum) -> PathBuf {
        self.pallet.join(format!("{}.txt", spectrum.name))
    }

    /// Path of the table backing `name`
    pub fn spectrum_path(&self, name: &str) -> PrismResult<PathBuf> {
        Spectrum::by_name(name)
            .map(|s| self.table_path(s))
            .ok_or_else(|| PrismError::UnknownSpectrum {
                name: name.to_string(),
            })
    }

    /// Reject a source that is one of this pallet's own tables
    fn check_source(&self, source: &Path) -> PrismResult<()> {
        let source = fs::canonicalize(source).map_err(|e| PrismError::storage(source, e))?;
        for spectrum in &SPECTRA {
            // A table that does not exist yet cannot be the source
            let Ok(table) = fs::canonicalize(self.table_path(spectrum)) else {
                continue;
            };
            if table == source {
                return Err(PrismError::SourceInPallet { path: source });
            }
        }
        Ok(())
    }

    fn ensure_pallet(&self) -> PrismResult<()> {
        fs::create_dir_all(&self.pallet).map_err(|e| PrismError::storage(&self.pallet, e))
    }

    /// Truncate every spectrum table to empty
    pub fn reset(&self) -> PrismResult<()> {
        self.ensure_pallet()?;
        for spectrum in &SPECTRA {
            let path = self.table_path(spectrum);
            File::create(&path).map_err(|e| PrismError::storage(&path, e))?;
        }
        Ok(())
    }

    /// Append every row of the configured source to the table of each spectrum
    /// it belongs to.
    ///
    /// Tables are not truncated first: calling this twice without `reset`
    /// appends every row twice. Use [`Prism::refresh`] for a clean rebuild.
    pub fn rebuild(&self) -> PrismResult<RefractionSummary> {
        let source = self.source.as_deref().ok_or(PrismError::MissingSource)?;
        self.check_source(source)?;
        let file = File::open(source).map_err(|e| PrismError::storage(source, e))?;
        self.refract(BufReader::new(file), source)
    }

    /// Same pass as [`Prism::rebuild`], reading rows from an arbitrary stream
    pub fn rebuild_from<R: BufRead>(&self, reader: R) -> PrismResult<RefractionSummary> {
        self.refract(reader, Path::new(STREAM_LABEL))
    }

    /// Reset then rebuild. Nothing is truncated when the source is missing,
    /// unreadable, or one of the pallet tables.
    pub fn refresh(&self) -> PrismResult<RefractionSummary> {
        let source = self.source.as_deref().ok_or(PrismError::MissingSource)?;
        self.check_source(source)?;
        self.reset()?;
        self.rebuild()
    }

    fn refract<R: BufRead>(&self, reader: R, source: &Path) -> PrismResult<RefractionSummary> {
        self.ensure_pallet()?;

        // All handles are opened up front and dropped on every exit path
        let mut tables = SPECTRA
            .iter()
            .map(|spectrum| {
                let path = self.table_path(spectrum);
                match OpenOptions::new().create(true).append(true).open(&path) {
                    Ok(file) => Ok((path, BufWriter::new(file))),
                    Err(e) => Err(PrismError::storage(path, e)),
                }
            })
            .collect::<PrismResult<Vec<_>>>()?;

        let mut summary = RefractionSummary::default();

        for_each_row(reader, source, |entry| {
            summary.rows += 1;
            for (i, spectrum) in SPECTRA.iter().enumerate() {
                if !spectrum.contains(&entry) {
                    continue;
                }
                let (path, writer) = &mut tables[i];
                writeln!(writer, "{}", entry).map_err(|e| PrismError::storage(&*path, e))?;
                summary.written[i] += 1;
            }
            Ok(())
        })?;

        for (path, writer) in &mut tables {
            writer.flush().map_err(|e| PrismError::storage(&*path, e))?;
        }

        Ok(summary)
    }

    /// Entries of one spectrum in file order
    pub fn read(&self, name: &str) -> PrismResult<Vec<ColorEntry>> {
        let path = self.spectrum_path(name)?;
        let file = File::open(&path).map_err(|e| PrismError::storage(&path, e))?;

        let mut entries = Vec::new();
        for_each_row(BufReader::new(file), &path, |entry| {
            entries.push(entry);
            Ok(())
        })?;
        Ok(entries)
    }

    /// Every spectrum with its entries, in table order
    pub fn read_all(&self) -> PrismResult<Vec<(&'static str, Vec<ColorEntry>)>> {
        SPECTRA
            .iter()
            .map(|s| Ok((s.name, self.read(s.name)?)))
            .collect()
    }
}
