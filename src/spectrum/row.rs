//! Row grammar shared by source tables and pallet tables
//!
//! A row is three decimal channel values and a name, optionally followed by a
//! `#` comment:
//!
//! ```text
//! 255 250 250    snow   # optional comment
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

static ROW_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([0-9]+)\s+([0-9]+)\s+([0-9]+)\s+(\w(?:[\w ]*\w)?)\s*(?:#.*)?$")
        .expect("valid regex")
});

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\w(?:[\w ]*\w)?$").expect("valid regex"));

/// One named RGB color
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColorEntry {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    name: String,
}

/// Why a single row was rejected. Table readers skip such rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowError {
    /// Line does not follow the row grammar
    Malformed(String),
    /// Channel value outside 0..=255
    ChannelOutOfRange { value: String },
    /// Name is empty or contains characters the grammar cannot carry back
    InvalidName(String),
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowError::Malformed(line) => write!(f, "Not a color row: {:?}", line),
            RowError::ChannelOutOfRange { value } => {
                write!(f, "Channel value {} is outside 0-255", value)
            }
            RowError::InvalidName(name) => write!(f, "Invalid color name: {:?}", name),
        }
    }
}

impl std::error::Error for RowError {}

impl ColorEntry {
    /// Build an entry, rejecting names that would not parse back
    pub fn new(r: u8, g: u8, b: u8, name: impl Into<String>) -> Result<Self, RowError> {
        let name = name.into();
        if !NAME_RE.is_match(&name) {
            return Err(RowError::InvalidName(name));
        }
        Ok(Self { r, g, b, name })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }
}

fn parse_channel(digits: &str) -> Result<u8, RowError> {
    digits.parse::<u8>().map_err(|_| RowError::ChannelOutOfRange {
        value: digits.to_string(),
    })
}

impl FromStr for ColorEntry {
    type Err = RowError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let caps = ROW_RE
            .captures(line)
            .ok_or_else(|| RowError::Malformed(line.to_string()))?;

        Ok(Self {
            r: parse_channel(&caps[1])?,
            g: parse_channel(&caps[2])?,
            b: parse_channel(&caps[3])?,
            name: caps[4].to_string(),
        })
    }
}

/// Serialized table row, without the trailing newline
impl fmt::Display for ColorEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<3} {:<3} {:<3}    {}",
            self.r, self.g, self.b, self.name
        )
    }
}
