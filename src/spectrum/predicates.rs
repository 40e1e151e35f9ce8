//! Spectrum definitions

use super::row::ColorEntry;

/// Named color predicate with its pallet table name
#[derive(Debug)]
pub struct Spectrum {
    pub name: &'static str,
    predicate: fn(u8, u8, u8) -> bool,
}

/// Number of fixed spectra
pub const SPECTRUM_COUNT: usize = 9;

/// The fixed spectra. Membership is evaluated independently for each.
pub static SPECTRA: [Spectrum; SPECTRUM_COUNT] = [
    Spectrum {
        name: "gray",
        predicate: is_gray,
    },
    Spectrum {
        name: "light",
        predicate: is_light,
    },
    Spectrum {
        name: "dark",
        predicate: is_dark,
    },
    Spectrum {
        name: "red",
        predicate: is_red,
    },
    Spectrum {
        name: "green",
        predicate: is_green,
    },
    Spectrum {
        name: "blue",
        predicate: is_blue,
    },
    Spectrum {
        name: "cyan",
        predicate: is_cyan,
    },
    Spectrum {
        name: "yellow",
        predicate: is_yellow,
    },
    Spectrum {
        name: "magenta",
        predicate: is_magenta,
    },
];

impl Spectrum {
    /// Look up one of the fixed spectra by name
    pub fn by_name(name: &str) -> Option<&'static Spectrum> {
        SPECTRA.iter().find(|s| s.name == name)
    }

    pub fn matches(&self, r: u8, g: u8, b: u8) -> bool {
        (self.predicate)(r, g, b)
    }

    pub fn contains(&self, entry: &ColorEntry) -> bool {
        self.matches(entry.r, entry.g, entry.b)
    }
}

fn is_gray(r: u8, g: u8, b: u8) -> bool {
    r == g && g == b
}

fn is_light(r: u8, g: u8, b: u8) -> bool {
    r > 200 && g > 200 && b > 200
}

// A channel of exactly 200 is neither light nor dark
fn is_dark(r: u8, g: u8, b: u8) -> bool {
    r < 200 && g < 200 && b < 200
}

fn is_red(r: u8, g: u8, b: u8) -> bool {
    r > g && r > b
}

fn is_green(r: u8, g: u8, b: u8) -> bool {
    g > r && g > b
}

fn is_blue(r: u8, g: u8, b: u8) -> bool {
    b > g && b > r
}

fn is_cyan(r: u8, g: u8, b: u8) -> bool {
    (g == b && r < g) || (b > 100 && g > 100 && r < 32)
}

fn is_yellow(r: u8, g: u8, b: u8) -> bool {
    (r == g && b < r) || (r > 100 && g > 100 && b < 32)
}

fn is_magenta(r: u8, g: u8, b: u8) -> bool {
    (r == b && g < r) || (r > 100 && b > 100 && g < 32)
}
