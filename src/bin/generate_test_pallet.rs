use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use prism::ColorEntry;

fn write_table(path: &Path, header: &str, entries: &[ColorEntry]) -> std::io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "{}", header)?;
    for entry in entries {
        writeln!(writer, "{}", entry)?;
    }
    writer.flush()
}

fn entries(rows: &[(u8, u8, u8, &str)]) -> std::io::Result<Vec<ColorEntry>> {
    rows.iter()
        .map(|&(r, g, b, name)| {
            ColorEntry::new(r, g, b, name)
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))
        })
        .collect()
}

fn primaries() -> std::io::Result<Vec<ColorEntry>> {
    entries(&[
        (0, 0, 0, "black"),         // gray, dark
        (255, 255, 255, "white"),   // gray, light
        (255, 0, 0, "red"),         // red
        (0, 255, 0, "green"),       // green
        (0, 0, 255, "blue"),        // blue
        (0, 255, 255, "cyan"),      // cyan
        (255, 255, 0, "yellow"),    // yellow
        (255, 0, 255, "magenta"),   // magenta
        (220, 220, 220, "gainsboro"), // gray, light
    ])
}

fn x11_sample() -> std::io::Result<Vec<ColorEntry>> {
    entries(&[
        (255, 250, 250, "snow"),
        (248, 248, 255, "ghost white"),
        (245, 245, 245, "white smoke"),
        (47, 79, 79, "dark slate gray"),
        (105, 105, 105, "dim gray"),
        (25, 25, 112, "midnight blue"),
        (100, 149, 237, "cornflower blue"),
        (0, 206, 209, "dark turquoise"),
        (127, 255, 212, "aquamarine"),
        (85, 107, 47, "dark olive green"),
        (189, 183, 107, "dark khaki"),
        (255, 215, 0, "gold"),
        (205, 92, 92, "indian red"),
        (255, 20, 147, "deep pink"),
        (148, 0, 211, "dark violet"),
        (139, 0, 139, "dark magenta"),
    ])
}

fn main() -> std::io::Result<()> {
    let dir = Path::new("test_data");
    std::fs::create_dir_all(dir)?;

    // One color per spectrum, plus a gray that is also light
    write_table(&dir.join("primaries.txt"), "# primaries", &primaries()?)?;

    // X11 rgb.txt style names with spaces
    write_table(&dir.join("x11.txt"), "! X11 sample", &x11_sample()?)?;

    // Valid rows interleaved with lines the row grammar rejects
    let mut noisy = BufWriter::new(File::create(dir.join("noisy.txt"))?);
    writeln!(noisy, "255 0 0 red")?;
    writeln!(noisy, "not a color row")?;
    writeln!(noisy, "300 0 0 infrared   # out of range")?;
    writeln!(noisy, "0 0 255 blue # trailing comment")?;
    noisy.flush()?;

    println!("Generated: primaries.txt, x11.txt, noisy.txt");
    Ok(())
}
