mod mode;
mod output;

use clap::Parser;
use prism::{Prism, PrismError};

use output::print_error;

#[derive(Parser)]
#[command(
    name = "prism",
    version,
    about = "Sorts named RGB color tables into per-spectrum pallet tables",
    after_help = "Examples:
  prism rgb.txt                          Reset the pallet and sort rgb.txt into it
  prism --pallet colors rgb.txt          Use ./colors as the pallet folder
  prism --append extra.txt               Add rows without resetting first
  prism --read gray                      Print the gray spectrum
  prism --classify \"220 220 220 silver\"  Show the spectra of one row
  prism --reset                          Empty every spectrum table"
)]
struct Args {
    /// Source table: one "R G B name" row per line, other lines are skipped
    source: Option<String>,

    /// Pallet folder holding one NAME.txt table per spectrum
    #[arg(short, long, default_value = "pallet", value_name = "DIR")]
    pallet: String,

    /// Rebuild without resetting the pallet first (rows accumulate)
    #[arg(short, long)]
    append: bool,

    /// Print the entries of one spectrum
    #[arg(short, long, value_name = "NAME")]
    read: Option<String>,

    /// Classify a single "R G B name" row
    #[arg(short, long, value_name = "ROW")]
    classify: Option<String>,

    /// Truncate every spectrum table
    #[arg(long)]
    reset: bool,

    /// List the spectrum names
    #[arg(short, long)]
    list: bool,

    /// Suppress explanations (show data only)
    #[arg(short, long)]
    quiet: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() {
    let args = Args::parse();

    // Handle --no-color
    if args.no_color {
        colored::control::set_override(false);
    }

    // Validate option combinations
    let modes = [
        args.source.is_some(),
        args.read.is_some(),
        args.classify.is_some(),
        args.reset,
        args.list,
    ];
    if modes.iter().filter(|&&m| m).count() > 1 {
        print_error("SOURCE, --read, --classify, --reset and --list are mutually exclusive");
        std::process::exit(1);
    }

    if args.append && args.source.is_none() {
        print_error("--append can only be used with a SOURCE table");
        std::process::exit(1);
    }

    let mut prism = Prism::new(&args.pallet);

    // Dispatch to appropriate mode
    if args.list {
        mode::run_list();
    } else if let Some(row) = args.classify.as_deref() {
        mode::run_classify(row);
    } else if let Some(name) = args.read.as_deref() {
        mode::run_read(&prism, name, args.quiet);
    } else if args.reset {
        mode::run_reset(&prism, args.quiet);
    } else if let Some(source) = args.source.as_deref() {
        prism.set_source(source);
        mode::run_refract(&prism, args.append, args.quiet);
    } else {
        print_error(&PrismError::MissingSource.to_string());
        std::process::exit(1);
    }
}
