// File: crates/demo/src/cli.rs
// Summary: Command-line arguments for the demo renderer.

use std::path::PathBuf;

use asciichart_core::types::{MAX_HEIGHT, MAX_WIDTH, MIN_HEIGHT, MIN_WIDTH};
use asciichart_core::ScaleMode;
use clap::builder::RangedU64ValueParser;
use clap::Parser;
use clap::ValueEnum;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub(crate) struct Cli {
    /// Input files: one price-history JSON file, or one or more CSV files
    /// (one series per file).
    #[arg(required = true)]
    pub(crate) inputs: Vec<PathBuf>,

    /// Scale mode. Defaults to `dual` for price-history JSON and `single` for CSV.
    #[arg(short, long, value_enum)]
    pub(crate) mode: Option<Mode>,

    /// Drawing width in columns (label gutters excluded).
    #[arg(
        short,
        long,
        value_parser = RangedU64ValueParser::<usize>::new().range(MIN_WIDTH as u64..=MAX_WIDTH as u64)
    )]
    pub(crate) width: Option<usize>,

    /// Drawing height in rows (axis rows excluded).
    #[arg(
        short = 'H',
        long,
        value_parser = RangedU64ValueParser::<usize>::new().range(MIN_HEIGHT as u64..=MAX_HEIGHT as u64)
    )]
    pub(crate) height: Option<usize>,

    /// Caption of the left axis.
    #[arg(long)]
    pub(crate) left_label: Option<String>,

    /// Caption of the right axis (dual mode only).
    #[arg(long)]
    pub(crate) right_label: Option<String>,

    /// Print without ANSI color escapes.
    #[arg(long)]
    pub(crate) no_color: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum Mode {
    Single,
    Dual,
}

impl From<Mode> for ScaleMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Single => ScaleMode::Single,
            Mode::Dual => ScaleMode::Dual,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_overrides() {
        let cli = Cli::try_parse_from([
            "asciichart-demo", "a.csv", "b.csv", "--mode", "dual", "-w", "40", "-H", "12", "--no-color",
        ])
        .unwrap();
        assert_eq!(cli.inputs.len(), 2);
        assert_eq!(cli.mode, Some(Mode::Dual));
        assert_eq!((cli.width, cli.height), (Some(40), Some(12)));
        assert!(cli.no_color);
    }

    #[test]
    fn rejects_out_of_range_size() {
        for args in [["-w", "100000000"], ["-w", "4"], ["-H", "1001"], ["-H", "1"]] {
            let err = Cli::try_parse_from(["asciichart-demo", "a.csv", args[0], args[1]]).unwrap_err();
            assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
        }
        let cli = Cli::try_parse_from(["asciichart-demo", "a.csv", "-w", "1000", "-H", "2"]).unwrap();
        assert_eq!((cli.width, cli.height), (Some(MAX_WIDTH), Some(MIN_HEIGHT)));
    }

    #[test]
    fn requires_input() {
        assert!(Cli::try_parse_from(["asciichart-demo"]).is_err());
    }
}
