use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::render::ColorMode;

/// tripdates — every trip that fits in your vacation
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// First day of the vacation, `YYYY-MM-DD`. Defaults to the built-in June 2024 example.
    #[arg(long, requires = "to")]
    pub from: Option<String>,
    /// Last day of the vacation, `YYYY-MM-DD`.
    #[arg(long, requires = "from")]
    pub to: Option<String>,
    /// Shortest acceptable trip, in days.
    #[arg(long, requires = "max")]
    pub min: Option<u32>,
    /// Longest acceptable trip, in days.
    #[arg(long, requires = "min")]
    pub max: Option<u32>,

    /// JSON response file. Overrides `output_file` from the config file.
    #[arg(long, short, env = "TRIPDATES_OUTPUT")]
    pub output: Option<PathBuf>,
    /// Write the response on a single line instead of pretty-printing it.
    #[arg(long)]
    pub compact: bool,

    /// Also print every possibility as a table.
    #[arg(long, short)]
    pub print: bool,
    /// Only print how many possibilities exist; nothing is written.
    #[arg(long, short, conflicts_with_all = ["print", "compact"])]
    pub count: bool,
    /// Control ANSI colors in output.
    /// By default, colors are disabled when output is redirected (e.g with `>` or `|`).
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
