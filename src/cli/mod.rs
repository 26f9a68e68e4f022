//! Command-line surface of the `csv-row-parser` binary
//!
//! Input files, header handling, factory choice and load strategy are all
//! chosen here; the library itself never reads process arguments.

mod args;

pub use args::{CliArgs, FactoryType, StrategyType};

use clap::Parser;

/// Read arguments from the process command line
///
/// On invalid input or `--help`, clap prints its message and exits.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
