use crate::strategy::LoadConfig;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Parse comma-separated files into typed rows
#[derive(Parser, Debug)]
#[command(name = "csv-row-parser")]
#[command(about = "Parse comma-separated files into typed rows", long_about = None)]
pub struct CliArgs {
    /// Input CSV file paths
    #[arg(value_name = "INPUT", required = true, help = "Path(s) to the input CSV file(s)")]
    pub input_files: Vec<PathBuf>,

    /// Treat the first row of every file as a header and discard it
    #[arg(long = "header", help = "Discard the first row of each file")]
    pub has_header: bool,

    /// Row conversion applied to every row
    #[arg(
        long = "factory",
        value_name = "FACTORY",
        default_value = "string",
        help = "Row conversion: 'string' keeps fields as-is, 'numeric' requires decimal fields"
    )]
    pub factory: FactoryType,

    /// Required number of fields per row
    #[arg(
        long = "columns",
        value_name = "COUNT",
        help = "Reject rows that do not have exactly COUNT fields"
    )]
    pub columns: Option<usize>,

    /// Load strategy to use when parsing files
    #[arg(
        long = "strategy",
        value_name = "STRATEGY",
        default_value = "sync",
        help = "Load strategy: 'sync' for sequential or 'async' for concurrent"
    )]
    pub strategy: StrategyType,

    /// Number of rows read per batch (async mode only)
    #[arg(
        long = "batch-size",
        value_name = "SIZE",
        help = "Number of rows read per batch (default: 1000)"
    )]
    pub batch_size: Option<usize>,

    /// Maximum number of files loading concurrently (async mode only)
    #[arg(
        long = "max-concurrent",
        value_name = "COUNT",
        help = "Maximum number of files loading concurrently (default: CPU cores)"
    )]
    pub max_concurrent: Option<usize>,
}

/// Available load strategies
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum StrategyType {
    Sync,
    Async,
}

/// Available built-in row factories
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FactoryType {
    String,
    Numeric,
}

impl CliArgs {
    /// Create a LoadConfig from CLI arguments
    ///
    /// Values not given on the command line fall back to the defaults.
    pub fn to_load_config(&self) -> LoadConfig {
        if self.batch_size.is_some() || self.max_concurrent.is_some() {
            let default = LoadConfig::default();
            LoadConfig::new(
                self.batch_size.unwrap_or(default.batch_size),
                self.max_concurrent.unwrap_or(default.max_concurrent),
            )
        } else {
            LoadConfig::default()
        }
    }
}
