//! CSV Row Parser CLI
//!
//! Command-line interface for parsing comma-separated files into rows.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- data.csv > rows.csv
//! cargo run -- --header --factory numeric data.csv
//! cargo run -- --columns 3 --strategy async --max-concurrent 4 a.csv b.csv c.csv
//! ```
//!
//! Every input file is parsed with its own parser. Parsed rows are written
//! to stdout; when more than one file is given each dataset is preceded by a
//! `# <path>` line.
//!
//! # Exit Codes
//!
//! - 0: Every file parsed
//! - 1: At least one file failed (missing, unreadable, rejected by the factory,
//!   or not writable to stdout); every failure is reported before exiting

use csv_row_parser::cli::{self, CliArgs, FactoryType};
use csv_row_parser::io::ToRecord;
use csv_row_parser::strategy::{self, LoadOutcome};
use csv_row_parser::{
    logging, write_dataset_csv, ExactColumns, NumericFactory, ParseError, RowFactory,
    StringFactory,
};
use std::io::Write;
use std::process;

fn main() {
    logging::init();

    // Parse command-line arguments using clap
    let args = cli::parse_args();

    let succeeded = match (args.factory, args.columns) {
        (FactoryType::String, None) => run(&args, StringFactory),
        (FactoryType::String, Some(n)) => run(&args, ExactColumns::new(n, StringFactory)),
        (FactoryType::Numeric, None) => run(&args, NumericFactory),
        (FactoryType::Numeric, Some(n)) => run(&args, ExactColumns::new(n, NumericFactory)),
    };

    if !succeeded {
        process::exit(1);
    }
}

/// Load every input with `factory` and write the results to stdout
///
/// Returns false if any file failed or output could not be written.
fn run<F>(args: &CliArgs, factory: F) -> bool
where
    F: RowFactory + Clone + Send + 'static,
    F::Output: ToRecord + Send + 'static,
{
    let config = matches!(args.strategy, cli::StrategyType::Async).then(|| args.to_load_config());
    let strategy = strategy::create_strategy::<F>(args.strategy.clone(), config);

    let outcomes = match strategy.load(&args.input_files, &factory, args.has_header) {
        Ok(outcomes) => outcomes,
        Err(e) => {
            eprintln!("Error: {}", e);
            return false;
        }
    };

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    write_outcomes(outcomes, &mut stdout.lock(), &mut stderr.lock())
}

/// Write each parsed dataset to `output` and each failure to `errors`
///
/// A failed write does not stop reporting: later files are still written
/// and their errors still shown. Returns false if anything failed.
fn write_outcomes<T: ToRecord>(
    outcomes: Vec<LoadOutcome<T>>,
    output: &mut dyn Write,
    errors: &mut dyn Write,
) -> bool {
    let labelled = outcomes.len() > 1;
    let mut succeeded = true;

    for outcome in outcomes {
        let path = outcome.path.display();
        let written = outcome.result.and_then(|dataset| {
            if labelled {
                writeln!(output, "# {}", path).map_err(|e| ParseError::output(e.to_string()))?;
            }
            write_dataset_csv(&dataset, &mut *output)
        });

        if let Err(e) = written {
            let _ = writeln!(errors, "Error: {}: {}", path, e);
            succeeded = false;
        }
    }

    succeeded
}
