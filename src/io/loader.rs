//! File loading
//!
//! Opens a CSV file and parses it through a fresh [`CsvParser`]. This is the
//! only place in the crate that touches the filesystem for the sync path.

use crate::core::{CsvParser, RowFactory};
use crate::types::{Dataset, ParseError};
use std::fs::File;
use std::path::Path;
use tracing::info;

/// Load and parse the file at `path`
///
/// # Errors
///
/// * [`ParseError::FileNotFound`] if `path` does not exist
/// * [`ParseError::Stream`] if the file cannot be opened or read
/// * [`ParseError::Conversion`] if `factory` rejects a row
pub fn load_csv<F: RowFactory>(
    path: &Path,
    factory: F,
    has_header: bool,
) -> Result<Dataset<F::Output>, ParseError> {
    let file = File::open(path).map_err(|e| ParseError::open_failed(path, &e))?;

    let mut parser = CsvParser::new(factory, has_header);
    parser.set_reader(file)?;
    parser.parse()?;

    let dataset = parser.into_dataset()?;
    info!(path = %path.display(), rows = dataset.len(), "Loaded CSV file");
    Ok(dataset)
}
