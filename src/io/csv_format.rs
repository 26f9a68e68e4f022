//! CSV output for parsed datasets
//!
//! Datasets are written back in the same unescaped dialect the lexer reads:
//! comma-separated, one row per line, no quoting. A row written here and read
//! back by the lexer yields the same fields, blank lines included.

use crate::factory::NumericRow;
use crate::types::{Dataset, ParseError, Row};
use csv::{QuoteStyle, WriterBuilder};
use std::io::Write;

/// Conversion of a dataset value into output fields
pub trait ToRecord {
    fn to_record(&self) -> Vec<String>;
}

impl ToRecord for Row {
    fn to_record(&self) -> Vec<String> {
        self.fields().to_vec()
    }
}

impl ToRecord for NumericRow {
    fn to_record(&self) -> Vec<String> {
        self.values().iter().map(ToString::to_string).collect()
    }
}

/// Write a dataset as CSV
///
/// Rows may have different lengths. Fields are never quoted.
///
/// # Arguments
///
/// * `dataset` - Rows to write, in order
/// * `output` - Mutable reference to a writer for outputting CSV
///
/// # Returns
///
/// * `Ok(())` if writing succeeded
/// * `Err(ParseError::Output)` if a write error occurred
pub fn write_dataset_csv<T: ToRecord>(
    dataset: &Dataset<T>,
    output: &mut dyn Write,
) -> Result<(), ParseError> {
    let mut builder = WriterBuilder::new();
    builder
        .has_headers(false)
        .flexible(true)
        .quote_style(QuoteStyle::Never);
    let mut writer = builder.from_writer(output);

    for row in dataset {
        let record = row.to_record();
        if is_blank(&record) {
            // csv renders a record with no bytes as `""`, so blank rows
            // bypass it and get a bare terminator
            let sink = writer
                .into_inner()
                .map_err(|e| ParseError::output(format!("Failed to flush output: {}", e.error())))?;
            sink.write_all(b"\n")
                .map_err(|e| ParseError::output(format!("Failed to write row: {}", e)))?;
            writer = builder.from_writer(sink);
        } else {
            writer.write_record(&record)?;
        }
    }

    writer
        .flush()
        .map_err(|e| ParseError::output(format!("Failed to flush output: {}", e)))?;

    Ok(())
}

/// A row that was a blank input line: one empty field, or none at all
fn is_blank(record: &[String]) -> bool {
    match record {
        [] => true,
        [field] => field.is_empty(),
        _ => false,
    }
}
