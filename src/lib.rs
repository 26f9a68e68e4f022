//! CSV Row Parser Library
//! # Overview
//!
//! This library splits comma-separated text into rows and converts each row
//! into a caller-chosen type through a pluggable [`RowFactory`].
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Row, Dataset, errors)
//! - [`core`] - Parsing components:
//!   - [`core::traits`] - The `RowFactory` conversion capability
//!   - [`core::parser`] - Parser state machine and row orchestration
//! - [`factory`] - Built-in factories (identity, numeric, column guard, serde)
//! - [`io`] - Row lexers, file loading and CSV output
//! - [`strategy`] - Sequential and concurrent loading of many files
//! - [`cli`] - CLI arguments parsing
//! - [`logging`] - Subscriber setup for binaries
//!
//! # Row Rules
//!
//! - Lines end at `\n` or `\r\n`; fields are separated by `,`
//! - No quoting or escaping: a comma always splits a field
//! - Empty input yields no rows; a trailing newline adds no row
//! - A blank line yields a row with one empty field
//! - Rows may have different numbers of fields
//!
//! # Parse Outcomes
//!
//! A parse either converts every row or fails as a whole:
//! - **Stream error**: the source could not be read
//! - **Conversion error**: a factory rejected a row (0-based index, header excluded)
//! - **Misuse error**: the parser API was called out of order

// Module declarations
pub mod cli;
pub mod core;
pub mod factory;
pub mod io;
pub mod logging;
pub mod strategy;
pub mod types;

pub use crate::core::{parse_reader, parse_str, CsvParser, ParserState, RowFactory};
pub use factory::{ExactColumns, NumericFactory, NumericRow, SerdeFactory, StringFactory};
pub use io::{load_csv, write_dataset_csv};
pub use types::{Dataset, FactoryFailure, ParseError, Row};
