//! Core parsing module
//!
//! This module contains the row parsing components:
//! - `traits` - The `RowFactory` conversion capability
//! - `parser` - Parser state machine and row-to-dataset orchestration

pub mod parser;
pub mod traits;

pub use parser::{convert_rows, parse_reader, parse_str, CsvParser, ParserState, RowConverter};
pub use traits::RowFactory;
