//! I/O module
//!
//! Handles splitting input into rows and writing datasets back out.
//!
//! # Components
//!
//! - `lexer` - Synchronous line/field splitting with iterator interface
//! - `async_lexer` - Asynchronous line/field splitting with batch reading interface
//! - `loader` - Opening and parsing files
//! - `csv_format` - Dataset output serialization

pub mod async_lexer;
pub mod csv_format;
pub mod lexer;
pub mod loader;

pub use async_lexer::AsyncLexer;
pub use csv_format::{write_dataset_csv, ToRecord};
pub use lexer::{split_line, Lexer};
pub use loader::load_csv;
