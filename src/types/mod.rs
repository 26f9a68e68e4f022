//! Types module
//!
//! Contains core data structures used throughout the crate:
//! - `row`: Row and Dataset
//! - `error`: Factory failures and parser errors

pub mod error;
pub mod row;

pub use error::{FactoryFailure, ParseError};
pub use row::{Dataset, Row, DELIMITER};
