//! Positional deserialization factory
//!
//! Builds any `serde` type from a row by field position, using the `csv`
//! crate's record deserializer. No header names are involved: the first
//! field fills the first struct member, and so on.
//!
//! ```
//! use csv_row_parser::{parse_str, SerdeFactory};
//! use serde::Deserialize;
//!
//! #[derive(Debug, Deserialize, PartialEq)]
//! struct Reading {
//!     station: String,
//!     celsius: f64,
//! }
//!
//! let readings = parse_str(SerdeFactory::<Reading>::new(), true, "station,celsius\nPVD,21.5\n").unwrap();
//! assert_eq!(readings.rows()[0].celsius, 21.5);
//! ```

use crate::core::RowFactory;
use crate::types::{FactoryFailure, Row};
use csv::StringRecord;
use serde::de::DeserializeOwned;
use std::fmt;
use std::marker::PhantomData;

/// Factory deserializing each row into `T`
pub struct SerdeFactory<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> SerdeFactory<T> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for SerdeFactory<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for SerdeFactory<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> Copy for SerdeFactory<T> {}

impl<T> fmt::Debug for SerdeFactory<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SerdeFactory")
            .field("target", &std::any::type_name::<T>())
            .finish()
    }
}

impl<T: DeserializeOwned> RowFactory for SerdeFactory<T> {
    type Output = T;

    fn create(&self, row: Row) -> Result<T, FactoryFailure> {
        let record = StringRecord::from(row.fields());
        record
            .deserialize(None)
            .map_err(|e| FactoryFailure::new(e.to_string(), &row))
    }
}
