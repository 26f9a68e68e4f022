//! Numeric row factory
//!
//! Parses every field of a row as a [`Decimal`]. Surrounding whitespace is
//! trimmed before parsing; an empty field is not a number.

use crate::core::RowFactory;
use crate::types::{FactoryFailure, Row};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Row of decimal values produced by [`NumericFactory`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericRow(Vec<Decimal>);

impl NumericRow {
    pub fn values(&self) -> &[Decimal] {
        &self.0
    }
}

/// Factory accepting only rows whose fields are all numeric
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NumericFactory;

impl RowFactory for NumericFactory {
    type Output = NumericRow;

    fn create(&self, row: Row) -> Result<NumericRow, FactoryFailure> {
        let mut values = Vec::with_capacity(row.len());

        for (column, field) in row.iter().enumerate() {
            match Decimal::from_str(field.trim()) {
                Ok(value) => values.push(value),
                Err(_) => {
                    return Err(FactoryFailure::new(
                        format!("field {} ('{}') is not a number", column, field),
                        &row,
                    ))
                }
            }
        }

        Ok(NumericRow(values))
    }
}
