use crate::core::RowFactory;
use crate::types::{FactoryFailure, Row};

/// Identity factory
///
/// Returns each row untouched and never fails. Useful for inspecting what
/// the lexer produced independently of any domain conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StringFactory;

impl RowFactory for StringFactory {
    type Output = Row;

    fn create(&self, row: Row) -> Result<Row, FactoryFailure> {
        Ok(row)
    }
}
