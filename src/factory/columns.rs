use crate::core::RowFactory;
use crate::types::{FactoryFailure, Row};

/// Column-count guard around another factory
///
/// Rejects rows that do not have exactly `columns` fields, then delegates to
/// the wrapped factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExactColumns<F> {
    columns: usize,
    inner: F,
}

impl<F> ExactColumns<F> {
    pub fn new(columns: usize, inner: F) -> Self {
        Self { columns, inner }
    }
}

impl<F: RowFactory> RowFactory for ExactColumns<F> {
    type Output = F::Output;

    fn create(&self, row: Row) -> Result<F::Output, FactoryFailure> {
        if row.len() != self.columns {
            return Err(FactoryFailure::new(
                format!("expected {} fields, found {}", self.columns, row.len()),
                &row,
            ));
        }
        self.inner.create(row)
    }
}
