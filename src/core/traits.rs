//! Core traits for row conversion
//!
//! [`RowFactory`] is the seam between the generic parser and the caller's
//! domain types. The parser owns splitting and ordering; factories own
//! everything about what a row means.

use crate::types::{FactoryFailure, Row};

/// Strategy for turning one row into a domain value
///
/// Implementations must not rely on state carried between calls. The parser
/// calls `create` once per row, in input order, and stops at the first
/// failure.
///
/// # Examples
///
/// ```
/// use csv_row_parser::{FactoryFailure, Row, RowFactory};
///
/// struct Point {
///     x: i64,
///     y: i64,
/// }
///
/// struct PointFactory;
///
/// impl RowFactory for PointFactory {
///     type Output = Point;
///
///     fn create(&self, row: Row) -> Result<Point, FactoryFailure> {
///         let parse = |i: usize| {
///             row.get(i)
///                 .and_then(|f| f.trim().parse::<i64>().ok())
///                 .ok_or_else(|| FactoryFailure::new(format!("field {} is not an integer", i), &row))
///         };
///         Ok(Point { x: parse(0)?, y: parse(1)? })
///     }
/// }
/// ```
pub trait RowFactory {
    /// Value produced for each row
    type Output;

    /// Convert one row, or explain why it cannot be converted
    fn create(&self, row: Row) -> Result<Self::Output, FactoryFailure>;
}

impl<F: RowFactory + ?Sized> RowFactory for &F {
    type Output = F::Output;

    fn create(&self, row: Row) -> Result<Self::Output, FactoryFailure> {
        (**self).create(row)
    }
}

impl<F: RowFactory + ?Sized> RowFactory for Box<F> {
    type Output = F::Output;

    fn create(&self, row: Row) -> Result<Self::Output, FactoryFailure> {
        (**self).create(row)
    }
}
