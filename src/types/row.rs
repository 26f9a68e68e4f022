//! Row and dataset types
//!
//! A [`Row`] is the raw output of the lexer: the fields of one input line, in
//! order. A [`Dataset`] is what a successful parse hands back: one converted
//! value per row, in input order.

use std::slice;

/// Field delimiter used when splitting and rejoining rows
pub const DELIMITER: char = ',';

/// One line of input split into its raw fields
///
/// Rows are immutable once built. Two rows from the same stream may have a
/// different number of fields; the parser never checks column counts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Row {
    fields: Vec<String>,
}

impl Row {
    /// Create a row from its fields
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    /// All fields, in order
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Field at `index`, if the row is that wide
    pub fn get(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    /// Number of fields in the row
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, String> {
        self.fields.iter()
    }

    /// Rebuild the source line by joining fields with [`DELIMITER`]
    ///
    /// For any line without a line terminator, `split_line(line).join()`
    /// reproduces `line` exactly.
    pub fn join(&self) -> String {
        let mut line = String::with_capacity(self.fields.iter().map(|f| f.len() + 1).sum());
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                line.push(DELIMITER);
            }
            line.push_str(field);
        }
        line
    }

    pub fn into_fields(self) -> Vec<String> {
        self.fields
    }
}

impl From<Vec<String>> for Row {
    fn from(fields: Vec<String>) -> Self {
        Self::new(fields)
    }
}

impl<S: Into<String>> FromIterator<S> for Row {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

impl AsRef<[String]> for Row {
    fn as_ref(&self) -> &[String] {
        &self.fields
    }
}

impl<'a> IntoIterator for &'a Row {
    type Item = &'a String;
    type IntoIter = slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

/// Ordered collection of converted rows produced by one parse
///
/// Order is insertion order. A dataset is never partially filled: it exists
/// only when every row converted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset<T> {
    rows: Vec<T>,
}

impl<T> Dataset<T> {
    pub fn new(rows: Vec<T>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.rows.get(index)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.rows.iter()
    }

    pub fn into_rows(self) -> Vec<T> {
        self.rows
    }
}

impl<T> Default for Dataset<T> {
    fn default() -> Self {
        Self { rows: Vec::new() }
    }
}

impl<T> IntoIterator for Dataset<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Dataset<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
