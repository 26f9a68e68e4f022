//! Line and field splitting
//!
//! The [`Lexer`] turns a buffered character source into a lazy sequence of
//! [`Row`]s:
//!
//! - Lines end at `\n` or `\r\n`; the terminator is not part of the row.
//! - Every line is split on `,`. Quotes carry no meaning, so a comma inside
//!   what looks like a quoted value still splits it. Inputs that need
//!   embedded delimiters are not representable.
//! - A trailing newline does not produce an extra row, but a blank line in
//!   the middle of the input produces a row with one empty field.
//! - Splitting keeps every field, including trailing empty ones, so
//!   [`Row::join`] reproduces the original line.
//!
//! Content never causes an error. The only failures are faults raised by the
//! underlying reader (including bytes that are not valid UTF-8), reported as
//! [`ParseError::Stream`] with the line being read.
//!
//! ```
//! use csv_row_parser::io::Lexer;
//!
//! let rows: Vec<_> = Lexer::new("a,b\n\nc".as_bytes())
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(rows.len(), 3);
//! assert_eq!(rows[1].fields(), &[""]);
//! ```

use crate::types::{ParseError, Row, DELIMITER};
use std::io::BufRead;
use std::iter::FusedIterator;

/// Split a single line (without terminator) into a row
pub fn split_line(line: &str) -> Row {
    line.split(DELIMITER).collect()
}

/// Remove one trailing `\n` or `\r\n` from a line read with `read_line`
pub(crate) fn strip_terminator(line: &str) -> &str {
    match line.strip_suffix('\n') {
        Some(rest) => rest.strip_suffix('\r').unwrap_or(rest),
        None => line,
    }
}

/// Lazy, non-restartable row iterator over a buffered reader
///
/// Yields `Ok(Row)` per line. After the first `Err` the iterator is
/// exhausted.
#[derive(Debug)]
pub struct Lexer<R> {
    reader: R,
    buffer: String,
    line_num: usize,
    finished: bool,
}

impl<R: BufRead> Lexer<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: String::new(),
            line_num: 0,
            finished: false,
        }
    }

    /// Number of lines produced so far
    pub fn lines_read(&self) -> usize {
        self.line_num
    }
}

impl<R: BufRead> Iterator for Lexer<R> {
    type Item = Result<Row, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        self.buffer.clear();
        match self.reader.read_line(&mut self.buffer) {
            Ok(0) => {
                self.finished = true;
                None
            }
            Ok(_) => {
                self.line_num += 1;
                Some(Ok(split_line(strip_terminator(&self.buffer))))
            }
            Err(e) => {
                self.finished = true;
                Some(Err(ParseError::stream(Some(self.line_num + 1), &e)))
            }
        }
    }
}

impl<R: BufRead> FusedIterator for Lexer<R> {}
