//! Asynchronous line and field splitting
//!
//! Same row semantics as [`Lexer`](crate::io::Lexer), over a
//! `futures::io::AsyncBufRead`. Rows are pulled one at a time or in batches,
//! mirroring how the async load strategy drains files.
//!
//! # Architecture
//!
//! ```text
//! tokio::fs::File → compat → futures BufReader → AsyncLexer → Vec<Row> batches
//! ```

use crate::io::lexer::{split_line, strip_terminator};
use crate::types::{ParseError, Row};
use futures::io::{AsyncBufRead, AsyncBufReadExt};

/// Asynchronous row reader
pub struct AsyncLexer<R> {
    reader: R,
    buffer: String,
    line_num: usize,
    finished: bool,
}

impl<R: AsyncBufRead + Unpin> AsyncLexer<R> {
    /// Create a new AsyncLexer from a buffered async reader
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: String::new(),
            line_num: 0,
            finished: false,
        }
    }

    /// Read the next row
    ///
    /// Returns `None` at end of input and after a stream error has been
    /// reported once.
    pub async fn next_row(&mut self) -> Option<Result<Row, ParseError>> {
        if self.finished {
            return None;
        }

        self.buffer.clear();
        match self.reader.read_line(&mut self.buffer).await {
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

    /// Read up to `batch_size` rows
    ///
    /// An empty batch means the input is exhausted. A stream error discards
    /// the partial batch.
    pub async fn read_batch(&mut self, batch_size: usize) -> Result<Vec<Row>, ParseError> {
        let mut batch = Vec::with_capacity(batch_size);

        while batch.len() < batch_size {
            match self.next_row().await {
                Some(Ok(row)) => batch.push(row),
                Some(Err(e)) => return Err(e),
                None => break,
            }
        }

        Ok(batch)
    }

    /// Number of lines produced so far
    pub fn lines_read(&self) -> usize {
        self.line_num
    }
}
