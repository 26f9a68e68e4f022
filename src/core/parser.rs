//! Row parsing orchestration
//!
//! This module drives rows from a [`Lexer`] through a [`RowFactory`] and
//! accumulates the converted values into a [`Dataset`].
//!
//! The parse is all-or-nothing: the first stream or conversion error aborts
//! it and no partial dataset is exposed.
//!
//! # Parser lifecycle
//!
//! ```text
//! Unconfigured ──set_reader──▶ SourceBound ──parse──▶ Parsed
//!                                              └────▶ Failed
//! ```
//!
//! Binding a second source, or parsing a parser that already reached
//! `Parsed`/`Failed`, returns a misuse error instead of doing any work.

use crate::core::traits::RowFactory;
use crate::io::lexer::Lexer;
use crate::types::{Dataset, ParseError, Row};
use std::fmt;
use std::io::{BufRead, BufReader, Read};
use tracing::{debug, info, warn};

/// Incremental row-to-dataset conversion
///
/// Used by both the synchronous parser and the async load strategy. Rows are
/// pushed in input order; the first row is swallowed when the header flag is
/// set. Once `push` returns an error the converter must be dropped.
pub struct RowConverter<F: RowFactory> {
    factory: F,
    skip_header: bool,
    rows: Vec<F::Output>,
}

impl<F: RowFactory> RowConverter<F> {
    pub fn new(factory: F, has_header: bool) -> Self {
        Self {
            factory,
            skip_header: has_header,
            rows: Vec::new(),
        }
    }

    /// Convert one row and append it
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Conversion`] carrying the index of the row among
    /// the rows handed to the factory (the header is not counted).
    pub fn push(&mut self, row: Row) -> Result<(), ParseError> {
        if self.skip_header {
            self.skip_header = false;
            debug!(fields = row.len(), "Discarding header row");
            return Ok(());
        }

        let index = self.rows.len();
        match self.factory.create(row) {
            Ok(value) => {
                self.rows.push(value);
                Ok(())
            }
            Err(failure) => {
                warn!(row = index, cause = %failure.cause, "Row conversion failed");
                Err(ParseError::conversion(index, failure))
            }
        }
    }

    /// Number of rows converted so far
    pub fn converted(&self) -> usize {
        self.rows.len()
    }

    pub fn finish(self) -> Dataset<F::Output> {
        Dataset::new(self.rows)
    }
}

/// Run every row through `factory`, stopping at the first error
pub fn convert_rows<F, I>(
    factory: F,
    has_header: bool,
    rows: I,
) -> Result<Dataset<F::Output>, ParseError>
where
    F: RowFactory,
    I: IntoIterator<Item = Result<Row, ParseError>>,
{
    let mut converter = RowConverter::new(factory, has_header);
    for row in rows {
        converter.push(row?)?;
    }
    Ok(converter.finish())
}

/// Observable state of a [`CsvParser`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserState {
    Unconfigured,
    SourceBound,
    Parsed,
    Failed,
}

type Source = Box<dyn BufRead + Send>;

enum State<T> {
    Unconfigured,
    SourceBound(Source),
    Parsed(Dataset<T>),
    Failed(ParseError),
}

/// Single-use parser binding one factory to one input source
///
/// # Examples
///
/// ```
/// use csv_row_parser::{CsvParser, StringFactory};
///
/// let mut parser = CsvParser::new(StringFactory, true);
/// parser.set_reader(std::io::Cursor::new("h1,h2\na,b\nc,d\n")).unwrap();
///
/// let dataset = parser.parse().unwrap();
/// assert_eq!(dataset.len(), 2);
/// assert_eq!(dataset.rows()[0].fields(), &["a", "b"]);
/// ```
pub struct CsvParser<F: RowFactory> {
    factory: F,
    has_header: bool,
    state: State<F::Output>,
}

impl<F: RowFactory> CsvParser<F> {
    /// Create an unconfigured parser
    ///
    /// # Arguments
    ///
    /// * `factory` - Conversion applied to every row
    /// * `has_header` - Discard the first row of the input before conversion
    pub fn new(factory: F, has_header: bool) -> Self {
        Self {
            factory,
            has_header,
            state: State::Unconfigured,
        }
    }

    /// Bind an unbuffered reader as the input source
    pub fn set_reader<R>(&mut self, reader: R) -> Result<(), ParseError>
    where
        R: Read + Send + 'static,
    {
        self.bind(BufReader::new(reader))
    }

    /// Bind a buffered reader as the input source
    ///
    /// # Errors
    ///
    /// * [`ParseError::SourceAlreadyBound`] if a source is already bound
    /// * [`ParseError::AlreadyParsed`] if the parser is in a terminal state
    pub fn bind<R>(&mut self, source: R) -> Result<(), ParseError>
    where
        R: BufRead + Send + 'static,
    {
        match self.state {
            State::Unconfigured => {
                debug!(has_header = self.has_header, "Binding input source");
                self.state = State::SourceBound(Box::new(source));
                Ok(())
            }
            State::SourceBound(_) => Err(ParseError::SourceAlreadyBound),
            State::Parsed(_) | State::Failed(_) => Err(ParseError::AlreadyParsed),
        }
    }

    /// Consume the bound source and convert every row
    ///
    /// # Errors
    ///
    /// * [`ParseError::NoSource`] if nothing is bound; the parser stays
    ///   unconfigured
    /// * [`ParseError::AlreadyParsed`] if the parser already ran
    /// * [`ParseError::Stream`] if the source failed while being read
    /// * [`ParseError::Conversion`] if the factory rejected a row
    ///
    /// Stream and conversion errors leave the parser in the `Failed` state.
    pub fn parse(&mut self) -> Result<&Dataset<F::Output>, ParseError> {
        let source = match std::mem::replace(&mut self.state, State::Unconfigured) {
            State::SourceBound(source) => source,
            State::Unconfigured => return Err(ParseError::NoSource),
            terminal => {
                self.state = terminal;
                return Err(ParseError::AlreadyParsed);
            }
        };

        debug!(has_header = self.has_header, "Parsing bound source");
        let lexer = Lexer::new(source);
        self.state = match convert_rows(&self.factory, self.has_header, lexer) {
            Ok(dataset) => {
                info!(rows = dataset.len(), "Parse completed");
                State::Parsed(dataset)
            }
            Err(error) => {
                warn!(%error, "Parse failed");
                State::Failed(error)
            }
        };

        self.outcome()
    }

    /// Result of the completed parse
    ///
    /// Can be called any number of times after `parse`.
    ///
    /// # Errors
    ///
    /// * [`ParseError::NotParsed`] before `parse` has run
    /// * the stored stream or conversion error when the parse failed
    pub fn outcome(&self) -> Result<&Dataset<F::Output>, ParseError> {
        match &self.state {
            State::Parsed(dataset) => Ok(dataset),
            State::Failed(error) => Err(error.clone()),
            State::Unconfigured | State::SourceBound(_) => Err(ParseError::NotParsed),
        }
    }

    /// Dataset of a successful parse
    pub fn dataset(&self) -> Option<&Dataset<F::Output>> {
        match &self.state {
            State::Parsed(dataset) => Some(dataset),
            _ => None,
        }
    }

    /// Error of a failed parse
    pub fn error(&self) -> Option<&ParseError> {
        match &self.state {
            State::Failed(error) => Some(error),
            _ => None,
        }
    }

    pub fn state(&self) -> ParserState {
        match self.state {
            State::Unconfigured => ParserState::Unconfigured,
            State::SourceBound(_) => ParserState::SourceBound,
            State::Parsed(_) => ParserState::Parsed,
            State::Failed(_) => ParserState::Failed,
        }
    }

    pub fn has_header(&self) -> bool {
        self.has_header
    }

    /// Take ownership of the parse result
    pub fn into_dataset(self) -> Result<Dataset<F::Output>, ParseError> {
        match self.state {
            State::Parsed(dataset) => Ok(dataset),
            State::Failed(error) => Err(error),
            State::Unconfigured | State::SourceBound(_) => Err(ParseError::NotParsed),
        }
    }
}

impl<F: RowFactory> fmt::Debug for CsvParser<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CsvParser")
            .field("has_header", &self.has_header)
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}

/// Parse an in-memory string in one call
pub fn parse_str<F: RowFactory>(
    factory: F,
    has_header: bool,
    input: &str,
) -> Result<Dataset<F::Output>, ParseError> {
    convert_rows(factory, has_header, Lexer::new(input.as_bytes()))
}

/// Bind `reader` to a fresh parser and parse it in one call
pub fn parse_reader<F, R>(
    factory: F,
    has_header: bool,
    reader: R,
) -> Result<Dataset<F::Output>, ParseError>
where
    F: RowFactory,
    R: Read + Send + 'static,
{
    let mut parser = CsvParser::new(factory, has_header);
    parser.set_reader(reader)?;
    parser.parse()?;
    parser.into_dataset()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::{ExactColumns, NumericFactory, StringFactory};
    use crate::types::FactoryFailure;
    use rstest::rstest;
    use std::io::Cursor;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn bound_parser<F: RowFactory>(factory: F, has_header: bool, input: &str) -> CsvParser<F> {
        let mut parser = CsvParser::new(factory, has_header);
        parser.set_reader(Cursor::new(input.to_string())).unwrap();
        parser
    }

    /// Factory counting how many rows it was asked to convert
    struct CountingFactory<'a> {
        calls: &'a AtomicUsize,
    }

    impl RowFactory for CountingFactory<'_> {
        type Output = Row;

        fn create(&self, row: Row) -> Result<Row, FactoryFailure> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if row.get(0) == Some("stop") {
                return Err(FactoryFailure::new("stop marker", &row));
            }
            Ok(row)
        }
    }

    /// Reader that fails after serving its data
    struct TornDownReader {
        data: Cursor<Vec<u8>>,
    }

    impl Read for TornDownReader {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            match self.data.read(buf)? {
                0 => Err(std::io::Error::new(
                    std::io::ErrorKind::BrokenPipe,
                    "source closed",
                )),
                n => Ok(n),
            }
        }
    }

    #[rstest]
    #[case::no_header(false)]
    #[case::with_header(true)]
    fn test_empty_input_yields_empty_dataset(#[case] has_header: bool) {
        let mut parser = bound_parser(StringFactory, has_header, "");
        let dataset = parser.parse().unwrap();
        assert!(dataset.is_empty());
        assert_eq!(parser.state(), ParserState::Parsed);
    }

    #[test]
    fn test_header_is_skipped() {
        let mut parser = bound_parser(StringFactory, true, "h1,h2\na,b\nc,d");
        let dataset = parser.parse().unwrap();

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.rows()[0].fields(), &["a", "b"]);
        assert_eq!(dataset.rows()[1].fields(), &["c", "d"]);
    }

    #[test]
    fn test_header_only_input_yields_empty_dataset() {
        let mut parser = bound_parser(StringFactory, true, "h1,h2\n");
        assert!(parser.parse().unwrap().is_empty());
    }

    #[test]
    fn test_rows_keep_input_order() {
        let mut parser = bound_parser(StringFactory, false, "3\n1\n2\n");
        let dataset = parser.parse().unwrap();
        let firsts: Vec<_> = dataset.iter().map(|r| r.get(0).unwrap()).collect();
        assert_eq!(firsts, vec!["3", "1", "2"]);
    }

    #[test]
    fn test_conversion_failure_aborts_whole_parse() {
        let mut parser = bound_parser(NumericFactory, false, "1,2\nx,y\n3,4");
        let error = parser.parse().unwrap_err();

        assert!(error.is_conversion());
        assert!(matches!(error, ParseError::Conversion { row: 1, .. }));
        assert_eq!(parser.state(), ParserState::Failed);
        assert!(parser.dataset().is_none());
        assert_eq!(parser.error(), Some(&error));
        assert_eq!(parser.into_dataset(), Err(error));
    }

    #[test]
    fn test_conversion_index_excludes_header() {
        let mut parser = bound_parser(NumericFactory, true, "a,b\n1,2\nx,y");
        let error = parser.parse().unwrap_err();
        assert!(matches!(error, ParseError::Conversion { row: 1, .. }));
    }

    #[test]
    fn test_header_row_is_not_passed_to_factory() {
        // The header would fail numeric conversion if it reached the factory
        let mut parser = bound_parser(NumericFactory, true, "x,y\n1,2");
        assert_eq!(parser.parse().unwrap().len(), 1);
    }

    #[test]
    fn test_no_rows_processed_after_failure() {
        let calls = AtomicUsize::new(0);
        let factory = CountingFactory { calls: &calls };

        let result = parse_str(factory, false, "a\nstop\nb\nc");
        assert!(matches!(result, Err(ParseError::Conversion { row: 1, .. })));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_ragged_rows_rejected_by_exact_columns() {
        let rows = parse_str(StringFactory, false, "a,b,c\nd,e").unwrap();
        assert_eq!(rows.rows()[0].len(), 3);
        assert_eq!(rows.rows()[1].len(), 2);

        let error = parse_str(ExactColumns::new(3, StringFactory), false, "a,b,c\nd,e").unwrap_err();
        match error {
            ParseError::Conversion { row, fields, .. } => {
                assert_eq!(row, 1);
                assert_eq!(fields, vec!["d", "e"]);
            }
            other => panic!("Expected conversion error, got {:?}", other),
        }
    }

    #[test]
    fn test_stream_error_fails_parser() {
        let mut parser = CsvParser::new(StringFactory, false);
        parser
            .set_reader(TornDownReader {
                data: Cursor::new(b"a,b\n".to_vec()),
            })
            .unwrap();

        let error = parser.parse().unwrap_err();
        assert!(error.is_stream());
        assert!(!error.is_conversion());
        assert!(matches!(error, ParseError::Stream { line: Some(2), .. }));
        assert_eq!(parser.state(), ParserState::Failed);
    }

    #[test]
    fn test_outcome_is_repeatable() {
        let mut parser = bound_parser(StringFactory, false, "a\nb");
        parser.parse().unwrap();

        let first = parser.outcome().unwrap().clone();
        let second = parser.outcome().unwrap().clone();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn test_state_transitions() {
        let mut parser = CsvParser::new(StringFactory, false);
        assert_eq!(parser.state(), ParserState::Unconfigured);
        assert_eq!(parser.outcome(), Err(ParseError::NotParsed));

        parser.set_reader(Cursor::new("a")).unwrap();
        assert_eq!(parser.state(), ParserState::SourceBound);
        assert_eq!(parser.outcome(), Err(ParseError::NotParsed));

        parser.parse().unwrap();
        assert_eq!(parser.state(), ParserState::Parsed);
    }

    #[test]
    fn test_parse_without_source_is_misuse() {
        let mut parser = CsvParser::new(StringFactory, false);
        let error = parser.parse().unwrap_err();

        assert_eq!(error, ParseError::NoSource);
        assert!(error.is_misuse());
        assert_eq!(parser.state(), ParserState::Unconfigured);
    }

    #[test]
    fn test_binding_twice_is_misuse() {
        let mut parser = bound_parser(StringFactory, false, "a");
        let error = parser.set_reader(Cursor::new("b")).unwrap_err();

        assert_eq!(error, ParseError::SourceAlreadyBound);
        assert!(error.is_misuse());
        // The first source is still the one parsed
        assert_eq!(parser.parse().unwrap().rows()[0].fields(), &["a"]);
    }

    #[rstest]
    #[case::after_success("1,2", ParserState::Parsed)]
    #[case::after_failure("x", ParserState::Failed)]
    fn test_terminal_parser_rejects_parse_and_bind(
        #[case] input: &str,
        #[case] terminal: ParserState,
    ) {
        let mut parser = bound_parser(NumericFactory, false, input);
        let _ = parser.parse();
        assert_eq!(parser.state(), terminal);

        assert_eq!(parser.parse().unwrap_err(), ParseError::AlreadyParsed);
        assert_eq!(
            parser.set_reader(Cursor::new("1")).unwrap_err(),
            ParseError::AlreadyParsed
        );
        assert_eq!(parser.state(), terminal);
    }

    #[test]
    fn test_parse_reader_helper() {
        let dataset = parse_reader(StringFactory, true, Cursor::new("h\nv")).unwrap();
        assert_eq!(dataset.len(), 1);
    }

    #[test]
    fn test_row_converter_counts_converted_rows() {
        let mut converter = RowConverter::new(StringFactory, true);
        converter.push(Row::from_iter(["h"])).unwrap();
        converter.push(Row::from_iter(["a"])).unwrap();
        assert_eq!(converter.converted(), 1);
        assert_eq!(converter.finish().len(), 1);
    }

    #[test]
    fn test_parser_is_send() {
        fn assert_send<T: Send>() {}
        assert_send::<CsvParser<StringFactory>>();
    }

    #[test]
    fn test_debug_shows_state() {
        let parser = CsvParser::new(StringFactory, true);
        let debug = format!("{:?}", parser);
        assert!(debug.contains("Unconfigured"));
        assert!(debug.contains("has_header: true"));
    }
}
