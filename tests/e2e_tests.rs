//! End-to-end integration tests
//!
//! These tests run the complete load pipeline on CSV fixtures. Each test:
//! 1. Loads input.csv from a fixture directory through a load strategy
//! 2. Writes the parsed dataset back out as CSV
//! 3. Compares the output with expected.csv
//!
//! Fixtures are located in tests/fixtures/ and cover header handling, ragged
//! rows, blank lines, symbol-heavy fields, CRLF input, numeric conversion, and
//! failures.
//!
//! Each test is run twice: once with the sync strategy and once with the
//! async strategy.

#[cfg(test)]
mod tests {
    use csv_row_parser::cli::StrategyType;
    use csv_row_parser::io::ToRecord;
    use csv_row_parser::strategy::{create_strategy, LoadConfig};
    use csv_row_parser::{
        write_dataset_csv, ExactColumns, NumericFactory, ParseError, RowFactory, StringFactory,
    };
    use rstest::rstest;
    use std::fs;
    use std::path::{Path, PathBuf};

    fn input_path(fixture_name: &str) -> PathBuf {
        let path = PathBuf::from(format!("tests/fixtures/{}/input.csv", fixture_name));
        assert!(path.exists(), "Input file not found: {}", path.display());
        path
    }

    fn config_for(strategy_type: &StrategyType) -> Option<LoadConfig> {
        match strategy_type {
            StrategyType::Sync => None,
            // Tiny batches so fixtures span several reads
            StrategyType::Async => Some(LoadConfig::new(1, 2)),
        }
    }

    /// Run a fixture through a strategy and compare with expected.csv
    ///
    /// # Panics
    ///
    /// Panics if the fixture files cannot be read, the load fails, or the
    /// output differs from expected.csv.
    fn run_test_fixture<F>(
        fixture_name: &str,
        factory: F,
        has_header: bool,
        strategy_type: StrategyType,
    ) where
        F: RowFactory + Clone + Send + 'static,
        F::Output: ToRecord + Send + 'static,
    {
        let input = input_path(fixture_name);
        let expected_path = format!("tests/fixtures/{}/expected.csv", fixture_name);
        assert!(
            Path::new(&expected_path).exists(),
            "Expected file not found: {}",
            expected_path
        );

        let config = config_for(&strategy_type);
        let strategy = create_strategy::<F>(strategy_type, config);

        let mut outcomes = strategy
            .load(&[input], &factory, has_header)
            .unwrap_or_else(|e| panic!("Failed to run strategy: {}", e));
        let dataset = outcomes
            .remove(0)
            .result
            .unwrap_or_else(|e| panic!("Failed to load fixture '{}': {}", fixture_name, e));

        let mut output = Vec::new();
        write_dataset_csv(&dataset, &mut output).expect("Failed to write dataset");

        let actual = String::from_utf8(output).expect("Output is not UTF-8");
        let expected = fs::read_to_string(&expected_path).expect("Failed to read expected.csv");

        assert_eq!(
            actual, expected,
            "Fixture '{}' output mismatch.\nExpected:\n{}\nActual:\n{}",
            fixture_name, expected, actual
        );
    }

    /// Run a fixture that must fail, returning the error
    fn run_failing_fixture<F>(
        fixture_name: &str,
        factory: F,
        has_header: bool,
        strategy_type: StrategyType,
    ) -> ParseError
    where
        F: RowFactory + Clone + Send + 'static,
        F::Output: Send + 'static + std::fmt::Debug,
    {
        let config = config_for(&strategy_type);
        let strategy = create_strategy::<F>(strategy_type, config);

        let mut outcomes = strategy
            .load(&[input_path(fixture_name)], &factory, has_header)
            .expect("Failed to run strategy");
        outcomes
            .remove(0)
            .result
            .expect_err("Fixture was expected to fail")
    }

    #[rstest]
    fn test_header_skip(#[values(StrategyType::Sync, StrategyType::Async)] strategy: StrategyType) {
        run_test_fixture("header_skip", StringFactory, true, strategy);
    }

    #[rstest]
    fn test_ragged_rows(#[values(StrategyType::Sync, StrategyType::Async)] strategy: StrategyType) {
        run_test_fixture("ragged_rows", StringFactory, false, strategy);
    }

    #[rstest]
    fn test_symbols(#[values(StrategyType::Sync, StrategyType::Async)] strategy: StrategyType) {
        run_test_fixture("symbols", StringFactory, false, strategy);
    }

    #[rstest]
    fn test_crlf(#[values(StrategyType::Sync, StrategyType::Async)] strategy: StrategyType) {
        run_test_fixture("crlf", StringFactory, false, strategy);
    }

    #[rstest]
    fn test_numeric(#[values(StrategyType::Sync, StrategyType::Async)] strategy: StrategyType) {
        run_test_fixture("numeric", NumericFactory, true, strategy);
    }

    #[rstest]
    fn test_empty(
        #[values(StrategyType::Sync, StrategyType::Async)] strategy: StrategyType,
        #[values(true, false)] has_header: bool,
    ) {
        run_test_fixture("empty", StringFactory, has_header, strategy);
    }

    #[rstest]
    fn test_blank_line(#[values(StrategyType::Sync, StrategyType::Async)] strategy: StrategyType) {
        run_test_fixture("blank_line", StringFactory, false, strategy);
    }

    #[rstest]
    fn test_blank_line_is_one_empty_field(
        #[values(StrategyType::Sync, StrategyType::Async)] strategy: StrategyType,
    ) {
        let strategy = create_strategy::<StringFactory>(strategy.clone(), config_for(&strategy));
        let mut outcomes = strategy
            .load(&[input_path("blank_line")], &StringFactory, false)
            .unwrap();
        let dataset = outcomes.remove(0).result.unwrap();

        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.rows()[1].fields(), &[""]);
    }

    #[rstest]
    fn test_numeric_failure(
        #[values(StrategyType::Sync, StrategyType::Async)] strategy: StrategyType,
    ) {
        let error = run_failing_fixture("numeric_failure", NumericFactory, false, strategy);
        assert!(matches!(error, ParseError::Conversion { row: 1, .. }));
    }

    #[rstest]
    fn test_columns_failure(
        #[values(StrategyType::Sync, StrategyType::Async)] strategy: StrategyType,
    ) {
        let error = run_failing_fixture(
            "columns_failure",
            ExactColumns::new(3, StringFactory),
            false,
            strategy,
        );
        match error {
            ParseError::Conversion { row, cause, .. } => {
                assert_eq!(row, 1);
                assert_eq!(cause, "expected 3 fields, found 2");
            }
            other => panic!("Expected conversion error, got {:?}", other),
        }
    }
}
