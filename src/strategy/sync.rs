//! Synchronous load strategy
//!
//! Loads files one after another on the calling thread, each through
//! [`load_csv`]. This is the default strategy and the reference behaviour the
//! async strategy must match.

use crate::core::RowFactory;
use crate::io::load_csv;
use crate::strategy::{LoadOutcome, LoadStrategy};
use crate::types::ParseError;
use std::path::PathBuf;
use tracing::warn;

/// Sequential load strategy
///
/// # Examples
///
/// ```no_run
/// use csv_row_parser::strategy::{LoadStrategy, SyncLoadStrategy};
/// use csv_row_parser::StringFactory;
/// use std::path::PathBuf;
///
/// let outcomes = SyncLoadStrategy
///     .load(&[PathBuf::from("stars.csv")], &StringFactory, true)
///     .unwrap();
/// println!("Loaded {} files", outcomes.len());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SyncLoadStrategy;

impl<F: RowFactory> LoadStrategy<F> for SyncLoadStrategy {
    fn load(
        &self,
        paths: &[PathBuf],
        factory: &F,
        has_header: bool,
    ) -> Result<Vec<LoadOutcome<F::Output>>, ParseError> {
        let outcomes = paths
            .iter()
            .map(|path| {
                let result = load_csv(path, factory, has_header);
                if let Err(e) = &result {
                    warn!(path = %path.display(), error = %e, "Failed to load file");
                }
                LoadOutcome::new(path, result)
            })
            .collect();

        Ok(outcomes)
    }
}
