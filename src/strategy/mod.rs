//! Load strategy module for parsing many sources
//!
//! This module defines the Strategy pattern for loading a set of CSV files,
//! each through its own independent parser. Parsers share no state, so the
//! strategies differ only in how they schedule the files: one after another
//! (sync) or concurrently on a tokio runtime (async).

use crate::cli::StrategyType;
use crate::core::RowFactory;
use crate::types::{Dataset, ParseError};
use std::path::{Path, PathBuf};

pub mod r#async;
pub mod sync;

pub use self::r#async::{AsyncLoadStrategy, LoadConfig};
pub use sync::SyncLoadStrategy;

/// Result of loading one file
#[derive(Debug, Clone, PartialEq)]
pub struct LoadOutcome<T> {
    /// File that was loaded
    pub path: PathBuf,
    /// Parsed dataset, or the error that stopped the parse
    pub result: Result<Dataset<T>, ParseError>,
}

impl<T> LoadOutcome<T> {
    pub fn new(path: &Path, result: Result<Dataset<T>, ParseError>) -> Self {
        Self {
            path: path.to_path_buf(),
            result,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Strategy trait for loading many files
///
/// A failure in one file never affects another: each file gets its own
/// outcome, and outcomes come back in the order of `paths`.
pub trait LoadStrategy<F: RowFactory>: Send + Sync {
    /// Parse every file in `paths` with its own parser
    ///
    /// # Arguments
    ///
    /// * `paths` - Files to load
    /// * `factory` - Conversion applied to every row of every file
    /// * `has_header` - Discard the first row of each file
    ///
    /// # Returns
    ///
    /// * `Ok(outcomes)` with one outcome per path, in order
    /// * `Err(ParseError::Task)` if the strategy itself could not run
    fn load(
        &self,
        paths: &[PathBuf],
        factory: &F,
        has_header: bool,
    ) -> Result<Vec<LoadOutcome<F::Output>>, ParseError>;
}

/// Create a load strategy based on the specified strategy type
///
/// # Arguments
///
/// * `strategy_type` - The type of load strategy to create (Sync or Async)
/// * `config` - Optional configuration for async loading (ignored for sync)
///
/// # Returns
///
/// A boxed trait object implementing the LoadStrategy trait
pub fn create_strategy<F>(
    strategy_type: StrategyType,
    config: Option<LoadConfig>,
) -> Box<dyn LoadStrategy<F>>
where
    F: RowFactory + Clone + Send + 'static,
    F::Output: Send + 'static,
{
    match strategy_type {
        StrategyType::Sync => Box::new(SyncLoadStrategy),
        StrategyType::Async => {
            let config = config.unwrap_or_default();
            Box::new(AsyncLoadStrategy::new(config))
        }
    }
}
