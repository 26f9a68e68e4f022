//! Asynchronous load strategy
//!
//! This module loads many files concurrently. Each file gets its own
//! [`RowConverter`] fed by an [`AsyncLexer`], so the per-file semantics are
//! exactly those of the synchronous parser.
//!
//! # Architecture
//!
//! ```text
//! AsyncLoadStrategy
//!     ├── LoadConfig (batch_size, max_concurrent)
//!     └── one tokio task per file
//!         ├── tokio::fs::File → compat → AsyncLexer (batch row reading)
//!         └── RowConverter (factory + header handling)
//! ```
//!
//! At most `max_concurrent` files are in flight at once. Outcomes are
//! returned in input order regardless of completion order.

use crate::core::{RowConverter, RowFactory};
use crate::io::AsyncLexer;
use crate::strategy::{LoadOutcome, LoadStrategy};
use crate::types::{Dataset, ParseError};
use futures::stream::{self, StreamExt};
use std::path::{Path, PathBuf};
use tokio_util::compat::TokioAsyncReadCompatExt;
use tracing::{debug, warn};

/// Configuration for concurrent loading
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadConfig {
    /// Number of rows read from a file per batch
    pub batch_size: usize,
    /// Maximum number of files loading concurrently
    pub max_concurrent: usize,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            batch_size: 1000,
            max_concurrent: num_cpus::get(),
        }
    }
}

impl LoadConfig {
    /// Create a new LoadConfig with custom values
    ///
    /// Zero values fall back to the defaults with a warning.
    pub fn new(batch_size: usize, max_concurrent: usize) -> Self {
        let default = Self::default();

        let batch_size = if batch_size == 0 {
            warn!(
                "Invalid batch_size ({}), using default ({})",
                batch_size, default.batch_size
            );
            default.batch_size
        } else {
            batch_size
        };

        let max_concurrent = if max_concurrent == 0 {
            warn!(
                "Invalid max_concurrent ({}), using default ({})",
                max_concurrent, default.max_concurrent
            );
            default.max_concurrent
        } else {
            max_concurrent
        };

        Self {
            batch_size,
            max_concurrent,
        }
    }
}

/// Concurrent load strategy
#[derive(Debug, Clone)]
pub struct AsyncLoadStrategy {
    config: LoadConfig,
}

impl AsyncLoadStrategy {
    pub fn new(config: LoadConfig) -> Self {
        Self { config }
    }
}

/// Load one file through the async lexer
async fn load_file<F: RowFactory>(
    path: &Path,
    factory: F,
    has_header: bool,
    batch_size: usize,
) -> Result<Dataset<F::Output>, ParseError> {
    let file = tokio::fs::File::open(path)
        .await
        .map_err(|e| ParseError::open_failed(path, &e))?;

    let mut lexer = AsyncLexer::new(futures::io::BufReader::new(file.compat()));
    let mut converter = RowConverter::new(factory, has_header);

    loop {
        let batch = lexer.read_batch(batch_size).await?;
        if batch.is_empty() {
            break;
        }
        for row in batch {
            converter.push(row)?;
        }
    }

    debug!(
        path = %path.display(),
        lines = lexer.lines_read(),
        rows = converter.converted(),
        "Finished loading file"
    );
    Ok(converter.finish())
}

impl<F> LoadStrategy<F> for AsyncLoadStrategy
where
    F: RowFactory + Clone + Send + 'static,
    F::Output: Send + 'static,
{
    fn load(
        &self,
        paths: &[PathBuf],
        factory: &F,
        has_header: bool,
    ) -> Result<Vec<LoadOutcome<F::Output>>, ParseError> {
        let batch_size = self.config.batch_size.max(1);
        let max_concurrent = self.config.max_concurrent.max(1);

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(max_concurrent)
            .build()
            .map_err(|e| ParseError::Task {
                message: format!("Failed to create tokio runtime: {}", e),
            })?;

        let joined: Vec<_> = runtime.block_on(async {
            // Tasks are spawned lazily as `buffered` pulls them
            let tasks = paths.iter().cloned().map(|path| {
                let factory = factory.clone();
                tokio::spawn(async move {
                    let result = load_file(&path, factory, has_header, batch_size).await;
                    if let Err(e) = &result {
                        warn!(path = %path.display(), error = %e, "Failed to load file");
                    }
                    LoadOutcome { path, result }
                })
            });

            stream::iter(tasks)
                .buffered(max_concurrent)
                .collect()
                .await
        });

        let outcomes = joined
            .into_iter()
            .zip(paths)
            .map(|(joined, path)| {
                joined.unwrap_or_else(|e| {
                    LoadOutcome::new(
                        path,
                        Err(ParseError::Task {
                            message: e.to_string(),
                        }),
                    )
                })
            })
            .collect();

        Ok(outcomes)
    }
}
