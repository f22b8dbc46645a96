//! Task sources that deliver tasks one page at a time.
//!
//! A source answers `(query, offset, limit)` with a [`Page`] of tasks and a
//! flag saying whether more remain. Sources know nothing about the list that
//! consumes them; ordering, stale-response handling and end-of-data tracking
//! live in the task list controller.

pub mod file;
pub mod filter;
pub mod http;

use serde::{Deserialize, Serialize};

use crate::config::{Config, SourceKind};
use crate::error::{Result, TaskdeckError};
use crate::types::Task;

pub use file::FileTaskSource;
pub use http::HttpTaskSource;

/// One batch of results plus whether more remain after it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    #[serde(default)]
    pub has_more: bool,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, has_more: bool) -> Self {
        Self { items, has_more }
    }

    /// An empty page with no more results
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            has_more: false,
        }
    }
}

/// Common interface for paginated task sources
pub trait TaskSource: Send + Sync {
    /// Fetch up to `limit` tasks matching `query`, starting at `offset`
    fn fetch_page(
        &self,
        query: &str,
        offset: usize,
        limit: usize,
    ) -> impl std::future::Future<Output = Result<Page<Task>>> + Send;

    /// Short label for headers and logs
    fn describe(&self) -> String;
}

/// Source selected by configuration
#[derive(Debug, Clone)]
pub enum AnyTaskSource {
    File(FileTaskSource),
    Http(HttpTaskSource),
}

impl AnyTaskSource {
    /// Build the configured source
    pub fn from_config(config: &Config) -> Result<Self> {
        match config.source.kind {
            SourceKind::File => Ok(AnyTaskSource::File(FileTaskSource::new(
                config.source.tasks_path(),
            ))),
            SourceKind::Http => {
                let base_url = config.source.base_url.as_deref().ok_or_else(|| {
                    TaskdeckError::Config("source.base_url is not set".to_string())
                })?;
                let source = HttpTaskSource::new(base_url, config.source.timeout())?
                    .with_token(Config::api_token());
                Ok(AnyTaskSource::Http(source))
            }
        }
    }
}

impl TaskSource for AnyTaskSource {
    async fn fetch_page(&self, query: &str, offset: usize, limit: usize) -> Result<Page<Task>> {
        match self {
            AnyTaskSource::File(source) => source.fetch_page(query, offset, limit).await,
            AnyTaskSource::Http(source) => source.fetch_page(query, offset, limit).await,
        }
    }

    fn describe(&self) -> String {
        match self {
            AnyTaskSource::File(source) => source.describe(),
            AnyTaskSource::Http(source) => source.describe(),
        }
    }
}
