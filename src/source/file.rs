//! Task source backed by a YAML file on disk.
//!
//! The file holds a plain YAML sequence of tasks. Every page request re-reads
//! the file, so edits made while the TUI is open show up on the next search or
//! page.

use std::path::{Path, PathBuf};

use super::filter::filter_tasks;
use super::{Page, TaskSource};
use crate::error::{Result, TaskdeckError};
use crate::types::Task;

#[derive(Debug, Clone)]
pub struct FileTaskSource {
    path: PathBuf,
}

impl FileTaskSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_tasks(&self) -> Result<Vec<Task>> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(TaskdeckError::Source(format!(
                    "task file not found at {}",
                    self.path.display()
                )));
            }
            Err(e) => return Err(e.into()),
        };

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        Ok(serde_yaml_ng::from_str(&content)?)
    }
}

impl TaskSource for FileTaskSource {
    async fn fetch_page(&self, query: &str, offset: usize, limit: usize) -> Result<Page<Task>> {
        let tasks = self.read_tasks().await?;
        let matches = filter_tasks(&tasks, query);

        let total = matches.len();
        let start = offset.min(total);
        let end = start.saturating_add(limit).min(total);

        let items = matches[start..end]
            .iter()
            .map(|scored| scored.task.clone())
            .collect();

        tracing::debug!(
            path = %self.path.display(),
            query,
            offset,
            total,
            "served page from task file"
        );

        Ok(Page::new(items, end < total))
    }

    fn describe(&self) -> String {
        format!("file:{}", self.path.display())
    }
}
