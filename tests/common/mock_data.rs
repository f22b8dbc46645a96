//! Builders and an in-memory task source for tests that never touch disk.

use std::collections::HashSet;
use std::sync::Mutex;

use taskdeck::error::{Result, TaskdeckError};
use taskdeck::source::{Page, TaskSource};
use taskdeck::types::{Task, TaskPriority, TaskStatus};

/// Builder for creating test tasks
pub struct TaskBuilder {
    task: Task,
}

impl TaskBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            task: Task {
                created: Some("2024-01-01T00:00:00Z".to_string()),
                ..Task::new(id, format!("Task {id}"))
            },
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.task.title = title.to_string();
        self
    }

    pub fn status(mut self, status: TaskStatus) -> Self {
        self.task.status = status;
        self
    }

    pub fn priority(mut self, priority: TaskPriority) -> Self {
        self.task.priority = priority;
        self
    }

    pub fn assignee(mut self, assignee: &str) -> Self {
        self.task.assignee = Some(assignee.to_string());
        self
    }

    pub fn build(self) -> Task {
        self.task
    }
}

/// `count` tasks with ids `t-0`, `t-1`, ...
pub fn numbered_tasks(count: usize) -> Vec<Task> {
    (0..count)
        .map(|i| TaskBuilder::new(&format!("t-{i}")).build())
        .collect()
}

/// In-memory source that filters by title substring and records every call
pub struct MemorySource {
    tasks: Vec<Task>,
    /// Offsets whose next fetch fails once
    fail_once: Mutex<HashSet<usize>>,
    calls: Mutex<Vec<(String, usize, usize)>>,
}

impl MemorySource {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            fail_once: Mutex::new(HashSet::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Make the next fetch at `offset` fail
    pub fn failing_once_at(self, offset: usize) -> Self {
        self.fail_once.lock().unwrap().insert(offset);
        self
    }

    pub fn calls(&self) -> Vec<(String, usize, usize)> {
        self.calls.lock().unwrap().clone()
    }
}

impl TaskSource for MemorySource {
    async fn fetch_page(&self, query: &str, offset: usize, limit: usize) -> Result<Page<Task>> {
        self.calls
            .lock()
            .unwrap()
            .push((query.to_string(), offset, limit));

        if self.fail_once.lock().unwrap().remove(&offset) {
            return Err(TaskdeckError::Source("503 Service Unavailable".to_string()));
        }

        let needle = query.to_lowercase();
        let matching: Vec<&Task> = self
            .tasks
            .iter()
            .filter(|t| t.title.to_lowercase().contains(&needle))
            .collect();
        let end = (offset + limit).min(matching.len());
        let items = matching
            .get(offset..end)
            .unwrap_or_default()
            .iter()
            .map(|t| (*t).clone())
            .collect();
        Ok(Page::new(items, end < matching.len()))
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
