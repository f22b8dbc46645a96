//! Non-interactive listing (`taskdeck ls`)
//!
//! Pages through the configured source with the same controller the TUI uses
//! and prints the result as a table or JSON.

use owo_colors::OwoColorize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::{load_config, print_json};
use crate::error::{Result, TaskdeckError};
use crate::source::{AnyTaskSource, TaskSource};
use crate::tui::task_list::{Completion, IncrementalList};
use crate::types::Task;

/// Options for `taskdeck ls`
#[derive(Debug, Clone, Default)]
pub struct LsOptions {
    pub search: Option<String>,
    /// Stop after this many tasks
    pub limit: Option<usize>,
    pub json: bool,
}

/// A row in the task table
#[derive(Tabled)]
struct TaskRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Priority")]
    priority: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Assignee")]
    assignee: String,
}

impl From<&Task> for TaskRow {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id.clone(),
            status: task.status.to_string(),
            priority: task.priority.to_string(),
            title: task.title.clone(),
            assignee: task.assignee.clone().unwrap_or_else(|| "-".to_string()),
        }
    }
}

/// Load pages from `source` until it runs out or `limit` tasks are loaded
///
/// Returns the tasks and whether the source has more beyond them. A failed
/// page aborts with the source's error.
pub async fn collect_tasks<S: TaskSource>(
    source: &S,
    query: &str,
    page_size: usize,
    limit: Option<usize>,
) -> Result<(Vec<Task>, bool)> {
    let mut list = IncrementalList::new(page_size);
    list.reset(query);

    while limit.is_none_or(|limit| list.len() < limit) {
        match list.load_more_from(source).await {
            Some(Completion::Appended { .. }) | Some(Completion::Stale) => {}
            Some(Completion::Failed) => {
                let message = list.last_error().unwrap_or("unknown error").to_string();
                return Err(TaskdeckError::Source(message));
            }
            None => break,
        }
    }

    let has_more = !list.is_exhausted();
    let mut tasks = list.items().to_vec();
    if let Some(limit) = limit {
        tasks.truncate(limit);
    }
    let has_more = has_more || limit.is_some_and(|limit| list.len() > limit);
    Ok((tasks, has_more))
}

/// List tasks from the configured source
pub async fn cmd_ls(options: LsOptions) -> Result<()> {
    let config = load_config()?;
    let source = AnyTaskSource::from_config(&config)?;
    let query = options.search.unwrap_or_default();

    let (tasks, has_more) =
        collect_tasks(&source, &query, config.page_size, options.limit).await?;

    if options.json {
        return print_json(&serde_json::json!({
            "tasks": tasks,
            "has_more": has_more,
        }));
    }

    if tasks.is_empty() {
        if query.is_empty() {
            println!("Task list is empty");
        } else {
            println!("No tasks match '{}'", query);
        }
        return Ok(());
    }

    let rows: Vec<TaskRow> = tasks.iter().map(TaskRow::from).collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");

    let summary = format!("{} task(s)", tasks.len());
    if has_more {
        println!("\n{} {}", summary, "(more available)".dimmed());
    } else {
        println!("\n{}", summary);
    }

    Ok(())
}
