//! Interactive task list (`taskdeck view`)

use iocraft::prelude::*;

use super::load_config;
use crate::error::Result;
use crate::source::{AnyTaskSource, TaskSource};
use crate::tui::{TaskListScreen, init_theme};

/// Launch the task list TUI
pub async fn cmd_view(search: Option<String>) -> Result<()> {
    let config = load_config()?;
    let source = AnyTaskSource::from_config(&config)?;
    init_theme(config.dark_mode);

    tracing::info!(source = %source.describe(), page_size = config.page_size, "starting task list");

    element! {
        TaskListScreen(
            source: Some(source),
            initial_query: search.unwrap_or_default(),
            page_size: config.page_size,
            prefetch_rows: config.prefetch_rows,
            search_debounce_ms: config.search_debounce_ms,
        )
    }
    .fullscreen()
    .await?;

    Ok(())
}
