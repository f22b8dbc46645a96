//! Task file source tests
//!
//! Runs the YAML task file through the same paging path the TUI uses,
//! including malformed and adversarial files. Each case must either load or
//! fail with an error; none may panic or hang.

use std::time::{Duration, Instant};

use taskdeck::error::TaskdeckError;
use taskdeck::source::{FileTaskSource, TaskSource};
use taskdeck::tui::task_list::{Completion, IncrementalList, LoadState};
use taskdeck::types::TaskPriority;
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Helper: write a task file into a fresh temp directory
// ---------------------------------------------------------------------------
fn task_file(content: &str) -> (TempDir, FileTaskSource) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tasks.yaml");
    std::fs::write(&path, content).unwrap();
    (dir, FileTaskSource::new(path))
}

fn many_tasks(count: usize) -> String {
    (0..count)
        .map(|i| format!("- id: t-{i}\n  title: Task number {i}\n"))
        .collect()
}

// ---------------------------------------------------------------------------
// Paging
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_pages_cover_file_in_order() {
    let (_dir, source) = task_file(&many_tasks(7));

    let first = source.fetch_page("", 0, 3).await.unwrap();
    let last = source.fetch_page("", 6, 3).await.unwrap();
    assert_eq!(first.items.len(), 3);
    assert!(first.has_more);
    assert_eq!(first.items[0].id, "t-0");
    assert_eq!(last.items.len(), 1);
    assert!(!last.has_more);
}

#[tokio::test]
async fn test_offset_past_end_is_empty() {
    let (_dir, source) = task_file(&many_tasks(2));
    let page = source.fetch_page("", 10, 5).await.unwrap();
    assert!(page.items.is_empty());
    assert!(!page.has_more);
}

#[tokio::test]
async fn test_priority_shorthand_filters() {
    let (_dir, source) = task_file(
        "- id: a\n  title: Urgent\n  priority: 0\n- id: b\n  title: Later\n  priority: 3\n",
    );
    let page = source.fetch_page("p0", 0, 10).await.unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].priority, TaskPriority::P0);
}

#[tokio::test]
async fn test_controller_drains_large_file() {
    let (_dir, source) = task_file(&many_tasks(250));
    let mut list = IncrementalList::new(40);

    let mut pages = 0;
    while list.load_more_from(&source).await.is_some() {
        pages += 1;
    }
    assert_eq!(pages, 7);
    assert_eq!(list.len(), 250);
    assert_eq!(list.state(), LoadState::Exhausted);
}

// ---------------------------------------------------------------------------
// Malformed files
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_missing_file_is_a_source_error() {
    let dir = TempDir::new().unwrap();
    let source = FileTaskSource::new(dir.path().join("nope.yaml"));
    let err = source.fetch_page("", 0, 10).await.unwrap_err();
    assert!(matches!(err, TaskdeckError::Source(_)));
    assert!(err.to_string().contains("not found"));
}

#[tokio::test]
async fn test_mapping_instead_of_list_is_rejected() {
    let (_dir, source) = task_file("id: t-1\ntitle: not a list\n");
    assert!(source.fetch_page("", 0, 10).await.is_err());
}

#[tokio::test]
async fn test_failure_surfaces_in_controller() {
    let (_dir, source) = task_file("- id: [unterminated\n");
    let mut list = IncrementalList::new(10);

    assert_eq!(list.load_more_from(&source).await, Some(Completion::Failed));
    assert_eq!(list.state(), LoadState::Error);
    assert!(list.last_error().is_some());
}

#[tokio::test]
async fn test_unknown_fields_are_ignored() {
    let (_dir, source) = task_file("- id: t-1\n  title: x\n  estimate: 3d\n  links: [a, b]\n");
    let page = source.fetch_page("", 0, 10).await.unwrap();
    assert_eq!(page.items.len(), 1);
}

#[tokio::test]
async fn test_alias_expansion_is_bounded() {
    // Billion-laughs style: each level references the previous one ten times
    let mut yaml = String::from("- id: t-1\n  title: x\n  tags: &l0 [\"lol\"]\n");
    let mut prev = "l0".to_string();
    for level in 1..8 {
        let refs = vec![format!("*{prev}"); 10].join(", ");
        yaml.push_str(&format!("- id: t-{}\n  title: x\n  tags: &l{level} [{refs}]\n", level + 1));
        prev = format!("l{level}");
    }
    let (_dir, source) = task_file(&yaml);

    let start = Instant::now();
    let result = source.fetch_page("", 0, 10).await;
    assert!(
        start.elapsed() < Duration::from_secs(5),
        "alias expansion took too long"
    );
    // Nested sequences are not strings, so this must not load
    assert!(result.is_err());
}

#[tokio::test]
async fn test_large_description_loads() {
    let description = "x".repeat(64 * 1024);
    let (_dir, source) = task_file(&format!(
        "- id: t-1\n  title: big\n  description: {description}\n"
    ));
    let page = source.fetch_page("", 0, 1).await.unwrap();
    assert_eq!(page.items[0].description.len(), 64 * 1024);
}
