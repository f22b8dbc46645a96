//! Read-only task details shown inside the detail modal

use iocraft::prelude::*;

use crate::tui::theme::theme;
use crate::types::Task;

/// Props for the TaskDetail component
#[derive(Default, Props)]
pub struct TaskDetailProps {
    pub task: Task,
}

/// Label/value lines for the task's metadata
pub fn detail_fields(task: &Task) -> Vec<(&'static str, String)> {
    let mut fields = vec![
        ("ID", task.id.clone()),
        ("Status", task.status.to_string()),
        ("Priority", task.priority.to_string()),
    ];
    if let Some(assignee) = &task.assignee {
        fields.push(("Assignee", assignee.clone()));
    }
    if !task.tags.is_empty() {
        fields.push(("Tags", task.tags.join(", ")));
    }
    if let Some(created) = &task.created {
        fields.push(("Created", created.clone()));
    }
    fields
}

#[component]
pub fn TaskDetail(props: &TaskDetailProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let task = &props.task;
    let description = if task.description.trim().is_empty() {
        "(no description)".to_string()
    } else {
        task.description.clone()
    };

    element! {
        View(flex_direction: FlexDirection::Column, width: 100pct) {
            Text(content: task.title.clone(), color: theme.text, weight: Weight::Bold)
            View(flex_direction: FlexDirection::Column, margin_top: 1) {
                #(detail_fields(task).into_iter().map(|(label, value)| element! {
                    View(flex_direction: FlexDirection::Row) {
                        View(width: 10, flex_shrink: 0.0) {
                            Text(content: label, color: theme.text_dimmed)
                        }
                        Text(content: value, color: theme.text)
                    }
                }))
            }
            View(margin_top: 1) {
                Text(content: description, color: theme.text)
            }
        }
    }
}
