use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TaskdeckError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Todo,
    InProgress,
    Done,
    Cancelled,
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskStatus::Todo => write!(f, "todo"),
            TaskStatus::InProgress => write!(f, "in_progress"),
            TaskStatus::Done => write!(f, "done"),
            TaskStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl FromStr for TaskStatus {
    type Err = TaskdeckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "todo" => Ok(TaskStatus::Todo),
            "in_progress" | "in-progress" => Ok(TaskStatus::InProgress),
            "done" => Ok(TaskStatus::Done),
            "cancelled" => Ok(TaskStatus::Cancelled),
            _ => Err(TaskdeckError::InvalidStatus(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Default)]
pub enum TaskPriority {
    #[serde(rename = "0")]
    P0,
    #[serde(rename = "1")]
    P1,
    #[default]
    #[serde(rename = "2")]
    P2,
    #[serde(rename = "3")]
    P3,
    #[serde(rename = "4")]
    P4,
}

impl TaskPriority {
    pub fn as_num(&self) -> u8 {
        match self {
            TaskPriority::P0 => 0,
            TaskPriority::P1 => 1,
            TaskPriority::P2 => 2,
            TaskPriority::P3 => 3,
            TaskPriority::P4 => 4,
        }
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.as_num())
    }
}

impl FromStr for TaskPriority {
    type Err = TaskdeckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim_start_matches(['p', 'P']) {
            "0" => Ok(TaskPriority::P0),
            "1" => Ok(TaskPriority::P1),
            "2" => Ok(TaskPriority::P2),
            "3" => Ok(TaskPriority::P3),
            "4" => Ok(TaskPriority::P4),
            _ => Err(TaskdeckError::InvalidPriority(s.to_string())),
        }
    }
}

// Task files write `priority: 1`; remote sources may send "1" or "P1"
impl<'de> Deserialize<'de> for TaskPriority {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(u64),
            Text(String),
        }

        let text = match Raw::deserialize(deserializer)? {
            Raw::Number(n) => n.to_string(),
            Raw::Text(s) => s,
        };
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// A single task as delivered by a task source
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,

    #[serde(default)]
    pub status: TaskStatus,

    #[serde(default)]
    pub priority: TaskPriority,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// Creation timestamp (ISO 8601), passed through as-is
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
}

impl Task {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse_accepts_both_separators() {
        assert_eq!(
            "in-progress".parse::<TaskStatus>().unwrap(),
            TaskStatus::InProgress
        );
        assert_eq!(
            "IN_PROGRESS".parse::<TaskStatus>().unwrap(),
            TaskStatus::InProgress
        );
        assert!("blocked".parse::<TaskStatus>().is_err());
    }

    #[test]
    fn test_priority_parse_shorthand() {
        assert_eq!("p0".parse::<TaskPriority>().unwrap(), TaskPriority::P0);
        assert_eq!("3".parse::<TaskPriority>().unwrap(), TaskPriority::P3);
        assert!("p9".parse::<TaskPriority>().is_err());
    }

    #[test]
    fn test_task_yaml_defaults() {
        let task: Task = serde_yaml_ng::from_str("id: t-1\ntitle: Write docs\n").unwrap();
        assert_eq!(task.status, TaskStatus::Todo);
        assert_eq!(task.priority, TaskPriority::P2);
        assert!(task.tags.is_empty());
        assert!(task.assignee.is_none());
    }

    #[test]
    fn test_task_yaml_full() {
        let yaml = r#"
id: t-7
title: Fix login
status: in_progress
priority: "0"
assignee: dana
tags: [auth, web]
"#;
        let task: Task = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(task.status, TaskStatus::InProgress);
        assert_eq!(task.priority, TaskPriority::P0);
        assert_eq!(task.assignee.as_deref(), Some("dana"));
        assert_eq!(task.tags, vec!["auth", "web"]);
    }

    #[test]
    fn test_priority_accepts_bare_numbers() {
        let task: Task = serde_yaml_ng::from_str("id: t-1\ntitle: x\npriority: 4\n").unwrap();
        assert_eq!(task.priority, TaskPriority::P4);

        let task: Task = serde_json::from_str(r#"{"id":"t-2","title":"y","priority":"P1"}"#).unwrap();
        assert_eq!(task.priority, TaskPriority::P1);

        assert!(serde_yaml_ng::from_str::<Task>("id: t-3\ntitle: z\npriority: 9\n").is_err());
    }
}
