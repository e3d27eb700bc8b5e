use serde::{Deserialize, Serialize};

use super::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    #[default]
    Todo,
    InProgress,
    InReview,
    Done,
}

impl TaskStatus {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Done)
    }
}

impl Category for TaskStatus {
    const ALL: &'static [Self] = &[Self::Todo, Self::InProgress, Self::InReview, Self::Done];
    const KIND: &'static str = "task status";

    fn as_str(&self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
            Self::InReview => "in-review",
            Self::Done => "done",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Todo => "To do",
            Self::InProgress => "In progress",
            Self::InReview => "In review",
            Self::Done => "Done",
        }
    }

    fn color(&self) -> &'static str {
        match self {
            Self::Todo => "#9E9E9E",
            Self::InProgress => "#2196F3",
            Self::InReview => "#9C27B0",
            Self::Done => "#4CAF50",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl Category for TaskPriority {
    const ALL: &'static [Self] = &[Self::Low, Self::Medium, Self::High, Self::Urgent];
    const KIND: &'static str = "task priority";

    fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Urgent => "Urgent",
        }
    }

    fn color(&self) -> &'static str {
        match self {
            Self::Low => "#8BC34A",
            Self::Medium => "#03A9F4",
            Self::High => "#FF9800",
            Self::Urgent => "#F44336",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_uses_kebab_case_wire_values() {
        assert_eq!(
            serde_json::to_value(TaskStatus::InProgress).unwrap(),
            serde_json::json!("in-progress")
        );
        let p: TaskPriority = serde_json::from_str("\"urgent\"").unwrap();
        assert_eq!(p, TaskPriority::Urgent);
    }

    #[test]
    fn only_done_is_closed() {
        assert!(TaskStatus::InReview.is_open());
        assert!(!TaskStatus::Done.is_open());
    }
}
