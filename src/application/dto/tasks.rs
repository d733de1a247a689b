use crate::domain::task::{Task, TaskCategory, TaskPriority, TaskSlug, TaskStatus};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryDto {
    pub key: TaskCategory,
    pub label: &'static str,
    pub icon: &'static str,
}

impl From<TaskCategory> for CategoryDto {
    fn from(category: TaskCategory) -> Self {
        Self {
            key: category,
            label: category.label(),
            icon: category.icon(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TaskDto {
    pub id: Uuid,
    pub slug: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub category: CategoryDto,
    pub status: TaskStatus,
    pub status_label: &'static str,
    pub priority: TaskPriority,
    pub priority_label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    pub overdue: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TaskDto {
    pub fn from_task(task: Task, slug: TaskSlug, today: NaiveDate) -> Self {
        let overdue = task.is_overdue(today);
        Self {
            id: task.id.into(),
            slug: slug.into_inner(),
            title: task.title.into(),
            description: task.description,
            category: task.category.into(),
            status: task.status,
            status_label: task.status.label(),
            priority: task.priority,
            priority_label: task.priority.label(),
            assignee: task.assignee,
            due_date: task.due_date,
            overdue,
            created_at: task.created_at,
            updated_at: task.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskLinkDto {
    pub id: Uuid,
    pub slug: String,
    pub path: String,
}
