use chrono::{DateTime, Duration, NaiveDate, Utc};

use casa_check_core::domain::task::{
    Task, TaskCategory, TaskId, TaskPriority, TaskStatus, TaskTitle,
};

use super::mocks::fixed_now;

pub struct TaskBuilder {
    id: String,
    title: String,
    category: TaskCategory,
    status: TaskStatus,
    priority: TaskPriority,
    due_date: Option<NaiveDate>,
    created_at: DateTime<Utc>,
}

impl TaskBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: "Limpar a casa".into(),
            category: TaskCategory::Cleaning,
            status: TaskStatus::Pending,
            priority: TaskPriority::Medium,
            due_date: None,
            created_at: fixed_now() - Duration::days(7),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn category(mut self, category: TaskCategory) -> Self {
        self.category = category;
        self
    }

    pub fn status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    pub fn priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }

    pub fn due(mut self, due: NaiveDate) -> Self {
        self.due_date = Some(due);
        self
    }

    pub fn created_days_ago(mut self, days: i64) -> Self {
        self.created_at = fixed_now() - Duration::days(days);
        self
    }

    pub fn build(self) -> Task {
        Task {
            id: self.id.parse::<TaskId>().unwrap(),
            list_id: None,
            title: TaskTitle::new(self.title).unwrap(),
            description: None,
            category: self.category,
            status: self.status,
            priority: self.priority,
            assignee: None,
            due_date: self.due_date,
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}
