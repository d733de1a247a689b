use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::IdPrefix;
use crate::domain::task::{Task, TaskId, TaskReadRepository};
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

use super::error::{map_io, map_json};

/// A table export is either a bare array of rows or `{ "tasks": [...] }`.
#[derive(Deserialize)]
#[serde(untagged)]
enum TaskExport {
    Rows(Vec<Task>),
    Wrapped { tasks: Vec<Task> },
}

impl TaskExport {
    fn into_rows(self) -> Vec<Task> {
        match self {
            Self::Rows(rows) | Self::Wrapped { tasks: rows } => rows,
        }
    }
}

/// Read-only task store held in memory, keyed by id.
///
/// Ids are kept in a `BTreeMap`; `Uuid` orders byte-wise, which matches hex
/// string order, so every id sharing a prefix sits in one contiguous range.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    tasks: BTreeMap<TaskId, Task>,
}

impl InMemoryTaskRepository {
    pub fn new(tasks: impl IntoIterator<Item = Task>) -> DomainResult<Self> {
        let mut map = BTreeMap::new();
        for task in tasks {
            let id = task.id;
            if map.insert(id, task).is_some() {
                return Err(DomainError::Conflict(format!("duplicate task id {id}")));
            }
        }
        Ok(Self { tasks: map })
    }

    pub fn from_json(raw: &str) -> DomainResult<Self> {
        let export: TaskExport = serde_json::from_str(raw).map_err(map_json)?;
        Self::new(export.into_rows())
    }

    pub async fn load_json(path: impl AsRef<Path>) -> DomainResult<Self> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|err| map_io(path, &err))?;
        let repo = Self::from_json(&raw)?;
        tracing::info!(path = %path.display(), tasks = repo.len(), "loaded task export");
        Ok(repo)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

#[async_trait]
impl TaskReadRepository for InMemoryTaskRepository {
    async fn find_by_id(&self, id: TaskId) -> DomainResult<Option<Task>> {
        Ok(self.tasks.get(&id).cloned())
    }

    async fn find_by_id_prefix(&self, prefix: &IdPrefix) -> DomainResult<Vec<Task>> {
        let start = TaskId::new(prefix.lower_bound());
        Ok(self
            .tasks
            .range(start..)
            .map(|(_, task)| task)
            .take_while(|task| prefix.matches(task.id.as_uuid()))
            .cloned()
            .collect())
    }

    async fn list(&self) -> DomainResult<Vec<Task>> {
        Ok(self.tasks.values().cloned().collect())
    }
}
