use std::cmp::Reverse;

use super::TaskQueryService;
use crate::application::{
    dto::TaskDto,
    error::{ApplicationError, ApplicationResult},
};

impl TaskQueryService {
    /// All tasks, most urgent first, oldest first within a priority.
    pub async fn list_tasks(&self) -> ApplicationResult<Vec<TaskDto>> {
        let mut tasks = self
            .read_repo
            .list()
            .await
            .map_err(ApplicationError::from_store)?;
        tasks.sort_by_key(|task| (Reverse(task.priority), task.created_at));
        tasks.into_iter().map(|task| self.to_dto(task)).collect()
    }
}
