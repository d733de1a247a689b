use super::TaskQueryService;
use crate::{
    application::{
        dto::TaskLinkDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::task::TaskId,
};

pub struct GetTaskLinkQuery {
    pub id: String,
}

impl TaskQueryService {
    pub async fn share_link(&self, query: GetTaskLinkQuery) -> ApplicationResult<TaskLinkDto> {
        let id: TaskId = query
            .id
            .parse()
            .map_err(|_| ApplicationError::validation(format!("invalid task id: {}", query.id)))?;

        let task = self
            .read_repo
            .find_by_id(id)
            .await
            .map_err(ApplicationError::from_store)?
            .ok_or_else(|| ApplicationError::not_found("task not found"))?;

        let slug = self.slug_service.slug_for(&task)?.into_inner();
        Ok(TaskLinkDto {
            id: id.into(),
            path: self.link_path(&slug),
            slug,
        })
    }
}
