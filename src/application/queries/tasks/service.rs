use std::sync::Arc;

use crate::{
    application::{
        dto::TaskDto,
        error::ApplicationResult,
        ports::time::Clock,
    },
    domain::task::{Task, TaskReadRepository, services::TaskSlugService},
};

pub struct TaskQueryService {
    pub(super) read_repo: Arc<dyn TaskReadRepository>,
    pub(super) slug_service: Arc<TaskSlugService>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) link_base_path: String,
}

impl TaskQueryService {
    pub fn new(
        read_repo: Arc<dyn TaskReadRepository>,
        slug_service: Arc<TaskSlugService>,
        clock: Arc<dyn Clock>,
        link_base_path: impl Into<String>,
    ) -> Self {
        Self {
            read_repo,
            slug_service,
            clock,
            link_base_path: link_base_path.into(),
        }
    }

    pub(super) fn to_dto(&self, task: Task) -> ApplicationResult<TaskDto> {
        let slug = self.slug_service.slug_for(&task)?;
        Ok(TaskDto::from_task(task, slug, self.clock.today()))
    }

    pub(super) fn link_path(&self, slug: &str) -> String {
        format!("{}/{slug}", self.link_base_path.trim_end_matches('/'))
    }
}
