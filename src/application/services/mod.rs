use std::sync::Arc;

use crate::{
    application::{
        dto::CategoryDto,
        ports::{ClockPort, SlugGeneratorPort},
        queries::tasks::TaskQueryService,
    },
    domain::task::{TaskCategory, TaskReadRepository, services::TaskSlugService},
};

pub struct ApplicationServices {
    pub task_queries: Arc<TaskQueryService>,
}

impl ApplicationServices {
    pub fn new(
        task_read_repo: Arc<dyn TaskReadRepository>,
        clock: Arc<ClockPort>,
        slugger: Arc<SlugGeneratorPort>,
        link_base_path: impl Into<String>,
    ) -> Self {
        let slug_service = Arc::new(TaskSlugService::new(Arc::clone(&slugger)));

        let task_queries = Arc::new(TaskQueryService::new(
            Arc::clone(&task_read_repo),
            slug_service,
            Arc::clone(&clock),
            link_base_path,
        ));

        Self { task_queries }
    }

    pub fn categories(&self) -> Vec<CategoryDto> {
        TaskCategory::ALL.into_iter().map(CategoryDto::from).collect()
    }
}
