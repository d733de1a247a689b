use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::DomainResult;
use crate::domain::slug;
use crate::domain::task::entity::Task;
use crate::domain::task::value_objects::TaskSlug;

/// Domain service responsible for producing share slugs for tasks.
pub struct TaskSlugService {
    generator: Arc<dyn SlugGenerator>,
}

impl TaskSlugService {
    pub fn new(generator: Arc<dyn SlugGenerator>) -> Self {
        Self { generator }
    }

    pub fn slug_for(&self, task: &Task) -> DomainResult<TaskSlug> {
        let base = self.generator.slugify(task.title.as_str());
        TaskSlug::new(slug::compose(&base, &task.id.to_string()))
    }
}
