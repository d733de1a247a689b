use super::TaskQueryService;
use crate::{
    application::{
        dto::TaskDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{slug::SlugIdentifier, task::TaskId},
};

pub struct ResolveTaskSlugQuery {
    pub slug: String,
}

impl TaskQueryService {
    /// Finds the task a share slug points to.
    ///
    /// A slug that only carries an id prefix is resolved with a prefix lookup;
    /// if more than one task shares that prefix the slug is ambiguous and the
    /// caller gets a conflict rather than an arbitrary pick.
    pub async fn resolve_slug(&self, query: ResolveTaskSlugQuery) -> ApplicationResult<TaskDto> {
        let identifier = SlugIdentifier::from_slug(&query.slug)
            .ok_or_else(|| ApplicationError::not_found("no task identifier in slug"))?;

        let task = match &identifier {
            SlugIdentifier::Full(id) => self
                .read_repo
                .find_by_id(TaskId::new(*id))
                .await
                .map_err(ApplicationError::from_store)?,
            SlugIdentifier::Prefix(prefix) => {
                let mut matches = self
                    .read_repo
                    .find_by_id_prefix(prefix)
                    .await
                    .map_err(ApplicationError::from_store)?;
                if matches.len() > 1 {
                    tracing::warn!(
                        slug = %query.slug,
                        prefix = %prefix,
                        candidates = matches.len(),
                        "ambiguous task prefix"
                    );
                    return Err(ApplicationError::conflict(format!(
                        "ambiguous task prefix {prefix}"
                    )));
                }
                matches.pop()
            }
        };

        let task = task.ok_or_else(|| ApplicationError::not_found("task not found"))?;
        tracing::debug!(slug = %query.slug, identifier = %identifier, task_id = %task.id, "resolved task slug");

        self.to_dto(task)
    }
}
