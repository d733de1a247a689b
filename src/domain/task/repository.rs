use crate::domain::errors::DomainResult;
use crate::domain::slug::IdPrefix;
use crate::domain::task::entity::Task;
use crate::domain::task::value_objects::TaskId;
use async_trait::async_trait;

#[async_trait]
pub trait TaskReadRepository: Send + Sync {
    async fn find_by_id(&self, id: TaskId) -> DomainResult<Option<Task>>;
    /// Every task whose hyphenated id starts with `prefix`.
    async fn find_by_id_prefix(&self, prefix: &IdPrefix) -> DomainResult<Vec<Task>>;
    async fn list(&self) -> DomainResult<Vec<Task>>;
}
