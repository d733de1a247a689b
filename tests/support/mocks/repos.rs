use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use casa_check_core::domain::errors::{DomainError, DomainResult};
use casa_check_core::domain::slug::IdPrefix;
use casa_check_core::domain::task::{Task, TaskId, TaskReadRepository};
use casa_check_core::infrastructure::repositories::InMemoryTaskRepository;

/* -------------------------------- CountingTaskRepo -------------------------------- */

/// Wraps the in-memory store and records which lookup path was taken.
pub struct CountingTaskRepo {
    inner: InMemoryTaskRepository,
    pub by_id: AtomicUsize,
    pub by_prefix: AtomicUsize,
}

impl CountingTaskRepo {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self {
            inner: InMemoryTaskRepository::new(tasks).expect("unique task ids"),
            by_id: AtomicUsize::new(0),
            by_prefix: AtomicUsize::new(0),
        }
    }

    pub fn id_lookups(&self) -> usize {
        self.by_id.load(Ordering::SeqCst)
    }

    pub fn prefix_lookups(&self) -> usize {
        self.by_prefix.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TaskReadRepository for CountingTaskRepo {
    async fn find_by_id(&self, id: TaskId) -> DomainResult<Option<Task>> {
        self.by_id.fetch_add(1, Ordering::SeqCst);
        self.inner.find_by_id(id).await
    }

    async fn find_by_id_prefix(&self, prefix: &IdPrefix) -> DomainResult<Vec<Task>> {
        self.by_prefix.fetch_add(1, Ordering::SeqCst);
        self.inner.find_by_id_prefix(prefix).await
    }

    async fn list(&self) -> DomainResult<Vec<Task>> {
        self.inner.list().await
    }
}

/* -------------------------------- FailingTaskRepo -------------------------------- */

/// Every call fails as if the backing store were unreachable.
pub struct FailingTaskRepo;

#[async_trait]
impl TaskReadRepository for FailingTaskRepo {
    async fn find_by_id(&self, _id: TaskId) -> DomainResult<Option<Task>> {
        Err(DomainError::Persistence("store offline".into()))
    }

    async fn find_by_id_prefix(&self, _prefix: &IdPrefix) -> DomainResult<Vec<Task>> {
        Err(DomainError::Persistence("store offline".into()))
    }

    async fn list(&self) -> DomainResult<Vec<Task>> {
        Err(DomainError::Persistence("store offline".into()))
    }
}
