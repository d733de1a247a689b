pub mod error;
pub mod in_memory_task;

pub use in_memory_task::InMemoryTaskRepository;
