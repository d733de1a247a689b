pub mod category;
pub mod entity;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use category::{TaskCategory, TaskPriority, TaskStatus};
pub use entity::Task;
pub use repository::TaskReadRepository;
pub use value_objects::{TaskId, TaskSlug, TaskTitle};
