pub mod tasks;

pub use tasks::{CategoryDto, TaskDto, TaskLinkDto};
