//! Share-link slugs and task lookup for the Casa Check household task manager.
//!
//! The slug codec lives in [`domain::slug`]; everything else resolves slugs
//! back to tasks through the [`domain::task::TaskReadRepository`] port.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
