pub mod repos;
pub mod time;
pub mod util;

pub use repos::{CountingTaskRepo, FailingTaskRepo};
pub use time::{FixedTestClock, fixed_now};
pub use util::EchoSlug;
