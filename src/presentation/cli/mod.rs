pub mod commands;
pub mod error;

pub use commands::{Cli, Commands, execute};
pub use error::CliError;
