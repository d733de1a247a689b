use std::{env, path::PathBuf};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    tasks_file: PathBuf,
    log_filter: String,
    link_base_path: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_tasks_file() -> PathBuf {
    PathBuf::from("tasks.json")
}

fn default_log_filter() -> String {
    "info".into()
}

fn default_link_base_path() -> String {
    "/tasks".into()
}

impl AppConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] but reads from an arbitrary source,
    /// which keeps tests away from the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let tasks_file = lookup("CASA_TASKS_FILE")
            .filter(|v| !v.trim().is_empty())
            .map_or_else(default_tasks_file, PathBuf::from);

        let log_filter = lookup("CASA_LOG").unwrap_or_else(default_log_filter);

        let link_base_path = lookup("CASA_LINK_BASE_PATH").unwrap_or_else(default_link_base_path);
        if link_base_path.trim().is_empty() {
            return Err(ConfigError::Missing("CASA_LINK_BASE_PATH"));
        }
        if !link_base_path.starts_with('/') {
            return Err(ConfigError::Invalid(format!(
                "CASA_LINK_BASE_PATH must start with '/': {link_base_path}"
            )));
        }

        Ok(Self {
            tasks_file,
            log_filter,
            link_base_path,
        })
    }

    pub fn tasks_file(&self) -> &PathBuf {
        &self.tasks_file
    }

    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }

    pub fn link_base_path(&self) -> &str {
        &self.link_base_path
    }
}
