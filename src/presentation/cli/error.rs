use crate::application::error::ApplicationError;
use crate::domain::errors::DomainError;
use std::process::ExitCode;

/// Failure surfaced to the shell: a message for stderr plus an exit status.
#[derive(Debug)]
pub struct CliError {
    code: u8,
    message: String,
}

impl CliError {
    pub const NO_MATCH: u8 = 1;
    pub const INVALID_INPUT: u8 = 2;
    pub const NOT_FOUND: u8 = 3;
    pub const CONFLICT: u8 = 4;
    pub const FAILURE: u8 = 70;

    pub fn new(code: u8, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn from_error(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Validation(msg) => Self::new(Self::INVALID_INPUT, msg),
            ApplicationError::NotFound(msg) => Self::new(Self::NOT_FOUND, msg),
            ApplicationError::Conflict(msg) => Self::new(Self::CONFLICT, msg),
            ApplicationError::Infrastructure(msg) => Self::new(Self::FAILURE, msg),
            ApplicationError::Domain(domain_err) => Self::from_domain(domain_err),
        }
    }

    fn from_domain(err: DomainError) -> Self {
        let code = match &err {
            DomainError::Validation(_) => Self::INVALID_INPUT,
            DomainError::NotFound(_) => Self::NOT_FOUND,
            DomainError::Conflict(_) => Self::CONFLICT,
            DomainError::Persistence(_) => Self::FAILURE,
        };
        Self::new(code, err.to_string())
    }

    pub const fn code(&self) -> u8 {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.code)
    }
}

impl From<ApplicationError> for CliError {
    fn from(err: ApplicationError) -> Self {
        Self::from_error(err)
    }
}

impl From<DomainError> for CliError {
    fn from(err: DomainError) -> Self {
        Self::from_domain(err)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::new(Self::FAILURE, format!("failed to encode output: {err}"))
    }
}
