use crate::domain::errors::DomainError;
use std::io::ErrorKind;
use std::path::Path;

pub fn map_io(path: &Path, err: &std::io::Error) -> DomainError {
    match err.kind() {
        ErrorKind::NotFound => {
            DomainError::NotFound(format!("task export {} does not exist", path.display()))
        }
        ErrorKind::PermissionDenied => {
            DomainError::persistence(format!("task export {} is not readable", path.display()))
        }
        _ => DomainError::persistence(format!("reading {}: {err}", path.display())),
    }
}

pub fn map_json(err: serde_json::Error) -> DomainError {
    if err.is_data() {
        return DomainError::persistence(format!(
            "task export has unexpected shape at line {}: {err}",
            err.line()
        ));
    }
    DomainError::persistence(format!("task export is not valid JSON: {err}"))
}
