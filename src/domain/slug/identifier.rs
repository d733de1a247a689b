use std::fmt;

use uuid::Uuid;

use super::codec::{ID_PREFIX_LEN, extract_id_from_slug};
use crate::domain::errors::{DomainError, DomainResult};

/// Eight hex characters taken from the front of a record id, kept lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IdPrefix(String);

impl IdPrefix {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.len() != ID_PREFIX_LEN || !value.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(DomainError::Validation(format!(
                "id prefix must be {ID_PREFIX_LEN} hex characters"
            )));
        }
        Ok(Self(value.to_ascii_lowercase()))
    }

    pub fn matches(&self, id: &Uuid) -> bool {
        id.hyphenated().to_string().starts_with(&self.0)
    }

    /// Smallest id carrying this prefix.
    pub fn lower_bound(&self) -> Uuid {
        let high = u32::from_str_radix(&self.0, 16).unwrap_or(0);
        Uuid::from_u128(u128::from(high) << 96)
    }
}

impl fmt::Display for IdPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What a slug tells us about the record it points to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlugIdentifier {
    Full(Uuid),
    Prefix(IdPrefix),
}

impl SlugIdentifier {
    pub fn from_slug(slug: &str) -> Option<Self> {
        let raw = extract_id_from_slug(slug)?;
        if raw.len() == ID_PREFIX_LEN {
            IdPrefix::new(raw).ok().map(Self::Prefix)
        } else {
            Uuid::parse_str(raw).ok().map(Self::Full)
        }
    }

    pub fn matches(&self, id: &Uuid) -> bool {
        match self {
            Self::Full(full) => full == id,
            Self::Prefix(prefix) => prefix.matches(id),
        }
    }
}

impl fmt::Display for SlugIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full(id) => write!(f, "{id}"),
            Self::Prefix(prefix) => write!(f, "{prefix}"),
        }
    }
}
