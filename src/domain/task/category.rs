//! Closed enumerations for task classification.
//!
//! Labels are the Portuguese strings shown in the app; icons are Lucide icon
//! names. Every mapping is an exhaustive `match`, so adding a variant fails to
//! compile until its label and icon exist.

use crate::domain::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskCategory {
    Cleaning,
    Kitchen,
    Laundry,
    Maintenance,
    Garden,
    Shopping,
    Pets,
    Bills,
    Other,
}

impl TaskCategory {
    pub const ALL: [Self; 9] = [
        Self::Cleaning,
        Self::Kitchen,
        Self::Laundry,
        Self::Maintenance,
        Self::Garden,
        Self::Shopping,
        Self::Pets,
        Self::Bills,
        Self::Other,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cleaning => "cleaning",
            Self::Kitchen => "kitchen",
            Self::Laundry => "laundry",
            Self::Maintenance => "maintenance",
            Self::Garden => "garden",
            Self::Shopping => "shopping",
            Self::Pets => "pets",
            Self::Bills => "bills",
            Self::Other => "other",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Cleaning => "Limpeza",
            Self::Kitchen => "Cozinha",
            Self::Laundry => "Lavanderia",
            Self::Maintenance => "Manutenção",
            Self::Garden => "Jardim",
            Self::Shopping => "Compras",
            Self::Pets => "Pets",
            Self::Bills => "Contas",
            Self::Other => "Outros",
        }
    }

    pub const fn icon(self) -> &'static str {
        match self {
            Self::Cleaning => "sparkles",
            Self::Kitchen => "utensils",
            Self::Laundry => "shirt",
            Self::Maintenance => "wrench",
            Self::Garden => "flower",
            Self::Shopping => "shopping-cart",
            Self::Pets => "paw-print",
            Self::Bills => "receipt",
            Self::Other => "circle-ellipsis",
        }
    }
}

impl FromStr for TaskCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::Validation(format!("unknown task category: {s}")))
    }
}

impl fmt::Display for TaskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

impl TaskStatus {
    pub const ALL: [Self; 4] = [
        Self::Pending,
        Self::InProgress,
        Self::Completed,
        Self::Cancelled,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pendente",
            Self::InProgress => "Em andamento",
            Self::Completed => "Concluída",
            Self::Cancelled => "Cancelada",
        }
    }

    pub const fn is_open(self) -> bool {
        matches!(self, Self::Pending | Self::InProgress)
    }
}

impl FromStr for TaskStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::Validation(format!("unknown task status: {s}")))
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declaration order is significant: `Low < Medium < High < Urgent`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl TaskPriority {
    pub const ALL: [Self; 4] = [Self::Low, Self::Medium, Self::High, Self::Urgent];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Baixa",
            Self::Medium => "Média",
            Self::High => "Alta",
            Self::Urgent => "Urgente",
        }
    }
}

impl FromStr for TaskPriority {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::Validation(format!("unknown task priority: {s}")))
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
