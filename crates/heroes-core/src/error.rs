use sea_orm::DbErr;
use std::fmt;
use thiserror::Error;

/// Kinds of stored entities, used to label errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Team,
    Hero,
    Mission,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Team => "Team",
            EntityKind::Hero => "Hero",
            EntityKind::Mission => "Mission",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors returned by registry operations
#[derive(Debug, Error)]
pub enum CoreError {
    /// The addressed entity does not exist
    #[error("{entity} not found")]
    NotFound { entity: EntityKind, id: i32 },

    /// A foreign key in the payload names an entity that does not exist
    #[error("{field} references {entity} {id}, which does not exist")]
    InvalidReference {
        field: &'static str,
        entity: EntityKind,
        id: i32,
    },

    /// Malformed input, rejected before touching the store
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl CoreError {
    pub fn not_found(entity: EntityKind, id: i32) -> Self {
        CoreError::NotFound { entity, id }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        CoreError::Validation(message.into())
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
