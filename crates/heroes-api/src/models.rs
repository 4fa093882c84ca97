use chrono::{DateTime, Utc};
use heroes_core::{hero, mission, team};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Team record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Team {
    /// Team identifier
    pub id: i32,
    /// Team name
    pub name: String,
    /// Headquarters location
    pub headquarters: String,
}

impl From<team::Model> for Team {
    fn from(model: team::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            headquarters: model.headquarters,
        }
    }
}

/// Hero record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Hero {
    /// Hero identifier
    pub id: i32,
    /// Public hero name
    pub name: String,
    /// Civilian identity
    pub secret_name: String,
    /// Age, if known
    pub age: Option<i32>,
    /// Team the hero belongs to
    pub team_id: Option<i32>,
}

impl From<hero::Model> for Hero {
    fn from(model: hero::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            secret_name: model.secret_name,
            age: model.age,
            team_id: model.team_id,
        }
    }
}

/// Mission record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Mission {
    /// Mission identifier
    pub id: i32,
    /// Mission name
    pub name: String,
    /// Free-form description
    pub description: Option<String>,
}

impl From<mission::Model> for Mission {
    fn from(model: mission::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
        }
    }
}

/// Convert a list of entity models into API records
pub(crate) fn collect<M, T: From<M>>(models: Vec<M>) -> Vec<T> {
    models.into_iter().map(T::from).collect()
}

/// Pagination query for hero and mission listings
#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// Number of records to skip (default: 0)
    #[serde(default, alias = "offset")]
    pub skip: Option<u64>,
    /// Maximum number of records to return (default: 10, capped by the server)
    #[serde(default)]
    pub limit: Option<u64>,
}

/// Optional parameters when adding a hero to a mission
#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LinkQuery {
    /// When the hero joined (RFC 3339); defaults to now
    #[serde(default)]
    pub join_time: Option<DateTime<Utc>>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
}

/// Error response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}
