//! Create and partial-update payloads
//!
//! Payloads never carry an `id`: identifiers are assigned by the store.
//! Update payloads only touch the fields they contain. Nullable columns use
//! `Option<Option<T>>` so that an absent field (keep) is distinct from an
//! explicit `null` (clear). Unknown fields are rejected during
//! deserialization.

use serde::{Deserialize, Serialize};
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use crate::error::{CoreError, Result};

fn require_text(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CoreError::validation(format!("{} must not be blank", field)));
    }
    Ok(())
}

fn require_age(age: Option<i32>) -> Result<()> {
    match age {
        Some(age) if age < 0 => Err(CoreError::validation(format!(
            "age must not be negative (got {})",
            age
        ))),
        _ => Ok(()),
    }
}

fn require_id(field: &str, id: Option<i32>) -> Result<()> {
    match id {
        Some(id) if id <= 0 => Err(CoreError::validation(format!(
            "{} must be a positive id (got {})",
            field, id
        ))),
        _ => Ok(()),
    }
}

// ============================================================
// Team
// ============================================================

/// Fields for a new team
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(deny_unknown_fields)]
pub struct TeamCreate {
    /// Team name
    pub name: String,
    /// Headquarters location
    pub headquarters: String,
}

impl TeamCreate {
    pub fn validate(&self) -> Result<()> {
        require_text("name", &self.name)?;
        require_text("headquarters", &self.headquarters)
    }
}

/// Partial update of a team
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(deny_unknown_fields)]
pub struct TeamUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headquarters: Option<String>,
}

impl TeamUpdate {
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.name {
            require_text("name", name)?;
        }
        if let Some(headquarters) = &self.headquarters {
            require_text("headquarters", headquarters)?;
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.headquarters.is_none()
    }
}

// ============================================================
// Hero
// ============================================================

/// Fields for a new hero
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(deny_unknown_fields)]
pub struct HeroCreate {
    /// Public hero name
    pub name: String,
    /// Civilian identity
    pub secret_name: String,
    #[serde(default)]
    pub age: Option<i32>,
    /// Team to join; must name an existing team
    #[serde(default)]
    pub team_id: Option<i32>,
}

impl HeroCreate {
    pub fn validate(&self) -> Result<()> {
        require_text("name", &self.name)?;
        require_text("secret_name", &self.secret_name)?;
        require_age(self.age)?;
        require_id("team_id", self.team_id)
    }
}

/// Partial update of a hero
///
/// `age` and `team_id` accept `null` to clear the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(deny_unknown_fields)]
pub struct HeroUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_name: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    #[cfg_attr(feature = "openapi", schema(value_type = Option<i32>))]
    pub age: Option<Option<i32>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    #[cfg_attr(feature = "openapi", schema(value_type = Option<i32>))]
    pub team_id: Option<Option<i32>>,
}

impl HeroUpdate {
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.name {
            require_text("name", name)?;
        }
        if let Some(secret_name) = &self.secret_name {
            require_text("secret_name", secret_name)?;
        }
        if let Some(age) = self.age {
            require_age(age)?;
        }
        if let Some(team_id) = self.team_id {
            require_id("team_id", team_id)?;
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.secret_name.is_none()
            && self.age.is_none()
            && self.team_id.is_none()
    }
}

// ============================================================
// Mission
// ============================================================

/// Fields for a new mission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(deny_unknown_fields)]
pub struct MissionCreate {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl MissionCreate {
    pub fn validate(&self) -> Result<()> {
        require_text("name", &self.name)
    }
}

/// Partial update of a mission; `description: null` clears it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(deny_unknown_fields)]
pub struct MissionUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>))]
    pub description: Option<Option<String>>,
}

impl MissionUpdate {
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.name {
            require_text("name", name)?;
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }
}
