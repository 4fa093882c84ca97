//! Core of the hero registry
//!
//! Teams own heroes through a nullable `team_id`; heroes and missions are
//! joined by link rows keyed on `(hero_id, mission_id)`. All access goes
//! through [`Registry`], which validates input, checks references and runs
//! each operation in its own transaction.
//!
//! ```no_run
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! use heroes_core::{payload::TeamCreate, Registry};
//!
//! let db = heroes_db::open("sqlite::memory:").await?;
//! let registry = Registry::new(db);
//!
//! let team = registry
//!     .create_team(TeamCreate {
//!         name: "Avengers".into(),
//!         headquarters: "Tower".into(),
//!     })
//!     .await?;
//! assert_eq!(team.id, 1);
//! # Ok(())
//! # }
//! ```

mod associations;
pub mod error;
mod integrity;
pub mod pagination;
pub mod payload;
mod queries;
mod registry;
mod store;

pub use error::{CoreError, EntityKind, Result};
pub use heroes_db::entities::{hero, hero_mission_link, mission, team};
pub use pagination::{Page, PagePolicy};
pub use registry::Registry;
pub use sea_orm::DbErr;
