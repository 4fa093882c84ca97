//! Association between heroes and missions
//!
//! A link row has no identity beyond its `(hero_id, mission_id)` pair.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "hero_mission_link")]
pub struct Model {
    /// Hero id (composite primary key)
    #[sea_orm(primary_key, auto_increment = false)]
    pub hero_id: i32,

    /// Mission id (composite primary key)
    #[sea_orm(primary_key, auto_increment = false)]
    pub mission_id: i32,

    /// When the hero joined the mission
    pub join_time: Option<ChronoDateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::hero::Entity",
        from = "Column::HeroId",
        to = "super::hero::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Hero,

    #[sea_orm(
        belongs_to = "super::mission::Entity",
        from = "Column::MissionId",
        to = "super::mission::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Mission,
}

impl Related<super::hero::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Hero.def()
    }
}

impl Related<super::mission::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Mission.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
