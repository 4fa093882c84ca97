//! Hero entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "hero")]
pub struct Model {
    /// Store-assigned identifier
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Public hero name
    pub name: String,

    /// Civilian identity
    pub secret_name: String,

    pub age: Option<i32>,

    /// Team the hero belongs to; `None` for unaffiliated heroes
    pub team_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::TeamId",
        to = "super::team::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Team,

    /// Link rows naming this hero
    #[sea_orm(has_many = "super::hero_mission_link::Entity")]
    MissionLinks,
}

impl Related<super::team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Team.def()
    }
}

impl Related<super::hero_mission_link::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MissionLinks.def()
    }
}

/// Missions are reached through the link table.
impl Related<super::mission::Entity> for Entity {
    fn to() -> RelationDef {
        super::hero_mission_link::Relation::Mission.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::hero_mission_link::Relation::Hero.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
