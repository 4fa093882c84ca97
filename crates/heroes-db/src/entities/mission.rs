//! Mission entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "mission")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub name: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::hero_mission_link::Entity")]
    HeroLinks,
}

impl Related<super::hero_mission_link::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HeroLinks.def()
    }
}

impl Related<super::hero::Entity> for Entity {
    fn to() -> RelationDef {
        super::hero_mission_link::Relation::Hero.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::hero_mission_link::Relation::Mission.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
