//! Team entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "team")]
pub struct Model {
    /// Store-assigned identifier
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Team name
    pub name: String,

    /// Headquarters location
    pub headquarters: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Heroes whose `team_id` points at this team
    #[sea_orm(has_many = "super::hero::Entity")]
    Heroes,
}

impl Related<super::hero::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Heroes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
