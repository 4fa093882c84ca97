//! Hero/mission association management
//!
//! Links have set semantics: linking an existing pair and unlinking a missing
//! pair both succeed without changing anything. The insert relies on the
//! composite primary key with `ON CONFLICT DO NOTHING`, so two racing `link`
//! calls still leave a single row.

use chrono::{DateTime, Utc};
use heroes_db::entities::{hero, hero_mission_link, mission};
use sea_orm::{
    sea_query::OnConflict, ColumnTrait, ConnectionTrait, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, Set,
};
use tracing::{debug, info};

use crate::error::Result;
use crate::store;

/// Link a hero to a mission. Returns `false` when the pair was already linked.
pub(crate) async fn link<C: ConnectionTrait>(
    conn: &C,
    hero_id: i32,
    mission_id: i32,
    join_time: Option<DateTime<Utc>>,
) -> Result<bool> {
    store::mission(conn, mission_id).await?;
    store::hero(conn, hero_id).await?;

    let row = hero_mission_link::ActiveModel {
        hero_id: Set(hero_id),
        mission_id: Set(mission_id),
        join_time: Set(Some(join_time.unwrap_or_else(Utc::now))),
    };

    let inserted = hero_mission_link::Entity::insert(row)
        .on_conflict(
            OnConflict::columns([
                hero_mission_link::Column::HeroId,
                hero_mission_link::Column::MissionId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(conn)
        .await?;

    if inserted > 0 {
        info!("Linked hero {} to mission {}", hero_id, mission_id);
    } else {
        debug!("Hero {} already linked to mission {}", hero_id, mission_id);
    }
    Ok(inserted > 0)
}

/// Remove a hero from a mission. Returns `false` when no link existed.
pub(crate) async fn unlink<C: ConnectionTrait>(
    conn: &C,
    hero_id: i32,
    mission_id: i32,
) -> Result<bool> {
    store::mission(conn, mission_id).await?;
    store::hero(conn, hero_id).await?;

    let removed = hero_mission_link::Entity::delete_many()
        .filter(hero_mission_link::Column::HeroId.eq(hero_id))
        .filter(hero_mission_link::Column::MissionId.eq(mission_id))
        .exec(conn)
        .await?;

    if removed.rows_affected > 0 {
        info!("Unlinked hero {} from mission {}", hero_id, mission_id);
    } else {
        debug!("Hero {} was not linked to mission {}", hero_id, mission_id);
    }
    Ok(removed.rows_affected > 0)
}

pub(crate) async fn link_of<C: ConnectionTrait>(
    conn: &C,
    hero_id: i32,
    mission_id: i32,
) -> Result<Option<hero_mission_link::Model>> {
    Ok(hero_mission_link::Entity::find_by_id((hero_id, mission_id))
        .one(conn)
        .await?)
}

/// Heroes on a mission, ordered by hero id
pub(crate) async fn heroes_of<C: ConnectionTrait>(
    conn: &C,
    mission_id: i32,
) -> Result<Vec<hero::Model>> {
    let mission = store::mission(conn, mission_id).await?;

    Ok(mission
        .find_related(hero::Entity)
        .order_by_asc(hero::Column::Id)
        .all(conn)
        .await?)
}

/// Missions a hero takes part in, ordered by mission id
pub(crate) async fn missions_of<C: ConnectionTrait>(
    conn: &C,
    hero_id: i32,
) -> Result<Vec<mission::Model>> {
    let hero = store::hero(conn, hero_id).await?;

    Ok(hero
        .find_related(mission::Entity)
        .order_by_asc(mission::Column::Id)
        .all(conn)
        .await?)
}
