//! Keyed CRUD over teams, heroes and missions
//!
//! Every function runs against the connection it is given, which is the
//! registry's open transaction; none of them commits.

use heroes_db::entities::{hero, hero_mission_link, mission, team};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, ModelTrait,
    PrimaryKeyTrait, QueryFilter, Set,
};
use tracing::{debug, info};

use crate::error::{CoreError, EntityKind, Result};
use crate::payload::{HeroCreate, HeroUpdate, MissionCreate, MissionUpdate, TeamCreate, TeamUpdate};

async fn fetch<E, C>(conn: &C, entity: EntityKind, id: i32) -> Result<E::Model>
where
    E: EntityTrait,
    C: ConnectionTrait,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
{
    E::find_by_id(id)
        .one(conn)
        .await?
        .ok_or(CoreError::not_found(entity, id))
}

async fn exists<E, C>(conn: &C, id: i32) -> Result<bool>
where
    E: EntityTrait,
    C: ConnectionTrait,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
{
    Ok(E::find_by_id(id).one(conn).await?.is_some())
}

pub(crate) async fn team<C: ConnectionTrait>(conn: &C, id: i32) -> Result<team::Model> {
    fetch::<team::Entity, _>(conn, EntityKind::Team, id).await
}

pub(crate) async fn hero<C: ConnectionTrait>(conn: &C, id: i32) -> Result<hero::Model> {
    fetch::<hero::Entity, _>(conn, EntityKind::Hero, id).await
}

pub(crate) async fn mission<C: ConnectionTrait>(conn: &C, id: i32) -> Result<mission::Model> {
    fetch::<mission::Entity, _>(conn, EntityKind::Mission, id).await
}

pub(crate) async fn team_exists<C: ConnectionTrait>(conn: &C, id: i32) -> Result<bool> {
    exists::<team::Entity, _>(conn, id).await
}

// ============================================================
// Team
// ============================================================

pub(crate) async fn create_team<C: ConnectionTrait>(
    conn: &C,
    input: TeamCreate,
) -> Result<team::Model> {
    let team = team::ActiveModel {
        name: Set(input.name),
        headquarters: Set(input.headquarters),
        ..Default::default()
    }
    .insert(conn)
    .await?;

    info!("Created team {} ({})", team.id, team.name);
    Ok(team)
}

pub(crate) async fn update_team<C: ConnectionTrait>(
    conn: &C,
    id: i32,
    changes: TeamUpdate,
) -> Result<team::Model> {
    let current = team(conn, id).await?;
    if changes.is_empty() {
        return Ok(current);
    }

    let mut active: team::ActiveModel = current.into();
    if let Some(name) = changes.name {
        active.name = Set(name);
    }
    if let Some(headquarters) = changes.headquarters {
        active.headquarters = Set(headquarters);
    }

    let updated = active.update(conn).await?;
    info!("Updated team {}", id);
    Ok(updated)
}

/// Delete a team and clear `team_id` on every hero that pointed at it
pub(crate) async fn delete_team<C: ConnectionTrait>(conn: &C, id: i32) -> Result<()> {
    let current = team(conn, id).await?;

    let released = hero::Entity::update_many()
        .col_expr(hero::Column::TeamId, Expr::value(Option::<i32>::None))
        .filter(hero::Column::TeamId.eq(id))
        .exec(conn)
        .await?;

    current.delete(conn).await?;
    info!(
        "Deleted team {} ({} heroes left unaffiliated)",
        id, released.rows_affected
    );
    Ok(())
}

/// Clear a hero's membership in `team_id`; no-op when the hero is elsewhere
pub(crate) async fn remove_hero_from_team<C: ConnectionTrait>(
    conn: &C,
    team_id: i32,
    hero_id: i32,
) -> Result<bool> {
    team(conn, team_id).await?;
    let current = hero(conn, hero_id).await?;

    if current.team_id != Some(team_id) {
        debug!("Hero {} is not a member of team {}", hero_id, team_id);
        return Ok(false);
    }

    let mut active: hero::ActiveModel = current.into();
    active.team_id = Set(None);
    active.update(conn).await?;

    info!("Removed hero {} from team {}", hero_id, team_id);
    Ok(true)
}

// ============================================================
// Hero
// ============================================================

pub(crate) async fn create_hero<C: ConnectionTrait>(
    conn: &C,
    input: HeroCreate,
) -> Result<hero::Model> {
    let hero = hero::ActiveModel {
        name: Set(input.name),
        secret_name: Set(input.secret_name),
        age: Set(input.age),
        team_id: Set(input.team_id),
        ..Default::default()
    }
    .insert(conn)
    .await?;

    info!("Created hero {} ({})", hero.id, hero.name);
    Ok(hero)
}

pub(crate) async fn update_hero<C: ConnectionTrait>(
    conn: &C,
    id: i32,
    changes: HeroUpdate,
) -> Result<hero::Model> {
    let current = hero(conn, id).await?;
    if changes.is_empty() {
        return Ok(current);
    }

    let mut active: hero::ActiveModel = current.into();
    if let Some(name) = changes.name {
        active.name = Set(name);
    }
    if let Some(secret_name) = changes.secret_name {
        active.secret_name = Set(secret_name);
    }
    if let Some(age) = changes.age {
        active.age = Set(age);
    }
    if let Some(team_id) = changes.team_id {
        active.team_id = Set(team_id);
    }

    let updated = active.update(conn).await?;
    info!("Updated hero {}", id);
    Ok(updated)
}

/// Delete a hero together with its mission links
pub(crate) async fn delete_hero<C: ConnectionTrait>(conn: &C, id: i32) -> Result<()> {
    let current = hero(conn, id).await?;

    let links = hero_mission_link::Entity::delete_many()
        .filter(hero_mission_link::Column::HeroId.eq(id))
        .exec(conn)
        .await?;

    current.delete(conn).await?;
    info!("Deleted hero {} and {} mission links", id, links.rows_affected);
    Ok(())
}

// ============================================================
// Mission
// ============================================================

pub(crate) async fn create_mission<C: ConnectionTrait>(
    conn: &C,
    input: MissionCreate,
) -> Result<mission::Model> {
    let mission = mission::ActiveModel {
        name: Set(input.name),
        description: Set(input.description),
        ..Default::default()
    }
    .insert(conn)
    .await?;

    info!("Created mission {} ({})", mission.id, mission.name);
    Ok(mission)
}

pub(crate) async fn update_mission<C: ConnectionTrait>(
    conn: &C,
    id: i32,
    changes: MissionUpdate,
) -> Result<mission::Model> {
    let current = mission(conn, id).await?;
    if changes.is_empty() {
        return Ok(current);
    }

    let mut active: mission::ActiveModel = current.into();
    if let Some(name) = changes.name {
        active.name = Set(name);
    }
    if let Some(description) = changes.description {
        active.description = Set(description);
    }

    let updated = active.update(conn).await?;
    info!("Updated mission {}", id);
    Ok(updated)
}

/// Delete a mission together with its hero links
pub(crate) async fn delete_mission<C: ConnectionTrait>(conn: &C, id: i32) -> Result<()> {
    let current = mission(conn, id).await?;

    let links = hero_mission_link::Entity::delete_many()
        .filter(hero_mission_link::Column::MissionId.eq(id))
        .exec(conn)
        .await?;

    current.delete(conn).await?;
    info!("Deleted mission {} and {} hero links", id, links.rows_affected);
    Ok(())
}
