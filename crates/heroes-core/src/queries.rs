//! Read-side listings and traversals

use heroes_db::entities::{hero, mission, team};
use sea_orm::{ConnectionTrait, EntityTrait, ModelTrait, QueryOrder, QuerySelect};

use crate::error::Result;
use crate::pagination::Page;
use crate::store;

/// All teams by id; teams are few enough not to page
pub(crate) async fn list_teams<C: ConnectionTrait>(conn: &C) -> Result<Vec<team::Model>> {
    Ok(team::Entity::find()
        .order_by_asc(team::Column::Id)
        .all(conn)
        .await?)
}

pub(crate) async fn list_heroes<C: ConnectionTrait>(
    conn: &C,
    page: Page,
) -> Result<Vec<hero::Model>> {
    Ok(hero::Entity::find()
        .order_by_asc(hero::Column::Id)
        .offset(page.offset)
        .limit(page.limit)
        .all(conn)
        .await?)
}

pub(crate) async fn list_missions<C: ConnectionTrait>(
    conn: &C,
    page: Page,
) -> Result<Vec<mission::Model>> {
    Ok(mission::Entity::find()
        .order_by_asc(mission::Column::Id)
        .offset(page.offset)
        .limit(page.limit)
        .all(conn)
        .await?)
}

/// Members of a team, ordered by hero id
pub(crate) async fn heroes_of_team<C: ConnectionTrait>(
    conn: &C,
    team_id: i32,
) -> Result<Vec<hero::Model>> {
    let team = store::team(conn, team_id).await?;

    Ok(team
        .find_related(hero::Entity)
        .order_by_asc(hero::Column::Id)
        .all(conn)
        .await?)
}
