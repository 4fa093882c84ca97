//! Referential checks run before a write

use sea_orm::ConnectionTrait;

use crate::error::{CoreError, EntityKind, Result};
use crate::store;

/// A hero's `team_id`, when present, must name an existing team
pub(crate) async fn check_team_reference<C: ConnectionTrait>(
    conn: &C,
    team_id: Option<i32>,
) -> Result<()> {
    let Some(team_id) = team_id else {
        return Ok(());
    };

    if store::team_exists(conn, team_id).await? {
        Ok(())
    } else {
        Err(CoreError::InvalidReference {
            field: "team_id",
            entity: EntityKind::Team,
            id: team_id,
        })
    }
}
