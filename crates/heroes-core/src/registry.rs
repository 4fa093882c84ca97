//! Registry: validated, transactional entry point for every operation
//!
//! Each public method is one unit of work. The transaction is opened on
//! entry and committed just before returning `Ok`; an early return through
//! `?` drops it, which rolls it back.

use chrono::{DateTime, Utc};
use heroes_db::entities::{hero, hero_mission_link, mission, team};
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};
use tracing::debug;

use crate::associations;
use crate::error::Result;
use crate::integrity;
use crate::pagination::PagePolicy;
use crate::payload::{HeroCreate, HeroUpdate, MissionCreate, MissionUpdate, TeamCreate, TeamUpdate};
use crate::queries;
use crate::store;

/// Team/hero/mission registry backed by a SeaORM connection
#[derive(Debug, Clone)]
pub struct Registry {
    db: DatabaseConnection,
    pages: PagePolicy,
}

impl Registry {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            pages: PagePolicy::default(),
        }
    }

    pub fn with_page_policy(mut self, pages: PagePolicy) -> Self {
        self.pages = pages;
        self
    }

    pub fn page_policy(&self) -> PagePolicy {
        self.pages
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Check that the backing store answers
    pub async fn ping(&self) -> Result<()> {
        self.db.ping().await?;
        Ok(())
    }

    async fn begin(&self) -> Result<DatabaseTransaction> {
        Ok(self.db.begin().await?)
    }

    // ============================================================
    // Teams
    // ============================================================

    pub async fn create_team(&self, input: TeamCreate) -> Result<team::Model> {
        input.validate()?;

        let txn = self.begin().await?;
        let team = store::create_team(&txn, input).await?;
        txn.commit().await?;

        Ok(team)
    }

    pub async fn get_team(&self, id: i32) -> Result<team::Model> {
        debug!("Getting team {}", id);
        store::team(&self.db, id).await
    }

    pub async fn list_teams(&self) -> Result<Vec<team::Model>> {
        queries::list_teams(&self.db).await
    }

    pub async fn update_team(&self, id: i32, changes: TeamUpdate) -> Result<team::Model> {
        changes.validate()?;

        let txn = self.begin().await?;
        let team = store::update_team(&txn, id, changes).await?;
        txn.commit().await?;

        Ok(team)
    }

    /// Delete a team; its heroes stay, with `team_id` cleared
    pub async fn delete_team(&self, id: i32) -> Result<()> {
        let txn = self.begin().await?;
        store::delete_team(&txn, id).await?;
        txn.commit().await?;

        Ok(())
    }

    pub async fn heroes_of_team(&self, team_id: i32) -> Result<Vec<hero::Model>> {
        let txn = self.begin().await?;
        let heroes = queries::heroes_of_team(&txn, team_id).await?;
        txn.commit().await?;

        Ok(heroes)
    }

    /// Take a hero off a team. A hero that is not on the team is left alone.
    pub async fn remove_hero_from_team(&self, team_id: i32, hero_id: i32) -> Result<()> {
        let txn = self.begin().await?;
        store::remove_hero_from_team(&txn, team_id, hero_id).await?;
        txn.commit().await?;

        Ok(())
    }

    // ============================================================
    // Heroes
    // ============================================================

    pub async fn create_hero(&self, input: HeroCreate) -> Result<hero::Model> {
        input.validate()?;

        let txn = self.begin().await?;
        integrity::check_team_reference(&txn, input.team_id).await?;
        let hero = store::create_hero(&txn, input).await?;
        txn.commit().await?;

        Ok(hero)
    }

    pub async fn get_hero(&self, id: i32) -> Result<hero::Model> {
        debug!("Getting hero {}", id);
        store::hero(&self.db, id).await
    }

    pub async fn list_heroes(
        &self,
        offset: Option<u64>,
        limit: Option<u64>,
    ) -> Result<Vec<hero::Model>> {
        let page = self.pages.page(offset, limit);
        debug!("Listing heroes {:?}", page);
        queries::list_heroes(&self.db, page).await
    }

    pub async fn update_hero(&self, id: i32, changes: HeroUpdate) -> Result<hero::Model> {
        changes.validate()?;

        let txn = self.begin().await?;
        // Existence of the hero is reported before a bad team reference
        store::hero(&txn, id).await?;
        if let Some(team_id) = changes.team_id {
            integrity::check_team_reference(&txn, team_id).await?;
        }
        let hero = store::update_hero(&txn, id, changes).await?;
        txn.commit().await?;

        Ok(hero)
    }

    /// Delete a hero and every mission link naming it
    pub async fn delete_hero(&self, id: i32) -> Result<()> {
        let txn = self.begin().await?;
        store::delete_hero(&txn, id).await?;
        txn.commit().await?;

        Ok(())
    }

    pub async fn missions_of(&self, hero_id: i32) -> Result<Vec<mission::Model>> {
        let txn = self.begin().await?;
        let missions = associations::missions_of(&txn, hero_id).await?;
        txn.commit().await?;

        Ok(missions)
    }

    // ============================================================
    // Missions
    // ============================================================

    pub async fn create_mission(&self, input: MissionCreate) -> Result<mission::Model> {
        input.validate()?;

        let txn = self.begin().await?;
        let mission = store::create_mission(&txn, input).await?;
        txn.commit().await?;

        Ok(mission)
    }

    pub async fn get_mission(&self, id: i32) -> Result<mission::Model> {
        debug!("Getting mission {}", id);
        store::mission(&self.db, id).await
    }

    pub async fn list_missions(
        &self,
        offset: Option<u64>,
        limit: Option<u64>,
    ) -> Result<Vec<mission::Model>> {
        let page = self.pages.page(offset, limit);
        debug!("Listing missions {:?}", page);
        queries::list_missions(&self.db, page).await
    }

    pub async fn update_mission(&self, id: i32, changes: MissionUpdate) -> Result<mission::Model> {
        changes.validate()?;

        let txn = self.begin().await?;
        let mission = store::update_mission(&txn, id, changes).await?;
        txn.commit().await?;

        Ok(mission)
    }

    /// Delete a mission and every hero link naming it
    pub async fn delete_mission(&self, id: i32) -> Result<()> {
        let txn = self.begin().await?;
        store::delete_mission(&txn, id).await?;
        txn.commit().await?;

        Ok(())
    }

    // ============================================================
    // Hero <-> mission links
    // ============================================================

    /// Add a hero to a mission. Linking an already-linked pair is a no-op and
    /// keeps the original join time. `join_time` defaults to now.
    pub async fn link(
        &self,
        hero_id: i32,
        mission_id: i32,
        join_time: Option<DateTime<Utc>>,
    ) -> Result<()> {
        let txn = self.begin().await?;
        associations::link(&txn, hero_id, mission_id, join_time).await?;
        txn.commit().await?;

        Ok(())
    }

    /// Remove a hero from a mission. Unlinking a missing pair is a no-op.
    pub async fn unlink(&self, hero_id: i32, mission_id: i32) -> Result<()> {
        let txn = self.begin().await?;
        associations::unlink(&txn, hero_id, mission_id).await?;
        txn.commit().await?;

        Ok(())
    }

    pub async fn heroes_of(&self, mission_id: i32) -> Result<Vec<hero::Model>> {
        let txn = self.begin().await?;
        let heroes = associations::heroes_of(&txn, mission_id).await?;
        txn.commit().await?;

        Ok(heroes)
    }

    pub async fn link_of(
        &self,
        hero_id: i32,
        mission_id: i32,
    ) -> Result<Option<hero_mission_link::Model>> {
        associations::link_of(&self.db, hero_id, mission_id).await
    }
}
