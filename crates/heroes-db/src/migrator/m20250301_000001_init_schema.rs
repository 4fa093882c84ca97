//! Initial schema: teams, heroes, missions and the hero/mission link table

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ============================================================
        // 1. team
        // ============================================================
        manager
            .create_table(
                Table::create()
                    .table(Team::Table)
                    .if_not_exists()
                    .col(pk_auto(Team::Id))
                    .col(string(Team::Name))
                    .col(string(Team::Headquarters))
                    .to_owned(),
            )
            .await?;

        // ============================================================
        // 2. hero (nullable team_id, cleared when the team goes away)
        // ============================================================
        manager
            .create_table(
                Table::create()
                    .table(Hero::Table)
                    .if_not_exists()
                    .col(pk_auto(Hero::Id))
                    .col(string(Hero::Name))
                    .col(string(Hero::SecretName))
                    .col(integer_null(Hero::Age))
                    .col(integer_null(Hero::TeamId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_hero_team_id")
                            .from(Hero::Table, Hero::TeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_hero_team_id")
                    .table(Hero::Table)
                    .col(Hero::TeamId)
                    .to_owned(),
            )
            .await?;

        // ============================================================
        // 3. mission
        // ============================================================
        manager
            .create_table(
                Table::create()
                    .table(Mission::Table)
                    .if_not_exists()
                    .col(pk_auto(Mission::Id))
                    .col(string(Mission::Name))
                    .col(text_null(Mission::Description))
                    .to_owned(),
            )
            .await?;

        // ============================================================
        // 4. hero_mission_link junction table
        // ============================================================
        manager
            .create_table(
                Table::create()
                    .table(HeroMissionLink::Table)
                    .if_not_exists()
                    .col(integer(HeroMissionLink::HeroId))
                    .col(integer(HeroMissionLink::MissionId))
                    .col(timestamp_with_time_zone_null(HeroMissionLink::JoinTime))
                    .primary_key(
                        Index::create()
                            .col(HeroMissionLink::HeroId)
                            .col(HeroMissionLink::MissionId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_hero_mission_link_hero_id")
                            .from(HeroMissionLink::Table, HeroMissionLink::HeroId)
                            .to(Hero::Table, Hero::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_hero_mission_link_mission_id")
                            .from(HeroMissionLink::Table, HeroMissionLink::MissionId)
                            .to(Mission::Table, Mission::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_hero_mission_link_mission_id")
                    .table(HeroMissionLink::Table)
                    .col(HeroMissionLink::MissionId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Reverse order so foreign keys never dangle
        manager
            .drop_table(Table::drop().table(HeroMissionLink::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Mission::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Hero::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Team::Table).to_owned())
            .await?;

        Ok(())
    }
}

// ============================================================
// Table identifiers
// ============================================================

#[derive(DeriveIden)]
enum Team {
    Table,
    Id,
    Name,
    Headquarters,
}

#[derive(DeriveIden)]
enum Hero {
    Table,
    Id,
    Name,
    SecretName,
    Age,
    TeamId,
}

#[derive(DeriveIden)]
enum Mission {
    Table,
    Id,
    Name,
    Description,
}

#[derive(DeriveIden)]
enum HeroMissionLink {
    Table,
    HeroId,
    MissionId,
    JoinTime,
}
