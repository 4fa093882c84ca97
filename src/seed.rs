//! Demo data for a fresh store

use anyhow::Result;
use heroes_core::payload::{HeroCreate, MissionCreate, TeamCreate};
use heroes_core::Registry;
use tracing::info;

const TEAMS: [(&str, &str); 2] = [
    ("Avengers", "Avengers Tower"),
    ("X-Men", "Xavier's School for Gifted Youngsters"),
];

/// (name, secret name, age, index into `TEAMS`)
const HEROES: [(&str, &str, Option<i32>, usize); 4] = [
    ("Iron Man", "Tony Stark", Some(48), 0),
    ("Captain America", "Steve Rogers", Some(105), 0),
    ("Wolverine", "Logan", None, 1),
    ("Phoenix", "Jean Grey", Some(30), 1),
];

const MISSIONS: [(&str, &str); 3] = [
    ("Save NYC", "Repel the alien invasion of New York"),
    ("Protect Mutants", "Free the imprisoned mutants"),
    ("Stop Ultron", "Stop Ultron from wiping out humanity"),
];

/// (hero index, mission index)
const LINKS: [(usize, usize); 6] = [(0, 0), (1, 0), (2, 1), (3, 1), (0, 2), (1, 2)];

/// Populate the store with demo data unless a team already exists.
///
/// Returns `false` when the store was left untouched.
pub async fn seed(registry: &Registry) -> Result<bool> {
    if !registry.list_teams().await?.is_empty() {
        info!("Store already has data, skipping seed");
        return Ok(false);
    }

    let mut team_ids = Vec::with_capacity(TEAMS.len());
    for (name, headquarters) in TEAMS {
        let team = registry
            .create_team(TeamCreate {
                name: name.to_string(),
                headquarters: headquarters.to_string(),
            })
            .await?;
        team_ids.push(team.id);
    }

    let mut hero_ids = Vec::with_capacity(HEROES.len());
    for (name, secret_name, age, team) in HEROES {
        let hero = registry
            .create_hero(HeroCreate {
                name: name.to_string(),
                secret_name: secret_name.to_string(),
                age,
                team_id: Some(team_ids[team]),
            })
            .await?;
        hero_ids.push(hero.id);
    }

    let mut mission_ids = Vec::with_capacity(MISSIONS.len());
    for (name, description) in MISSIONS {
        let mission = registry
            .create_mission(MissionCreate {
                name: name.to_string(),
                description: Some(description.to_string()),
            })
            .await?;
        mission_ids.push(mission.id);
    }

    for (hero, mission) in LINKS {
        registry
            .link(hero_ids[hero], mission_ids[mission], None)
            .await?;
    }

    info!(
        "Seeded {} teams, {} heroes, {} missions and {} links",
        TEAMS.len(),
        HEROES.len(),
        MISSIONS.len(),
        LINKS.len()
    );

    Ok(true)
}
