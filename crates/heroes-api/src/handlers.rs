use axum::{extract::State, http::StatusCode, Json};
use heroes_core::payload::{
    HeroCreate, HeroUpdate, MissionCreate, MissionUpdate, TeamCreate, TeamUpdate,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::error::{ApiError, ApiJson, ApiPath, ApiQuery, ApiResult};
use crate::models::*;
use crate::AppState;

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 503, description = "Database unavailable", body = ErrorResponse)
    ),
    tag = "system"
)]
pub async fn health_check(State(state): State<Arc<AppState>>) -> ApiResult<Json<HealthResponse>> {
    if let Err(e) = state.registry.ping().await {
        warn!("Health check failed: {}", e);
        return Err(ApiError::new(
            StatusCode::SERVICE_UNAVAILABLE,
            e.to_string(),
            "DATABASE_UNAVAILABLE",
        ));
    }

    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}

// ============================================================
// Teams
// ============================================================

/// Create a team
#[utoipa::path(
    post,
    path = "/teams",
    request_body = TeamCreate,
    responses(
        (status = 200, description = "Team created", body = Team),
        (status = 422, description = "Invalid payload", body = ErrorResponse)
    ),
    tag = "teams"
)]
pub async fn create_team(
    State(state): State<Arc<AppState>>,
    ApiJson(input): ApiJson<TeamCreate>,
) -> ApiResult<Json<Team>> {
    info!("Creating team: {}", input.name);

    let team = state.registry.create_team(input).await?;
    Ok(Json(team.into()))
}

/// List all teams
#[utoipa::path(
    get,
    path = "/teams",
    responses(
        (status = 200, description = "All teams", body = Vec<Team>)
    ),
    tag = "teams"
)]
pub async fn list_teams(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Team>>> {
    debug!("Listing teams");

    let teams = state.registry.list_teams().await?;
    Ok(Json(collect(teams)))
}

/// Get a team by ID
#[utoipa::path(
    get,
    path = "/teams/{id}",
    params(
        ("id" = i32, Path, description = "Team ID")
    ),
    responses(
        (status = 200, description = "Team", body = Team),
        (status = 404, description = "Team not found", body = ErrorResponse)
    ),
    tag = "teams"
)]
pub async fn get_team(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i32>,
) -> ApiResult<Json<Team>> {
    let team = state.registry.get_team(id).await?;
    Ok(Json(team.into()))
}

/// Update the supplied fields of a team
#[utoipa::path(
    put,
    path = "/teams/{id}",
    params(
        ("id" = i32, Path, description = "Team ID")
    ),
    request_body = TeamUpdate,
    responses(
        (status = 200, description = "Updated team", body = Team),
        (status = 404, description = "Team not found", body = ErrorResponse),
        (status = 422, description = "Invalid payload", body = ErrorResponse)
    ),
    tag = "teams"
)]
pub async fn update_team(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(changes): ApiJson<TeamUpdate>,
) -> ApiResult<Json<Team>> {
    info!("Updating team: {}", id);

    let team = state.registry.update_team(id, changes).await?;
    Ok(Json(team.into()))
}

/// Delete a team; its heroes become unaffiliated
#[utoipa::path(
    delete,
    path = "/teams/{id}",
    params(
        ("id" = i32, Path, description = "Team ID")
    ),
    responses(
        (status = 204, description = "Team deleted"),
        (status = 404, description = "Team not found", body = ErrorResponse)
    ),
    tag = "teams"
)]
pub async fn delete_team(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i32>,
) -> ApiResult<StatusCode> {
    info!("Deleting team: {}", id);

    state.registry.delete_team(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List the heroes of a team
#[utoipa::path(
    get,
    path = "/teams/{id}/heroes",
    params(
        ("id" = i32, Path, description = "Team ID")
    ),
    responses(
        (status = 200, description = "Team members ordered by hero ID", body = Vec<Hero>),
        (status = 404, description = "Team not found", body = ErrorResponse)
    ),
    tag = "teams"
)]
pub async fn list_team_heroes(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i32>,
) -> ApiResult<Json<Vec<Hero>>> {
    let heroes = state.registry.heroes_of_team(id).await?;
    Ok(Json(collect(heroes)))
}

/// Remove a hero from a team
#[utoipa::path(
    delete,
    path = "/teams/{id}/heroes/{hero_id}",
    params(
        ("id" = i32, Path, description = "Team ID"),
        ("hero_id" = i32, Path, description = "Hero ID")
    ),
    responses(
        (status = 204, description = "Hero is no longer on the team"),
        (status = 404, description = "Team or hero not found", body = ErrorResponse)
    ),
    tag = "teams"
)]
pub async fn remove_team_hero(
    State(state): State<Arc<AppState>>,
    ApiPath((team_id, hero_id)): ApiPath<(i32, i32)>,
) -> ApiResult<StatusCode> {
    info!("Removing hero {} from team {}", hero_id, team_id);

    state.registry.remove_hero_from_team(team_id, hero_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ============================================================
// Heroes
// ============================================================

/// Create a hero
#[utoipa::path(
    post,
    path = "/heroes",
    request_body = HeroCreate,
    responses(
        (status = 200, description = "Hero created", body = Hero),
        (status = 422, description = "Invalid payload or unknown team", body = ErrorResponse)
    ),
    tag = "heroes"
)]
pub async fn create_hero(
    State(state): State<Arc<AppState>>,
    ApiJson(input): ApiJson<HeroCreate>,
) -> ApiResult<Json<Hero>> {
    info!("Creating hero: {}", input.name);

    let hero = state.registry.create_hero(input).await?;
    Ok(Json(hero.into()))
}

/// List heroes, paginated by ID
#[utoipa::path(
    get,
    path = "/heroes",
    params(PageQuery),
    responses(
        (status = 200, description = "Page of heroes", body = Vec<Hero>),
        (status = 422, description = "Invalid query", body = ErrorResponse)
    ),
    tag = "heroes"
)]
pub async fn list_heroes(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<PageQuery>,
) -> ApiResult<Json<Vec<Hero>>> {
    debug!("Listing heroes: {:?}", query);

    let heroes = state.registry.list_heroes(query.skip, query.limit).await?;
    Ok(Json(collect(heroes)))
}

/// Get a hero by ID
#[utoipa::path(
    get,
    path = "/heroes/{id}",
    params(
        ("id" = i32, Path, description = "Hero ID")
    ),
    responses(
        (status = 200, description = "Hero", body = Hero),
        (status = 404, description = "Hero not found", body = ErrorResponse)
    ),
    tag = "heroes"
)]
pub async fn get_hero(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i32>,
) -> ApiResult<Json<Hero>> {
    let hero = state.registry.get_hero(id).await?;
    Ok(Json(hero.into()))
}

/// Update the supplied fields of a hero
#[utoipa::path(
    put,
    path = "/heroes/{id}",
    params(
        ("id" = i32, Path, description = "Hero ID")
    ),
    request_body = HeroUpdate,
    responses(
        (status = 200, description = "Updated hero", body = Hero),
        (status = 404, description = "Hero not found", body = ErrorResponse),
        (status = 422, description = "Invalid payload or unknown team", body = ErrorResponse)
    ),
    tag = "heroes"
)]
pub async fn update_hero(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(changes): ApiJson<HeroUpdate>,
) -> ApiResult<Json<Hero>> {
    info!("Updating hero: {}", id);

    let hero = state.registry.update_hero(id, changes).await?;
    Ok(Json(hero.into()))
}

/// Delete a hero and its mission links
#[utoipa::path(
    delete,
    path = "/heroes/{id}",
    params(
        ("id" = i32, Path, description = "Hero ID")
    ),
    responses(
        (status = 204, description = "Hero deleted"),
        (status = 404, description = "Hero not found", body = ErrorResponse)
    ),
    tag = "heroes"
)]
pub async fn delete_hero(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i32>,
) -> ApiResult<StatusCode> {
    info!("Deleting hero: {}", id);

    state.registry.delete_hero(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List the missions of a hero
#[utoipa::path(
    get,
    path = "/heroes/{id}/missions",
    params(
        ("id" = i32, Path, description = "Hero ID")
    ),
    responses(
        (status = 200, description = "Missions ordered by mission ID", body = Vec<Mission>),
        (status = 404, description = "Hero not found", body = ErrorResponse)
    ),
    tag = "heroes"
)]
pub async fn list_hero_missions(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i32>,
) -> ApiResult<Json<Vec<Mission>>> {
    let missions = state.registry.missions_of(id).await?;
    Ok(Json(collect(missions)))
}

// ============================================================
// Missions
// ============================================================

/// Create a mission
#[utoipa::path(
    post,
    path = "/missions",
    request_body = MissionCreate,
    responses(
        (status = 200, description = "Mission created", body = Mission),
        (status = 422, description = "Invalid payload", body = ErrorResponse)
    ),
    tag = "missions"
)]
pub async fn create_mission(
    State(state): State<Arc<AppState>>,
    ApiJson(input): ApiJson<MissionCreate>,
) -> ApiResult<Json<Mission>> {
    info!("Creating mission: {}", input.name);

    let mission = state.registry.create_mission(input).await?;
    Ok(Json(mission.into()))
}

/// List missions, paginated by ID
#[utoipa::path(
    get,
    path = "/missions",
    params(PageQuery),
    responses(
        (status = 200, description = "Page of missions", body = Vec<Mission>),
        (status = 422, description = "Invalid query", body = ErrorResponse)
    ),
    tag = "missions"
)]
pub async fn list_missions(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<PageQuery>,
) -> ApiResult<Json<Vec<Mission>>> {
    debug!("Listing missions: {:?}", query);

    let missions = state.registry.list_missions(query.skip, query.limit).await?;
    Ok(Json(collect(missions)))
}

/// Get a mission by ID
#[utoipa::path(
    get,
    path = "/missions/{id}",
    params(
        ("id" = i32, Path, description = "Mission ID")
    ),
    responses(
        (status = 200, description = "Mission", body = Mission),
        (status = 404, description = "Mission not found", body = ErrorResponse)
    ),
    tag = "missions"
)]
pub async fn get_mission(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i32>,
) -> ApiResult<Json<Mission>> {
    let mission = state.registry.get_mission(id).await?;
    Ok(Json(mission.into()))
}

/// Update the supplied fields of a mission
#[utoipa::path(
    put,
    path = "/missions/{id}",
    params(
        ("id" = i32, Path, description = "Mission ID")
    ),
    request_body = MissionUpdate,
    responses(
        (status = 200, description = "Updated mission", body = Mission),
        (status = 404, description = "Mission not found", body = ErrorResponse),
        (status = 422, description = "Invalid payload", body = ErrorResponse)
    ),
    tag = "missions"
)]
pub async fn update_mission(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(changes): ApiJson<MissionUpdate>,
) -> ApiResult<Json<Mission>> {
    info!("Updating mission: {}", id);

    let mission = state.registry.update_mission(id, changes).await?;
    Ok(Json(mission.into()))
}

/// Delete a mission and its hero links
#[utoipa::path(
    delete,
    path = "/missions/{id}",
    params(
        ("id" = i32, Path, description = "Mission ID")
    ),
    responses(
        (status = 204, description = "Mission deleted"),
        (status = 404, description = "Mission not found", body = ErrorResponse)
    ),
    tag = "missions"
)]
pub async fn delete_mission(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i32>,
) -> ApiResult<StatusCode> {
    info!("Deleting mission: {}", id);

    state.registry.delete_mission(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List the heroes on a mission
#[utoipa::path(
    get,
    path = "/missions/{id}/heroes",
    params(
        ("id" = i32, Path, description = "Mission ID")
    ),
    responses(
        (status = 200, description = "Heroes ordered by hero ID", body = Vec<Hero>),
        (status = 404, description = "Mission not found", body = ErrorResponse)
    ),
    tag = "missions"
)]
pub async fn list_mission_heroes(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i32>,
) -> ApiResult<Json<Vec<Hero>>> {
    let heroes = state.registry.heroes_of(id).await?;
    Ok(Json(collect(heroes)))
}

/// Add a hero to a mission (no-op if already on it)
#[utoipa::path(
    post,
    path = "/missions/{id}/heroes/{hero_id}",
    params(
        ("id" = i32, Path, description = "Mission ID"),
        ("hero_id" = i32, Path, description = "Hero ID"),
        LinkQuery
    ),
    responses(
        (status = 204, description = "Hero is on the mission"),
        (status = 404, description = "Mission or hero not found", body = ErrorResponse)
    ),
    tag = "missions"
)]
pub async fn add_mission_hero(
    State(state): State<Arc<AppState>>,
    ApiPath((mission_id, hero_id)): ApiPath<(i32, i32)>,
    ApiQuery(query): ApiQuery<LinkQuery>,
) -> ApiResult<StatusCode> {
    info!("Adding hero {} to mission {}", hero_id, mission_id);

    state
        .registry
        .link(hero_id, mission_id, query.join_time)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Remove a hero from a mission (no-op if not on it)
#[utoipa::path(
    delete,
    path = "/missions/{id}/heroes/{hero_id}",
    params(
        ("id" = i32, Path, description = "Mission ID"),
        ("hero_id" = i32, Path, description = "Hero ID")
    ),
    responses(
        (status = 204, description = "Hero is off the mission"),
        (status = 404, description = "Mission or hero not found", body = ErrorResponse)
    ),
    tag = "missions"
)]
pub async fn remove_mission_hero(
    State(state): State<Arc<AppState>>,
    ApiPath((mission_id, hero_id)): ApiPath<(i32, i32)>,
) -> ApiResult<StatusCode> {
    info!("Removing hero {} from mission {}", hero_id, mission_id);

    state.registry.unlink(hero_id, mission_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
