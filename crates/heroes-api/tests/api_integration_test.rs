//! Integration tests for the HTTP surface

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use heroes_api::{models::*, ApiServer, ApiServerConfig};
use heroes_core::{PagePolicy, Registry};
use serde_json::{json, Value};
use tower::ServiceExt; // For `oneshot` method

/// Helper to create a router over an in-memory database with migrations applied
async fn create_test_app() -> Router {
    create_test_app_with(PagePolicy::default()).await
}

async fn create_test_app_with(pages: PagePolicy) -> Router {
    let db = heroes_db::open("sqlite::memory:")
        .await
        .expect("Failed to create in-memory database");

    let config = ApiServerConfig {
        bind_addr: "127.0.0.1:0".parse().unwrap(),
        enable_cors: false,
    };

    ApiServer::new(config, Registry::new(db).with_page_policy(pages)).build_router()
}

/// Send a request and decode the JSON body (`Value::Null` when empty)
async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().uri(uri).method(method);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            panic!("non-JSON body: {}", String::from_utf8_lossy(&bytes))
        })
    };

    (status, value)
}

async fn create_team(app: &Router, name: &str) -> Team {
    let (status, body) = send(
        app,
        "POST",
        "/teams",
        Some(json!({ "name": name, "headquarters": "HQ" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    serde_json::from_value(body).unwrap()
}

async fn create_hero(app: &Router, name: &str, team_id: Option<i32>) -> Hero {
    let (status, body) = send(
        app,
        "POST",
        "/heroes",
        Some(json!({ "name": name, "secret_name": format!("{name} secret"), "team_id": team_id })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    serde_json::from_value(body).unwrap()
}

async fn create_mission(app: &Router, name: &str) -> Mission {
    let (status, body) = send(app, "POST", "/missions", Some(json!({ "name": name }))).await;
    assert_eq!(status, StatusCode::OK, "{body}");
    serde_json::from_value(body).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app().await;

    let (status, body) = send(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    let health: HealthResponse = serde_json::from_value(body).unwrap();
    assert_eq!(health.status, "healthy");
}

#[tokio::test]
async fn test_openapi_served() {
    let app = create_test_app().await;

    let (status, body) = send(&app, "GET", "/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/heroes/{id}"].is_object());
}

#[tokio::test]
async fn test_hero_roundtrip() {
    let app = create_test_app().await;
    let team = create_team(&app, "Avengers").await;

    let (status, body) = send(
        &app,
        "POST",
        "/heroes",
        Some(json!({
            "name": "Iron Man",
            "secret_name": "Tony Stark",
            "age": 48,
            "team_id": team.id
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let created: Hero = serde_json::from_value(body).unwrap();
    assert_eq!(created.id, 1);
    assert_eq!(created.age, Some(48));
    assert_eq!(created.team_id, Some(team.id));

    let (status, body) = send(&app, "GET", "/heroes/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_value::<Hero>(body).unwrap(), created);
}

#[tokio::test]
async fn test_get_missing_hero_is_404() {
    let app = create_test_app().await;

    let (status, body) = send(&app, "GET", "/heroes/999", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    let error: ErrorResponse = serde_json::from_value(body).unwrap();
    assert_eq!(error.error, "Hero not found");
    assert_eq!(error.code.as_deref(), Some("HERO_NOT_FOUND"));
}

#[tokio::test]
async fn test_missing_team_and_mission_are_404() {
    let app = create_test_app().await;

    let (status, body) = send(&app, "DELETE", "/teams/5", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "TEAM_NOT_FOUND");

    let (status, body) = send(&app, "GET", "/missions/5/heroes", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "MISSION_NOT_FOUND");
}

#[tokio::test]
async fn test_create_hero_with_unknown_team_is_422() {
    let app = create_test_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/heroes",
        Some(json!({ "name": "Ghost", "secret_name": "Nobody", "team_id": 42 })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "INVALID_REFERENCE");

    let (_, body) = send(&app, "GET", "/heroes", None).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_unknown_field_is_422() {
    let app = create_test_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/teams",
        Some(json!({ "name": "X-Men", "headquarters": "Mansion", "motto": "To me" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_missing_field_and_blank_name_are_422() {
    let app = create_test_app().await;

    let (status, body) = send(&app, "POST", "/heroes", Some(json!({ "name": "Solo" }))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "VALIDATION_ERROR");

    let (status, body) = send(&app, "POST", "/missions", Some(json!({ "name": "   " }))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_non_numeric_id_is_422() {
    let app = create_test_app().await;

    let (status, body) = send(&app, "GET", "/heroes/abc", None).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_partial_update_and_clear() {
    let app = create_test_app().await;
    let team = create_team(&app, "Avengers").await;
    let hero = create_hero(&app, "Hulk", Some(team.id)).await;

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/heroes/{}", hero.id),
        Some(json!({ "age": 49 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let updated: Hero = serde_json::from_value(body).unwrap();
    assert_eq!(updated.name, "Hulk");
    assert_eq!(updated.age, Some(49));
    assert_eq!(updated.team_id, Some(team.id));

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/heroes/{}", hero.id),
        Some(json!({ "team_id": null })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let cleared: Hero = serde_json::from_value(body).unwrap();
    assert_eq!(cleared.team_id, None);
    assert_eq!(cleared.age, Some(49));
}

#[tokio::test]
async fn test_update_hero_with_unknown_team_is_422() {
    let app = create_test_app().await;
    let hero = create_hero(&app, "Thor", None).await;

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/heroes/{}", hero.id),
        Some(json!({ "team_id": 77 })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "INVALID_REFERENCE");
}

#[tokio::test]
async fn test_delete_hero_is_204_then_404() {
    let app = create_test_app().await;
    let hero = create_hero(&app, "Vision", None).await;
    let uri = format!("/heroes/{}", hero.id);

    let (status, body) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_mission_assignment_scenario() {
    let app = create_test_app().await;
    let team = create_team(&app, "Avengers").await;
    let iron_man = create_hero(&app, "Iron Man", Some(team.id)).await;
    let cap = create_hero(&app, "Captain America", Some(team.id)).await;
    let mission = create_mission(&app, "Save NYC").await;

    for hero in [&cap, &iron_man] {
        let (status, _) = send(
            &app,
            "POST",
            &format!("/missions/{}/heroes/{}", mission.id, hero.id),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NO_CONTENT);
    }

    // Linking twice is not an error
    let (status, _) = send(
        &app,
        "POST",
        &format!("/missions/{}/heroes/{}", mission.id, cap.id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&app, "GET", &format!("/missions/{}/heroes", mission.id), None).await;
    assert_eq!(status, StatusCode::OK);
    let heroes: Vec<Hero> = serde_json::from_value(body).unwrap();
    let names: Vec<_> = heroes.iter().map(|h| h.name.as_str()).collect();
    assert_eq!(names, ["Iron Man", "Captain America"]);

    let (_, body) = send(&app, "GET", &format!("/heroes/{}/missions", cap.id), None).await;
    let missions: Vec<Mission> = serde_json::from_value(body).unwrap();
    assert_eq!(missions, vec![mission.clone()]);

    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/missions/{}/heroes/{}", mission.id, cap.id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = send(&app, "GET", &format!("/missions/{}/heroes", mission.id), None).await;
    let heroes: Vec<Hero> = serde_json::from_value(body).unwrap();
    assert_eq!(heroes, vec![iron_man]);
}

#[tokio::test]
async fn test_link_with_join_time() {
    let app = create_test_app().await;
    let hero = create_hero(&app, "Storm", None).await;
    let mission = create_mission(&app, "Protect Mutants").await;

    let (status, _) = send(
        &app,
        "POST",
        &format!(
            "/missions/{}/heroes/{}?join_time=2024-05-01T12:00:00Z",
            mission.id, hero.id
        ),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(
        &app,
        "POST",
        &format!("/missions/{}/heroes/{}?join_time=yesterday", mission.id, hero.id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_link_unknown_hero_is_404() {
    let app = create_test_app().await;
    let mission = create_mission(&app, "Stop Ultron").await;

    let (status, body) = send(
        &app,
        "POST",
        &format!("/missions/{}/heroes/404", mission.id),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "HERO_NOT_FOUND");
}

#[tokio::test]
async fn test_delete_mission_keeps_heroes() {
    let app = create_test_app().await;
    let hero = create_hero(&app, "Wolverine", None).await;
    let mission = create_mission(&app, "Weapon X").await;
    send(
        &app,
        "POST",
        &format!("/missions/{}/heroes/{}", mission.id, hero.id),
        None,
    )
    .await;

    let (status, _) = send(&app, "DELETE", &format!("/missions/{}", mission.id), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&app, "GET", &format!("/heroes/{}/missions", hero.id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_hero_pagination() {
    let app = create_test_app().await;
    for i in 0..5 {
        create_hero(&app, &format!("Hero {i}"), None).await;
    }

    let (status, body) = send(&app, "GET", "/heroes?skip=1&limit=2", None).await;
    assert_eq!(status, StatusCode::OK);
    let page: Vec<Hero> = serde_json::from_value(body).unwrap();
    let ids: Vec<_> = page.iter().map(|h| h.id).collect();
    assert_eq!(ids, [2, 3]);

    let (_, body) = send(&app, "GET", "/heroes?offset=4", None).await;
    let page: Vec<Hero> = serde_json::from_value(body).unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].id, 5);

    let (status, body) = send(&app, "GET", "/heroes?limit=-1", None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_huge_skip_returns_empty_page() {
    let app = create_test_app().await;
    create_hero(&app, "Hero", None).await;
    create_mission(&app, "Mission").await;

    let (status, body) = send(&app, "GET", "/heroes?skip=9223372036854775808", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (status, body) = send(
        &app,
        "GET",
        "/missions?offset=18446744073709551615&limit=18446744073709551615",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_mission_page_is_capped() {
    let app = create_test_app_with(PagePolicy::with_max_limit(2)).await;
    for name in ["One", "Two", "Three"] {
        create_mission(&app, name).await;
    }

    let (_, body) = send(&app, "GET", "/missions?limit=50", None).await;
    let page: Vec<Mission> = serde_json::from_value(body).unwrap();
    assert_eq!(page.len(), 2);
}

#[tokio::test]
async fn test_team_heroes_and_removal() {
    let app = create_test_app().await;
    let avengers = create_team(&app, "Avengers").await;
    let xmen = create_team(&app, "X-Men").await;
    let thor = create_hero(&app, "Thor", Some(avengers.id)).await;
    let cyclops = create_hero(&app, "Cyclops", Some(xmen.id)).await;

    let (status, body) = send(&app, "GET", &format!("/teams/{}/heroes", avengers.id), None).await;
    assert_eq!(status, StatusCode::OK);
    let members: Vec<Hero> = serde_json::from_value(body).unwrap();
    assert_eq!(members, vec![thor.clone()]);

    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/teams/{}/heroes/{}", avengers.id, thor.id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = send(&app, "GET", &format!("/heroes/{}", thor.id), None).await;
    assert_eq!(body["team_id"], Value::Null);

    // A hero on another team is left alone
    send(
        &app,
        "DELETE",
        &format!("/teams/{}/heroes/{}", avengers.id, cyclops.id),
        None,
    )
    .await;
    let (_, body) = send(&app, "GET", &format!("/heroes/{}", cyclops.id), None).await;
    assert_eq!(body["team_id"], json!(xmen.id));
}

#[tokio::test]
async fn test_delete_team_unassigns_heroes() {
    let app = create_test_app().await;
    let team = create_team(&app, "Defenders").await;
    let hero = create_hero(&app, "Daredevil", Some(team.id)).await;

    let (status, _) = send(&app, "DELETE", &format!("/teams/{}", team.id), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&app, "GET", &format!("/heroes/{}", hero.id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["team_id"], Value::Null);

    let (_, body) = send(&app, "GET", "/teams", None).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_update_team() {
    let app = create_test_app().await;
    let team = create_team(&app, "Avengers").await;

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/teams/{}", team.id),
        Some(json!({ "headquarters": "Compound" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let updated: Team = serde_json::from_value(body).unwrap();
    assert_eq!(updated.name, "Avengers");
    assert_eq!(updated.headquarters, "Compound");
}
