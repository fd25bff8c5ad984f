use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header::CONTENT_TYPE},
};
use cinelog::{
    AppState,
    entities::{actor, film, film_actor},
    routes,
    store::CatalogStore,
};
use http_body_util::BodyExt;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ActiveValue::Set, ConnectOptions, Database};
use serde_json::{Value, json};
use tower::ServiceExt;

async fn app() -> (Router, CatalogStore) {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1);
    let db = Database::connect(opts).await.unwrap();
    Migrator::up(&db, None).await.unwrap();

    let store = CatalogStore::new(db);
    let state = Arc::new(AppState { store: store.clone() });
    (routes::router().with_state(state), store)
}

async fn send_json(app: &Router, method: &str, path: &str, body: Value) -> (StatusCode, Value) {
    let req = Request::builder()
        .method(method)
        .uri(path)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

async fn send(app: &Router, method: &str, path: &str) -> (StatusCode, String) {
    let req = Request::builder().method(method).uri(path).body(Body::empty()).unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn create_then_get_film_round_trips() {
    let (app, _store) = app().await;

    let (status, director) = send_json(&app, "POST", "/director", json!({ "name": "Scott" })).await;
    assert_eq!(status, StatusCode::CREATED);
    let director_id = director["id"].as_i64().unwrap();

    let (status, created) = send_json(
        &app,
        "POST",
        "/films",
        json!({ "title": "Alien", "year": 1979, "directorId": director_id }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["title"], "Alien");
    assert_eq!(created["year"], 1979);
    assert_eq!(created["directorId"].as_i64(), Some(director_id));

    let id = created["id"].as_i64().unwrap();
    let (status, html) = send(&app, "GET", &format!("/film/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Alien"));
    assert!(html.contains("Scott"));
}

#[tokio::test]
async fn accepts_form_encoded_bodies() {
    let (app, _store) = app().await;

    let req = Request::builder()
        .method("POST")
        .uri("/films")
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("title=Stalker&year=1979"))
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let created: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(created["title"], "Stalker");
    assert_eq!(created["year"], 1979);
    assert!(created["directorId"].is_null());
}

#[tokio::test]
async fn missing_ids_return_structured_404() {
    let (app, _store) = app().await;

    let (status, body) = send(&app, "GET", "/film/9999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let body: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["status"], 404);
    assert_eq!(body["message"], "Film not found");

    let (status, body) = send_json(&app, "PUT", "/films/9999", json!({ "title": "x" })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Film not found");

    let (status, _) = send(&app, "DELETE", "/films/9999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    for path in ["/director/9999", "/actor/9999"] {
        let (status, body) = send(&app, "GET", path).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let body: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(body["status"], 404);
    }

    let (status, body) = send_json(&app, "PUT", "/director/9999", json!({ "name": "x" })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Director not found");

    let (status, body) = send_json(&app, "PUT", "/actors/9999", json!({ "name": "x" })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Actor not found");

    let (status, _) = send(&app, "DELETE", "/director/9999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&app, "DELETE", "/actors/9999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_twice_returns_404_second_time() {
    let (app, _store) = app().await;

    let (_, created) =
        send_json(&app, "POST", "/films", json!({ "title": "Heat", "year": 1995 })).await;
    let id = created["id"].as_i64().unwrap();

    let (status, body) = send(&app, "DELETE", &format!("/films/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["message"], "ok");

    let (status, _) = send(&app, "DELETE", &format!("/films/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn partial_film_update_preserves_other_fields() {
    let (app, _store) = app().await;

    let (_, created) = send_json(
        &app,
        "POST",
        "/films",
        json!({ "title": "Blade Runner", "year": 1982, "directorId": 7 }),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let (status, updated) = send_json(
        &app,
        "PUT",
        &format!("/films/{id}"),
        json!({ "title": "Blade Runner: The Final Cut" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["title"], "Blade Runner: The Final Cut");
    assert_eq!(updated["year"], 1982);
    assert_eq!(updated["directorId"], 7);

    let (status, updated) =
        send_json(&app, "PUT", &format!("/films/{id}"), json!({ "year": 2007 })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["title"], "Blade Runner: The Final Cut");
    assert_eq!(updated["year"], 2007);
    assert_eq!(updated["directorId"], 7);
}

#[tokio::test]
async fn film_update_never_touches_director_id() {
    let (app, _store) = app().await;

    let (_, created) = send_json(
        &app,
        "POST",
        "/films",
        json!({ "title": "Dune", "year": 2021, "directorId": 3 }),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    // Unknown fields in the payload are ignored, so directorId stays put.
    let (status, updated) = send_json(
        &app,
        "PUT",
        &format!("/films/{id}"),
        json!({ "title": "Dune: Part One", "directorId": 42 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["directorId"], 3);
}

#[tokio::test]
async fn director_list_includes_owned_films() {
    let (app, _store) = app().await;

    let (_, director) = send_json(&app, "POST", "/director", json!({ "name": "Villeneuve" })).await;
    let director_id = director["id"].as_i64().unwrap();

    for (title, year) in [("Arrival", 2016), ("Sicario", 2015)] {
        let (status, _) = send_json(
            &app,
            "POST",
            "/films",
            json!({ "title": title, "year": year, "directorId": director_id }),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, html) = send(&app, "GET", "/director").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Villeneuve"));
    assert!(html.contains("Arrival"));
    assert!(html.contains("Sicario"));

    let (status, html) = send(&app, "GET", &format!("/director/{director_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Arrival"));
    assert!(html.contains("Sicario"));
}

#[tokio::test]
async fn director_update_accepts_birth_year() {
    let (app, _store) = app().await;

    let (_, director) = send_json(&app, "POST", "/director", json!({ "name": "Kubrick" })).await;
    let id = director["id"].as_i64().unwrap();
    assert!(director["birthYear"].is_null());

    let (status, updated) =
        send_json(&app, "PUT", &format!("/director/{id}"), json!({ "birthYear": 1928 })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "Kubrick");
    assert_eq!(updated["birthYear"], 1928);
}

#[tokio::test]
async fn actor_list_includes_films_linked_through_cast() {
    let (app, store) = app().await;

    let (_, actor_body) = send_json(&app, "POST", "/actors", json!({ "name": "Weaver" })).await;
    let actor_id = actor_body["id"].as_i64().unwrap() as i32;

    let (_, film_body) =
        send_json(&app, "POST", "/films", json!({ "title": "Alien", "year": 1979 })).await;
    let film_id = film_body["id"].as_i64().unwrap() as i32;

    store
        .create(film_actor::ActiveModel {
            film_id: Set(film_id),
            actor_id: Set(actor_id),
            ..Default::default()
        })
        .await
        .unwrap();

    let (status, html) = send(&app, "GET", "/actors").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Weaver"));
    assert!(html.contains("Alien"));

    let (status, html) = send(&app, "GET", &format!("/actor/{actor_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Weaver"));
    assert!(html.contains("Alien"));
}

#[tokio::test]
async fn actor_mutations_return_the_affected_record() {
    let (app, _store) = app().await;

    let (status, created) = send_json(&app, "POST", "/actors", json!({ "name": "Brody" })).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_i64().unwrap();

    let (status, updated) =
        send_json(&app, "PUT", &format!("/actors/{id}"), json!({ "name": "Adrien Brody" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "Adrien Brody");

    let (status, body) = send(&app, "DELETE", &format!("/actors/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["message"], "ok");
}

#[tokio::test]
async fn duplicate_actor_names_get_distinct_ids() {
    let (app, store) = app().await;

    let (status, first) = send_json(&app, "POST", "/actors", json!({ "name": "Actor A" })).await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, second) = send_json(&app, "POST", "/actors", json!({ "name": "Actor A" })).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_ne!(first["id"], second["id"]);

    let actors = store.all::<actor::Entity>().await.unwrap();
    assert_eq!(actors.len(), 2);
}

#[tokio::test]
async fn deleting_a_director_orphans_its_films() {
    let (app, store) = app().await;

    let (status, director) = send_json(&app, "POST", "/director", json!({ "name": "Nolan" })).await;
    assert_eq!(status, StatusCode::CREATED);
    let director_id = director["id"].as_i64().unwrap();

    let (status, created) = send_json(
        &app,
        "POST",
        "/films",
        json!({ "title": "Inception", "year": 2010, "directorId": director_id }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["directorId"].as_i64(), Some(director_id));
    let film_id = created["id"].as_i64().unwrap();

    let (status, html) = send(&app, "GET", &format!("/film/{film_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Inception"));

    let (status, _) = send(&app, "DELETE", &format!("/director/{director_id}")).await;
    assert_eq!(status, StatusCode::OK);

    // The reference survives the delete; orphans are documented behavior.
    let orphan = store.get::<film::Entity>(film_id as i32).await.unwrap().unwrap();
    assert_eq!(orphan.director_id, Some(director_id as i32));
}

#[tokio::test]
async fn list_views_render_when_empty() {
    let (app, _store) = app().await;

    for path in ["/", "/films", "/director", "/actors"] {
        let (status, html) = send(&app, "GET", path).await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("<!DOCTYPE html>"), "{path} did not render a page");
    }
}
