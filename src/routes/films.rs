use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::Html,
};
use sea_orm::{ActiveValue::Set, EntityTrait};
use serde_json::{Value, json};

use crate::{
    AppState,
    entities::{director, film},
    error::AppResult,
    extract::FormOrJson,
    models::{CreateFilm, UpdateFilm},
    templates,
};

pub async fn create(
    State(state): State<Arc<AppState>>,
    FormOrJson(req): FormOrJson<CreateFilm>,
) -> AppResult<(StatusCode, Json<film::Model>)> {
    // director_id is stored as given; referential integrity is not enforced.
    let film = state
        .store
        .create(film::ActiveModel {
            title: Set(req.title),
            year: Set(req.year),
            director_id: Set(req.director_id),
            ..Default::default()
        })
        .await?;
    Ok((StatusCode::CREATED, Json(film)))
}

pub async fn list(State(state): State<Arc<AppState>>) -> AppResult<Html<String>> {
    let films = film::Entity::find()
        .find_also_related(director::Entity)
        .all(state.store.conn())
        .await?;
    Ok(Html(templates::films_page(&films)))
}

pub async fn detail(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> AppResult<Html<String>> {
    let film = state.store.require::<film::Entity>(id, "Film").await?;
    let director = match film.director_id {
        Some(director_id) => state.store.get::<director::Entity>(director_id).await?,
        None => None,
    };
    Ok(Html(templates::film_page(&film, director.as_ref())))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    FormOrJson(req): FormOrJson<UpdateFilm>,
) -> AppResult<Json<film::Model>> {
    let film = state.store.require::<film::Entity>(id, "Film").await?;

    let mut film: film::ActiveModel = film.into();
    if let Some(title) = req.title {
        film.title = Set(title);
    }
    if let Some(year) = req.year {
        film.year = Set(year);
    }

    let film = state.store.update(film).await?;
    Ok(Json(film))
}

pub async fn remove(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> AppResult<Json<Value>> {
    let film = state.store.require::<film::Entity>(id, "Film").await?;
    state.store.remove(film).await?;
    Ok(Json(json!({ "message": "ok" })))
}
