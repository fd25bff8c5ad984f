use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::Html,
};
use sea_orm::{ActiveValue::Set, ColumnTrait, EntityTrait, QueryFilter};
use serde_json::{Value, json};

use crate::{
    AppState,
    entities::{director, film},
    error::AppResult,
    extract::FormOrJson,
    models::{CreateDirector, UpdateDirector},
    templates,
};

pub async fn create(
    State(state): State<Arc<AppState>>,
    FormOrJson(req): FormOrJson<CreateDirector>,
) -> AppResult<(StatusCode, Json<director::Model>)> {
    let director = state
        .store
        .create(director::ActiveModel {
            name: Set(req.name),
            birth_year: Set(req.birth_year),
            ..Default::default()
        })
        .await?;
    Ok((StatusCode::CREATED, Json(director)))
}

pub async fn list(State(state): State<Arc<AppState>>) -> AppResult<Html<String>> {
    let directors = director::Entity::find()
        .find_with_related(film::Entity)
        .all(state.store.conn())
        .await?;
    Ok(Html(templates::directors_page(&directors)))
}

pub async fn detail(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> AppResult<Html<String>> {
    let director = state.store.require::<director::Entity>(id, "Director").await?;
    let films = film::Entity::find()
        .filter(film::Column::DirectorId.eq(id))
        .all(state.store.conn())
        .await?;
    Ok(Html(templates::director_page(&director, &films)))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    FormOrJson(req): FormOrJson<UpdateDirector>,
) -> AppResult<Json<director::Model>> {
    let director = state.store.require::<director::Entity>(id, "Director").await?;

    let mut director: director::ActiveModel = director.into();
    if let Some(name) = req.name {
        director.name = Set(name);
    }
    if let Some(birth_year) = req.birth_year {
        director.birth_year = Set(Some(birth_year));
    }

    let director = state.store.update(director).await?;
    Ok(Json(director))
}

/// Deleting a director leaves its films' director_id in place. Orphaned
/// references are documented behavior, not cleaned up here.
pub async fn remove(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> AppResult<Json<Value>> {
    let director = state.store.require::<director::Entity>(id, "Director").await?;
    state.store.remove(director).await?;
    Ok(Json(json!({ "message": "ok" })))
}
