use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::Html,
};
use sea_orm::{ActiveValue::Set, EntityTrait, ModelTrait};
use serde_json::{Value, json};

use crate::{
    AppState,
    entities::{actor, film},
    error::AppResult,
    extract::FormOrJson,
    models::{CreateActor, UpdateActor},
    templates,
};

pub async fn create(
    State(state): State<Arc<AppState>>,
    FormOrJson(req): FormOrJson<CreateActor>,
) -> AppResult<(StatusCode, Json<actor::Model>)> {
    let actor = state
        .store
        .create(actor::ActiveModel { name: Set(req.name), ..Default::default() })
        .await?;
    Ok((StatusCode::CREATED, Json(actor)))
}

pub async fn list(State(state): State<Arc<AppState>>) -> AppResult<Html<String>> {
    let actors = actor::Entity::find()
        .find_with_related(film::Entity)
        .all(state.store.conn())
        .await?;
    Ok(Html(templates::actors_page(&actors)))
}

pub async fn detail(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> AppResult<Html<String>> {
    let actor = state.store.require::<actor::Entity>(id, "Actor").await?;
    let films = actor.find_related(film::Entity).all(state.store.conn()).await?;
    Ok(Html(templates::actor_page(&actor, &films)))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    FormOrJson(req): FormOrJson<UpdateActor>,
) -> AppResult<Json<actor::Model>> {
    let actor = state.store.require::<actor::Entity>(id, "Actor").await?;

    let mut actor: actor::ActiveModel = actor.into();
    if let Some(name) = req.name {
        actor.name = Set(name);
    }

    let actor = state.store.update(actor).await?;
    Ok(Json(actor))
}

pub async fn remove(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> AppResult<Json<Value>> {
    let actor = state.store.require::<actor::Entity>(id, "Actor").await?;
    state.store.remove(actor).await?;
    Ok(Json(json!({ "message": "ok" })))
}
