pub mod actors;
pub mod directors;
pub mod films;

use std::sync::Arc;

use axum::{
    Router,
    response::Html,
    routing::{get, put},
};

use crate::{AppState, templates};

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(index))
        .route("/films", get(films::list).post(films::create))
        .route("/film/{id}", get(films::detail))
        .route("/films/{id}", put(films::update).delete(films::remove))
        .route("/director", get(directors::list).post(directors::create))
        .route(
            "/director/{id}",
            get(directors::detail).put(directors::update).delete(directors::remove),
        )
        .route("/actors", get(actors::list).post(actors::create))
        .route("/actor/{id}", get(actors::detail))
        .route("/actors/{id}", put(actors::update).delete(actors::remove))
}

pub async fn index() -> Html<String> {
    Html(templates::index_page())
}
