pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod extract;
pub mod models;
pub mod routes;
pub mod store;
pub mod templates;

use crate::store::CatalogStore;

#[derive(Clone)]
pub struct AppState {
    pub store: CatalogStore,
}
