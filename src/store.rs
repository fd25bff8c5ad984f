use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    ModelTrait, PrimaryKeyTrait,
};

use crate::error::{AppError, AppResult};

/// Generic gateway over the relational store. Point lookups and mutations go
/// through here; list queries that need eager loads run against `conn()`.
#[derive(Clone)]
pub struct CatalogStore {
    db: DatabaseConnection,
}

impl CatalogStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn conn(&self) -> &DatabaseConnection {
        &self.db
    }

    pub async fn get<E>(&self, id: i32) -> AppResult<Option<E::Model>>
    where
        E: EntityTrait,
        <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
    {
        Ok(E::find_by_id(id).one(&self.db).await?)
    }

    /// Existence gate shared by every point operation: the row or a 404.
    pub async fn require<E>(&self, id: i32, entity: &'static str) -> AppResult<E::Model>
    where
        E: EntityTrait,
        <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
    {
        self.get::<E>(id).await?.ok_or(AppError::NotFound(entity))
    }

    pub async fn all<E: EntityTrait>(&self) -> AppResult<Vec<E::Model>> {
        Ok(E::find().all(&self.db).await?)
    }

    pub async fn create<A>(&self, model: A) -> AppResult<<A::Entity as EntityTrait>::Model>
    where
        A: ActiveModelTrait + ActiveModelBehavior + Send,
        <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
    {
        Ok(model.insert(&self.db).await?)
    }

    pub async fn update<A>(&self, model: A) -> AppResult<<A::Entity as EntityTrait>::Model>
    where
        A: ActiveModelTrait + ActiveModelBehavior + Send,
        <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
    {
        Ok(model.update(&self.db).await?)
    }

    pub async fn remove<M, A>(&self, model: M) -> AppResult<()>
    where
        M: ModelTrait + IntoActiveModel<A>,
        A: ActiveModelTrait<Entity = M::Entity> + ActiveModelBehavior + Send,
    {
        model.delete(&self.db).await?;
        Ok(())
    }
}
