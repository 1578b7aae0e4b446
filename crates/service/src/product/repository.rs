use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryOrder, QuerySelect, Set,
};

use crate::errors::ServiceError;
use models::product::{self, Entity as ProductEntity};

/// Narrow store interface the HTTP layer depends on. Each mutating call
/// persists its change before returning; there is no separate commit step.
///
/// `update` and `remove` return `Ok(None)` when no record has the given id,
/// letting the service layer decide how missing records surface.
#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn count(&self) -> Result<u64, ServiceError>;
    async fn page_by_id_desc(&self, skip: u64, take: u64) -> Result<Vec<product::Model>, ServiceError>;
    async fn find(&self, id: i32) -> Result<Option<product::Model>, ServiceError>;
    async fn insert(&self, name: &str, last_name: &str) -> Result<product::Model, ServiceError>;
    async fn update(&self, id: i32, name: &str, last_name: &str) -> Result<Option<product::Model>, ServiceError>;
    async fn remove(&self, id: i32) -> Result<Option<product::Model>, ServiceError>;
}

/// SeaORM-backed store implementation. Concurrency control is delegated to
/// the database; one logical statement per call, no retries.
pub struct SeaOrmProductStore {
    db: DatabaseConnection,
}

impl SeaOrmProductStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductStore for SeaOrmProductStore {
    async fn count(&self) -> Result<u64, ServiceError> {
        ProductEntity::find()
            .count(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn page_by_id_desc(&self, skip: u64, take: u64) -> Result<Vec<product::Model>, ServiceError> {
        ProductEntity::find()
            .order_by_desc(product::Column::Id)
            .offset(skip)
            .limit(take)
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn find(&self, id: i32) -> Result<Option<product::Model>, ServiceError> {
        ProductEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn insert(&self, name: &str, last_name: &str) -> Result<product::Model, ServiceError> {
        let am = product::ActiveModel {
            id: NotSet,
            name: Set(name.to_string()),
            last_name: Set(last_name.to_string()),
        };
        am.insert(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn update(&self, id: i32, name: &str, last_name: &str) -> Result<Option<product::Model>, ServiceError> {
        let Some(existing) = self.find(id).await? else {
            return Ok(None);
        };
        let mut am: product::ActiveModel = existing.into();
        am.name = Set(name.to_string());
        am.last_name = Set(last_name.to_string());
        let updated = am.update(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(Some(updated))
    }

    async fn remove(&self, id: i32) -> Result<Option<product::Model>, ServiceError> {
        let Some(existing) = self.find(id).await? else {
            return Ok(None);
        };
        ProductEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(Some(existing))
    }
}
