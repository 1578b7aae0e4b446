use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::errors::ServiceError;
use crate::product::repository::ProductStore;
use models::product;

/// In-memory `ProductStore` used by tests (and as a database-free backend
/// for local experiments). Ids grow monotonically and are never reused,
/// mirroring the database sequence.
#[derive(Default)]
pub struct MemoryProductStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    next_id: i32,
    rows: Vec<product::Model>,
}

impl MemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn count(&self) -> Result<u64, ServiceError> {
        Ok(self.inner.lock().await.rows.len() as u64)
    }

    async fn page_by_id_desc(&self, skip: u64, take: u64) -> Result<Vec<product::Model>, ServiceError> {
        let inner = self.inner.lock().await;
        let mut rows = inner.rows.clone();
        rows.sort_by(|a, b| b.id.cmp(&a.id));
        let skip = usize::try_from(skip).unwrap_or(usize::MAX);
        let take = usize::try_from(take).unwrap_or(usize::MAX);
        Ok(rows.into_iter().skip(skip).take(take).collect())
    }

    async fn find(&self, id: i32) -> Result<Option<product::Model>, ServiceError> {
        let inner = self.inner.lock().await;
        Ok(inner.rows.iter().find(|r| r.id == id).cloned())
    }

    async fn insert(&self, name: &str, last_name: &str) -> Result<product::Model, ServiceError> {
        let mut inner = self.inner.lock().await;
        inner.next_id += 1;
        let row = product::Model {
            id: inner.next_id,
            name: name.to_string(),
            last_name: last_name.to_string(),
        };
        inner.rows.push(row.clone());
        Ok(row)
    }

    async fn update(&self, id: i32, name: &str, last_name: &str) -> Result<Option<product::Model>, ServiceError> {
        let mut inner = self.inner.lock().await;
        match inner.rows.iter_mut().find(|r| r.id == id) {
            Some(row) => {
                row.name = name.to_string();
                row.last_name = last_name.to_string();
                Ok(Some(row.clone()))
            }
            None => Ok(None),
        }
    }

    async fn remove(&self, id: i32) -> Result<Option<product::Model>, ServiceError> {
        let mut inner = self.inner.lock().await;
        match inner.rows.iter().position(|r| r.id == id) {
            Some(idx) => Ok(Some(inner.rows.remove(idx))),
            None => Ok(None),
        }
    }
}
