use serde::Serialize;
use tracing::debug;

use crate::errors::ServiceError;
use crate::pagination::{self, PageRequest};
use crate::product::repository::ProductStore;
use models::product;

/// One page of the product listing plus the navigation metadata clients use
/// to render a pager. Serialized as `{totalCount, totalPages, products}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPage {
    pub total_count: u64,
    pub total_pages: u64,
    pub products: Vec<product::Model>,
}

/// List one page of products, newest ids first.
pub async fn list_products(store: &dyn ProductStore, req: PageRequest) -> Result<ProductPage, ServiceError> {
    let req = req.validate()?;
    let total_count = store.count().await?;
    let total_pages = pagination::total_pages(total_count, req.page_size);
    let products = store.page_by_id_desc(req.skip(), req.page_size).await?;
    debug!(total_count, total_pages, returned = products.len(), "assembled product page");
    Ok(ProductPage { total_count, total_pages, products })
}

/// Insert a product; the store assigns the id.
pub async fn create_product(store: &dyn ProductStore, name: &str, last_name: &str) -> Result<product::Model, ServiceError> {
    store.insert(name, last_name).await
}

/// Overwrite `name` and `last_name` of an existing product. The id and any
/// other submitted fields stay untouched.
pub async fn update_product(store: &dyn ProductStore, id: i32, name: &str, last_name: &str) -> Result<product::Model, ServiceError> {
    store
        .update(id, name, last_name)
        .await?
        .ok_or_else(|| ServiceError::not_found("product"))
}

/// Remove a product permanently, returning its last known state.
pub async fn delete_product(store: &dyn ProductStore, id: i32) -> Result<product::Model, ServiceError> {
    store
        .remove(id)
        .await?
        .ok_or_else(|| ServiceError::not_found("product"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::memory::MemoryProductStore;

    async fn seeded(n: usize) -> MemoryProductStore {
        let store = MemoryProductStore::new();
        for i in 1..=n {
            store
                .insert(&format!("name{}", i), &format!("last{}", i))
                .await
                .expect("seed insert");
        }
        store
    }

    #[tokio::test]
    async fn empty_store_lists_zero_pages() -> Result<(), anyhow::Error> {
        let store = MemoryProductStore::new();
        let page = list_products(&store, PageRequest::default()).await?;
        assert_eq!(page.total_count, 0);
        assert_eq!(page.total_pages, 0);
        assert!(page.products.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn total_pages_rounds_up_with_remainder() -> Result<(), anyhow::Error> {
        let store = seeded(25).await;
        let page = list_products(&store, PageRequest { page: 1, page_size: 10 }).await?;
        assert_eq!(page.total_count, 25);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.products.len(), 10);
        Ok(())
    }

    #[tokio::test]
    async fn pages_slice_newest_first() -> Result<(), anyhow::Error> {
        let store = seeded(25).await;
        let page1 = list_products(&store, PageRequest { page: 1, page_size: 10 }).await?;
        let ids: Vec<i32> = page1.products.iter().map(|p| p.id).collect();
        assert_eq!(ids, (16..=25).rev().collect::<Vec<_>>());

        let page3 = list_products(&store, PageRequest { page: 3, page_size: 10 }).await?;
        assert_eq!(page3.products.len(), 5);
        assert_eq!(page3.products.last().map(|p| p.id), Some(1));
        Ok(())
    }

    #[tokio::test]
    async fn page_past_the_end_is_empty() -> Result<(), anyhow::Error> {
        let store = seeded(3).await;
        let page = list_products(&store, PageRequest { page: 5, page_size: 10 }).await?;
        assert_eq!(page.total_count, 3);
        assert!(page.products.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn zero_page_inputs_are_validation_errors() {
        let store = MemoryProductStore::new();
        let err = list_products(&store, PageRequest { page: 0, page_size: 10 })
            .await
            .expect_err("page 0 must be rejected");
        assert!(matches!(err, ServiceError::Validation(_)));
        let err = list_products(&store, PageRequest { page: 1, page_size: 0 })
            .await
            .expect_err("pageSize 0 must be rejected");
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn create_then_list_includes_new_product() -> Result<(), anyhow::Error> {
        let store = seeded(2).await;
        let created = create_product(&store, "New", "Arrival").await?;
        let page = list_products(&store, PageRequest { page: 1, page_size: 10 }).await?;
        assert_eq!(page.products.first().map(|p| p.id), Some(created.id));
        Ok(())
    }

    #[tokio::test]
    async fn update_changes_only_mutable_fields() -> Result<(), anyhow::Error> {
        let store = seeded(1).await;
        let updated = update_product(&store, 1, "Renamed", "Fields").await?;
        assert_eq!(updated.id, 1);
        assert_eq!(updated.name, "Renamed");
        assert_eq!(updated.last_name, "Fields");
        Ok(())
    }

    #[tokio::test]
    async fn update_missing_id_is_not_found() {
        let store = MemoryProductStore::new();
        let err = update_product(&store, 99999, "x", "y").await.expect_err("missing id");
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn delete_returns_last_state_and_second_delete_fails() -> Result<(), anyhow::Error> {
        let store = seeded(2).await;
        let removed = delete_product(&store, 2).await?;
        assert_eq!(removed.id, 2);
        assert_eq!(removed.name, "name2");

        let page = list_products(&store, PageRequest::default()).await?;
        assert!(page.products.iter().all(|p| p.id != 2));

        let err = delete_product(&store, 2).await.expect_err("already deleted");
        assert!(err.is_not_found());
        Ok(())
    }
}
