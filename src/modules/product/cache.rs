use super::model::Product;
use moka::future::Cache;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheKey {
    Product(Uuid),
    /// Listing page, keyed by the literal query values.
    Page {
        number: Option<i32>,
        size: Option<i32>,
    },
}

#[derive(Debug, Clone)]
enum CachedEntry {
    Product(Arc<Product>),
    Page(Arc<Vec<Product>>),
}

/// Read-through cache for the product service.
///
/// Entries expire a fixed time after they were written; reads do not extend
/// their lifetime. The cache is never invalidated by writes.
#[derive(Clone)]
pub struct ProductCache {
    entries: Cache<CacheKey, CachedEntry>,
}

impl ProductCache {
    pub fn new(time_to_live: Duration, max_capacity: u64) -> Self {
        Self {
            entries: Cache::builder()
                .max_capacity(max_capacity)
                .time_to_live(time_to_live)
                .build(),
        }
    }

    pub async fn get_product(&self, id: Uuid) -> Option<Arc<Product>> {
        match self.entries.get(&CacheKey::Product(id)).await {
            Some(CachedEntry::Product(product)) => Some(product),
            _ => None,
        }
    }

    pub async fn put_product(&self, product: Product) {
        self.entries
            .insert(
                CacheKey::Product(product.id),
                CachedEntry::Product(Arc::new(product)),
            )
            .await;
    }

    pub async fn get_page(&self, number: Option<i32>, size: Option<i32>) -> Option<Arc<Vec<Product>>> {
        match self.entries.get(&CacheKey::Page { number, size }).await {
            Some(CachedEntry::Page(page)) => Some(page),
            _ => None,
        }
    }

    pub async fn put_page(&self, number: Option<i32>, size: Option<i32>, page: Vec<Product>) {
        self.entries
            .insert(CacheKey::Page { number, size }, CachedEntry::Page(Arc::new(page)))
            .await;
    }

    pub fn contains(&self, key: &CacheKey) -> bool {
        self.entries.contains_key(key)
    }
}
