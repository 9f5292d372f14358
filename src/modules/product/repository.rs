use super::model::Product;
use crate::lifecycle::{LifecycleError, OnModuleDestroy, OnModuleInit};
use async_trait::async_trait;
use std::collections::HashSet;
use std::path::PathBuf;
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Duplicate product id: {0}")]
    DuplicateId(Uuid),

    /// Names that already belong to an active product at insert time.
    #[error("Duplicate product names: {}", .0.join(", "))]
    DuplicateName(Vec<String>),

    #[error("Database error: {0}")]
    Database(String),
}

#[cfg(feature = "sea-orm-db")]
impl From<sea_orm::DbErr> for RepositoryError {
    fn from(err: sea_orm::DbErr) -> Self {
        match err {
            sea_orm::DbErr::Conn(_) | sea_orm::DbErr::ConnectionAcquire(_) => {
                RepositoryError::Unavailable(err.to_string())
            }
            other => RepositoryError::Database(other.to_string()),
        }
    }
}

/// Data access for products.
///
/// Every read only sees active (non-discontinued) rows.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Names from `names` that already belong to an active product.
    /// Matching is exact and case-sensitive.
    async fn existing_names(&self, names: &[String]) -> Result<HashSet<String>, RepositoryError>;

    /// Insert all products or none of them.
    ///
    /// Fails with `DuplicateName` when an active product took one of the
    /// names since `existing_names` was consulted.
    async fn bulk_insert(&self, products: Vec<Product>) -> Result<(), RepositoryError>;

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Product>, RepositoryError>;

    /// Active products in storage order.
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
}

/// Process-local product store; rows are kept in insertion order.
#[derive(Default)]
pub struct InMemoryProductRepository {
    rows: RwLock<Vec<Product>>,
    seed_file: Option<PathBuf>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            rows: RwLock::new(products),
            seed_file: None,
        }
    }

    /// Preload the JSON array at `path` when the module initializes.
    pub fn with_seed_file(mut self, path: Option<PathBuf>) -> Self {
        self.seed_file = path;
        self
    }

    /// Number of stored rows, discontinued ones included.
    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn existing_names(&self, names: &[String]) -> Result<HashSet<String>, RepositoryError> {
        let wanted: HashSet<&str> = names.iter().map(String::as_str).collect();
        let rows = self.rows.read().await;
        Ok(rows
            .iter()
            .filter(|p| p.is_active() && wanted.contains(p.product_name.as_str()))
            .map(|p| p.product_name.clone())
            .collect())
    }

    async fn bulk_insert(&self, products: Vec<Product>) -> Result<(), RepositoryError> {
        let mut rows = self.rows.write().await;

        // Validate the whole batch before touching the rows.
        let mut ids: HashSet<Uuid> = rows.iter().map(|p| p.id).collect();
        for product in &products {
            if !ids.insert(product.id) {
                return Err(RepositoryError::DuplicateId(product.id));
            }
        }

        let active: HashSet<&str> = rows
            .iter()
            .filter(|p| p.is_active())
            .map(|p| p.product_name.as_str())
            .collect();
        let taken: Vec<String> = products
            .iter()
            .filter(|p| p.is_active() && active.contains(p.product_name.as_str()))
            .map(|p| p.product_name.clone())
            .collect();
        if !taken.is_empty() {
            return Err(RepositoryError::DuplicateName(taken));
        }

        tracing::debug!(count = products.len(), "Inserting products");
        rows.extend(products);
        Ok(())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Product>, RepositoryError> {
        let rows = self.rows.read().await;
        Ok(rows.iter().find(|p| p.id == id && p.is_active()).cloned())
    }

    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let rows = self.rows.read().await;
        Ok(rows.iter().filter(|p| p.is_active()).cloned().collect())
    }
}

#[async_trait]
impl OnModuleInit for InMemoryProductRepository {
    async fn on_module_init(&self) -> Result<(), LifecycleError> {
        let Some(path) = &self.seed_file else {
            tracing::info!("In-memory product store ready (empty)");
            return Ok(());
        };

        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| LifecycleError::startup(format!("{}: {}", path.display(), e)))?;
        let products: Vec<Product> = serde_json::from_str(&raw)
            .map_err(|e| LifecycleError::startup(format!("{}: {}", path.display(), e)))?;
        let count = products.len();

        self.bulk_insert(products)
            .await
            .map_err(|e| LifecycleError::startup(e.to_string()))?;

        tracing::info!(count, seed_file = %path.display(), "In-memory product store seeded");
        Ok(())
    }
}

#[async_trait]
impl OnModuleDestroy for InMemoryProductRepository {
    async fn on_module_destroy(&self) -> Result<(), LifecycleError> {
        let mut rows = self.rows.write().await;
        tracing::info!(count = rows.len(), "Dropping in-memory product store");
        rows.clear();
        Ok(())
    }
}
