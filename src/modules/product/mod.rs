//! Product catalog feature: model, storage, cache, service and routes.

use crate::config::CatalogConfig;
use crate::di::{Container, Injectable};
use crate::error::Result;
use crate::module::Module;

pub mod cache;
pub mod controller;
pub mod model;
pub mod repository;
#[cfg(feature = "sea-orm-db")]
pub mod sea_orm_repository;
pub mod service;

pub use cache::ProductCache;
pub use controller::ProductController;
pub use model::{PageQuery, Product, ProductCreateRequest, ProductResponse};
pub use repository::{InMemoryProductRepository, ProductRepository, RepositoryError};
#[cfg(feature = "sea-orm-db")]
pub use sea_orm_repository::SeaOrmProductRepository;
pub use service::ProductService;

/// Registers the product cache and service.
///
/// Expects `CatalogConfig` and a `dyn ProductRepository` binding to be in
/// the container already.
pub struct ProductModule;

impl Module for ProductModule {
    fn register(container: &mut Container) -> Result<()> {
        let config = container.resolve::<CatalogConfig>()?;
        container.register(ProductCache::new(
            config.cache_ttl,
            config.cache_max_capacity,
        ));

        let service = ProductService::inject(container)?;
        container.register(service);

        tracing::debug!(
            ttl = ?config.cache_ttl,
            capacity = config.cache_max_capacity,
            "ProductModule registered"
        );
        Ok(())
    }
}
