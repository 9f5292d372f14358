//! # Product Catalog
//!
//! A product catalog web service: bulk creation with duplicate-name
//! validation, lookup by id and a paginated listing, both served through a
//! read-through cache with absolute expiry.
//!
//! ## Layers
//!
//! - **HTTP**: [`modules::product::ProductController`] maps requests to
//!   service calls and [`CatalogError`] to status codes.
//! - **Service**: [`modules::product::ProductService`] owns validation,
//!   cache-aside reads and pagination.
//! - **Storage**: [`modules::product::ProductRepository`], implemented in
//!   memory and (with the `sea-orm-db` feature) on SeaORM.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use product_catalog::app::{build_container, build_router};
//! use product_catalog::config::CatalogConfig;
//! use product_catalog::modules::product::InMemoryProductRepository;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = CatalogConfig::default();
//!     let repository = Arc::new(InMemoryProductRepository::new());
//!     let container = build_container(config.clone(), repository)?;
//!
//!     let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
//!     axum::serve(listener, build_router(Arc::new(container))).await?;
//!     Ok(())
//! }
//! ```

pub mod app;
pub mod common;
pub mod config;
pub mod di;
pub mod error;
pub mod exception;
pub mod interceptor;
pub mod lifecycle;
pub mod module;
pub mod modules;

// Re-export core types
pub use di::{Container, ContainerBuilder, HasContainer, Inject, Injectable};
pub use error::{CatalogError, Result};
pub use module::Module;

/// Prelude module for convenient imports
///
/// ```
/// use product_catalog::prelude::*;
/// ```
pub mod prelude {
    pub use crate::app::{AppState, build_container, build_router};
    pub use crate::config::{CatalogConfig, ConfigService};
    pub use crate::di::{Container, ContainerBuilder, HasContainer, Inject, Injectable};
    pub use crate::error::{CatalogError, Result};
    pub use crate::lifecycle::{
        Application, ApplicationBuilder, LifecycleError, OnModuleDestroy, OnModuleInit,
        shutdown_signal,
    };
    pub use crate::module::Module;
    pub use crate::modules::product::{
        InMemoryProductRepository, Product, ProductCreateRequest, ProductRepository,
        ProductResponse, ProductService,
    };
    pub use async_trait::async_trait;
    pub use std::sync::Arc;
}
