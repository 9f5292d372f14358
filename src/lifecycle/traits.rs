//! Lifecycle hook traits
//!
//! Hooks take `&self`: services registered in the container are shared
//! behind `Arc`, so any state a hook changes lives behind interior mutability.

use super::LifecycleError;
use async_trait::async_trait;

/// Called after the container is built, before the server accepts requests
///
/// Use this hook to verify database connectivity or preload fixtures.
#[async_trait]
pub trait OnModuleInit: Send + Sync {
    async fn on_module_init(&self) -> Result<(), LifecycleError>;
}

/// Called during graceful shutdown, after the server stopped accepting requests
///
/// Services are destroyed in **reverse order** of their registration.
#[async_trait]
pub trait OnModuleDestroy: Send + Sync {
    async fn on_module_destroy(&self) -> Result<(), LifecycleError>;
}
