use crate::di::Container;
use crate::error::Result;

/// Trait for types that can be built from the DI container
///
/// # Example
/// ```
/// use product_catalog::di::{Container, Injectable};
/// use product_catalog::error::Result;
/// use product_catalog::modules::product::ProductRepository;
/// use std::sync::Arc;
///
/// struct StockReport {
///     repository: Arc<dyn ProductRepository>,
/// }
///
/// impl Injectable for StockReport {
///     fn inject(container: &Container) -> Result<Self> {
///         Ok(Self {
///             repository: container.resolve_trait::<dyn ProductRepository>()?,
///         })
///     }
/// }
/// ```
pub trait Injectable: Sized + Send + Sync + 'static {
    /// Create an instance by resolving dependencies from the container
    ///
    /// # Errors
    /// Returns an error if any required dependency is not found in the container.
    fn inject(container: &Container) -> Result<Self>;
}
