use crate::di::Container;
use crate::error::CatalogError;
use axum::{extract::FromRequestParts, http::request::Parts};
use std::sync::Arc;

/// Axum extractor for dependency injection
///
/// Resolves a registered service from the router state's container.
///
/// ```ignore
/// async fn get_product(
///     Inject(service): Inject<ProductService>,
///     Path(id): Path<Uuid>,
/// ) -> Result<Json<ProductResponse>, CatalogError> {
///     Ok(Json(service.get_product_by_id(id).await?))
/// }
/// ```
pub struct Inject<T>(pub Arc<T>);

/// Trait that AppState must implement to provide the DI container
pub trait HasContainer {
    fn get_container(&self) -> &Container;
}

impl<S, T> FromRequestParts<S> for Inject<T>
where
    S: Send + Sync + HasContainer,
    T: 'static + Send + Sync,
{
    type Rejection = CatalogError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        state.get_container().resolve::<T>().map(Inject)
    }
}

impl<T> std::ops::Deref for Inject<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> Clone for Inject<T> {
    fn clone(&self) -> Self {
        Inject(Arc::clone(&self.0))
    }
}
