//! Container wiring and router assembly.

use crate::config::CatalogConfig;
use crate::di::{Container, ContainerBuilder, HasContainer};
use crate::error::Result;
use crate::exception::http::HttpExceptionFilter;
use crate::interceptor::{InterceptorLayer, LoggingInterceptor};
use crate::module::Module;
use crate::modules::product::{ProductController, ProductModule, ProductRepository};
use axum::Router;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    container: Arc<Container>,
}

impl AppState {
    pub fn new(container: Arc<Container>) -> Self {
        Self { container }
    }
}

impl HasContainer for AppState {
    fn get_container(&self) -> &Container {
        &self.container
    }
}

/// Build a container around `repository` and register the product module.
///
/// The same `Arc` can be handed to lifecycle registration afterwards.
pub fn build_container<R>(config: CatalogConfig, repository: Arc<R>) -> Result<Container>
where
    R: ProductRepository + 'static,
{
    let mut container = ContainerBuilder::new()
        .register(config)
        .register_arc(repository)
        .bind::<dyn ProductRepository, R, _>(|r| r as Arc<dyn ProductRepository>)
        .build();

    ProductModule::register(&mut container)?;
    Ok(container)
}

/// All routes, wrapped in the request-logging interceptor.
pub fn build_router(container: Arc<Container>) -> Router {
    Router::new()
        .merge(ProductController::router::<AppState>())
        .layer(InterceptorLayer::new(
            vec![Arc::new(LoggingInterceptor)],
            Arc::new(HttpExceptionFilter),
        ))
        .with_state(AppState::new(container))
}
