use super::model::{PageQuery, ProductCreateRequest, ProductResponse};
use super::service::ProductService;
use crate::di::{HasContainer, Inject};
use crate::error::Result;
use axum::{
    Json, Router,
    extract::{
        Path, Query,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use uuid::Uuid;

/// HTTP routes for `/api/product`
pub struct ProductController;

impl ProductController {
    pub fn base_path() -> &'static str {
        "/api/product"
    }

    pub fn router<S>() -> Router<S>
    where
        S: HasContainer + Clone + Send + Sync + 'static,
    {
        Router::new()
            .route(
                Self::base_path(),
                get(Self::get_all_products).post(Self::add_products),
            )
            .route(
                &format!("{}/{{id}}", Self::base_path()),
                get(Self::get_product),
            )
    }

    async fn add_products(
        Inject(service): Inject<ProductService>,
        body: std::result::Result<Json<Vec<ProductCreateRequest>>, JsonRejection>,
    ) -> Result<StatusCode> {
        let Json(products) = body?;
        tracing::info!(count = products.len(), "Received request to add new products");

        service.add_products(products).await?;
        Ok(StatusCode::CREATED)
    }

    async fn get_product(
        Inject(service): Inject<ProductService>,
        id: std::result::Result<Path<Uuid>, PathRejection>,
    ) -> Result<Json<ProductResponse>> {
        let Path(id) = id?;
        let product = service.get_product_by_id(id).await?;
        tracing::info!(%id, "Returning the complete product information");
        Ok(Json(product))
    }

    async fn get_all_products(
        Inject(service): Inject<ProductService>,
        query: std::result::Result<Query<PageQuery>, QueryRejection>,
    ) -> Result<Response> {
        let Query(PageQuery {
            page_number,
            page_size,
        }) = query?;

        match service.get_all_products(page_number, page_size).await? {
            Some(products) => {
                tracing::info!(?page_number, ?page_size, count = products.len(), "Returning products");
                Ok(Json(products).into_response())
            }
            None => {
                tracing::info!("No product records found. Returning 0 records.");
                Ok(StatusCode::NO_CONTENT.into_response())
            }
        }
    }
}
