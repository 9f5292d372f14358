use super::cache::ProductCache;
use super::model::{Product, ProductCreateRequest, ProductResponse};
use super::repository::{ProductRepository, RepositoryError};
use crate::di::{Container, Injectable};
use crate::error::{CatalogError, Result};
use rust_decimal::Decimal;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use uuid::Uuid;

/// Business rules for the catalog: name validation, cache-aside reads and
/// pagination.
///
/// Concurrent misses on the same key may each query the repository and each
/// write the cache; the writes are idempotent so the race is tolerated.
pub struct ProductService {
    repository: Arc<dyn ProductRepository>,
    cache: Arc<ProductCache>,
}

impl Injectable for ProductService {
    fn inject(container: &Container) -> Result<Self> {
        Ok(Self {
            repository: container.resolve_trait::<dyn ProductRepository>()?,
            cache: container.resolve::<ProductCache>()?,
        })
    }
}

impl ProductService {
    pub fn new(repository: Arc<dyn ProductRepository>, cache: Arc<ProductCache>) -> Self {
        Self { repository, cache }
    }

    /// Validate and persist a batch of new products.
    ///
    /// # Errors
    /// - `BadRequest` for an empty batch, a blank name or a negative price/stock
    /// - `Conflict` when a name repeats inside the batch or already belongs to
    ///   an active product
    ///
    /// Nothing is written on any failure path.
    pub async fn add_products(&self, products: Vec<ProductCreateRequest>) -> Result<()> {
        tracing::debug!(count = products.len(), "Received request to add products");

        validate_requests(&products)?;

        let duplicates = duplicate_names(&products);
        if !duplicates.is_empty() {
            let message = format!(
                "The provided data contains duplicate product names: {}",
                duplicates.join(", ")
            );
            tracing::error!("{}", message);
            return Err(CatalogError::Conflict(message));
        }

        let names: Vec<String> = products.iter().map(|p| p.product_name.clone()).collect();
        let existing = self.repository.existing_names(&names).await?;
        if !existing.is_empty() {
            // Report in request order so the message is stable.
            let existing: Vec<&str> = names
                .iter()
                .filter(|name| existing.contains(*name))
                .map(String::as_str)
                .collect();
            return Err(names_taken(&existing));
        }

        let products: Vec<Product> = products
            .into_iter()
            .map(ProductCreateRequest::into_product)
            .collect();
        let count = products.len();
        // A concurrent add may have claimed a name since the check above.
        match self.repository.bulk_insert(products).await {
            Ok(()) => {}
            Err(RepositoryError::DuplicateName(taken)) => {
                let taken: Vec<&str> = taken.iter().map(String::as_str).collect();
                return Err(names_taken(&taken));
            }
            Err(e) => return Err(e.into()),
        }

        tracing::info!(count, "Successfully added product(s) to the database");
        Ok(())
    }

    /// Fetch one active product, consulting the cache first.
    ///
    /// # Errors
    /// `NotFound` when no active product has this id.
    pub async fn get_product_by_id(&self, id: Uuid) -> Result<ProductResponse> {
        tracing::debug!(%id, "Received request to get product information");

        if let Some(product) = self.cache.get_product(id).await {
            tracing::debug!(%id, "Returning the product information from cache");
            return Ok(ProductResponse::from(product.as_ref()));
        }

        let Some(product) = self.repository.get_by_id(id).await? else {
            let message = format!("No product has been found for the ID: {id}");
            tracing::error!("{}", message);
            return Err(CatalogError::NotFound(message));
        };

        let response = ProductResponse::from(&product);
        self.cache.put_product(product).await;
        Ok(response)
    }

    /// List active products, optionally paginated.
    ///
    /// Returns `Ok(None)` when there is nothing to show: the store is empty,
    /// the requested page lies past the end, or `page_number`/`page_size` is
    /// below 1. Only paginated results are cached.
    pub async fn get_all_products(
        &self,
        page_number: Option<i32>,
        page_size: Option<i32>,
    ) -> Result<Option<Vec<ProductResponse>>> {
        tracing::info!(?page_number, ?page_size, "Received request to get all products");

        if let Some(page) = self.cache.get_page(page_number, page_size).await {
            tracing::debug!(?page_number, ?page_size, "Returning the products from cache");
            return Ok(Some(page.iter().map(ProductResponse::from).collect()));
        }

        let products = self.repository.get_all().await?;
        if products.is_empty() {
            tracing::debug!("No products have been found in the database");
            return Ok(None);
        }

        let (Some(number), Some(size)) = (page_number, page_size) else {
            return Ok(Some(products.into_iter().map(ProductResponse::from).collect()));
        };

        let page = paginate(products, number, size);
        if page.is_empty() {
            tracing::debug!(number, size, "No product records for the requested page");
            return Ok(None);
        }

        let response = page.iter().map(ProductResponse::from).collect();
        self.cache.put_page(page_number, page_size, page).await;
        Ok(Some(response))
    }
}

fn names_taken(names: &[&str]) -> CatalogError {
    let message = format!("Products with names '{}' already exist", names.join(", "));
    tracing::error!("{}", message);
    CatalogError::Conflict(message)
}

fn validate_requests(products: &[ProductCreateRequest]) -> Result<()> {
    if products.is_empty() {
        return Err(CatalogError::BadRequest(
            "The request must contain at least one product".to_string(),
        ));
    }

    for product in products {
        if product.product_name.trim().is_empty() {
            return Err(CatalogError::BadRequest(
                "product_name must not be empty".to_string(),
            ));
        }
        if product.unit_price < Decimal::ZERO {
            return Err(CatalogError::BadRequest(format!(
                "unit_price of '{}' must not be negative",
                product.product_name
            )));
        }
        if product.units_in_stock < 0 {
            return Err(CatalogError::BadRequest(format!(
                "units_in_stock of '{}' must not be negative",
                product.product_name
            )));
        }
    }
    Ok(())
}

/// Names occurring more than once, in order of first appearance.
fn duplicate_names(products: &[ProductCreateRequest]) -> Vec<&str> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for product in products {
        *counts.entry(product.product_name.as_str()).or_default() += 1;
    }

    let mut reported = HashSet::new();
    products
        .iter()
        .map(|p| p.product_name.as_str())
        .filter(|name| counts[name] > 1 && reported.insert(*name))
        .collect()
}

/// 1-based page slice. Non-positive arguments yield an empty page.
fn paginate(products: Vec<Product>, page_number: i32, page_size: i32) -> Vec<Product> {
    if page_number < 1 || page_size < 1 {
        return Vec::new();
    }
    let size = page_size as usize;
    let skip = (page_number as usize - 1).saturating_mul(size);
    products.into_iter().skip(skip).take(size).collect()
}
