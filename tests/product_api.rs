use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
    response::Response,
};
use product_catalog::common::ErrorResponse;
use product_catalog::prelude::*;
use rust_decimal::Decimal;
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

const PIXEL_ID: &str = "5784d3df-e2da-4be7-b6e7-4a17d51ec2ac";
const CASE_ID: &str = "330b834a-ce6a-4db4-86f6-9f6ae94b8280";
const NOTE_ID: &str = "120af4f8-69f8-4a41-9c3e-dd2357b4baee";

fn product(id: &str, name: &str, price: i64, stock: i32, discontinued: bool) -> Product {
    Product {
        id: Uuid::parse_str(id).unwrap(),
        product_name: name.to_string(),
        category_id: Uuid::parse_str("63d14238-8362-4242-a4a9-ef2d9b1ce7e8").unwrap(),
        supplier_id: Uuid::parse_str("235f43c8-6202-47d1-9954-154f0607191b").unwrap(),
        unit_price: Decimal::new(price, 0),
        units_in_stock: stock,
        discontinued,
    }
}

fn seeded_products() -> Vec<Product> {
    vec![
        product(PIXEL_ID, "Google Pixel 7 Pro (128 GB Storage, 12 GB RAM)", 80000, 10000, false),
        product(CASE_ID, "Spigen Liquid Case for Google Pixel 7 Pro", 1000, 1000, false),
        product(NOTE_ID, "Samsung Galaxy Note 20", 120000, 0, true),
    ]
}

fn app_with(products: Vec<Product>) -> Router {
    let repository = Arc::new(InMemoryProductRepository::with_products(products));
    let container = build_container(CatalogConfig::default(), repository).unwrap();
    build_router(Arc::new(container))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_bytes(response: Response) -> Vec<u8> {
    to_bytes(response.into_body(), usize::MAX).await.unwrap().to_vec()
}

async fn body_json<T: serde::de::DeserializeOwned>(response: Response) -> T {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

fn new_product(name: &str) -> Value {
    json!({
        "product_name": name,
        "category_id": "6258e123-bd24-441c-857f-cb2764ecf8f7",
        "supplier_id": "eadfe4c9-731d-4556-978c-2f9105a1550b",
        "unit_price": 999.5,
        "units_in_stock": 12
    })
}

#[tokio::test]
async fn add_products_with_valid_data_returns_created() {
    let app = app_with(seeded_products());
    let given_id = Uuid::new_v4();
    let mut with_id = new_product("Samsung Galaxy S23");
    with_id["id"] = json!(given_id);

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/product",
            &json!([with_id, new_product("Apple iPhone 14")]),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert!(body_bytes(response).await.is_empty());

    let response = app
        .clone()
        .oneshot(get(&format!("/api/product/{given_id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let created: ProductResponse = body_json(response).await;
    assert_eq!(created.product_name, "Samsung Galaxy S23");
    assert_eq!(created.unit_price, Decimal::new(9995, 1));
    assert!(!created.discontinued);

    let all: Vec<ProductResponse> = body_json(app.oneshot(get("/api/product")).await.unwrap()).await;
    assert_eq!(all.len(), 4);
}

#[tokio::test]
async fn add_products_with_duplicate_names_in_body_returns_conflict() {
    let app = app_with(seeded_products());

    let response = app
        .oneshot(post_json(
            "/api/product",
            &json!([new_product("Samsung Galaxy S23"), new_product("Samsung Galaxy S23")]),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let error: ErrorResponse = body_json(response).await;
    assert_eq!(error.status_code, 409);
    assert_eq!(error.message, "Conflict");
    assert_eq!(
        error.description,
        "The provided data contains duplicate product names: Samsung Galaxy S23"
    );
}

#[tokio::test]
async fn add_products_with_existing_names_returns_conflict() {
    let app = app_with(seeded_products());

    let response = app
        .oneshot(post_json(
            "/api/product",
            &json!([
                new_product("Google Pixel 7 Pro (128 GB Storage, 12 GB RAM)"),
                new_product("Spigen Liquid Case for Google Pixel 7 Pro"),
            ]),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let error: ErrorResponse = body_json(response).await;
    assert_eq!(
        error.description,
        "Products with names 'Google Pixel 7 Pro (128 GB Storage, 12 GB RAM), Spigen Liquid Case for Google Pixel 7 Pro' already exist"
    );
}

#[tokio::test]
async fn add_products_with_malformed_body_returns_bad_request() {
    let app = app_with(vec![]);

    let response = app
        .clone()
        .oneshot(post_json("/api/product", &json!([{ "product_name": "No ids" }])))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: ErrorResponse = body_json(response).await;
    assert_eq!(error.status_code, 400);
    assert_eq!(error.message, "Bad Request");

    let response = app
        .oneshot(post_json("/api/product", &json!([])))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn get_product_returns_complete_information() {
    let app = app_with(seeded_products());

    let response = app
        .oneshot(get(&format!("/api/product/{PIXEL_ID}")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = body_json(response).await;
    assert_eq!(
        body,
        json!({
            "id": PIXEL_ID,
            "product_name": "Google Pixel 7 Pro (128 GB Storage, 12 GB RAM)",
            "category_id": "63d14238-8362-4242-a4a9-ef2d9b1ce7e8",
            "supplier_id": "235f43c8-6202-47d1-9954-154f0607191b",
            "unit_price": 80000.0,
            "units_in_stock": 10000,
            "discontinued": false
        })
    );
}

#[tokio::test]
async fn get_product_unknown_or_discontinued_returns_not_found() {
    let app = app_with(seeded_products());

    for id in ["9784d3df-e2da-4be7-b6e7-4a17d51ec2ac", NOTE_ID] {
        let response = app
            .clone()
            .oneshot(get(&format!("/api/product/{id}")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let error: ErrorResponse = body_json(response).await;
        assert_eq!(error.message, "Not found");
        assert_eq!(
            error.description,
            format!("No product has been found for the ID: {id}")
        );
    }
}

#[tokio::test]
async fn get_product_with_malformed_id_returns_bad_request() {
    let app = app_with(seeded_products());

    let response = app.oneshot(get("/api/product/not-a-uuid")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn get_all_products_paginates() {
    let app = app_with(seeded_products());

    let response = app
        .clone()
        .oneshot(get("/api/product?pageNumber=1&pageSize=1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let page: Vec<ProductResponse> = body_json(response).await;
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].id, Uuid::parse_str(PIXEL_ID).unwrap());
    assert_eq!(page[0].units_in_stock, 10000);

    let response = app
        .oneshot(get("/api/product?pageNumber=2&pageSize=2"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(response).await.is_empty());
}

#[tokio::test]
async fn get_all_products_without_paging_returns_active_records() {
    let app = app_with(seeded_products());

    let response = app.oneshot(get("/api/product")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let all: Vec<ProductResponse> = body_json(response).await;
    let ids: Vec<Uuid> = all.iter().map(|p| p.id).collect();
    assert_eq!(
        ids,
        vec![
            Uuid::parse_str(PIXEL_ID).unwrap(),
            Uuid::parse_str(CASE_ID).unwrap()
        ]
    );
}

#[tokio::test]
async fn get_all_products_on_empty_store_returns_no_content() {
    let app = app_with(vec![]);

    let response = app.oneshot(get("/api/product")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn get_all_products_with_invalid_query_returns_bad_request() {
    let app = app_with(seeded_products());

    let response = app
        .oneshot(get("/api/product?pageNumber=first&pageSize=1"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn get_all_products_accepts_query_key_casings() {
    let app = app_with(seeded_products());

    let response = app
        .oneshot(get("/api/product?PageNumber=2&pagesize=1"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let page: Vec<ProductResponse> = body_json(response).await;
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].id, Uuid::parse_str(CASE_ID).unwrap());
}
