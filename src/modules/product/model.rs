use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A persisted catalog entry.
///
/// `unit_price` is written to JSON as a number and accepted as either a
/// number or a string. The number goes through `f64`, so prices beyond about
/// 15 significant digits come back rounded; send those as strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub product_name: String,
    pub category_id: Uuid,
    pub supplier_id: Uuid,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub unit_price: Decimal,
    pub units_in_stock: i32,
    #[serde(default)]
    pub discontinued: bool,
}

impl Product {
    /// Discontinued products are hidden from every read path.
    pub fn is_active(&self) -> bool {
        !self.discontinued
    }
}

/// One entry of the bulk-create request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCreateRequest {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub product_name: String,
    pub category_id: Uuid,
    pub supplier_id: Uuid,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub unit_price: Decimal,
    pub units_in_stock: i32,
    #[serde(default)]
    pub discontinued: Option<bool>,
}

impl ProductCreateRequest {
    /// Turn the request into a product, generating an id when none was given.
    pub fn into_product(self) -> Product {
        Product {
            id: self.id.unwrap_or_else(Uuid::new_v4),
            product_name: self.product_name,
            category_id: self.category_id,
            supplier_id: self.supplier_id,
            unit_price: self.unit_price,
            units_in_stock: self.units_in_stock,
            discontinued: self.discontinued.unwrap_or(false),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductResponse {
    pub id: Uuid,
    pub product_name: String,
    pub category_id: Uuid,
    pub supplier_id: Uuid,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub unit_price: Decimal,
    pub units_in_stock: i32,
    pub discontinued: bool,
}

impl From<&Product> for ProductResponse {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            product_name: product.product_name.clone(),
            category_id: product.category_id,
            supplier_id: product.supplier_id,
            unit_price: product.unit_price,
            units_in_stock: product.units_in_stock,
            discontinued: product.discontinued,
        }
    }
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            product_name: product.product_name,
            category_id: product.category_id,
            supplier_id: product.supplier_id,
            unit_price: product.unit_price,
            units_in_stock: product.units_in_stock,
            discontinued: product.discontinued,
        }
    }
}

/// Query string of the listing endpoint: `?pageNumber=&pageSize=`
///
/// The all-lowercase and PascalCase spellings are accepted too.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    #[serde(alias = "pagenumber", alias = "PageNumber")]
    pub page_number: Option<i32>,
    #[serde(alias = "pagesize", alias = "PageSize")]
    pub page_size: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::str::FromStr;

    fn pixel() -> Product {
        Product {
            id: Uuid::parse_str("5784d3df-e2da-4be7-b6e7-4a17d51ec2ac").unwrap(),
            product_name: "Google Pixel 7 Pro (128 GB Storage, 12 GB RAM)".to_string(),
            category_id: Uuid::parse_str("63d14238-8362-4242-a4a9-ef2d9b1ce7e8").unwrap(),
            supplier_id: Uuid::parse_str("235f43c8-6202-47d1-9954-154f0607191b").unwrap(),
            unit_price: Decimal::from_str("80000.50").unwrap(),
            units_in_stock: 10000,
            discontinued: false,
        }
    }

    #[test]
    fn test_response_mapping_preserves_every_field() {
        let product = pixel();
        let response = ProductResponse::from(&product);

        assert_eq!(response.id, product.id);
        assert_eq!(response.product_name, product.product_name);
        assert_eq!(response.category_id, product.category_id);
        assert_eq!(response.supplier_id, product.supplier_id);
        assert_eq!(response.unit_price, product.unit_price);
        assert_eq!(response.units_in_stock, product.units_in_stock);
        assert_eq!(response.discontinued, product.discontinued);
        assert_eq!(ProductResponse::from(product), response);
    }

    #[test]
    fn test_response_json_shape() {
        let json = serde_json::to_value(ProductResponse::from(pixel())).unwrap();

        assert_eq!(json["id"], "5784d3df-e2da-4be7-b6e7-4a17d51ec2ac");
        assert_eq!(json["product_name"], "Google Pixel 7 Pro (128 GB Storage, 12 GB RAM)");
        assert_eq!(json["unit_price"], 80000.5);
        assert_eq!(json["units_in_stock"], 10000);
        assert_eq!(json["discontinued"], false);
    }

    #[test]
    fn test_create_request_defaults() {
        let request: ProductCreateRequest = serde_json::from_value(json!({
            "product_name": "Spigen Liquid Case",
            "category_id": "6258e123-bd24-441c-857f-cb2764ecf8f7",
            "supplier_id": "eadfe4c9-731d-4556-978c-2f9105a1550b",
            "unit_price": 19.99,
            "units_in_stock": 1000
        }))
        .unwrap();

        assert_eq!(request.id, None);
        assert_eq!(request.discontinued, None);
        assert_eq!(request.unit_price, Decimal::from_str("19.99").unwrap());

        let product = request.into_product();
        assert!(!product.discontinued);
        assert!(product.is_active());
    }

    #[test]
    fn test_into_product_keeps_given_id() {
        let id = Uuid::new_v4();
        let request = ProductCreateRequest {
            id: Some(id),
            product_name: "Samsung Galaxy Note 20".to_string(),
            category_id: Uuid::new_v4(),
            supplier_id: Uuid::new_v4(),
            unit_price: Decimal::new(120000, 0),
            units_in_stock: 0,
            discontinued: Some(true),
        };

        let product = request.into_product();
        assert_eq!(product.id, id);
        assert!(!product.is_active());
    }

    #[test]
    fn test_page_query_uses_camel_case() {
        let query: PageQuery =
            serde_json::from_value(json!({ "pageNumber": 2, "pageSize": 5 })).unwrap();
        assert_eq!(query.page_number, Some(2));
        assert_eq!(query.page_size, Some(5));
    }

    #[test]
    fn test_page_query_accepts_other_casings() {
        let query: PageQuery =
            serde_json::from_value(json!({ "PageNumber": 3, "pagesize": 4 })).unwrap();
        assert_eq!(query.page_number, Some(3));
        assert_eq!(query.page_size, Some(4));
    }

    #[test]
    fn test_unit_price_precision_over_json() {
        let mut product = pixel();
        product.unit_price = Decimal::from_str("19.99").unwrap();
        let json = serde_json::to_value(ProductResponse::from(&product)).unwrap();
        assert_eq!(json["unit_price"], json!(19.99));

        // Long prices survive only when sent as strings.
        let request: ProductCreateRequest = serde_json::from_value(json!({
            "product_name": "Gold bar",
            "category_id": Uuid::new_v4(),
            "supplier_id": Uuid::new_v4(),
            "unit_price": "12345678901234567.89",
            "units_in_stock": 1
        }))
        .unwrap();
        assert_eq!(
            request.unit_price,
            Decimal::from_str("12345678901234567.89").unwrap()
        );
    }
}
