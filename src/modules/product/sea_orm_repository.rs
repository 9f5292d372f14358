//! SQL product store backed by SeaORM.

use super::model::Product;
use super::repository::{ProductRepository, RepositoryError};
use crate::lifecycle::{LifecycleError, OnModuleDestroy, OnModuleInit};
use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, Database, DatabaseConnection, EntityTrait, QueryFilter, QuerySelect,
    TransactionTrait,
};
use std::collections::HashSet;
use uuid::Uuid;

pub mod product_entity {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
    #[sea_orm(table_name = "product")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: Uuid,
        pub product_name: String,
        pub category_id: Uuid,
        pub supplier_id: Uuid,
        pub unit_price: Decimal,
        pub units_in_stock: i32,
        pub discontinued: bool,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

impl From<product_entity::Model> for Product {
    fn from(model: product_entity::Model) -> Self {
        Self {
            id: model.id,
            product_name: model.product_name,
            category_id: model.category_id,
            supplier_id: model.supplier_id,
            unit_price: model.unit_price,
            units_in_stock: model.units_in_stock,
            discontinued: model.discontinued,
        }
    }
}

impl From<Product> for product_entity::Model {
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

/// Product store on a SeaORM connection pool.
///
/// Name matching follows the database collation.
pub struct SeaOrmProductRepository {
    conn: DatabaseConnection,
}

impl SeaOrmProductRepository {
    pub async fn connect(database_url: &str) -> Result<Self, RepositoryError> {
        let conn = Database::connect(database_url).await?;
        Ok(Self { conn })
    }

    pub fn from_connection(conn: DatabaseConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl ProductRepository for SeaOrmProductRepository {
    async fn existing_names(&self, names: &[String]) -> Result<HashSet<String>, RepositoryError> {
        let rows: Vec<String> = product_entity::Entity::find()
            .select_only()
            .column(product_entity::Column::ProductName)
            .filter(product_entity::Column::ProductName.is_in(names.iter().cloned()))
            .filter(product_entity::Column::Discontinued.eq(false))
            .into_tuple()
            .all(&self.conn)
            .await?;
        Ok(rows.into_iter().collect())
    }

    async fn bulk_insert(&self, products: Vec<Product>) -> Result<(), RepositoryError> {
        let names: Vec<String> = products
            .iter()
            .filter(|p| p.is_active())
            .map(|p| p.product_name.clone())
            .collect();
        let models = products
            .into_iter()
            .map(|p| product_entity::ActiveModel::from(product_entity::Model::from(p)));

        // Dropping `txn` without commit rolls the whole batch back.
        let txn = self.conn.begin().await?;

        // Strict uniqueness under concurrent writers needs a partial unique
        // index on active names; this narrows the window to the transaction.
        let taken: Vec<String> = product_entity::Entity::find()
            .select_only()
            .column(product_entity::Column::ProductName)
            .filter(product_entity::Column::ProductName.is_in(names))
            .filter(product_entity::Column::Discontinued.eq(false))
            .into_tuple()
            .all(&txn)
            .await?;
        if !taken.is_empty() {
            return Err(RepositoryError::DuplicateName(taken));
        }

        product_entity::Entity::insert_many(models)
            .exec_without_returning(&txn)
            .await?;
        txn.commit().await?;
        Ok(())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Product>, RepositoryError> {
        let model = product_entity::Entity::find_by_id(id)
            .filter(product_entity::Column::Discontinued.eq(false))
            .one(&self.conn)
            .await?;
        Ok(model.map(Product::from))
    }

    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let models = product_entity::Entity::find()
            .filter(product_entity::Column::Discontinued.eq(false))
            .all(&self.conn)
            .await?;
        Ok(models.into_iter().map(Product::from).collect())
    }
}

#[async_trait]
impl OnModuleInit for SeaOrmProductRepository {
    async fn on_module_init(&self) -> Result<(), LifecycleError> {
        self.conn
            .ping()
            .await
            .map_err(|e| LifecycleError::startup(format!("Database unreachable: {}", e)))?;
        tracing::info!("Database connection verified");
        Ok(())
    }
}

#[async_trait]
impl OnModuleDestroy for SeaOrmProductRepository {
    async fn on_module_destroy(&self) -> Result<(), LifecycleError> {
        tracing::info!("Closing database connection pool...");
        self.conn
            .clone()
            .close()
            .await
            .map_err(|e| LifecycleError::teardown(e.to_string()))
    }
}
