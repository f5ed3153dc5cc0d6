//! # Catalog
//!
//! Product CRUD as exposed to callers: create, list (without stock buckets), reprice and
//! stock inspection. Stock is only ever taken by [`placement`](crate::placement).

use crate::clients::ProductClient;
use crate::model::{
    Product, ProductCreate, ProductFilter, ProductId, ProductSummary, ProductUpdate,
};
use crate::product_actor::ProductError;
use crate::query::{Page, PageRequest};
use store_framework::ActorClient;
use tracing::{debug, info, instrument};

#[derive(Clone)]
pub struct Catalog {
    products: ProductClient,
}

impl Catalog {
    pub fn new(products: ProductClient) -> Self {
        Self { products }
    }

    #[instrument(skip(self, params), fields(name = %params.name))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<ProductId, ProductError> {
        let id = self.products.create_product(params).await?;
        info!(product_id = %id, "Product created");
        Ok(id)
    }

    /// Products matching `filter`, ascending by id.
    #[instrument(skip(self))]
    pub async fn list_products(
        &self,
        filter: ProductFilter,
        request: PageRequest,
    ) -> Result<Page<ProductSummary>, ProductError> {
        let found = self.products.find(filter, request.window()).await?;
        debug!(total = found.total, returned = found.items.len(), "Products listed");
        Ok(Page::from_found(found, request))
    }

    #[instrument(skip(self))]
    pub async fn update_product(
        &self,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, ProductError> {
        self.products.update_product(id, update).await
    }

    /// Quantity left in one bucket; `NotFound` if the product itself is missing.
    #[instrument(skip(self))]
    pub async fn check_stock(&self, id: ProductId, size: &str) -> Result<Option<u32>, ProductError> {
        self.products.check_stock(id, size).await
    }
}
