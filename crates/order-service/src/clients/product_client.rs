//! # Product Client
//!
//! Provides a high‑level API for interacting with the `Product` actor.
//! It wraps a `ResourceClient<Product>` and exposes domain‑specific methods, and is the
//! production [`InventoryStore`].
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};
use crate::ports::{InventoryStore, StoreError};
use crate::product_actor::{Decrement, ProductAction, ProductActionResult, ProductError};
use async_trait::async_trait;
use store_framework::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    /// Entity errors come back as the `ProductError` the hook raised.
    fn map_error(e: FrameworkError) -> Self::Error {
        if let Some(err) = e.entity_error::<ProductError>() {
            return err.clone();
        }
        match e {
            FrameworkError::NotFound(id) => ProductError::NotFound(id),
            other => ProductError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl ProductClient {
    #[instrument(skip(self))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<ProductId, ProductError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Catalog edit (name, price). Returns the stored product.
    #[instrument(skip(self))]
    pub async fn update_product(
        &self,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Current quantity of one bucket; `None` if the product has no such size.
    #[instrument(skip(self))]
    pub async fn check_stock(&self, id: ProductId, size: &str) -> Result<Option<u32>, ProductError> {
        debug!("Checking stock");
        let action = ProductAction::CheckStock { size: size.into() };
        match self.inner.perform_action(id, action).await {
            Ok(ProductActionResult::CheckStock(level)) => Ok(level),
            Ok(other) => Err(ProductError::ActorCommunicationError(format!(
                "unexpected result for CheckStock: {other:?}"
            ))),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Conditional decrement of one bucket.
    #[instrument(skip(self))]
    pub async fn decrement_size(
        &self,
        id: ProductId,
        size: &str,
        amount: u32,
    ) -> Result<Decrement, ProductError> {
        debug!("Decrementing stock");
        let action = ProductAction::DecrementSize {
            size: size.into(),
            amount,
        };
        match self.inner.perform_action(id, action).await {
            Ok(ProductActionResult::DecrementSize(outcome)) => Ok(outcome),
            Ok(other) => Err(ProductError::ActorCommunicationError(format!(
                "unexpected result for DecrementSize: {other:?}"
            ))),
            Err(e) => Err(Self::map_error(e)),
        }
    }
}

#[async_trait]
impl InventoryStore for ProductClient {
    async fn find_product(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        self.get(id)
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))
    }

    async fn decrement_size(
        &self,
        id: ProductId,
        size: &str,
        amount: u32,
    ) -> Result<Decrement, StoreError> {
        match ProductClient::decrement_size(self, id, size, amount).await {
            Ok(outcome) => Ok(outcome),
            // Deleted since it was read: nothing to take from.
            Err(ProductError::NotFound(_)) => Ok(Decrement::Insufficient { available: 0 }),
            Err(e) => Err(StoreError::Unavailable(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store_framework::mock::{create_mock_client, expect_action, expect_create};
    use store_framework::IdGenerator;

    fn product_id() -> ProductId {
        IdGenerator::new().next_id().into()
    }

    #[tokio::test]
    async fn test_check_stock_returns_bucket_level() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);
        let id = product_id();

        let check_task =
            tokio::spawn(async move { product_client.check_stock(id, "M").await });

        let (got_id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");

        assert_eq!(got_id, id);
        assert_eq!(action, ProductAction::CheckStock { size: "M".into() });

        responder
            .send(Ok(ProductActionResult::CheckStock(Some(42))))
            .unwrap();

        let result = check_task.await.unwrap();
        assert_eq!(result.unwrap(), Some(42));
    }

    #[tokio::test]
    async fn test_decrement_size_sends_conditional_action() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);
        let id = product_id();

        let task = tokio::spawn(async move { product_client.decrement_size(id, "S", 5).await });

        let (got_id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(got_id, id);
        assert_eq!(
            action,
            ProductAction::DecrementSize {
                size: "S".into(),
                amount: 5
            }
        );

        responder
            .send(Ok(ProductActionResult::DecrementSize(
                Decrement::Insufficient { available: 3 },
            )))
            .unwrap();

        let outcome = task.await.unwrap().unwrap();
        assert_eq!(outcome, Decrement::Insufficient { available: 3 });
    }

    #[tokio::test]
    async fn test_create_product_surfaces_validation_error() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let task = tokio::spawn(async move {
            product_client
                .create_product(ProductCreate {
                    name: "Bad".into(),
                    price: -1.0,
                    sizes: vec![],
                })
                .await
        });

        let (params, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(params.name, "Bad");
        responder
            .send(Err(FrameworkError::EntityError(Box::new(
                ProductError::Validation("price".into()),
            ))))
            .unwrap();

        let result = task.await.unwrap();
        assert_eq!(result, Err(ProductError::Validation("price".into())));
    }

    #[tokio::test]
    async fn test_inventory_decrement_on_vanished_product_reports_shortfall() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);
        let id = product_id();

        let task = tokio::spawn(async move {
            InventoryStore::decrement_size(&product_client, id, "S", 1).await
        });

        let (_, _, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        responder
            .send(Err(FrameworkError::NotFound(id.to_string())))
            .unwrap();

        let outcome = task.await.unwrap();
        assert_eq!(outcome, Ok(Decrement::Insufficient { available: 0 }));
    }

    #[tokio::test]
    async fn test_closed_actor_is_store_unavailable() {
        let (client, receiver) = create_mock_client::<Product>(1);
        drop(receiver);
        let product_client = ProductClient::new(client);

        let result = product_client.find_product(product_id()).await;
        assert!(matches!(result, Err(StoreError::Unavailable(_))));
    }
}
