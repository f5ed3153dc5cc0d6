//! # Order Client
//!
//! Provides a high‑level API for interacting with the `Order` actor.
//! It wraps a `ResourceClient<Order>` and is the production [`OrderRepository`].
use crate::model::{Order, OrderCreate, OrderFilter, OrderId};
use crate::order_actor::OrderError;
use crate::ports::{OrderRepository, StoreError};
use async_trait::async_trait;
use store_framework::{ActorClient, FrameworkError, Found, ResourceClient, Window};
use tracing::{debug, instrument};

/// Client for interacting with the Order actor.
///
/// Order placement logic lives in [`OrderPlacement`](crate::placement::OrderPlacement);
/// this client only stores and reads finished orders.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_order(&self, params: OrderCreate) -> Result<OrderId, OrderError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.entity_error::<OrderError>() {
            Some(err) => err.clone(),
            None => OrderError::ActorCommunicationError(e.to_string()),
        }
    }
}

fn to_store_error(e: OrderError) -> StoreError {
    match e {
        OrderError::ValidationError(msg) => StoreError::Rejected(msg),
        OrderError::ActorCommunicationError(msg) => StoreError::Unavailable(msg),
    }
}

#[async_trait]
impl OrderRepository for OrderClient {
    async fn insert_order(&self, order: OrderCreate) -> Result<OrderId, StoreError> {
        self.create_order(order).await.map_err(to_store_error)
    }

    async fn find_orders_by_user(
        &self,
        user_id: &str,
        window: Window,
    ) -> Result<Found<Order>, StoreError> {
        self.find(OrderFilter::for_user(user_id), window)
            .await
            .map_err(to_store_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OrderLineRecord, ProductSnapshot};
    use store_framework::mock::{create_mock_client, expect_create, expect_find};

    #[tokio::test]
    async fn test_insert_order_forwards_payload() {
        let (client, mut receiver) = create_mock_client::<Order>(10);
        let order_client = OrderClient::new(client);
        let payload = OrderCreate {
            user_id: "u1".into(),
            items: vec![OrderLineRecord {
                product_details: ProductSnapshot {
                    id: "p".into(),
                    name: "Mug".into(),
                },
                qty: 1,
            }],
            total: 4.5,
        };
        let expected = payload.clone();

        let task = tokio::spawn(async move { order_client.insert_order(payload).await });

        let (params, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(params, expected);
        let id: OrderId = store_framework::IdGenerator::new().next_id().into();
        responder.send(Ok(id)).unwrap();

        assert_eq!(task.await.unwrap(), Ok(id));
    }

    #[tokio::test]
    async fn test_find_by_user_filters_on_user() {
        let (client, mut receiver) = create_mock_client::<Order>(10);
        let order_client = OrderClient::new(client);

        let task = tokio::spawn(async move {
            order_client
                .find_orders_by_user("u7", Window::new(2, 2))
                .await
        });

        let (filter, window, responder) = expect_find(&mut receiver)
            .await
            .expect("Expected Find request");
        assert_eq!(filter, OrderFilter::for_user("u7"));
        assert_eq!(window, Window::new(2, 2));
        responder.send(Ok(Found::empty())).unwrap();

        let found = task.await.unwrap().unwrap();
        assert_eq!(found.total, 0);
    }

    #[tokio::test]
    async fn test_rejected_insert_is_not_unavailable() {
        let (client, mut receiver) = create_mock_client::<Order>(10);
        let order_client = OrderClient::new(client);

        let task = tokio::spawn(async move {
            order_client
                .insert_order(OrderCreate {
                    user_id: "u1".into(),
                    items: vec![],
                    total: 0.0,
                })
                .await
        });

        let (_, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        responder
            .send(Err(FrameworkError::EntityError(Box::new(
                OrderError::ValidationError("empty".into()),
            ))))
            .unwrap();

        assert_eq!(task.await.unwrap(), Err(StoreError::Rejected("empty".into())));
    }
}
