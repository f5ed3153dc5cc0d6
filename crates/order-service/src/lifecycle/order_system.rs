use crate::clients::{OrderClient, ProductClient};
use tracing::{error, info};

/// The runtime orchestrator for the collections behind the service.
///
/// # Example
///
/// ```rust
/// use order_service::lifecycle::OrderSystem;
/// use order_service::model::ProductCreate;
///
/// #[tokio::main]
/// async fn main() -> Result<(), String> {
///     let system = OrderSystem::new(32);
///     let id = system
///         .product_client
///         .create_product(ProductCreate { name: "Mug".into(), price: 4.5, sizes: vec![] })
///         .await
///         .map_err(|e| e.to_string())?;
///     assert_eq!(id.to_string().len(), 24);
///     system.shutdown().await
/// }
/// ```
pub struct OrderSystem {
    /// Client for the Order collection
    pub order_client: OrderClient,

    /// Client for the Product collection
    pub product_client: ProductClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl OrderSystem {
    /// Creates both collections and spawns their actors.
    ///
    /// `buffer_size` is the mailbox capacity of each collection.
    pub fn new(buffer_size: usize) -> Self {
        let (product_actor, product_client) = crate::product_actor::new(buffer_size);
        let (order_actor, order_client) = crate::order_actor::new(buffer_size);

        let product_handle = tokio::spawn(product_actor.run(()));
        let order_handle = tokio::spawn(order_actor.run(()));

        Self {
            order_client: OrderClient::new(order_client),
            product_client: ProductClient::new(product_client),
            handles: vec![product_handle, order_handle],
        }
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Drops this system's clients and waits for every actor task. Returns an error if
    /// any actor task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.order_client);
        drop(self.product_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
