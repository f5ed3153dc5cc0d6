//! # HTTP API
//!
//! | Method | Path | |
//! |---|---|---|
//! | `GET` | `/` | welcome |
//! | `POST` | `/api/v1/products` | create product |
//! | `GET` | `/api/v1/products` | list products (`name`, `size`, `limit`, `offset`) |
//! | `PATCH` | `/api/v1/products/{id}` | rename / reprice |
//! | `GET` | `/api/v1/products/{id}/stock/{size}` | one bucket's quantity |
//! | `POST` | `/api/v1/orders` | place order |
//! | `GET` | `/api/v1/orders/{user_id}` | a user's orders (`limit`, `offset`) |

pub mod error;
pub mod handlers;

pub use error::{ApiError, ErrorBody};

use crate::catalog::Catalog;
use crate::clients::{OrderClient, ProductClient};
use crate::lifecycle::OrderSystem;
use crate::placement::OrderPlacement;
use crate::query::OrderQuery;
use axum::routing::{get, patch, post};
use axum::Router;

/// Services shared by all handlers. Cloning is cheap: everything inside is a channel handle.
#[derive(Clone)]
pub struct AppState {
    pub placement: OrderPlacement<ProductClient, OrderClient>,
    pub orders: OrderQuery<OrderClient>,
    pub catalog: Catalog,
}

impl AppState {
    pub fn new(product_client: ProductClient, order_client: OrderClient) -> Self {
        Self {
            placement: OrderPlacement::new(product_client.clone(), order_client.clone()),
            orders: OrderQuery::new(order_client),
            catalog: Catalog::new(product_client),
        }
    }

    pub fn from_system(system: &OrderSystem) -> Self {
        Self::new(system.product_client.clone(), system.order_client.clone())
    }
}

/// Create the combined router
pub fn router(state: AppState) -> Router {
    let products = Router::new()
        .route(
            "/products",
            post(handlers::create_product).get(handlers::list_products),
        )
        .route("/products/{id}", patch(handlers::update_product))
        .route("/products/{id}/stock/{size}", get(handlers::check_stock));

    let orders = Router::new()
        .route("/orders", post(handlers::create_order))
        .route("/orders/{user_id}", get(handlers::list_orders));

    Router::new()
        .route("/", get(handlers::root))
        .nest("/api/v1", products.merge(orders))
        .with_state(state)
}
