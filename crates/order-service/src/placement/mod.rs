//! # Order Placement
//!
//! Turns a request (user + lines of product id and quantity) into one stored order.
//!
//! For every line, in request order:
//!
//! 1. parse the product id (`InvalidIdentifier`) and check the quantity (`InvalidQuantity`),
//! 2. load the product (`ProductNotFound`),
//! 3. if it has size buckets, pick the first bucket holding at least the quantity and
//!    decrement it conditionally (`InsufficientStock` if none can); a product without
//!    buckets is not stock-tracked and always passes,
//! 4. price the line from the stored product (`TotalOverflow` if the running total stops
//!    being a finite number, checked before step 3 takes any stock) and snapshot its id
//!    and name.
//!
//! Only when every line passed is the order written, with the summed total.
//!
//! ## Lost races
//!
//! The decrement is conditional, so a bucket emptied by a concurrent order after the scan
//! is reported back instead of going negative. The line then re-reads the product and
//! scans again, up to [`MAX_RESERVE_ATTEMPTS`] times.
//!
//! ## Known gap
//!
//! Decrements of earlier lines are not undone when a later line fails. Stock taken that
//! way stays taken.

pub mod error;

pub use error::*;

use crate::model::{
    OrderCreate, OrderId, OrderLineRecord, OrderLineRequest, Product, ProductId, ProductSnapshot,
};
use crate::ports::{InventoryStore, OrderRepository};
use crate::product_actor::Decrement;
use tracing::{debug, info, instrument, warn};

/// Scans of one line before a run of lost races is reported as `InsufficientStock`.
pub const MAX_RESERVE_ATTEMPTS: usize = 3;

/// The order placement engine.
#[derive(Clone)]
pub struct OrderPlacement<I, R> {
    inventory: I,
    orders: R,
}

impl<I: InventoryStore, R: OrderRepository> OrderPlacement<I, R> {
    pub fn new(inventory: I, orders: R) -> Self {
        Self { inventory, orders }
    }

    /// Places an order and returns its id.
    #[instrument(skip(self, lines), fields(lines = lines.len()))]
    pub async fn place_order(
        &self,
        user_id: &str,
        lines: &[OrderLineRequest],
    ) -> Result<OrderId, PlacementError> {
        if lines.is_empty() {
            warn!("Rejected empty order");
            return Err(PlacementError::EmptyOrder);
        }

        let mut items = Vec::with_capacity(lines.len());
        let mut total = 0.0;
        for line in lines {
            let (product, line_total) =
                self.reserve_line(line, total).await.inspect_err(|e| {
                    warn!(product_id = %line.product_id, error = %e, "Line failed, order aborted");
                })?;
            total = line_total;
            items.push(OrderLineRecord {
                product_details: ProductSnapshot {
                    id: product.id.to_string(),
                    name: product.name,
                },
                qty: line.qty,
            });
        }

        let order_id = self
            .orders
            .insert_order(OrderCreate {
                user_id: user_id.to_string(),
                items,
                total,
            })
            .await?;
        info!(%order_id, total, "Order placed");
        Ok(order_id)
    }

    /// Validates one line, prices it and takes its stock. Returns the product as read and
    /// `total_so_far` plus this line's price.
    ///
    /// The price is checked before any decrement so an unrepresentable total leaves the
    /// line's stock untouched.
    #[instrument(skip(self, line), fields(product_id = %line.product_id, qty = line.qty))]
    async fn reserve_line(
        &self,
        line: &OrderLineRequest,
        total_so_far: f64,
    ) -> Result<(Product, f64), PlacementError> {
        let id: ProductId = line
            .product_id
            .parse()
            .map_err(|_| PlacementError::InvalidIdentifier(line.product_id.clone()))?;
        if line.qty == 0 {
            return Err(PlacementError::InvalidQuantity {
                product_id: line.product_id.clone(),
            });
        }

        let mut name = String::new();
        for attempt in 1..=MAX_RESERVE_ATTEMPTS {
            let product = self
                .inventory
                .find_product(id)
                .await?
                .ok_or_else(|| PlacementError::ProductNotFound(line.product_id.clone()))?;

            let total = total_so_far + product.price * f64::from(line.qty);
            if !total.is_finite() {
                return Err(PlacementError::TotalOverflow {
                    product_id: line.product_id.clone(),
                });
            }

            if !product.is_stock_tracked() {
                debug!("Not stock-tracked, no decrement");
                return Ok((product, total));
            }

            let Some(bucket) = product.first_sufficient_size(line.qty) else {
                return Err(PlacementError::InsufficientStock {
                    product_id: line.product_id.clone(),
                    name: product.name,
                });
            };
            let size = bucket.size.clone();

            match self.inventory.decrement_size(id, &size, line.qty).await? {
                Decrement::Applied { remaining } => {
                    debug!(%size, remaining, "Stock reserved");
                    return Ok((product, total));
                }
                Decrement::Insufficient { available } => {
                    warn!(attempt, %size, available, "Bucket drained concurrently, rescanning");
                    name = product.name;
                }
            }
        }

        Err(PlacementError::InsufficientStock {
            product_id: line.product_id.clone(),
            name,
        })
    }
}
