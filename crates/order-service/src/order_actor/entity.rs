//! ActorEntity trait implementation for the Order document type.
//!
//! Orders are append-only: there is no update payload and no custom action, so both are
//! [`Infallible`].

use super::error::OrderError;
use crate::model::{Order, OrderCreate, OrderFilter, OrderId};
use async_trait::async_trait;
use std::convert::Infallible;
use store_framework::ActorEntity;

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = Infallible;
    type Action = Infallible;
    type ActionResult = ();
    type Filter = OrderFilter;
    type Context = ();
    type Error = OrderError;

    /// Rejects orders without lines and totals that are negative or not finite.
    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, Self::Error> {
        if params.items.is_empty() {
            return Err(OrderError::ValidationError(
                "an order needs at least one line".into(),
            ));
        }
        if !params.total.is_finite() || params.total < 0.0 {
            return Err(OrderError::ValidationError(format!(
                "invalid total {}",
                params.total
            )));
        }
        Ok(Self::new(id, params.user_id, params.items, params.total))
    }

    async fn on_update(&mut self, update: Infallible, _ctx: &()) -> Result<(), Self::Error> {
        match update {}
    }

    async fn handle_action(&mut self, action: Infallible, _ctx: &()) -> Result<(), Self::Error> {
        match action {}
    }

    fn matches(&self, filter: &OrderFilter) -> bool {
        filter.matches(self)
    }
}
