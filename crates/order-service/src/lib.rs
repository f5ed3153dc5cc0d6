//! # Order Service
//!
//! A catalog-and-order service on top of the in-process document store from
//! `store_framework`.
//!
//! ## Core Components
//!
//! - **[model]**: documents ([`Product`](model::Product), [`Order`](model::Order)) and their payloads.
//! - **[product_actor] / [order_actor]**: the two collections and their entity rules.
//! - **[clients]**: typed wrappers ([`ProductClient`](clients::ProductClient),
//!   [`OrderClient`](clients::OrderClient)) that also implement the [ports].
//! - **[placement]**: the order placement engine.
//! - **[query] / [catalog]**: read paths with pagination, product CRUD.
//! - **[api]**: the axum router.
//! - **[config] / [lifecycle]**: startup settings and actor orchestration.

pub mod api;
pub mod catalog;
pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod placement;
pub mod ports;
pub mod product_actor;
pub mod query;
