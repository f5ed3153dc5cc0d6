//! Request handlers. Each one parses, delegates to a service and shapes the reply.

use super::error::ApiError;
use super::AppState;
use crate::model::{
    Order, OrderLineRequest, Product, ProductCreate, ProductFilter, ProductId, ProductSummary,
    ProductUpdate,
};
use crate::query::{Page, PageRequest};
use axum::extract::{Path, Query, State};
use axum::Json;
use http::StatusCode;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub id: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub user_id: String,
    pub items: Vec<OrderLineRequest>,
}

/// `GET /api/v1/products` query string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListProductsParams {
    pub name: Option<String>,
    pub size: Option<String>,
    #[serde(default)]
    pub limit: usize,
    #[serde(default)]
    pub offset: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockResponse {
    pub size: String,
    pub quantity: Option<u32>,
}

fn parse_product_id(raw: &str) -> Result<ProductId, ApiError> {
    raw.parse().map_err(|_| ApiError::InvalidId(raw.to_string()))
}

pub async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Welcome to the order service API",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub async fn create_product(
    State(state): State<AppState>,
    Json(params): Json<ProductCreate>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let id = state.catalog.create_product(params).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse { id: id.to_string() }),
    ))
}

pub async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<ListProductsParams>,
) -> Result<Json<Page<ProductSummary>>, ApiError> {
    // Empty query values (`?name=`) select everything.
    let filter = ProductFilter {
        name: params.name.filter(|n| !n.is_empty()),
        size: params.size.filter(|s| !s.is_empty()),
    };
    let page = state
        .catalog
        .list_products(filter, PageRequest::new(params.limit, params.offset))
        .await?;
    Ok(Json(page))
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(update): Json<ProductUpdate>,
) -> Result<Json<Product>, ApiError> {
    let id = parse_product_id(&id)?;
    let product = state.catalog.update_product(id, update).await?;
    Ok(Json(product))
}

pub async fn check_stock(
    State(state): State<AppState>,
    Path((id, size)): Path<(String, String)>,
) -> Result<Json<StockResponse>, ApiError> {
    let id = parse_product_id(&id)?;
    let quantity = state.catalog.check_stock(id, &size).await?;
    Ok(Json(StockResponse { size, quantity }))
}

pub async fn create_order(
    State(state): State<AppState>,
    Json(request): Json<CreateOrderRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let id = state
        .placement
        .place_order(&request.user_id, &request.items)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse { id: id.to_string() }),
    ))
}

pub async fn list_orders(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(request): Query<PageRequest>,
) -> Result<Json<Page<Order>>, ApiError> {
    let page = state.orders.list_orders(&user_id, request).await?;
    Ok(Json(page))
}
