//! # Listings & Pagination
//!
//! Offset pagination over id-ordered collections. Cursor fields are computed from the
//! request and the returned page, never stored.

use crate::model::Order;
use crate::ports::{OrderRepository, StoreError};
use serde::{Deserialize, Serialize};
use store_framework::{Found, Window};
use tracing::{debug, instrument};

/// `previous` value reported when the page is unbounded (`limit = 0`).
pub const UNBOUNDED_PREVIOUS: i64 = -10;

/// `?limit=&offset=`; both default to 0 and `limit = 0` means no limit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct PageRequest {
    #[serde(default)]
    pub limit: usize,
    #[serde(default)]
    pub offset: usize,
}

impl PageRequest {
    pub fn new(limit: usize, offset: usize) -> Self {
        Self { limit, offset }
    }

    pub fn window(&self) -> Window {
        Window::new(self.offset, self.limit)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    /// Offset of the following page, or 0 when this page came back empty.
    pub next: usize,
    pub limit: usize,
    /// Offset of the preceding page, clamped at 0; [`UNBOUNDED_PREVIOUS`] if `limit = 0`.
    pub previous: i64,
    pub total: usize,
}

impl PageInfo {
    pub fn compute(request: PageRequest, returned: usize, total: usize) -> Self {
        let next = if returned > 0 {
            request.offset + returned
        } else {
            0
        };
        let previous = if request.limit > 0 {
            i64::try_from(request.offset.saturating_sub(request.limit)).unwrap_or(i64::MAX)
        } else {
            UNBOUNDED_PREVIOUS
        };
        Self {
            next,
            limit: request.limit,
            previous,
            total,
        }
    }
}

/// One page of a listing, as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub page: PageInfo,
}

impl<T> Page<T> {
    pub fn from_found<U: Into<T>>(found: Found<U>, request: PageRequest) -> Self {
        let data: Vec<T> = found.items.into_iter().map(Into::into).collect();
        let page = PageInfo::compute(request, data.len(), found.total);
        Self { data, page }
    }
}

/// Read path over a user's order history.
#[derive(Clone)]
pub struct OrderQuery<R> {
    orders: R,
}

impl<R: OrderRepository> OrderQuery<R> {
    pub fn new(orders: R) -> Self {
        Self { orders }
    }

    /// A user's orders, oldest first.
    #[instrument(skip(self))]
    pub async fn list_orders(
        &self,
        user_id: &str,
        request: PageRequest,
    ) -> Result<Page<Order>, StoreError> {
        let found = self
            .orders
            .find_orders_by_user(user_id, request.window())
            .await?;
        debug!(total = found.total, returned = found.items.len(), "Orders listed");
        Ok(Page::from_found(found, request))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_info_bounded() {
        let info = PageInfo::compute(PageRequest::new(2, 4), 2, 7);
        assert_eq!(
            info,
            PageInfo {
                next: 6,
                limit: 2,
                previous: 2,
                total: 7
            }
        );
    }

    #[test]
    fn test_page_info_previous_clamps_at_zero() {
        let info = PageInfo::compute(PageRequest::new(5, 3), 3, 6);
        assert_eq!(info.previous, 0);
    }

    #[test]
    fn test_page_info_empty_page_resets_next() {
        let info = PageInfo::compute(PageRequest::new(2, 10), 0, 3);
        assert_eq!(info.next, 0);
        assert_eq!(info.previous, 8);
    }

    #[test]
    fn test_page_info_unbounded_uses_sentinel() {
        let info = PageInfo::compute(PageRequest::default(), 3, 3);
        assert_eq!(info.next, 3);
        assert_eq!(info.previous, UNBOUNDED_PREVIOUS);
    }

    #[test]
    fn test_page_request_defaults_from_empty_query() {
        let request: PageRequest = serde_json::from_str("{}").expect("Failed to parse");
        assert_eq!(request, PageRequest::default());
        assert_eq!(request.window(), Window::all());
    }
}
