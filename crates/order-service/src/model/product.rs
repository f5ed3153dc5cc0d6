/// Represents a product in the catalog.
///
/// # Store Framework
/// This struct implements the [`ActorEntity`](store_framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](store_framework::ResourceActor).
///
/// See [`impl ActorEntity for Product`](#impl-ActorEntity-for-Product) for details on:
/// - Creation parameters ([`ProductCreate`])
/// - Update parameters ([`ProductUpdate`])
/// - Custom actions ([`ProductAction`](crate::product_actor::actions::ProductAction))
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use store_framework::{DocumentId, InvalidDocumentId};

/// Type-safe identifier for Products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub DocumentId);

impl From<DocumentId> for ProductId {
    fn from(id: DocumentId) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl FromStr for ProductId {
    type Err = InvalidDocumentId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// One independently tracked stock bucket of a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeStock {
    pub size: String,
    pub quantity: u32,
}

impl SizeStock {
    pub fn new(size: impl Into<String>, quantity: u32) -> Self {
        Self {
            size: size.into(),
            quantity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub sizes: Vec<SizeStock>,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (minted by the collection)
    /// * `name` - Product name
    /// * `price` - Unit price
    /// * `sizes` - Stock buckets in the order they are scanned
    pub fn new(id: ProductId, name: impl Into<String>, price: f64, sizes: Vec<SizeStock>) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            sizes,
        }
    }

    /// A product without buckets is not stock-tracked: any quantity can be ordered.
    pub fn is_stock_tracked(&self) -> bool {
        !self.sizes.is_empty()
    }

    /// The first bucket, in stored order, that can cover `quantity` on its own.
    pub fn first_sufficient_size(&self, quantity: u32) -> Option<&SizeStock> {
        self.sizes.iter().find(|s| s.quantity >= quantity)
    }

    pub fn size(&self, label: &str) -> Option<&SizeStock> {
        self.sizes.iter().find(|s| s.size == label)
    }

    pub fn size_mut(&mut self, label: &str) -> Option<&mut SizeStock> {
        self.sizes.iter_mut().find(|s| s.size == label)
    }
}

/// Payload for creating a product. `sizes` may be omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub sizes: Vec<SizeStock>,
}

/// Catalog edits. Stock is only changed through
/// [`ProductAction::DecrementSize`](crate::product_actor::ProductAction::DecrementSize).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub price: Option<f64>,
}

/// Selection for product listings. Empty fields select everything.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProductFilter {
    /// Case-insensitive substring of the product name.
    pub name: Option<String>,
    /// Exact label of a size bucket the product must carry.
    pub size: Option<String>,
}

impl ProductFilter {
    pub fn matches(&self, product: &Product) -> bool {
        let name_ok = self.name.as_deref().map_or(true, |needle| {
            product
                .name
                .to_lowercase()
                .contains(&needle.to_lowercase())
        });
        let size_ok = self
            .size
            .as_deref()
            .map_or(true, |label| product.size(label).is_some());
        name_ok && size_ok
    }
}

/// Listing shape of a product: stock buckets are left out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSummary {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
}

impl From<Product> for ProductSummary {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store_framework::IdGenerator;

    fn product(name: &str, sizes: Vec<SizeStock>) -> Product {
        Product::new(IdGenerator::new().next_id().into(), name, 10.0, sizes)
    }

    #[test]
    fn test_first_sufficient_size_keeps_stored_order() {
        let p = product(
            "Tee",
            vec![
                SizeStock::new("S", 2),
                SizeStock::new("M", 0),
                SizeStock::new("L", 5),
            ],
        );
        assert_eq!(p.first_sufficient_size(2).map(|s| s.size.as_str()), Some("S"));
        assert_eq!(p.first_sufficient_size(3).map(|s| s.size.as_str()), Some("L"));
        assert!(p.first_sufficient_size(6).is_none());
    }

    #[test]
    fn test_filter_name_is_case_insensitive_substring() {
        let p = product("Blue Denim Jacket", vec![SizeStock::new("M", 1)]);
        let by_name = |n: &str| ProductFilter {
            name: Some(n.into()),
            size: None,
        };
        assert!(by_name("denim").matches(&p));
        assert!(by_name("JACKET").matches(&p));
        assert!(!by_name("shirt").matches(&p));
        assert!(ProductFilter::default().matches(&p));
    }

    #[test]
    fn test_filter_size_requires_exact_label() {
        let p = product("Tee", vec![SizeStock::new("M", 0)]);
        let by_size = |s: &str| ProductFilter {
            name: None,
            size: Some(s.into()),
        };
        assert!(by_size("M").matches(&p));
        assert!(!by_size("m").matches(&p));
        assert!(!by_size("L").matches(&p));
    }

    #[test]
    fn test_create_payload_defaults_sizes() {
        let create: ProductCreate =
            serde_json::from_str(r#"{"name":"Mug","price":4.5}"#).expect("Failed to parse");
        assert!(create.sizes.is_empty());
    }
}
