//! ActorEntity trait implementation for the Product document type.
//!
//! Catalog rules are enforced here, at the point a payload becomes a stored document:
//! prices must be finite and non-negative, and size labels must be unique within a product.

use super::actions::{Decrement, ProductAction, ProductActionResult};
use super::error::ProductError;
use crate::model::{Product, ProductCreate, ProductFilter, ProductId, ProductUpdate, SizeStock};
use async_trait::async_trait;
use std::collections::HashSet;
use store_framework::ActorEntity;

fn validate_price(price: f64) -> Result<(), ProductError> {
    if price.is_finite() && price >= 0.0 {
        Ok(())
    } else {
        Err(ProductError::Validation(format!(
            "price must be a non-negative number, got {price}"
        )))
    }
}

fn validate_sizes(sizes: &[SizeStock]) -> Result<(), ProductError> {
    let mut seen = HashSet::new();
    for stock in sizes {
        if !seen.insert(stock.size.as_str()) {
            return Err(ProductError::Validation(format!(
                "duplicate size label '{}'",
                stock.size
            )));
        }
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;
    type Filter = ProductFilter;
    type Context = ();
    type Error = ProductError;

    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, Self::Error> {
        validate_price(params.price)?;
        validate_sizes(&params.sizes)?;
        Ok(Self::new(id, params.name, params.price, params.sizes))
    }

    /// Handles catalog edits.
    ///
    /// # Fields Updated
    /// - `name`
    /// - `price`: validated like on create; existing orders keep the total they were placed with
    async fn on_update(&mut self, update: ProductUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(price) = update.price {
            validate_price(price)?;
            self.price = price;
        }
        if let Some(name) = update.name {
            self.name = name;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: ProductAction,
        _ctx: &(),
    ) -> Result<ProductActionResult, Self::Error> {
        match action {
            ProductAction::CheckStock { size } => Ok(ProductActionResult::CheckStock(
                self.size(&size).map(|s| s.quantity),
            )),
            ProductAction::DecrementSize { size, amount } => {
                let outcome = match self.size_mut(&size) {
                    Some(stock) if stock.quantity >= amount => {
                        stock.quantity -= amount;
                        Decrement::Applied {
                            remaining: stock.quantity,
                        }
                    }
                    Some(stock) => Decrement::Insufficient {
                        available: stock.quantity,
                    },
                    None => Decrement::Insufficient { available: 0 },
                };
                Ok(ProductActionResult::DecrementSize(outcome))
            }
        }
    }

    fn matches(&self, filter: &ProductFilter) -> bool {
        filter.matches(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store_framework::IdGenerator;

    fn create(price: f64, sizes: Vec<SizeStock>) -> Result<Product, ProductError> {
        Product::from_create_params(
            IdGenerator::new().next_id().into(),
            ProductCreate {
                name: "Tee".into(),
                price,
                sizes,
            },
        )
    }

    fn decrement(size: &str, amount: u32) -> ProductAction {
        ProductAction::DecrementSize {
            size: size.into(),
            amount,
        }
    }

    #[test]
    fn test_create_rejects_bad_price_and_duplicate_sizes() {
        assert!(create(0.0, vec![]).is_ok());
        assert!(matches!(create(-1.0, vec![]), Err(ProductError::Validation(_))));
        assert!(matches!(create(f64::NAN, vec![]), Err(ProductError::Validation(_))));
        let dup = vec![SizeStock::new("M", 1), SizeStock::new("M", 2)];
        assert!(matches!(create(5.0, dup), Err(ProductError::Validation(_))));
    }

    #[tokio::test]
    async fn test_decrement_is_conditional() {
        let mut p = create(5.0, vec![SizeStock::new("S", 2)]).expect("Failed to create");

        let r = p.handle_action(decrement("S", 2), &()).await.expect("Failed action");
        assert_eq!(
            r,
            ProductActionResult::DecrementSize(Decrement::Applied { remaining: 0 })
        );

        let r = p.handle_action(decrement("S", 1), &()).await.expect("Failed action");
        assert_eq!(
            r,
            ProductActionResult::DecrementSize(Decrement::Insufficient { available: 0 })
        );
        assert_eq!(p.sizes[0].quantity, 0);
    }

    #[tokio::test]
    async fn test_decrement_unknown_size_changes_nothing() {
        let mut p = create(5.0, vec![SizeStock::new("S", 2)]).expect("Failed to create");
        let r = p.handle_action(decrement("XL", 1), &()).await.expect("Failed action");
        assert_eq!(
            r,
            ProductActionResult::DecrementSize(Decrement::Insufficient { available: 0 })
        );
        assert_eq!(p.sizes, vec![SizeStock::new("S", 2)]);
    }

    #[tokio::test]
    async fn test_update_reprices_and_validates() {
        let mut p = create(5.0, vec![]).expect("Failed to create");
        let bad = ProductUpdate {
            name: None,
            price: Some(-3.0),
        };
        assert!(p.on_update(bad, &()).await.is_err());

        let good = ProductUpdate {
            name: Some("Tee v2".into()),
            price: Some(7.5),
        };
        p.on_update(good, &()).await.expect("Failed to update");
        assert_eq!((p.name.as_str(), p.price), ("Tee v2", 7.5));
    }
}
