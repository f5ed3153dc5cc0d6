use order_service::catalog::Catalog;
use order_service::lifecycle::OrderSystem;
use order_service::model::{OrderId, OrderLineRequest, ProductCreate, ProductFilter, SizeStock};
use order_service::placement::OrderPlacement;
use order_service::query::{OrderQuery, PageRequest, UNBOUNDED_PREVIOUS};

async fn seed_orders(system: &OrderSystem, user: &str, count: usize) -> Vec<OrderId> {
    let product = system
        .product_client
        .create_product(ProductCreate {
            name: "Sticker".into(),
            price: 1.0,
            sizes: vec![],
        })
        .await
        .expect("Failed to create product");
    let engine = OrderPlacement::new(system.product_client.clone(), system.order_client.clone());

    let mut ids = Vec::new();
    for qty in 1..=count {
        let id = engine
            .place_order(user, &[OrderLineRequest::new(product.to_string(), qty as u32)])
            .await
            .expect("Failed to place order");
        ids.push(id);
    }
    ids
}

#[tokio::test]
async fn test_order_pages_are_disjoint_contiguous_and_ascending() {
    let system = OrderSystem::new(32);
    let query = OrderQuery::new(system.order_client.clone());
    let mine = seed_orders(&system, "alice", 5).await;
    seed_orders(&system, "bob", 3).await;

    let all = query
        .list_orders("alice", PageRequest::default())
        .await
        .expect("Failed to list");
    let all_ids: Vec<_> = all.data.iter().map(|o| o.id).collect();
    assert_eq!(all_ids, mine);
    assert!(all_ids.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(all.page.total, 5);
    assert_eq!(all.page.previous, UNBOUNDED_PREVIOUS);

    let first = query
        .list_orders("alice", PageRequest::new(2, 0))
        .await
        .expect("Failed to list");
    let second = query
        .list_orders("alice", PageRequest::new(2, first.page.next))
        .await
        .expect("Failed to list");
    let third = query
        .list_orders("alice", PageRequest::new(2, second.page.next))
        .await
        .expect("Failed to list");

    assert_eq!((first.page.next, first.page.previous), (2, 0));
    assert_eq!((second.page.next, second.page.previous), (4, 0));
    assert_eq!((third.page.next, third.page.previous), (5, 2));
    assert_eq!(third.data.len(), 1);

    let stitched: Vec<_> = first
        .data
        .iter()
        .chain(&second.data)
        .chain(&third.data)
        .map(|o| o.id)
        .collect();
    assert_eq!(stitched, all_ids);

    let beyond = query
        .list_orders("alice", PageRequest::new(2, 10))
        .await
        .expect("Failed to list");
    assert!(beyond.data.is_empty());
    assert_eq!(beyond.page.next, 0);
    assert_eq!(beyond.page.total, 5);
}

#[tokio::test]
async fn test_unknown_user_has_empty_history() {
    let system = OrderSystem::new(32);
    let query = OrderQuery::new(system.order_client.clone());

    let page = query
        .list_orders("nobody", PageRequest::new(10, 0))
        .await
        .expect("Failed to list");
    assert!(page.data.is_empty());
    assert_eq!(page.page.total, 0);
    assert_eq!(page.page.next, 0);
}

#[tokio::test]
async fn test_product_listing_filters_and_hides_sizes() {
    let system = OrderSystem::new(32);
    let catalog = Catalog::new(system.product_client.clone());

    for (name, sizes) in [
        ("Denim Jacket", vec![SizeStock::new("M", 1)]),
        ("denim shorts", vec![SizeStock::new("L", 0)]),
        ("Wool Hat", vec![]),
    ] {
        catalog
            .create_product(ProductCreate {
                name: name.into(),
                price: 20.0,
                sizes,
            })
            .await
            .expect("Failed to create product");
    }

    let denim = catalog
        .list_products(
            ProductFilter {
                name: Some("DENIM".into()),
                size: None,
            },
            PageRequest::default(),
        )
        .await
        .expect("Failed to list");
    let names: Vec<_> = denim.data.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Denim Jacket", "denim shorts"]);

    // A bucket with quantity 0 still carries its label.
    let large = catalog
        .list_products(
            ProductFilter {
                name: None,
                size: Some("L".into()),
            },
            PageRequest::default(),
        )
        .await
        .expect("Failed to list");
    assert_eq!(large.data.len(), 1);
    assert_eq!(large.data[0].name, "denim shorts");

    let json = serde_json::to_value(&large).expect("Failed to serialize");
    assert!(json["data"][0].get("sizes").is_none());
}
