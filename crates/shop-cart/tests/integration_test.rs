use shop_cart::adapters::{ChannelNotifier, JsonFileStore, MemoryStore, StaticCatalog};
use shop_cart::cart_actor::{CartContext, CartError};
use shop_cart::config::CartConfig;
use shop_cart::lifecycle::CartSystem;
use shop_cart::model::{Cart, Product, ProductId};
use shop_cart::ports::{CartStorage, KeyValueStore, Notification};
use std::sync::Arc;

const KEY: &str = "@RocketShoes:cart";

fn catalog() -> StaticCatalog {
    StaticCatalog::new()
        .with_product(
            Product::new(ProductId(1), "Tênis de Caminhada", 179.9, "1.jpg"),
            5,
        )
        .with_product(Product::new(ProductId(2), "Tênis VR Caminhada", 139.9, "2.jpg"), 2)
        .with_product(Product::new(ProductId(3), "Tênis Adidas Duramo", 219.9, "3.jpg"), 0)
}

fn context(store: Arc<dyn KeyValueStore>, notifier: ChannelNotifier) -> CartContext {
    CartContext::new(
        Arc::new(catalog()),
        CartStorage::new(store, KEY),
        Arc::new(notifier),
    )
}

/// Full end-to-end run: real actor, in-memory catalog and store.
#[tokio::test]
async fn test_full_cart_system_integration() {
    let store = Arc::new(MemoryStore::new());
    let (notifier, mut notifications) = ChannelNotifier::new();
    let system = CartSystem::start(context(store.clone(), notifier), 8);
    let client = &system.cart_client;

    client.add_product(ProductId(1)).await.expect("Failed to add");
    client.add_product(ProductId(1)).await.expect("Failed to add");
    client.add_product(ProductId(2)).await.expect("Failed to add");

    let cart = client
        .update_product_amount(ProductId(1), 3)
        .await
        .expect("Failed to update");
    assert_eq!(cart.get(ProductId(1)).unwrap().amount, 3);
    assert_eq!(cart.total_items(), 4);

    // Product 3 has no stock, product 2 only two units.
    assert!(matches!(
        client.add_product(ProductId(3)).await,
        Err(CartError::OutOfStock { .. })
    ));
    assert!(client.update_product_amount(ProductId(2), 3).await.is_err());
    assert!(matches!(
        client.add_product(ProductId(42)).await,
        Err(CartError::AddFailed { .. })
    ));

    let cart = client.remove_product(ProductId(2)).await.expect("Failed to remove");
    assert_eq!(cart.len(), 1);
    assert!((cart.total() - 3.0 * 179.9).abs() < 1e-9);

    // The persisted snapshot decodes back to the in-memory cart.
    let raw = store.get(KEY).unwrap().expect("Cart not persisted");
    let persisted: Cart = serde_json::from_str(&raw).unwrap();
    assert_eq!(persisted, *client.cart().await.unwrap());

    system.shutdown().await.expect("Shutdown failed");

    let mut seen = Vec::new();
    while let Ok(n) = notifications.try_recv() {
        seen.push(n);
    }
    assert_eq!(
        seen,
        vec![
            Notification::OutOfStock(ProductId(3)),
            Notification::OutOfStock(ProductId(2)),
            Notification::AddFailed(ProductId(42)),
        ]
    );
}

#[tokio::test]
async fn test_cart_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cart.json");

    let (notifier, _rx) = ChannelNotifier::new();
    let system = CartSystem::start(context(Arc::new(JsonFileStore::new(&path)), notifier), 8);
    system.cart_client.add_product(ProductId(2)).await.unwrap();
    system.cart_client.add_product(ProductId(1)).await.unwrap();
    let before = system.cart_client.cart().await.unwrap();
    system.shutdown().await.unwrap();

    let (notifier, _rx) = ChannelNotifier::new();
    let system = CartSystem::start(context(Arc::new(JsonFileStore::new(&path)), notifier), 8);
    let after = system.cart_client.cart().await.unwrap();
    assert_eq!(after, before);
    let ids: Vec<u32> = after.iter().map(|p| p.id.0).collect();
    assert_eq!(ids, vec![2, 1]);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_corrupt_snapshot_starts_empty() {
    let store = Arc::new(MemoryStore::new());
    store.set(KEY, "{\"oops\":").unwrap();

    let (notifier, _rx) = ChannelNotifier::new();
    let system = CartSystem::start(context(store.clone(), notifier), 8);

    assert!(system.cart_client.cart().await.unwrap().is_empty());
    let cart = system.cart_client.add_product(ProductId(1)).await.unwrap();
    assert_eq!(cart.len(), 1);
    assert!(store.get(KEY).unwrap().unwrap().starts_with('['));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_concurrent_adds_are_not_lost() {
    let store = Arc::new(MemoryStore::new());
    let (notifier, _rx) = ChannelNotifier::new();
    let system = CartSystem::start(context(store.clone(), notifier), 4);

    let tasks: Vec<_> = (0..5)
        .map(|_| {
            let client = system.cart_client.clone();
            tokio::spawn(async move { client.add_product(ProductId(1)).await })
        })
        .collect();
    for task in tasks {
        task.await.unwrap().expect("Add failed");
    }

    let cart = system.cart_client.cart().await.unwrap();
    assert_eq!(cart.get(ProductId(1)).unwrap().amount, 5);

    let persisted: Cart = serde_json::from_str(&store.get(KEY).unwrap().unwrap()).unwrap();
    assert_eq!(persisted, *cart);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_from_config_with_unreachable_api() {
    let dir = tempfile::tempdir().unwrap();
    let config = CartConfig {
        api_url: "http://127.0.0.1:1".to_string(),
        storage_path: dir.path().join("cart.json"),
        ..CartConfig::default()
    };

    let system = CartSystem::from_config(&config).expect("Failed to start");
    assert!(matches!(
        system.cart_client.add_product(ProductId(1)).await,
        Err(CartError::AddFailed { .. })
    ));
    assert!(system.cart_client.cart().await.unwrap().is_empty());
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_garbage_store_file_is_replaced_on_first_change() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cart.json");
    std::fs::write(&path, r#"{"@RocketShoes:cart": [truncated"#).unwrap();

    let (notifier, mut notifications) = ChannelNotifier::new();
    let system = CartSystem::start(context(Arc::new(JsonFileStore::new(&path)), notifier), 8);
    assert!(system.cart_client.cart().await.unwrap().is_empty());

    for expected in 1..=3 {
        let cart = system
            .cart_client
            .add_product(ProductId(1))
            .await
            .expect("Add after corrupt file failed");
        assert_eq!(cart.get(ProductId(1)).unwrap().amount, expected);
    }
    system.shutdown().await.unwrap();
    assert!(notifications.try_recv().is_err());

    let storage = CartStorage::new(Arc::new(JsonFileStore::new(&path)), KEY);
    let persisted = storage.load().unwrap().expect("Cart not persisted");
    assert_eq!(persisted.get(ProductId(1)).unwrap().amount, 3);
}
