//! # Shop Cart
//!
//! A shopping-cart state manager: an ordered list of line items, validated against a
//! remote stock service and mirrored to durable key-value storage after every change.
//!
//! ## Core Components
//!
//! - **[model]**: [`Cart`](model::Cart), [`Product`](model::Product) and
//!   [`Stock`](model::Stock).
//! - **[ports]**: the traits the cart talks through ([`StockService`](ports::StockService),
//!   [`KeyValueStore`](ports::KeyValueStore), [`Notifier`](ports::Notifier)).
//! - **[adapters]**: HTTP, JSON file, in-memory and notifier implementations of the ports.
//! - **[cart_actor]**: the cart's command handling, run by a
//!   [`SnapshotActor`](snapshot_actor::SnapshotActor).
//! - **[clients]**: [`CartClient`](clients::CartClient), the type-safe front door.
//! - **[lifecycle]**: [`CartSystem`](lifecycle::CartSystem) startup and shutdown.
//!
//! ## Quick Start
//!
//! ```rust
//! use shop_cart::adapters::{MemoryStore, StaticCatalog, TracingNotifier};
//! use shop_cart::cart_actor::CartContext;
//! use shop_cart::lifecycle::CartSystem;
//! use shop_cart::model::{Product, ProductId};
//! use shop_cart::ports::CartStorage;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let catalog = StaticCatalog::new()
//!         .with_product(Product::new(ProductId(1), "Runner", 179.9, "runner.jpg"), 5);
//!     let storage = CartStorage::new(Arc::new(MemoryStore::new()), "cart");
//!     let context = CartContext::new(Arc::new(catalog), storage, Arc::new(TracingNotifier));
//!
//!     let system = CartSystem::start(context, 32);
//!     let cart = system.cart_client.add_product(ProductId(1)).await.unwrap();
//!     assert_eq!(cart.total_items(), 1);
//!
//!     system.shutdown().await.unwrap();
//! }
//! ```
//!
//! ## Testing
//!
//! See [`mock`] for scripted collaborators and [`snapshot_actor::mock`] for testing
//! clients without a running actor.

pub mod adapters;
pub mod cart_actor;
pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod mock;
pub mod model;
pub mod ports;
