//! Durable client-side shopping cart for TurboCommerce.
//!
//! The cart is an ordered list of line items kept in memory and mirrored,
//! after every change, to one slot of a [`turbo_cache::KvStore`]. At startup
//! the slot is read back to seed the cart.
//!
//! - **Store**: [`CartStore`] with add / increment / decrement / list
//! - **Snapshot**: JSON array of `{id, title, image_url, price, quantity}`
//! - **Context**: [`CartContext`], the handle UI code asks for the cart
//!
//! # Example
//!
//! ```rust,ignore
//! use turbo_cart::prelude::*;
//! use turbo_cache::FileStore;
//!
//! let backend = FileStore::open(data_dir).await?;
//! let cart = CartStore::open(backend, &CartConfig::default()).await?;
//! let ctx = CartContext::provide(cart);
//!
//! // Somewhere in the UI
//! let cart = ctx.use_cart()?;
//! cart.add(Product::new("p1", "Rust Mug", "https://cdn/mug.png", 12.0)).await?;
//! println!("{} items, {:.2} total", cart.item_count().await, cart.subtotal().await);
//! ```

pub mod config;
pub mod context;
pub mod error;
pub mod ids;
pub mod item;
pub mod snapshot;
pub mod store;

pub use config::{CartConfig, DEFAULT_STORAGE_KEY};
pub use context::CartContext;
pub use error::CartError;
pub use ids::ProductId;
pub use item::{LineItem, Product};
pub use store::CartStore;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::CartConfig;
    pub use crate::context::CartContext;
    pub use crate::error::CartError;
    pub use crate::ids::ProductId;
    pub use crate::item::{LineItem, Product};
    pub use crate::store::CartStore;
}
