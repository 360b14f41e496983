//! The durable cart store.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::instrument;
use turbo_cache::KvStore;

use crate::config::CartConfig;
use crate::error::CartError;
use crate::ids::ProductId;
use crate::item::{LineItem, Product};
use crate::snapshot;

/// An ordered cart mirrored to a single key-value slot.
///
/// Every mutation rewrites the whole snapshot before it returns. The item
/// lock is held across that write, so concurrent callers are serialized
/// and the slot always holds the latest in-memory state once a call
/// completes.
///
/// A failed write is returned to the caller but the in-memory change is
/// kept: the in-memory cart is the source of truth for the session.
///
/// # Example
///
/// ```rust,ignore
/// let store = CartStore::open(FileStore::open(dir).await?, &CartConfig::default()).await?;
///
/// store.add(Product::new("p1", "Cap", "https://img/p1.png", 19.9)).await?;
/// store.increment(&"p1".into()).await?;
///
/// for line in store.list().await {
///     println!("{} x{}", line.title, line.quantity);
/// }
/// ```
pub struct CartStore<S: KvStore> {
    store: Arc<S>,
    key: String,
    items: Mutex<Vec<LineItem>>,
}

impl<S: KvStore> CartStore<S> {
    /// Create an empty cart over `store`. Nothing is read until [`load`](Self::load).
    ///
    /// Fails if `config` is invalid.
    pub fn new(store: S, config: &CartConfig) -> Result<Self, CartError> {
        Self::with_shared(Arc::new(store), config)
    }

    /// Create an empty cart over a store shared with other owners.
    pub fn with_shared(store: Arc<S>, config: &CartConfig) -> Result<Self, CartError> {
        config.validate()?;
        Ok(Self {
            store,
            key: config.storage_key.clone(),
            items: Mutex::new(Vec::new()),
        })
    }

    /// Create a cart and hydrate it from the persisted snapshot.
    pub async fn open(store: S, config: &CartConfig) -> Result<Self, CartError> {
        let cart = Self::new(store, config)?;
        cart.load().await?;
        Ok(cart)
    }

    /// Key of the persistence slot.
    pub fn storage_key(&self) -> &str {
        &self.key
    }

    /// The underlying persistence medium.
    pub fn backend(&self) -> &S {
        &self.store
    }

    /// Replace the in-memory cart with the persisted snapshot.
    ///
    /// An absent slot yields an empty cart. A snapshot that cannot be
    /// decoded is logged and also yields an empty cart. Only a failure to
    /// read the medium is returned. Returns the number of lines loaded.
    #[instrument(skip(self), fields(key = %self.key))]
    pub async fn load(&self) -> Result<usize, CartError> {
        let mut items = self.items.lock().await;

        *items = match self.store.get(&self.key).await? {
            None => Vec::new(),
            Some(raw) => match snapshot::decode(&raw) {
                Ok(lines) => lines,
                Err(e) => {
                    tracing::warn!(error = %e, "discarding unreadable cart snapshot");
                    Vec::new()
                }
            },
        };

        tracing::debug!(lines = items.len(), "loaded cart");
        Ok(items.len())
    }

    /// Add one unit of `product`.
    ///
    /// Merges into the existing line for the same product id, otherwise
    /// appends a new line with quantity 1. Returns the resulting line.
    #[instrument(skip(self, product), fields(id = %product.id))]
    pub async fn add(&self, product: Product) -> Result<LineItem, CartError> {
        product.validate()?;
        let mut items = self.items.lock().await;

        let line = match items.iter().position(|i| i.id == product.id) {
            Some(index) => {
                let existing = &mut items[index];
                existing.increment();
                existing.clone()
            }
            None => {
                let line = LineItem::from_product(product);
                items.push(line.clone());
                line
            }
        };

        tracing::debug!(quantity = line.quantity, "added to cart");
        self.persist(&items).await?;
        Ok(line)
    }

    /// Increase the quantity of the line for `id` by one.
    ///
    /// A missing id leaves the cart unchanged; the snapshot is written
    /// either way. Returns the updated line, if any.
    #[instrument(skip(self, id), fields(id = %id))]
    pub async fn increment(&self, id: &ProductId) -> Result<Option<LineItem>, CartError> {
        let mut items = self.items.lock().await;

        let line = items.iter_mut().find(|i| &i.id == id).map(|line| {
            line.increment();
            line.clone()
        });

        self.persist(&items).await?;
        Ok(line)
    }

    /// Decrease the quantity of the line for `id` by one, stopping at zero.
    ///
    /// Lines at zero stay in the cart. A missing id leaves the cart
    /// unchanged; the snapshot is written either way.
    #[instrument(skip(self, id), fields(id = %id))]
    pub async fn decrement(&self, id: &ProductId) -> Result<Option<LineItem>, CartError> {
        let mut items = self.items.lock().await;

        let line = items.iter_mut().find(|i| &i.id == id).map(|line| {
            line.decrement();
            line.clone()
        });

        self.persist(&items).await?;
        Ok(line)
    }

    /// Remove every line and persist the empty cart.
    #[instrument(skip(self))]
    pub async fn clear(&self) -> Result<(), CartError> {
        let mut items = self.items.lock().await;
        items.clear();
        self.persist(&items).await
    }

    /// A copy of the current lines, in insertion order.
    pub async fn list(&self) -> Vec<LineItem> {
        self.items.lock().await.clone()
    }

    /// A copy of the line for `id`.
    pub async fn get(&self, id: &ProductId) -> Option<LineItem> {
        self.items.lock().await.iter().find(|i| &i.id == id).cloned()
    }

    /// Number of lines, including zero-quantity ones.
    pub async fn len(&self) -> usize {
        self.items.lock().await.len()
    }

    /// Whether the cart has no lines.
    pub async fn is_empty(&self) -> bool {
        self.items.lock().await.is_empty()
    }

    /// Total units across all lines.
    pub async fn item_count(&self) -> u64 {
        self.items
            .lock()
            .await
            .iter()
            .map(|i| u64::from(i.quantity))
            .sum()
    }

    /// Sum of unit price times quantity across all lines.
    pub async fn subtotal(&self) -> f64 {
        self.items.lock().await.iter().map(LineItem::line_total).sum()
    }

    async fn persist(&self, items: &[LineItem]) -> Result<(), CartError> {
        let snapshot = snapshot::encode(items)?;

        if let Err(e) = self.store.set(&self.key, &snapshot).await {
            tracing::error!(key = %self.key, error = %e, "failed to persist cart");
            return Err(e.into());
        }

        tracing::debug!(key = %self.key, lines = items.len(), "persisted cart");
        Ok(())
    }
}
