//! Scoped access to a cart store.
//!
//! A [`CartContext`] is handed to whatever needs the cart instead of
//! reaching for a global. Asking an empty context for its cart is an
//! integration bug and fails with [`CartError::NoCartInScope`].

use std::sync::Arc;

use turbo_cache::KvStore;

use crate::error::CartError;
use crate::store::CartStore;

/// A handle that may carry a cart store.
pub struct CartContext<S: KvStore> {
    store: Option<Arc<CartStore<S>>>,
}

impl<S: KvStore> CartContext<S> {
    /// Create a context that provides `store`.
    pub fn provide(store: CartStore<S>) -> Self {
        Self::from_shared(Arc::new(store))
    }

    /// Create a context around an already shared store.
    pub fn from_shared(store: Arc<CartStore<S>>) -> Self {
        Self { store: Some(store) }
    }

    /// Create a context with no store in scope.
    pub fn empty() -> Self {
        Self { store: None }
    }

    /// Whether a store is in scope.
    pub fn is_provided(&self) -> bool {
        self.store.is_some()
    }

    /// Get the cart store in scope.
    pub fn use_cart(&self) -> Result<&CartStore<S>, CartError> {
        self.store.as_deref().ok_or_else(not_in_scope)
    }

    /// Get a shared handle to the cart store in scope.
    pub fn shared(&self) -> Result<Arc<CartStore<S>>, CartError> {
        self.store.clone().ok_or_else(not_in_scope)
    }
}

fn not_in_scope() -> CartError {
    tracing::error!("cart accessed outside of a cart context");
    CartError::NoCartInScope
}

impl<S: KvStore> Clone for CartContext<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

impl<S: KvStore> Default for CartContext<S> {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CartConfig;
    use crate::item::Product;
    use turbo_cache::MemoryStore;

    #[test]
    fn test_empty_context_fails() {
        let ctx: CartContext<MemoryStore> = CartContext::default();
        assert!(!ctx.is_provided());
        assert!(matches!(ctx.use_cart(), Err(CartError::NoCartInScope)));
        assert!(ctx.shared().is_err());
    }

    #[test]
    fn test_error_message() {
        assert_eq!(
            CartError::NoCartInScope.to_string(),
            "use_cart must be called within a cart context"
        );
    }

    #[tokio::test]
    async fn test_clones_share_the_store() {
        let ctx = CartContext::provide(CartStore::new(MemoryStore::new(), &CartConfig::default()).unwrap());
        let other = ctx.clone();

        ctx.use_cart()
            .unwrap()
            .add(Product::new("p1", "Cap", "", 5.0))
            .await
            .unwrap();

        let items = other.use_cart().unwrap().list().await;
        assert_eq!(items.len(), 1);
        assert!(Arc::ptr_eq(&ctx.shared().unwrap(), &other.shared().unwrap()));
    }
}
