//! Cart error types.

use thiserror::Error;
use turbo_cache::CacheError;

/// Errors that can occur in cart operations.
#[derive(Error, Debug)]
pub enum CartError {
    /// The persistence medium failed to read or write the snapshot.
    ///
    /// On a mutating call the in-memory change has already been applied.
    #[error("Cart storage error: {0}")]
    Storage(#[from] CacheError),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Unit price is negative or not a finite number.
    #[error("Invalid price: {0}")]
    InvalidPrice(f64),

    /// Snapshot contains two lines for the same product.
    #[error("Duplicate line for product: {0}")]
    DuplicateLine(String),

    /// The cart was accessed through a context that holds no store.
    #[error("use_cart must be called within a cart context")]
    NoCartInScope,

    /// Configuration could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<toml::de::Error> for CartError {
    fn from(e: toml::de::Error) -> Self {
        CartError::Config(e.to_string())
    }
}
