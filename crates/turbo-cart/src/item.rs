//! Product candidates and cart line items.

use serde::{Deserialize, Serialize};

use crate::error::CartError;
use crate::ids::ProductId;

/// A product offered for adding to the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Product identifier.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Image URL for display.
    pub image_url: String,
    /// Unit price.
    pub price: f64,
}

impl Product {
    /// Create a product candidate.
    pub fn new(
        id: impl Into<ProductId>,
        title: impl Into<String>,
        image_url: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            image_url: image_url.into(),
            price,
        }
    }

    /// Check that the unit price is a finite, non-negative number.
    pub fn validate(&self) -> Result<(), CartError> {
        validate_price(self.price)
    }
}

fn validate_price(price: f64) -> Result<(), CartError> {
    if !price.is_finite() || price < 0.0 {
        return Err(CartError::InvalidPrice(price));
    }
    Ok(())
}

/// A line in the cart: one product and how many of it.
///
/// Field names match the persisted snapshot shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product identifier, unique within a cart.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Image URL for display.
    pub image_url: String,
    /// Unit price.
    pub price: f64,
    /// Quantity. Zero-quantity lines stay in the cart.
    pub quantity: u32,
}

impl LineItem {
    /// Start a new line for `product` with quantity 1.
    pub fn from_product(product: Product) -> Self {
        Self {
            id: product.id,
            title: product.title,
            image_url: product.image_url,
            price: product.price,
            quantity: 1,
        }
    }

    /// Check that the unit price is a finite, non-negative number.
    pub fn validate(&self) -> Result<(), CartError> {
        validate_price(self.price)
    }

    /// Unit price times quantity.
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }

    pub(crate) fn increment(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }

    pub(crate) fn decrement(&mut self) {
        self.quantity = self.quantity.saturating_sub(1);
    }
}
