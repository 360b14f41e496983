//! Snapshot codec: the whole cart as a JSON array of line items.
//!
//! There is no version field. A snapshot that does not decode into the
//! current [`LineItem`] shape is treated as corrupt by the store.

use std::collections::HashSet;

use crate::error::CartError;
use crate::item::LineItem;

/// Encode the full ordered cart.
pub fn encode(items: &[LineItem]) -> Result<String, CartError> {
    Ok(serde_json::to_string(items)?)
}

/// Decode a snapshot, preserving line order.
///
/// Rejects snapshots with two lines for the same product or a line whose
/// price is negative or not finite.
pub fn decode(raw: &str) -> Result<Vec<LineItem>, CartError> {
    let items: Vec<LineItem> = serde_json::from_str(raw)?;

    {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            item.validate()?;
            if !seen.insert(item.id.as_str()) {
                return Err(CartError::DuplicateLine(item.id.to_string()));
            }
        }
    }

    Ok(items)
}
