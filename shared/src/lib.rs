use serde::{Deserialize, Serialize};

/// A single product entry in the cart with its accumulated quantity.
///
/// Field names also define the persisted wire format: the cart is stored as
/// a JSON array of these objects under a single storage key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Product ID, unique within the cart
    pub id: String,
    /// Product title for display
    pub title: String,
    /// Product image URL for display
    pub image_url: String,
    /// Unit price
    pub price: f64,
    /// Number of units in the cart (always >= 1)
    pub quantity: u32,
}

/// Request to add a product to the cart.
///
/// Carries no quantity: adding a product that is already in the cart
/// increments the existing entry instead of creating a second one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddItemRequest {
    pub id: String,
    pub title: String,
    pub image_url: String,
    pub price: f64,
}

/// The cart as rendered by UI components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartResponse {
    /// Cart items in insertion order
    pub items: Vec<CartItem>,
    /// Total number of units across all items
    pub total_quantity: u32,
    /// Sum of unit price times quantity across all items
    pub subtotal: f64,
}

impl CartResponse {
    /// An empty cart response.
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total_quantity: 0,
            subtotal: 0.0,
        }
    }
}
