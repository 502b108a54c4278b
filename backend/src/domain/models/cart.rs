/// One product entry in the cart with its accumulated quantity.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub id: String,
    pub title: String,
    pub image_url: String,
    pub price: f64,
    pub quantity: u32,
}

impl CartItem {
    /// Line total for this entry.
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CartItemValidationError {
    #[error("Product id cannot be empty")]
    EmptyId,
    #[error("Product title cannot be empty")]
    EmptyTitle,
    #[error("Price must be a finite, non-negative amount")]
    InvalidPrice,
}
