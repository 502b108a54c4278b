//! # Cart API
//!
//! The accessor UI components hold to read and mutate the cart.
//!
//! Every mutation returns the updated [`CartResponse`] so the caller can
//! re-render without a second round trip to the service.

use anyhow::Result;
use shared::{AddItemRequest, CartResponse};

use crate::domain::CartService;
use crate::io::mappers::CartMapper;
use crate::storage::traits::Connection;

/// Handle exposing cart operations to UI components.
///
/// Constructed from application state and passed into components
/// explicitly; cloning is cheap and all clones share the same cart.
#[derive(Clone)]
pub struct CartApi<C: Connection> {
    cart_service: CartService<C>,
}

impl<C: Connection> CartApi<C> {
    /// Create an API handle over the given cart service.
    pub fn new(cart_service: CartService<C>) -> Self {
        Self { cart_service }
    }

    /// Current cart contents for rendering.
    pub fn products(&self) -> CartResponse {
        CartMapper::to_cart_response(self.cart_service.products())
    }

    /// Add a product to the cart and return the updated cart.
    pub async fn add_to_cart(&self, request: AddItemRequest) -> Result<CartResponse> {
        let command = CartMapper::add_request_to_command(request);
        self.cart_service.add_to_cart(command).await?;

        Ok(self.products())
    }

    /// Increase the quantity of a product by one and return the updated
    /// cart. Unknown ids leave the cart unchanged.
    pub async fn increment(&self, item_id: &str) -> Result<CartResponse> {
        self.cart_service.increment(item_id).await?;

        Ok(self.products())
    }

    /// Decrease the quantity of a product by one, removing it at quantity
    /// one, and return the updated cart. Unknown ids leave the cart
    /// unchanged.
    pub async fn decrement(&self, item_id: &str) -> Result<CartResponse> {
        self.cart_service.decrement(item_id).await?;

        Ok(self.products())
    }

    /// Empty the cart and return the updated (empty) cart.
    pub async fn clear(&self) -> Result<CartResponse> {
        self.cart_service.clear().await?;

        Ok(self.products())
    }
}
