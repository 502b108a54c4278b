//! # Storage Traits
//!
//! This module defines the storage abstraction traits that allow different
//! storage backends to be used interchangeably in the domain layer.

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::models::cart::CartItem;

/// Asynchronous key-value storage primitive.
///
/// This is the device-storage contract the cart persists through: string
/// keys mapping to string payloads. Implementations report failures to the
/// caller and do nothing else about them.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Trait defining the interface for cart storage operations
///
/// This trait abstracts away the specific storage implementation details,
/// allowing the domain layer to work with different storage backends
/// without modification.
#[async_trait]
pub trait CartStorage: Send + Sync {
    /// Load the saved cart. `None` means no usable saved cart exists.
    async fn load_cart(&self) -> Result<Option<Vec<CartItem>>>;

    /// Persist the full cart, replacing the previous saved state.
    async fn save_cart(&self, items: &[CartItem]) -> Result<()>;
}

/// Trait defining the interface for storage connections
///
/// This trait abstracts away the specific connection type and provides
/// factory methods for creating repositories. This allows the domain layer
/// to work with any storage backend without knowing the implementation
/// details.
pub trait Connection: Send + Sync + Clone {
    /// The type of CartStorage this connection creates
    type CartRepository: CartStorage + Clone;

    /// Create a new cart repository for this connection
    fn create_cart_repository(&self) -> Self::CartRepository;
}
