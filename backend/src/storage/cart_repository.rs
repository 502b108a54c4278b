//! # Cart Repository
//!
//! Persists the cart as a single JSON document under a fixed storage key,
//! on top of any [`KeyValueStore`].
//!
//! ## Persisted layout
//!
//! ```json
//! [
//!   {"id":"shirt-1","title":"Shirt","image_url":"https://...","price":10.0,"quantity":2}
//! ]
//! ```
//!
//! Every save rewrites the whole document. Loads tolerate a missing or
//! malformed payload by reporting "no saved cart", and skip individual
//! records that cannot become valid cart items.

use anyhow::Result;
use async_trait::async_trait;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::domain::models::cart::CartItem;
use crate::storage::traits::{CartStorage, KeyValueStore};

/// Storage key the serialized cart lives under.
pub const CART_STORAGE_KEY: &str = "gomarket:cart";

/// Persisted record structure for cart items
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CartItemRecord {
    id: String,
    title: String,
    image_url: String,
    price: f64,
    quantity: u32,
}

impl From<CartItem> for CartItemRecord {
    fn from(item: CartItem) -> Self {
        CartItemRecord {
            id: item.id,
            title: item.title,
            image_url: item.image_url,
            price: item.price,
            quantity: item.quantity,
        }
    }
}

impl From<CartItemRecord> for CartItem {
    fn from(record: CartItemRecord) -> Self {
        CartItem {
            id: record.id,
            title: record.title,
            image_url: record.image_url,
            price: record.price,
            quantity: record.quantity,
        }
    }
}

/// Cart repository over a key-value store
#[derive(Clone)]
pub struct CartRepository<S> {
    store: S,
}

impl<S: KeyValueStore> CartRepository<S> {
    /// Create a new cart repository over the given store
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Drop records that cannot become valid cart items and collapse
    /// duplicate ids, keeping the first occurrence.
    fn sanitize(records: Vec<CartItemRecord>) -> Vec<CartItem> {
        let mut items: Vec<CartItem> = Vec::with_capacity(records.len());

        for record in records {
            if record.id.is_empty() || record.quantity == 0 {
                warn!("Skipping invalid saved cart record (id {:?})", record.id);
                continue;
            }

            if items.iter().any(|item| item.id == record.id) {
                warn!("Skipping duplicate saved cart record (id {:?})", record.id);
                continue;
            }

            items.push(record.into());
        }

        items
    }
}

#[async_trait]
impl<S: KeyValueStore> CartStorage for CartRepository<S> {
    async fn load_cart(&self) -> Result<Option<Vec<CartItem>>> {
        let Some(raw) = self.store.get(CART_STORAGE_KEY).await? else {
            return Ok(None);
        };

        let records: Vec<CartItemRecord> = match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(e) => {
                warn!("Saved cart is not valid JSON ({}), treating it as absent", e);
                return Ok(None);
            }
        };

        Ok(Some(Self::sanitize(records)))
    }

    async fn save_cart(&self, items: &[CartItem]) -> Result<()> {
        let records: Vec<CartItemRecord> =
            items.iter().cloned().map(CartItemRecord::from).collect();
        let payload = serde_json::to_string(&records)?;

        self.store.set(CART_STORAGE_KEY, &payload).await
    }
}
