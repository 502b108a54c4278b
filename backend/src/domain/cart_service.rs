use std::sync::{Arc, Mutex};

use anyhow::Result;
use log::{debug, info, warn};

use crate::domain::commands::cart::AddItemCommand;
use crate::domain::models::cart::{CartItem, CartItemValidationError};
use crate::storage::traits::{CartStorage, Connection};

/// Service owning the in-memory cart state for the current session.
///
/// All mutations update the in-memory list first, then persist the full
/// cart through the configured storage backend before returning. A
/// mutation that does not change the cart (unknown product id) skips the
/// redundant storage write.
#[derive(Clone)]
pub struct CartService<C: Connection> {
    repository: C::CartRepository,
    items: Arc<Mutex<Vec<CartItem>>>,
}

impl<C: Connection> CartService<C> {
    /// Create a new CartService backed by the given connection.
    ///
    /// The cart starts empty; call [`load`](Self::load) to restore a
    /// previously persisted cart.
    pub fn new(connection: C) -> Self {
        Self {
            repository: connection.create_cart_repository(),
            items: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Restore the persisted cart into memory.
    ///
    /// An absent, unreadable, or malformed saved cart all leave the
    /// in-memory cart empty. Failures are logged and never surfaced to the
    /// caller.
    pub async fn load(&self) {
        let restored = match self.repository.load_cart().await {
            Ok(saved) => saved,
            Err(e) => {
                warn!("Failed to read saved cart: {:#}", e);
                None
            }
        };

        match restored {
            Some(saved) => {
                info!("Restored {} cart item(s) from storage", saved.len());
                *self.items.lock().unwrap() = saved;
            }
            None => {
                info!("No saved cart found, starting empty");
            }
        }
    }

    /// Add a product to the cart.
    ///
    /// If the product is already present its quantity is incremented
    /// instead of a second entry being created, so product ids stay unique
    /// within the cart. Returns the affected cart item.
    pub async fn add_to_cart(&self, command: AddItemCommand) -> Result<CartItem> {
        self.validate_add_command(&command)?;

        let (item, snapshot) = {
            let mut items = self.items.lock().unwrap();
            match items.iter_mut().find(|item| item.id == command.id) {
                Some(existing) => {
                    existing.quantity += 1;
                    info!(
                        "Product {} already in cart, quantity now {}",
                        existing.id, existing.quantity
                    );
                    (existing.clone(), items.clone())
                }
                None => {
                    let item = CartItem {
                        id: command.id,
                        title: command.title,
                        image_url: command.image_url,
                        price: command.price,
                        quantity: 1,
                    };
                    info!("Added product {} to cart", item.id);
                    items.push(item.clone());
                    (item, items.clone())
                }
            }
        };

        self.persist(&snapshot).await?;

        Ok(item)
    }

    /// Increase the quantity of the matching cart item by one.
    ///
    /// An unknown product id leaves the cart unchanged.
    pub async fn increment(&self, item_id: &str) -> Result<()> {
        let snapshot = {
            let mut items = self.items.lock().unwrap();
            match items.iter_mut().find(|item| item.id == item_id) {
                Some(item) => {
                    item.quantity += 1;
                    info!("Incremented product {}, quantity now {}", item.id, item.quantity);
                    Some(items.clone())
                }
                None => {
                    warn!("Cannot increment product {}: not in cart", item_id);
                    None
                }
            }
        };

        match snapshot {
            Some(snapshot) => self.persist(&snapshot).await,
            None => Ok(()),
        }
    }

    /// Decrease the quantity of the matching cart item by one, removing the
    /// item entirely when its quantity is exactly one.
    ///
    /// An unknown product id leaves the cart unchanged.
    pub async fn decrement(&self, item_id: &str) -> Result<()> {
        let snapshot = {
            let mut items = self.items.lock().unwrap();
            match items.iter().position(|item| item.id == item_id) {
                Some(index) if items[index].quantity <= 1 => {
                    let removed = items.remove(index);
                    info!("Removed product {} from cart", removed.id);
                    Some(items.clone())
                }
                Some(index) => {
                    items[index].quantity -= 1;
                    info!(
                        "Decremented product {}, quantity now {}",
                        item_id, items[index].quantity
                    );
                    Some(items.clone())
                }
                None => {
                    warn!("Cannot decrement product {}: not in cart", item_id);
                    None
                }
            }
        };

        match snapshot {
            Some(snapshot) => self.persist(&snapshot).await,
            None => Ok(()),
        }
    }

    /// Remove every item from the cart and persist the empty state.
    pub async fn clear(&self) -> Result<()> {
        {
            let mut items = self.items.lock().unwrap();
            if items.is_empty() {
                return Ok(());
            }
            items.clear();
        }

        info!("Cleared cart");
        self.persist(&[]).await
    }

    /// Current cart contents in insertion order.
    pub fn products(&self) -> Vec<CartItem> {
        self.items.lock().unwrap().clone()
    }

    /// Total number of units across all cart items.
    pub fn item_count(&self) -> u32 {
        self.items.lock().unwrap().iter().map(|item| item.quantity).sum()
    }

    /// Sum of unit price times quantity across all cart items.
    pub fn subtotal(&self) -> f64 {
        self.items.lock().unwrap().iter().map(|item| item.line_total()).sum()
    }

    /// Write the full cart to storage, replacing the previous saved state.
    async fn persist(&self, items: &[CartItem]) -> Result<()> {
        debug!("Persisting {} cart item(s)", items.len());
        self.repository.save_cart(items).await
    }

    /// Validate an add-to-cart command.
    fn validate_add_command(&self, command: &AddItemCommand) -> Result<()> {
        if command.id.trim().is_empty() {
            return Err(CartItemValidationError::EmptyId.into());
        }

        if command.title.trim().is_empty() {
            return Err(CartItemValidationError::EmptyTitle.into());
        }

        if !command.price.is_finite() || command.price < 0.0 {
            return Err(CartItemValidationError::InvalidPrice.into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryStore;

    fn setup_test() -> CartService<MemoryStore> {
        CartService::new(MemoryStore::new())
    }

    fn add_command(id: &str, title: &str, price: f64) -> AddItemCommand {
        AddItemCommand {
            id: id.to_string(),
            title: title.to_string(),
            image_url: format!("https://img.gomarket.test/{}.png", id),
            price,
        }
    }

    #[tokio::test]
    async fn test_add_to_cart_new_product() {
        let service = setup_test();

        let item = service
            .add_to_cart(add_command("a", "Shirt", 10.0))
            .await
            .expect("Failed to add product");

        assert_eq!(item.id, "a");
        assert_eq!(item.quantity, 1);

        let products = service.products();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0], item);
    }

    #[tokio::test]
    async fn test_add_to_cart_distinct_ids_keeps_insertion_order() {
        let service = setup_test();

        service.add_to_cart(add_command("a", "Shirt", 10.0)).await.expect("Failed to add a");
        service.add_to_cart(add_command("b", "Mug", 5.5)).await.expect("Failed to add b");
        service.add_to_cart(add_command("c", "Cap", 7.25)).await.expect("Failed to add c");

        let products = service.products();
        assert_eq!(products.len(), 3);
        let ids: Vec<&str> = products.iter().map(|item| item.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert!(products.iter().all(|item| item.quantity == 1));
    }

    #[tokio::test]
    async fn test_add_to_cart_same_id_twice_increments() {
        let service = setup_test();

        service.add_to_cart(add_command("a", "Shirt", 10.0)).await.expect("Failed to add");
        let item = service
            .add_to_cart(add_command("a", "Shirt", 10.0))
            .await
            .expect("Failed to re-add");

        assert_eq!(item.quantity, 2);

        let products = service.products();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].quantity, 2);
    }

    #[tokio::test]
    async fn test_add_to_cart_validation() {
        let service = setup_test();

        // Empty id
        assert!(service.add_to_cart(add_command("", "Shirt", 10.0)).await.is_err());

        // Blank title
        assert!(service.add_to_cart(add_command("a", "   ", 10.0)).await.is_err());

        // Negative price
        assert!(service.add_to_cart(add_command("a", "Shirt", -1.0)).await.is_err());

        // Non-finite price
        assert!(service.add_to_cart(add_command("a", "Shirt", f64::NAN)).await.is_err());

        // Nothing reached the cart
        assert!(service.products().is_empty());
    }

    #[tokio::test]
    async fn test_increment_targets_only_matching_item() {
        let service = setup_test();

        service.add_to_cart(add_command("a", "Shirt", 10.0)).await.expect("Failed to add a");
        service.add_to_cart(add_command("b", "Mug", 5.5)).await.expect("Failed to add b");

        service.increment("a").await.expect("Failed to increment");

        let products = service.products();
        assert_eq!(products[0].quantity, 2);
        assert_eq!(products[1].quantity, 1);
    }

    #[tokio::test]
    async fn test_increment_unknown_id_is_noop() {
        let service = setup_test();

        service.add_to_cart(add_command("a", "Shirt", 10.0)).await.expect("Failed to add");
        service.increment("missing").await.expect("Increment should not fail");

        let products = service.products();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].quantity, 1);
    }

    #[tokio::test]
    async fn test_decrement_above_one_decreases_quantity() {
        let service = setup_test();

        service.add_to_cart(add_command("a", "Shirt", 10.0)).await.expect("Failed to add");
        service.increment("a").await.expect("Failed to increment");
        service.increment("a").await.expect("Failed to increment");

        service.decrement("a").await.expect("Failed to decrement");

        let products = service.products();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].quantity, 2);
    }

    #[tokio::test]
    async fn test_decrement_at_quantity_one_removes_item() {
        let service = setup_test();

        service.add_to_cart(add_command("a", "Shirt", 10.0)).await.expect("Failed to add a");
        service.add_to_cart(add_command("b", "Mug", 5.5)).await.expect("Failed to add b");

        service.decrement("a").await.expect("Failed to decrement");

        let products = service.products();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, "b");
    }

    #[tokio::test]
    async fn test_decrement_unknown_id_is_noop() {
        let service = setup_test();

        service.add_to_cart(add_command("a", "Shirt", 10.0)).await.expect("Failed to add");
        service.decrement("missing").await.expect("Decrement should not fail");

        let products = service.products();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].quantity, 1);
    }

    #[tokio::test]
    async fn test_item_count_and_subtotal() {
        let service = setup_test();

        service.add_to_cart(add_command("a", "Shirt", 10.0)).await.expect("Failed to add a");
        service.add_to_cart(add_command("a", "Shirt", 10.0)).await.expect("Failed to re-add a");
        service.add_to_cart(add_command("b", "Mug", 5.5)).await.expect("Failed to add b");

        assert_eq!(service.item_count(), 3);
        assert!((service.subtotal() - 25.5).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_clear_empties_cart() {
        let service = setup_test();

        service.add_to_cart(add_command("a", "Shirt", 10.0)).await.expect("Failed to add a");
        service.add_to_cart(add_command("b", "Mug", 5.5)).await.expect("Failed to add b");

        service.clear().await.expect("Failed to clear");

        assert!(service.products().is_empty());
        assert_eq!(service.item_count(), 0);
    }

    #[tokio::test]
    async fn test_shopping_scenario() {
        let service = setup_test();

        // Start empty, add a shirt
        service.add_to_cart(add_command("a", "Shirt", 10.0)).await.expect("Failed to add");
        let products = service.products();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].quantity, 1);

        // Add the same shirt again
        service.add_to_cart(add_command("a", "Shirt", 10.0)).await.expect("Failed to re-add");
        let products = service.products();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].quantity, 2);

        // Take one away
        service.decrement("a").await.expect("Failed to decrement");
        let products = service.products();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].quantity, 1);

        // Take the last one away: the item disappears
        service.decrement("a").await.expect("Failed to decrement");
        assert!(service.products().is_empty());
    }

    #[tokio::test]
    async fn test_load_restores_persisted_cart() {
        let store = MemoryStore::new();

        let service = CartService::new(store.clone());
        service.add_to_cart(add_command("a", "Shirt", 10.0)).await.expect("Failed to add a");
        service.add_to_cart(add_command("b", "Mug", 5.5)).await.expect("Failed to add b");
        service.increment("a").await.expect("Failed to increment");

        // A fresh service over the same store sees the same cart after load
        let restored = CartService::new(store);
        assert!(restored.products().is_empty());

        restored.load().await;
        assert_eq!(restored.products(), service.products());
    }

    #[tokio::test]
    async fn test_load_without_saved_cart_starts_empty() {
        let service = setup_test();

        service.load().await;

        assert!(service.products().is_empty());
    }

    #[tokio::test]
    async fn test_load_replaces_in_memory_state() {
        let store = MemoryStore::new();

        let service = CartService::new(store.clone());
        service.add_to_cart(add_command("b", "Mug", 5.5)).await.expect("Failed to add b");

        // Another writer overwrites the saved cart with its own state
        let writer = CartService::new(store);
        writer.add_to_cart(add_command("a", "Shirt", 10.0)).await.expect("Failed to add a");

        // Loading replaces whatever was in memory with the saved state
        service.load().await;

        let products = service.products();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, "a");
    }
}
