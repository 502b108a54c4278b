//! # In-Memory Key-Value Store
//!
//! Process-local key-value storage for unit tests and prototyping. Values
//! are shared across clones and live only as long as the process.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use async_trait::async_trait;

use crate::storage::cart_repository::CartRepository;
use crate::storage::traits::{Connection, KeyValueStore};

/// In-memory key-value store, shared across clones.
#[derive(Clone, Default)]
pub struct MemoryStore {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.lock().unwrap().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl Connection for MemoryStore {
    type CartRepository = CartRepository<MemoryStore>;

    fn create_cart_repository(&self) -> Self::CartRepository {
        CartRepository::new(self.clone())
    }
}
