//! # JSON Key-Value Connection
//!
//! File-backed key-value storage. Each key is stored as one document in its
//! own file under a base directory:
//!
//! ```text
//! <data directory>/
//! └── gomarket_cart.json    ← value stored under the "gomarket:cart" key
//! ```
//!
//! Writes go to a temporary file which is then renamed over the target, so
//! a crash mid-write never leaves a half-written document behind.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use async_trait::async_trait;
use log::{debug, info};

use crate::storage::cart_repository::CartRepository;
use crate::storage::traits::{Connection, KeyValueStore};

/// File-backed key-value store rooted at a base directory.
#[derive(Clone)]
pub struct JsonConnection {
    base_directory: PathBuf,
}

impl JsonConnection {
    /// Create a connection rooted at the given directory, creating the
    /// directory if it does not exist yet.
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path)?;
        }

        Ok(Self {
            base_directory: base_path,
        })
    }

    /// Create a connection in the platform data directory, under a
    /// `GoMarket` subdirectory.
    pub fn new_default() -> Result<Self> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine platform data directory"))?;

        let base_path = data_dir.join("GoMarket");
        info!("Using data directory: {}", base_path.display());

        Self::new(base_path)
    }

    /// Directory all keys are stored under.
    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// File path backing a storage key. Characters that cannot appear in
    /// file names are replaced with underscores.
    fn key_file_path(&self, key: &str) -> PathBuf {
        let file_name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();

        self.base_directory.join(format!("{}.json", file_name))
    }
}

#[async_trait]
impl KeyValueStore for JsonConnection {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_file_path(key);

        if !path.exists() {
            return Ok(None);
        }

        let value = fs::read_to_string(&path)?;
        Ok(Some(value))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.key_file_path(key);
        let temp_path = path.with_extension("json.tmp");

        // Write to a temporary file first, then atomically replace
        fs::write(&temp_path, value)?;
        fs::rename(&temp_path, &path)?;

        debug!("Wrote {} byte(s) to {}", value.len(), path.display());
        Ok(())
    }
}

impl Connection for JsonConnection {
    type CartRepository = CartRepository<JsonConnection>;

    fn create_cart_repository(&self) -> Self::CartRepository {
        CartRepository::new(self.clone())
    }
}
