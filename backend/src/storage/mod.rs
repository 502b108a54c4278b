//! # Storage Module
//!
//! Handles cart persistence for the GoMarket shopping cart.
//!
//! This module abstracts away the specific storage implementation details
//! and provides a consistent interface for persisting and retrieving the
//! cart. The implementation can be swapped out (file-backed store,
//! in-memory store, platform key-value storage, etc.) without affecting
//! the domain logic or UI layers.
//!
//! ## Current Implementations
//!
//! - **JsonConnection**: file-backed key-value store, one JSON document per
//!   key under a base directory; the production backend
//! - **MemoryStore**: process-local key-value store for unit tests
//!
//! ## Design Principles
//!
//! - **Repository Pattern**: Clean separation between domain and data access
//! - **Dependency Inversion**: Domain depends on storage abstractions, not
//!   implementations
//! - **Testability**: In-memory implementation for unit testing

pub mod cart_repository;
pub mod json;
pub mod memory;
pub mod traits;

// Re-export the main types that other modules need
pub use cart_repository::{CartRepository, CART_STORAGE_KEY};
pub use json::JsonConnection;
pub use memory::MemoryStore;
pub use traits::{CartStorage, Connection, KeyValueStore};
