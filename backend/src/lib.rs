//! # GoMarket Cart Backend
//!
//! Contains all non-UI logic for the GoMarket shopping cart.
//!
//! This crate serves as the orchestration layer that brings together:
//! - **Domain**: Cart business rules and the in-memory cart state
//! - **Storage**: Local device persistence behind a key-value abstraction
//! - **IO**: Interface layer that exposes cart operations to the UI
//!
//! The backend is UI-agnostic, meaning it can back different frontend
//! frameworks (or a CLI) without modification. There is no server
//! interaction: the cart lives in memory and is mirrored to local storage
//! so it survives app restarts.
//!
//! ## Architecture
//!
//! The backend follows a layered architecture:
//! ```text
//! UI Layer (mobile client)
//!     ↓
//! IO Layer (CartApi, mappers)
//!     ↓
//! Domain Layer (CartService)
//!     ↓
//! Storage Layer (key-value persistence)
//! ```
//!
//! ## Key Responsibilities
//!
//! - Initialize and configure the application state
//! - Restore the persisted cart at startup
//! - Coordinate between domain logic and data persistence
//! - Provide a clean separation of concerns for maintainability

pub mod domain;
pub mod io;
pub mod storage;

use std::path::Path;

use anyhow::Result;
use log::info;

pub use domain::*;
pub use io::*;
pub use storage::*;

use crate::storage::json::JsonConnection;

/// Main application state that holds all services.
///
/// Constructed once by [`initialize_backend`] and handed to UI components
/// explicitly; there is no ambient global to reach for.
#[derive(Clone)]
pub struct AppState {
    pub cart_service: CartService<JsonConnection>,
}

/// Initialize the backend in the platform data directory.
pub async fn initialize_backend() -> Result<AppState> {
    let connection = JsonConnection::new_default()?;
    initialize_with_connection(connection).await
}

/// Initialize the backend against an explicit data directory.
///
/// Used by tests and by hosts that manage their own storage location.
pub async fn initialize_backend_with_directory<P: AsRef<Path>>(
    base_directory: P,
) -> Result<AppState> {
    let connection = JsonConnection::new(base_directory)?;
    initialize_with_connection(connection).await
}

async fn initialize_with_connection(connection: JsonConnection) -> Result<AppState> {
    info!("Setting up cart service");
    let cart_service = CartService::new(connection);

    info!("Restoring persisted cart");
    cart_service.load().await;

    Ok(AppState { cart_service })
}
