//! # Domain Module
//!
//! Contains all business logic for the GoMarket shopping cart.
//!
//! This module encapsulates the rules that define how the cart is modeled
//! and mutated. It operates independently of any specific UI framework or
//! storage mechanism.
//!
//! ## Module Organization
//!
//! - **cart_service**: The in-memory cart state and its mutation operations
//! - **commands**: Internal command types consumed by the services
//! - **models**: Domain entities and their validation rules
//!
//! ## Core Concepts
//!
//! - **Cart item**: One product entry with an accumulated quantity
//! - **Cart**: The ordered collection of items for the current session,
//!   with at most one entry per product id
//!
//! ## Business Rules
//!
//! - Product ids are unique within the cart; adding a product twice
//!   increments its quantity instead of duplicating the entry
//! - Quantities never drop below one; decrementing past one removes the item
//! - Every mutation persists the full cart before returning
//! - Unknown product ids leave the cart untouched

pub mod cart_service;
pub mod commands;
pub mod models;

pub use cart_service::*;
pub use commands::*;
