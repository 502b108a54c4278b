//! # IO Module
//!
//! Interface layer that exposes cart functionality to UI components.
//!
//! UI code holds a [`CartApi`] and talks to it in terms of the DTOs from
//! the `shared` crate; this module maps those to and from the domain
//! layer. The handle is passed into components explicitly rather than
//! looked up through an ambient global.

pub mod api;
pub mod mappers;

pub use api::*;
pub use mappers::*;
