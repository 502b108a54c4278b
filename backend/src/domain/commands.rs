//! Domain-level command types.
//!
//! These structs are used by services inside the domain layer and are
//! **not** exposed to UI components. The io layer is responsible for
//! mapping the public DTOs defined in the `shared` crate to these
//! internal types.

pub mod cart {
    /// Input for adding a product to the cart.
    ///
    /// Quantity is absent on purpose: a product enters the cart at
    /// quantity one, and adding it again increments the existing entry.
    #[derive(Debug, Clone)]
    pub struct AddItemCommand {
        pub id: String,
        pub title: String,
        pub image_url: String,
        pub price: f64,
    }
}
