//! DTO ⇄ domain mappers for cart types.

use shared::{AddItemRequest, CartItem, CartResponse};

use crate::domain::commands::cart::AddItemCommand;
use crate::domain::models::cart::CartItem as DomainCartItem;

pub struct CartMapper;

impl CartMapper {
    /// Convert a shared AddItemRequest to a domain AddItemCommand
    pub fn add_request_to_command(request: AddItemRequest) -> AddItemCommand {
        AddItemCommand {
            id: request.id,
            title: request.title,
            image_url: request.image_url,
            price: request.price,
        }
    }

    /// Convert a domain cart item to the shared CartItem DTO
    pub fn to_dto(domain: DomainCartItem) -> CartItem {
        CartItem {
            id: domain.id,
            title: domain.title,
            image_url: domain.image_url,
            price: domain.price,
            quantity: domain.quantity,
        }
    }

    /// Build the cart response rendered by UI components, including the
    /// aggregate unit count and subtotal.
    pub fn to_cart_response(items: Vec<DomainCartItem>) -> CartResponse {
        let total_quantity = items.iter().map(|item| item.quantity).sum();
        let subtotal = items.iter().map(|item| item.line_total()).sum();

        CartResponse {
            items: items.into_iter().map(Self::to_dto).collect(),
            total_quantity,
            subtotal,
        }
    }
}
