//! Cart reshaping.

use crate::commerce::types::{Cart, CartCost, CartItem, CartMerchandise, Money};

use super::super::queries::{RawCart, RawCartCost, RawCartItem};
use super::products::flatten_product;

/// Reshape a cart: default the tax amount and flatten the line connection.
///
/// The platform omits `totalTaxAmount` for carts without a shipping address;
/// the storefront always gets a value (`0.0 USD` in that case). Products
/// inside cart lines are flattened but never filtered for visibility.
#[must_use]
pub fn reshape_cart(cart: RawCart) -> Cart {
    Cart {
        id: cart.id,
        checkout_url: cart.checkout_url,
        cost: reshape_cost(cart.cost),
        lines: cart
            .lines
            .into_nodes()
            .into_iter()
            .map(reshape_cart_item)
            .collect(),
        total_quantity: cart.total_quantity,
    }
}

fn reshape_cost(cost: RawCartCost) -> CartCost {
    CartCost {
        subtotal_amount: cost.subtotal_amount,
        total_amount: cost.total_amount,
        total_tax_amount: cost.total_tax_amount.unwrap_or_else(Money::zero_tax),
    }
}

fn reshape_cart_item(item: RawCartItem) -> CartItem {
    let merchandise = item.merchandise;

    CartItem {
        id: item.id,
        quantity: item.quantity,
        cost: item.cost,
        merchandise: CartMerchandise {
            id: merchandise.id,
            title: merchandise.title,
            selected_options: merchandise.selected_options,
            product: flatten_product(merchandise.product),
        },
    }
}
