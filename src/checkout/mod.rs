//! Checkout - mapping the cart into the backend's order-creation contract.
//!
//! The order backend is an external collaborator. This module owns the
//! request/receipt shapes (camelCase on the wire, matching `POST /orders/`)
//! and the [`OrderGateway`] seam; the hand-off itself lives in
//! [`crate::CartStore::checkout`].

mod gateway;
#[cfg(feature = "http")]
mod http;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cart::Cart;

/// One order line, as the backend expects it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub book_id: String,
    pub title: String,
    pub price_cents: u32,
    pub quantity: u32,
}

/// Buyer-supplied checkout fields, collected outside the cart store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckoutDetails {
    pub shipping_address: String,
    pub payment_method: String,
}

impl CheckoutDetails {
    pub fn new(shipping_address: impl Into<String>, payment_method: impl Into<String>) -> Self {
        CheckoutDetails {
            shipping_address: shipping_address.into(),
            payment_method: payment_method.into(),
        }
    }
}

/// The order-creation request body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub items: Vec<OrderLine>,
    pub total_amount_cents: u64,
    pub shipping_address: String,
    pub payment_method: String,
}

impl OrderRequest {
    /// Map the cart's current collection into an order request.
    pub fn from_cart(cart: &Cart, details: CheckoutDetails) -> Self {
        OrderRequest {
            items: cart
                .items()
                .iter()
                .map(|item| OrderLine {
                    book_id: item.book.id.clone(),
                    title: item.book.title.clone(),
                    price_cents: item.book.price_cents,
                    quantity: item.quantity,
                })
                .collect(),
            total_amount_cents: cart.total_amount_cents(),
            shipping_address: details.shipping_address,
            payment_method: details.payment_method,
        }
    }
}

/// What the backend returns for a created order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderReceipt {
    pub id: String,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Error type for the checkout hand-off. Validation failures never reach the
/// gateway; a gateway failure is retryable and leaves the cart untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutError<E> {
    EmptyCart,
    MissingShippingAddress,
    Gateway(E),
}

impl<E: fmt::Display> fmt::Display for CheckoutError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckoutError::EmptyCart => write!(f, "cannot check out an empty cart"),
            CheckoutError::MissingShippingAddress => {
                write!(f, "a shipping address is required for checkout")
            }
            CheckoutError::Gateway(err) => write!(f, "order creation failed: {}", err),
        }
    }
}

impl<E: fmt::Display + fmt::Debug> std::error::Error for CheckoutError<E> {}

pub use gateway::{OrderGateway, RecordingGateway, RecordingGatewayError};
#[cfg(feature = "http")]
pub use http::{HttpGatewayError, HttpOrderGateway};
