//! Shopping cart store for the LegalWise marketplace.
//!
//! In-memory cart state with derived totals, a command reducer, persistence
//! behind a pluggable key-value store, and the checkout hand-off to the
//! order backend.

mod cart;
mod catalog;
mod checkout;
mod kv;
mod store;

pub use cart::{Cart, CartCommand, CartItem};
pub use catalog::Book;
pub use checkout::{
    CheckoutDetails, CheckoutError, OrderGateway, OrderLine, OrderReceipt, OrderRequest,
    RecordingGateway, RecordingGatewayError,
};
#[cfg(feature = "http")]
pub use checkout::{HttpGatewayError, HttpOrderGateway};
pub use kv::{FileStore, InMemoryStore, KeyValueStore, StoreError};
pub use store::{CartStore, DEFAULT_CART_KEY};

// Re-export the EventEmitter from the event_emitter_rs crate
#[cfg(feature = "emitter")]
pub use event_emitter_rs::EventEmitter;
