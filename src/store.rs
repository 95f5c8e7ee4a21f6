//! CartStore - the cart session: in-memory state plus its persistence key.
//!
//! Wraps a [`Cart`] with a [`KeyValueStore`] and one well-known key. Every
//! committed mutation serializes the full collection and overwrites that key
//! (full-overwrite, carts are tens of items at most). The in-memory cart is
//! authoritative for the session: a failed write is logged and swallowed, the
//! mutation that triggered it stands.
//!
//! Instances are single-owner and mutate through `&mut self`. Two instances
//! over the same key are last-writer-wins with no merge; acceptable for a
//! single user's personal cart, and stated here as a deliberate limitation.

#[cfg(feature = "emitter")]
use event_emitter_rs::EventEmitter;
use std::fmt;
use tracing::{debug, warn};

use crate::cart::{Cart, CartCommand, CartItem};
use crate::catalog::Book;
use crate::checkout::{CheckoutDetails, CheckoutError, OrderGateway, OrderReceipt, OrderRequest};
use crate::kv::{KeyValueStore, StoreError};

/// Storage key used by the marketplace front-end for the saved cart.
pub const DEFAULT_CART_KEY: &str = "legalwise_cart";

pub struct CartStore<S> {
    cart: Cart,
    store: S,
    key: String,
    #[cfg(feature = "emitter")]
    event_emitter: EventEmitter,
}

impl<S> fmt::Debug for CartStore<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("cart", &self.cart)
            .field("key", &self.key)
            .finish()
    }
}

impl<S: KeyValueStore> CartStore<S> {
    /// A store over the front-end's default cart key.
    pub fn new(store: S) -> Self {
        Self::with_key(store, DEFAULT_CART_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        CartStore {
            cart: Cart::new(),
            store,
            key: key.into(),
            #[cfg(feature = "emitter")]
            event_emitter: EventEmitter::new(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn items(&self) -> &[CartItem] {
        self.cart.items()
    }

    pub fn total_items(&self) -> u64 {
        self.cart.total_items()
    }

    pub fn total_amount_cents(&self) -> u64 {
        self.cart.total_amount_cents()
    }

    /// Rehydrate from the saved value under the store key.
    ///
    /// Absent value: start empty. Unreadable value: log a warning and start
    /// empty; a corrupt saved cart is never fatal. A store-level read failure
    /// is surfaced to the caller.
    pub fn load(&mut self) -> Result<(), StoreError> {
        let Some(raw) = self.store.get(&self.key)? else {
            self.cart = Cart::new();
            return Ok(());
        };

        match serde_json::from_str(&raw) {
            Ok(cart) => {
                self.cart = cart;
                debug!(key = %self.key, lines = self.cart.len(), "restored saved cart");
            }
            Err(err) => {
                warn!(key = %self.key, error = %err, "discarding unreadable saved cart");
                self.cart = Cart::new();
            }
        }
        Ok(())
    }

    /// Add one copy of a book. Existing line: quantity goes up by one, the
    /// captured book fields stay as they were. New line: appended at
    /// quantity 1. Always succeeds.
    pub fn add_item(&mut self, book: Book) {
        let id = book.id.clone();
        self.commit(CartCommand::Add(book));
        self.notify("ItemAdded", id);
    }

    /// Remove the line with the given id; no-op if absent.
    pub fn remove_item(&mut self, id: &str) {
        let existed = self.cart.contains(id);
        self.commit(CartCommand::Remove { id: id.to_string() });
        if existed {
            self.notify("ItemRemoved", id.to_string());
        }
    }

    /// Replace a line's quantity; zero removes the line, unknown ids are
    /// no-ops.
    pub fn set_quantity(&mut self, id: &str, quantity: u32) {
        let existed = self.cart.contains(id);
        self.commit(CartCommand::SetQuantity {
            id: id.to_string(),
            quantity,
        });
        if existed {
            if quantity == 0 {
                self.notify("ItemRemoved", id.to_string());
            } else {
                self.notify("QuantityUpdated", id.to_string());
            }
        }
    }

    /// Empty the cart and persist the empty collection.
    pub fn clear(&mut self) {
        self.commit(CartCommand::Clear);
        self.notify("CartCleared", String::new());
    }

    /// Serialize the collection and overwrite the storage key. Write
    /// failures are logged, not surfaced.
    pub fn persist(&self) {
        self.write_through();
    }

    /// Hand the cart to the order backend.
    ///
    /// An empty cart or a blank shipping address fails before the gateway is
    /// called. A gateway failure leaves the cart untouched so the user can
    /// retry; on success the cart is cleared and the empty collection
    /// persisted.
    pub fn checkout<G: OrderGateway>(
        &mut self,
        gateway: &mut G,
        details: CheckoutDetails,
    ) -> Result<OrderReceipt, CheckoutError<G::Error>> {
        if self.cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        if details.shipping_address.trim().is_empty() {
            return Err(CheckoutError::MissingShippingAddress);
        }

        let request = OrderRequest::from_cart(&self.cart, details);
        let receipt = gateway
            .create_order(&request)
            .map_err(CheckoutError::Gateway)?;

        debug!(order = %receipt.id, "order created, clearing cart");
        self.clear();
        Ok(receipt)
    }

    fn commit(&mut self, command: CartCommand) {
        self.cart.apply(command);
        if let Some(payload) = self.write_through() {
            self.notify("CartChanged", payload);
        }
    }

    fn write_through(&self) -> Option<String> {
        let payload = match serde_json::to_string(&self.cart) {
            Ok(payload) => payload,
            Err(err) => {
                warn!(key = %self.key, error = %err, "failed to serialize cart");
                return None;
            }
        };
        if let Err(err) = self.store.set(&self.key, &payload) {
            warn!(key = %self.key, error = %err, "failed to persist cart");
        }
        Some(payload)
    }

    #[cfg(feature = "emitter")]
    fn notify(&mut self, event: &str, data: String) {
        self.event_emitter.emit(event, data);
    }

    #[cfg(not(feature = "emitter"))]
    fn notify(&mut self, _event: &str, _data: String) {}
}

#[cfg(feature = "emitter")]
impl<S: KeyValueStore> CartStore<S> {
    /// Subscribe to cart events: `ItemAdded`, `ItemRemoved`,
    /// `QuantityUpdated`, `CartCleared`, and `CartChanged` (payload is the
    /// serialized collection).
    pub fn on<F>(&mut self, event: &str, listener: F)
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        self.event_emitter.on(event, listener);
    }
}
