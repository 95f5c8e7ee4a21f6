use serde::{Deserialize, Serialize};

use super::CartItem;
use crate::catalog::Book;

/// Commands accepted by [`Cart::apply`].
#[derive(Clone, Debug, PartialEq)]
pub enum CartCommand {
    /// Add one copy of a book, appending a new line or bumping an existing one.
    Add(Book),
    /// Drop the line with the given book id, if present.
    Remove { id: String },
    /// Replace a line's quantity. Zero removes the line.
    SetQuantity { id: String, quantity: u32 },
    /// Empty the cart.
    Clear,
}

/// An ordered collection of [`CartItem`]s, unique by book id.
///
/// Every line holds `quantity >= 1`; a transition that would drop a line
/// below 1 removes it instead. Insertion order is preserved. Totals are
/// derived on every read, never stored. Serializes transparently as the bare
/// item array, which is also the persisted layout.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Cart::default()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Number of distinct lines (not the summed quantity).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&CartItem> {
        self.items.iter().find(|item| item.book.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Apply one command. Total: unknown ids are no-ops, not errors.
    pub fn apply(&mut self, command: CartCommand) {
        match command {
            CartCommand::Add(book) => self.add(book),
            CartCommand::Remove { id } => self.remove(&id),
            CartCommand::SetQuantity { id, quantity } => self.set_quantity(&id, quantity),
            CartCommand::Clear => self.clear(),
        }
    }

    pub fn add(&mut self, book: Book) {
        if let Some(item) = self.items.iter_mut().find(|item| item.book.id == book.id) {
            item.quantity = item.quantity.saturating_add(1);
        } else {
            self.items.push(CartItem::new(book));
        }
    }

    pub fn remove(&mut self, id: &str) {
        self.items.retain(|item| item.book.id != id);
    }

    pub fn set_quantity(&mut self, id: &str, quantity: u32) {
        if quantity == 0 {
            self.remove(id);
            return;
        }
        if let Some(item) = self.items.iter_mut().find(|item| item.book.id == id) {
            item.quantity = quantity;
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of quantities across all lines.
    pub fn total_items(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Sum of `price_cents * quantity` across all lines.
    pub fn total_amount_cents(&self) -> u64 {
        self.items.iter().map(CartItem::line_total_cents).sum()
    }
}
