use serde::{Deserialize, Serialize};

use crate::catalog::Book;

/// A catalog entry captured into the cart, plus the selected quantity.
///
/// Book fields are frozen at add-time; re-adding the same book bumps the
/// quantity but does not refresh them. Serializes flat, so the stored shape
/// is the book's fields with `quantity` alongside.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(flatten)]
    pub book: Book,
    pub quantity: u32,
}

impl CartItem {
    pub(crate) fn new(book: Book) -> Self {
        CartItem { book, quantity: 1 }
    }

    pub fn id(&self) -> &str {
        &self.book.id
    }

    /// Price times quantity for this line.
    pub fn line_total_cents(&self) -> u64 {
        u64::from(self.book.price_cents) * u64::from(self.quantity)
    }
}
