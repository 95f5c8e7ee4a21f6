use serde::{Deserialize, Serialize};

/// A purchasable catalog entry from the book marketplace.
///
/// Prices are integer cents so cart arithmetic stays exact.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    pub category: String,
    pub price_cents: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Book {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        category: impl Into<String>,
        price_cents: u32,
    ) -> Self {
        Book {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            category: category.into(),
            price_cents,
            cover_image: None,
            isbn: None,
            description: None,
        }
    }
}
