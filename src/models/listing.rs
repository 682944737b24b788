//! Marketplace listings and community posts.
//!
//! Both are transient: created from form input, held in a signal for the
//! lifetime of the page, never persisted or synchronized with a backend.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Monotonic id source for `<For>` keying.
static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

fn next_id() -> usize {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

/// A marketplace listing created from the listing form.
///
/// Price stays as entered text; no parsing or currency handling happens
/// client-side.
#[derive(Clone, Debug, PartialEq)]
pub struct Listing {
    /// Unique id for efficient keying in For loops.
    pub id: usize,
    pub name: String,
    pub price: String,
    pub category: String,
}

impl Listing {
    /// Build a listing from form fields.
    ///
    /// Returns `None` unless name and price are both non-empty; category is
    /// optional. No uniqueness check, no identity beyond the render key.
    pub fn from_fields(name: &str, price: &str, category: &str) -> Option<Self> {
        if name.is_empty() || price.is_empty() {
            return None;
        }
        Some(Self {
            id: next_id(),
            name: name.to_string(),
            price: price.to_string(),
            category: category.to_string(),
        })
    }
}

/// A community post created from the composer textarea.
#[derive(Clone, Debug, PartialEq)]
pub struct Post {
    /// Unique id for efficient keying in For loops.
    pub id: usize,
    pub content: String,
    pub likes: u32,
    pub dislikes: u32,
}

impl Post {
    /// Build a post from the composer content; `None` when empty.
    pub fn from_content(content: &str) -> Option<Self> {
        if content.is_empty() {
            return None;
        }
        Some(Self {
            id: next_id(),
            content: content.to_string(),
            likes: 0,
            dislikes: 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_requires_name_and_price() {
        assert!(Listing::from_fields("", "50", "Sports").is_none());
        assert!(Listing::from_fields("Bike", "", "Sports").is_none());
        assert!(Listing::from_fields("", "", "").is_none());
    }

    #[test]
    fn test_listing_category_optional() {
        let listing = Listing::from_fields("Bike", "50", "").unwrap();
        assert_eq!(listing.name, "Bike");
        assert_eq!(listing.price, "50");
        assert_eq!(listing.category, "");
    }

    #[test]
    fn test_listing_ids_distinct() {
        let a = Listing::from_fields("Bike", "50", "Sports").unwrap();
        let b = Listing::from_fields("Bike", "50", "Sports").unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_post_requires_content() {
        assert!(Post::from_content("").is_none());
        let post = Post::from_content("hello").unwrap();
        assert_eq!(post.content, "hello");
        assert_eq!(post.likes, 0);
        assert_eq!(post.dislikes, 0);
    }
}
