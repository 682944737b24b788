//! Chat transcript entries.

use std::sync::atomic::{AtomicUsize, Ordering};

static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

/// A single message in the local chat transcript.
///
/// Messages are local to the page session; nothing is sent to or received
/// from a server.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    /// Unique id for efficient keying in For loops.
    pub id: usize,
    pub author: String,
    pub content: String,
}

impl ChatMessage {
    /// Build a message from the draft input; `None` when empty.
    pub fn from_draft(author: &str, content: &str) -> Option<Self> {
        if content.is_empty() {
            return None;
        }
        Some(Self {
            id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
            author: author.to_string(),
            content: content.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_draft_is_none() {
        assert!(ChatMessage::from_draft("ada", "").is_none());
    }

    #[test]
    fn test_message_fields() {
        let msg = ChatMessage::from_draft("ada", "hi all").unwrap();
        assert_eq!(msg.author, "ada");
        assert_eq!(msg.content, "hi all");
    }
}
