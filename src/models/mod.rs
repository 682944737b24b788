mod auth;
mod chat;
mod games;
mod listing;
mod section;
mod session;

pub use auth::{AuthMode, AuthResponse, CredentialPayload};
pub use chat::ChatMessage;
pub use games::GameEntry;
pub use listing::{Listing, Post};
pub use section::Section;
pub use session::SessionState;
