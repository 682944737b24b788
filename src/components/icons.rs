//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuGamepad2 as Games, LuLogOut as Logout, LuMessageCircle as Chat,
        LuMessageSquare as Comment, LuPlay as Play, LuPlus as Plus, LuSend as Send,
        LuStore as Marketplace, LuThumbsDown as Dislike, LuThumbsUp as Like, LuUser as User,
        LuUsers as Community,
    };
}

mod bootstrap {
    pub use icondata::{
        BsBoxArrowRight as Logout, BsChatDots as Chat, BsChatLeftText as Comment,
        BsController as Games, BsHandThumbsDown as Dislike, BsHandThumbsUp as Like,
        BsPeople as Community, BsPerson as User, BsPlayFill as Play, BsPlusLg as Plus,
        BsSend as Send, BsShop as Marketplace,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(USER, User);
themed_icon!(LOGOUT, Logout);
themed_icon!(CHAT, Chat);
themed_icon!(MARKETPLACE, Marketplace);
themed_icon!(COMMUNITY, Community);
themed_icon!(GAMES, Games);
themed_icon!(LIKE, Like);
themed_icon!(DISLIKE, Dislike);
themed_icon!(COMMENT, Comment);
themed_icon!(PLAY, Play);
themed_icon!(PLUS, Plus);
themed_icon!(SEND, Send);
