//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

use crate::models::GameEntry;

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the header.
pub const APP_NAME: &str = "agora";

// =============================================================================
// Network Configuration
// =============================================================================

/// Login endpoint (JSON body `{username, password}`).
pub const LOGIN_ENDPOINT: &str = "/login";

/// Registration endpoint (same body shape as login).
pub const REGISTER_ENDPOINT: &str = "/register";

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

// =============================================================================
// Game Library
// =============================================================================

/// The fixed game library rendered into the games panel at startup.
///
/// Entries are static: no backend serves this list, and the games panel
/// performs no network request.
pub const GAME_LIBRARY: &[GameEntry] = &[
    GameEntry::new("Run 3", "https://example.com/run3"),
    GameEntry::new("Happy Wheels", "https://example.com/happywheels"),
    GameEntry::new("Fireboy and Watergirl", "https://example.com/fireboywatergirl"),
    GameEntry::new("Slope", "https://example.com/slope"),
    GameEntry::new("Cut the Rope", "https://example.com/cuttherope"),
    GameEntry::new("Minecraft Classic", "https://example.com/minecraftclassic"),
];

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
