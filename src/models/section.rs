//! Top-level content sections of the main application view.

/// One of the mutually exclusive content panels shown while signed in.
///
/// Exactly one section is active at a time; the main view renders only the
/// panel matching the active variant, so the "one visible" invariant holds
/// by construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Section {
    #[default]
    Chat,
    Marketplace,
    Community,
    Games,
}

impl Section {
    /// All sections, in nav-bar order.
    pub const ALL: [Section; 4] = [
        Section::Chat,
        Section::Marketplace,
        Section::Community,
        Section::Games,
    ];

    /// Stable identifier used in markup and event wiring.
    pub fn id(&self) -> &'static str {
        match self {
            Section::Chat => "chat",
            Section::Marketplace => "marketplace",
            Section::Community => "community",
            Section::Games => "games",
        }
    }

    /// Human-readable nav label.
    pub fn label(&self) -> &'static str {
        match self {
            Section::Chat => "Chat",
            Section::Marketplace => "Marketplace",
            Section::Community => "Community",
            Section::Games => "Games",
        }
    }

    /// Parse a section identifier.
    ///
    /// Unknown identifiers yield `None`; callers treat that as a no-op
    /// rather than an error.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::from_id(section.id()), Some(section));
        }
    }

    #[test]
    fn test_unknown_id_is_none() {
        assert_eq!(Section::from_id("dashboard"), None);
        assert_eq!(Section::from_id(""), None);
        // Labels are not identifiers
        assert_eq!(Section::from_id("Marketplace"), None);
    }

    #[test]
    fn test_default_is_chat() {
        assert_eq!(Section::default(), Section::Chat);
    }
}
