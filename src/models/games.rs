//! Static game library entries.

/// One entry in the fixed game library.
///
/// Entries are compile-time constants (see `config::GAME_LIBRARY`); nothing
/// creates, mutates, or removes them at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameEntry {
    pub name: &'static str,
    pub url: &'static str,
}

impl GameEntry {
    pub const fn new(name: &'static str, url: &'static str) -> Self {
        Self { name, url }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GAME_LIBRARY;

    #[test]
    fn test_library_is_the_fixed_set() {
        let names: Vec<&str> = GAME_LIBRARY.iter().map(|g| g.name).collect();
        assert_eq!(
            names,
            [
                "Run 3",
                "Happy Wheels",
                "Fireboy and Watergirl",
                "Slope",
                "Cut the Rope",
                "Minecraft Classic",
            ]
        );
    }

    #[test]
    fn test_library_urls_absolute() {
        for entry in GAME_LIBRARY {
            assert!(entry.url.starts_with("https://"), "{}", entry.name);
        }
    }
}
