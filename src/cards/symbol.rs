//! Card symbols.

use serde::{Deserialize, Serialize};

/// The eight symbols of the standard 4x4 board.
const DEFAULT_SYMBOLS: [&str; 8] = ["🎮", "🎯", "🎨", "🎭", "🎪", "🎸", "🎺", "🎹"];

/// A card face value. Two cards with equal symbols form a pair.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// Create a symbol from any displayable text.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The standard symbol set, one entry per pair.
    #[must_use]
    pub fn default_set() -> Vec<Symbol> {
        DEFAULT_SYMBOLS.iter().copied().map(Symbol::new).collect()
    }

    /// Get the symbol text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Symbol {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_set_distinct() {
        let mut set = Symbol::default_set();
        assert_eq!(set.len(), 8);

        set.sort();
        set.dedup();
        assert_eq!(set.len(), 8);
    }

    #[test]
    fn test_display_and_conversions() {
        let symbol = Symbol::from("🎮");
        assert_eq!(symbol.as_str(), "🎮");
        assert_eq!(format!("{}", symbol), "🎮");
        assert_eq!(Symbol::from(String::from("🎮")), symbol);
    }

    #[test]
    fn test_serde_transparent() {
        let json = serde_json::to_string(&Symbol::new("A")).unwrap();
        assert_eq!(json, "\"A\"");

        let back: Symbol = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Symbol::new("A"));
    }
}
