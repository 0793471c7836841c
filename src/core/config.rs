//! Game configuration types.
//!
//! A session is configured at startup by providing:
//! - The symbol set that pairs are formed from
//! - The selected `Difficulty`
//! - An optional seed for reproducible deals
//!
//! Configuration can be built in code or loaded from TOML:
//!
//! ```
//! use memory_match::core::{Difficulty, GameConfig};
//!
//! let config = GameConfig::from_toml(r#"
//!     symbols = ["A", "B", "C", "D"]
//!     difficulty = "hard"
//!     seed = 7
//! "#).unwrap();
//!
//! assert_eq!(config.symbols.len(), 4);
//! assert_eq!(config.difficulty, Difficulty::Hard);
//! assert_eq!(config.seed, Some(7));
//! ```

use std::path::Path;
use std::str::FromStr;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::error::{MatchError, Result};
use crate::cards::Symbol;

/// Difficulty selection.
///
/// Recorded and reported only. Grid size is the same for every level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Lower-case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(MatchError::UnknownDifficulty(other.to_string())),
        }
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Distinct symbols; each is dealt exactly twice.
    pub symbols: Vec<Symbol>,

    /// Selected difficulty.
    pub difficulty: Difficulty,

    /// Fixed seed. `None` draws a fresh seed from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            symbols: Symbol::default_set(),
            difficulty: Difficulty::default(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create the default configuration (eight symbols, easy, unseeded).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the symbol set.
    #[must_use]
    pub fn with_symbols<I, S>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Symbol>,
    {
        self.symbols = symbols.into_iter().map(Into::into).collect();
        self
    }

    /// Set the difficulty.
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Fix the seed for reproducible deals.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the symbol set is non-empty and free of duplicates.
    ///
    /// # Errors
    /// `EmptySymbolSet` or `DuplicateSymbol`.
    pub fn validate(&self) -> Result<()> {
        if self.symbols.is_empty() {
            return Err(MatchError::EmptySymbolSet);
        }

        let mut seen = FxHashSet::default();
        for symbol in &self.symbols {
            if !seen.insert(symbol) {
                return Err(MatchError::DuplicateSymbol(symbol.clone()));
            }
        }
        Ok(())
    }

    /// Number of cards a deal with this configuration produces.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.symbols.len() * 2
    }

    /// Load configuration from a TOML string.
    ///
    /// Missing keys fall back to the defaults.
    ///
    /// # Errors
    /// `Config` if the TOML is invalid, or any `validate` error.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: Self = toml::from_str(toml_str).map_err(|e| MatchError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();

        assert_eq!(config.symbols.len(), 8);
        assert_eq!(config.card_count(), 16);
        assert_eq!(config.difficulty, Difficulty::Easy);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::new()
            .with_symbols(["A", "B", "C"])
            .with_difficulty(Difficulty::Medium)
            .with_seed(99);

        assert_eq!(config.symbols, vec![Symbol::new("A"), Symbol::new("B"), Symbol::new("C")]);
        assert_eq!(config.card_count(), 6);
        assert_eq!(config.difficulty, Difficulty::Medium);
        assert_eq!(config.seed, Some(99));
    }

    #[test]
    fn test_validate_empty() {
        let config = GameConfig::new().with_symbols(Vec::<Symbol>::new());
        assert!(matches!(config.validate(), Err(MatchError::EmptySymbolSet)));
    }

    #[test]
    fn test_validate_duplicate() {
        let config = GameConfig::new().with_symbols(["A", "B", "A"]);

        match config.validate() {
            Err(MatchError::DuplicateSymbol(s)) => assert_eq!(s.as_str(), "A"),
            other => panic!("expected duplicate error, got {:?}", other),
        }
    }

    #[test]
    fn test_difficulty_parse() {
        assert_eq!("easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert_eq!("medium".parse::<Difficulty>().unwrap(), Difficulty::Medium);
        assert_eq!("hard".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert!(matches!(
            "expert".parse::<Difficulty>(),
            Err(MatchError::UnknownDifficulty(_))
        ));
        assert_eq!(format!("{}", Difficulty::Hard), "hard");
    }

    #[test]
    fn test_from_toml_partial() {
        let config = GameConfig::from_toml("difficulty = \"medium\"").unwrap();

        assert_eq!(config.difficulty, Difficulty::Medium);
        assert_eq!(config.symbols, Symbol::default_set());
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_from_toml_invalid() {
        assert!(matches!(
            GameConfig::from_toml("symbols = 3"),
            Err(MatchError::Config(_))
        ));
        assert!(matches!(
            GameConfig::from_toml("symbols = [\"X\", \"X\"]"),
            Err(MatchError::DuplicateSymbol(_))
        ));
    }

    #[test]
    fn test_from_file_missing() {
        let result = GameConfig::from_file(Path::new("/nonexistent/memory-match.toml"));
        assert!(matches!(result, Err(MatchError::Io(_))));
    }
}
