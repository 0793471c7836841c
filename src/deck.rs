//! Deck generation.
//!
//! A deck is the full symbol set duplicated and shuffled, so every symbol
//! occurs exactly twice. Generation cannot fail once the symbol set has
//! been validated.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::Symbol;
use crate::core::GameRng;

/// A shuffled sequence of paired symbols.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    symbols: Vec<Symbol>,
}

impl Deck {
    /// Duplicate `symbols` and shuffle the result.
    #[must_use]
    pub fn generate(symbols: &[Symbol], rng: &mut GameRng) -> Self {
        let mut deck: Vec<Symbol> = symbols.iter().chain(symbols).cloned().collect();
        rng.shuffle(&mut deck);
        Self { symbols: deck }
    }

    /// Generate from the standard eight-symbol set.
    #[must_use]
    pub fn standard(rng: &mut GameRng) -> Self {
        Self::generate(&Symbol::default_set(), rng)
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Check if the deck has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbols in deal order.
    #[must_use]
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Iterate symbols in deal order.
    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.iter()
    }

    /// Occurrences of each symbol.
    #[must_use]
    pub fn symbol_counts(&self) -> FxHashMap<&Symbol, usize> {
        let mut counts = FxHashMap::default();
        for symbol in &self.symbols {
            *counts.entry(symbol).or_insert(0) += 1;
        }
        counts
    }

    /// Take the symbol sequence.
    #[must_use]
    pub fn into_inner(self) -> Vec<Symbol> {
        self.symbols
    }
}
