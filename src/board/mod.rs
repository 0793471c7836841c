//! The board: dealt cards and their rendering.
//!
//! A `Board` is built from one `Deck` and owns every card of a single game.
//! Starting another game builds a new board; cards are never carried over.
//!
//! ## Usage
//!
//! ```
//! use memory_match::board::{Board, TextSurface};
//! use memory_match::core::GameRng;
//! use memory_match::deck::Deck;
//!
//! let deck = Deck::standard(&mut GameRng::new(42));
//! let mut board = Board::deal(&deck);
//!
//! board.activate(0).unwrap();
//! assert_eq!(board.flipped_count(), 1);
//!
//! let mut surface = TextSurface::new(4);
//! board.render_to(&mut surface);
//! assert_eq!(surface.len(), 16);
//! ```

mod surface;

pub use surface::{HtmlSurface, Surface, TextSurface};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Activate, Card, FlipOutcome};
use crate::core::{MatchError, Result};
use crate::deck::Deck;

/// Card count of the standard 4x4 board.
pub const STANDARD_CARD_COUNT: usize = 16;

/// Cards of one game, in deal order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cards: SmallVec<[Card; STANDARD_CARD_COUNT]>,
}

impl Board {
    /// Create one face-down card per deck entry; `index` is the deal position.
    #[must_use]
    pub fn deal(deck: &Deck) -> Self {
        let cards = deck
            .iter()
            .enumerate()
            .map(|(index, value)| Card::new(value.clone(), index))
            .collect();
        Self { cards }
    }

    /// Activate the card at `index`.
    ///
    /// # Errors
    /// `CardOutOfRange` if no card sits at `index`.
    pub fn activate(&mut self, index: usize) -> Result<FlipOutcome> {
        let len = self.cards.len();
        self.cards
            .get_mut(index)
            .map(|card| card.activate())
            .ok_or(MatchError::CardOutOfRange { index, len })
    }

    /// Get the card at `index`.
    #[must_use]
    pub fn card(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// All cards in position order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the board has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of flipped cards.
    #[must_use]
    pub fn flipped_count(&self) -> usize {
        self.cards.iter().filter(|c| c.is_flipped()).count()
    }

    /// Replace everything on `surface` with this board's cards.
    pub fn render_to<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.clear();
        for card in &self.cards {
            surface.insert(card);
        }
    }
}
