//! Cards on the board and the flip interaction.
//!
//! Each card is a small state machine:
//!
//! ```text
//! FaceDown --activate--> Flipped --activate--> Flipped (no-op)
//! ```
//!
//! There is no transition back to `FaceDown`. A new game deals new cards.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::symbol::Symbol;

/// Visible state of a card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FaceState {
    /// Symbol hidden. Every card starts here.
    #[default]
    FaceDown,
    /// Symbol revealed. Terminal for this card.
    Flipped,
}

/// Result of activating a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlipOutcome {
    /// The card went from face-down to flipped.
    Flipped,
    /// The card was already flipped; nothing changed.
    AlreadyFlipped,
}

/// A clickable card capability.
///
/// Front-ends map their own input events (mouse click, key press, touch)
/// onto `activate`.
pub trait Activate {
    /// Handle one activation.
    fn activate(&mut self) -> FlipOutcome;
}

/// A card at a fixed board position.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Face value.
    pub value: Symbol,

    /// Position on the board, equal to its position in the dealt deck.
    pub index: usize,

    face: FaceState,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub fn new(value: Symbol, index: usize) -> Self {
        Self {
            value,
            index,
            face: FaceState::FaceDown,
        }
    }

    /// Current face state.
    #[must_use]
    pub fn face(&self) -> FaceState {
        self.face
    }

    /// Check if the card has been flipped.
    #[must_use]
    pub fn is_flipped(&self) -> bool {
        self.face == FaceState::Flipped
    }
}

impl Activate for Card {
    fn activate(&mut self) -> FlipOutcome {
        if self.is_flipped() {
            return FlipOutcome::AlreadyFlipped;
        }

        self.face = FaceState::Flipped;
        debug!(index = self.index, value = %self.value, "Card flipped");
        FlipOutcome::Flipped
    }
}
