//! # memory-match
//!
//! Core of a memory-matching card game: a grid of face-down cards where the
//! player flips cards looking for pairs.
//!
//! ## Design Principles
//!
//! 1. **UI-Agnostic**: Cards expose a single `Activate` capability and
//!    render through the `Surface` trait. No toolkit is assumed.
//!
//! 2. **Explicit Ownership**: All game state lives in a `GameSession` value
//!    owned by the front-end. Nothing is global.
//!
//! 3. **Reproducible**: Shuffling goes through a seedable `GameRng`, so any
//!    deal can be replayed from its seed.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors
//! - `cards`: Symbols, cards and the flip state machine
//! - `deck`: Paired-symbol deck generation
//! - `board`: Dealt cards and display surfaces
//! - `session`: Game session and new-game lifecycle

pub mod core;
pub mod cards;
pub mod deck;
pub mod board;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Difficulty, GameConfig,
    GameRng, GameRngState,
    MatchError, Result,
};

pub use crate::cards::{Activate, Card, FaceState, FlipOutcome, Symbol};

pub use crate::deck::Deck;

pub use crate::board::{Board, HtmlSurface, Surface, TextSurface, STANDARD_CARD_COUNT};

pub use crate::session::GameSession;
