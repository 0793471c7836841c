//! Card system: symbols, cards and the flip interaction.
//!
//! ## Key Types
//!
//! - `Symbol`: One of the distinct values pairs are formed from
//! - `Card`: A board position holding one symbol and a face state
//! - `FaceState`: `FaceDown` until activated, then `Flipped` for good
//! - `Activate`: The "clickable card" capability, independent of any UI

pub mod card;
pub mod symbol;

pub use card::{Activate, Card, FaceState, FlipOutcome};
pub use symbol::Symbol;
