//! Core types: RNG, configuration, errors.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{Difficulty, GameConfig};
pub use error::{MatchError, Result};
pub use rng::{GameRng, GameRngState};
