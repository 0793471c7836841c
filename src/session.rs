//! Game session: one player's sequence of games.
//!
//! `GameSession` is an explicitly owned value holding everything a running
//! game needs. Front-ends keep it and pass it by reference to their event
//! handlers; there is no process-wide state.
//!
//! ```
//! use memory_match::{GameConfig, GameSession};
//!
//! let mut session = GameSession::new(GameConfig::new().with_seed(42)).unwrap();
//! assert_eq!(session.board().len(), 16);
//!
//! session.activate(3).unwrap();
//! assert_eq!(session.board().flipped_count(), 1);
//!
//! session.new_game();
//! assert_eq!(session.board().flipped_count(), 0);
//! ```

use tracing::info;

use crate::board::{Board, Surface};
use crate::cards::FlipOutcome;
use crate::core::{Difficulty, GameConfig, GameRng, Result};
use crate::deck::Deck;

/// A running memory-match session.
#[derive(Clone, Debug)]
pub struct GameSession {
    config: GameConfig,
    rng: GameRng,
    deck: Deck,
    board: Board,

    // Displayed counters. Reset on every new game, not advanced yet.
    moves: u32,
    elapsed_secs: u32,

    games_started: u32,
}

impl GameSession {
    /// Validate `config`, seed the RNG and start the first game.
    ///
    /// # Errors
    /// Any `GameConfig::validate` error.
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        info!(seed = rng.seed(), symbols = config.symbols.len(), "Session created");

        let mut session = Self {
            config,
            rng,
            deck: Deck::default(),
            board: Board::default(),
            moves: 0,
            elapsed_secs: 0,
            games_started: 0,
        };
        session.new_game();
        Ok(session)
    }

    /// Discard the current board and deal a freshly shuffled one.
    pub fn new_game(&mut self) {
        info!(difficulty = %self.config.difficulty, "Starting new game");

        self.moves = 0;
        self.elapsed_secs = 0;

        self.deck = Deck::generate(&self.config.symbols, &mut self.rng);
        self.board = Board::deal(&self.deck);
        self.games_started += 1;

        info!(cards = self.board.len(), game = self.games_started, "Cards generated and shuffled");
    }

    /// Activate the card at `index` on the current board.
    ///
    /// # Errors
    /// `CardOutOfRange` if no card sits at `index`.
    pub fn activate(&mut self, index: usize) -> Result<FlipOutcome> {
        self.board.activate(index)
    }

    /// Record a difficulty selection.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.config.difficulty = difficulty;
    }

    /// Current difficulty.
    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.config.difficulty
    }

    /// Session configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Seed of the session RNG; replaying it reproduces every deal.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Deck of the current game.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Board of the current game.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Moves counter of the current game.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Elapsed seconds of the current game.
    #[must_use]
    pub fn elapsed(&self) -> u32 {
        self.elapsed_secs
    }

    /// Elapsed time as `MM:SS`.
    #[must_use]
    pub fn timer_display(&self) -> String {
        format!("{:02}:{:02}", self.elapsed_secs / 60, self.elapsed_secs % 60)
    }

    /// Number of games started in this session, including the current one.
    #[must_use]
    pub fn games_started(&self) -> u32 {
        self.games_started
    }

    /// Render the current board onto `surface`.
    pub fn render_to<S: Surface + ?Sized>(&self, surface: &mut S) {
        self.board.render_to(surface);
    }
}
