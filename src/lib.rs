//! # mastermind-engine
//!
//! A code-breaking game engine: a hidden combination is drawn, guesses are
//! scored against it, and a turn-limited state machine decides whether the
//! player wins or loses.
//!
//! ## Design Principles
//!
//! 1. **Parameterized**: Length, alphabet size and turn limit are chosen
//!    per game. Nothing assumes the classic 4 symbols / 6 colors / 10 turns.
//!
//! 2. **Owned State**: Each `GameSession` owns its secret and counters.
//!    There is no global game state and no internal locking.
//!
//! 3. **No Partial Turns**: A guess is either fully validated and scored,
//!    or rejected with no observable change.
//!
//! ## Modules
//!
//! - `core`: Symbols, combinations, configuration, RNG, errors
//! - `secret`: Secret generation
//! - `scoring`: Duplicate-aware feedback scoring
//! - `session`: Game session state machine
//!
//! ## Example
//!
//! ```
//! use mastermind_engine::{Combination, GameConfig, GameSession, SessionState};
//!
//! let secret = Combination::from([1, 2, 2, 3]);
//! let mut session = GameSession::with_secret(GameConfig::default(), secret).unwrap();
//!
//! let (feedback, state) = session.submit_guess(&[2, 2, 1, 1]).unwrap();
//! assert_eq!((feedback.exact, feedback.misplaced), (1, 2));
//! assert_eq!(state, SessionState::InProgress { turns_taken: 1 });
//! ```

pub mod core;
pub mod scoring;
pub mod secret;
pub mod session;

// Re-export commonly used types
pub use crate::core::{Combination, EngineError, GameConfig, GameRng, Symbol};
pub use crate::scoring::{score, Feedback};
pub use crate::secret::{generate, generate_for};
pub use crate::session::{GameSession, SessionState, Turn};
