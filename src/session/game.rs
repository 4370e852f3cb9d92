//! Game session implementation.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::core::{Combination, EngineError, GameConfig, Symbol};
use crate::scoring::{score, Feedback};
use crate::secret::generate_for;

/// Externally visible state of a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// Accepting guesses.
    InProgress {
        /// Guesses accepted so far.
        turns_taken: u32,
    },
    /// The secret was found.
    Won {
        /// Turn on which the secret was found.
        turns_taken: u32,
    },
    /// Every turn was used without finding the secret.
    Lost {
        /// The secret, revealed.
        secret: Combination,
    },
}

impl SessionState {
    /// Check if no further guesses will be accepted.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, SessionState::InProgress { .. })
    }

    /// Check if the game was won.
    #[must_use]
    pub fn is_won(&self) -> bool {
        matches!(self, SessionState::Won { .. })
    }
}

/// One accepted guess and its feedback.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// 1-based turn number.
    pub number: u32,
    /// The guess as submitted.
    pub guess: Combination,
    /// Its score against the secret.
    pub feedback: Feedback,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Outcome {
    InProgress,
    Won,
    Lost,
}

/// A single game against one hidden combination.
///
/// The session is mutated exactly once per accepted guess. Rejected guesses
/// leave it untouched. Once won or lost, every further guess fails with
/// `SessionClosed`.
#[derive(Clone, Debug)]
pub struct GameSession {
    config: GameConfig,
    secret: Combination,
    turns_taken: u32,
    outcome: Outcome,
    history: Vec<Turn>,
}

impl GameSession {
    /// Start a new game with a secret drawn from `rng`.
    #[instrument(level = "debug", skip(rng))]
    pub fn new<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Result<Self, EngineError> {
        config.validate()?;
        let secret = generate_for(&config, rng)?;
        debug!("new session");
        Ok(Self::start(config, secret))
    }

    /// Start a new game against a known secret.
    ///
    /// The secret must satisfy `config` just like a guess.
    pub fn with_secret(config: GameConfig, secret: Combination) -> Result<Self, EngineError> {
        config.validate()?;
        config.validate_combination(secret.symbols())?;
        Ok(Self::start(config, secret))
    }

    fn start(config: GameConfig, secret: Combination) -> Self {
        Self {
            config,
            secret,
            turns_taken: 0,
            outcome: Outcome::InProgress,
            history: Vec::new(),
        }
    }

    /// Submit a guess.
    ///
    /// On success exactly one turn is consumed and the feedback is returned
    /// together with the state after the turn.
    #[instrument(level = "debug", skip(self), fields(turn = self.turns_taken + 1))]
    pub fn submit_guess(&mut self, guess: &[Symbol]) -> Result<(Feedback, SessionState), EngineError> {
        if self.outcome != Outcome::InProgress {
            return Err(EngineError::SessionClosed);
        }
        self.config.validate_combination(guess)?;

        let guess = Combination::from_slice(guess);
        let feedback = score(&guess, &self.secret)?;

        self.turns_taken += 1;
        self.outcome = if feedback.is_solved(self.config.length) {
            Outcome::Won
        } else if self.turns_taken >= self.config.max_turns {
            Outcome::Lost
        } else {
            Outcome::InProgress
        };
        self.history.push(Turn {
            number: self.turns_taken,
            guess,
            feedback,
        });

        match self.outcome {
            Outcome::Won => info!(turns = self.turns_taken, "secret found"),
            Outcome::Lost => info!(turns = self.turns_taken, "out of turns"),
            Outcome::InProgress => debug!(%feedback, "guess scored"),
        }

        Ok((feedback, self.state()))
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> SessionState {
        match self.outcome {
            Outcome::InProgress => SessionState::InProgress {
                turns_taken: self.turns_taken,
            },
            Outcome::Won => SessionState::Won {
                turns_taken: self.turns_taken,
            },
            Outcome::Lost => SessionState::Lost {
                secret: self.secret.clone(),
            },
        }
    }

    /// Game parameters.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Guesses accepted so far.
    #[must_use]
    pub fn turns_taken(&self) -> u32 {
        self.turns_taken
    }

    /// Guesses still allowed. Zero once the game is over.
    #[must_use]
    pub fn turns_remaining(&self) -> u32 {
        match self.outcome {
            Outcome::InProgress => self.config.max_turns - self.turns_taken,
            Outcome::Won | Outcome::Lost => 0,
        }
    }

    /// Check if the game has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome != Outcome::InProgress
    }

    /// Accepted turns, oldest first.
    #[must_use]
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    /// The secret, once the game is over.
    #[must_use]
    pub fn revealed_secret(&self) -> Option<&Combination> {
        self.is_over().then_some(&self.secret)
    }
}
