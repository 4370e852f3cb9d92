//! Feedback calculation for guesses.
//!
//! Scoring is two-pass and duplicate-safe:
//! - Exact pass: same symbol at the same position
//! - Misplaced pass: same symbol at a different position, where neither slot
//!   has already been matched
//!
//! Matched slots are tracked with index markers. The caller's combinations
//! are only ever read.

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};
use tracing::{instrument, trace};

use crate::core::{Combination, EngineError};

/// Result of scoring one guess.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Feedback {
    /// Symbols in the right position.
    pub exact: usize,
    /// Symbols present in the secret but in another position.
    pub misplaced: usize,
}

impl Feedback {
    /// Create feedback from raw counts.
    #[must_use]
    pub const fn new(exact: usize, misplaced: usize) -> Self {
        Self { exact, misplaced }
    }

    /// True when every one of `length` positions matched exactly.
    #[must_use]
    pub const fn is_solved(self, length: usize) -> bool {
        self.exact == length
    }

    /// Total symbols matched in either way.
    #[must_use]
    pub const fn total(self) -> usize {
        self.exact + self.misplaced
    }
}

impl std::fmt::Display for Feedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} exact, {} misplaced", self.exact, self.misplaced)
    }
}

type Consumed = SmallVec<[bool; 8]>;

/// Score `guess` against `secret`.
///
/// Returns `InvalidLength` if the two combinations differ in length.
///
/// Guess positions are visited left to right, and for each one the secret
/// positions left to right. The order decides which slots get paired when
/// several pairings are possible, but never the resulting counts.
#[instrument(level = "trace", skip_all)]
pub fn score(guess: &Combination, secret: &Combination) -> Result<Feedback, EngineError> {
    if guess.len() != secret.len() {
        return Err(EngineError::InvalidLength {
            expected: secret.len(),
            actual: guess.len(),
        });
    }

    let guess = guess.symbols();
    let secret = secret.symbols();
    let len = guess.len();

    let mut guess_used: Consumed = smallvec![false; len];
    let mut secret_used: Consumed = smallvec![false; len];

    let mut exact = 0;
    for i in 0..len {
        if guess[i] == secret[i] {
            exact += 1;
            guess_used[i] = true;
            secret_used[i] = true;
        }
    }

    let mut misplaced = 0;
    for i in 0..len {
        if guess_used[i] {
            continue;
        }
        for j in 0..len {
            if i == j || secret_used[j] {
                continue;
            }
            if guess[i] == secret[j] {
                misplaced += 1;
                guess_used[i] = true;
                secret_used[j] = true;
                break;
            }
        }
    }

    trace!(exact, misplaced, "scored guess");
    Ok(Feedback { exact, misplaced })
}
