//! Game session state machine.
//!
//! A `GameSession` owns one secret and drives it through a turn-limited
//! sequence of guesses:
//!
//! ```text
//! InProgress(0) --guess--> InProgress(t) --all exact--> Won(t)
//!                                 |
//!                                 +--t == max_turns--> Lost(secret)
//! ```
//!
//! Terminal states reject further guesses with `SessionClosed`.

mod game;

pub use game::{GameSession, SessionState, Turn};
