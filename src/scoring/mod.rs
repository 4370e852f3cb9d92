//! Feedback scorer.
//!
//! Computes `(exact, misplaced)` for a guess against a secret without
//! counting any guess or secret slot twice.

mod feedback;

pub use feedback::{score, Feedback};
