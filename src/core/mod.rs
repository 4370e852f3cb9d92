//! Core engine types: symbols, combinations, configuration, RNG, errors.
//!
//! Everything else in the crate is built from these.

pub mod combination;
pub mod config;
pub mod error;
pub mod rng;

pub use combination::{Combination, Symbol};
pub use config::{GameConfig, DEFAULT_ALPHABET_SIZE, DEFAULT_LENGTH, DEFAULT_MAX_TURNS};
pub use error::EngineError;
pub use rng::GameRng;
