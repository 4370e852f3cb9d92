//! Game configuration.
//!
//! A `GameConfig` fixes the three parameters of a game:
//! - `length`: symbols per combination (L)
//! - `alphabet_size`: symbols are drawn from `1..=alphabet_size` (K)
//! - `max_turns`: guesses allowed before the game is lost
//!
//! The engine never assumes the classic 4/6/10 values; they are only the
//! `Default`.

use serde::{Deserialize, Serialize};

use super::combination::{Combination, Symbol};
use super::error::EngineError;

/// Classic combination length.
pub const DEFAULT_LENGTH: usize = 4;
/// Classic number of colors.
pub const DEFAULT_ALPHABET_SIZE: Symbol = 6;
/// Classic turn limit.
pub const DEFAULT_MAX_TURNS: u32 = 10;

/// Parameters of a single game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of symbols in every combination.
    pub length: usize,

    /// Largest valid symbol. Symbols range over `1..=alphabet_size`.
    pub alphabet_size: Symbol,

    /// Number of guesses before the game is lost.
    pub max_turns: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            alphabet_size: DEFAULT_ALPHABET_SIZE,
            max_turns: DEFAULT_MAX_TURNS,
        }
    }
}

impl GameConfig {
    /// Create a validated configuration.
    pub fn new(length: usize, alphabet_size: Symbol, max_turns: u32) -> Result<Self, EngineError> {
        let config = Self {
            length,
            alphabet_size,
            max_turns,
        };
        config.validate()?;
        Ok(config)
    }

    /// Set the combination length.
    #[must_use]
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Set the alphabet size.
    #[must_use]
    pub fn with_alphabet_size(mut self, alphabet_size: Symbol) -> Self {
        self.alphabet_size = alphabet_size;
        self
    }

    /// Set the turn limit.
    #[must_use]
    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns;
        self
    }

    /// Check that every parameter is positive.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.length == 0 {
            return Err(EngineError::InvalidParameters("length must be positive".into()));
        }
        if self.alphabet_size == 0 {
            return Err(EngineError::InvalidParameters("alphabet size must be positive".into()));
        }
        if self.max_turns == 0 {
            return Err(EngineError::InvalidParameters("max turns must be positive".into()));
        }
        Ok(())
    }

    /// Check whether a symbol belongs to the alphabet.
    #[must_use]
    pub fn is_valid_symbol(&self, symbol: Symbol) -> bool {
        (1..=self.alphabet_size).contains(&symbol)
    }

    /// Check a candidate combination against this configuration.
    ///
    /// Length is checked first, then symbols left to right; the first
    /// failure is reported.
    pub fn validate_combination(&self, symbols: &[Symbol]) -> Result<(), EngineError> {
        if symbols.len() != self.length {
            return Err(EngineError::InvalidLength {
                expected: self.length,
                actual: symbols.len(),
            });
        }

        match symbols.iter().position(|&s| !self.is_valid_symbol(s)) {
            Some(position) => Err(EngineError::InvalidSymbol {
                position,
                symbol: symbols[position],
                alphabet_size: self.alphabet_size,
            }),
            None => Ok(()),
        }
    }

    /// Validate and build a combination.
    pub fn combination(&self, symbols: &[Symbol]) -> Result<Combination, EngineError> {
        self.validate_combination(symbols)?;
        Ok(Combination::from_slice(symbols))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_classic() {
        let config = GameConfig::default();
        assert_eq!(config.length, 4);
        assert_eq!(config.alphabet_size, 6);
        assert_eq!(config.max_turns, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::default()
            .with_length(5)
            .with_alphabet_size(8)
            .with_max_turns(12);

        assert_eq!(config, GameConfig::new(5, 8, 12).unwrap());
    }

    #[test]
    fn test_zero_parameters_rejected() {
        for (length, alphabet_size, max_turns) in [(0, 6, 10), (4, 0, 10), (4, 6, 0)] {
            let result = GameConfig::new(length, alphabet_size, max_turns);
            assert!(matches!(result, Err(EngineError::InvalidParameters(_))));
        }
    }

    #[test]
    fn test_symbol_range() {
        let config = GameConfig::default();
        assert!(!config.is_valid_symbol(0));
        assert!(config.is_valid_symbol(1));
        assert!(config.is_valid_symbol(6));
        assert!(!config.is_valid_symbol(7));
    }

    #[test]
    fn test_validate_combination() {
        let config = GameConfig::default();

        assert!(config.validate_combination(&[1, 2, 3, 4]).is_ok());
        assert_eq!(
            config.validate_combination(&[1, 2, 3]),
            Err(EngineError::InvalidLength { expected: 4, actual: 3 })
        );
        assert_eq!(
            config.validate_combination(&[1, 0, 9, 4]),
            Err(EngineError::InvalidSymbol { position: 1, symbol: 0, alphabet_size: 6 })
        );
        // Length wins over symbol errors
        assert!(matches!(
            config.validate_combination(&[0, 0]),
            Err(EngineError::InvalidLength { .. })
        ));
    }

    #[test]
    fn test_combination() {
        let config = GameConfig::default();
        let combo = config.combination(&[6, 5, 4, 3]).unwrap();
        assert_eq!(combo.symbols(), &[6, 5, 4, 3]);
        assert!(config.combination(&[7, 5, 4, 3]).is_err());
    }
}
