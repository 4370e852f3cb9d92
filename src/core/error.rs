//! Engine error type.

use super::combination::Symbol;

/// Error returned by engine operations.
///
/// Every variant is recoverable. An operation that fails leaves the
/// session exactly as it was before the call.
#[derive(Clone, Debug, PartialEq, Eq, derive_more::Display)]
pub enum EngineError {
    /// A combination has the wrong number of symbols.
    #[display("expected {expected} symbols, got {actual}")]
    InvalidLength {
        /// Length required by the game.
        expected: usize,
        /// Length that was supplied.
        actual: usize,
    },

    /// A symbol lies outside `1..=alphabet_size`.
    #[display("symbol {symbol} at position {} is not in 1..={alphabet_size}", position + 1)]
    InvalidSymbol {
        /// Zero-based position of the offending symbol.
        position: usize,
        /// The rejected value.
        symbol: Symbol,
        /// Largest valid symbol.
        alphabet_size: Symbol,
    },

    /// A guess was submitted after the game ended.
    #[display("the game is over")]
    SessionClosed,

    /// Length, alphabet size or turn limit is zero.
    #[display("invalid game parameters: {_0}")]
    InvalidParameters(String),
}

impl std::error::Error for EngineError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = EngineError::InvalidLength { expected: 4, actual: 3 };
        assert_eq!(err.to_string(), "expected 4 symbols, got 3");

        let err = EngineError::InvalidSymbol { position: 0, symbol: 7, alphabet_size: 6 };
        assert_eq!(err.to_string(), "symbol 7 at position 1 is not in 1..=6");

        assert_eq!(EngineError::SessionClosed.to_string(), "the game is over");

        let err = EngineError::InvalidParameters("length must be positive".into());
        assert_eq!(err.to_string(), "invalid game parameters: length must be positive");
    }
}
