//! Command-line interface and input parsing for the `mastermind` binary.

use clap::Parser;
use mastermind_engine::core::{Symbol, DEFAULT_ALPHABET_SIZE, DEFAULT_LENGTH, DEFAULT_MAX_TURNS};

/// Mastermind - guess the hidden combination
#[derive(Parser, Debug)]
#[command(name = "mastermind")]
#[command(about = "Play Mastermind in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Symbols per combination
    #[arg(short, long, default_value_t = DEFAULT_LENGTH)]
    pub length: usize,

    /// Number of colors; symbols range over 1..=COLORS
    #[arg(short, long, default_value_t = DEFAULT_ALPHABET_SIZE)]
    pub colors: Symbol,

    /// Guesses allowed per game
    #[arg(short = 't', long, default_value_t = DEFAULT_MAX_TURNS)]
    pub max_turns: u32,

    /// RNG seed. Random when omitted, and then printed so a run can be replayed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Player name. Prompted for when omitted
    #[arg(short, long)]
    pub name: Option<String>,
}

/// A line typed by the player.
#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    /// Leave the game.
    Quit,
    /// Nothing but whitespace.
    Blank,
    /// A guess, not yet checked against the game's parameters.
    Guess(Vec<Symbol>),
}

/// A line that could not be read as a guess.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ParseGuessError {
    /// A token is not a small non-negative integer.
    #[display("'{_0}' is not a symbol number")]
    NotASymbol(String),
}

impl std::error::Error for ParseGuessError {}

/// Parse one input line.
///
/// Symbols may be separated by spaces, commas or both: `1 2 3 4`,
/// `1,2,3,4` and `1, 2, 3, 4` are the same guess.
pub fn parse_input(line: &str) -> Result<Input, ParseGuessError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Input::Blank);
    }
    if matches!(line.to_ascii_lowercase().as_str(), "q" | "quit" | "exit") {
        return Ok(Input::Quit);
    }

    line.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<Symbol>()
                .map_err(|_| ParseGuessError::NotASymbol(token.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Input::Guess)
}
