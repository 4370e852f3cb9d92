//! Secret generation.

use rand::Rng;
use tracing::{instrument, trace};

use crate::core::{Combination, EngineError, GameConfig, Symbol};

/// Draw `length` symbols independently and uniformly from `1..=alphabet_size`.
///
/// Symbols are sampled with replacement, so repeats are expected. The
/// result depends only on the RNG's state.
#[instrument(level = "trace", skip(rng))]
pub fn generate<R: Rng + ?Sized>(
    length: usize,
    alphabet_size: Symbol,
    rng: &mut R,
) -> Result<Combination, EngineError> {
    if length == 0 {
        return Err(EngineError::InvalidParameters("length must be positive".into()));
    }
    if alphabet_size == 0 {
        return Err(EngineError::InvalidParameters("alphabet size must be positive".into()));
    }

    let symbols: Vec<Symbol> = (0..length).map(|_| rng.gen_range(1..=alphabet_size)).collect();
    trace!(length, alphabet_size, "secret drawn");
    Ok(Combination::from(symbols))
}

/// Draw a secret shaped by `config`.
pub fn generate_for<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Result<Combination, EngineError> {
    generate(config.length, config.alphabet_size, rng)
}
