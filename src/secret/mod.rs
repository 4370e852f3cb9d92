//! Secret generator.
//!
//! Produces the hidden combination a session is played against. The RNG is
//! supplied by the caller; the generator itself is stateless.

mod generator;

pub use generator::{generate, generate_for};
