//! Symbols and combinations.
//!
//! A `Combination` is an ordered, fixed-length sequence of symbols. The same
//! type is used for the hidden secret and for every guess. Once built it
//! cannot be modified; anything that needs scratch space (the scorer in
//! particular) works on its own copy or on index markers.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A single symbol ("color"), valid in `1..=alphabet_size`.
pub type Symbol = u8;

/// Inline capacity for combinations. Longer ones spill to the heap.
const INLINE_SYMBOLS: usize = 8;

/// An immutable ordered sequence of symbols.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Combination(SmallVec<[Symbol; INLINE_SYMBOLS]>);

impl Combination {
    /// Create a combination from a slice of symbols.
    ///
    /// No range check happens here; see `GameConfig::validate_combination`.
    #[must_use]
    pub fn from_slice(symbols: &[Symbol]) -> Self {
        Self(SmallVec::from_slice(symbols))
    }

    /// Number of symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for the zero-length combination.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Read-only view of the symbols.
    #[must_use]
    pub fn symbols(&self) -> &[Symbol] {
        &self.0
    }

    /// Symbol at `position`, if in bounds.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<Symbol> {
        self.0.get(position).copied()
    }
}

impl From<Vec<Symbol>> for Combination {
    fn from(symbols: Vec<Symbol>) -> Self {
        Self(SmallVec::from_vec(symbols))
    }
}

impl From<&[Symbol]> for Combination {
    fn from(symbols: &[Symbol]) -> Self {
        Self::from_slice(symbols)
    }
}

impl<const N: usize> From<[Symbol; N]> for Combination {
    fn from(symbols: [Symbol; N]) -> Self {
        Self::from_slice(&symbols)
    }
}

impl AsRef<[Symbol]> for Combination {
    fn as_ref(&self) -> &[Symbol] {
        &self.0
    }
}

impl std::fmt::Display for Combination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, symbol) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction() {
        let a = Combination::from([1, 2, 3, 4]);
        let b = Combination::from(vec![1, 2, 3, 4]);
        let c = Combination::from_slice(&[1, 2, 3, 4]);

        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(a.len(), 4);
        assert!(!a.is_empty());
        assert_eq!(a.symbols(), &[1, 2, 3, 4]);
        assert_eq!(a.get(2), Some(3));
        assert_eq!(a.get(4), None);
    }

    #[test]
    fn test_long_combination_spills() {
        let symbols: Vec<Symbol> = (1..=12).collect();
        let combo = Combination::from(symbols.clone());
        assert_eq!(combo.len(), 12);
        assert_eq!(combo.symbols(), symbols.as_slice());
    }

    #[test]
    fn test_display() {
        assert_eq!(Combination::from([1, 6, 6, 2]).to_string(), "1 6 6 2");
        assert_eq!(Combination::from_slice(&[]).to_string(), "");
    }

    #[test]
    fn test_serde() {
        let combo = Combination::from([3, 1, 4, 1]);
        let json = serde_json::to_string(&combo).unwrap();
        assert_eq!(json, "[3,1,4,1]");

        let restored: Combination = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, combo);
    }
}
