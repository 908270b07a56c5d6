pub mod brute;
pub mod direct;

pub use brute::BruteForce;
pub use direct::DirectAssignment;

use crate::cards::Card;
use crate::sequence::{CardSequence, SequenceError};
use std::fmt;

/// Representative of a card sequence's class under suit relabeling and
/// reordering. Equal keys denote equivalent hands.
///
/// The cards are kept in normalization order, so the derived ordering is
/// lexicographic over (rank ordinal, suit ordinal).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CanonicalKey(Vec<Card>);

impl CanonicalKey {
    /// Wrap cards that are already a canonical representative in
    /// normalization order.
    pub(crate) fn from_sorted(cards: Vec<Card>) -> Self {
        debug_assert!(cards.windows(2).all(|w| w[0] < w[1]));
        Self(cards)
    }

    pub fn cards(&self) -> &[Card] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false: a key holds at least one card. Pairs with `len`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Re-read the key as a sequence, e.g. to canonicalize it again.
    pub fn to_sequence(&self) -> Result<CardSequence, SequenceError> {
        CardSequence::from_slice(&self.0)
    }
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

/// Maps a card sequence to the representative of its equivalence class.
///
/// Implementations must agree with each other on every input; the
/// brute-force one is the reference.
pub trait Canonicalizer {
    fn canonicalize(&self, sequence: &CardSequence) -> CanonicalKey;

    /// Validate raw cards and canonicalize them.
    fn canonicalize_cards(&self, cards: &[Card]) -> Result<CanonicalKey, SequenceError> {
        Ok(self.canonicalize(&CardSequence::from_slice(cards)?))
    }

    /// Parse compact text and canonicalize it.
    ///
    /// ```
    /// use canonical_flops::canon::{BruteForce, Canonicalizer, DirectAssignment};
    ///
    /// assert_eq!(BruteForce.canonicalize_str("2sKd7h").unwrap().to_string(), "Ks7h2d");
    /// assert_eq!(DirectAssignment.canonicalize_str("7hQdQc").unwrap().to_string(), "QsQh7d");
    /// ```
    fn canonicalize_str(&self, input: &str) -> Result<CanonicalKey, SequenceError> {
        Ok(self.canonicalize(&input.parse()?))
    }
}
