use crate::cards::{parse_compact, Card, ParseError};
use crate::permutation::SuitPermutation;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SequenceError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("duplicate card in sequence: {0}")]
    DuplicateCard(Card),
    #[error("unsupported sequence length: {0} (expected 1..={max})", max = CardSequence::MAX_LEN)]
    Length(usize),
}

/// An ordered run of distinct cards, at least one and at most a full deck.
///
/// ```
/// use canonical_flops::sequence::{CardSequence, SequenceError};
///
/// let flop: CardSequence = "2sKd7h".parse().unwrap();
/// assert_eq!(flop.len(), 3);
/// assert!(matches!("2s2s4h".parse::<CardSequence>(), Err(SequenceError::DuplicateCard(_))));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CardSequence {
    cards: Vec<Card>,
}

impl CardSequence {
    pub const MAX_LEN: usize = 52;

    pub fn try_new(cards: Vec<Card>) -> Result<Self, SequenceError> {
        if cards.is_empty() {
            return Err(SequenceError::Length(0));
        }
        let mut seen = HashSet::with_capacity(cards.len());
        if let Some(dup) = cards.iter().find(|c| !seen.insert(**c)) {
            return Err(SequenceError::DuplicateCard(*dup));
        }
        if cards.len() > Self::MAX_LEN {
            return Err(SequenceError::Length(cards.len()));
        }
        Ok(Self { cards })
    }

    pub fn from_slice(cards: &[Card]) -> Result<Self, SequenceError> {
        Self::try_new(cards.to_vec())
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always false for a validated sequence. Pairs with `len`.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Cards in normalization order (rank ordinal, then suit ordinal).
    pub fn sorted(&self) -> Vec<Card> {
        let mut cards = self.cards.clone();
        cards.sort_unstable();
        cards
    }

    /// Image of this sequence under a suit relabeling. Relabeling is a
    /// bijection, so the result is still free of duplicates.
    pub fn relabel(&self, permutation: &SuitPermutation) -> Self {
        Self { cards: self.cards.iter().map(|c| permutation.apply(*c)).collect() }
    }

    /// Same cards in a different order; `order` holds source indices.
    pub fn reorder(&self, order: &[usize]) -> Result<Self, SequenceError> {
        let cards = order
            .iter()
            .map(|&i| self.cards.get(i).copied().ok_or(SequenceError::Length(i + 1)))
            .collect::<Result<Vec<_>, _>>()?;
        if cards.len() != self.cards.len() {
            return Err(SequenceError::Length(cards.len()));
        }
        Self::try_new(cards)
    }
}

impl FromStr for CardSequence {
    type Err = SequenceError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_new(parse_compact(s)?)
    }
}

impl fmt::Display for CardSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.cards.iter().try_for_each(|c| write!(f, "{c}"))
    }
}
