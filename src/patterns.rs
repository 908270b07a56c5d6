//! Enumerate the distinct suit patterns of a fixed rank multiset.
//!
//! Instead of canonicalizing every card combination, the search assigns
//! suits rank by rank and only ever builds sequences that could be a
//! canonical representative:
//!
//! - cards of equal rank take strictly increasing suits, so no card is
//!   repeated and no reordering of the same cards is produced twice;
//! - a card may reuse a suit already seen or open the next unused suit in
//!   base order, never skip ahead.
//!
//! Survivors that are still equivalent are folded together by comparing
//! their [`SuitSignature`]s. Candidates come out in increasing key order,
//! so the first member of each class is its canonical key.

use crate::canon::CanonicalKey;
use crate::cards::{Card, Rank, Suit};
use crate::combinations::Multisets;
use crate::sequence::{CardSequence, SequenceError};
use std::collections::HashSet;

/// Per-suit rank lists of a hand, with the suits themselves forgotten.
///
/// Two hands with the same rank multiset are equivalent under suit
/// relabeling exactly when their signatures are equal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SuitSignature([Vec<Rank>; 4]);

impl SuitSignature {
    pub fn of(cards: &[Card]) -> Self {
        let mut groups: [Vec<Rank>; 4] = Default::default();
        for card in cards {
            groups[card.suit().ordinal()].push(card.rank());
        }
        for group in &mut groups {
            group.sort_unstable();
        }
        groups.sort_unstable();
        Self(groups)
    }
}

/// Every multiset of `k` ranks, each as a list sorted highest rank first.
///
/// ```
/// use canonical_flops::patterns::rank_multisets;
///
/// assert_eq!(rank_multisets(3).count(), 455);
/// ```
pub fn rank_multisets(k: usize) -> impl Iterator<Item = Vec<Rank>> {
    Multisets::new(Rank::ALL.len(), k).map(|ix| ix.into_iter().map(|i| Rank::ALL[i]).collect())
}

/// The canonical keys of every class realizable from `ranks`.
///
/// Returns an empty list when the multiset cannot be dealt from one deck
/// (a rank used more than four times).
///
/// ```
/// use canonical_flops::cards::Rank;
/// use canonical_flops::patterns::canonical_patterns;
///
/// let keys = canonical_patterns(&[Rank::Ace, Rank::Ace, Rank::King]).unwrap();
/// let keys: Vec<String> = keys.iter().map(|k| k.to_string()).collect();
/// assert_eq!(keys, ["AsAhKs", "AsAhKd"]);
/// ```
pub fn canonical_patterns(ranks: &[Rank]) -> Result<Vec<CanonicalKey>, SequenceError> {
    if ranks.is_empty() || ranks.len() > CardSequence::MAX_LEN {
        return Err(SequenceError::Length(ranks.len()));
    }
    let mut ranks = ranks.to_vec();
    ranks.sort_unstable();

    let mut search = PatternSearch { ranks: &ranks, seen: HashSet::new(), accepted: Vec::new() };
    search.extend(Vec::new(), 0);
    log::trace!("{} suit patterns for {:?}", search.accepted.len(), ranks);
    Ok(search.accepted.into_iter().map(CanonicalKey::from_sorted).collect())
}

struct PatternSearch<'a> {
    ranks: &'a [Rank],
    seen: HashSet<SuitSignature>,
    accepted: Vec<Vec<Card>>,
}

impl PatternSearch<'_> {
    /// `partial` is owned by this branch; siblings each get their own copy.
    fn extend(&mut self, partial: Vec<Card>, opened: usize) {
        let Some(&rank) = self.ranks.get(partial.len()) else {
            if self.seen.insert(SuitSignature::of(&partial)) {
                self.accepted.push(partial);
            }
            return;
        };

        let floor = match partial.last() {
            Some(prev) if prev.rank() == rank => prev.suit().ordinal() + 1,
            _ => 0,
        };
        let ceiling = (opened + 1).min(Suit::ALL.len());
        for &suit in Suit::ALL.get(floor..ceiling).unwrap_or_default() {
            let card = Card::new(rank, suit);
            let next: Vec<Card> = partial.iter().copied().chain(std::iter::once(card)).collect();
            self.extend(next, opened.max(suit.ordinal() + 1));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Rank::*;

    fn keys(ranks: &[Rank]) -> Vec<String> {
        canonical_patterns(ranks).unwrap().iter().map(|k| k.to_string()).collect()
    }

    #[test]
    fn trips_have_one_pattern() {
        assert_eq!(keys(&[Seven, Seven, Seven]), ["7s7h7d"]);
    }

    #[test]
    fn unpaired_flop_has_five_patterns() {
        assert_eq!(keys(&[Queen, Ace, King]), ["AsKsQs", "AsKsQh", "AsKhQs", "AsKhQh", "AsKhQd"]);
    }

    #[test]
    fn input_order_does_not_matter() {
        assert_eq!(keys(&[King, Ace, Ace]), keys(&[Ace, Ace, King]));
    }

    #[test]
    fn five_of_a_kind_is_unrealizable() {
        assert!(canonical_patterns(&[Two; 5]).unwrap().is_empty());
        assert_eq!(keys(&[Two; 4]), ["2s2h2d2c"]);
    }

    #[test]
    fn empty_multiset_is_a_length_error() {
        assert_eq!(canonical_patterns(&[]), Err(SequenceError::Length(0)));
    }

    #[test]
    fn signature_ignores_suit_names() {
        let a: CardSequence = "AcKdKc".parse().unwrap();
        let b: CardSequence = "AhKhKs".parse().unwrap();
        let c: CardSequence = "AhKsKd".parse().unwrap();
        assert_eq!(SuitSignature::of(a.as_slice()), SuitSignature::of(b.as_slice()));
        assert_ne!(SuitSignature::of(a.as_slice()), SuitSignature::of(c.as_slice()));
    }

    #[test]
    fn multisets_are_sorted_high_first() {
        let first = rank_multisets(3).next().unwrap();
        assert_eq!(first, [Ace, Ace, Ace]);
        assert!(rank_multisets(2).all(|m| m[0] <= m[1]));
        assert_eq!(rank_multisets(1).count(), 13);
    }
}
