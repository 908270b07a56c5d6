use super::{CanonicalKey, Canonicalizer};
use crate::cards::{Rank, Suit};
use crate::permutation::SuitPermutation;
use crate::sequence::CardSequence;
use core::cmp::Ordering;

/// Canonicalizer that picks the relabeling directly instead of trying all
/// 24 of them.
///
/// Cards are grouped by suit and the groups are ranked by [`precedence`];
/// the first group becomes spades, the second hearts, and so on. Sorting
/// suit groups this way is exactly the minimum the brute-force search
/// finds: viewed as a rank-by-suit presence table, the smallest encoding
/// puts the columns in decreasing order read from the Ace row down.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectAssignment;

impl DirectAssignment {
    /// The relabeling that sends `sequence` to its canonical form.
    pub fn permutation(&self, sequence: &CardSequence) -> SuitPermutation {
        let groups = SuitGroups::of(sequence);
        let mut order = Suit::ALL;
        order.sort_by(|a, b| {
            precedence(groups.ranks(*a), groups.ranks(*b)).then_with(|| a.cmp(b))
        });

        let mut images = Suit::ALL;
        for (target, source) in Suit::ALL.into_iter().zip(order) {
            images[source.ordinal()] = target;
        }
        SuitPermutation::from_images(images).unwrap_or_else(SuitPermutation::identity)
    }
}

impl Canonicalizer for DirectAssignment {
    fn canonicalize(&self, sequence: &CardSequence) -> CanonicalKey {
        let permutation = self.permutation(sequence);
        CanonicalKey::from_sorted(sequence.relabel(&permutation).sorted())
    }
}

/// Ranks held in each suit, highest first.
struct SuitGroups([Vec<Rank>; 4]);

impl SuitGroups {
    fn of(sequence: &CardSequence) -> Self {
        let mut groups: [Vec<Rank>; 4] = Default::default();
        for card in sequence.as_slice() {
            groups[card.suit().ordinal()].push(card.rank());
        }
        for group in &mut groups {
            group.sort_unstable();
        }
        Self(groups)
    }

    fn ranks(&self, suit: Suit) -> &[Rank] {
        &self.0[suit.ordinal()]
    }
}

/// Order two suit groups (ranks highest first). `Less` means `a` is
/// assigned the lower suit.
///
/// 1. The group holding the higher rank at the first difference wins.
/// 2. If one group is a prefix of the other, the longer group wins, which
///    also sends empty groups last.
///
/// Groups that still tie are interchangeable; the caller falls back to the
/// original suit ordinal so the permutation is deterministic.
pub(crate) fn precedence(a: &[Rank], b: &[Rank]) -> Ordering {
    a.iter()
        .zip(b)
        .map(|(x, y)| x.cmp(y))
        .find(|o| o.is_ne())
        .unwrap_or_else(|| b.len().cmp(&a.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canon::BruteForce;

    fn canon(s: &str) -> String {
        DirectAssignment.canonicalize_str(s).unwrap().to_string()
    }

    #[test]
    fn known_flops() {
        assert_eq!(canon("2sKd7h"), "Ks7h2d");
        assert_eq!(canon("7hQdQc"), "QsQh7d");
        assert_eq!(canon("JcQc2c"), "QsJs2s");
    }

    #[test]
    fn pair_sharing_a_suit_with_the_kicker() {
        // {A,K} in diamonds outranks {A} in clubs, so diamonds become spades.
        assert_eq!(canon("AcAdKd"), "AsAhKs");
        assert_eq!(canon("AdAcKc"), "AsAhKs");
    }

    #[test]
    fn high_card_beats_group_size() {
        // A bigger group does not win on its own: the lone Ace keeps spades.
        assert_eq!(canon("AsKhQh"), "AsKhQh");
        assert_eq!(canon("AsKhQh"), BruteForce.canonicalize_str("AsKhQh").unwrap().to_string());
    }

    #[test]
    fn precedence_rules() {
        use Rank::*;
        assert_eq!(precedence(&[Ace], &[King, Queen]), Ordering::Less);
        assert_eq!(precedence(&[Ace], &[Ace, King]), Ordering::Greater);
        assert_eq!(precedence(&[Two], &[]), Ordering::Less);
        assert_eq!(precedence(&[], &[]), Ordering::Equal);
        assert_eq!(precedence(&[King, Two], &[King, Three]), Ordering::Greater);
    }

    #[test]
    fn permutation_maps_to_the_canonical_form() {
        let seq: CardSequence = "Td9c8c".parse().unwrap();
        let p = DirectAssignment.permutation(&seq);
        assert_eq!(p.map(Suit::Diamonds), Suit::Spades);
        assert_eq!(p.map(Suit::Clubs), Suit::Hearts);
        assert_eq!(canon("Td9c8c"), "Ts9h8h");
    }

    #[test]
    fn agrees_with_brute_force_on_every_two_card_hand() {
        let deck = crate::deck::Deck::standard();
        let cards = deck.as_slice();
        for i in 0..cards.len() {
            for j in (i + 1)..cards.len() {
                let seq = CardSequence::from_slice(&[cards[i], cards[j]]).unwrap();
                assert_eq!(
                    DirectAssignment.canonicalize(&seq),
                    BruteForce.canonicalize(&seq),
                    "{seq}"
                );
            }
        }
    }
}
