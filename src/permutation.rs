use crate::cards::{Card, Suit};
use std::fmt;

use Suit::{Clubs as C, Diamonds as D, Hearts as H, Spades as S};

/// A bijection over the four suits, stored as the image of each suit
/// ordinal: `s -> P[0]`, `h -> P[1]`, `d -> P[2]`, `c -> P[3]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SuitPermutation([Suit; 4]);

impl SuitPermutation {
    /// Every element of the suit permutation group.
    pub const ALL: [SuitPermutation; 24] = [
        Self([S, H, D, C]),
        Self([S, H, C, D]),
        Self([S, D, H, C]),
        Self([S, D, C, H]),
        Self([S, C, H, D]),
        Self([S, C, D, H]),
        Self([H, S, D, C]),
        Self([H, S, C, D]),
        Self([H, D, S, C]),
        Self([H, D, C, S]),
        Self([H, C, S, D]),
        Self([H, C, D, S]),
        Self([D, S, H, C]),
        Self([D, S, C, H]),
        Self([D, H, S, C]),
        Self([D, H, C, S]),
        Self([D, C, S, H]),
        Self([D, C, H, S]),
        Self([C, S, H, D]),
        Self([C, S, D, H]),
        Self([C, H, S, D]),
        Self([C, H, D, S]),
        Self([C, D, S, H]),
        Self([C, D, H, S]),
    ];

    pub const fn identity() -> Self {
        Self(Suit::ALL)
    }

    /// Build from explicit images; `None` unless every suit appears once.
    pub fn from_images(images: [Suit; 4]) -> Option<Self> {
        let mut seen = [false; 4];
        for s in images {
            if std::mem::replace(&mut seen[s.ordinal()], true) {
                return None;
            }
        }
        Some(Self(images))
    }

    pub const fn map(&self, suit: Suit) -> Suit {
        self.0[suit as usize]
    }

    pub const fn apply(&self, card: Card) -> Card {
        card.with_suit(self.map(card.suit()))
    }

    pub fn inverse(&self) -> Self {
        let mut images = Suit::ALL;
        for s in Suit::ALL {
            images[self.map(s).ordinal()] = s;
        }
        Self(images)
    }
}

impl fmt::Display for SuitPermutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for s in Suit::ALL {
            write!(f, "{}{}", s, self.map(s))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank;
    use std::collections::HashSet;

    #[test]
    fn group_has_24_distinct_bijections() {
        let unique: HashSet<_> = SuitPermutation::ALL.iter().collect();
        assert_eq!(unique.len(), 24);
        for p in SuitPermutation::ALL {
            assert_eq!(SuitPermutation::from_images(p.0), Some(p));
        }
    }

    #[test]
    fn identity_fixes_every_suit() {
        let id = SuitPermutation::identity();
        for s in Suit::ALL {
            assert_eq!(id.map(s), s);
        }
        assert_eq!(SuitPermutation::ALL[0], id);
    }

    #[test]
    fn from_images_rejects_non_bijections() {
        assert!(SuitPermutation::from_images([S, S, D, C]).is_none());
    }

    #[test]
    fn apply_keeps_rank() {
        let p = SuitPermutation::from_images([C, S, H, D]).unwrap();
        let card = Card::new(Rank::Queen, Suit::Spades);
        assert_eq!(p.apply(card), Card::new(Rank::Queen, Suit::Clubs));
        assert_eq!(p.to_string(), "schsdhcd");
    }

    #[test]
    fn inverse_undoes_apply() {
        for p in SuitPermutation::ALL {
            let inv = p.inverse();
            for s in Suit::ALL {
                assert_eq!(inv.map(p.map(s)), s);
            }
        }
    }
}
