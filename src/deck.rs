use crate::cards::{Card, Rank, Suit};
use rand::seq::SliceRandom;
use rand::Rng;

/// A standard 52-card deck.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// All 52 cards in normalization order: `As Ah Ad Ac Ks ... 2c`.
    ///
    /// ```
    /// use canonical_flops::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// assert_eq!(deck.as_slice()[0].to_string(), "As");
    /// ```
    pub fn standard() -> Self {
        let cards = Rank::ALL
            .iter()
            .flat_map(|&r| Suit::ALL.into_iter().map(move |s| Card::new(r, s)))
            .collect();
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Pick the cards at the given positions.
    pub fn select(&self, indices: &[usize]) -> Vec<Card> {
        indices.iter().filter_map(|&i| self.cards.get(i).copied()).collect()
    }

    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Draw up to `n` cards from the top of the deck.
    pub fn draw_n(&mut self, n: usize) -> Vec<Card> {
        let at = self.cards.len().saturating_sub(n);
        self.cards.split_off(at)
    }
}
