use std::fmt;
use std::str::FromStr;

/// Rank symbols indexed by ordinal, Ace first.
pub const RANK_SYMBOLS: [char; 13] =
    ['A', 'K', 'Q', 'J', 'T', '9', '8', '7', '6', '5', '4', '3', '2'];

/// Suit symbols indexed by ordinal: spade < heart < diamond < club.
pub const SUIT_SYMBOLS: [char; 4] = ['s', 'h', 'd', 'c'];

/// Width of one card in the compact text encoding.
pub const CARD_WIDTH: usize = 2;

/// Card ranks in A-high order. The discriminant is the rank ordinal, so
/// `Rank::Ace < Rank::King` and sorting ascending puts the highest rank first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    Ace = 0,
    King = 1,
    Queen = 2,
    Jack = 3,
    Ten = 4,
    Nine = 5,
    Eight = 6,
    Seven = 7,
    Six = 8,
    Five = 9,
    Four = 10,
    Three = 11,
    Two = 12,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::King,
        Rank::Queen,
        Rank::Jack,
        Rank::Ten,
        Rank::Nine,
        Rank::Eight,
        Rank::Seven,
        Rank::Six,
        Rank::Five,
        Rank::Four,
        Rank::Three,
        Rank::Two,
    ];

    pub const fn ordinal(self) -> usize {
        self as usize
    }

    pub const fn to_char(self) -> char {
        RANK_SYMBOLS[self as usize]
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl TryFrom<char> for Rank {
    type Error = ParseError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'A' => Ok(Rank::Ace),
            'K' => Ok(Rank::King),
            'Q' => Ok(Rank::Queen),
            'J' => Ok(Rank::Jack),
            'T' => Ok(Rank::Ten),
            '9' => Ok(Rank::Nine),
            '8' => Ok(Rank::Eight),
            '7' => Ok(Rank::Seven),
            '6' => Ok(Rank::Six),
            '5' => Ok(Rank::Five),
            '4' => Ok(Rank::Four),
            '3' => Ok(Rank::Three),
            '2' => Ok(Rank::Two),
            _ => Err(ParseError::Rank(c)),
        }
    }
}

/// Four suits with a fixed base order used only to make output deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Suit {
    Spades = 0,
    Hearts = 1,
    Diamonds = 2,
    Clubs = 3,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    pub const fn ordinal(self) -> usize {
        self as usize
    }

    pub const fn to_char(self) -> char {
        SUIT_SYMBOLS[self as usize]
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl TryFrom<char> for Suit {
    type Error = ParseError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_lowercase() {
            's' => Ok(Suit::Spades),
            'h' => Ok(Suit::Hearts),
            'd' => Ok(Suit::Diamonds),
            'c' => Ok(Suit::Clubs),
            _ => Err(ParseError::Suit(c)),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseError {
    #[error("invalid rank: '{0}'")]
    Rank(char),
    #[error("invalid suit: '{0}'")]
    Suit(char),
    #[error("malformed card sequence: {0} characters is not a whole number of cards")]
    Width(usize),
}

/// A playing card: rank + suit.
///
/// The derived ordering is (rank ordinal, suit ordinal), which is the
/// normalization order every canonical form is sorted by.
///
/// ```
/// use canonical_flops::cards::{Card, Rank, Suit};
///
/// let card = Card::new(Rank::Ace, Suit::Spades);
/// assert_eq!(card.to_string(), "As");
/// assert!(card < Card::new(Rank::Ace, Suit::Hearts));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    pub const fn rank(self) -> Rank {
        self.rank
    }

    pub const fn suit(self) -> Suit {
        self.suit
    }

    /// Same rank, different suit.
    pub const fn with_suit(self, suit: Suit) -> Self {
        Self { rank: self.rank, suit }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl TryFrom<(char, char)> for Card {
    type Error = ParseError;
    fn try_from((rank, suit): (char, char)) -> Result<Self, Self::Error> {
        Ok(Card::new(Rank::try_from(rank)?, Suit::try_from(suit)?))
    }
}

impl FromStr for Card {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parse_compact(s)?.as_slice() {
            [card] => Ok(*card),
            _ => Err(ParseError::Width(s.trim().chars().count())),
        }
    }
}

/// Parse the compact `<rank><suit>` encoding with no separators.
///
/// ```
/// use canonical_flops::cards::{parse_compact, Card, Rank, Suit};
///
/// let cards = parse_compact("2sKd7h").unwrap();
/// assert_eq!(cards[1], Card::new(Rank::King, Suit::Diamonds));
/// assert!(parse_compact("2s9").is_err());
/// ```
pub fn parse_compact(input: &str) -> Result<Vec<Card>, ParseError> {
    let chars: Vec<char> = input.trim().chars().collect();
    if chars.len() % CARD_WIDTH != 0 {
        return Err(ParseError::Width(chars.len()));
    }
    chars.chunks_exact(CARD_WIDTH).map(|pair| Card::try_from((pair[0], pair[1]))).collect()
}
