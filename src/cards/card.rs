//! Playing cards and their wire form.
//!
//! A card is written as its suit symbol followed by its rank symbol:
//! `"♥A"`, `"♠10"`, `"♦Q"`. The masked (face-down) card is a blank suit
//! followed by `✪`. This text is both the serialized form and the display
//! form.
//!
//! ```
//! use blackjack_engine::cards::{Card, Rank, Suit};
//!
//! let card: Card = "♠10".parse().unwrap();
//! assert_eq!(card, Card::new(Suit::Spades, Rank::Ten));
//! assert_eq!(Card::masked().to_string(), " ✪");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Card suit. `Masked` only appears on the dealer's hidden hole card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
    Masked,
}

impl Suit {
    /// The four suits of a physical deck.
    pub const STANDARD: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    /// Wire symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
            Suit::Masked => " ",
        }
    }

    fn from_symbol(symbol: &str) -> Option<Self> {
        Self::STANDARD
            .into_iter()
            .chain([Suit::Masked])
            .find(|suit| suit.symbol() == symbol)
    }
}

/// Card rank. `Masked` only appears on the dealer's hidden hole card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
    Masked,
}

impl Rank {
    /// The thirteen ranks of a physical deck.
    pub const STANDARD: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Table value before soft-ace adjustment. Aces count 11, faces 10,
    /// the masked rank 0.
    #[must_use]
    pub const fn base_value(self) -> u32 {
        match self {
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
            Rank::Ace => 11,
            Rank::Masked => 0,
        }
    }

    /// Wire symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
            Rank::Masked => "✪",
        }
    }

    fn from_symbol(symbol: &str) -> Option<Self> {
        Self::STANDARD
            .into_iter()
            .chain([Rank::Masked])
            .find(|rank| rank.symbol() == symbol)
    }
}

/// An immutable playing card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    /// Create a card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// The face-down placeholder shown in place of the dealer's hole card.
    #[must_use]
    pub const fn masked() -> Self {
        Self::new(Suit::Masked, Rank::Masked)
    }

    /// Check if this is the face-down placeholder.
    #[must_use]
    pub fn is_masked(self) -> bool {
        self == Self::masked()
    }

    /// Table value of the rank.
    #[must_use]
    pub const fn base_value(self) -> u32 {
        self.rank.base_value()
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.suit.symbol(), self.rank.symbol())
    }
}

/// A string that is not a card wire form.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CardParseError {
    #[error("card string {0:?} is too short")]
    TooShort(String),

    #[error("invalid suit symbol {0:?}")]
    Suit(String),

    #[error("invalid rank symbol {0:?}")]
    Rank(String),
}

impl std::str::FromStr for Card {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Suit symbols are single chars but not single bytes.
        let mut chars = s.chars();
        let suit_char = chars.next().ok_or_else(|| CardParseError::TooShort(s.to_string()))?;
        let rank_symbol = chars.as_str();
        if rank_symbol.is_empty() {
            return Err(CardParseError::TooShort(s.to_string()));
        }

        let suit_symbol = suit_char.to_string();
        let suit = Suit::from_symbol(&suit_symbol).ok_or(CardParseError::Suit(suit_symbol))?;
        let rank = Rank::from_symbol(rank_symbol)
            .ok_or_else(|| CardParseError::Rank(rank_symbol.to_string()))?;

        Ok(Card::new(suit, rank))
    }
}

impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.to_string()
    }
}

impl TryFrom<String> for Card {
    type Error = CardParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
