//! Card definitions: rank, suit and classification.
//!
//! A `Card` is the immutable face value of a physical card. Which physical card
//! is meant is tracked separately by `CardId`.

use serde::{Deserialize, Serialize};

/// Card rank. Ace counts as 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Ace,
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
    Joker,
}

impl Rank {
    /// The ten numerical ranks, Ace first.
    pub const NUMERICAL: [Rank; 10] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
    ];

    /// J, Q, K. Jokers are dealt separately with their own suits.
    pub const COURT: [Rank; 3] = [Rank::Jack, Rank::Queen, Rank::King];

    /// Rank ordinal: Ace = 1 through Joker = 14.
    #[must_use]
    pub const fn ordinal(self) -> u32 {
        self as u32 + 1
    }

    /// Point value of a numerical rank, `None` for face ranks.
    #[must_use]
    pub const fn numeric_value(self) -> Option<u32> {
        if self.is_numerical() {
            Some(self.ordinal())
        } else {
            None
        }
    }

    /// A through 10.
    #[must_use]
    pub const fn is_numerical(self) -> bool {
        (self as u8) <= (Rank::Ten as u8)
    }

    /// J, Q, K and Joker.
    #[must_use]
    pub const fn is_face(self) -> bool {
        !self.is_numerical()
    }

    fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
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
            Rank::Joker => "Joker",
        }
    }
}

/// Card suit. Jokers carry one of the two joker colours instead of a French suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
    BlackJoker,
    RedJoker,
}

impl Suit {
    /// The four French suits.
    pub const STANDARD: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    fn label(self) -> &'static str {
        match self {
            Suit::Spades => "spades",
            Suit::Hearts => "hearts",
            Suit::Diamonds => "diamonds",
            Suit::Clubs => "clubs",
            Suit::BlackJoker => "black",
            Suit::RedJoker => "red",
        }
    }
}

/// Rank and suit of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    #[must_use]
    pub const fn is_numerical(self) -> bool {
        self.rank.is_numerical()
    }

    #[must_use]
    pub const fn is_face(self) -> bool {
        self.rank.is_face()
    }

    /// Point value for numerical cards, `None` for face cards.
    #[must_use]
    pub const fn numeric_value(self) -> Option<u32> {
        self.rank.numeric_value()
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.rank.label(), self.suit.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        for rank in Rank::NUMERICAL {
            assert!(rank.is_numerical());
            assert!(!rank.is_face());
        }
        for rank in [Rank::Jack, Rank::Queen, Rank::King, Rank::Joker] {
            assert!(rank.is_face());
            assert!(!rank.is_numerical());
        }
    }

    #[test]
    fn test_numeric_values() {
        assert_eq!(Rank::Ace.numeric_value(), Some(1));
        assert_eq!(Rank::Five.numeric_value(), Some(5));
        assert_eq!(Rank::Ten.numeric_value(), Some(10));
        assert_eq!(Rank::King.numeric_value(), None);
        assert_eq!(Rank::Joker.numeric_value(), None);
    }

    #[test]
    fn test_ordinal() {
        assert_eq!(Rank::Ace.ordinal(), 1);
        assert_eq!(Rank::Jack.ordinal(), 11);
        assert_eq!(Rank::Joker.ordinal(), 14);
    }

    #[test]
    fn test_display() {
        assert_eq!(Card::new(Rank::Ten, Suit::Hearts).to_string(), "10 hearts");
        assert_eq!(Card::new(Rank::Joker, Suit::RedJoker).to_string(), "Joker red");
    }

    #[test]
    fn test_serialization() {
        let card = Card::new(Rank::Queen, Suit::Clubs);
        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
    }
}
