//! Card types and rank valuation.

use core::fmt;
use core::str::FromStr;

use alloc::string::{String, ToString};

use crate::error::CardError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// All suits in the order a fresh set is built.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Diamonds, Self::Clubs];

    /// Returns the printed symbol of the suit.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Spades => '♠',
            Self::Hearts => '♥',
            Self::Diamonds => '♦',
            Self::Clubs => '♣',
        }
    }

    const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '♠' => Some(Self::Spades),
            '♥' => Some(Self::Hearts),
            '♦' => Some(Self::Diamonds),
            '♣' => Some(Self::Clubs),
            _ => None,
        }
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    /// 2.
    Two,
    /// 3.
    Three,
    /// 4.
    Four,
    /// 5.
    Five,
    /// 6.
    Six,
    /// 7.
    Seven,
    /// 8.
    Eight,
    /// 9.
    Nine,
    /// 10.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
}

impl Rank {
    /// All ranks in the order a fresh set is built.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Returns the printed symbol of the rank (`2`..`10`, `J`, `Q`, `K`, `A`).
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Ace => "A",
        }
    }

    /// Returns the point value of the rank.
    ///
    /// Digit ranks count at face value, faces count 10, and an ace counts 11
    /// when `ace_is_high` is set and 1 otherwise.
    #[must_use]
    pub const fn value(self, ace_is_high: bool) -> u8 {
        match self {
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
            Self::Seven => 7,
            Self::Eight => 8,
            Self::Nine => 9,
            Self::Ten | Self::Jack | Self::Queen | Self::King => 10,
            Self::Ace => {
                if ace_is_high {
                    11
                } else {
                    1
                }
            }
        }
    }

    /// Returns whether the rank is an ace.
    #[must_use]
    pub const fn is_ace(self) -> bool {
        matches!(self, Self::Ace)
    }
}

impl FromStr for Rank {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|rank| rank.symbol() == s)
            .ok_or_else(|| CardError::UnknownRank(s.to_string()))
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.suit.symbol(), self.rank.symbol())
    }
}

/// Parses the printed form of a card, e.g. `♠A` or `♦10`.
impl FromStr for Card {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let symbol = chars
            .next()
            .ok_or_else(|| CardError::UnknownSuit(String::new()))?;
        let suit =
            Suit::from_symbol(symbol).ok_or_else(|| CardError::UnknownSuit(symbol.to_string()))?;
        let rank = chars.as_str().parse()?;
        Ok(Self::new(suit, rank))
    }
}

/// Values a rank given by its printed symbol.
///
/// # Errors
///
/// Returns [`CardError::UnknownRank`] if the symbol is not one of `2`..`10`,
/// `J`, `Q`, `K` or `A`.
///
/// # Example
///
/// ```
/// use blackjack_table::value_of_symbol;
///
/// assert_eq!(value_of_symbol("7", true), Ok(7));
/// assert_eq!(value_of_symbol("A", false), Ok(1));
/// assert!(value_of_symbol("1", true).is_err());
/// ```
pub fn value_of_symbol(symbol: &str, ace_is_high: bool) -> Result<u8, CardError> {
    symbol.parse::<Rank>().map(|rank| rank.value(ace_is_high))
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
