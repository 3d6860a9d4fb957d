//! Ordered card collections used for the draw pile and both hands.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::CollectionError;

/// An ordered sequence of cards.
///
/// Cards are drawn from the front and added to the back. The same type backs
/// the draw pile and the player and dealer hands, so a card dealt from the
/// pile is moved into a hand rather than copied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardCollection {
    cards: VecDeque<Card>,
}

impl CardCollection {
    /// Creates an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: VecDeque::new(),
        }
    }

    /// Creates a full, unshuffled 52-card set.
    ///
    /// Cards are ordered by suit (`♠ ♥ ♦ ♣`), then by rank (`2`..`10 J Q K A`).
    #[must_use]
    pub fn standard() -> Self {
        let mut cards = VecDeque::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push_back(Card::new(suit, rank));
            }
        }

        Self { cards }
    }

    /// Adds a card to the back of the collection.
    pub fn add(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Removes and returns the card at the front of the collection.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Empty`] if there are no cards.
    pub fn draw(&mut self) -> Result<Card, CollectionError> {
        self.cards.pop_front().ok_or(CollectionError::Empty)
    }

    /// Shuffles the collection `passes` times.
    ///
    /// Every pass swaps each position with a position picked uniformly from
    /// the whole collection. This is not a Fisher-Yates shuffle and its
    /// permutations are not uniformly distributed.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, passes: usize, rng: &mut R) {
        let len = self.cards.len();
        if len == 0 {
            return;
        }

        for _ in 0..passes {
            for src in 0..len {
                let dest = rng.random_range(0..len);
                self.cards.swap(src, dest);
            }
        }
    }

    /// Returns the point value of a single card.
    ///
    /// An ace counts 11 when `ace_is_high` is set and 1 otherwise.
    #[must_use]
    pub const fn value_of(&self, card: &Card, ace_is_high: bool) -> u8 {
        card.rank.value(ace_is_high)
    }

    /// Returns an ordered copy of the cards.
    ///
    /// The copy is independent: changing it never changes the collection.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Card> {
        self.cards.iter().copied().collect()
    }

    /// Iterates over the cards from front to back.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Removes every card.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

impl From<Vec<Card>> for CardCollection {
    fn from(cards: Vec<Card>) -> Self {
        Self {
            cards: cards.into(),
        }
    }
}

impl FromIterator<Card> for CardCollection {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a CardCollection {
    type Item = &'a Card;
    type IntoIter = alloc::collections::vec_deque::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
