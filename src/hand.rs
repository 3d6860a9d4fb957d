//! Hand valuation and rendering.

use alloc::string::{String, ToString};

use crate::card::Card;

/// Highest total that is not a bust.
pub const BLACKJACK: u8 = 21;

/// Calculates the blackjack total of a set of cards.
///
/// Non-ace cards count at face value. Aces are then taken one at a time: an
/// ace counts 11 if that, plus 1 for every ace still to come, keeps the total
/// at or below 21, and counts 1 otherwise. The result may exceed 21.
///
/// # Example
///
/// ```
/// use blackjack_table::{Card, Rank, Suit, hand_value};
///
/// let hand = [
///     Card::new(Suit::Spades, Rank::Ace),
///     Card::new(Suit::Hearts, Rank::Nine),
///     Card::new(Suit::Clubs, Rank::Ace),
/// ];
/// assert_eq!(hand_value(&hand), 21);
/// ```
pub fn hand_value<'a>(cards: impl IntoIterator<Item = &'a Card>) -> u8 {
    let mut total: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.rank.is_ace() {
            aces += 1;
        } else {
            total = total.saturating_add(card.rank.value(true));
        }
    }

    for used in 0..aces {
        let remaining = aces - used - 1;
        if total.saturating_add(11).saturating_add(remaining) <= BLACKJACK {
            total += 11;
        } else {
            total = total.saturating_add(1);
        }
    }

    total
}

/// Returns whether the cards total more than 21.
pub fn is_bust<'a>(cards: impl IntoIterator<Item = &'a Card>) -> bool {
    hand_value(cards) > BLACKJACK
}

/// How a hand is shown on the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandView {
    /// Every card face up.
    Revealed,
    /// Only the first card face up, the rest shown as `??`.
    Masked,
}

/// Renders cards as `<suit><rank> ` pairs, e.g. `♠A ♥10 `.
///
/// With [`HandView::Masked`] every card after the first renders as `?? `.
pub fn render_hand<'a>(cards: impl IntoIterator<Item = &'a Card>, view: HandView) -> String {
    let mut output = String::new();

    for (index, card) in cards.into_iter().enumerate() {
        if view == HandView::Masked && index > 0 {
            output.push_str("?? ");
        } else {
            output.push_str(&card.to_string());
            output.push(' ');
        }
    }

    output
}
