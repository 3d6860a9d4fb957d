use alloc::vec::Vec;

use tracing::{debug, info};

use crate::card::Card;
use crate::collection::CardCollection;
use crate::error::{CollectionError, ShowdownError};
use crate::hand::{BLACKJACK, hand_value};
use crate::result::{RoundOutcome, RoundResult};

use super::{Game, GameState};

/// Draws for the dealer while its total is at or below `hits_through`.
///
/// Returns the cards drawn.
fn dealer_draw(
    pile: &mut CardCollection,
    dealer: &mut CardCollection,
    hits_through: u8,
) -> Result<Vec<Card>, CollectionError> {
    let mut drawn = Vec::new();

    while hand_value(&*dealer) <= hits_through {
        let card = pile.draw()?;
        dealer.add(card);
        drawn.push(card);
        debug!(%card, value = hand_value(&*dealer), "dealer hits");
    }

    Ok(drawn)
}

fn play_out(
    pile: &mut CardCollection,
    player: &CardCollection,
    dealer: &mut CardCollection,
    hits_through: u8,
) -> Result<(RoundOutcome, Vec<Card>), CollectionError> {
    let player_value = hand_value(player);

    // A busted player loses before the dealer draws.
    if player_value > BLACKJACK {
        return Ok((RoundOutcome::DealerWins, Vec::new()));
    }

    let drawn = dealer_draw(pile, dealer, hits_through)?;
    let dealer_value = hand_value(&*dealer);
    let player_won = dealer_value > BLACKJACK || dealer_value < player_value;

    Ok((RoundOutcome::from(player_won), drawn))
}

/// Plays out the dealer's hand and decides the round.
///
/// A busted player loses and the dealer does not draw. Otherwise the dealer
/// draws while its total is at or below `dealer_hits_through`, and the player
/// wins if the dealer busts or finishes below the player. Ties go to the
/// dealer.
///
/// Returns `true` if the player won.
///
/// # Errors
///
/// Returns [`CollectionError::Empty`] if the pile runs out while the dealer
/// must draw.
pub fn resolve(
    pile: &mut CardCollection,
    player: &CardCollection,
    dealer: &mut CardCollection,
    dealer_hits_through: u8,
) -> Result<bool, CollectionError> {
    play_out(pile, player, dealer, dealer_hits_through).map(|(outcome, _)| outcome.player_won())
}

impl Game {
    /// Dealer plays their hand and the round is settled.
    ///
    /// # Errors
    ///
    /// Returns an error if the player's turn is not over or the pile is empty
    /// while the dealer must draw.
    pub fn settle(&mut self) -> Result<RoundResult, ShowdownError> {
        if self.state != GameState::DealerTurn {
            return Err(ShowdownError::InvalidState);
        }

        let (outcome, dealer_drawn) = play_out(
            &mut self.pile,
            &self.player,
            &mut self.dealer,
            self.options.dealer_hits_through,
        )?;

        self.state = GameState::RoundOver;

        let player_value = self.player_value();
        let dealer_value = self.dealer_value();
        info!(?outcome, player_value, dealer_value, "round settled");

        Ok(RoundResult {
            outcome,
            player_value,
            dealer_value,
            player_bust: player_value > BLACKJACK,
            dealer_bust: dealer_value > BLACKJACK,
            dealer_drawn,
        })
    }
}
