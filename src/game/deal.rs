use tracing::{debug, warn};

use crate::error::DealError;
use crate::options::DeckPolicy;

use super::{Game, GameState};

/// Cards taken from the pile by the initial deal.
const INITIAL_DEAL: usize = 4;

impl Game {
    /// Deals two cards each to the player and the dealer.
    ///
    /// Cards are dealt alternately: player, dealer, player, dealer. Any cards
    /// left in either hand are discarded first.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not waiting for a deal or the pile
    /// holds fewer than four cards.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.state != GameState::WaitingForDeal {
            return Err(DealError::InvalidState);
        }

        if self.pile.len() < INITIAL_DEAL {
            return Err(DealError::NotEnoughCards);
        }

        self.player.clear();
        self.dealer.clear();

        for _ in 0..2 {
            self.player.add(self.pile.draw()?);
            self.dealer.add(self.pile.draw()?);
        }

        debug!(
            player = self.player_value(),
            up_card = ?self.dealer.iter().next(),
            remaining = self.pile.len(),
            "dealt initial hands"
        );

        if self.options.deck_policy == DeckPolicy::Shared && self.pile.len() < INITIAL_DEAL * 3 {
            warn!(remaining = self.pile.len(), "shared pile is running low");
        }

        self.state = GameState::PlayerTurn;

        Ok(())
    }
}
