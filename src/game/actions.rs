use core::str::FromStr;

use alloc::string::ToString;

use tracing::debug;

use crate::card::Card;
use crate::error::{ActionError, ActionParseError};
use crate::hand::BLACKJACK;

use super::{Game, GameState};

/// A player decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    /// Take another card.
    Hit,
    /// Keep the current hand.
    Stand,
}

/// Accepts exactly `hit` or `stand`.
impl FromStr for PlayerAction {
    type Err = ActionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hit" => Ok(Self::Hit),
            "stand" => Ok(Self::Stand),
            other => Err(ActionParseError(other.to_string())),
        }
    }
}

impl Game {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.state != GameState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }
        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// A total above 21 ends the player's turn.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the pile is empty.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        let card = self.pile.draw()?;
        self.player.add(card);

        let value = self.player_value();
        debug!(%card, value, "player hits");

        if value > BLACKJACK {
            debug!(value, "player busts");
            self.state = GameState::DealerTurn;
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;

        debug!(value = self.player_value(), "player stands");
        self.state = GameState::DealerTurn;

        Ok(())
    }

    /// Applies a player decision.
    ///
    /// Returns the drawn card for [`PlayerAction::Hit`].
    ///
    /// # Errors
    ///
    /// See [`hit`](Self::hit) and [`stand`](Self::stand).
    pub fn act(&mut self, action: PlayerAction) -> Result<Option<Card>, ActionError> {
        match action {
            PlayerAction::Hit => self.hit().map(Some),
            PlayerAction::Stand => self.stand().map(|()| None),
        }
    }
}
