//! Round result types for settlement.

use alloc::vec::Vec;

use crate::card::Card;

/// Who took the round. Ties go to the dealer, so there is no push.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Dealer busted or finished below the player.
    PlayerWins,
    /// Player busted, or the dealer matched or beat the player.
    DealerWins,
}

impl RoundOutcome {
    /// Returns whether the player won.
    #[must_use]
    pub const fn player_won(self) -> bool {
        matches!(self, Self::PlayerWins)
    }
}

impl From<bool> for RoundOutcome {
    fn from(player_won: bool) -> Self {
        if player_won {
            Self::PlayerWins
        } else {
            Self::DealerWins
        }
    }
}

/// Result of a settled round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Who won.
    pub outcome: RoundOutcome,
    /// The player's final total.
    pub player_value: u8,
    /// The dealer's final total.
    pub dealer_value: u8,
    /// Whether the player busted.
    pub player_bust: bool,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Cards the dealer drew during settlement.
    pub dealer_drawn: Vec<Card>,
}

/// Balance change after a round has been paid out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settlement {
    /// The settled round.
    pub round: RoundResult,
    /// The wager placed on the round.
    pub bet: usize,
    /// Amount added to (win) or taken from (loss) the balance.
    pub amount: usize,
    /// Balance after payout.
    pub balance: usize,
}
