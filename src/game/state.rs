//! Game state types.

/// Round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    /// Waiting for the next deal.
    #[default]
    WaitingForDeal,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Player is done; the dealer plays out and the round is settled.
    DealerTurn,
    /// Round has been settled.
    RoundOver,
}
