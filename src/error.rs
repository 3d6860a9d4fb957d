//! Error types for game operations.

use alloc::string::String;

use thiserror::Error;

/// Errors raised by a card collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CollectionError {
    /// Drawing from a collection with no cards.
    #[error("unable to draw from an empty collection")]
    Empty,
}

/// Errors raised when reading a card from its printed form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    /// The rank symbol is not one of `2`..`10`, `J`, `Q`, `K`, `A`.
    #[error("unknown card rank {0:?}")]
    UnknownRank(String),
    /// The suit symbol is not one of `♠`, `♥`, `♦`, `♣`.
    #[error("unknown card suit {0:?}")]
    UnknownSuit(String),
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// Not enough cards in the pile.
    #[error("not enough cards in the pile")]
    NotEnoughCards,
}

impl From<CollectionError> for DealError {
    fn from(_: CollectionError) -> Self {
        Self::NotEnoughCards
    }
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// No cards left in the pile.
    #[error("no cards left in the pile")]
    NoCards,
}

impl From<CollectionError> for ActionError {
    fn from(_: CollectionError) -> Self {
        Self::NoCards
    }
}

/// Errors that can occur during settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// Invalid game state for settlement.
    #[error("invalid game state for settlement")]
    InvalidState,
    /// No cards left in the pile.
    #[error("no cards left in the pile")]
    NoCards,
}

impl From<CollectionError> for ShowdownError {
    fn from(_: CollectionError) -> Self {
        Self::NoCards
    }
}

/// Errors for a rejected wager. The session reprompts on all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// The input is not a whole number.
    #[error("bet is not a whole number")]
    NotANumber,
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// Bet is not strictly below the balance.
    #[error("bet of {bet} is not below the balance of {balance}")]
    ExceedsBalance {
        /// The rejected amount.
        bet: usize,
        /// The balance at the time of the bet.
        balance: usize,
    },
    /// Paying out the bet would overflow the balance.
    #[error("winnings on a bet of {bet} would overflow the balance")]
    PayoutTooLarge {
        /// The rejected amount.
        bet: usize,
    },
}

/// Unrecognised player command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown action {0:?}, expected `hit` or `stand`")]
pub struct ActionParseError(pub String);

/// Fatal errors that end a session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Reading input or writing output failed.
    #[error("console i/o failed")]
    Io(#[from] std::io::Error),
    /// The round could not be dealt.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// A player action failed.
    #[error(transparent)]
    Action(#[from] ActionError),
    /// The round could not be settled.
    #[error(transparent)]
    Showdown(#[from] ShowdownError),
}
