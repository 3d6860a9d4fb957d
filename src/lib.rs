//! A single-player console blackjack engine.
//!
//! The crate provides a [`Game`] type that runs one round at a time (deal,
//! hit or stand, dealer play, settlement) and a [`Session`] that repeats
//! rounds over a text console while keeping the player's balance.
//!
//! # Example
//!
//! ```no_run
//! use std::io;
//!
//! use blackjack_table::{Game, GameOptions, Session};
//!
//! let game = Game::new(GameOptions::default(), 42);
//! let mut session = Session::new(game, io::stdin().lock(), io::stdout());
//! let _ = session.run();
//! ```

extern crate alloc;

pub mod card;
pub mod collection;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod session;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit, value_of_symbol};
pub use collection::CardCollection;
pub use error::{
    ActionError, ActionParseError, BetError, CardError, CollectionError, DealError, SessionError,
    ShowdownError,
};
pub use game::{Game, GameState, PlayerAction, resolve};
pub use hand::{BLACKJACK, HandView, hand_value, is_bust, render_hand};
pub use options::{DeckPolicy, GameOptions};
pub use result::{RoundOutcome, RoundResult, Settlement};
pub use session::{Session, SessionEnd, parse_bet, winnings_for};
