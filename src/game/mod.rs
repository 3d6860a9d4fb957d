//! Round engine.

use alloc::format;
use alloc::string::String;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::collection::CardCollection;
use crate::hand::{HandView, hand_value, render_hand};
use crate::options::{DeckPolicy, GameOptions};

mod actions;
mod deal;
mod dealer;
pub mod state;

pub use actions::PlayerAction;
pub use dealer::resolve;
pub use state::GameState;

/// A single-player blackjack table.
///
/// The game owns the draw pile, both hands and the random number generator
/// used to shuffle. A round runs [`deal`](Self::deal), then
/// [`hit`](Self::hit) / [`stand`](Self::stand), then [`settle`](Self::settle),
/// and [`clear_round`](Self::clear_round) prepares the next one.
#[derive(Debug, Clone)]
pub struct Game {
    /// Cards left to draw. Dealing takes cards from the front.
    pub pile: CardCollection,
    /// Game options.
    pub options: GameOptions,
    state: GameState,
    player: CardCollection,
    dealer: CardCollection,
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with a freshly shuffled pile.
    ///
    /// The same seed always yields the same sequence of piles.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_table::{DECK_SIZE, Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.cards_remaining(), DECK_SIZE);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let pile = Self::shuffled_pile(options.shuffle_passes, &mut rng);

        Self {
            pile,
            options,
            state: GameState::WaitingForDeal,
            player: CardCollection::new(),
            dealer: CardCollection::new(),
            rng,
        }
    }

    /// Builds a full set and shuffles it.
    fn shuffled_pile(passes: usize, rng: &mut ChaCha8Rng) -> CardCollection {
        let mut pile = CardCollection::standard();
        pile.shuffle(passes, rng);
        pile
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the number of cards left in the pile.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.pile.len()
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &CardCollection {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &CardCollection {
        &self.dealer
    }

    /// Returns the player's total.
    #[must_use]
    pub fn player_value(&self) -> u8 {
        hand_value(&self.player)
    }

    /// Returns the dealer's total.
    #[must_use]
    pub fn dealer_value(&self) -> u8 {
        hand_value(&self.dealer)
    }

    /// Renders both hands, player first.
    ///
    /// Until `reveal_dealer` is set only the dealer's first card is shown.
    #[must_use]
    pub fn render_table(&self, reveal_dealer: bool) -> String {
        let dealer_view = if reveal_dealer {
            HandView::Revealed
        } else {
            HandView::Masked
        };

        format!(
            "player: {}\n\ndealer: {}",
            render_hand(&self.player, HandView::Revealed),
            render_hand(&self.dealer, dealer_view)
        )
    }

    /// Ends the round and prepares the table for the next deal.
    ///
    /// Hands are emptied. Under [`DeckPolicy::FreshEachRound`] the pile is
    /// replaced with a newly shuffled full set; under [`DeckPolicy::Shared`]
    /// it is left as is.
    pub fn clear_round(&mut self) {
        self.player.clear();
        self.dealer.clear();

        if self.options.deck_policy == DeckPolicy::FreshEachRound {
            self.pile = Self::shuffled_pile(self.options.shuffle_passes, &mut self.rng);
            debug!(cards = self.pile.len(), "pile rebuilt");
        }

        self.state = GameState::WaitingForDeal;
    }
}
