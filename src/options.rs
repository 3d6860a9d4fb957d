//! Game configuration options.

/// What happens to the draw pile between rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DeckPolicy {
    /// A full pile is built and shuffled at the start of every round.
    #[default]
    FreshEachRound,
    /// One pile is built when the game is created and shared by every round.
    ///
    /// It is never reshuffled, so a long session eventually runs out of
    /// cards and the next draw fails.
    Shared,
}

/// Configuration options for a blackjack game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use blackjack_table::{DeckPolicy, GameOptions};
///
/// let options = GameOptions::default()
///     .with_starting_balance(250)
///     .with_shuffle_passes(5)
///     .with_deck_policy(DeckPolicy::Shared);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Balance the player starts a session with.
    pub starting_balance: usize,
    /// Number of shuffle passes over a fresh pile.
    pub shuffle_passes: usize,
    /// The dealer keeps drawing while its total is at or below this value.
    pub dealer_hits_through: u8,
    /// Pile handling between rounds.
    pub deck_policy: DeckPolicy,
    /// Amount added to the balance on a win, as a multiple of the bet.
    pub win_multiplier: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            starting_balance: 100,
            shuffle_passes: 3,
            dealer_hits_through: 17,
            deck_policy: DeckPolicy::FreshEachRound,
            win_multiplier: 2,
        }
    }
}

impl GameOptions {
    /// Sets the starting balance.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_table::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_balance(500);
    /// assert_eq!(options.starting_balance, 500);
    /// ```
    #[must_use]
    pub const fn with_starting_balance(mut self, balance: usize) -> Self {
        self.starting_balance = balance;
        self
    }

    /// Sets the number of shuffle passes.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_table::GameOptions;
    ///
    /// let options = GameOptions::default().with_shuffle_passes(7);
    /// assert_eq!(options.shuffle_passes, 7);
    /// ```
    #[must_use]
    pub const fn with_shuffle_passes(mut self, passes: usize) -> Self {
        self.shuffle_passes = passes;
        self
    }

    /// Sets the total at or below which the dealer draws.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_table::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_hits_through(16);
    /// assert_eq!(options.dealer_hits_through, 16);
    /// ```
    #[must_use]
    pub const fn with_dealer_hits_through(mut self, total: u8) -> Self {
        self.dealer_hits_through = total;
        self
    }

    /// Sets the pile policy.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_table::{DeckPolicy, GameOptions};
    ///
    /// let options = GameOptions::default().with_deck_policy(DeckPolicy::Shared);
    /// assert_eq!(options.deck_policy, DeckPolicy::Shared);
    /// ```
    #[must_use]
    pub const fn with_deck_policy(mut self, policy: DeckPolicy) -> Self {
        self.deck_policy = policy;
        self
    }

    /// Sets the win multiplier.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_table::GameOptions;
    ///
    /// let options = GameOptions::default().with_win_multiplier(1);
    /// assert_eq!(options.win_multiplier, 1);
    /// ```
    #[must_use]
    pub const fn with_win_multiplier(mut self, multiplier: usize) -> Self {
        self.win_multiplier = multiplier;
        self
    }
}
