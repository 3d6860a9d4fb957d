//! Game integration tests.

use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use blackjack_table::{
    ActionError, Card, CardCollection, CardError, CollectionError, DECK_SIZE, DealError,
    DeckPolicy, Game, GameOptions, GameState, HandView, PlayerAction, Rank, RoundOutcome,
    ShowdownError, Suit, hand_value, is_bust, render_hand, resolve, value_of_symbol,
};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn cards(ranks: &[Rank]) -> Vec<Card> {
    ranks
        .iter()
        .enumerate()
        .map(|(i, &rank)| card(Suit::ALL[i % 4], rank))
        .collect()
}

fn set_pile_from_draws(game: &mut Game, draws: &[Card]) {
    game.pile = CardCollection::from(draws.to_vec());
}

#[test]
fn hand_value_without_aces_sums_faces() {
    use Rank::*;

    assert_eq!(hand_value(&cards(&[Two, Seven, Ten])), 19);
    assert_eq!(hand_value(&cards(&[Jack, Five])), 15);
    assert_eq!(hand_value(&cards(&[King, Queen])), 20);
    assert_eq!(hand_value(&cards(&[King, Queen, Two])), 22);
    assert!(is_bust(&cards(&[King, Queen, Two])));
    assert!(!is_bust(&cards(&[King, Queen])));
    assert_eq!(hand_value(&Vec::<Card>::new()), 0);
}

#[test]
fn hand_value_picks_ace_values() {
    use Rank::*;

    assert_eq!(hand_value(&cards(&[Ace])), 11);
    assert_eq!(hand_value(&cards(&[Ace, Ace])), 12);
    assert_eq!(hand_value(&cards(&[Ace, Nine, Ace])), 21);
    assert_eq!(hand_value(&cards(&[Ace, King])), 21);
    assert_eq!(hand_value(&cards(&[Ace, Five, King])), 16);
    assert_eq!(hand_value(&cards(&[Ace, Ace, Ace, Ace])), 14);
    assert_eq!(hand_value(&cards(&[Ace, Ace, King, Queen])), 22);
}

#[test]
fn card_values_and_unknown_ranks() {
    let pile = CardCollection::new();

    assert_eq!(pile.value_of(&card(Suit::Hearts, Rank::Five), true), 5);
    assert_eq!(pile.value_of(&card(Suit::Hearts, Rank::King), true), 10);
    assert_eq!(pile.value_of(&card(Suit::Hearts, Rank::Ace), true), 11);
    assert_eq!(pile.value_of(&card(Suit::Hearts, Rank::Ace), false), 1);

    assert_eq!(value_of_symbol("5", true), Ok(5));
    assert_eq!(value_of_symbol("10", false), Ok(10));
    assert_eq!(
        value_of_symbol("Z", true),
        Err(CardError::UnknownRank("Z".to_string()))
    );
    assert!(value_of_symbol("1", true).is_err());
}

#[test]
fn cards_print_and_parse() {
    let ten = card(Suit::Diamonds, Rank::Ten);
    assert_eq!(ten.to_string(), "♦10");
    assert_eq!("♦10".parse::<Card>(), Ok(ten));
    assert_eq!("♠A".parse::<Card>(), Ok(card(Suit::Spades, Rank::Ace)));
    assert_eq!(
        "X5".parse::<Card>(),
        Err(CardError::UnknownSuit("X".to_string()))
    );
    assert_eq!(
        "♣1".parse::<Card>(),
        Err(CardError::UnknownRank("1".to_string()))
    );
}

#[test]
fn standard_set_has_each_card_once() {
    let pile = CardCollection::standard();
    let unique: HashSet<Card> = pile.iter().copied().collect();

    assert_eq!(pile.len(), DECK_SIZE);
    assert_eq!(unique.len(), DECK_SIZE);
    assert_eq!(pile.iter().next(), Some(&card(Suit::Spades, Rank::Two)));
}

#[test]
fn draw_takes_from_front_and_fails_when_empty() {
    let mut pile = CardCollection::new();
    assert_eq!(pile.draw(), Err(CollectionError::Empty));

    pile.add(card(Suit::Hearts, Rank::Two));
    pile.add(card(Suit::Clubs, Rank::Three));
    assert_eq!(pile.len(), 2);

    assert_eq!(pile.draw(), Ok(card(Suit::Hearts, Rank::Two)));
    assert_eq!(pile.draw(), Ok(card(Suit::Clubs, Rank::Three)));
    assert!(pile.is_empty());
    assert_eq!(pile.draw(), Err(CollectionError::Empty));
}

#[test]
fn snapshot_is_independent() {
    let mut pile = CardCollection::standard();
    let mut copy = pile.snapshot();

    copy.clear();
    assert_eq!(pile.len(), DECK_SIZE);

    let snapshot = pile.snapshot();
    let first = pile.draw().unwrap();
    assert_eq!(snapshot.len(), DECK_SIZE);
    assert_eq!(snapshot[0], first);
}

#[test]
fn shuffle_keeps_every_card_and_is_seeded() {
    let mut untouched = CardCollection::standard();
    untouched.shuffle(0, &mut ChaCha8Rng::seed_from_u64(1));
    assert_eq!(untouched, CardCollection::standard());

    let mut a = CardCollection::standard();
    let mut b = CardCollection::standard();
    a.shuffle(3, &mut ChaCha8Rng::seed_from_u64(5));
    b.shuffle(3, &mut ChaCha8Rng::seed_from_u64(5));
    assert_eq!(a, b);
    assert_ne!(a, CardCollection::standard());

    let unique: HashSet<Card> = a.iter().copied().collect();
    assert_eq!(a.len(), DECK_SIZE);
    assert_eq!(unique.len(), DECK_SIZE);

    let mut empty = CardCollection::new();
    empty.shuffle(3, &mut ChaCha8Rng::seed_from_u64(5));
    assert!(empty.is_empty());
}

#[test]
fn deal_moves_cards_without_loss() {
    let mut game = Game::new(GameOptions::default(), 7);
    assert_eq!(game.cards_remaining(), DECK_SIZE);

    game.deal().unwrap();
    assert_eq!(game.state(), GameState::PlayerTurn);
    assert_eq!(game.cards_remaining(), 48);
    assert_eq!(game.player_hand().len(), 2);
    assert_eq!(game.dealer_hand().len(), 2);

    let all: HashSet<Card> = game
        .pile
        .iter()
        .chain(game.player_hand())
        .chain(game.dealer_hand())
        .copied()
        .collect();
    assert_eq!(all.len(), DECK_SIZE);
}

#[test]
fn deal_alternates_player_and_dealer() {
    let mut game = Game::new(GameOptions::default(), 1);
    set_pile_from_draws(
        &mut game,
        &[
            card(Suit::Hearts, Rank::Two),    // player
            card(Suit::Clubs, Rank::Three),   // dealer up
            card(Suit::Spades, Rank::Four),   // player
            card(Suit::Diamonds, Rank::Five), // dealer hole
            card(Suit::Hearts, Rank::Six),
        ],
    );

    game.deal().unwrap();
    assert_eq!(
        game.player_hand().snapshot(),
        vec![card(Suit::Hearts, Rank::Two), card(Suit::Spades, Rank::Four)]
    );
    assert_eq!(
        game.dealer_hand().snapshot(),
        vec![
            card(Suit::Clubs, Rank::Three),
            card(Suit::Diamonds, Rank::Five)
        ]
    );
    assert_eq!(game.cards_remaining(), 1);
}

#[test]
fn same_seed_same_pile() {
    let a = Game::new(GameOptions::default(), 9);
    let b = Game::new(GameOptions::default(), 9);
    let c = Game::new(GameOptions::default(), 10);

    assert_eq!(a.pile, b.pile);
    assert_ne!(a.pile, c.pile);
}

#[test]
fn resolve_player_bust_loses_without_dealer_draw() {
    use Rank::*;

    let mut pile = CardCollection::from(cards(&[Two, Three]));
    let player = CardCollection::from(cards(&[King, Queen, Two]));
    let mut dealer = CardCollection::from(cards(&[Ten, Eight]));

    assert!(!resolve(&mut pile, &player, &mut dealer, 17).unwrap());
    assert_eq!(pile.len(), 2);
    assert_eq!(dealer.len(), 2);
}

#[test]
fn resolve_dealer_draws_then_stands() {
    use Rank::*;

    let mut pile = CardCollection::from(cards(&[Three, Nine]));
    let player = CardCollection::from(cards(&[King, Queen]));
    let mut dealer = CardCollection::from(cards(&[Ten, Six]));

    // 16 + 3 = 19, below the player's 20.
    assert!(resolve(&mut pile, &player, &mut dealer, 17).unwrap());
    assert_eq!(hand_value(&dealer), 19);
    assert_eq!(pile.len(), 1);
}

#[test]
fn resolve_tie_goes_to_dealer() {
    use Rank::*;

    let mut pile = CardCollection::from(cards(&[Two]));
    let player = CardCollection::from(cards(&[King, Nine]));
    let mut dealer = CardCollection::from(cards(&[Ten, Seven]));

    // The dealer also hits a 17.
    assert!(!resolve(&mut pile, &player, &mut dealer, 17).unwrap());
    assert_eq!(hand_value(&dealer), 19);
    assert!(pile.is_empty());
}

#[test]
fn resolve_dealer_bust_pays_player() {
    use Rank::*;

    let mut pile = CardCollection::from(cards(&[King]));
    let player = CardCollection::from(cards(&[Two, Three]));
    let mut dealer = CardCollection::from(cards(&[Ten, Six]));

    assert!(resolve(&mut pile, &player, &mut dealer, 17).unwrap());
    assert_eq!(hand_value(&dealer), 26);
}

#[test]
fn resolve_dealer_stands_above_threshold() {
    use Rank::*;

    let mut pile = CardCollection::from(cards(&[Two]));
    let player = CardCollection::from(cards(&[King, Seven]));
    let mut dealer = CardCollection::from(cards(&[Ten, Eight]));

    assert!(!resolve(&mut pile, &player, &mut dealer, 17).unwrap());
    assert_eq!(pile.len(), 1);
}

#[test]
fn resolve_fails_on_empty_pile() {
    use Rank::*;

    let mut pile = CardCollection::new();
    let player = CardCollection::from(cards(&[King, Seven]));
    let mut dealer = CardCollection::from(cards(&[Ten, Two]));

    assert_eq!(
        resolve(&mut pile, &player, &mut dealer, 17),
        Err(CollectionError::Empty)
    );
}

#[test]
fn dealer_draws_only_at_or_below_seventeen() {
    for seed in 0..200 {
        let mut game = Game::new(GameOptions::default(), seed);
        game.deal().unwrap();
        game.stand().unwrap();
        let result = game.settle().unwrap();

        let dealer = game.dealer_hand().snapshot();
        for len in 2..dealer.len() {
            assert!(hand_value(&dealer[..len]) <= 17, "seed {seed}");
        }
        assert!(hand_value(&dealer) > 17, "seed {seed}");
        assert_eq!(result.dealer_drawn.len(), dealer.len() - 2);
        assert_eq!(result.dealer_value, hand_value(&dealer));
    }
}

#[test]
fn hit_to_bust_ends_turn_and_loses() {
    let mut game = Game::new(GameOptions::default(), 3);
    set_pile_from_draws(
        &mut game,
        &[
            card(Suit::Hearts, Rank::King),   // player
            card(Suit::Clubs, Rank::Five),    // dealer up
            card(Suit::Spades, Rank::Queen),  // player
            card(Suit::Diamonds, Rank::Six),  // dealer hole
            card(Suit::Hearts, Rank::Five),   // hit
            card(Suit::Clubs, Rank::Ten),     // never drawn
        ],
    );

    game.deal().unwrap();
    let drawn = game.hit().unwrap();
    assert_eq!(drawn, card(Suit::Hearts, Rank::Five));
    assert_eq!(game.player_value(), 25);
    assert_eq!(game.state(), GameState::DealerTurn);
    assert_eq!(game.hit().unwrap_err(), ActionError::InvalidState);

    let result = game.settle().unwrap();
    assert_eq!(result.outcome, RoundOutcome::DealerWins);
    assert!(result.player_bust);
    assert!(result.dealer_drawn.is_empty());
    assert_eq!(result.dealer_value, 11);
    assert_eq!(game.state(), GameState::RoundOver);
}

#[test]
fn hit_below_bust_keeps_turn() {
    let mut game = Game::new(GameOptions::default(), 3);
    set_pile_from_draws(
        &mut game,
        &[
            card(Suit::Hearts, Rank::Two),
            card(Suit::Clubs, Rank::Ten),
            card(Suit::Spades, Rank::Three),
            card(Suit::Diamonds, Rank::Nine),
            card(Suit::Hearts, Rank::Four),
        ],
    );

    game.deal().unwrap();
    assert_eq!(
        game.act(PlayerAction::Hit).unwrap(),
        Some(card(Suit::Hearts, Rank::Four))
    );
    assert_eq!(game.state(), GameState::PlayerTurn);
    assert_eq!(game.hit().unwrap_err(), ActionError::NoCards);
    assert_eq!(game.act(PlayerAction::Stand).unwrap(), None);
    assert_eq!(game.state(), GameState::DealerTurn);
}

#[test]
fn settle_reports_dealer_draws() {
    let mut game = Game::new(GameOptions::default(), 3);
    set_pile_from_draws(
        &mut game,
        &[
            card(Suit::Hearts, Rank::King),
            card(Suit::Clubs, Rank::Ten),
            card(Suit::Spades, Rank::Queen),
            card(Suit::Diamonds, Rank::Six),
            card(Suit::Hearts, Rank::Three),
        ],
    );

    game.deal().unwrap();
    game.stand().unwrap();
    let result = game.settle().unwrap();
    assert_eq!(result.outcome, RoundOutcome::PlayerWins);
    assert_eq!(result.player_value, 20);
    assert_eq!(result.dealer_value, 19);
    assert_eq!(result.dealer_drawn, vec![card(Suit::Hearts, Rank::Three)]);
}

#[test]
fn settle_fails_when_pile_runs_out() {
    let mut game = Game::new(GameOptions::default(), 3);
    set_pile_from_draws(
        &mut game,
        &[
            card(Suit::Hearts, Rank::King),
            card(Suit::Clubs, Rank::Ten),
            card(Suit::Spades, Rank::Queen),
            card(Suit::Diamonds, Rank::Two),
        ],
    );

    game.deal().unwrap();
    game.stand().unwrap();
    assert_eq!(game.settle().unwrap_err(), ShowdownError::NoCards);
}

#[test]
fn actions_reject_wrong_state() {
    let mut game = Game::new(GameOptions::default(), 1);
    assert_eq!(game.hit().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.stand().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.settle().unwrap_err(), ShowdownError::InvalidState);

    game.deal().unwrap();
    assert_eq!(game.deal().unwrap_err(), DealError::InvalidState);
    assert_eq!(game.settle().unwrap_err(), ShowdownError::InvalidState);
}

#[test]
fn fresh_policy_rebuilds_pile_each_round() {
    let mut game = Game::new(GameOptions::default(), 11);
    game.deal().unwrap();
    game.stand().unwrap();
    game.settle().unwrap();

    game.clear_round();
    assert_eq!(game.state(), GameState::WaitingForDeal);
    assert_eq!(game.cards_remaining(), DECK_SIZE);
    assert!(game.player_hand().is_empty());
    assert!(game.dealer_hand().is_empty());
}

#[test]
fn shared_policy_depletes_one_pile() {
    let options = GameOptions::default().with_deck_policy(DeckPolicy::Shared);
    let mut game = Game::new(options, 11);
    game.deal().unwrap();
    game.stand().unwrap();
    game.settle().unwrap();
    let remaining = game.cards_remaining();
    assert!(remaining <= 48);

    game.clear_round();
    assert_eq!(game.cards_remaining(), remaining);

    game.deal().unwrap();
    assert_eq!(game.cards_remaining(), remaining - 4);
    assert_eq!(game.player_hand().len(), 2);
    assert_eq!(game.dealer_hand().len(), 2);
}

#[test]
fn shared_pile_exhaustion_is_fatal() {
    use Rank::*;

    let options = GameOptions::default().with_deck_policy(DeckPolicy::Shared);
    let mut game = Game::new(options, 2);
    set_pile_from_draws(&mut game, &cards(&[King, Ten, Queen, Eight, Two]));

    game.deal().unwrap();
    game.stand().unwrap();
    game.settle().unwrap();
    game.clear_round();

    assert_eq!(game.cards_remaining(), 1);
    assert_eq!(game.deal().unwrap_err(), DealError::NotEnoughCards);
}

#[test]
fn dealer_threshold_is_configurable() {
    use Rank::*;

    let options = GameOptions::default().with_dealer_hits_through(16);
    let mut game = Game::new(options, 4);
    set_pile_from_draws(&mut game, &cards(&[King, Ten, Queen, Seven, Four]));

    game.deal().unwrap();
    game.stand().unwrap();
    let result = game.settle().unwrap();
    assert!(result.dealer_drawn.is_empty());
    assert_eq!(result.dealer_value, 17);
    assert_eq!(result.outcome, RoundOutcome::PlayerWins);
}

#[test]
fn hands_render_with_mask() {
    let hand = vec![
        card(Suit::Spades, Rank::Ace),
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Clubs, Rank::Two),
    ];

    assert_eq!(render_hand(&hand, HandView::Revealed), "♠A ♥10 ♣2 ");
    assert_eq!(render_hand(&hand, HandView::Masked), "♠A ?? ?? ");
    assert_eq!(render_hand(&Vec::<Card>::new(), HandView::Masked), "");
}

#[test]
fn table_masks_dealer_until_revealed() {
    let mut game = Game::new(GameOptions::default(), 3);
    set_pile_from_draws(
        &mut game,
        &[
            card(Suit::Hearts, Rank::King),
            card(Suit::Clubs, Rank::Ten),
            card(Suit::Spades, Rank::Queen),
            card(Suit::Diamonds, Rank::Eight),
        ],
    );
    game.deal().unwrap();

    assert_eq!(game.render_table(false), "player: ♥K ♠Q \n\ndealer: ♣10 ?? ");
    assert_eq!(game.render_table(true), "player: ♥K ♠Q \n\ndealer: ♣10 ♦8 ");
}

#[test]
fn player_actions_parse_exact_tokens() {
    assert_eq!("hit".parse::<PlayerAction>(), Ok(PlayerAction::Hit));
    assert_eq!("stand".parse::<PlayerAction>(), Ok(PlayerAction::Stand));
    assert!("Hit".parse::<PlayerAction>().is_err());
    assert!("h".parse::<PlayerAction>().is_err());
    assert!("".parse::<PlayerAction>().is_err());
}
