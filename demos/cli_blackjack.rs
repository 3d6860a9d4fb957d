//! CLI blackjack example.

use std::io;
use std::time::{SystemTime, UNIX_EPOCH};

use structopt::StructOpt;
use tracing_subscriber::EnvFilter;

use blackjack_table::{DeckPolicy, Game, GameOptions, Session, SessionEnd};

#[derive(Debug, StructOpt)]
#[structopt(name = "cli_blackjack", about = "Play blackjack against the house.")]
struct Opt {
    /// Seed for the shuffle; defaults to the current time.
    #[structopt(long)]
    seed: Option<u64>,
    /// Starting balance.
    #[structopt(long, default_value = "100")]
    balance: usize,
    /// Shuffle passes over a fresh pile.
    #[structopt(long, default_value = "3")]
    shuffle_passes: usize,
    /// Keep one pile for the whole session instead of a fresh one per round.
    #[structopt(long)]
    shared_pile: bool,
}

fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let opt = Opt::from_args();

    let seed = opt.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    let policy = if opt.shared_pile {
        DeckPolicy::Shared
    } else {
        DeckPolicy::FreshEachRound
    };
    let options = GameOptions::default()
        .with_starting_balance(opt.balance)
        .with_shuffle_passes(opt.shuffle_passes)
        .with_deck_policy(policy);

    let game = Game::new(options, seed);
    let mut session = Session::new(game, io::stdin().lock(), io::stdout());

    match session.run()? {
        SessionEnd::Quit => println!("Goodbye."),
        SessionEnd::InputClosed => println!(),
        SessionEnd::OutOfMoney => println!("Game over."),
    }

    Ok(())
}
