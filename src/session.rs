//! Console session: balance, betting and repeated rounds.
//!
//! A [`Session`] reads from any [`BufRead`] and writes to any [`Write`], so
//! the same loop serves stdin/stdout and in-memory buffers. Every prompt
//! blocks until a line arrives and repeats until the line is valid.

use core::ops::ControlFlow;
use std::io::{BufRead, Write};

use alloc::string::String;

use tracing::{debug, info};

use crate::error::{BetError, SessionError};
use crate::game::{Game, GameState, PlayerAction};
use crate::result::Settlement;

/// Why a session stopped without a fatal error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The player typed `q` or `quit` at the bet prompt.
    Quit,
    /// Input reached end of file.
    InputClosed,
    /// The balance is too low for any legal bet.
    OutOfMoney,
}

/// Checks a typed wager against the current balance.
///
/// The input must consist of ASCII digits only, be above zero and be strictly
/// below `balance`.
///
/// # Errors
///
/// Returns a [`BetError`] describing why the wager was rejected.
///
/// # Example
///
/// ```
/// use blackjack_table::{BetError, parse_bet};
///
/// assert_eq!(parse_bet("25", 100), Ok(25));
/// assert_eq!(parse_bet("ten", 100), Err(BetError::NotANumber));
/// assert_eq!(parse_bet("0", 100), Err(BetError::ZeroBet));
/// ```
pub fn parse_bet(input: &str, balance: usize) -> Result<usize, BetError> {
    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return Err(BetError::NotANumber);
    }

    let bet: usize = input.parse().map_err(|_| BetError::NotANumber)?;

    if bet == 0 {
        return Err(BetError::ZeroBet);
    }
    if bet >= balance {
        return Err(BetError::ExceedsBalance { bet, balance });
    }

    Ok(bet)
}

/// Checks that winning `bet` can be paid on top of `balance`.
///
/// Returns the winnings, `bet * multiplier`.
///
/// # Errors
///
/// Returns [`BetError::PayoutTooLarge`] if the winnings or the new balance
/// do not fit in a `usize`.
pub fn winnings_for(bet: usize, multiplier: usize, balance: usize) -> Result<usize, BetError> {
    bet.checked_mul(multiplier)
        .filter(|winnings| balance.checked_add(*winnings).is_some())
        .ok_or(BetError::PayoutTooLarge { bet })
}

/// A player's session at the table.
#[derive(Debug)]
pub struct Session<R, W> {
    game: Game,
    balance: usize,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Starts a session with the game's configured starting balance.
    pub fn new(game: Game, input: R, output: W) -> Self {
        let balance = game.options.starting_balance;
        Self {
            game,
            balance,
            input,
            output,
        }
    }

    /// Returns the current balance.
    #[must_use]
    pub const fn balance(&self) -> usize {
        self.balance
    }

    /// Returns the game being played.
    #[must_use]
    pub const fn game(&self) -> &Game {
        &self.game
    }

    /// Consumes the session and returns the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Plays rounds until the player quits, input ends or the money runs out.
    ///
    /// # Errors
    ///
    /// Returns a [`SessionError`] on console failure or when the pile runs
    /// out mid-round.
    pub fn run(&mut self) -> Result<SessionEnd, SessionError> {
        loop {
            if let ControlFlow::Break(end) = self.play_round()? {
                info!(?end, balance = self.balance, "session over");
                return Ok(end);
            }
        }
    }

    /// Plays one round: bet, deal, player turn, settlement and payout.
    ///
    /// # Errors
    ///
    /// Returns a [`SessionError`] on console failure or when the pile runs
    /// out mid-round.
    pub fn play_round(&mut self) -> Result<ControlFlow<SessionEnd, Settlement>, SessionError> {
        writeln!(self.output, "\n\nNEW GAME\n\n")?;
        writeln!(self.output, "you have ${} to bet.", self.balance)?;

        if self.balance <= 1 {
            writeln!(self.output, "you are out of money.")?;
            return Ok(ControlFlow::Break(SessionEnd::OutOfMoney));
        }

        let (bet, winnings) = match self.prompt_bet()? {
            ControlFlow::Continue(wager) => wager,
            ControlFlow::Break(end) => return Ok(ControlFlow::Break(end)),
        };
        writeln!(self.output, "you bet {bet}, you are able to win {winnings}.")?;

        if self.game.state() != GameState::WaitingForDeal {
            self.game.clear_round();
        }
        self.game.deal()?;

        while self.game.state() == GameState::PlayerTurn {
            writeln!(self.output, "{}", self.game.render_table(false))?;
            let Some(action) = self.prompt_action()? else {
                return Ok(ControlFlow::Break(SessionEnd::InputClosed));
            };
            self.game.act(action)?;
        }

        let round = self.game.settle()?;
        writeln!(self.output, "final hand:")?;
        writeln!(self.output, "{}", self.game.render_table(true))?;

        let amount = if round.outcome.player_won() {
            self.balance += winnings;
            writeln!(
                self.output,
                "you won ${winnings}! you now have {}",
                self.balance
            )?;
            winnings
        } else {
            self.balance -= bet;
            writeln!(self.output, "you lost ${bet}, you now have {}", self.balance)?;
            bet
        };

        info!(bet, amount, balance = self.balance, "round paid out");
        self.game.clear_round();

        Ok(ControlFlow::Continue(Settlement {
            round,
            bet,
            amount,
            balance: self.balance,
        }))
    }

    /// Writes `prompt` and reads one trimmed line. `None` means end of input.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, SessionError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().into()))
    }

    /// Returns the accepted bet and what it pays on a win.
    fn prompt_bet(&mut self) -> Result<ControlFlow<SessionEnd, (usize, usize)>, SessionError> {
        loop {
            let Some(line) = self.read_line("enter bet amt: $")? else {
                return Ok(ControlFlow::Break(SessionEnd::InputClosed));
            };

            if line == "q" || line == "quit" {
                return Ok(ControlFlow::Break(SessionEnd::Quit));
            }

            let multiplier = self.game.options.win_multiplier;
            let wager = parse_bet(&line, self.balance).and_then(|bet| {
                winnings_for(bet, multiplier, self.balance).map(|winnings| (bet, winnings))
            });
            match wager {
                Ok(wager) => return Ok(ControlFlow::Continue(wager)),
                Err(err) => debug!(%err, "bet rejected"),
            }
        }
    }

    fn prompt_action(&mut self) -> Result<Option<PlayerAction>, SessionError> {
        writeln!(self.output, "you may [hit], [stand]")?;

        loop {
            let Some(line) = self.read_line("> ")? else {
                return Ok(None);
            };

            match line.parse::<PlayerAction>() {
                Ok(action) => return Ok(Some(action)),
                Err(err) => debug!(%err, "action rejected"),
            }
        }
    }
}
