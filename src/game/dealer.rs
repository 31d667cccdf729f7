use alloc::vec::Vec;

use crate::card::Card;
use crate::error::ActionError;
use crate::options::RoundingMode;
use crate::result::{HandOutcome, RoundResult};

use super::{Game, GameState};

/// The dealer draws until reaching this total, soft or hard.
const DEALER_STAND: u8 = 17;

#[cfg(feature = "std")]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => amount.ceil() as usize,
        RoundingMode::Down => amount.floor() as usize,
        RoundingMode::Nearest => amount.round() as usize,
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => libm::ceil(amount) as usize,
        RoundingMode::Down => libm::floor(amount) as usize,
        RoundingMode::Nearest => libm::round(amount) as usize,
    }
}

impl Game {
    /// Plays out the dealer's hand and settles the round.
    ///
    /// A two-card dealer 21 is a natural and settles without drawing:
    /// a push against a player natural, a dealer blackjack otherwise.
    /// Failing that, the dealer draws while below 17, re-evaluating after
    /// every card, and stands at 17 or higher regardless of softness.
    pub(super) fn play_dealer(&mut self) -> Result<RoundResult, ActionError> {
        self.state = GameState::DealerTurn;

        if self.dealer_hand.is_natural() {
            let outcome = if self.player_hand.is_natural() {
                HandOutcome::Push
            } else {
                HandOutcome::DealerBlackjack
            };
            return Ok(self.conclude(outcome, Vec::new()));
        }

        let mut draws = Vec::new();
        while self.dealer_hand.value() < DEALER_STAND {
            let card = self.shoe.draw()?;
            self.dealer_hand.add_card(card);
            draws.push(card);
        }

        let outcome = self.compare_hands();
        Ok(self.conclude(outcome, draws))
    }

    /// Settles a round the player opened with a natural.
    ///
    /// The dealer's hole is checked for a matching natural first (a push);
    /// any other dealer hand loses to the natural at the natural's premium,
    /// with no dealer drawing.
    pub(super) fn resolve_natural(&mut self) -> RoundResult {
        self.state = GameState::DealerTurn;

        let outcome = if self.dealer_hand.is_natural() {
            HandOutcome::Push
        } else {
            HandOutcome::Blackjack
        };
        self.conclude(outcome, Vec::new())
    }

    /// Settles a round the player busted out of. The dealer does not play.
    pub(super) fn resolve_player_bust(&mut self) -> RoundResult {
        self.conclude(HandOutcome::Bust, Vec::new())
    }

    /// Derives the outcome by comparison once both sides have stood.
    ///
    /// Used only when no terminal event (natural, player bust) already
    /// forced the category, so every trigger resolves through the same
    /// table of outcomes.
    fn compare_hands(&self) -> HandOutcome {
        let dealer_value = self.dealer_hand.value();
        if dealer_value > 21 {
            return HandOutcome::DealerBust;
        }

        let player_value = self.player_hand.value();
        if player_value > dealer_value {
            HandOutcome::Win
        } else if player_value < dealer_value {
            HandOutcome::Lose
        } else {
            HandOutcome::Push
        }
    }

    /// Returns the signed bankroll delta for an outcome at the current bet.
    #[expect(
        clippy::cast_possible_wrap,
        reason = "payout values fit in isize"
    )]
    fn settlement_delta(&self, outcome: HandOutcome) -> isize {
        let bet = self.bet as isize;
        match outcome {
            HandOutcome::Blackjack => {
                #[expect(
                    clippy::cast_precision_loss,
                    reason = "f64 has sufficient precision for monetary values"
                )]
                let winnings = (self.bet as f64) * self.options.blackjack_pays;
                round_amount(winnings, self.options.rounding_blackjack) as isize
            }
            HandOutcome::Win | HandOutcome::DealerBust => bet,
            HandOutcome::Lose | HandOutcome::Bust | HandOutcome::DealerBlackjack => -bet,
            HandOutcome::Push => 0,
        }
    }

    /// The single terminal path: reveals the hole card, settles the bankroll
    /// exactly once, and returns the machine to [`GameState::Idle`].
    ///
    /// The hands stay on the table for display until the next round clears
    /// them.
    fn conclude(&mut self, outcome: HandOutcome, dealer_draws: Vec<Card>) -> RoundResult {
        self.dealer_hand.reveal_hole();

        let bankroll_delta = self.settlement_delta(outcome);
        let new_bankroll = self.bankroll.settle(bankroll_delta);

        let result = RoundResult {
            outcome,
            bet: self.bet,
            player_value: self.player_hand.value(),
            dealer_value: self.dealer_hand.value(),
            dealer_draws,
            bankroll_delta,
            new_bankroll,
        };

        self.bet = 0;
        self.state = GameState::Idle;

        result
    }
}
