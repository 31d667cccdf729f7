use crate::error::BetError;
use crate::result::RoundProgress;

use super::{Game, GameState};

/// Cards consumed by the opening deal.
const INITIAL_DEAL: usize = 4;

impl Game {
    /// Starts a new round with the given bet.
    ///
    /// The shoe is rebuilt first if it has run below the reshuffle
    /// threshold. Two cards are dealt to the player and two to the dealer,
    /// alternating, with the dealer's first card as the face-down hole card.
    /// A player natural resolves the round immediately (checking the
    /// dealer's hole for a matching natural, which is a push); otherwise the
    /// round is left in [`GameState::PlayerTurn`] awaiting an action.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is already in progress, the bet is below
    /// the table minimum, or the bet exceeds the bankroll. A rejected bet
    /// leaves the table untouched.
    #[expect(
        clippy::missing_panics_doc,
        reason = "the rebuild above the opening-deal size guarantees four draws"
    )]
    pub fn start_round(&mut self, bet: usize) -> Result<RoundProgress, BetError> {
        if self.state != GameState::Idle {
            return Err(BetError::RoundInProgress);
        }
        if bet < self.options.minimum_bet {
            return Err(BetError::BelowMinimum);
        }
        if !self.bankroll.can_cover(bet) {
            return Err(BetError::InsufficientFunds);
        }

        // The opening deal must never draw from an exhausted shoe, whatever
        // the configured threshold.
        let threshold = self.options.reshuffle_threshold.max(INITIAL_DEAL);
        if self.shoe.needs_reshuffle(threshold) {
            self.shoe.rebuild();
        }

        self.bet = bet;
        self.player_hand.clear();
        self.dealer_hand.clear();
        self.state = GameState::PlayerTurn;

        // Player, hole card, player, up card.
        for position in 0..INITIAL_DEAL {
            let card = self
                .shoe
                .draw()
                .expect("shoe was rebuilt to cover the opening deal");
            if position % 2 == 0 {
                self.player_hand.add_card(card);
            } else {
                self.dealer_hand.add_card(card);
            }
        }

        if self.player_hand.is_natural() {
            return Ok(RoundProgress::Settled(self.resolve_natural()));
        }

        Ok(RoundProgress::InPlay(self.snapshot()))
    }
}
