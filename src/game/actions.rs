use crate::error::ActionError;
use crate::result::{RoundProgress, RoundResult};

use super::{Game, GameState};

impl Game {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.state == GameState::PlayerTurn {
            Ok(())
        } else {
            Err(ActionError::InvalidState)
        }
    }

    /// Player action: Hit (draw a card).
    ///
    /// Going over 21 settles the round as a bust on the spot; the dealer
    /// never plays against a busted hand. Landing exactly on 21 stands
    /// automatically, since no further action is legal on 21.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is awaiting a player action, or the
    /// shoe is empty.
    pub fn hit(&mut self) -> Result<RoundProgress, ActionError> {
        self.ensure_player_turn()?;

        let card = self.shoe.draw()?;
        self.player_hand.add_card(card);

        let value = self.player_hand.value();
        if value > 21 {
            return Ok(RoundProgress::Settled(self.resolve_player_bust()));
        }
        if value == 21 {
            return Ok(RoundProgress::Settled(self.play_dealer()?));
        }

        Ok(RoundProgress::InPlay(self.snapshot()))
    }

    /// Player action: Stand (keep the current hand).
    ///
    /// Runs the dealer to completion and settles the round.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is awaiting a player action, or the
    /// shoe runs out while the dealer must draw.
    pub fn stand(&mut self) -> Result<RoundResult, ActionError> {
        self.ensure_player_turn()?;
        self.play_dealer()
    }

    /// Player action: Double down (double the bet, draw one card, stand).
    ///
    /// Only available on the first two cards, and only when the bankroll
    /// covers the doubled bet. Exactly one card is drawn regardless of the
    /// result; a bust settles as a bust of the doubled bet, anything else
    /// stands into the dealer's turn.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is awaiting a player action, the hand
    /// has more than two cards, the bankroll cannot cover the doubled bet,
    /// or the shoe is empty. A rejected double leaves the bet unchanged.
    pub fn double_down(&mut self) -> Result<RoundResult, ActionError> {
        self.ensure_player_turn()?;

        if self.player_hand.len() != 2 {
            return Err(ActionError::CannotDouble);
        }
        if !self.bankroll.can_cover(self.bet * 2) {
            return Err(ActionError::InsufficientFunds);
        }

        // Draw before touching the bet so a failure leaves the round as it was.
        let card = self.shoe.draw()?;
        self.bet *= 2;
        self.player_hand.add_card(card);

        if self.player_hand.is_bust() {
            return Ok(self.resolve_player_bust());
        }

        self.play_dealer()
    }
}
