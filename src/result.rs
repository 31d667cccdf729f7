//! Round outcome and snapshot types.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::game::GameState;

/// Terminal outcome of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandOutcome {
    /// Player has a natural and the dealer does not; pays extra.
    Blackjack,
    /// Player beats the dealer's final total.
    Win,
    /// Dealer beats the player's final total.
    Lose,
    /// Tie; the bet is returned.
    Push,
    /// Player went over 21.
    Bust,
    /// Dealer went over 21.
    DealerBust,
    /// Dealer has a natural and the player does not.
    DealerBlackjack,
}

/// Settled result of a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// The outcome category.
    pub outcome: HandOutcome,
    /// The bet the round settled at (doubled if the player doubled down).
    pub bet: usize,
    /// The player's final hand value.
    pub player_value: u8,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Cards the dealer drew beyond the initial two, in draw order.
    ///
    /// A presentation layer can replay these at its own cadence; the engine
    /// resolves the round synchronously.
    pub dealer_draws: Vec<Card>,
    /// Signed bankroll change (positive = profit).
    pub bankroll_delta: isize,
    /// Bankroll after settlement.
    pub new_bankroll: usize,
}

/// Read-only view of the table mid-round.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundSnapshot {
    /// The player's cards, in deal order.
    pub player_hand: Vec<Card>,
    /// The dealer's cards; `None` marks the face-down hole card.
    pub dealer_hand: Vec<Option<Card>>,
    /// The player's hand value.
    pub player_value: u8,
    /// The dealer's total; `None` while the hole card is hidden.
    pub dealer_value: Option<u8>,
    /// Current bankroll.
    pub bankroll: usize,
    /// Current bet (0 outside a round).
    pub bet: usize,
    /// Current game state.
    pub state: GameState,
}

/// What an action left behind: a round still in play, or a settled result.
#[derive(Debug, Clone, PartialEq)]
pub enum RoundProgress {
    /// The round continues; the player may act.
    InPlay(RoundSnapshot),
    /// The action resolved the round.
    Settled(RoundResult),
}

impl RoundProgress {
    /// Returns the settled result, if the round resolved.
    #[must_use]
    pub fn settled(self) -> Option<RoundResult> {
        match self {
            Self::InPlay(_) => None,
            Self::Settled(result) => Some(result),
        }
    }
}
