//! Round engine and state management.

use alloc::vec::Vec;

use crate::bankroll::Bankroll;
use crate::card::Card;
use crate::hand::{DealerHand, Hand};
use crate::options::GameOptions;
use crate::result::RoundSnapshot;
use crate::shoe::Shoe;

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use state::GameState;

/// A single-player blackjack round engine.
///
/// The engine owns the shoe, the player and dealer hands, the current bet,
/// and the session bankroll, and is driven through the action methods
/// ([`start_round`], [`hit`], [`stand`], [`double_down`]). Exactly one round
/// is active at a time and every action takes `&mut self`, so re-entrant or
/// concurrent use is ruled out at compile time.
///
/// [`start_round`]: Game::start_round
/// [`hit`]: Game::hit
/// [`stand`]: Game::stand
/// [`double_down`]: Game::double_down
#[derive(Debug)]
pub struct Game {
    /// The dealing shoe.
    pub shoe: Shoe,
    /// Game options.
    pub options: GameOptions,
    /// Current game state.
    state: GameState,
    /// The player's hand.
    player_hand: Hand,
    /// The dealer's hand.
    dealer_hand: DealerHand,
    /// Current bet. Fixed for the round except for one doubling at most.
    bet: usize,
    /// Session bankroll.
    bankroll: Bankroll,
}

impl Game {
    /// Creates a new engine with the given options, starting bankroll, and
    /// shoe seed.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), 1000, 42);
    /// assert_eq!(game.bankroll(), 1000);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, bankroll: usize, seed: u64) -> Self {
        let shoe = Shoe::new(options.decks, seed);

        Self {
            shoe,
            options,
            state: GameState::Idle,
            player_hand: Hand::new(),
            dealer_hand: DealerHand::new(),
            bet: 0,
            bankroll: Bankroll::new(bankroll),
        }
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the current bet (0 outside a round).
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.bet
    }

    /// Returns the current bankroll balance.
    #[must_use]
    pub const fn bankroll(&self) -> usize {
        self.bankroll.balance()
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player_hand
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer_hand
    }

    /// Returns a read-only view of the table.
    ///
    /// The dealer's hole card and total are masked until the dealer acts.
    #[must_use]
    pub fn snapshot(&self) -> RoundSnapshot {
        let hole_revealed = self.dealer_hand.is_hole_revealed();
        let dealer_hand: Vec<Option<Card>> = self
            .dealer_hand
            .cards()
            .iter()
            .enumerate()
            .map(|(i, card)| (hole_revealed || i != 0).then_some(*card))
            .collect();

        RoundSnapshot {
            player_hand: self.player_hand.cards().to_vec(),
            dealer_hand,
            player_value: self.player_hand.value(),
            dealer_value: self.dealer_hand.visible_value(),
            bankroll: self.bankroll.balance(),
            bet: self.bet,
            state: self.state,
        }
    }
}
