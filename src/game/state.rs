//! Game state types.

/// Game state.
///
/// A round lives from the deal in [`Game::start_round`] until settlement;
/// dealing and dealer play complete inside the action call that triggers
/// them, so `DealerTurn` is only ever observed by code the engine calls
/// while resolving.
///
/// [`Game::start_round`]: super::Game::start_round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// No round active; waiting for a bet.
    Idle,
    /// Waiting for player actions.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
}
