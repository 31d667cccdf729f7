//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when starting a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// A round is already in progress.
    #[error("a round is already in progress")]
    RoundInProgress,
    /// Bet is below the table minimum.
    #[error("bet is below the table minimum")]
    BelowMinimum,
    /// Bet exceeds the bankroll.
    #[error("bet exceeds the bankroll")]
    InsufficientFunds,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// Cannot double down on this hand.
    #[error("cannot double down on this hand")]
    CannotDouble,
    /// Insufficient funds for this action.
    #[error("insufficient funds for this action")]
    InsufficientFunds,
    /// No cards left in the shoe.
    #[error("no cards left in the shoe")]
    EmptyShoe,
}

/// The shoe was empty when a card was requested.
///
/// The round engine rebuilds the shoe before dealing, so this error marks a
/// broken engine invariant rather than a recoverable table condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("the shoe is empty")]
pub struct EmptyShoeError;

impl From<EmptyShoeError> for ActionError {
    fn from(_: EmptyShoeError) -> Self {
        Self::EmptyShoe
    }
}
